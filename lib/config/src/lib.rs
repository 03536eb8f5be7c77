use namedranges_range::DEFAULT_SEPARATOR;
use num::PrimInt;
use ron::{de::SpannedError, ser::PrettyConfig};
use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;
use std::io::{Read, Write};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Only 0-based or 1-based indexing supported, got: {0}")]
    InvalidIndexing(u8),
    #[error("Range separator cannot be empty")]
    EmptySeparator,
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq, Hash, Default,
)]
#[serde(try_from = "u8", into = "u8")]
/// Where numbering begins when no explicit start is given
pub enum Indexing {
    #[default]
    #[strum(to_string = "0")]
    Zero,
    #[strum(to_string = "1")]
    One,
}

impl Indexing {
    pub fn base<Idx: PrimInt>(self) -> Idx {
        match self {
            Indexing::Zero => Idx::zero(),
            Indexing::One => Idx::one(),
        }
    }
}

impl TryFrom<u8> for Indexing {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Indexing::Zero),
            1 => Ok(Indexing::One),
            other => Err(Error::InvalidIndexing(other)),
        }
    }
}

impl From<Indexing> for u8 {
    fn from(value: Indexing) -> Self {
        match value {
            Indexing::Zero => 0,
            Indexing::One => 1,
        }
    }
}

#[serde_inline_default]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
/// Settings shared by every interval of a collection
pub struct RangeConfig {
    #[serde(default)]
    /// Base used as the default lower bound of windowed operations
    indexing: Indexing,
    #[serde(default)]
    /// Whether `end` is part of an interval
    right_side_closed: bool,
    #[serde_inline_default(DEFAULT_SEPARATOR.to_string())]
    /// Token between start and end in textual range expressions
    separator: String,
    #[serde_inline_default(true)]
    /// Sort and compare by start if set, by end otherwise
    compare_start_when_sorting: bool,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            indexing: Indexing::default(),
            right_side_closed: false,
            separator: DEFAULT_SEPARATOR.to_string(),
            compare_start_when_sorting: true,
        }
    }
}

impl RangeConfig {
    pub fn with_indexing(self, indexing: Indexing) -> Self {
        Self { indexing, ..self }
    }

    pub fn with_right_side_closed(self, right_side_closed: bool) -> Self {
        Self {
            right_side_closed,
            ..self
        }
    }

    pub fn with_separator(self, separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..self
        }
    }

    pub fn with_compare_start_when_sorting(self, compare_start_when_sorting: bool) -> Self {
        Self {
            compare_start_when_sorting,
            ..self
        }
    }

    pub fn indexing(&self) -> Indexing {
        self.indexing
    }

    pub fn right_side_closed(&self) -> bool {
        self.right_side_closed
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn compare_start_when_sorting(&self) -> bool {
        self.compare_start_when_sorting
    }

    /// Checks what the builders cannot enforce
    pub fn validate(&self) -> Result<(), Error> {
        if self.separator.is_empty() {
            return Err(Error::EmptySeparator);
        }

        Ok(())
    }

    pub fn save(&self, writer: impl Write) -> Result<(), ron::Error> {
        ron::Options::default().to_io_writer_pretty(
            writer,
            self,
            PrettyConfig::new().struct_names(false),
        )
    }

    pub fn load(reader: impl Read) -> Result<Self, SpannedError> {
        ron::de::from_reader(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn defaults() {
        let config = RangeConfig::default();

        assert_eq!(config.indexing(), Indexing::Zero);
        assert!(!config.right_side_closed());
        assert_eq!(config.separator(), "-");
        assert!(config.compare_start_when_sorting());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn indexing_is_zero_or_one() {
        for indexing in Indexing::iter() {
            assert_eq!(Indexing::try_from(u8::from(indexing)), Ok(indexing));
        }

        assert_eq!(Indexing::try_from(2), Err(Error::InvalidIndexing(2)));
        assert_eq!(Indexing::One.base::<i64>(), 1);
        assert_eq!(Indexing::Zero.to_string(), "0");
    }

    #[test]
    fn empty_separator_is_invalid() {
        let config = RangeConfig::default().with_separator("");

        assert_eq!(config.validate(), Err(Error::EmptySeparator));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = RangeConfig::load("(indexing: 1)".as_bytes()).unwrap();

        assert_eq!(config, RangeConfig::default().with_indexing(Indexing::One));
    }

    #[test]
    fn out_of_range_indexing_fails_to_load() {
        assert!(RangeConfig::load("(indexing: 3)".as_bytes()).is_err());
    }

    #[test]
    fn save_then_load() {
        let config = RangeConfig::default()
            .with_indexing(Indexing::One)
            .with_right_side_closed(true)
            .with_separator(":")
            .with_compare_start_when_sorting(false);

        let mut buffer = Vec::new();
        config.save(&mut buffer).unwrap();

        assert_eq!(RangeConfig::load(buffer.as_slice()).unwrap(), config);
    }
}
