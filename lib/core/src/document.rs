use indexmap::IndexMap;
use namedranges_config::RangeConfig;
use namedranges_range::{RangeExpr, RangeIndex};
use ron::{de::SpannedError, ser::PrettyConfig};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::{Error, NamedRanges};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// On disk form of a [NamedRanges]
///
/// ```ron
/// (
///     config: (indexing: 1, right_side_closed: true),
///     ranges: {
///         "header": "1-5",
///         "body": (6, 22),
///     },
/// )
/// ```
pub struct RangeDocument<Idx = i64> {
    #[serde(default)]
    pub config: RangeConfig,
    pub ranges: IndexMap<String, RangeExpr<Idx>>,
}

impl<Idx: RangeIndex + Serialize> RangeDocument<Idx> {
    pub fn save(&self, writer: impl Write) -> Result<(), ron::Error> {
        ron::Options::default().to_io_writer_pretty(
            writer,
            self,
            PrettyConfig::new().struct_names(false),
        )
    }
}

impl<Idx: RangeIndex + for<'de> Deserialize<'de>> RangeDocument<Idx> {
    pub fn load(reader: impl Read) -> Result<Self, SpannedError> {
        ron::de::from_reader(reader)
    }
}

impl<Idx: RangeIndex> TryFrom<RangeDocument<Idx>> for NamedRanges<Idx> {
    type Error = Error;

    fn try_from(document: RangeDocument<Idx>) -> Result<Self, Self::Error> {
        NamedRanges::from_map(document.ranges, document.config)
    }
}

impl<Idx: RangeIndex> From<&NamedRanges<Idx>> for RangeDocument<Idx> {
    fn from(ranges: &NamedRanges<Idx>) -> Self {
        Self {
            config: ranges.config.clone(),
            ranges: ranges
                .ranges
                .iter()
                .map(|(name, interval)| (name.clone(), RangeExpr::from(*interval)))
                .collect(),
        }
    }
}
