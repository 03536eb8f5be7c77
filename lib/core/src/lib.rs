//! Named integer intervals
//!
//! A [NamedRanges] maps unique names to [Interval]s that share one [RangeConfig]. On top of the
//! mapping it can report the uncovered gaps of a window, cut gaps out of its ranges and renumber
//! its ranges from the indexing base.

mod collection;
mod document;
mod gaps;
mod reindex;

pub use collection::NamedRanges;
pub use document::RangeDocument;
pub use gaps::{DefaultGapNamer, GapNamer};
pub use namedranges_config::{Indexing, RangeConfig};
pub use namedranges_range::{
    DEFAULT_SEPARATOR, Interval, RangeExpr, RangeIndex, list_to_ranges, ranges_to_flat_list,
    ranges_to_list,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(
        "Lengths of names and ranges are not the same. `names`: {names} vs. `ranges`: {ranges}"
    )]
    LengthMismatch { names: usize, ranges: usize },
    #[error("{0}")]
    Range(#[from] namedranges_range::Error),
    #[error("{0}")]
    Config(#[from] namedranges_config::Error),
}
