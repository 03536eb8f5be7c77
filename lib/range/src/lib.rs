use num::PrimInt;
use rangemap::StepLite;
use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

mod codec;
mod complement;
mod expr;
mod interval;

pub use codec::{list_to_ranges, ranges_to_flat_list, ranges_to_list};
pub use complement::complement;
pub use expr::RangeExpr;
pub use interval::Interval;

/// Token placed between the start and the end of a textual range expression
pub const DEFAULT_SEPARATOR: &str = "-";

/// Integer types that can bound an [Interval]
pub trait RangeIndex: PrimInt + StepLite + Debug + Display + FromStr + Send + Sync + 'static {}

impl<T> RangeIndex for T where
    T: PrimInt + StepLite + Debug + Display + FromStr + Send + Sync + 'static
{
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Errors raised while building or parsing intervals
pub enum Error {
    #[error("Range start {start} is greater than its end {end}")]
    /// Every interval must satisfy `start <= end`
    Inverted { start: String, end: String },
    #[error("Range expression {expression:?} does not split into two integers on {separator:?}")]
    Parse {
        expression: String,
        separator: String,
    },
}

pub trait ContiguousRange<Idx>: Sized {
    /// Builds a range of `length` elements beginning at `start`
    fn from_start_and_length(start: Idx, length: Idx, right_side_closed: bool) -> Self;

    /// Number of elements covered
    fn length(&self, right_side_closed: bool) -> Idx;
}

pub trait RangeIntersection<Idx, Rhs = Self> {
    type Output;

    fn intersection(&self, rhs: &Rhs) -> Option<Self::Output>;

    fn intersects(&self, rhs: &Rhs) -> bool {
        self.intersection(rhs).is_some()
    }

    fn disjoint(&self, rhs: &Rhs) -> bool {
        !self.intersects(rhs)
    }
}

pub trait RangeDifference<Idx, Rhs = Self> {
    type Output;

    fn difference(&self, rhs: &Rhs) -> Self::Output;
}
