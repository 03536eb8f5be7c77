use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::{
    ContiguousRange, DEFAULT_SEPARATOR, Error, RangeDifference, RangeIndex, RangeIntersection,
};

/// A pair of integer bounds with `start <= end`
///
/// Whether `end` itself is covered is decided by the owning collection, the sweeps in this crate
/// always treat both bounds as inclusive.
///
/// Ordering is by start, then by end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<Idx = i64> {
    start: Idx,
    end: Idx,
}

impl<Idx: RangeIndex> Interval<Idx> {
    pub fn new(start: Idx, end: Idx) -> Result<Self, Error> {
        if start > end {
            return Err(Error::Inverted {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(Self { start, end })
    }

    /// Caller must guarantee `start <= end`
    pub(crate) fn new_unchecked(start: Idx, end: Idx) -> Self {
        debug_assert!(start <= end);

        Self { start, end }
    }

    /// Parses `"<start><separator><end>"`
    ///
    /// The expression must split into exactly two tokens, which is why negative bounds cannot be
    /// written with `-` as the separator.
    pub fn parse(expression: &str, separator: &str) -> Result<Self, Error> {
        let parse_error = || Error::Parse {
            expression: expression.to_string(),
            separator: separator.to_string(),
        };

        if separator.is_empty() {
            return Err(parse_error());
        }

        let mut tokens = expression.split(separator);

        let (Some(start), Some(end), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(parse_error());
        };

        let start = start.trim().parse().map_err(|_| parse_error())?;
        let end = end.trim().parse().map_err(|_| parse_error())?;

        Self::new(start, end)
    }

    #[inline]
    pub fn start(&self) -> Idx {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Idx {
        self.end
    }

    #[inline]
    pub fn as_tuple(&self) -> (Idx, Idx) {
        (self.start, self.end)
    }

    /// Renders the interval with a custom separator
    pub fn to_expression(&self, separator: &str) -> String {
        format!("{}{}{}", self.start, separator, self.end)
    }
}

impl<Idx: RangeIndex> ContiguousRange<Idx> for Interval<Idx> {
    #[inline]
    fn from_start_and_length(start: Idx, length: Idx, right_side_closed: bool) -> Self {
        if right_side_closed {
            Self::new_unchecked(start, start + length.max(Idx::one()) - Idx::one())
        } else {
            Self::new_unchecked(start, start + length)
        }
    }

    #[inline]
    fn length(&self, right_side_closed: bool) -> Idx {
        if right_side_closed {
            self.end - self.start + Idx::one()
        } else {
            self.end - self.start
        }
    }
}

impl<Idx: RangeIndex> RangeIntersection<Idx, Self> for Interval<Idx> {
    type Output = Self;

    #[inline]
    fn intersection(&self, rhs: &Self) -> Option<Self::Output> {
        let start = self.start.max(rhs.start);
        let end = self.end.min(rhs.end);

        (start <= end).then(|| Self::new_unchecked(start, end))
    }

    #[inline]
    fn intersects(&self, rhs: &Self) -> bool {
        rhs.start <= self.end && rhs.end >= self.start
    }
}

impl<Idx: RangeIndex> RangeDifference<Idx, Self> for Interval<Idx> {
    type Output = ArrayVec<Self, 2>;

    /// Pieces of `self` left over once `rhs` is cut out, in ascending order
    #[inline]
    fn difference(&self, rhs: &Self) -> Self::Output {
        let mut result = ArrayVec::new();

        if self.disjoint(rhs) {
            result.push(*self);
            return result;
        }

        let one = Idx::one();

        if rhs.start > self.start {
            result.push(Self::new_unchecked(self.start, rhs.start - one));
        }

        if rhs.end < self.end {
            result.push(Self::new_unchecked(rhs.end + one, self.end));
        }

        result
    }
}

impl<Idx: RangeIndex> From<Interval<Idx>> for (Idx, Idx) {
    fn from(value: Interval<Idx>) -> Self {
        value.as_tuple()
    }
}

impl<Idx: RangeIndex> TryFrom<(Idx, Idx)> for Interval<Idx> {
    type Error = Error;

    fn try_from((start, end): (Idx, Idx)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl<Idx: RangeIndex> Display for Interval<Idx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.start, DEFAULT_SEPARATOR, self.end)
    }
}

impl<Idx: RangeIndex> FromStr for Interval<Idx> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, DEFAULT_SEPARATOR)
    }
}

impl<Idx: RangeIndex + Serialize> Serialize for Interval<Idx> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_tuple().serialize(serializer)
    }
}

impl<'de, Idx: RangeIndex + Deserialize<'de>> Deserialize<'de> for Interval<Idx> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (start, end) = <(Idx, Idx)>::deserialize(deserializer)?;
        Self::new(start, end).map_err(serde::de::Error::custom)
    }
}
