use indexmap::IndexMap;
use itertools::Itertools;
use namedranges_config::RangeConfig;
use namedranges_range::{Interval, RangeExpr, RangeIndex};
use std::{cmp::Ordering, fmt::Display};

use crate::Error;

#[derive(Debug, Clone)]
/// Unique names mapped to intervals, in insertion order
///
/// Inserting a name twice keeps its first position and the last interval.
pub struct NamedRanges<Idx = i64> {
    pub(crate) ranges: IndexMap<String, Interval<Idx>>,
    pub(crate) config: RangeConfig,
}

impl<Idx: RangeIndex> NamedRanges<Idx> {
    /// Builds a collection from parallel name and range sequences
    ///
    /// Ranges may be pairs, [Interval]s or text split on the configured separator.
    pub fn new<N, R>(names: N, ranges: R, config: RangeConfig) -> Result<Self, Error>
    where
        N: IntoIterator,
        N::IntoIter: ExactSizeIterator,
        N::Item: Into<String>,
        R: IntoIterator,
        R::IntoIter: ExactSizeIterator,
        R::Item: Into<RangeExpr<Idx>>,
    {
        let names = names.into_iter();
        let ranges = ranges.into_iter();

        if names.len() != ranges.len() {
            return Err(Error::LengthMismatch {
                names: names.len(),
                ranges: ranges.len(),
            });
        }

        Self::from_map(names.zip(ranges), config)
    }

    /// Builds a collection from name to range entries
    pub fn from_map<K, R>(
        entries: impl IntoIterator<Item = (K, R)>,
        config: RangeConfig,
    ) -> Result<Self, Error>
    where
        K: Into<String>,
        R: Into<RangeExpr<Idx>>,
    {
        config.validate()?;

        let ranges = entries
            .into_iter()
            .map(|(name, range)| Ok((name.into(), range.into().resolve(config.separator())?)))
            .collect::<Result<IndexMap<_, _>, Error>>()?;

        tracing::trace!("Built a collection of {} named ranges", ranges.len());

        Ok(Self::from_parts(ranges, config))
    }

    pub(crate) fn from_parts(ranges: IndexMap<String, Interval<Idx>>, config: RangeConfig) -> Self {
        Self { ranges, config }
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<Interval<Idx>> {
        self.ranges.get(name).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.ranges.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = Interval<Idx>> + '_ {
        self.ranges.values().copied()
    }

    pub fn items(&self) -> impl Iterator<Item = (&str, Interval<Idx>)> {
        self.ranges
            .iter()
            .map(|(name, interval)| (name.as_str(), *interval))
    }

    pub fn to_map(&self) -> IndexMap<String, Interval<Idx>> {
        self.ranges.clone()
    }

    pub fn to_list(&self) -> Vec<Interval<Idx>> {
        self.values().collect()
    }

    /// Every range rendered as `start<separator>end`
    pub fn to_expressions(&self) -> IndexMap<String, String> {
        self.ranges
            .iter()
            .map(|(name, interval)| {
                (
                    name.clone(),
                    interval.to_expression(self.config.separator()),
                )
            })
            .collect()
    }

    /// Entry with the smallest start, earliest wins on ties
    pub fn first(&self) -> Option<(&str, Interval<Idx>)> {
        self.items().fold(None, |best, candidate| match best {
            Some((_, current)) if candidate.1.start() >= current.start() => best,
            _ => Some(candidate),
        })
    }

    /// Entry with the largest end, earliest wins on ties
    pub fn last(&self) -> Option<(&str, Interval<Idx>)> {
        self.items().fold(None, |best, candidate| match best {
            Some((_, current)) if candidate.1.end() <= current.end() => best,
            _ => Some(candidate),
        })
    }

    /// Entries ordered by start, or by end when the configuration asks for it
    ///
    /// Ties keep insertion order.
    pub fn sorted(&self) -> IndexMap<String, Interval<Idx>> {
        let by_start = self.config.compare_start_when_sorting();

        self.ranges
            .iter()
            .sorted_by_key(|(_, interval)| sort_key(**interval, by_start))
            .map(|(name, interval)| (name.clone(), *interval))
            .collect()
    }

    /// Maximal sub intervals of `start..=end` not covered by any range
    ///
    /// `start` defaults to the indexing base, `end` to the largest end in the collection, pulled
    /// back by one when ranges are half open. An empty collection without an explicit `end` has
    /// no gaps.
    pub fn complement(&self, start: Option<Idx>, end: Option<Idx>) -> Vec<Interval<Idx>> {
        let start = start.unwrap_or_else(|| self.config.indexing().base());

        let Some(end) = end.or_else(|| self.window_end()) else {
            return Vec::new();
        };

        let gaps = namedranges_range::complement(self.values(), start, end);

        tracing::debug!(
            "Found {} gaps between {} and {} across {} ranges",
            gaps.len(),
            start,
            end,
            self.len()
        );

        gaps
    }

    /// [Self::complement] wrapped in a collection named `"0"`, `"1"`, ...
    pub fn complement_ranges(&self, start: Option<Idx>, end: Option<Idx>) -> Self {
        let ranges = self
            .complement(start, end)
            .into_iter()
            .enumerate()
            .map(|(index, gap)| (index.to_string(), gap))
            .collect();

        Self::from_parts(ranges, self.config.clone())
    }

    fn keyed(&self, by_start: bool) -> impl Iterator<Item = (Idx, Interval<Idx>, &str)> {
        self.items()
            .map(move |(name, interval)| (sort_key(interval, by_start), interval, name))
    }

    fn window_end(&self) -> Option<Idx> {
        let (_, last) = self.last()?;

        if self.config.right_side_closed() {
            Some(last.end())
        } else {
            last.end().checked_sub(&Idx::one())
        }
    }
}

fn sort_key<Idx: RangeIndex>(interval: Interval<Idx>, by_start: bool) -> Idx {
    if by_start {
        interval.start()
    } else {
        interval.end()
    }
}

impl<'a, Idx> IntoIterator for &'a NamedRanges<Idx> {
    type Item = (&'a String, &'a Interval<Idx>);
    type IntoIter = indexmap::map::Iter<'a, String, Interval<Idx>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

/// Collections are equal when they share a configuration and hold the same names with the same
/// intervals at the same positions
impl<Idx: RangeIndex> PartialEq for NamedRanges<Idx> {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.ranges.iter().eq(other.ranges.iter())
    }
}

impl<Idx: RangeIndex> Eq for NamedRanges<Idx> {}

/// Entries are compared position by position on the configured sort key, then the whole
/// interval, then the name
///
/// Collections with different configurations are not comparable.
impl<Idx: RangeIndex> PartialOrd for NamedRanges<Idx> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.config != other.config {
            return None;
        }

        let by_start = self.config.compare_start_when_sorting();

        Some(self.keyed(by_start).cmp(other.keyed(by_start)))
    }
}

impl<Idx: RangeIndex> Display for NamedRanges<Idx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.ranges
                .iter()
                .map(|(name, interval)| format!(
                    "{:?}: ({}, {})",
                    name,
                    interval.start(),
                    interval.end()
                ))
                .join(", ")
        )
    }
}
