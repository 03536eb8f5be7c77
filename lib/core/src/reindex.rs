use indexmap::IndexMap;
use itertools::Itertools;
use namedranges_range::{ContiguousRange, Interval, RangeIndex};

use crate::NamedRanges;

impl<Idx: RangeIndex> NamedRanges<Idx> {
    /// Renumbers the ranges in place, see [Self::reindexed]
    #[tracing::instrument(skip_all)]
    pub fn reindex(&mut self, keep_gaps: bool) {
        self.ranges = self.reindexed_ranges(keep_gaps);
    }

    /// Copy of the collection with ranges renumbered from the indexing base
    ///
    /// Ranges are laid out in ascending order of their original start and keep their length. With
    /// `keep_gaps` the space between two neighbours is the length of the gap that followed the
    /// first of them in [Self::complement], otherwise neighbours are packed.
    pub fn reindexed(&self, keep_gaps: bool) -> Self {
        Self::from_parts(self.reindexed_ranges(keep_gaps), self.config.clone())
    }

    fn reindexed_ranges(&self, keep_gaps: bool) -> IndexMap<String, Interval<Idx>> {
        let closed = self.config.right_side_closed();
        let one = Idx::one();

        let gaps = if keep_gaps {
            self.complement(None, None)
        } else {
            Vec::new()
        };
        let mut gaps = gaps.into_iter().peekable();

        let mut next_start = self.config.indexing().base();
        let mut reindexed = IndexMap::with_capacity(self.ranges.len());

        for (name, range) in self.ranges.iter().sorted_by_key(|(_, range)| **range) {
            let renumbered =
                Interval::from_start_and_length(next_start, range.length(closed), closed);
            next_start = renumbered.end().saturating_add(one);

            // Gaps before this boundary belong to earlier, overlapping ranges
            if let Some(boundary) = range.end().checked_add(&one) {
                while gaps.next_if(|gap| gap.start() < boundary).is_some() {}

                if let Some(gap) = gaps.next_if(|gap| gap.start() == boundary) {
                    next_start = next_start.saturating_add(gap.length(true));
                }
            }

            tracing::trace!("Range {} moved from {} to {}", name, range, renumbered);

            reindexed.insert(name.clone(), renumbered);
        }

        reindexed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use namedranges_config::{Indexing, RangeConfig};

    fn closed_one_based() -> RangeConfig {
        RangeConfig::default()
            .with_indexing(Indexing::One)
            .with_right_side_closed(true)
    }

    fn entries(nr: &NamedRanges) -> Vec<(&str, (i64, i64))> {
        nr.items()
            .map(|(name, interval)| (name, interval.as_tuple()))
            .collect()
    }

    #[test]
    fn keeps_gap_lengths() {
        let nr = NamedRanges::<i64>::from_map(
            [("1", (10, 15)), ("2", (21, 30))],
            closed_one_based(),
        )
        .unwrap();

        assert_eq!(entries(&nr.reindexed(true)), [("1", (1, 6)), ("2", (12, 21))]);
    }

    #[test]
    fn packs_without_gaps() {
        let nr = NamedRanges::<i64>::from_map(
            [("1", (10, 15)), ("2", (21, 30))],
            closed_one_based(),
        )
        .unwrap();

        assert_eq!(entries(&nr.reindexed(false)), [("1", (1, 6)), ("2", (7, 16))]);
    }

    #[test]
    fn already_based_is_fixed_point() {
        let nr = NamedRanges::<i64>::from_map([("1", (1, 5)), ("2", (11, 22))], closed_one_based())
            .unwrap();

        assert_eq!(nr.reindexed(true), nr);
    }

    #[test]
    fn in_place_matches_copy() {
        let mut nr = NamedRanges::<i64>::from_map(
            [("1", (10, 15)), ("2", (21, 30))],
            closed_one_based(),
        )
        .unwrap();
        let copy = nr.reindexed(true);
        nr.reindex(true);

        assert_eq!(nr, copy);
        assert_eq!(nr.config(), &closed_one_based());
    }

    #[test]
    fn half_open_lengths() {
        let nr = NamedRanges::<i64>::from_map(
            [("b", (8, 10)), ("a", (2, 5))],
            RangeConfig::default(),
        )
        .unwrap();

        // covered window is 0..=9, gaps are (0, 1) and (6, 7)
        assert_eq!(entries(&nr.reindexed(true)), [("a", (0, 3)), ("b", (6, 8))]);
        assert_eq!(entries(&nr.reindexed(false)), [("a", (0, 3)), ("b", (4, 6))]);
    }

    #[test]
    fn adjacent_ranges_take_no_gap() {
        let nr = NamedRanges::<i64>::from_map(
            [("a", (5, 9)), ("b", (10, 12)), ("c", (20, 21))],
            closed_one_based(),
        )
        .unwrap();
        let reindexed = nr.reindexed(true);

        assert_eq!(
            entries(&reindexed),
            [("a", (1, 5)), ("b", (6, 8)), ("c", (16, 17))]
        );
    }

    #[test]
    fn preserves_lengths_and_gaps() {
        let nr = NamedRanges::<i64>::from_map(
            [("x", (40, 44)), ("y", (3, 9)), ("z", (15, 15)), ("w", (17, 30))],
            closed_one_based(),
        )
        .unwrap();
        let reindexed = nr.reindexed(true);

        let original = nr.values().sorted().collect::<Vec<_>>();
        let renumbered = reindexed.values().sorted().collect::<Vec<_>>();

        for (before, after) in original.iter().zip(&renumbered) {
            assert_eq!(before.length(true), after.length(true));
        }

        let original_pairs = original.iter().tuple_windows();
        let renumbered_pairs = renumbered.iter().tuple_windows();

        for ((a, b), (c, d)) in original_pairs.zip(renumbered_pairs) {
            assert_eq!(b.start() - a.end(), d.start() - c.end());
        }
    }

    #[test]
    fn packed_neighbours_touch() {
        let nr = NamedRanges::<i64>::from_map(
            [("x", (40, 44)), ("y", (3, 9)), ("z", (15, 15))],
            RangeConfig::default(),
        )
        .unwrap();
        let reindexed = nr.reindexed(false);
        let renumbered = reindexed.values().collect::<Vec<_>>();

        for (a, b) in renumbered.iter().tuple_windows() {
            assert_eq!(b.start(), a.end() + 1);
        }
    }

    #[test]
    fn unsigned_keeps_gaps() {
        let nr = NamedRanges::<u32>::from_map(
            [("b", (8, 12)), ("a", (3, 5))],
            RangeConfig::default(),
        )
        .unwrap();
        let reindexed = nr.reindexed(true);

        assert_eq!(reindexed.get("a"), Some(Interval::new(0, 2).unwrap()));
        assert_eq!(reindexed.get("b"), Some(Interval::new(5, 9).unwrap()));
    }

    #[test]
    fn range_ending_at_index_max() {
        let mut nr = NamedRanges::<u8>::from_map(
            [("a", (10, 20)), ("b", (250, u8::MAX))],
            closed_one_based(),
        )
        .unwrap();
        nr.reindex(true);

        assert_eq!(nr.get("a"), Some(Interval::new(1, 11).unwrap()));
        assert_eq!(nr.get("b"), Some(Interval::new(241, 246).unwrap()));
    }

    #[test]
    fn empty_collection() {
        let nr = NamedRanges::<i64>::from_map(
            Vec::<(String, (i64, i64))>::new(),
            RangeConfig::default(),
        )
        .unwrap();

        assert!(nr.reindexed(true).is_empty());
    }
}
