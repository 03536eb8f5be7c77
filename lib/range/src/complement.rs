use itertools::Itertools;

use crate::{Interval, RangeIndex};

/// Maximal gaps of `start..=end` left uncovered by `intervals`
///
/// Intervals are visited in ascending order and the cursor jumps to the end of each visited
/// interval, so overlapping input can hide coverage that a running maximum would keep.
pub fn complement<Idx: RangeIndex>(
    intervals: impl IntoIterator<Item = Interval<Idx>>,
    start: Idx,
    end: Idx,
) -> Vec<Interval<Idx>> {
    let one = Idx::one();
    let mut gaps = Vec::new();
    // First index not covered yet, `None` once coverage reached the top of `Idx`
    let mut uncovered = Some(start);

    for interval in intervals.into_iter().sorted() {
        if let Some(first) = uncovered.filter(|first| interval.start() > *first) {
            gaps.push(Interval::new_unchecked(first, interval.start() - one));
        }

        uncovered = interval.end().checked_add(&one);
    }

    if let Some(first) = uncovered.filter(|first| *first <= end) {
        gaps.push(Interval::new_unchecked(first, end));
    }

    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intervals(bounds: &[(i64, i64)]) -> Vec<Interval> {
        bounds
            .iter()
            .map(|&(start, end)| Interval::new(start, end).unwrap())
            .collect()
    }

    #[test]
    fn contiguous_has_no_gaps() {
        let covered = intervals(&[(1, 5), (6, 22), (23, 26), (27, 38)]);

        assert!(complement(covered, 1, 38).is_empty());
    }

    #[test]
    fn interior_leading_and_trailing_gaps() {
        let covered = intervals(&[(27, 30), (3, 5), (10, 20)]);

        assert_eq!(
            complement(covered, 0, 35),
            intervals(&[(0, 2), (6, 9), (21, 26), (31, 35)])
        );
    }

    #[test]
    fn gaps_follow_previous_end() {
        let covered = intervals(&[(1, 5), (6, 9), (11, 22), (23, 24), (31, 32), (36, 38)]);
        let gaps = complement(covered.clone(), 1, 38);

        assert_eq!(gaps, intervals(&[(10, 10), (25, 30), (33, 35)]));

        for gap in &gaps {
            assert!(covered.iter().any(|c| c.end() + 1 == gap.start()));
        }

        for (a, b) in gaps.iter().tuple_windows() {
            assert!(a.end() < b.start());
        }
    }

    #[test]
    fn empty_input_is_whole_window() {
        assert_eq!(complement(Vec::new(), 4, 9), intervals(&[(4, 9)]));
    }

    #[test]
    fn window_before_coverage() {
        assert!(complement(intervals(&[(0, 10)]), 0, 5).is_empty());
    }

    #[test]
    fn unsigned_window_from_zero() {
        let covered = [(3u32, 5), (8, 12)].map(|(start, end)| Interval::new(start, end).unwrap());

        assert_eq!(
            complement(covered, 0, 14),
            [(0, 2), (6, 7), (13, 14)].map(|(start, end)| Interval::new(start, end).unwrap())
        );
    }

    #[test]
    fn coverage_up_to_index_max() {
        let covered =
            [(0u8, 9), (200, u8::MAX)].map(|(start, end)| Interval::new(start, end).unwrap());

        assert_eq!(
            complement(covered, 0, u8::MAX),
            [Interval::new(10, 199).unwrap()]
        );
    }
}
