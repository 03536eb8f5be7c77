use indexmap::IndexMap;
use namedranges_range::{Interval, RangeDifference, RangeIndex};

use crate::NamedRanges;

/// Names the extra pieces produced when a gap splits a range
///
/// The first surviving piece always keeps the original name, so `index` starts at 1.
pub trait GapNamer<Idx> {
    fn name(&self, original: &str, start: Idx, end: Idx, index: usize) -> String;
}

impl<Idx, F> GapNamer<Idx> for F
where
    F: Fn(&str, Idx, Idx, usize) -> String,
{
    fn name(&self, original: &str, start: Idx, end: Idx, index: usize) -> String {
        self(original, start, end, index)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Names pieces `"{original}-{index}"`
pub struct DefaultGapNamer;

impl<Idx> GapNamer<Idx> for DefaultGapNamer {
    fn name(&self, original: &str, _start: Idx, _end: Idx, index: usize) -> String {
        format!("{original}-{index}")
    }
}

impl<Idx: RangeIndex> NamedRanges<Idx> {
    /// [Self::add_gaps_with] using [DefaultGapNamer]
    pub fn add_gaps(&mut self, gaps: &[Interval<Idx>]) {
        self.add_gaps_with(gaps, DefaultGapNamer);
    }

    /// Cuts every gap out of every range
    ///
    /// Gaps are applied one after another to the pieces left by the previous ones. Ranges with
    /// no surviving piece are removed, extra pieces are named by `namer` and inserted right after
    /// the piece that kept the original name.
    #[tracing::instrument(skip_all)]
    pub fn add_gaps_with(&mut self, gaps: &[Interval<Idx>], namer: impl GapNamer<Idx>) {
        let mut updated = IndexMap::with_capacity(self.ranges.len());

        for (name, range) in &self.ranges {
            let mut pieces = vec![*range];

            for gap in gaps {
                pieces = pieces
                    .into_iter()
                    .flat_map(|piece| piece.difference(gap))
                    .collect();
            }

            if pieces.is_empty() {
                tracing::debug!("Range {} was entirely covered by gaps", name);
            }

            for (index, piece) in pieces.into_iter().enumerate() {
                let piece_name = if index == 0 {
                    name.clone()
                } else {
                    namer.name(name, piece.start(), piece.end(), index)
                };

                updated.insert(piece_name, piece);
            }
        }

        tracing::debug!(
            "Applied {} gaps, {} ranges became {}",
            gaps.len(),
            self.ranges.len(),
            updated.len()
        );

        self.ranges = updated;
    }
}
