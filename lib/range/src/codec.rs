use rangemap::RangeInclusiveSet;

use crate::{DEFAULT_SEPARATOR, Error, Interval, RangeIndex};

/// Compresses integers into `"start-end"` runs of consecutive values
///
/// A lone value `n` becomes `"n-n"`. Values are coalesced as a set, so duplicates collapse and
/// the output is always ascending.
pub fn list_to_ranges<Idx: RangeIndex>(values: impl IntoIterator<Item = Idx>) -> Vec<String> {
    let runs: RangeInclusiveSet<Idx> = values.into_iter().map(|value| value..=value).collect();

    runs.iter()
        .map(|run| format!("{}{}{}", run.start(), DEFAULT_SEPARATOR, run.end()))
        .collect()
}

/// Expands each `"start-end"` expression into the integers it covers
pub fn ranges_to_list<Idx: RangeIndex>(
    expressions: impl IntoIterator<Item = impl AsRef<str>>,
) -> Result<Vec<Vec<Idx>>, Error> {
    expressions
        .into_iter()
        .map(|expression| {
            let interval = Interval::<Idx>::parse(expression.as_ref(), DEFAULT_SEPARATOR)?;

            Ok(num::range_inclusive(interval.start(), interval.end()).collect())
        })
        .collect()
}

/// Same as [ranges_to_list] but concatenated into one list
pub fn ranges_to_flat_list<Idx: RangeIndex>(
    expressions: impl IntoIterator<Item = impl AsRef<str>>,
) -> Result<Vec<Idx>, Error> {
    Ok(ranges_to_list(expressions)?.into_iter().flatten().collect())
}
