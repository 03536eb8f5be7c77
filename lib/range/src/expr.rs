use serde::{Deserialize, Serialize};

use crate::{Error, Interval, RangeIndex};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
/// A range as supplied by a caller, either already numeric or as text like `"1-5"`
pub enum RangeExpr<Idx = i64> {
    Pair(Idx, Idx),
    Text(String),
}

impl<Idx: RangeIndex> RangeExpr<Idx> {
    /// Normalizes the expression, pairs pass through untouched
    pub fn resolve(&self, separator: &str) -> Result<Interval<Idx>, Error> {
        match self {
            RangeExpr::Pair(start, end) => Interval::new(*start, *end),
            RangeExpr::Text(expression) => Interval::parse(expression, separator),
        }
    }
}

impl<Idx> From<(Idx, Idx)> for RangeExpr<Idx> {
    fn from((start, end): (Idx, Idx)) -> Self {
        RangeExpr::Pair(start, end)
    }
}

impl<Idx: RangeIndex> From<Interval<Idx>> for RangeExpr<Idx> {
    fn from(value: Interval<Idx>) -> Self {
        RangeExpr::Pair(value.start(), value.end())
    }
}

impl<Idx> From<&str> for RangeExpr<Idx> {
    fn from(value: &str) -> Self {
        RangeExpr::Text(value.to_string())
    }
}

impl<Idx> From<String> for RangeExpr<Idx> {
    fn from(value: String) -> Self {
        RangeExpr::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_idempotent() {
        let interval = Interval::new(6, 22).unwrap();
        let expr = RangeExpr::from(interval);

        assert_eq!(expr.resolve("-"), Ok(interval));
        assert_eq!(
            RangeExpr::from(expr.resolve("-").unwrap()).resolve("-"),
            Ok(interval)
        );
    }

    #[test]
    fn text_uses_separator() {
        let expr = RangeExpr::<i64>::from("6:22");

        assert_eq!(expr.resolve(":"), Ok(Interval::new(6, 22).unwrap()));
        assert!(matches!(expr.resolve("-"), Err(Error::Parse { .. })));
    }

    #[test]
    fn inverted_pair_is_rejected() {
        assert!(matches!(
            RangeExpr::from((9i64, 1)).resolve("-"),
            Err(Error::Inverted { .. })
        ));
    }
}
