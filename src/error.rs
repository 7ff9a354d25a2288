use std::error::Error;
use std::fmt;

use thiserror::Error;

use crate::lookup::LookupEntry;

/// Rejection reasons for interval construction. All of these are
/// caller-fixable; nothing is retried internally.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("interval bound is NaN or otherwise not comparable")]
    IncomparableBound,
    #[error("empty interval: lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds { lower: String, upper: String },
    #[error("empty interval: both bounds are {bound} but an end is open")]
    OpenPoint { bound: String },
}

/// Two entries whose ranges share at least one point. The offending
/// table is left untouched when this is returned.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlapError<T, U> {
    pub first: LookupEntry<T, U>,
    pub second: LookupEntry<T, U>,
}

impl<T: fmt::Display, U: fmt::Display> fmt::Display for OverlapError<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "overlapping lookup ranges: {} and {}",
            self.first, self.second
        )
    }
}

impl<T, U> Error for OverlapError<T, U>
where
    T: fmt::Debug + fmt::Display,
    U: fmt::Debug + fmt::Display,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Interval;

    #[test]
    fn test_messages() {
        let err = Interval::closed(5.0, 1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "empty interval: lower bound 5 exceeds upper bound 1"
        );

        let overlap = OverlapError {
            first: LookupEntry::new(Interval::closed(0.0, 1.0).unwrap(), 10),
            second: LookupEntry::new(Interval::closed(1.0, 2.0).unwrap(), 20),
        };
        assert_eq!(
            overlap.to_string(),
            "overlapping lookup ranges: [0, 1] => 10 and [1, 2] => 20"
        );
    }
}
