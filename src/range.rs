use std::cmp::Ordering;
use std::fmt;

use crate::error::IntervalError;

/// A one-dimensional numeric range. Either end may be open, closed, or
/// absent (unbounded on that side).
///
/// Empty intervals cannot be constructed: `new` rejects inverted bounds
/// and point intervals with an open end, so every `Interval` that exists
/// contains at least one value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lower: Option<T>,
    lower_closed: bool,
    upper: Option<T>,
    upper_closed: bool,
}

impl<T: PartialOrd + Copy + fmt::Display> Interval<T> {
    /// General constructor. `None` means unbounded on that side, in which
    /// case the corresponding closedness flag is ignored and normalized
    /// to closed.
    pub fn new(
        lower: Option<T>,
        lower_closed: bool,
        upper: Option<T>,
        upper_closed: bool,
    ) -> Result<Self, IntervalError> {
        for bound in [lower, upper].iter().flatten() {
            if bound.partial_cmp(bound).is_none() {
                return Err(IntervalError::IncomparableBound);
            }
        }
        if let (Some(lo), Some(hi)) = (lower, upper) {
            match lo.partial_cmp(&hi) {
                None => return Err(IntervalError::IncomparableBound),
                Some(Ordering::Greater) => {
                    return Err(IntervalError::InvertedBounds {
                        lower: lo.to_string(),
                        upper: hi.to_string(),
                    });
                }
                Some(Ordering::Equal) if !(lower_closed && upper_closed) => {
                    return Err(IntervalError::OpenPoint {
                        bound: lo.to_string(),
                    });
                }
                _ => {}
            }
        }
        Ok(Interval {
            lower,
            lower_closed: lower.is_none() || lower_closed,
            upper,
            upper_closed: upper.is_none() || upper_closed,
        })
    }

    /// `[lower, upper]`
    pub fn closed(lower: T, upper: T) -> Result<Self, IntervalError> {
        Interval::new(Some(lower), true, Some(upper), true)
    }

    /// `(lower, upper)`
    pub fn open(lower: T, upper: T) -> Result<Self, IntervalError> {
        Interval::new(Some(lower), false, Some(upper), false)
    }

    /// `[lower, upper)`, the usual bucket shape for remap tables.
    pub fn half_open(lower: T, upper: T) -> Result<Self, IntervalError> {
        Interval::new(Some(lower), true, Some(upper), false)
    }

    /// The degenerate interval containing exactly `value`.
    pub fn point(value: T) -> Result<Self, IntervalError> {
        Interval::new(Some(value), true, Some(value), true)
    }

    /// `[lower, +inf)`
    pub fn at_least(lower: T) -> Result<Self, IntervalError> {
        Interval::new(Some(lower), true, None, true)
    }

    /// `(lower, +inf)`
    pub fn greater_than(lower: T) -> Result<Self, IntervalError> {
        Interval::new(Some(lower), false, None, true)
    }

    /// `(-inf, upper]`
    pub fn at_most(upper: T) -> Result<Self, IntervalError> {
        Interval::new(None, true, Some(upper), true)
    }

    /// `(-inf, upper)`
    pub fn less_than(upper: T) -> Result<Self, IntervalError> {
        Interval::new(None, true, Some(upper), false)
    }

    /// The interval containing every value.
    pub fn unbounded() -> Self {
        Interval {
            lower: None,
            lower_closed: true,
            upper: None,
            upper_closed: true,
        }
    }

    pub fn lower(&self) -> Option<T> {
        self.lower
    }

    pub fn is_lower_closed(&self) -> bool {
        self.lower_closed
    }

    pub fn upper(&self) -> Option<T> {
        self.upper
    }

    pub fn is_upper_closed(&self) -> bool {
        self.upper_closed
    }

    /// Whether `x` satisfies the lower constraint. A NaN `x` fails every
    /// bounded constraint.
    pub(crate) fn lower_admits(&self, x: T) -> bool {
        match self.lower {
            None => true,
            Some(lo) => match x.partial_cmp(&lo) {
                Some(Ordering::Greater) => true,
                Some(Ordering::Equal) => self.lower_closed,
                _ => false,
            },
        }
    }

    fn upper_admits(&self, x: T) -> bool {
        match self.upper {
            None => true,
            Some(hi) => match x.partial_cmp(&hi) {
                Some(Ordering::Less) => true,
                Some(Ordering::Equal) => self.upper_closed,
                _ => false,
            },
        }
    }

    pub fn contains(&self, x: T) -> bool {
        self.lower_admits(x) && self.upper_admits(x)
    }

    /// Whether the two point-sets share at least one value, computed from
    /// the bounds alone. `[0, 1)` and `[1, 2]` do not overlap; `[0, 1]`
    /// and `[1, 2]` do, sharing `1`.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.precedes(other) && !other.precedes(self)
    }

    // entirely before `other`, with no shared boundary point
    fn precedes(&self, other: &Self) -> bool {
        match (self.upper, other.lower) {
            (Some(hi), Some(lo)) => match hi.partial_cmp(&lo) {
                Some(Ordering::Less) => true,
                Some(Ordering::Equal) => !(self.upper_closed && other.lower_closed),
                _ => false,
            },
            _ => false,
        }
    }

    /// Total ordering over valid intervals: lower bound first
    /// (unbounded-below sorts before everything), then upper bound
    /// (unbounded-above sorts after everything). At an equal boundary
    /// value a closed end sorts before an open one; that tie-break is a
    /// design choice for deterministic iteration, not something callers
    /// should rely on.
    pub fn ordering(&self, other: &Self) -> Ordering {
        cmp_lower(
            self.lower,
            self.lower_closed,
            other.lower,
            other.lower_closed,
        )
        .then_with(|| {
            cmp_upper(
                self.upper,
                self.upper_closed,
                other.upper,
                other.upper_closed,
            )
        })
    }
}

impl<T: PartialOrd + Copy + fmt::Display> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.ordering(other))
    }
}

fn cmp_lower<T: PartialOrd>(a: Option<T>, a_closed: bool, b: Option<T>, b_closed: bool) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => match x.partial_cmp(&y) {
            // bounds are validated comparable at construction
            Some(Ordering::Equal) | None => closedness_order(a_closed, b_closed),
            Some(ord) => ord,
        },
    }
}

fn cmp_upper<T: PartialOrd>(a: Option<T>, a_closed: bool, b: Option<T>, b_closed: bool) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => match x.partial_cmp(&y) {
            Some(Ordering::Equal) | None => closedness_order(a_closed, b_closed),
            Some(ord) => ord,
        },
    }
}

fn closedness_order(a_closed: bool, b_closed: bool) -> Ordering {
    match (a_closed, b_closed) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lower {
            Some(lo) => write!(f, "{}{}", if self.lower_closed { "[" } else { "(" }, lo)?,
            None => write!(f, "(-inf")?,
        }
        write!(f, ", ")?;
        match &self.upper {
            Some(hi) => write!(f, "{}{}", hi, if self.upper_closed { "]" } else { ")" }),
            None => write!(f, "inf)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntervalError;

    #[test]
    fn test_construction_rejects_empty() {
        assert!(matches!(
            Interval::closed(5.0, 1.0),
            Err(IntervalError::InvertedBounds { .. })
        ));
        assert!(matches!(
            Interval::half_open(3.0, 3.0),
            Err(IntervalError::OpenPoint { .. })
        ));
        assert!(matches!(
            Interval::open(3.0, 3.0),
            Err(IntervalError::OpenPoint { .. })
        ));
        assert!(Interval::point(3.0).is_ok());
    }

    #[test]
    fn test_construction_rejects_nan() {
        assert_eq!(
            Interval::closed(f64::NAN, 1.0),
            Err(IntervalError::IncomparableBound)
        );
        assert_eq!(
            Interval::at_least(f64::NAN),
            Err(IntervalError::IncomparableBound)
        );
    }

    #[test]
    fn test_contains_boundary_semantics() {
        let half_open = Interval::half_open(0.0, 10.0).unwrap();
        assert!(half_open.contains(0.0));
        assert!(half_open.contains(9.0));
        assert!(!half_open.contains(10.0));
        assert!(!half_open.contains(-0.001));

        let open = Interval::open(0.0, 10.0).unwrap();
        assert!(!open.contains(0.0));
        assert!(open.contains(5.0));
        assert!(!open.contains(10.0));

        let point = Interval::point(7.0).unwrap();
        assert!(point.contains(7.0));
        assert!(!point.contains(7.0001));
    }

    #[test]
    fn test_contains_unbounded() {
        let below_zero = Interval::less_than(0.0).unwrap();
        assert!(below_zero.contains(f64::MIN));
        assert!(below_zero.contains(-1e-300));
        assert!(!below_zero.contains(0.0));

        let everything = Interval::<f64>::unbounded();
        assert!(everything.contains(f64::MIN));
        assert!(everything.contains(0.0));
        assert!(everything.contains(f64::MAX));
    }

    #[test]
    fn test_contains_rejects_nan_query() {
        let range = Interval::closed(0.0, 10.0).unwrap();
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn test_overlaps() {
        let a = Interval::half_open(0.0, 1.0).unwrap();
        let b = Interval::closed(1.0, 2.0).unwrap();
        // [0, 1) and [1, 2] share nothing
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        let c = Interval::closed(0.0, 1.0).unwrap();
        // [0, 1] and [1, 2] share exactly 1
        assert!(c.overlaps(&b));
        assert!(b.overlaps(&c));

        let outer = Interval::closed(0.0, 100.0).unwrap();
        let inner = Interval::open(10.0, 20.0).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));

        let everything = Interval::unbounded();
        assert!(everything.overlaps(&a));
        assert!(a.overlaps(&everything));

        let open_touch = Interval::open(1.0, 2.0).unwrap();
        // [0, 1] and (1, 2) share nothing
        assert!(!c.overlaps(&open_touch));
    }

    #[test]
    fn test_ordering() {
        let below = Interval::less_than(0.0).unwrap();
        let low = Interval::half_open(0.0, 10.0).unwrap();
        let high = Interval::closed(10.0, 20.0).unwrap();
        let tail = Interval::greater_than(20.0).unwrap();

        assert_eq!(below.ordering(&low), Ordering::Less);
        assert_eq!(low.ordering(&high), Ordering::Less);
        assert_eq!(high.ordering(&tail), Ordering::Less);
        assert_eq!(tail.ordering(&below), Ordering::Greater);
        assert_eq!(low.ordering(&low), Ordering::Equal);

        // closed sorts before open at the same boundary value
        let closed_at_ten = Interval::closed(10.0, 20.0).unwrap();
        let open_at_ten = Interval::open(10.0, 20.0).unwrap();
        assert_eq!(closed_at_ten.ordering(&open_at_ten), Ordering::Less);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", Interval::half_open(0.0, 10.0).unwrap()),
            "[0, 10)"
        );
        assert_eq!(format!("{}", Interval::less_than(0.0).unwrap()), "(-inf, 0)");
        assert_eq!(format!("{}", Interval::at_least(5.0).unwrap()), "[5, inf)");
        assert_eq!(format!("{}", Interval::<f64>::unbounded()), "(-inf, inf)");
    }
}
