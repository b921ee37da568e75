// SPDX-License-Identifier: MPL-2.0

//! [`Range`]: an interval expressed as a pair of [`Cut`]s.
//!
//! Concretely, a `Range` corresponds to any of the usual mathematical intervals: open,
//! closed, half-open, or unbounded on either side. The building blocks are:
//!  - [empty-ish](Range::range) via `Range::range(v, Open, v, Open)`: no values
//!  - [all()](Range::all): every value
//!  - [singleton(v)](Range::singleton): only `v`
//!  - [closed(a, b)](Range::closed), [open(a, b)](Range::open), [closed_open](Range::closed_open),
//!    [open_closed](Range::open_closed): the four two-sided interval shapes
//!  - [at_least(v)](Range::at_least), [greater_than(v)](Range::greater_than),
//!    [at_most(v)](Range::at_most), [less_than(v)](Range::less_than): one-sided intervals

use std::fmt::{self, Display, Formatter};

use crate::cut::Cut;

/// Whether an endpoint includes or excludes the value it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundType {
    /// The named value is part of the range.
    Closed,
    /// The named value is not part of the range.
    Open,
}

/// An interval over `T`, represented as a pair of cuts.
///
/// Two `Range`s are equal iff their cuts are equal; this is a syntactic, not semantic,
/// equality (see the crate-level docs for the limitation this implies around unbounded and
/// discrete domains).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    pub(crate) lower: Cut<T>,
    pub(crate) upper: Cut<T>,
}

fn invalid_argument() -> ! {
    panic!("invalid argument: lower bound is greater than upper bound")
}

impl<T: Ord> Range<T> {
    /// Builds a range from an explicit pair of cuts.
    ///
    /// Prefer the named constructors below; this exists for the views, which build cuts
    /// that don't correspond to a single named shape (e.g. a gap between two stored ranges).
    pub(crate) fn from_cuts(lower: Cut<T>, upper: Cut<T>) -> Self {
        if lower > upper {
            invalid_argument();
        }
        Range { lower, upper }
    }

    /// The set of all values of `T`.
    pub fn all() -> Self {
        Range { lower: Cut::BelowAll, upper: Cut::AboveAll }
    }

    /// `v1 < x < v2`.
    pub fn open(v1: T, v2: T) -> Self {
        Self::range(v1, BoundType::Open, v2, BoundType::Open)
    }

    /// `v1 <= x <= v2`.
    pub fn closed(v1: T, v2: T) -> Self {
        Self::range(v1, BoundType::Closed, v2, BoundType::Closed)
    }

    /// `v1 <= x < v2`.
    pub fn closed_open(v1: T, v2: T) -> Self {
        Self::range(v1, BoundType::Closed, v2, BoundType::Open)
    }

    /// `v1 < x <= v2`.
    pub fn open_closed(v1: T, v2: T) -> Self {
        Self::range(v1, BoundType::Open, v2, BoundType::Closed)
    }

    /// `x == v`, i.e. `Range::closed(v, v)`.
    pub fn singleton(v: T) -> Self
    where
        T: Clone,
    {
        Self::closed(v.clone(), v)
    }

    /// `x < v`.
    pub fn less_than(v: T) -> Self {
        Range { lower: Cut::BelowAll, upper: Cut::BelowValue(v) }
    }

    /// `x <= v`.
    pub fn at_most(v: T) -> Self {
        Range { lower: Cut::BelowAll, upper: Cut::AboveValue(v) }
    }

    /// `x > v`.
    pub fn greater_than(v: T) -> Self {
        Range { lower: Cut::AboveValue(v), upper: Cut::AboveAll }
    }

    /// `x >= v`.
    pub fn at_least(v: T) -> Self {
        Range { lower: Cut::BelowValue(v), upper: Cut::AboveAll }
    }

    /// `v` with `bound_type`, as a lower bound extending to `+\u{221e}`.
    pub fn down_to(v: T, bound_type: BoundType) -> Self {
        match bound_type {
            BoundType::Closed => Self::at_least(v),
            BoundType::Open => Self::greater_than(v),
        }
    }

    /// `v` with `bound_type`, as an upper bound extending from `-\u{221e}`.
    pub fn up_to(v: T, bound_type: BoundType) -> Self {
        match bound_type {
            BoundType::Closed => Self::at_most(v),
            BoundType::Open => Self::less_than(v),
        }
    }

    /// The general two-sided constructor. Panics if `a > b`.
    ///
    /// `Range::range(v, Open, v, Open)` is the canonical empty range: no value is both
    /// `> v` and `< v`.
    pub fn range(a: T, lower_type: BoundType, b: T, upper_type: BoundType) -> Self
    where
        T: Clone,
    {
        if a > b {
            invalid_argument();
        }
        let lower = match lower_type {
            BoundType::Closed => Cut::BelowValue(a),
            BoundType::Open => Cut::AboveValue(a),
        };
        let upper = match upper_type {
            BoundType::Closed => Cut::AboveValue(b),
            BoundType::Open => Cut::BelowValue(b),
        };
        Range { lower, upper }
    }

    /// True iff no value satisfies this range (`lower == upper`).
    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }

    /// The cut below which no value of this range falls.
    pub fn lower_bound(&self) -> &Cut<T> {
        &self.lower
    }

    /// The cut above which no value of this range falls.
    pub fn upper_bound(&self) -> &Cut<T> {
        &self.upper
    }
}

impl<T: Ord + Clone> Range<T> {
    /// True iff `x` is a member of this range.
    pub fn contains(&self, x: &T) -> bool {
        self.lower <= Cut::BelowValue(x.clone()) && Cut::AboveValue(x.clone()) <= self.upper
    }

    /// True iff every value in `other` is also in `self`.
    pub fn encloses(&self, other: &Range<T>) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// True iff `self` and `other` can be joined into a single range without a gap: they
    /// overlap, or touch at a shared cut (`[1,4]` and `(4,6)` are connected).
    pub fn is_connected(&self, other: &Range<T>) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// The overlap of `self` and `other`.
    ///
    /// When the two ranges are not [connected](Self::is_connected), there is no overlap;
    /// rather than panicking or returning `Option`, this collapses to a well-formed empty
    /// range anchored at the smaller of the two upper bounds, so callers never need to
    /// special-case disjoint inputs.
    pub fn intersection(&self, other: &Range<T>) -> Range<T> {
        let lower = std::cmp::max(self.lower.clone(), other.lower.clone());
        let upper = std::cmp::min(self.upper.clone(), other.upper.clone());
        if lower <= upper {
            Range { lower, upper }
        } else {
            Range { lower: upper.clone(), upper }
        }
    }

    /// The smallest range enclosing both `self` and `other`.
    pub fn span(&self, other: &Range<T>) -> Range<T> {
        let lower = std::cmp::min(self.lower.clone(), other.lower.clone());
        let upper = std::cmp::max(self.upper.clone(), other.upper.clone());
        Range { lower, upper }
    }
}

impl<T: Display + PartialEq> Display for Range<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.lower == self.upper {
            return write!(f, "\u{2205}");
        }
        match (&self.lower, &self.upper) {
            (Cut::BelowValue(a), Cut::AboveValue(b)) if a == b => write!(f, "{{{a}}}"),
            (lower, upper) => write!(f, "{lower}..{upper}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_open_touching_ranges_are_connected() {
        let a = Range::closed(1, 4);
        let b = Range::open(4, 6);
        assert!(a.is_connected(&b));
    }

    #[test]
    fn open_singleton_like_range_is_empty() {
        let r = Range::range(3, BoundType::Open, 3, BoundType::Open);
        assert!(r.is_empty());
    }

    #[test]
    fn closed_open_with_equal_bounds_is_empty() {
        let r: Range<i32> = Range::range(5, BoundType::Closed, 5, BoundType::Open);
        assert!(r.is_empty());
        assert!(!r.contains(&5));
    }

    #[test]
    fn singleton_contains_only_itself() {
        let r = Range::singleton(5);
        assert!(r.contains(&5));
        assert!(!r.contains(&4));
        assert!(!r.contains(&6));
    }

    #[test]
    fn encloses_is_reflexive_and_respects_bounds() {
        let r = Range::closed(1, 10);
        assert!(r.encloses(&r));
        assert!(r.encloses(&Range::closed(2, 9)));
        assert!(!r.encloses(&Range::closed(0, 9)));
        assert!(!r.encloses(&Range::closed(2, 11)));
    }

    #[test]
    fn intersection_of_connected_ranges() {
        let a = Range::closed(1, 6);
        let b = Range::closed(4, 10);
        assert_eq!(a.intersection(&b), Range::closed(4, 6));
    }

    #[test]
    fn intersection_of_disjoint_ranges_is_empty() {
        let a = Range::closed(1, 2);
        let b = Range::closed(5, 6);
        assert!(a.intersection(&b).is_empty());
    }

    #[test]
    fn span_covers_both_ranges() {
        let a = Range::closed(1, 2);
        let b = Range::closed(5, 6);
        assert_eq!(a.span(&b), Range::closed(1, 6));
    }

    #[test]
    #[should_panic(expected = "invalid argument")]
    fn range_with_reversed_bounds_panics() {
        let _ = Range::range(5, BoundType::Closed, 1, BoundType::Closed);
    }
}
