// SPDX-License-Identifier: MPL-2.0

//! [`TreeRangeSet`]: the mutable range set, and the [`RangeSet`] trait every view also
//! implements.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use crate::cut::Cut;
use crate::error::RangeSetError;
use crate::nav::{ByLowerBound, ByUpperBound};
use crate::range::Range;
use crate::view::RangeSetView;

/// The contract shared by [`TreeRangeSet`] and every view derived from one (complement,
/// sub-range, and any composition of the two).
///
/// Queries never fail; the only fallible operations are `add` (a view can reject a range
/// outside its window) and `span` (undefined on an empty set).
pub trait RangeSet<T: Ord + Clone> {
    /// True iff this set represents no values at all.
    fn is_empty(&self) -> bool;

    /// True iff `value` is represented by this set.
    fn contains(&self, value: &T) -> bool;

    /// The single stored (or derived) range containing `value`, if any.
    fn range_containing(&self, value: &T) -> Option<Range<T>>;

    /// True iff some range in this set encloses `range`.
    fn encloses(&self, range: &Range<T>) -> bool;

    /// The smallest range enclosing every range in this set.
    fn span(&self) -> Result<Range<T>, RangeSetError>;

    /// The ranges in this set, in ascending order, maximally coalesced.
    fn ranges(&self) -> Vec<Range<T>>;

    /// Merges `range` into this set. A no-op if `range` is empty.
    fn add(&mut self, range: Range<T>) -> Result<(), RangeSetError>;

    /// Removes `range` from this set. A no-op if `range` doesn't intersect anything stored.
    fn remove(&mut self, range: Range<T>);

    /// True iff `other`'s ranges are each enclosed by some range of this set.
    fn encloses_all<R: RangeSet<T>>(&self, other: &R) -> bool
    where
        Self: Sized,
    {
        other.ranges().iter().all(|r| self.encloses(r))
    }

    /// Adds every range of `other` to this set.
    fn add_all<R: RangeSet<T>>(&mut self, other: &R) -> Result<(), RangeSetError>
    where
        Self: Sized,
    {
        for r in other.ranges() {
            self.add(r)?;
        }
        Ok(())
    }

    /// Removes every range of `other` from this set.
    fn remove_all<R: RangeSet<T>>(&mut self, other: &R)
    where
        Self: Sized,
    {
        for r in other.ranges() {
            self.remove(r);
        }
    }
}

/// A mutable set of disjoint, non-empty, maximally-coalesced ranges over `T`.
///
/// The stored ranges are kept in a [`BTreeMap`] keyed by each range's lower cut
/// ("RangesByLowerBound" in the design doc); [`ranges_by_upper_bound`](Self::ranges_by_upper_bound)
/// exposes the same entries re-keyed by upper cut without a second tree.
#[derive(Debug, Clone)]
pub struct TreeRangeSet<T> {
    pub(crate) map: BTreeMap<Cut<T>, Range<T>>,
}

impl<T: Ord + Clone> Default for TreeRangeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> TreeRangeSet<T> {
    /// An empty range set.
    pub fn new() -> Self {
        TreeRangeSet { map: BTreeMap::new() }
    }

    /// A copy of `other`'s ranges as a standalone, owned `TreeRangeSet`.
    pub fn from_range_set<R: RangeSet<T>>(other: &R) -> Self {
        let mut set = Self::new();
        for r in other.ranges() {
            // `other`'s own ranges are already disjoint and non-empty; `add` cannot fail
            // on them (failure only arises from a window violation on a view, and a
            // fresh `TreeRangeSet` has no window).
            set.add(r).expect("copying a range set's own ranges never fails");
        }
        set
    }

    /// The primary navigable index, keyed by each stored range's lower cut.
    pub fn ranges_by_lower_bound(&self) -> ByLowerBound<'_, T> {
        ByLowerBound { map: &self.map }
    }

    /// The derived navigable index, keyed by each stored range's upper cut.
    pub fn ranges_by_upper_bound(&self) -> ByUpperBound<'_, T> {
        ByUpperBound { map: &self.map }
    }

    /// A live view of the gaps in this set, including unbounded tails.
    ///
    /// `add`/`remove` on the view map to `remove`/`add` on `self`.
    pub fn complement(&mut self) -> RangeSetView<'_, T> {
        RangeSetView::new(self, true, Range::all())
    }

    /// A live view of this set restricted to `window`: every operation behaves as if
    /// values outside `window` don't exist.
    pub fn sub_range_set(&mut self, window: Range<T>) -> RangeSetView<'_, T> {
        RangeSetView::new(self, false, window)
    }

    fn straddling_left(&self, lower: &Cut<T>) -> Option<Range<T>> {
        self.map
            .range(..lower.clone())
            .next_back()
            .map(|(_, r)| r.clone())
            .filter(|r| r.upper > *lower)
    }

    /// The stored range with the greatest lower cut `<= key`, if any — a plain
    /// floor-by-lower lookup, reused both for the left-merge candidate (keyed at a new
    /// range's lower cut) and the right-merge candidate (keyed at its upper cut).
    fn floor_by_lower(&self, key: &Cut<T>) -> Option<Range<T>> {
        self.map.range(..=key.clone()).next_back().map(|(_, r)| r.clone())
    }
}

impl<T: Ord + Clone> RangeSet<T> for TreeRangeSet<T> {
    fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn contains(&self, value: &T) -> bool {
        self.range_containing(value).is_some()
    }

    fn range_containing(&self, value: &T) -> Option<Range<T>> {
        let key = Cut::BelowValue(value.clone());
        self.map
            .range(..=key)
            .next_back()
            .map(|(_, r)| r.clone())
            .filter(|r| r.contains(value))
    }

    fn encloses(&self, range: &Range<T>) -> bool {
        self.map
            .range(..=range.lower.clone())
            .next_back()
            .map(|(_, r)| r.encloses(range))
            .unwrap_or(false)
    }

    fn span(&self) -> Result<Range<T>, RangeSetError> {
        let first = self.map.values().next().ok_or(RangeSetError::EmptySet)?;
        let last = self.map.values().next_back().expect("non-empty map has a last value");
        Ok(Range::from_cuts(first.lower.clone(), last.upper.clone()))
    }

    fn ranges(&self) -> Vec<Range<T>> {
        self.map.values().cloned().collect()
    }

    fn add(&mut self, range: Range<T>) -> Result<(), RangeSetError> {
        if range.is_empty() {
            return Ok(());
        }

        let mut lower = range.lower.clone();
        let mut upper = range.upper.clone();

        if let Some(left) = self.floor_by_lower(&range.lower) {
            if left.upper >= range.lower {
                lower = left.lower.clone();
            }
        }
        if let Some(right) = self.floor_by_lower(&range.upper) {
            if right.upper >= range.upper {
                upper = right.upper.clone();
            }
        }

        let keys_to_remove: Vec<Cut<T>> =
            self.map.range(lower.clone()..=upper.clone()).map(|(k, _)| k.clone()).collect();
        for k in keys_to_remove {
            self.map.remove(&k);
        }

        self.map.insert(lower.clone(), Range::from_cuts(lower, upper));
        Ok(())
    }

    fn remove(&mut self, range: Range<T>) {
        if range.is_empty() {
            return;
        }

        let left_straddle = self.straddling_left(&range.lower);
        let right_straddle =
            self.floor_by_lower(&range.upper).filter(|r| r.upper > range.upper);

        if let Some(left) = &left_straddle {
            self.map.remove(&left.lower);
        }
        if let Some(right) = &right_straddle {
            // `right` may be the same stored range as `left`, when a single range
            // straddles both edges of `range`; removing it twice is harmless.
            self.map.remove(&right.lower);
        }

        let keys_to_remove: Vec<Cut<T>> = self
            .map
            .range(range.lower.clone()..=range.upper.clone())
            .map(|(k, _)| k.clone())
            .collect();
        for k in keys_to_remove {
            self.map.remove(&k);
        }

        if let Some(left) = left_straddle {
            let remainder = Range::from_cuts(left.lower.clone(), range.lower.clone());
            if !remainder.is_empty() {
                self.map.insert(remainder.lower.clone(), remainder);
            }
        }
        if let Some(right) = right_straddle {
            let remainder = Range::from_cuts(range.upper.clone(), right.upper.clone());
            if !remainder.is_empty() {
                self.map.insert(remainder.lower.clone(), remainder);
            }
        }
    }
}

impl<T: Ord + Clone> PartialEq for TreeRangeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ranges() == other.ranges()
    }
}

impl<T: Ord + Clone> Eq for TreeRangeSet<T> {}

impl<T: Ord + Clone> FromIterator<Range<T>> for TreeRangeSet<T> {
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        for r in iter {
            set.add(r).expect("add on an owned TreeRangeSet never fails");
        }
        set
    }
}

impl<T: Display + Ord + Clone> Display for TreeRangeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.map.is_empty() {
            return write!(f, "\u{2205}");
        }
        for (i, r) in self.map.values().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{r}")?;
        }
        Ok(())
    }
}
