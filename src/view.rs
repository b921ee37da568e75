// SPDX-License-Identifier: MPL-2.0

//! [`RangeSetView`]: a live, possibly-complemented, possibly-windowed view over a
//! [`TreeRangeSet`].
//!
//! Guava models this as two classes, `ComplementView` and a separate sub-range view, composed
//! by wrapping one inside the other as callers chain `.complement()` and `.subRangeSet(...)`.
//! Here the two collapse into one type carrying `(complemented, window)`: complementing is an
//! involution and windowing is intersection, so nesting either operation just updates one of
//! the two fields on the existing view rather than growing another layer of wrapper.

use std::fmt::{self, Display, Formatter};

use crate::error::RangeSetError;
use crate::nav::MaterializedIndex;
use crate::range::Range;
use crate::set::{RangeSet, TreeRangeSet};

/// A view over a [`TreeRangeSet`] that is either the set itself restricted to a window, its
/// complement restricted to a window, or (since the two compose losslessly) any combination of
/// the two.
///
/// `complemented == false` makes this a sub-range view: the ranges of `backing` clipped to
/// `window`. `complemented == true` makes it the gaps of `backing` within `window`, including
/// the unbounded tails when `window` is itself unbounded. Mutations write straight through to
/// `backing`.
pub struct RangeSetView<'a, T> {
    backing: &'a mut TreeRangeSet<T>,
    complemented: bool,
    window: Range<T>,
}

impl<'a, T: Ord + Clone> RangeSetView<'a, T> {
    pub(crate) fn new(backing: &'a mut TreeRangeSet<T>, complemented: bool, window: Range<T>) -> Self {
        RangeSetView { backing, complemented, window }
    }

    /// The complement of this view, still restricted to the same window.
    ///
    /// Complementing twice is the identity, so this just flips a flag rather than building a
    /// new layer of wrapper.
    pub fn complement(&mut self) -> RangeSetView<'_, T> {
        RangeSetView {
            backing: &mut *self.backing,
            complemented: !self.complemented,
            window: self.window.clone(),
        }
    }

    /// This view restricted further to `window`.
    ///
    /// The resulting window is the intersection of the two windows, so a chain of
    /// `sub_range_set` calls narrows monotonically no matter how many links are in the chain.
    pub fn sub_range_set(&mut self, window: Range<T>) -> RangeSetView<'_, T> {
        RangeSetView {
            backing: &mut *self.backing,
            complemented: self.complemented,
            window: self.window.intersection(&window),
        }
    }

    /// This view's window.
    pub fn window(&self) -> &Range<T> {
        &self.window
    }

    fn backing_overlaps(&self, range: &Range<T>) -> bool {
        self.backing.ranges().iter().any(|r| !r.intersection(range).is_empty())
    }

    /// This view's ranges, already clipped to `window` and (if complemented) inverted — the
    /// same list every `RangeSet` method below is defined in terms of.
    fn represented_ranges(&self) -> Vec<Range<T>> {
        let stored = self.backing.ranges();

        if !self.complemented {
            return stored
                .into_iter()
                .filter_map(|r| {
                    let clipped = r.intersection(&self.window);
                    if clipped.is_empty() {
                        None
                    } else {
                        Some(clipped)
                    }
                })
                .collect();
        }

        let mut result = Vec::new();
        let mut cursor = self.window.lower.clone();
        for r in &stored {
            if r.upper <= cursor {
                continue;
            }
            if r.lower >= self.window.upper {
                break;
            }
            if r.lower > cursor {
                let gap = Range::from_cuts(cursor.clone(), r.lower.clone());
                if !gap.is_empty() {
                    result.push(gap);
                }
            }
            if r.upper > cursor {
                cursor = r.upper.clone();
            }
        }
        if cursor < self.window.upper {
            let gap = Range::from_cuts(cursor, self.window.upper.clone());
            if !gap.is_empty() {
                result.push(gap);
            }
        }
        result
    }

    /// A navigable index over this view's ranges, keyed by lower cut.
    pub fn ranges_by_lower_bound(&self) -> (MaterializedIndex, Vec<Range<T>>) {
        (MaterializedIndex::by_lower(), self.represented_ranges())
    }

    /// A navigable index over this view's ranges, keyed by upper cut.
    pub fn ranges_by_upper_bound(&self) -> (MaterializedIndex, Vec<Range<T>>) {
        (MaterializedIndex::by_upper(), self.represented_ranges())
    }
}

impl<'a, T: Ord + Clone> RangeSet<T> for RangeSetView<'a, T> {
    fn is_empty(&self) -> bool {
        self.represented_ranges().is_empty()
    }

    fn contains(&self, value: &T) -> bool {
        if !self.window.contains(value) {
            return false;
        }
        self.backing.contains(value) != self.complemented
    }

    fn range_containing(&self, value: &T) -> Option<Range<T>> {
        if !self.contains(value) {
            return None;
        }
        self.represented_ranges().into_iter().find(|r| r.contains(value))
    }

    fn encloses(&self, range: &Range<T>) -> bool {
        if !self.window.encloses(range) {
            return false;
        }
        if self.complemented {
            !self.backing_overlaps(range)
        } else {
            self.backing.encloses(range)
        }
    }

    fn span(&self) -> Result<Range<T>, RangeSetError> {
        let ranges = self.represented_ranges();
        let first = ranges.first().ok_or(RangeSetError::EmptySet)?;
        let last = ranges.last().expect("non-empty ranges has a last element");
        Ok(Range::from_cuts(first.lower.clone(), last.upper.clone()))
    }

    fn ranges(&self) -> Vec<Range<T>> {
        self.represented_ranges()
    }

    fn add(&mut self, range: Range<T>) -> Result<(), RangeSetError> {
        if range.is_empty() {
            return Ok(());
        }
        if !self.window.encloses(&range) {
            return Err(RangeSetError::InvalidArgument(
                "range is not enclosed by this view's window".to_string(),
            ));
        }
        if self.complemented {
            self.backing.remove(range);
        } else {
            self.backing.add(range)?;
        }
        Ok(())
    }

    fn remove(&mut self, range: Range<T>) {
        let clipped = range.intersection(&self.window);
        if clipped.is_empty() {
            return;
        }
        if self.complemented {
            self.backing.add(clipped).expect("adding a window-clipped range to the backing set never fails");
        } else {
            self.backing.remove(clipped);
        }
    }
}

impl<'a, T: Display + Ord + Clone> Display for RangeSetView<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let ranges = self.represented_ranges();
        if ranges.is_empty() {
            return write!(f, "\u{2205}");
        }
        for (i, r) in ranges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{r}")?;
        }
        Ok(())
    }
}
