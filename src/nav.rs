// SPDX-License-Identifier: MPL-2.0

//! Navigable-map operations shared by the primary by-lower index, the derived by-upper
//! index, and the gap/window indices exposed by views.
//!
//! This mirrors the "predecessor/successor on an ordered map" contract that keeps showing
//! up across this crate's navigation needs (floor/ceiling/lower/higher, plus the
//! head/tail/descending bulk views), rather than re-deriving it by hand at each call site.

use std::collections::BTreeMap;

use crate::cut::Cut;
use crate::range::Range;

/// Predecessor/successor queries and bulk sub-maps over an ordered collection of `Range`s,
/// keyed either by each range's lower cut or by its upper cut.
///
/// Point lookups (`lower_entry` through `higher_entry`) are the ones a balanced tree answers
/// in `O(log n)`; the bulk views (`head_map`, `tail_map`, `descending_map`) are allowed to be
/// `O(n)` per the iteration budget this crate documents, and are implemented as a scan.
pub trait NavigableMap<T: Ord + Clone> {
    /// The greatest entry whose key is strictly less than `key`.
    fn lower_entry(&self, key: &Cut<T>) -> Option<Range<T>>;
    /// The greatest entry whose key is less than or equal to `key`.
    fn floor_entry(&self, key: &Cut<T>) -> Option<Range<T>>;
    /// The least entry whose key is greater than or equal to `key`.
    fn ceiling_entry(&self, key: &Cut<T>) -> Option<Range<T>>;
    /// The least entry whose key is strictly greater than `key`.
    fn higher_entry(&self, key: &Cut<T>) -> Option<Range<T>>;
    /// Entries with key `< key` (or `<= key` if `inclusive`), in ascending order.
    fn head_map(&self, key: &Cut<T>, inclusive: bool) -> Vec<Range<T>>;
    /// Entries with key `> key` (or `>= key` if `inclusive`), in ascending order.
    fn tail_map(&self, key: &Cut<T>, inclusive: bool) -> Vec<Range<T>>;
    /// All entries in descending key order.
    fn descending_map(&self) -> Vec<Range<T>>;
}

/// The primary index: stored ranges keyed by their lower cut. A thin, borrowing wrapper
/// around the `BTreeMap` that backs [`TreeRangeSet`](crate::TreeRangeSet) — not a second
/// copy of the data.
pub struct ByLowerBound<'a, T> {
    pub(crate) map: &'a BTreeMap<Cut<T>, Range<T>>,
}

impl<'a, T: Ord + Clone> NavigableMap<T> for ByLowerBound<'a, T> {
    fn lower_entry(&self, key: &Cut<T>) -> Option<Range<T>> {
        self.map.range(..key.clone()).next_back().map(|(_, r)| r.clone())
    }

    fn floor_entry(&self, key: &Cut<T>) -> Option<Range<T>> {
        self.map.range(..=key.clone()).next_back().map(|(_, r)| r.clone())
    }

    fn ceiling_entry(&self, key: &Cut<T>) -> Option<Range<T>> {
        self.map.range(key.clone()..).next().map(|(_, r)| r.clone())
    }

    fn higher_entry(&self, key: &Cut<T>) -> Option<Range<T>> {
        use std::ops::Bound::Excluded;
        self.map.range((Excluded(key.clone()), std::ops::Bound::Unbounded)).next().map(|(_, r)| r.clone())
    }

    fn head_map(&self, key: &Cut<T>, inclusive: bool) -> Vec<Range<T>> {
        if inclusive {
            self.map.range(..=key.clone()).map(|(_, r)| r.clone()).collect()
        } else {
            self.map.range(..key.clone()).map(|(_, r)| r.clone()).collect()
        }
    }

    fn tail_map(&self, key: &Cut<T>, inclusive: bool) -> Vec<Range<T>> {
        if inclusive {
            self.map.range(key.clone()..).map(|(_, r)| r.clone()).collect()
        } else {
            use std::ops::Bound::Excluded;
            self.map.range((Excluded(key.clone()), std::ops::Bound::Unbounded)).map(|(_, r)| r.clone()).collect()
        }
    }

    fn descending_map(&self) -> Vec<Range<T>> {
        self.map.values().rev().cloned().collect()
    }
}

/// The derived index: the same stored ranges, keyed by their upper cut instead.
///
/// Invariant I2 (no two stored ranges are connected) means ascending-by-lower and
/// ascending-by-upper are the *same* order, so this never needs a second tree: a point
/// query here is answered by floor/ceiling-by-lower plus at most one predecessor/successor
/// step, and a bulk query by filtering the one ordered sequence the primary map already
/// provides.
pub struct ByUpperBound<'a, T> {
    pub(crate) map: &'a BTreeMap<Cut<T>, Range<T>>,
}

impl<'a, T: Ord + Clone> ByUpperBound<'a, T> {
    fn predecessor_of(&self, lower_key: &Cut<T>) -> Option<Range<T>> {
        self.map.range(..lower_key.clone()).next_back().map(|(_, r)| r.clone())
    }

    fn successor_of(&self, lower_key: &Cut<T>) -> Option<Range<T>> {
        use std::ops::Bound::Excluded;
        self.map
            .range((Excluded(lower_key.clone()), std::ops::Bound::Unbounded))
            .next()
            .map(|(_, r)| r.clone())
    }
}

impl<'a, T: Ord + Clone> NavigableMap<T> for ByUpperBound<'a, T> {
    fn floor_entry(&self, key: &Cut<T>) -> Option<Range<T>> {
        // The range with the greatest lower <= key is also the candidate with the
        // greatest upper <= key, *if* its own upper satisfies that bound; otherwise the
        // true answer is the range just before it (whose upper, by I2, is strictly below
        // this candidate's lower <= key).
        match self.map.range(..=key.clone()).next_back() {
            Some((_, r)) if r.upper <= *key => Some(r.clone()),
            Some((lower, _)) => self.predecessor_of(lower),
            None => None,
        }
    }

    fn lower_entry(&self, key: &Cut<T>) -> Option<Range<T>> {
        match self.map.range(..key.clone()).next_back() {
            Some((_, r)) if r.upper < *key => Some(r.clone()),
            Some((lower, _)) => self.predecessor_of(lower),
            None => None,
        }
    }

    fn ceiling_entry(&self, key: &Cut<T>) -> Option<Range<T>> {
        // Seed from floor-by-lower, same as `floor_entry`/`lower_entry`: the range with the
        // greatest lower <= key is the only one that can straddle key (upper >= key). If it
        // doesn't, every later range (by lower, hence by upper under I2) is strictly past it,
        // so the answer is the very next one — or, if nothing has lower <= key at all, the
        // first range in the map.
        match self.map.range(..=key.clone()).next_back() {
            Some((lower, r)) if r.upper < *key => self.successor_of(lower),
            Some((_, r)) => Some(r.clone()),
            None => self.map.values().next().cloned(),
        }
    }

    fn higher_entry(&self, key: &Cut<T>) -> Option<Range<T>> {
        match self.map.range(..=key.clone()).next_back() {
            Some((lower, r)) if r.upper <= *key => self.successor_of(lower),
            Some((_, r)) => Some(r.clone()),
            None => self.map.values().next().cloned(),
        }
    }

    fn head_map(&self, key: &Cut<T>, inclusive: bool) -> Vec<Range<T>> {
        self.map
            .values()
            .filter(|r| if inclusive { r.upper <= *key } else { r.upper < *key })
            .cloned()
            .collect()
    }

    fn tail_map(&self, key: &Cut<T>, inclusive: bool) -> Vec<Range<T>> {
        self.map
            .values()
            .filter(|r| if inclusive { r.upper >= *key } else { r.upper > *key })
            .cloned()
            .collect()
    }

    fn descending_map(&self) -> Vec<Range<T>> {
        self.map.values().rev().cloned().collect()
    }
}

/// A navigable index over a materialized, already-sorted sequence of ranges — used by
/// views (complement / sub-range), whose ranges are derived rather than stored directly.
pub struct MaterializedIndex {
    by_upper: bool,
}

impl MaterializedIndex {
    /// Indexes by each range's lower cut.
    pub fn by_lower() -> Self {
        MaterializedIndex { by_upper: false }
    }

    /// Indexes by each range's upper cut.
    pub fn by_upper() -> Self {
        MaterializedIndex { by_upper: true }
    }

    fn key<'r, T: Ord + Clone>(&self, r: &'r Range<T>) -> &'r Cut<T> {
        if self.by_upper {
            &r.upper
        } else {
            &r.lower
        }
    }

    /// The greatest entry in `ranges` whose key is strictly less than `key`.
    pub fn lower_entry<T: Ord + Clone>(&self, ranges: &[Range<T>], key: &Cut<T>) -> Option<Range<T>> {
        ranges.iter().rev().find(|r| self.key(r) < key).cloned()
    }

    /// The greatest entry in `ranges` whose key is less than or equal to `key`.
    pub fn floor_entry<T: Ord + Clone>(&self, ranges: &[Range<T>], key: &Cut<T>) -> Option<Range<T>> {
        ranges.iter().rev().find(|r| self.key(r) <= key).cloned()
    }

    /// The least entry in `ranges` whose key is greater than or equal to `key`.
    pub fn ceiling_entry<T: Ord + Clone>(&self, ranges: &[Range<T>], key: &Cut<T>) -> Option<Range<T>> {
        ranges.iter().find(|r| self.key(r) >= key).cloned()
    }

    /// The least entry in `ranges` whose key is strictly greater than `key`.
    pub fn higher_entry<T: Ord + Clone>(&self, ranges: &[Range<T>], key: &Cut<T>) -> Option<Range<T>> {
        ranges.iter().find(|r| self.key(r) > key).cloned()
    }

    /// Entries of `ranges` with key `< key` (or `<= key` if `inclusive`).
    pub fn head_map<T: Ord + Clone>(&self, ranges: &[Range<T>], key: &Cut<T>, inclusive: bool) -> Vec<Range<T>> {
        ranges
            .iter()
            .filter(|r| if inclusive { self.key(r) <= key } else { self.key(r) < key })
            .cloned()
            .collect()
    }

    /// Entries of `ranges` with key `> key` (or `>= key` if `inclusive`).
    pub fn tail_map<T: Ord + Clone>(&self, ranges: &[Range<T>], key: &Cut<T>, inclusive: bool) -> Vec<Range<T>> {
        ranges
            .iter()
            .filter(|r| if inclusive { self.key(r) >= key } else { self.key(r) > key })
            .cloned()
            .collect()
    }

    /// `ranges` in descending key order.
    pub fn descending_map<T: Ord + Clone>(&self, ranges: &[Range<T>]) -> Vec<Range<T>> {
        ranges.iter().rev().cloned().collect()
    }
}
