// SPDX-License-Identifier: MPL-2.0

//! A mutable set of disjoint, coalesced ranges over any totally ordered type.
//!
//! A [`TreeRangeSet`] holds any number of [`Range`]s, automatically merging overlapping or
//! touching ranges as they're added and splitting ranges as they're removed, so at every
//! point in time the set is represented by the smallest possible number of disjoint,
//! non-empty, sorted ranges.
//!
//! # Basic example
//!
//! ```
//! use tree_range_set::{Range, RangeSet, TreeRangeSet};
//!
//! let mut available = TreeRangeSet::new();
//! available.add(Range::closed(1, 10)).unwrap();
//! available.remove(Range::open(4, 6));
//!
//! assert_eq!(
//!     available.ranges(),
//!     vec![Range::closed(1, 4), Range::closed(6, 10)],
//! );
//! assert!(available.contains(&4));
//! assert!(!available.contains(&5));
//! ```
//!
//! # Ranges
//!
//! A [`Range`] is a pair of cuts (see [`Cut`](cut::Cut) for the endpoint algebra), built with
//! one of the named constructors: [`Range::open`], [`Range::closed`], [`Range::closed_open`],
//! [`Range::open_closed`] for the two-sided shapes; [`Range::at_least`], [`Range::greater_than`],
//! [`Range::at_most`], [`Range::less_than`] for the one-sided shapes; [`Range::all`] for
//! everything and [`Range::singleton`] for exactly one value.
//!
//! # Views
//!
//! [`TreeRangeSet::complement`] and [`TreeRangeSet::sub_range_set`] return a
//! [`RangeSetView`] backed by the same set: reading the view reads a (possibly inverted,
//! possibly windowed) projection of the backing set, and writing to the view writes through
//! to it. Views compose: a view's own `.complement()` and `.sub_range_set(...)` narrow or
//! invert further, in place, without building nested wrapper types.
//!
//! ```
//! use tree_range_set::{Range, RangeSet, TreeRangeSet};
//!
//! let mut set = TreeRangeSet::new();
//! set.add(Range::closed(1, 3)).unwrap();
//! set.add(Range::closed(7, 9)).unwrap();
//!
//! let mut window = set.sub_range_set(Range::closed(0, 10));
//! let gaps = window.complement();
//! assert_eq!(
//!     gaps.ranges(),
//!     vec![Range::closed_open(0, 1), Range::open(3, 7), Range::open_closed(9, 10)],
//! );
//! ```
//!
//! # Navigable maps
//!
//! [`TreeRangeSet::ranges_by_lower_bound`] and [`TreeRangeSet::ranges_by_upper_bound`] expose
//! `floorEntry`/`ceilingEntry`/`headMap`-style navigation (see [`NavigableMap`]) over the same
//! stored ranges, ordered by lower or upper cut respectively, without maintaining a second
//! tree.

#![warn(missing_docs)]

mod cut;
mod error;
mod nav;
mod range;
mod set;
mod view;

pub use cut::Cut;
pub use error::RangeSetError;
pub use nav::{ByLowerBound, ByUpperBound, MaterializedIndex, NavigableMap};
pub use range::{BoundType, Range};
pub use set::{RangeSet, TreeRangeSet};
pub use view::RangeSetView;
