// SPDX-License-Identifier: MPL-2.0

//! The cut algebra: endpoints as a total order finer than the element order.
//!
//! A [`Cut`] sits *between* elements of `T`, never on one. This is what lets a
//! [`Range`](crate::range::Range) represent `(4, 6)` and `[4, 6]` and `(4, 6]` as three
//! distinct, comparable things without ever asking `T` for a successor or predecessor.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

/// A position between, before, or after the elements of `T`.
///
/// `BelowValue(v)` and `AboveValue(v)` for the same `v` are one tick apart: nothing of `T`
/// can ever compare between them, but they are themselves distinct and ordered
/// (`BelowValue(v) < AboveValue(v)`). This is the only place the "tick" exists; every other
/// operation in this crate is defined purely in terms of comparing two `Cut`s.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cut<T> {
    /// Strictly less than every element of `T`.
    BelowAll,
    /// Just below `v`: `v` itself is above this cut.
    BelowValue(T),
    /// Just above `v`: `v` itself is below this cut.
    AboveValue(T),
    /// Strictly greater than every element of `T`.
    AboveAll,
}

impl<T: Ord> PartialOrd for Cut<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Cut<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        use Cut::*;
        match (self, other) {
            (BelowAll, BelowAll) => Ordering::Equal,
            (BelowAll, _) => Ordering::Less,
            (_, BelowAll) => Ordering::Greater,

            (AboveAll, AboveAll) => Ordering::Equal,
            (AboveAll, _) => Ordering::Greater,
            (_, AboveAll) => Ordering::Less,

            (BelowValue(a), BelowValue(b)) => a.cmp(b),
            (AboveValue(a), AboveValue(b)) => a.cmp(b),

            // Tie-break: at the same value, BelowValue sits just under AboveValue.
            (BelowValue(a), AboveValue(b)) => match a.cmp(b) {
                Ordering::Equal => Ordering::Less,
                ord => ord,
            },
            (AboveValue(a), BelowValue(b)) => match a.cmp(b) {
                Ordering::Equal => Ordering::Greater,
                ord => ord,
            },
        }
    }
}

impl<T: Debug> Debug for Cut<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Cut::BelowAll => write!(f, "BelowAll"),
            Cut::BelowValue(v) => write!(f, "BelowValue({v:?})"),
            Cut::AboveValue(v) => write!(f, "AboveValue({v:?})"),
            Cut::AboveAll => write!(f, "AboveAll"),
        }
    }
}

impl<T: Display> Display for Cut<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Cut::BelowAll => write!(f, "(-\u{221e}"),
            Cut::BelowValue(v) => write!(f, "({v}"),
            Cut::AboveValue(v) => write!(f, "{v})"),
            Cut::AboveAll => write!(f, "+\u{221e})"),
        }
    }
}
