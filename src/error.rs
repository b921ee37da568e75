// SPDX-License-Identifier: MPL-2.0

//! Errors raised by range set operations.

use thiserror::Error;

/// Errors that may occur while building or querying a range set.
///
/// Both variants are programmer errors: there is no I/O and nothing transient to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeSetError {
    /// A range-shaped argument was invalid for the operation it was passed to: either its
    /// own bounds are out of order, or it falls outside a sub-range view's window.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `span()` was called on a range set or view with no ranges.
    #[error("range set is empty")]
    EmptySet,
}
