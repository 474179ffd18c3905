// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// The error returned when a position argument points past the end of a view.
///
/// This is the recoverable half of the crate's error model: operations that
/// take a starting position ([`at()`][crate::View::at],
/// [`substr()`][crate::View::substr], [`copy_to()`][crate::View::copy_to] and
/// the range-taking comparison forms) report it when the position exceeds the
/// view length, and callers are expected to handle or pre-validate it.
/// Contract violations (indexing past the end, trimming more than the view
/// holds) panic instead, and a failed search is not an error at all - it is
/// the [`NPOS`][crate::NPOS] sentinel.
///
/// # Thread safety
///
/// This type is thread-safe.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("position {position} is out of range of a view of length {length}")]
pub struct OutOfRangeError {
    position: usize,
    length: usize,
}

impl OutOfRangeError {
    pub(crate) const fn new(position: usize, length: usize) -> Self {
        Self { position, length }
    }

    /// The offending position argument.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The length of the view at the time of the call.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A specialized `Result` for fallible view operations.
pub type Result<T> = std::result::Result<T, OutOfRangeError>;
