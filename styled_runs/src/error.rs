// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::TextStorage;

/// Error type for run partition and range operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attempted range, the text length at the time of
/// failure and, for boundary errors, the UTF-8 character enclosing the offending index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
    len: usize,
    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte index of the range (or the offset) provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte index of the range provided by the caller.
    ///
    /// For single-offset lookups this is `start + 1`.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes of the underlying text at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Extra details for boundary-related errors, if available.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    pub(crate) fn out_of_bounds(start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::OutOfBounds,
            start,
            end,
            len,
            boundary: None,
        }
    }

    pub(crate) fn offset_out_of_bounds(offset: usize, len: usize) -> Self {
        Self::out_of_bounds(offset, offset.saturating_add(1), len)
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            start,
            end,
            len,
            boundary: None,
        }
    }

    pub(crate) fn not_on_char_boundary<T: TextStorage + ?Sized>(
        text: &T,
        start: usize,
        end: usize,
        which: Endpoint,
    ) -> Self {
        let index = match which {
            Endpoint::Start => start,
            Endpoint::End => end,
        };
        Self {
            kind: ErrorKind::NotOnCharBoundary,
            start,
            end,
            len: text.len(),
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start: text.floor_char_boundary(index),
                char_end: text.ceil_char_boundary(index),
            }),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::OutOfBounds => write!(
                f,
                "range {}..{} out of bounds for len {}",
                self.start, self.end, self.len
            ),
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::NotOnCharBoundary => match self.boundary {
                Some(b) => write!(
                    f,
                    "range {}..{}: {} index {} not on UTF-8 boundary (char {}..{})",
                    self.start, self.end, b.which, b.index, b.char_start, b.char_end
                ),
                None => write!(
                    f,
                    "range {}..{} not on UTF-8 boundary",
                    self.start, self.end
                ),
            },
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An offset or range reached past the end of the text.
    ///
    /// Single-offset lookups such as [`RunPartition::attributes_at`](crate::RunPartition::attributes_at)
    /// report this for `offset >= len`.
    OutOfBounds,

    /// The provided range had `start > end`.
    InvalidRange,

    /// Either `start` or `end` was not aligned to a UTF-8 character boundary.
    NotOnCharBoundary,
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// Details about an offending index that was not on a UTF-8 character boundary.
///
/// Returned by [`Error::boundary`] when the error kind is [`ErrorKind::NotOnCharBoundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint (`start` or `end`) was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The start byte index of the enclosing UTF-8 codepoint.
    pub char_start: usize,

    /// The end byte index (exclusive) of the enclosing UTF-8 codepoint.
    pub char_end: usize,
}

#[cfg(test)]
mod tests {
    use super::{Endpoint, Error, ErrorKind};
    use alloc::string::ToString;

    #[test]
    fn offset_errors_report_single_index() {
        let err = Error::offset_out_of_bounds(5, 5);
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert_eq!(err.start(), 5);
        assert_eq!(err.end(), 6);
        assert_eq!(err.to_string(), "range 5..6 out of bounds for len 5");
    }

    #[test]
    fn boundary_errors_name_the_enclosing_char() {
        // "é" is 2 bytes in UTF-8; index 1 is not a boundary.
        let err = Error::not_on_char_boundary("éclair", 0, 1, Endpoint::End);
        let info = err.boundary().expect("boundary info");
        assert_eq!(info.char_start, 0);
        assert_eq!(info.char_end, 2);
        assert_eq!(
            err.to_string(),
            "range 0..1: end index 1 not on UTF-8 boundary (char 0..2)"
        );
    }
}
