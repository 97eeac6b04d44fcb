// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, TextStorage};

/// A validated byte range into a UTF-8 text buffer.
///
/// Holds these invariants:
///
/// - `start <= end`
/// - `start` and `end` are within the text bounds
/// - `start` and `end` lie on UTF-8 codepoint boundaries
///
/// A range with `start == end` is a *collapsed* range, i.e. a caret position.
///
/// `TextRange` does not record which buffer it was validated against. It is the caller's
/// responsibility to revalidate after the text changes.
///
/// ## Example
///
/// ```
/// use styled_runs::TextRange;
///
/// let range = TextRange::new("Hello!", 0..5).unwrap();
/// assert_eq!(range.len(), 5);
/// assert!(TextRange::new("Hello!", 6..6).unwrap().is_collapsed());
/// assert!(TextRange::new("Hello!", 0..7).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Returns a validated `TextRange` for the provided text.
    #[inline]
    pub fn new<T: TextStorage + ?Sized>(text: &T, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// Returns a validated collapsed range (a caret) at `offset`.
    #[inline]
    pub fn caret<T: TextStorage + ?Sized>(text: &T, offset: usize) -> Result<Self, Error> {
        Self::new(text, offset..offset)
    }

    /// Creates a `TextRange` without validation.
    ///
    /// This is intended for internal callers that already maintain range invariants.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The length of the range in bytes.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if `start == end`.
    #[must_use]
    #[inline]
    pub const fn is_collapsed(self) -> bool {
        self.start == self.end
    }

    /// Alias for [`is_collapsed`](Self::is_collapsed).
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.is_collapsed()
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

#[inline]
pub(crate) fn validate_range<T: TextStorage + ?Sized>(
    text: &T,
    range: &Range<usize>,
) -> Result<(), Error> {
    let text_len = text.len();
    if range.start > range.end {
        return Err(Error::invalid_range(range.start, range.end, text_len));
    }
    if range.end > text_len {
        return Err(Error::out_of_bounds(range.start, range.end, text_len));
    }
    if !text.is_char_boundary(range.start) {
        return Err(Error::not_on_char_boundary(
            text,
            range.start,
            range.end,
            Endpoint::Start,
        ));
    }
    if !text.is_char_boundary(range.end) {
        return Err(Error::not_on_char_boundary(
            text,
            range.start,
            range.end,
            Endpoint::End,
        ));
    }
    Ok(())
}
