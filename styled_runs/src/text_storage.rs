// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::ops::Range;

/// A block of text whose byte ranges can be carried by a [`StyledRuns`].
///
/// [`StyledRuns`]: crate::StyledRuns
pub trait TextStorage {
    /// The length of the underlying text, in bytes.
    fn len(&self) -> usize;

    /// Return `true` if the underlying text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return whether `index` is a UTF-8 character boundary in the text.
    fn is_char_boundary(&self, index: usize) -> bool;

    /// Returns the closest character boundary at or before `index`.
    ///
    /// Indices past the end are clamped to `len`.
    fn floor_char_boundary(&self, index: usize) -> usize {
        let mut index = index.min(self.len());
        // A UTF-8 codepoint is at most 4 bytes, and `0` is always a boundary.
        while !self.is_char_boundary(index) {
            index -= 1;
        }
        index
    }

    /// Returns the closest character boundary at or after `index`.
    ///
    /// Indices past the end are clamped to `len`.
    fn ceil_char_boundary(&self, index: usize) -> usize {
        let len = self.len();
        let mut index = index.min(len);
        while index < len && !self.is_char_boundary(index) {
            index += 1;
        }
        index
    }
}

/// Text storage which can be edited in place.
///
/// Callers are expected to pass ranges and offsets that have already been validated against the
/// text (see [`TextRange`](crate::TextRange)).
pub trait EditableStorage: TextStorage {
    /// Inserts `text` at byte offset `at`.
    fn insert_str(&mut self, at: usize, text: &str);

    /// Removes the bytes in `range`.
    fn remove_range(&mut self, range: Range<usize>);
}

impl TextStorage for str {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        Self::is_char_boundary(self, index)
    }
}

impl TextStorage for String {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        self.as_str().is_char_boundary(index)
    }
}

impl<T: TextStorage + ?Sized> TextStorage for &T {
    fn len(&self) -> usize {
        T::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        T::is_char_boundary(self, index)
    }
}

impl EditableStorage for String {
    fn insert_str(&mut self, at: usize, text: &str) {
        Self::insert_str(self, at, text);
    }

    fn remove_range(&mut self, range: Range<usize>) {
        self.replace_range(range, "");
    }
}

#[cfg(test)]
mod tests {
    use super::{EditableStorage, TextStorage};
    use alloc::string::String;

    #[test]
    fn floor_and_ceil_find_enclosing_codepoint() {
        // Two 4-byte codepoints.
        let s = "🇯🇵";
        assert_eq!(TextStorage::floor_char_boundary(s, 2), 0);
        assert_eq!(TextStorage::ceil_char_boundary(s, 2), 4);
        assert_eq!(TextStorage::floor_char_boundary(s, 4), 4);
        assert_eq!(TextStorage::ceil_char_boundary(s, 7), 8);
    }

    #[test]
    fn boundaries_clamp_past_end() {
        let s = "abc";
        assert_eq!(TextStorage::floor_char_boundary(s, 10), 3);
        assert_eq!(TextStorage::ceil_char_boundary(s, 10), 3);
    }

    #[test]
    fn editable_string() {
        let mut s = String::from("Hello");
        EditableStorage::insert_str(&mut s, 5, " World");
        assert_eq!(s, "Hello World");
        s.remove_range(0..6);
        assert_eq!(s, "World");
        assert_eq!(TextStorage::len(&s), 5);
    }
}
