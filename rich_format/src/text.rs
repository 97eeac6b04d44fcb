// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::ops::Range;

use styled_runs::{Error, RunPartition, Runs, StyledRuns, TextRange, TextStorage};

use crate::{Alignment, AttributeKey, AttributeMap, AttributeValue, Font};

/// A styled text buffer: UTF-8 text partitioned into runs of equal [`AttributeMap`]s.
///
/// The partition is canonical after every mutation (see [`styled_runs::RunPartition`]). All
/// offsets are byte offsets on UTF-8 character boundaries.
///
/// Paragraphs are separated by `'\n'`; a paragraph includes its terminating newline.
#[derive(Clone, Debug)]
pub struct RichText {
    runs: StyledRuns<String, AttributeMap>,
    defaults: AttributeMap,
}

impl RichText {
    /// Creates a buffer with `defaults` applied to all of `text`.
    pub fn new(text: impl Into<String>, defaults: AttributeMap) -> Self {
        Self {
            runs: StyledRuns::new(text.into(), defaults.clone()),
            defaults,
        }
    }

    /// Creates a buffer from styled pieces, in order.
    ///
    /// Each piece's attributes are layered over `defaults`.
    ///
    /// ```
    /// use rich_format::{AttributeMap, Font, RichText};
    ///
    /// let defaults = AttributeMap::new().with(Font::system(14.0));
    /// let bold = AttributeMap::new().with(Font::system(14.0).bold_variant());
    /// let text = RichText::from_pieces([("Hello", bold), (" World", AttributeMap::new())], defaults);
    /// assert_eq!(text.as_str(), "Hello World");
    /// assert_eq!(text.run_count(), 2);
    /// ```
    pub fn from_pieces<'a>(
        pieces: impl IntoIterator<Item = (&'a str, AttributeMap)>,
        defaults: AttributeMap,
    ) -> Self {
        let mut text = Self::new(String::new(), defaults);
        for (piece, overrides) in pieces {
            let mut attributes = text.defaults.clone();
            attributes.merge(&overrides);
            let end = TextRange::caret(text.as_str(), text.len()).unwrap_or_default();
            text.runs.replace(end, piece, attributes);
        }
        text
    }

    /// The document default attributes, used at offset 0 and for new text with no other source.
    pub fn default_attributes(&self) -> &AttributeMap {
        &self.defaults
    }

    /// The default font, falling back to [`Font::default`] when the defaults carry none.
    pub fn default_font(&self) -> Font {
        self.defaults.font().cloned().unwrap_or_default()
    }

    /// The text content.
    pub fn as_str(&self) -> &str {
        self.runs.as_str()
    }

    /// The length of the text in bytes.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Validates a byte `range` against this text.
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        self.runs.range(range)
    }

    /// The range covering all text.
    pub fn full_range(&self) -> TextRange {
        TextRange::new_unchecked(0, self.len())
    }

    /// The underlying run partition.
    pub fn partition(&self) -> &RunPartition<AttributeMap> {
        self.runs.partition()
    }

    /// Iterate over all runs.
    pub fn runs(&self) -> Runs<'_, AttributeMap> {
        self.runs.runs()
    }

    /// The number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.partition().run_count()
    }

    /// Iterate over the runs sharing at least one byte with `range`.
    pub fn intersecting(&self, range: TextRange) -> Runs<'_, AttributeMap> {
        self.runs.intersecting(range)
    }

    /// The attributes of the character at byte `offset`.
    ///
    /// Fails with [`ErrorKind::OutOfBounds`](styled_runs::ErrorKind::OutOfBounds) for
    /// `offset >= len`.
    pub fn attributes_at(&self, offset: usize) -> Result<&AttributeMap, Error> {
        self.runs.attributes_at(offset)
    }

    /// Returns `true` if the run partition is canonical.
    pub fn is_canonical(&self) -> bool {
        self.runs.partition().is_canonical()
    }

    /// Sets every value of `attributes` over `range`, keeping other keys.
    pub fn set_attributes(&mut self, attributes: &AttributeMap, range: TextRange) {
        self.runs.update(range, |run| run.merge(attributes));
    }

    /// Sets one attribute value over `range`.
    pub fn set_attribute(&mut self, value: AttributeValue, range: TextRange) {
        self.runs.update(range, |run| {
            run.insert(value.clone());
        });
    }

    /// Removes `key` from every run over `range`.
    pub fn remove_attribute(&mut self, key: AttributeKey, range: TextRange) {
        self.runs.update(range, |run| {
            run.remove(key);
        });
    }

    /// Replaces `range` with `text` carrying `attributes`, returning the inserted range.
    pub fn replace(&mut self, range: TextRange, text: &str, attributes: AttributeMap) -> TextRange {
        self.runs.replace(range, text, attributes)
    }

    /// Inserts `text` at `offset` carrying `attributes`, returning the inserted range.
    pub fn insert(
        &mut self,
        offset: usize,
        text: &str,
        attributes: AttributeMap,
    ) -> Result<TextRange, Error> {
        self.runs.insert(offset, text, attributes)
    }

    /// Removes the text in `range`.
    pub fn remove(&mut self, range: TextRange) {
        self.runs.remove(range);
    }

    /// Expands `range` to the whole paragraphs it touches.
    ///
    /// A collapsed range expands to the paragraph containing the caret. A range ending right after
    /// a newline does not pull in the following paragraph.
    pub fn paragraph_range(&self, range: TextRange) -> TextRange {
        let text = self.as_str();
        let start = text[..range.start()]
            .rfind('\n')
            .map_or(0, |newline| newline + 1);
        let last = if range.is_collapsed() {
            range.start()
        } else {
            TextStorage::floor_char_boundary(text, range.end() - 1)
        };
        let end = text[last..]
            .find('\n')
            .map_or(text.len(), |newline| last + newline + 1);
        TextRange::new_unchecked(start, end)
    }

    /// The alignment of the paragraph containing the caret at `offset`.
    ///
    /// Returns `None` for an empty trailing paragraph, or if its first character carries no
    /// alignment.
    pub fn paragraph_alignment(&self, offset: usize) -> Option<Alignment> {
        let paragraph = self.paragraph_range(TextRange::new_unchecked(offset, offset));
        if paragraph.is_collapsed() {
            return None;
        }
        self.attributes_at(paragraph.start())
            .ok()
            .and_then(AttributeMap::alignment)
    }
}
