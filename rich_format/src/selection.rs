// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use styled_runs::{Error, TextRange, TextStorage};

use crate::{AttributeMap, RichText};

/// The current selection together with the typing attributes.
///
/// Typing attributes are the style stamped onto the next inserted text while the selection is
/// collapsed. They are recomputed whenever the caret moves, and left untouched while a range is
/// selected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    range: TextRange,
    typing: AttributeMap,
}

impl SelectionState {
    /// Creates a caret at the start of `text`, typing with the document defaults.
    pub fn new(text: &RichText) -> Self {
        Self {
            range: TextRange::default(),
            typing: inherited_typing_attributes(text, 0),
        }
    }

    /// The selected range.
    pub fn range(&self) -> TextRange {
        self.range
    }

    /// Returns `true` if the selection is a caret.
    pub fn is_collapsed(&self) -> bool {
        self.range.is_collapsed()
    }

    /// The typing attributes.
    pub fn typing_attributes(&self) -> &AttributeMap {
        &self.typing
    }

    /// Mutable access to the typing attributes.
    pub fn typing_attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.typing
    }

    /// Moves the selection to `range`, validated against `text`.
    ///
    /// When the new selection is collapsed the typing attributes are recomputed from the character
    /// before the caret, with the paragraph alignment overlaid.
    pub fn set_selection(&mut self, text: &RichText, range: Range<usize>) -> Result<(), Error> {
        let range = text.range(range)?;
        self.select(text, range);
        Ok(())
    }

    /// Moves the selection to an already validated `range`.
    pub fn select(&mut self, text: &RichText, range: TextRange) {
        self.range = range;
        if range.is_collapsed() {
            self.typing = inherited_typing_attributes(text, range.start());
        }
        log::trace!("selection moved to {:?}", range.as_range());
    }

    /// Places the caret at `offset` without touching the typing attributes.
    ///
    /// Used after inserting text, where the typing attributes must survive.
    pub(crate) fn place_caret(&mut self, offset: usize) {
        self.range = TextRange::new_unchecked(offset, offset);
    }
}

/// The attributes new text typed at `offset` would carry.
///
/// These are the attributes of the character before `offset`, or the document defaults at the
/// start of the text. The alignment of the paragraph containing `offset` is overlaid, and
/// attributes that only make sense on their own character (attachments) are dropped.
pub fn inherited_typing_attributes(text: &RichText, offset: usize) -> AttributeMap {
    let mut typing = if offset == 0 {
        text.default_attributes().clone()
    } else {
        let previous = TextStorage::floor_char_boundary(text.as_str(), offset - 1);
        text.attributes_at(previous)
            .cloned()
            .unwrap_or_else(|_| text.default_attributes().clone())
    };
    if let Some(alignment) = text.paragraph_alignment(offset) {
        typing.insert(alignment);
    }
    typing.retain(|value| value.key().is_inherited_by_typing());
    typing
}
