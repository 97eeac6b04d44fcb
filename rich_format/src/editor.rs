// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::ops::Range;

use styled_runs::{Error, TextRange, TextStorage};

use crate::selection::inherited_typing_attributes;
use crate::{AttachmentId, AttributeKey, AttributeMap, RichText, SelectionState, TextSurface};

/// The character an inline attachment occupies.
pub const ATTACHMENT_CHARACTER: char = '\u{FFFC}';

/// Opaque representation of a generation.
///
/// Obtained from [`RichEditor::generation`].
// Overflow handling: the generations are only compared,
// so wrapping is fine. This could only fail if exactly
// `u32::MAX` generations happen between relayouts.
#[derive(PartialEq, Eq, Default, Clone, Copy, Debug)]
pub struct Generation(u32);

impl Generation {
    /// Make it not what it currently is.
    pub(crate) fn nudge(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// A styled text buffer with a selection, usable as a [`TextSurface`].
///
/// The editor does no layout. Hosts compare [`generation`](Self::generation) against the value
/// they last laid out to decide whether to re-measure.
#[derive(Clone, Debug)]
pub struct RichEditor {
    text: RichText,
    selection: SelectionState,
    generation: Generation,
    scroll_requested: bool,
}

impl RichEditor {
    /// Creates an editor over `text` styled with `defaults`, with the caret at the start.
    pub fn new(text: impl Into<String>, defaults: AttributeMap) -> Self {
        Self::from_text(RichText::new(text, defaults))
    }

    /// Creates an editor over an existing buffer, with the caret at the start.
    pub fn from_text(text: RichText) -> Self {
        let selection = SelectionState::new(&text);
        Self {
            text,
            selection,
            generation: Generation::default(),
            scroll_requested: false,
        }
    }

    /// The styled text.
    pub fn text(&self) -> &RichText {
        &self.text
    }

    /// The selection and typing attributes.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Get the current generation of the text.
    ///
    /// The generation changes on every change to the text or its attributes.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns whether the selection should be scrolled into view, and resets the request.
    pub fn take_scroll_request(&mut self) -> bool {
        core::mem::take(&mut self.scroll_requested)
    }

    /// Selects the byte `range`.
    pub fn set_selection(&mut self, range: Range<usize>) -> Result<(), Error> {
        self.selection.set_selection(&self.text, range)
    }

    /// Selects all text.
    pub fn select_all(&mut self) {
        self.selection.select(&self.text, self.text.full_range());
    }

    /// Moves the caret to the end of the text.
    pub fn move_to_end(&mut self) {
        let end = self.text.len();
        self.selection
            .select(&self.text, TextRange::new_unchecked(end, end));
    }

    /// Inserts `s` at the caret, or replaces the selected text with it.
    ///
    /// Text typed at a caret carries the typing attributes. Text replacing a selection carries the
    /// attributes of the first replaced character, which also become the typing attributes. The
    /// caret ends up after the inserted text.
    pub fn insert_or_replace_selection(&mut self, s: &str) {
        let range = self.selection.range();
        if s.is_empty() {
            self.delete_selection();
            return;
        }
        let attributes = if range.is_collapsed() {
            self.selection.typing_attributes().clone()
        } else {
            let mut attributes = self
                .text
                .attributes_at(range.start())
                .cloned()
                .unwrap_or_else(|_| self.selection.typing_attributes().clone());
            attributes.retain(|value| value.key().is_inherited_by_typing());
            *self.selection.typing_attributes_mut() = attributes.clone();
            attributes
        };
        let inserted = self.text.replace(range, s, attributes);
        self.selection.place_caret(inserted.end());
        self.generation.nudge();
    }

    /// Deletes the selected text. Does nothing for a caret.
    pub fn delete_selection(&mut self) {
        let range = self.selection.range();
        if range.is_collapsed() {
            return;
        }
        self.text.remove(range);
        self.selection.select(
            &self.text,
            TextRange::new_unchecked(range.start(), range.start()),
        );
        self.generation.nudge();
    }

    /// Deletes the selection, or the character before the caret.
    pub fn delete_backward(&mut self) {
        let range = self.selection.range();
        if !range.is_collapsed() {
            self.delete_selection();
            return;
        }
        if range.start() == 0 {
            return;
        }
        let start = TextStorage::floor_char_boundary(self.text.as_str(), range.start() - 1);
        self.text
            .remove(TextRange::new_unchecked(start, range.start()));
        self.selection
            .select(&self.text, TextRange::new_unchecked(start, start));
        self.generation.nudge();
    }

    /// Appends an attachment character carrying `id` at the end of the text.
    ///
    /// The attachment takes the typing attributes. The caret moves after it and the selection is
    /// scrolled into view. Returns the range of the attachment character.
    pub fn append_attachment(&mut self, id: AttachmentId) -> TextRange {
        let end = self.text.len();
        let attributes = self.selection.typing_attributes().clone().with(id);
        let mut buf = [0; 4];
        let inserted = self.text.replace(
            TextRange::new_unchecked(end, end),
            ATTACHMENT_CHARACTER.encode_utf8(&mut buf),
            attributes,
        );
        self.selection.place_caret(inserted.end());
        self.generation.nudge();
        self.scroll_to_selection();
        log::debug!("attachment {id:?} appended at {end}");
        inserted
    }

    /// Recomputes the typing attributes for the caret.
    ///
    /// Hosts call this after moving the caret by means the editor does not see.
    pub fn refresh_typing_attributes(&mut self) {
        let range = self.selection.range();
        if range.is_collapsed() {
            *self.selection.typing_attributes_mut() =
                inherited_typing_attributes(&self.text, range.start());
        }
    }
}

impl TextSurface for RichEditor {
    fn attributed_text(&self) -> &RichText {
        &self.text
    }

    fn selected_range(&self) -> TextRange {
        self.selection.range()
    }

    fn typing_attributes(&self) -> &AttributeMap {
        self.selection.typing_attributes()
    }

    fn typing_attributes_mut(&mut self) -> &mut AttributeMap {
        self.selection.typing_attributes_mut()
    }

    fn set_attributes(&mut self, attributes: &AttributeMap, range: TextRange) {
        self.text.set_attributes(attributes, range);
        self.generation.nudge();
    }

    fn remove_attribute(&mut self, key: AttributeKey, range: TextRange) {
        self.text.remove_attribute(key, range);
        self.generation.nudge();
    }

    fn scroll_to_selection(&mut self) {
        self.scroll_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::{ATTACHMENT_CHARACTER, RichEditor};
    use crate::{AttachmentId, AttributeKey, AttributeMap, AttributeValue, Font, LineStyle};

    fn editor(text: &str) -> RichEditor {
        RichEditor::new(text, AttributeMap::new().with(Font::system(14.0)))
    }

    #[test]
    fn typing_stamps_typing_attributes() {
        let mut editor = editor("ab");
        editor.set_selection(2..2).unwrap();
        editor
            .selection
            .typing_attributes_mut()
            .insert(AttributeValue::Underline(LineStyle::Single));
        editor.insert_or_replace_selection("cd");
        assert_eq!(editor.text().as_str(), "abcd");
        assert_eq!(editor.selection().range().as_range(), 4..4);
        assert_eq!(
            editor.text().attributes_at(2).unwrap().underline(),
            Some(LineStyle::Single)
        );
        assert_eq!(editor.text().attributes_at(1).unwrap().underline(), None);
        // Typing continues with the same attributes.
        assert_eq!(
            editor.selection().typing_attributes().underline(),
            Some(LineStyle::Single)
        );
    }

    #[test]
    fn replacing_takes_first_replaced_attributes() {
        let mut editor = editor("one two");
        editor.text.set_attribute(
            AttributeValue::Strikethrough(LineStyle::Single),
            editor.text.range(4..7).unwrap(),
        );
        editor.set_selection(4..7).unwrap();
        editor.insert_or_replace_selection("three");
        assert_eq!(editor.text().as_str(), "one three");
        assert_eq!(editor.text().run_count(), 2);
        assert_eq!(
            editor.text().attributes_at(8).unwrap().strikethrough(),
            Some(LineStyle::Single)
        );
        assert_eq!(editor.selection().range().as_range(), 9..9);
    }

    #[test]
    fn delete_backward_handles_multibyte() {
        let mut editor = editor("aé");
        editor.move_to_end();
        let before = editor.generation();
        editor.delete_backward();
        assert_eq!(editor.text().as_str(), "a");
        assert_eq!(editor.selection().range().as_range(), 1..1);
        assert_ne!(editor.generation(), before);

        editor.set_selection(0..0).unwrap();
        let before = editor.generation();
        editor.delete_backward();
        assert_eq!(editor.text().as_str(), "a");
        assert_eq!(editor.generation(), before);
    }

    #[test]
    fn delete_selection_merges_runs() {
        let mut editor = editor("abc");
        editor.text.set_attribute(
            AttributeValue::Underline(LineStyle::Double),
            editor.text.range(1..2).unwrap(),
        );
        assert_eq!(editor.text().run_count(), 3);
        editor.set_selection(1..2).unwrap();
        editor.delete_backward();
        assert_eq!(editor.text().as_str(), "ac");
        assert_eq!(editor.text().run_count(), 1);
    }

    #[test]
    fn append_attachment_at_end() {
        let mut editor = editor("pic: ");
        let range = editor.append_attachment(AttachmentId(3));
        assert_eq!(range.as_range(), 5..8);
        assert!(editor.text().as_str().ends_with(ATTACHMENT_CHARACTER));
        let attributes = editor.text().attributes_at(5).unwrap();
        assert_eq!(attributes.attachment(), Some(AttachmentId(3)));
        assert!(
            !editor
                .selection()
                .typing_attributes()
                .contains_key(AttributeKey::Attachment)
        );
        assert!(editor.take_scroll_request());
        assert!(!editor.take_scroll_request());

        // Typing after the attachment does not repeat it.
        editor.insert_or_replace_selection("x");
        assert_eq!(editor.text().attributes_at(8).unwrap().attachment(), None);
    }
}
