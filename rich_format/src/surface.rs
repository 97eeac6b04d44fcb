// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_runs::TextRange;

use crate::{AttributeKey, AttributeMap, RichText};

/// The text view the formatting engine operates on.
///
/// A surface owns the styled text buffer, the selection and the typing attributes. The engine
/// reads through [`attributed_text`](Self::attributed_text) and writes only through the mutating
/// methods, so hosts can observe every change (for example to schedule relayout).
///
/// [`RichEditor`](crate::RichEditor) is the in-crate implementation.
pub trait TextSurface {
    /// The styled text.
    fn attributed_text(&self) -> &RichText;

    /// The current selection. A collapsed range is a caret.
    fn selected_range(&self) -> TextRange;

    /// The attributes stamped onto the next typed text.
    fn typing_attributes(&self) -> &AttributeMap;

    /// Mutable access to the typing attributes.
    fn typing_attributes_mut(&mut self) -> &mut AttributeMap;

    /// Sets every value of `attributes` over `range`.
    fn set_attributes(&mut self, attributes: &AttributeMap, range: TextRange);

    /// Removes `key` over `range`.
    fn remove_attribute(&mut self, key: AttributeKey, range: TextRange);

    /// Brings the selection into view.
    fn scroll_to_selection(&mut self) {}
}
