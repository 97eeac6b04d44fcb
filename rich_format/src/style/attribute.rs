// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use super::{Alignment, AttachmentId, Font, LineStyle};

/// Identifies one style dimension.
///
/// Keys are ordered; [`AttributeMap`](super::AttributeMap) iterates in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    /// The composite [`Font`].
    Font,
    /// Underline decoration.
    Underline,
    /// Strikethrough decoration.
    Strikethrough,
    /// Text color.
    ForegroundColor,
    /// Paragraph alignment.
    Alignment,
    /// An inline attachment (e.g. an image) occupying an object replacement character.
    Attachment,
}

impl AttributeKey {
    /// Every key, in order.
    pub const ALL: [Self; 6] = [
        Self::Font,
        Self::Underline,
        Self::Strikethrough,
        Self::ForegroundColor,
        Self::Alignment,
        Self::Attachment,
    ];

    /// Returns `true` for attributes which apply to whole paragraphs rather than characters.
    pub fn is_paragraph_scoped(self) -> bool {
        matches!(self, Self::Alignment)
    }

    /// Returns `true` for attributes which must not carry over onto newly typed text.
    pub fn is_inherited_by_typing(self) -> bool {
        !matches!(self, Self::Attachment)
    }
}

/// A value for one [`AttributeKey`].
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// The composite font.
    Font(Font),
    /// Underline style.
    Underline(LineStyle),
    /// Strikethrough style.
    Strikethrough(LineStyle),
    /// Text color.
    ForegroundColor(Color),
    /// Paragraph alignment.
    Alignment(Alignment),
    /// Attachment identifier.
    Attachment(AttachmentId),
}

impl AttributeValue {
    /// The key this value belongs to.
    pub fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::Underline(_) => AttributeKey::Underline,
            Self::Strikethrough(_) => AttributeKey::Strikethrough,
            Self::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Self::Alignment(_) => AttributeKey::Alignment,
            Self::Attachment(_) => AttributeKey::Attachment,
        }
    }
}

impl From<Font> for AttributeValue {
    fn from(value: Font) -> Self {
        Self::Font(value)
    }
}

impl From<Color> for AttributeValue {
    fn from(value: Color) -> Self {
        Self::ForegroundColor(value)
    }
}

impl From<Alignment> for AttributeValue {
    fn from(value: Alignment) -> Self {
        Self::Alignment(value)
    }
}

impl From<AttachmentId> for AttributeValue {
    fn from(value: AttachmentId) -> Self {
        Self::Attachment(value)
    }
}
