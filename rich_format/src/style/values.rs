// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// The style of an underline or strikethrough decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// A single thin line. This is what the toolbar toggles.
    #[default]
    Single,
    /// Two thin lines.
    Double,
    /// A single thick line.
    Thick,
}

/// Horizontal alignment of a paragraph.
///
/// Alignment is paragraph-scoped: setting it always covers whole paragraphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center each line.
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch lines to fill the width; the last line is aligned naturally.
    Justified,
    /// Left for left-to-right text, right for right-to-left text.
    Natural,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justified => "justified",
            Self::Natural => "natural",
        })
    }
}

/// Opaque identifier of an inline attachment such as an image.
///
/// The host owns the attachment payload; the text only records which attachment sits where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentId(pub u64);
