// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use peniko::Color;
use rich_format::{Alignment, AttributeMap, Font, LineStyle};

use crate::{ColorPalette, Icon, StyleToggle};

/// What every toolbar control should show for a set of effective attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolbarState {
    /// The bold button is active.
    pub bold: bool,
    /// The italic button is active.
    pub italic: bool,
    /// The underline button is active.
    pub underline: bool,
    /// The strikethrough button is active.
    pub strikethrough: bool,
    /// The alignment shown on the alignment button.
    pub alignment: Alignment,
    /// The font size shown on the size label.
    pub font_size: f32,
    /// The current text color.
    pub color: Color,
    /// The palette swatch matching `color`, if any.
    pub swatch: Option<usize>,
}

impl ToolbarState {
    /// Maps effective attributes to control state.
    ///
    /// Missing attributes are normalized: no font means `default_font`, no alignment means left,
    /// and no color means the palette's default color. Only single lines highlight the underline
    /// and strikethrough buttons, as those are what the buttons apply.
    pub fn from_effective(
        attributes: &AttributeMap,
        default_font: &Font,
        palette: &ColorPalette,
    ) -> Self {
        let font = attributes.font().unwrap_or(default_font);
        let color = palette.resolve(attributes.foreground_color());
        Self {
            bold: font.is_bold(),
            italic: font.is_italic(),
            underline: attributes.underline() == Some(LineStyle::Single),
            strikethrough: attributes.strikethrough() == Some(LineStyle::Single),
            alignment: attributes.alignment().unwrap_or_default(),
            font_size: font.size(),
            color,
            swatch: palette.swatch_index(Some(color)),
        }
    }

    /// Returns `true` if the button for `toggle` is active.
    pub fn is_active(&self, toggle: StyleToggle) -> bool {
        match toggle {
            StyleToggle::Bold => self.bold,
            StyleToggle::Italic => self.italic,
            StyleToggle::Underline => self.underline,
            StyleToggle::Strikethrough => self.strikethrough,
        }
    }

    /// The icon of the alignment button.
    pub fn alignment_icon(&self) -> Icon {
        Icon::for_alignment(self.alignment)
    }

    /// The size label text: the font size without its fractional part.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "font sizes are far below i32::MAX and the label drops the fraction"
    )]
    pub fn size_label(&self) -> String {
        alloc::format!("{}", self.font_size as i32)
    }
}
