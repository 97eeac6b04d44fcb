// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rich_format::{Alignment, FontFamily};

use peniko::Color;

/// One of the four character style buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleToggle {
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
    /// Single underline.
    Underline,
    /// Single strikethrough.
    Strikethrough,
}

impl StyleToggle {
    /// The toggles in toolbar order.
    pub const ALL: [Self; 4] = [Self::Bold, Self::Italic, Self::Underline, Self::Strikethrough];
}

/// Direction of a font size step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeStep {
    /// One step larger.
    Increase,
    /// One step smaller.
    Decrease,
}

/// A control the toolbar view instantiates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// A character style button.
    Toggle(StyleToggle),
    /// The font size increase button.
    FontSizeIncrease,
    /// The label showing the current font size.
    FontSizeLabel,
    /// The font size decrease button.
    FontSizeDecrease,
    /// The alignment button, whose icon shows the current alignment.
    Alignment,
    /// The insert image button.
    InsertImage,
    /// The button hiding the keyboard.
    DismissKeyboard,
    /// The color swatch at this palette index.
    Swatch(usize),
}

/// An image the view shows on a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Left aligned lines.
    AlignLeft,
    /// Centered lines.
    AlignCenter,
    /// Right aligned lines.
    AlignRight,
    /// Justified lines.
    AlignJustified,
    /// A plain color swatch.
    Swatch,
    /// A color swatch with a check mark, for the current color.
    SwatchSelected,
}

impl Icon {
    /// The icon of the alignment button for `alignment`.
    ///
    /// Natural alignment shows as centered.
    pub fn for_alignment(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Left => Self::AlignLeft,
            Alignment::Center | Alignment::Natural => Self::AlignCenter,
            Alignment::Right => Self::AlignRight,
            Alignment::Justified => Self::AlignJustified,
        }
    }
}

/// Something the user did on the toolbar.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolbarEvent {
    /// A character style button was pressed.
    TogglePressed(StyleToggle),
    /// The alignment button was pressed.
    AlignmentCycled,
    /// A font size button was pressed.
    FontSizeDelta(SizeStep),
    /// A color swatch was picked.
    ColorSelected(Color),
    /// A font family was picked.
    FontFamilySelected(FontFamily),
    /// The insert image button was pressed.
    ImageRequested,
    /// The keyboard button was pressed.
    KeyboardDismissRequested,
}

/// Work only the host can do, returned from [`ToolbarSync::handle`](crate::ToolbarSync::handle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostRequest {
    /// Present an image picker, then call
    /// [`RichEditor::append_attachment`](rich_format::RichEditor::append_attachment) with the
    /// result.
    PickImage,
    /// Hide the keyboard.
    DismissKeyboard,
}

/// The alignment the alignment button switches to from `current`.
///
/// Cycles left, center, right and back to left. Justified and natural alignment stay put.
pub fn next_alignment(current: Alignment) -> Alignment {
    match current {
        Alignment::Left => Alignment::Center,
        Alignment::Center => Alignment::Right,
        Alignment::Right => Alignment::Left,
        Alignment::Justified | Alignment::Natural => current,
    }
}
