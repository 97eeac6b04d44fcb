// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{ColorPalette, Control, StyleToggle, ToolbarEvent};

/// A group of toolbar controls which can be switched on or off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorSection {
    /// Bold, italic, underline and strikethrough.
    TextStyle,
    /// Font size buttons and label.
    FontAdjustment,
    /// The alignment button.
    TextAlignment,
    /// The insert image button.
    Media,
    /// A row of color swatches.
    ColorPalette,
}

impl EditorSection {
    /// Every section, in toolbar order.
    pub const ALL: [Self; 5] = [
        Self::TextStyle,
        Self::FontAdjustment,
        Self::TextAlignment,
        Self::Media,
        Self::ColorPalette,
    ];

    /// The sections shown when nothing else is configured: all but the color palette.
    pub const DEFAULT: [Self; 4] = [
        Self::TextStyle,
        Self::FontAdjustment,
        Self::TextAlignment,
        Self::Media,
    ];
}

/// Toolbar configuration, consumed once when a [`ToolbarSync`](crate::ToolbarSync) is built.
///
/// ```
/// use format_toolbar::{Control, EditorSection, ToolbarConfig};
///
/// let config = ToolbarConfig::default().with_sections([EditorSection::TextAlignment]);
/// assert_eq!(config.controls(), [Control::Alignment, Control::DismissKeyboard]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ToolbarConfig {
    sections: Vec<EditorSection>,
    palette: ColorPalette,
    min_font_size: f32,
    max_font_size: f32,
    font_size_step: f32,
}

impl ToolbarConfig {
    /// The smallest font size reachable with the size buttons, by default.
    pub const DEFAULT_MIN_FONT_SIZE: f32 = 8.0;

    /// The largest font size reachable with the size buttons, by default.
    pub const DEFAULT_MAX_FONT_SIZE: f32 = 72.0;

    /// The font size change per button press, by default.
    pub const DEFAULT_FONT_SIZE_STEP: f32 = 1.0;

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows exactly `sections`, in toolbar order. Duplicates are ignored.
    #[must_use]
    pub fn with_sections(mut self, sections: impl IntoIterator<Item = EditorSection>) -> Self {
        self.sections.clear();
        for section in sections {
            if !self.sections.contains(&section) {
                self.sections.push(section);
            }
        }
        self.sections
            .sort_by_key(|section| EditorSection::ALL.iter().position(|s| s == section));
        self
    }

    /// Uses `palette` for the color swatches.
    #[must_use]
    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Limits the size buttons to `min..=max`. Reversed bounds are swapped.
    ///
    /// Bounds that are not finite and positive are ignored, keeping the current bounds.
    #[must_use]
    pub fn with_font_size_bounds(mut self, min: f32, max: f32) -> Self {
        if !(is_positive_size(min) && is_positive_size(max)) {
            log::warn!("ignoring font size bounds {min}..={max}");
            return self;
        }
        if min > max {
            log::warn!("font size bounds {min}..={max} are reversed");
        }
        self.min_font_size = min.min(max);
        self.max_font_size = max.max(min);
        self
    }

    /// Sets the font size change per button press. The sign is ignored.
    ///
    /// A step that is zero or not finite is ignored, keeping the current step.
    #[must_use]
    pub fn with_font_size_step(mut self, step: f32) -> Self {
        if !is_positive_size(step.abs()) {
            log::warn!("ignoring font size step {step}");
            return self;
        }
        self.font_size_step = step.abs();
        self
    }

    /// The sections shown, in toolbar order.
    pub fn sections(&self) -> &[EditorSection] {
        &self.sections
    }

    /// Returns `true` if `section` is shown.
    pub fn contains(&self, section: EditorSection) -> bool {
        self.sections.contains(&section)
    }

    /// The color palette.
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// The smallest font size reachable with the size buttons.
    pub fn min_font_size(&self) -> f32 {
        self.min_font_size
    }

    /// The largest font size reachable with the size buttons.
    pub fn max_font_size(&self) -> f32 {
        self.max_font_size
    }

    /// The font size change per button press.
    pub fn font_size_step(&self) -> f32 {
        self.font_size_step
    }

    /// The controls the view should instantiate, in toolbar order.
    ///
    /// The keyboard button is always present and follows the main row; swatches come last.
    pub fn controls(&self) -> Vec<Control> {
        let mut controls = Vec::new();
        for section in &self.sections {
            match section {
                EditorSection::TextStyle => {
                    controls.extend(StyleToggle::ALL.map(Control::Toggle));
                }
                EditorSection::FontAdjustment => controls.extend([
                    Control::FontSizeIncrease,
                    Control::FontSizeLabel,
                    Control::FontSizeDecrease,
                ]),
                EditorSection::TextAlignment => controls.push(Control::Alignment),
                EditorSection::Media => controls.push(Control::InsertImage),
                EditorSection::ColorPalette => {}
            }
        }
        controls.push(Control::DismissKeyboard);
        if self.contains(EditorSection::ColorPalette) {
            controls.extend((0..self.palette.len()).map(Control::Swatch));
        }
        controls
    }

    /// The section whose controls produce `event`, if any.
    ///
    /// Font family changes come from outside the toolbar and keyboard dismissal is always
    /// available, so neither belongs to a section.
    pub fn section_for(event: &ToolbarEvent) -> Option<EditorSection> {
        match event {
            ToolbarEvent::TogglePressed(_) => Some(EditorSection::TextStyle),
            ToolbarEvent::FontSizeDelta(_) => Some(EditorSection::FontAdjustment),
            ToolbarEvent::AlignmentCycled => Some(EditorSection::TextAlignment),
            ToolbarEvent::ImageRequested => Some(EditorSection::Media),
            ToolbarEvent::ColorSelected(_) => Some(EditorSection::ColorPalette),
            ToolbarEvent::FontFamilySelected(_) | ToolbarEvent::KeyboardDismissRequested => None,
        }
    }

    /// Returns `true` if `event` comes from a control this configuration shows.
    pub fn accepts(&self, event: &ToolbarEvent) -> bool {
        Self::section_for(event).is_none_or(|section| self.contains(section))
    }
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            sections: EditorSection::DEFAULT.to_vec(),
            palette: ColorPalette::standard(),
            min_font_size: Self::DEFAULT_MIN_FONT_SIZE,
            max_font_size: Self::DEFAULT_MAX_FONT_SIZE,
            font_size_step: Self::DEFAULT_FONT_SIZE_STEP,
        }
    }
}

fn is_positive_size(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::{EditorSection, ToolbarConfig};
    use crate::{Control, SizeStep, StyleToggle, ToolbarEvent};

    #[test]
    fn default_sections_skip_palette() {
        let config = ToolbarConfig::default();
        assert_eq!(config.sections(), EditorSection::DEFAULT);
        assert!(!config.contains(EditorSection::ColorPalette));
        let controls = config.controls();
        assert_eq!(controls.len(), 10);
        assert_eq!(controls[0], Control::Toggle(StyleToggle::Bold));
        assert_eq!(controls[9], Control::DismissKeyboard);
        assert!(!controls.iter().any(|c| matches!(c, Control::Swatch(_))));
    }

    #[test]
    fn sections_are_ordered_and_deduplicated() {
        let config = ToolbarConfig::new().with_sections([
            EditorSection::ColorPalette,
            EditorSection::TextStyle,
            EditorSection::ColorPalette,
        ]);
        assert_eq!(
            config.sections(),
            [EditorSection::TextStyle, EditorSection::ColorPalette]
        );
        let controls = config.controls();
        assert_eq!(controls.len(), 4 + 1 + 10);
        assert_eq!(controls[4], Control::DismissKeyboard);
        assert_eq!(controls[5], Control::Swatch(0));
    }

    #[test]
    fn events_follow_sections() {
        let config = ToolbarConfig::new().with_sections([EditorSection::FontAdjustment]);
        assert!(config.accepts(&ToolbarEvent::FontSizeDelta(SizeStep::Increase)));
        assert!(config.accepts(&ToolbarEvent::KeyboardDismissRequested));
        assert!(!config.accepts(&ToolbarEvent::TogglePressed(StyleToggle::Bold)));
        assert!(!config.accepts(&ToolbarEvent::ImageRequested));
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let config = ToolbarConfig::new()
            .with_font_size_bounds(40.0, 10.0)
            .with_font_size_step(-2.0);
        assert_eq!(config.min_font_size(), 10.0);
        assert_eq!(config.max_font_size(), 40.0);
        assert_eq!(config.font_size_step(), 2.0);
    }

    #[test]
    fn malformed_sizes_keep_defaults() {
        let config = ToolbarConfig::new()
            .with_font_size_bounds(f32::NAN, 20.0)
            .with_font_size_bounds(0.0, f32::INFINITY)
            .with_font_size_step(f32::NAN)
            .with_font_size_step(0.0);
        assert_eq!(config.min_font_size(), ToolbarConfig::DEFAULT_MIN_FONT_SIZE);
        assert_eq!(config.max_font_size(), ToolbarConfig::DEFAULT_MAX_FONT_SIZE);
        assert_eq!(config.font_size_step(), ToolbarConfig::DEFAULT_FONT_SIZE_STEP);
    }
}
