// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::Color;

/// The text colors offered by the toolbar.
///
/// A palette has one designated default color, used for text that carries no color of its own,
/// followed by an ordered list of options. Swatches are presented default first.
///
/// ```
/// use format_toolbar::ColorPalette;
/// use peniko::Color;
///
/// let palette = ColorPalette::standard();
/// assert_eq!(palette.default_color(), Color::BLACK);
/// assert_eq!(palette.len(), 10);
/// assert_eq!(palette.swatch_index(None), Some(0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ColorPalette {
    default: Color,
    options: Vec<Color>,
}

impl ColorPalette {
    /// The standard options, as `0xRRGGBB`.
    pub const STANDARD_OPTIONS: [u32; 9] = [
        0xDD4E48, 0xED734A, 0xF1AA3E, 0x479D60, 0x5AC2C5, 0x50AAF8, 0x2355F6, 0x9123F4, 0xEA5CAE,
    ];

    /// Creates a palette from a default color and further options.
    ///
    /// Options equal to the default are dropped, so the default is only offered once.
    pub fn new(default: Color, options: impl IntoIterator<Item = Color>) -> Self {
        let mut palette = Self {
            default,
            options: Vec::new(),
        };
        for option in options {
            if option == default || palette.options.contains(&option) {
                log::warn!("dropping duplicate palette color {option:?}");
                continue;
            }
            palette.options.push(option);
        }
        palette
    }

    /// Black text followed by the nine standard colors.
    pub fn standard() -> Self {
        Self::new(Color::BLACK, Self::STANDARD_OPTIONS.map(color_from_rgb))
    }

    /// The color of text that carries none.
    pub fn default_color(&self) -> Color {
        self.default
    }

    /// The options besides the default, in order.
    pub fn options(&self) -> &[Color] {
        &self.options
    }

    /// The number of swatches, the default included.
    pub fn len(&self) -> usize {
        self.options.len() + 1
    }

    /// Always `false`: a palette has at least its default color.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over every swatch, default first.
    pub fn swatches(&self) -> impl Iterator<Item = Color> + '_ {
        core::iter::once(self.default).chain(self.options.iter().copied())
    }

    /// The swatch color at `index`.
    pub fn get(&self, index: usize) -> Option<Color> {
        match index {
            0 => Some(self.default),
            _ => self.options.get(index - 1).copied(),
        }
    }

    /// Resolves an effective text color: missing colors are the default color.
    pub fn resolve(&self, color: Option<Color>) -> Color {
        color.unwrap_or(self.default)
    }

    /// The index of the swatch matching `color`, with a missing color matching the default.
    ///
    /// Returns `None` when the color is not in the palette.
    pub fn swatch_index(&self, color: Option<Color>) -> Option<usize> {
        let color = self.resolve(color);
        self.swatches().position(|swatch| swatch == color)
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::standard()
    }
}

/// Creates an opaque color from `0xRRGGBB`.
pub fn color_from_rgb(rgb: u32) -> Color {
    let [_, r, g, b] = rgb.to_be_bytes();
    Color::from_rgb8(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::{ColorPalette, color_from_rgb};
    use peniko::Color;

    #[test]
    fn hex_colors() {
        assert_eq!(color_from_rgb(0xDD4E48), Color::from_rgb8(0xDD, 0x4E, 0x48));
        assert_eq!(color_from_rgb(0x000000), Color::BLACK);
    }

    #[test]
    fn standard_palette_order() {
        let palette = ColorPalette::standard();
        let swatches: alloc::vec::Vec<_> = palette.swatches().collect();
        assert_eq!(swatches.len(), 10);
        assert_eq!(swatches[0], Color::BLACK);
        assert_eq!(swatches[1], color_from_rgb(0xDD4E48));
        assert_eq!(swatches[9], color_from_rgb(0xEA5CAE));
        assert_eq!(palette.get(4), Some(color_from_rgb(0x479D60)));
        assert_eq!(palette.get(10), None);
    }

    #[test]
    fn default_is_explicit() {
        let red = color_from_rgb(0xDD4E48);
        let palette = ColorPalette::new(Color::WHITE, [red, Color::WHITE, red]);
        assert_eq!(palette.options(), &[red]);
        assert_eq!(palette.resolve(None), Color::WHITE);
        assert_eq!(palette.swatch_index(None), Some(0));
        assert_eq!(palette.swatch_index(Some(red)), Some(1));
        assert_eq!(palette.swatch_index(Some(Color::BLACK)), None);
    }
}
