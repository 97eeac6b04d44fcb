// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt;

/// Visual weight class of a font, on a scale from 1.0 to 1000.0.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Creates a new weight value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Slant of a font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Italic glyphs.
    Italic,
}

/// The family a [`Font`] is drawn from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// The platform's user interface font.
    #[default]
    System,
    /// A family looked up by name, e.g. `"AvenirNext-Regular"`.
    Named(Arc<str>),
}

impl FontFamily {
    /// Creates a named family.
    pub fn named(name: &str) -> Self {
        Self::Named(Arc::from(name))
    }

    /// Returns the family name, or `None` for [`FontFamily::System`].
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::System => None,
            Self::Named(name) => Some(&**name),
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("system-ui"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// The composite font attribute.
///
/// A font is one value combining family, size, weight and slant, because renderers expose one
/// font object per run. Bold and italic are therefore two *variants* of the same attribute rather
/// than two independent flags: [`Font::bold_variant`] and [`Font::italic_variant`] each reset the
/// other facet, so a font produced by the toolbar is never both bold and italic.
///
/// ```
/// use rich_format::Font;
///
/// let body = Font::system(17.0);
/// let bold = body.bold_variant();
/// assert!(bold.is_bold());
/// assert!(!bold.italic_variant().is_bold());
/// assert_eq!(bold.with_size(20.0).regular_variant(), Font::system(20.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
    weight: FontWeight,
    style: FontStyle,
}

impl Font {
    /// The body text size used when nothing else is configured.
    pub const DEFAULT_SIZE: f32 = 17.0;

    /// Creates a regular (normal weight, upright) font.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// Creates a regular font from the system family.
    pub fn system(size: f32) -> Self {
        Self::new(FontFamily::System, size)
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// The point size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The weight facet.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// The slant facet.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Returns `true` if the weight is at least [`FontWeight::SEMI_BOLD`].
    pub fn is_bold(&self) -> bool {
        self.weight >= FontWeight::SEMI_BOLD
    }

    /// Returns `true` if the font is italic.
    pub fn is_italic(&self) -> bool {
        self.style == FontStyle::Italic
    }

    /// The same font at another size. Weight and slant are kept.
    #[must_use]
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// The same font from another family. Size, weight and slant are kept.
    #[must_use]
    pub fn with_family(&self, family: FontFamily) -> Self {
        Self {
            family,
            ..self.clone()
        }
    }

    /// The bold, upright variant at this family and size.
    #[must_use]
    pub fn bold_variant(&self) -> Self {
        Self {
            weight: FontWeight::BOLD,
            style: FontStyle::Normal,
            ..self.clone()
        }
    }

    /// The italic, normal weight variant at this family and size.
    #[must_use]
    pub fn italic_variant(&self) -> Self {
        Self {
            weight: FontWeight::NORMAL,
            style: FontStyle::Italic,
            ..self.clone()
        }
    }

    /// The regular (normal weight, upright) variant at this family and size.
    #[must_use]
    pub fn regular_variant(&self) -> Self {
        Self::new(self.family.clone(), self.size)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(Self::DEFAULT_SIZE)
    }
}
