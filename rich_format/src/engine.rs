// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formatting operations over a [`TextSurface`].
//!
//! Every operation looks at the surface's selection first:
//!
//! - a collapsed selection (a caret) only ever reads and writes the typing attributes
//! - a range selection reads the intersecting runs and writes over exactly the selected range,
//!   except for paragraph-scoped attributes which cover whole paragraphs
//!
//! The run partition is canonical again when each operation returns.

use crate::{
    AttributeKey, AttributeMap, AttributeValue, Color, Font, FontFamily, LineStyle, TextSurface,
};

/// The state an attribute ended up in after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggled {
    /// The attribute is now set over the whole selection.
    On,
    /// The attribute is now cleared over the whole selection.
    Off,
}

impl Toggled {
    /// Returns `true` for [`Toggled::On`].
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

/// Toggles `on` over the selection.
///
/// If any part of the selection already carries exactly `on`, the attribute is cleared over the
/// whole selection: replaced by `off`, or removed when `off` is `None`. Otherwise `on` is set over
/// the whole selection.
///
/// With a caret, the decision is made against the typing attributes alone and only they change.
///
/// ```
/// use rich_format::engine::{self, Toggled};
/// use rich_format::{AttributeMap, AttributeValue, Font, LineStyle, RichEditor};
///
/// let mut editor = RichEditor::new("Hello World", AttributeMap::new().with(Font::system(14.0)));
/// editor.set_selection(0..5).unwrap();
/// let underline = AttributeValue::Underline(LineStyle::Single);
/// assert_eq!(engine::toggle(&mut editor, underline.clone(), None), Toggled::On);
/// assert_eq!(editor.text().run_count(), 2);
/// assert_eq!(engine::toggle(&mut editor, underline, None), Toggled::Off);
/// assert_eq!(editor.text().run_count(), 1);
/// ```
pub fn toggle<S: TextSurface + ?Sized>(
    surface: &mut S,
    on: AttributeValue,
    off: Option<AttributeValue>,
) -> Toggled {
    let key = on.key();
    debug_assert!(
        off.as_ref().is_none_or(|off| off.key() == key),
        "toggle values must share a key"
    );
    let range = surface.selected_range();

    if range.is_collapsed() {
        let typing = surface.typing_attributes_mut();
        if typing.get(key) == Some(&on) {
            match off {
                Some(off) => {
                    typing.insert(off);
                }
                None => {
                    typing.remove(key);
                }
            }
            log::debug!("typing attribute {key:?} toggled off");
            return Toggled::Off;
        }
        typing.insert(on);
        log::debug!("typing attribute {key:?} toggled on");
        return Toggled::On;
    }

    let present = surface
        .attributed_text()
        .intersecting(range)
        .any(|run| run.attributes.get(key) == Some(&on));
    if present {
        match off {
            Some(off) => surface.set_attributes(&AttributeMap::from(off), range),
            None => surface.remove_attribute(key, range),
        }
        log::debug!("{key:?} cleared over {:?}", range.as_range());
        Toggled::Off
    } else {
        surface.set_attributes(&AttributeMap::from(on), range);
        log::debug!("{key:?} set over {:?}", range.as_range());
        Toggled::On
    }
}

/// Toggles bold on the effective font.
///
/// Bold and italic are facets of one composite font, so turning bold on replaces italic.
pub fn toggle_bold<S: TextSurface + ?Sized>(surface: &mut S) -> Toggled {
    let base = effective_font(&*surface);
    if base.is_italic() {
        log::debug!("bold replaces italic on {}", base.family());
    }
    let on = AttributeValue::Font(base.bold_variant());
    let off = regular_font(&*surface, &base);
    toggle(surface, on, off)
}

/// Toggles italic on the effective font.
///
/// Bold and italic are facets of one composite font, so turning italic on replaces bold.
pub fn toggle_italic<S: TextSurface + ?Sized>(surface: &mut S) -> Toggled {
    let base = effective_font(&*surface);
    if base.is_bold() {
        log::debug!("italic replaces bold on {}", base.family());
    }
    let on = AttributeValue::Font(base.italic_variant());
    let off = regular_font(&*surface, &base);
    toggle(surface, on, off)
}

/// The value that turns a font facet off.
///
/// When the document defaults carry no font and the regular variant is the fallback font, the key
/// is removed instead, so the text returns to having no font attribute at all.
fn regular_font<S: TextSurface + ?Sized>(surface: &S, base: &Font) -> Option<AttributeValue> {
    let regular = base.regular_variant();
    let text = surface.attributed_text();
    if text.default_attributes().font().is_none() && regular == text.default_font() {
        None
    } else {
        Some(AttributeValue::Font(regular))
    }
}

/// Toggles a single underline.
pub fn toggle_underline<S: TextSurface + ?Sized>(surface: &mut S) -> Toggled {
    toggle(surface, AttributeValue::Underline(LineStyle::Single), None)
}

/// Toggles a single strikethrough.
pub fn toggle_strikethrough<S: TextSurface + ?Sized>(surface: &mut S) -> Toggled {
    toggle(surface, AttributeValue::Strikethrough(LineStyle::Single), None)
}

/// The attributes in effect for the selection.
///
/// With a caret these are the typing attributes. For a range, every key present in any
/// intersecting run is reported, taking the value from the first run (in text order) that defines
/// it.
pub fn query_effective<S: TextSurface + ?Sized>(surface: &S) -> AttributeMap {
    let range = surface.selected_range();
    if range.is_collapsed() {
        return surface.typing_attributes().clone();
    }
    let mut effective = AttributeMap::new();
    for run in surface.attributed_text().intersecting(range) {
        effective.merge_missing(run.attributes);
        if effective.len() == AttributeKey::ALL.len() {
            break;
        }
    }
    log::trace!("effective attributes over {:?}: {effective:?}", range.as_range());
    effective
}

/// Sets `value` over the selection unconditionally.
///
/// With a caret only the typing attributes change. Paragraph-scoped values (alignment) are widened
/// to the paragraphs the selection touches, a caret included, and are always written to the typing
/// attributes too.
pub fn set_uniform<S: TextSurface + ?Sized>(surface: &mut S, value: AttributeValue) {
    let key = value.key();
    let range = surface.selected_range();

    if key.is_paragraph_scoped() {
        let paragraphs = surface.attributed_text().paragraph_range(range);
        if !paragraphs.is_collapsed() {
            surface.set_attributes(&AttributeMap::from(value.clone()), paragraphs);
        }
        log::debug!("{key:?} set over paragraphs {:?}", paragraphs.as_range());
        surface.typing_attributes_mut().insert(value);
        return;
    }

    if range.is_collapsed() {
        log::debug!("typing attribute {key:?} set");
        surface.typing_attributes_mut().insert(value);
    } else {
        log::debug!("{key:?} set over {:?}", range.as_range());
        surface.set_attributes(&AttributeMap::from(value), range);
    }
}

/// Sets the foreground color over the selection.
pub fn set_color<S: TextSurface + ?Sized>(surface: &mut S, color: Color) {
    set_uniform(surface, AttributeValue::ForegroundColor(color));
}

/// The font in effect for the selection, falling back to the document default font.
pub fn effective_font<S: TextSurface + ?Sized>(surface: &S) -> Font {
    match query_effective(surface).font() {
        Some(font) => font.clone(),
        None => {
            let font = surface.attributed_text().default_font();
            log::warn!("selection carries no font, using {} at {}", font.family(), font.size());
            font
        }
    }
}

/// Changes the size of the effective font by `delta`, clamped to `min..=max`.
///
/// The whole font is reapplied over the selection with only its size replaced. Returns the new
/// size.
///
/// Non-finite arguments leave the selection untouched and return the current size. A current size
/// that is not a number is replaced by `min`.
///
/// ```
/// use rich_format::engine;
/// use rich_format::{AttributeMap, Font, RichEditor};
///
/// let mut editor = RichEditor::new("Hello", AttributeMap::new().with(Font::system(14.0)));
/// editor.set_selection(0..5).unwrap();
/// assert_eq!(engine::adjust_font_size(&mut editor, 2.0, 8.0, 15.0), 15.0);
/// assert_eq!(editor.text().attributes_at(0).unwrap().font(), Some(&Font::system(15.0)));
/// ```
pub fn adjust_font_size<S: TextSurface + ?Sized>(
    surface: &mut S,
    delta: f32,
    min: f32,
    max: f32,
) -> f32 {
    let (min, max) = if min > max {
        log::warn!("font size bounds {min}..={max} are reversed");
        (max, min)
    } else {
        (min, max)
    };
    let base = effective_font(&*surface);
    if !(delta.is_finite() && min.is_finite() && max.is_finite()) {
        log::warn!("ignoring font size change by {delta} within {min}..={max}");
        return base.size();
    }
    let target = base.size() + delta;
    let size = if target.is_nan() {
        log::warn!("font size {} is not a number, using {min}", base.size());
        min
    } else {
        target.clamp(min, max)
    };
    if size != target {
        log::debug!("font size {target} clamped to {size}");
    }
    set_uniform(surface, AttributeValue::Font(base.with_size(size)));
    size
}

/// Replaces the family of the effective font over the selection, keeping size, weight and slant.
pub fn set_font_family<S: TextSurface + ?Sized>(surface: &mut S, family: FontFamily) {
    let font = effective_font(&*surface).with_family(family);
    set_uniform(surface, AttributeValue::Font(font));
}
