// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::engine::{self, Toggled};
use crate::{
    Alignment, AttributeKey, AttributeMap, AttributeValue, Color, Font, LineStyle, RichEditor,
    RichText, TextSurface,
};
use alloc::vec::Vec;
use core::ops::Range;
use styled_runs::TextStorage;

fn defaults() -> AttributeMap {
    AttributeMap::new().with(Font::system(14.0))
}

/// Reference implementation of the effective attribute query.
///
/// This visits every character in the range and looks its attributes up one at a time, keeping
/// the first value seen per key. The engine walks the intersecting runs instead; this helper
/// exists to assert that both agree.
fn reference_effective(text: &RichText, range: Range<usize>) -> AttributeMap {
    let mut effective = AttributeMap::new();
    for offset in range {
        if TextStorage::is_char_boundary(text.as_str(), offset) {
            effective.merge_missing(text.attributes_at(offset).unwrap());
        }
    }
    effective
}

/// Reference implementation of a range toggle on a per-byte attribute model.
fn reference_toggle(
    model: &mut [AttributeMap],
    range: Range<usize>,
    on: &AttributeValue,
    off: Option<&AttributeValue>,
) {
    let key = on.key();
    let present = model[range.clone()]
        .iter()
        .any(|attributes| attributes.get(key) == Some(on));
    for attributes in &mut model[range] {
        match (present, off) {
            (false, _) => {
                attributes.insert(on.clone());
            }
            (true, Some(off)) => {
                attributes.insert(off.clone());
            }
            (true, None) => {
                attributes.remove(key);
            }
        }
    }
}

/// Expands the runs of `text` to one attribute map per byte.
fn per_byte(text: &RichText) -> Vec<AttributeMap> {
    let mut out = Vec::new();
    for run in text.runs() {
        for _ in run.range {
            out.push(run.attributes.clone());
        }
    }
    out
}

/// A random subrange of `0..len`.
fn random_range(rng: &mut fastrand::Rng, len: usize) -> Range<usize> {
    let a = rng.usize(..=len);
    let b = rng.usize(..=len);
    a.min(b)..a.max(b)
}

fn toggle_values(choice: usize) -> (AttributeValue, Option<AttributeValue>) {
    let base = Font::system(14.0);
    match choice {
        0 => (
            AttributeValue::Font(base.bold_variant()),
            Some(AttributeValue::Font(base.regular_variant())),
        ),
        1 => (
            AttributeValue::Font(base.italic_variant()),
            Some(AttributeValue::Font(base.regular_variant())),
        ),
        2 => (AttributeValue::Underline(LineStyle::Single), None),
        _ => (AttributeValue::Strikethrough(LineStyle::Single), None),
    }
}

#[test]
fn toggles_match_reference_and_stay_canonical() {
    let source = "The quick brown fox\njumps over\nthe lazy dog";
    let mut editor = RichEditor::new(source, defaults());
    let mut model: Vec<AttributeMap> = (0..source.len()).map(|_| defaults()).collect();
    let mut rng = fastrand::Rng::with_seed(0x2545_f491);

    for _ in 0..200 {
        let range = random_range(&mut rng, source.len());
        let (on, off) = toggle_values(rng.usize(..4));
        editor.set_selection(range.clone()).unwrap();
        engine::toggle(&mut editor, on.clone(), off.clone());
        if !range.is_empty() {
            reference_toggle(&mut model, range, &on, off.as_ref());
        }

        assert!(editor.text().is_canonical());
        let mut partition = editor.text().partition().clone();
        assert_eq!(partition.coalesce(), 0);
        assert_eq!(per_byte(editor.text()), model);
    }
}

#[test]
fn query_matches_reference() {
    let source = "héllo wörld, styled\ntext";
    let mut editor = RichEditor::new(source, defaults());
    let mut rng = fastrand::Rng::with_seed(0x9e37_79b9);
    let boundaries: Vec<usize> = source
        .char_indices()
        .map(|(ix, _)| ix)
        .chain([source.len()])
        .collect();
    let pick = |rng: &mut fastrand::Rng| {
        let a = boundaries[rng.usize(..boundaries.len())];
        let b = boundaries[rng.usize(..boundaries.len())];
        a.min(b)..a.max(b)
    };

    for step in 0..60 {
        let range = pick(&mut rng);
        editor.set_selection(range).unwrap();
        match step % 3 {
            0 => {
                let (on, off) = toggle_values(rng.usize(..4));
                engine::toggle(&mut editor, on, off);
            }
            1 => engine::set_color(&mut editor, Color::from_rgb8(0x47, 0x9d, 0x60)),
            _ => {
                engine::adjust_font_size(&mut editor, 1.0, 8.0, 20.0);
            }
        }

        let range = pick(&mut rng);
        if range.is_empty() {
            continue;
        }
        editor.set_selection(range.clone()).unwrap();
        assert_eq!(
            engine::query_effective(&editor),
            reference_effective(editor.text(), range)
        );
    }
}

#[test]
fn toggle_round_trip() {
    let mut editor = RichEditor::new("Hello World", defaults());
    editor.set_selection(2..9).unwrap();
    let before = editor.text().partition().clone();

    assert_eq!(engine::toggle_bold(&mut editor), Toggled::On);
    assert_eq!(engine::toggle_bold(&mut editor), Toggled::Off);
    assert_eq!(editor.text().partition(), &before);

    assert!(engine::toggle_underline(&mut editor).is_on());
    assert!(!engine::toggle_underline(&mut editor).is_on());
    assert_eq!(editor.text().partition(), &before);
}

#[test]
fn mixed_range_is_cleared_in_bulk() {
    let bold = AttributeMap::new().with(Font::system(14.0).bold_variant());
    let text = RichText::from_pieces([("Hello", bold), (" World", AttributeMap::new())], defaults());
    let mut editor = RichEditor::from_text(text);
    editor.set_selection(0..11).unwrap();

    assert_eq!(engine::toggle_bold(&mut editor), Toggled::Off);
    let runs: Vec<_> = editor.text().runs().collect();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].range, 0..11);
    assert!(!runs[0].attributes.font().unwrap().is_bold());
}

#[test]
fn caret_toggles_only_typing_attributes() {
    let mut editor = RichEditor::new("Hello", defaults());
    editor.set_selection(3..3).unwrap();
    let before = editor.text().partition().clone();
    let generation = editor.generation();

    assert!(engine::toggle_italic(&mut editor).is_on());
    assert!(engine::toggle_strikethrough(&mut editor).is_on());
    assert_eq!(editor.text().partition(), &before);
    assert_eq!(editor.generation(), generation);

    let effective = engine::query_effective(&editor);
    assert!(effective.font().unwrap().is_italic());
    assert_eq!(effective.strikethrough(), Some(LineStyle::Single));
}

#[test]
fn uniform_range_reports_exact_attributes() {
    let bold = Font::system(14.0).bold_variant();
    let mut editor = RichEditor::new("Hello World", AttributeMap::new().with(bold.clone()));
    editor.set_selection(0..5).unwrap();
    assert_eq!(
        engine::query_effective(&editor),
        AttributeMap::new().with(bold)
    );
}

#[test]
fn font_size_is_clamped() {
    let mut editor = RichEditor::new("Hello", defaults());
    editor.set_selection(0..5).unwrap();
    assert!(engine::toggle_bold(&mut editor).is_on());

    for _ in 0..10 {
        let size = engine::adjust_font_size(&mut editor, 4.0, 9.0, 30.0);
        assert!((9.0..=30.0).contains(&size));
    }
    let font = editor.text().attributes_at(0).unwrap().font().unwrap().clone();
    assert_eq!(font.size(), 30.0);
    assert!(font.is_bold());

    // At the bound the size stays put and the facets are reapplied unchanged.
    assert_eq!(engine::adjust_font_size(&mut editor, 4.0, 9.0, 30.0), 30.0);
    assert_eq!(editor.text().attributes_at(0).unwrap().font(), Some(&font));

    for _ in 0..10 {
        engine::adjust_font_size(&mut editor, -4.0, 9.0, 30.0);
    }
    assert_eq!(engine::effective_font(&editor).size(), 9.0);

    // Reversed bounds are swapped.
    assert_eq!(engine::adjust_font_size(&mut editor, -100.0, 12.0, 10.0), 10.0);
}

#[test]
fn caret_font_size_changes_typing_attributes() {
    let mut editor = RichEditor::new("Hello", defaults());
    editor.move_to_end();
    assert_eq!(engine::adjust_font_size(&mut editor, 2.0, 9.0, 30.0), 16.0);
    assert_eq!(editor.text().run_count(), 1);
    editor.insert_or_replace_selection("!");
    assert_eq!(
        editor.text().attributes_at(5).unwrap().font(),
        Some(&Font::system(16.0))
    );
}

#[test]
fn alignment_covers_the_paragraph() {
    let mut editor = RichEditor::new("first line\nsecond line\nthird", defaults());
    editor.set_selection(14..16).unwrap();
    engine::set_uniform(&mut editor, AttributeValue::Alignment(Alignment::Center));

    for offset in 11..23 {
        assert_eq!(
            editor.text().attributes_at(offset).unwrap().alignment(),
            Some(Alignment::Center)
        );
    }
    assert_eq!(editor.text().attributes_at(10).unwrap().alignment(), None);
    assert_eq!(editor.text().attributes_at(23).unwrap().alignment(), None);

    // A different caret in the same paragraph reports the alignment.
    editor.set_selection(20..20).unwrap();
    assert_eq!(
        engine::query_effective(&editor).alignment(),
        Some(Alignment::Center)
    );
    // The start of the paragraph inherits from the previous newline, but still reports it.
    editor.set_selection(11..11).unwrap();
    assert_eq!(
        engine::query_effective(&editor).alignment(),
        Some(Alignment::Center)
    );
    editor.set_selection(2..2).unwrap();
    assert_eq!(engine::query_effective(&editor).alignment(), None);
}

#[test]
fn caret_alignment_applies_to_its_paragraph() {
    let mut editor = RichEditor::new("one\ntwo", defaults());
    editor.set_selection(1..1).unwrap();
    engine::set_uniform(&mut editor, AttributeValue::Alignment(Alignment::Right));
    assert_eq!(
        editor.typing_attributes().alignment(),
        Some(Alignment::Right)
    );
    assert_eq!(
        editor.text().attributes_at(3).unwrap().alignment(),
        Some(Alignment::Right)
    );
    assert_eq!(editor.text().attributes_at(4).unwrap().alignment(), None);
}

#[test]
fn typing_attributes_stamp_only_new_text() {
    let mut editor = RichEditor::new("", defaults());
    editor.insert_or_replace_selection("Hi");
    assert!(engine::toggle_bold(&mut editor).is_on());
    editor.insert_or_replace_selection("Bold");

    assert_eq!(editor.text().as_str(), "HiBold");
    let runs: Vec<_> = editor.text().runs().collect();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].range, 0..2);
    assert!(!runs[0].attributes.font().unwrap().is_bold());
    assert_eq!(runs[1].range, 2..6);
    assert!(runs[1].attributes.font().unwrap().is_bold());
}

#[test]
fn bold_and_italic_are_exclusive() {
    let mut editor = RichEditor::new("Hello", defaults());
    editor.set_selection(0..5).unwrap();
    assert!(engine::toggle_bold(&mut editor).is_on());
    assert!(engine::toggle_italic(&mut editor).is_on());
    let font = engine::effective_font(&editor);
    assert!(font.is_italic());
    assert!(!font.is_bold());
}

#[test]
fn missing_font_falls_back_to_default() {
    let mut editor = RichEditor::new("Hello", AttributeMap::new());
    editor.set_selection(0..5).unwrap();
    assert_eq!(engine::effective_font(&editor), Font::default());
    assert!(engine::toggle_bold(&mut editor).is_on());
    assert_eq!(
        editor.text().attributes_at(0).unwrap().font(),
        Some(&Font::default().bold_variant())
    );
}

#[test]
fn set_font_family_keeps_facets() {
    let mut editor = RichEditor::new("Hello", defaults());
    editor.set_selection(0..5).unwrap();
    engine::toggle_bold(&mut editor);
    engine::set_font_family(&mut editor, crate::FontFamily::named("Menlo"));
    let font = engine::effective_font(&editor);
    assert_eq!(font.family().name(), Some("Menlo"));
    assert!(font.is_bold());
    assert_eq!(font.size(), 14.0);
}

#[test]
fn removing_a_missing_key_leaves_runs_alone() {
    let mut editor = RichEditor::new("Hello", defaults());
    let range = editor.text().full_range();
    editor.remove_attribute(AttributeKey::ForegroundColor, range);
    assert_eq!(editor.text().run_count(), 1);
}

#[test]
fn malformed_font_size_input_is_ignored() {
    let mut editor = RichEditor::new("Hello", defaults());
    editor.set_selection(0..5).unwrap();
    let generation = editor.generation();

    assert_eq!(engine::adjust_font_size(&mut editor, 1.0, f32::NAN, 20.0), 14.0);
    assert_eq!(engine::adjust_font_size(&mut editor, f32::NAN, 8.0, 72.0), 14.0);
    assert_eq!(engine::adjust_font_size(&mut editor, 1.0, 8.0, f32::INFINITY), 14.0);
    assert_eq!(editor.generation(), generation);

    // The font still compares equal to itself, so bold toggles off again.
    assert!(engine::toggle_bold(&mut editor).is_on());
    assert!(!engine::toggle_bold(&mut editor).is_on());
    assert_eq!(editor.text().run_count(), 1);
}

#[test]
fn font_size_that_is_not_a_number_is_replaced() {
    let mut editor = RichEditor::new("Hello", AttributeMap::new().with(Font::system(f32::NAN)));
    editor.set_selection(0..5).unwrap();
    assert_eq!(engine::adjust_font_size(&mut editor, 1.0, 8.0, 72.0), 8.0);
    let size = editor.text().attributes_at(0).unwrap().font().unwrap().size();
    assert_eq!(size, 8.0);
}

#[test]
fn toggle_round_trip_without_a_default_font() {
    let mut editor = RichEditor::new("Hello World", AttributeMap::new());
    let before = editor.text().partition().clone();
    editor.set_selection(0..5).unwrap();

    assert!(engine::toggle_bold(&mut editor).is_on());
    assert_eq!(editor.text().run_count(), 2);
    assert!(!engine::toggle_bold(&mut editor).is_on());
    assert_eq!(editor.text().partition(), &before);

    assert!(engine::toggle_italic(&mut editor).is_on());
    assert!(!engine::toggle_italic(&mut editor).is_on());
    assert_eq!(editor.text().partition(), &before);
    assert_eq!(editor.text().attributes_at(0).unwrap(), &AttributeMap::new());

    editor.set_selection(5..5).unwrap();
    assert!(engine::toggle_bold(&mut editor).is_on());
    assert!(!engine::toggle_bold(&mut editor).is_on());
    assert_eq!(editor.typing_attributes().font(), None);
}

#[test]
fn range_toggle_leaves_typing_to_the_next_caret() {
    let mut editor = RichEditor::new("Hello World", defaults());
    editor.set_selection(0..5).unwrap();
    assert!(engine::toggle_underline(&mut editor).is_on());

    editor.set_selection(5..5).unwrap();
    assert_eq!(editor.typing_attributes().underline(), Some(LineStyle::Single));
    editor.set_selection(11..11).unwrap();
    assert_eq!(editor.typing_attributes().underline(), None);
}
