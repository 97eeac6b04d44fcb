// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute-run formatting for rich text editors, built on [`styled_runs`].
//!
//! - [`style`] defines the attribute vocabulary: a composite [`Font`], underline and
//!   strikethrough, foreground [`Color`], paragraph [`Alignment`] and inline attachments.
//! - [`RichText`] keeps text partitioned into runs of equal [`AttributeMap`]s.
//! - [`SelectionState`] tracks the selection and the *typing attributes* stamped onto new text.
//! - [`engine`] toggles, sets and reads back formatting through the [`TextSurface`] trait.
//! - [`RichEditor`] is a ready-made [`TextSurface`] with basic editing.
//!
//! ## Indices
//!
//! All ranges are expressed as **byte indices** into UTF-8 text, and must be on UTF-8 character
//! boundaries (as required by [`styled_runs`]).
//!
//! ## Toggling
//!
//! Toggling over a range follows one rule: if any part of the range already carries the
//! attribute, it is cleared over the whole range; otherwise it is set over the whole range. With
//! a caret only the typing attributes change, so the next typed text picks up the new style.
//!
//! Bold and italic are facets of the one composite font, so a font is never both. The facet
//! toggled last wins.
//!
//! ## Example
//!
//! ```
//! use rich_format::engine;
//! use rich_format::{AttributeMap, Font, RichEditor};
//!
//! let mut editor = RichEditor::new("Hi", AttributeMap::new().with(Font::system(17.0)));
//! editor.move_to_end();
//! engine::toggle_bold(&mut editor);
//! editor.insert_or_replace_selection("Bold");
//!
//! let runs: Vec<_> = editor.text().runs().collect();
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[1].range, 2..6);
//! assert!(runs[1].attributes.font().unwrap().is_bold());
//!
//! editor.set_selection(0..6).unwrap();
//! assert!(!engine::query_effective(&editor).font().unwrap().is_bold());
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwards `std` to `styled_runs`, `peniko` and `log`.
//! - `libm`: Forwards `libm` to `peniko` for `no_std` builds.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod engine;
pub mod style;

mod editor;
mod selection;
mod surface;
mod text;

#[cfg(test)]
mod tests;

pub use editor::{ATTACHMENT_CHARACTER, Generation, RichEditor};
pub use engine::Toggled;
pub use selection::{SelectionState, inherited_typing_attributes};
pub use surface::TextSurface;
pub use text::RichText;

pub use style::{
    Alignment, AttachmentId, AttributeKey, AttributeMap, AttributeValue, Color, Font, FontFamily,
    FontStyle, FontWeight, LineStyle,
};
pub use styled_runs::{Error, ErrorKind, TextRange};
