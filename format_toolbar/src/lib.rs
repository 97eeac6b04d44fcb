// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Format Toolbar keeps a formatting toolbar in sync with a [`rich_format`] selection.
//!
//! The toolbar and the text never reference each other. Instead:
//!
//! - the host forwards user input as [`ToolbarEvent`]s to [`ToolbarSync::handle`]
//! - [`ToolbarSync`] applies them through [`rich_format::engine`] and calls back into the
//!   [`ToolbarView`] with the new state of every control
//! - events only the host can finish, like picking an image, come back as [`HostRequest`]s
//!
//! Which controls exist is decided once by a [`ToolbarConfig`]: its [`EditorSection`]s, its
//! [`ColorPalette`] and its font size bounds.
//!
//! ## Example
//!
//! ```
//! use format_toolbar::{
//!     Control, HostRequest, Icon, SizeStep, ToolbarConfig, ToolbarEvent, ToolbarSync, ToolbarView,
//! };
//! use rich_format::{AttachmentId, AttributeMap, Font, RichEditor};
//!
//! struct Label(String);
//!
//! impl ToolbarView for Label {
//!     fn set_highlighted(&mut self, _: Control, _: bool) {}
//!     fn set_image(&mut self, _: Control, _: Icon) {}
//!     fn set_size_label(&mut self, label: &str) {
//!         self.0 = label.to_owned();
//!     }
//! }
//!
//! let mut editor = RichEditor::new("Hello", AttributeMap::new().with(Font::system(17.0)));
//! let mut view = Label(String::new());
//! let mut sync = ToolbarSync::new(ToolbarConfig::default());
//!
//! editor.select_all();
//! sync.handle(ToolbarEvent::FontSizeDelta(SizeStep::Increase), &mut editor, &mut view);
//! assert_eq!(view.0, "18");
//!
//! let request = sync.handle(ToolbarEvent::ImageRequested, &mut editor, &mut view);
//! assert_eq!(request, Some(HostRequest::PickImage));
//! editor.append_attachment(AttachmentId(1));
//! sync.refresh(&editor, &mut view);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwards `std` to `rich_format`, `peniko` and `log`.
//! - `libm`: Forwards `libm` to `rich_format` and `peniko` for `no_std` builds.
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

mod config;
mod control;
mod palette;
mod state;
mod sync;
mod view;


pub use config::{EditorSection, ToolbarConfig};
pub use control::{
    Control, HostRequest, Icon, SizeStep, StyleToggle, ToolbarEvent, next_alignment,
};
pub use palette::{ColorPalette, color_from_rgb};
pub use state::ToolbarState;
pub use sync::ToolbarSync;
pub use view::ToolbarView;
