// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled Runs keeps a block of text partitioned into runs that each carry one attribute value.
//!
//! Unlike an overlapping span list, a [`RunPartition`] is always a *canonical* cover of the text:
//!
//! - runs are contiguous, non-empty and cover `0..len` with no gaps or overlaps
//! - no two neighbouring runs carry equal attributes
//!
//! Every mutation ([`RunPartition::update`], [`RunPartition::insert`], [`RunPartition::remove`])
//! restores that form before returning, so readers never need to merge runs themselves.
//!
//! [`StyledRuns`] pairs a partition with its text storage and validates byte ranges (bounds and
//! UTF-8 character boundaries) through [`TextRange`].
//!
//! ## Example
//!
//! ```
//! use styled_runs::StyledRuns;
//!
//! let mut text = StyledRuns::new(String::from("Hello World"), 0_u8);
//! let hello = text.range(0..5).unwrap();
//! text.update(hello, |attr| *attr = 1);
//! assert_eq!(text.runs().count(), 2);
//!
//! let all = text.range(0..11).unwrap();
//! text.update(all, |attr| *attr = 0);
//! assert_eq!(text.runs().count(), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwards `std` to `log`.
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

mod error;
mod partition;
mod styled_runs;
mod text_range;
mod text_storage;

pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::partition::{Run, RunPartition, Runs};
pub use crate::styled_runs::StyledRuns;
pub use crate::text_range::TextRange;
pub use crate::text_storage::{EditableStorage, TextStorage};
