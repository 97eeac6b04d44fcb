// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The formatting vocabulary.
//!
//! This module defines:
//! - A closed set of attribute keys ([`AttributeKey`]) and their values ([`AttributeValue`])
//! - The composite [`Font`] attribute (family, size, weight and slant in one value)
//! - [`AttributeMap`], the per-run and typing attribute set
//!
//! It is intentionally independent of any shaping/layout engine.

mod attribute;
mod font;
mod map;
mod values;

pub use attribute::{AttributeKey, AttributeValue};
pub use font::{Font, FontFamily, FontStyle, FontWeight};
pub use map::AttributeMap;
pub use values::{Alignment, AttachmentId, LineStyle};

/// The color type carried by [`AttributeValue::ForegroundColor`].
pub use peniko::Color;
