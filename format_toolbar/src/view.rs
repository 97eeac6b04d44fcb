// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Control, Icon};

/// The visual toolbar, driven by [`ToolbarSync`](crate::ToolbarSync).
///
/// Implementations own the widgets created from
/// [`ToolbarConfig::controls`](crate::ToolbarConfig::controls) and report user input back as
/// [`ToolbarEvent`](crate::ToolbarEvent)s. Calls for controls the view did not create can be
/// ignored.
pub trait ToolbarView {
    /// Shows `control` as active or inactive.
    fn set_highlighted(&mut self, control: Control, highlighted: bool);

    /// Changes the image shown on `control`.
    fn set_image(&mut self, control: Control, icon: Icon);

    /// Changes the font size label text.
    fn set_size_label(&mut self, label: &str);
}
