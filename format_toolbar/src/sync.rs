// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use rich_format::engine;
use rich_format::{AttributeValue, TextSurface};

use crate::{
    Control, HostRequest, Icon, SizeStep, StyleToggle, ToolbarConfig, ToolbarEvent, ToolbarState,
    ToolbarView, next_alignment,
};

/// Connects a [`ToolbarView`] to a [`TextSurface`].
///
/// The adapter holds no reference to either side: every call gets both passed in. After any
/// toolbar action it re-queries the effective attributes and refreshes every control, so the
/// toolbar never shows stale state.
///
/// ```
/// use format_toolbar::{
///     Control, Icon, StyleToggle, ToolbarConfig, ToolbarEvent, ToolbarSync, ToolbarView,
/// };
/// use rich_format::{AttributeMap, Font, RichEditor};
///
/// #[derive(Default)]
/// struct Buttons {
///     bold: bool,
/// }
///
/// impl ToolbarView for Buttons {
///     fn set_highlighted(&mut self, control: Control, highlighted: bool) {
///         if control == Control::Toggle(StyleToggle::Bold) {
///             self.bold = highlighted;
///         }
///     }
///     fn set_image(&mut self, _: Control, _: Icon) {}
///     fn set_size_label(&mut self, _: &str) {}
/// }
///
/// let mut editor = RichEditor::new("Hello", AttributeMap::new().with(Font::system(17.0)));
/// editor.set_selection(0..5).unwrap();
/// let mut view = Buttons::default();
/// let mut sync = ToolbarSync::new(ToolbarConfig::default());
///
/// sync.handle(ToolbarEvent::TogglePressed(StyleToggle::Bold), &mut editor, &mut view);
/// assert!(view.bold);
/// ```
#[derive(Clone, Debug)]
pub struct ToolbarSync {
    config: ToolbarConfig,
    controls: Vec<Control>,
    state: Option<ToolbarState>,
}

impl ToolbarSync {
    /// Creates an adapter for the controls `config` describes.
    pub fn new(config: ToolbarConfig) -> Self {
        let controls = config.controls();
        Self {
            config,
            controls,
            state: None,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    /// The controls the view should instantiate, in toolbar order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// The state last pushed to the view.
    pub fn state(&self) -> Option<&ToolbarState> {
        self.state.as_ref()
    }

    /// Reads the effective attributes of `surface` and pushes them to every control of `view`.
    pub fn refresh<S, V>(&mut self, surface: &S, view: &mut V) -> &ToolbarState
    where
        S: TextSurface + ?Sized,
        V: ToolbarView + ?Sized,
    {
        let effective = engine::query_effective(surface);
        let default_font = surface.attributed_text().default_font();
        let state = ToolbarState::from_effective(&effective, &default_font, self.config.palette());
        log::trace!("toolbar state {state:?}");

        for control in &self.controls {
            match *control {
                Control::Toggle(toggle) => view.set_highlighted(*control, state.is_active(toggle)),
                Control::FontSizeLabel => view.set_size_label(&state.size_label()),
                Control::Alignment => view.set_image(*control, state.alignment_icon()),
                Control::Swatch(index) => {
                    let icon = if state.swatch == Some(index) {
                        Icon::SwatchSelected
                    } else {
                        Icon::Swatch
                    };
                    view.set_image(*control, icon);
                }
                Control::FontSizeIncrease
                | Control::FontSizeDecrease
                | Control::InsertImage
                | Control::DismissKeyboard => {}
            }
        }
        self.state.insert(state)
    }

    /// Applies `event` to `surface`, then refreshes `view`.
    ///
    /// Returns the work only the host can do, if the event needs any. Events from controls the
    /// configuration does not show are ignored.
    pub fn handle<S, V>(
        &mut self,
        event: ToolbarEvent,
        surface: &mut S,
        view: &mut V,
    ) -> Option<HostRequest>
    where
        S: TextSurface + ?Sized,
        V: ToolbarView + ?Sized,
    {
        if !self.config.accepts(&event) {
            log::warn!("ignoring {event:?} from a section that is not shown");
            return None;
        }
        log::debug!("toolbar event {event:?}");

        let request = match event {
            ToolbarEvent::TogglePressed(toggle) => {
                match toggle {
                    StyleToggle::Bold => engine::toggle_bold(surface),
                    StyleToggle::Italic => engine::toggle_italic(surface),
                    StyleToggle::Underline => engine::toggle_underline(surface),
                    StyleToggle::Strikethrough => engine::toggle_strikethrough(surface),
                };
                None
            }
            ToolbarEvent::AlignmentCycled => {
                let current = engine::query_effective(&*surface)
                    .alignment()
                    .unwrap_or_default();
                let next = next_alignment(current);
                engine::set_uniform(surface, AttributeValue::Alignment(next));
                None
            }
            ToolbarEvent::FontSizeDelta(step) => {
                let delta = match step {
                    SizeStep::Increase => self.config.font_size_step(),
                    SizeStep::Decrease => -self.config.font_size_step(),
                };
                engine::adjust_font_size(
                    surface,
                    delta,
                    self.config.min_font_size(),
                    self.config.max_font_size(),
                );
                None
            }
            ToolbarEvent::ColorSelected(color) => {
                engine::set_color(surface, color);
                None
            }
            ToolbarEvent::FontFamilySelected(family) => {
                engine::set_font_family(surface, family);
                None
            }
            ToolbarEvent::ImageRequested => Some(HostRequest::PickImage),
            ToolbarEvent::KeyboardDismissRequested => Some(HostRequest::DismissKeyboard),
        };

        if request.is_none() {
            surface.scroll_to_selection();
        }
        self.refresh(&*surface, view);
        request
    }
}
