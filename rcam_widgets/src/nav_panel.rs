// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation list visibility toggle.

use alloc::rc::Rc;

use rcam_pubsub::{PublishError, Publisher};

use crate::announce;
use crate::types::{Hook, STATE_TOGGLED, StateChange, WidgetEvents, WidgetKind};

/// Options for [`NavPanel`].
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct NavPanelOptions {
    /// Whether showing and hiding is transitioned. Defaults to `true`.
    pub animate: bool,
    /// Runs when the panel toggles, before visibility and the active flag flip.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_toggle_state: Option<Hook<NavPanel>>,
}

impl Default for NavPanelOptions {
    fn default() -> Self {
        Self {
            animate: true,
            on_toggle_state: None,
        }
    }
}

impl NavPanelOptions {
    /// Enable or disable transitions.
    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Set the toggle hook.
    pub fn on_toggle_state(mut self, hook: impl Fn(&NavPanel) + 'static) -> Self {
        self.on_toggle_state = Some(Rc::new(hook));
        self
    }
}

impl core::fmt::Debug for NavPanelOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavPanelOptions")
            .field("animate", &self.animate)
            .field("on_toggle_state", &self.on_toggle_state.is_some())
            .finish()
    }
}

/// Headless navigation panel state.
#[derive(Debug)]
pub struct NavPanel {
    options: NavPanelOptions,
    events: Rc<WidgetEvents>,
    hidden: bool,
    transitions: bool,
    active: bool,
}

impl NavPanel {
    /// Create a hidden panel. Transitions start off when `options.animate` is `false`.
    pub fn new(options: NavPanelOptions) -> Self {
        let mut panel = Self {
            options,
            events: Rc::new(WidgetEvents::new()),
            hidden: true,
            transitions: true,
            active: false,
        };
        if !panel.options.animate {
            panel.animation_transition_off();
        }
        panel
    }

    /// Publish through `events` instead of a private dispatcher.
    pub fn with_events(mut self, events: Rc<WidgetEvents>) -> Self {
        self.events = events;
        self
    }

    /// Turn off show/hide transitions.
    pub fn animation_transition_off(&mut self) {
        self.transitions = false;
    }

    /// Whether show/hide is transitioned.
    pub fn transitions_enabled(&self) -> bool {
        self.transitions
    }

    /// Whether the navigation list is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the panel was last toggled on.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Shared handle to the dispatcher this panel publishes through.
    pub fn events(&self) -> &Rc<WidgetEvents> {
        &self.events
    }

    /// Show or hide the navigation list and announce the change.
    pub fn toggle_state(&mut self) -> Result<(), PublishError> {
        if let Some(hook) = self.options.on_toggle_state.clone() {
            hook(self);
        }
        self.hidden = !self.hidden;
        self.active = !self.active;
        tracing::debug!(hidden = self.hidden, "nav panel toggled");
        announce(&self.events, STATE_TOGGLED, WidgetKind::NavPanel, self.active)
    }
}

impl Default for NavPanel {
    fn default() -> Self {
        Self::new(NavPanelOptions::default())
    }
}

impl Publisher<StateChange> for NavPanel {
    fn dispatcher(&self) -> &WidgetEvents {
        &self.events
    }
}
