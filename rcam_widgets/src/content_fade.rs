// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay that dims the page content while the header panel is open.
//!
//! The overlay swallows taps so the content underneath does not react while dimmed.

use alloc::rc::Rc;

use rcam_pubsub::{PublishError, Publisher};

use crate::announce;
use crate::types::{
    EventResponse, Hook, InputEvent, Listening, STATE_TOGGLED, StateChange, WidgetEvents,
    WidgetKind,
};

/// Options for [`ContentFade`].
#[derive(Clone, Default)]
pub struct ContentFadeOptions {
    /// Runs when the fade toggles, before the active flag flips.
    pub on_toggle_state: Option<Hook<ContentFade>>,
}

impl ContentFadeOptions {
    /// Set the toggle hook.
    pub fn on_toggle_state(mut self, hook: impl Fn(&ContentFade) + 'static) -> Self {
        self.on_toggle_state = Some(Rc::new(hook));
        self
    }
}

impl core::fmt::Debug for ContentFadeOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ContentFadeOptions")
            .field("on_toggle_state", &self.on_toggle_state.is_some())
            .finish()
    }
}

/// Headless content fade state.
#[derive(Debug)]
pub struct ContentFade {
    options: ContentFadeOptions,
    events: Rc<WidgetEvents>,
    active: bool,
}

impl ContentFade {
    /// Create an overlay that is not dimming.
    pub fn new(options: ContentFadeOptions) -> Self {
        Self {
            options,
            events: Rc::new(WidgetEvents::new()),
            active: false,
        }
    }

    /// Publish through `events` instead of a private dispatcher.
    pub fn with_events(mut self, events: Rc<WidgetEvents>) -> Self {
        self.events = events;
        self
    }

    /// Whether the content is dimmed.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The overlay listens for pointer start and end.
    pub fn listening(&self) -> Listening {
        Listening::POINTER_START | Listening::POINTER_END
    }

    /// Shared handle to the dispatcher this overlay publishes through.
    pub fn events(&self) -> &Rc<WidgetEvents> {
        &self.events
    }

    /// Feed one input event to the overlay.
    ///
    /// Input never changes the fade; it only tells the host to stop the tap here.
    pub fn handle_event(&mut self, event: InputEvent) -> EventResponse {
        if !self.listening().contains(event.listener()) {
            return EventResponse::empty();
        }
        match event {
            InputEvent::PointerStart => EventResponse::STOP_PROPAGATION,
            InputEvent::PointerEnd => EventResponse::CONSUME,
            _ => EventResponse::empty(),
        }
    }

    /// Dim or undim the content and announce the change.
    pub fn toggle_fade(&mut self) -> Result<(), PublishError> {
        if let Some(hook) = self.options.on_toggle_state.clone() {
            hook(self);
        }
        self.active = !self.active;
        tracing::debug!(active = self.active, "content fade toggled");
        announce(&self.events, STATE_TOGGLED, WidgetKind::ContentFade, self.active)
    }
}

impl Default for ContentFade {
    fn default() -> Self {
        Self::new(ContentFadeOptions::default())
    }
}

impl Publisher<StateChange> for ContentFade {
    fn dispatcher(&self) -> &WidgetEvents {
        &self.events
    }
}
