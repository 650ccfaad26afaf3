// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hamburger menu button.
//!
//! The button arms itself on pointer start and toggles on pointer end. After the first toggle
//! it keeps listening for pointer end only; the host calls [`Hamburger::activate_input`] to
//! re-arm pointer start, typically from the header panel's closed hook.

use alloc::rc::Rc;

use rcam_pubsub::{PublishError, Publisher};

use crate::announce;
use crate::types::{
    EventResponse, Hook, InputEvent, Listening, STATE_TOGGLED, StateChange, WidgetEvents,
    WidgetKind,
};

/// Options for [`Hamburger`].
#[derive(Clone, Default)]
pub struct HamburgerOptions {
    /// Runs at the moment the button toggles, before the active flag flips.
    pub on_toggle_state: Option<Hook<Hamburger>>,
}

impl HamburgerOptions {
    /// Set the toggle hook.
    pub fn on_toggle_state(mut self, hook: impl Fn(&Hamburger) + 'static) -> Self {
        self.on_toggle_state = Some(Rc::new(hook));
        self
    }
}

impl core::fmt::Debug for HamburgerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HamburgerOptions")
            .field("on_toggle_state", &self.on_toggle_state.is_some())
            .finish()
    }
}

/// Headless hamburger button state.
#[derive(Debug)]
pub struct Hamburger {
    options: HamburgerOptions,
    events: Rc<WidgetEvents>,
    listening: Listening,
    active: bool,
    transitioning: bool,
}

impl Hamburger {
    /// Create an inactive button listening for pointer start and transition end.
    pub fn new(options: HamburgerOptions) -> Self {
        Self {
            options,
            events: Rc::new(WidgetEvents::new()),
            listening: Listening::POINTER_START | Listening::TRANSITION_END,
            active: false,
            transitioning: false,
        }
    }

    /// Publish through `events` instead of a private dispatcher.
    pub fn with_events(mut self, events: Rc<WidgetEvents>) -> Self {
        self.events = events;
        self
    }

    /// Whether the button is in its active (menu open) state.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether a toggle has not yet been followed by a transition end.
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Input the button currently reacts to.
    pub fn listening(&self) -> Listening {
        self.listening
    }

    /// Shared handle to the dispatcher this button publishes through.
    pub fn events(&self) -> &Rc<WidgetEvents> {
        &self.events
    }

    /// Feed one input event to the button.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<EventResponse, PublishError> {
        if !self.listening.contains(event.listener()) {
            return Ok(EventResponse::empty());
        }
        match event {
            InputEvent::PointerStart => {
                self.listening.insert(Listening::POINTER_END);
                self.listening.remove(Listening::POINTER_START);
                Ok(EventResponse::CONSUME)
            }
            InputEvent::PointerEnd | InputEvent::PointerCancel => {
                self.toggle_state()?;
                Ok(EventResponse::CONSUME)
            }
            InputEvent::TransitionEnd => {
                self.transitioning = false;
                Ok(EventResponse::empty())
            }
            InputEvent::AnimationEnd(_) => Ok(EventResponse::empty()),
        }
    }

    /// Start listening for pointer start again.
    pub fn activate_input(&mut self) {
        self.listening.insert(Listening::POINTER_START);
    }

    /// Stop listening for all pointer input.
    pub fn deactivate_input(&mut self) {
        self.listening.remove(Listening::POINTER);
    }

    /// Toggle between active and inactive and announce the change.
    pub fn toggle_state(&mut self) -> Result<(), PublishError> {
        if let Some(hook) = self.options.on_toggle_state.clone() {
            hook(self);
        }
        self.active = !self.active;
        self.transitioning = true;
        tracing::debug!(active = self.active, "hamburger toggled");
        announce(&self.events, STATE_TOGGLED, WidgetKind::Hamburger, self.active)
    }
}

impl Default for Hamburger {
    fn default() -> Self {
        Self::new(HamburgerOptions::default())
    }
}

impl Publisher<StateChange> for Hamburger {
    fn dispatcher(&self) -> &WidgetEvents {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::any::Any;
    use core::cell::{Cell, RefCell};
    use rcam_pubsub::Callback;

    type Seen = RefCell<Vec<StateChange>>;

    fn listen(h: &Hamburger) -> Rc<Seen> {
        let seen = Rc::new(Seen::default());
        let receiver: Rc<dyn Any> = seen.clone();
        let cb = Callback::for_receiver(|s: &Seen, c: &StateChange| {
            s.borrow_mut().push(*c);
            Ok(())
        });
        h.subscribe(STATE_TOGGLED, &cb, &receiver);
        seen
    }

    #[test]
    fn tap_toggles_once() {
        let mut h = Hamburger::default();
        let seen = listen(&h);

        assert_eq!(
            h.handle_event(InputEvent::PointerStart).unwrap(),
            EventResponse::CONSUME
        );
        assert!(!h.is_active(), "start alone must not toggle");
        assert!(h.listening().contains(Listening::POINTER_END));
        assert!(!h.listening().contains(Listening::POINTER_START));

        assert_eq!(
            h.handle_event(InputEvent::PointerEnd).unwrap(),
            EventResponse::CONSUME
        );
        assert!(h.is_active());
        assert_eq!(
            *seen.borrow(),
            [StateChange {
                widget: WidgetKind::Hamburger,
                active: true
            }]
        );
    }

    #[test]
    fn unarmed_input_is_ignored() {
        let mut h = Hamburger::default();
        assert_eq!(
            h.handle_event(InputEvent::PointerEnd).unwrap(),
            EventResponse::empty()
        );
        assert!(!h.is_active());

        let _ = h.handle_event(InputEvent::PointerStart).unwrap();
        // Pointer start is disarmed until re-activated.
        assert_eq!(
            h.handle_event(InputEvent::PointerStart).unwrap(),
            EventResponse::empty()
        );
        h.activate_input();
        assert!(h.listening().contains(Listening::POINTER_START));
    }

    #[test]
    fn deactivate_drops_pointer_input() {
        let mut h = Hamburger::default();
        let _ = h.handle_event(InputEvent::PointerStart).unwrap();
        h.deactivate_input();
        assert_eq!(h.listening(), Listening::TRANSITION_END);
        assert_eq!(
            h.handle_event(InputEvent::PointerEnd).unwrap(),
            EventResponse::empty()
        );
        assert!(!h.is_active());
    }

    #[test]
    fn hook_sees_state_before_flip() {
        let before = Rc::new(Cell::new(None));
        let sink = Rc::clone(&before);
        let mut h = Hamburger::new(
            HamburgerOptions::default().on_toggle_state(move |h| sink.set(Some(h.is_active()))),
        );
        h.toggle_state().unwrap();
        assert_eq!(before.get(), Some(false));
        assert!(h.is_active());
        h.toggle_state().unwrap();
        assert_eq!(before.get(), Some(true));
        assert!(!h.is_active());
    }

    #[test]
    fn transition_end_settles() {
        let mut h = Hamburger::default();
        h.toggle_state().unwrap();
        assert!(h.is_transitioning());
        let _ = h.handle_event(InputEvent::TransitionEnd).unwrap();
        assert!(!h.is_transitioning());
    }

    #[test]
    fn shared_events_reach_one_listener() {
        let events = Rc::new(WidgetEvents::new());
        let mut a = Hamburger::default().with_events(Rc::clone(&events));
        let mut b = Hamburger::default().with_events(Rc::clone(&events));
        let seen = listen(&a);
        a.toggle_state().unwrap();
        b.toggle_state().unwrap();
        assert_eq!(seen.borrow().len(), 2);
        assert!(Rc::ptr_eq(a.events(), b.events()));
    }
}
