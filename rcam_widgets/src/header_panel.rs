// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sliding header navigation panel.
//!
//! ## Phases
//!
//! ```text
//!   Closed ──toggle──▶ Opening ──panelBounce end──▶ Open
//!     ▲                   │                          │
//!     │                 toggle                     toggle
//!     │                   ▼                          │
//!     └──panelHide end── Closing ◀───────────────────┘
//! ```
//!
//! Toggling while `Closing` reopens the panel. The resting offset is only updated when an
//! animation finishes, so it always describes where the panel settled last.

use alloc::rc::Rc;

use kurbo::Vec2;
use rcam_pubsub::{PublishError, Publisher};

use crate::announce;
use crate::types::{
    Direction, EventResponse, Hook, InputEvent, Listening, PANEL_CLOSED, PanelAnimation,
    STATE_TOGGLED, StateChange, WidgetEvents, WidgetKind,
};

/// Options for [`HeaderPanel`].
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct HeaderPanelOptions {
    /// Edge the panel slides in from.
    pub direction: Direction,
    /// Runs when the panel is toggled, after the active flag flips.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_toggle_state: Option<Hook<HeaderPanel>>,
    /// Runs when the hide animation has finished.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_panel_has_closed: Option<Hook<HeaderPanel>>,
}

impl HeaderPanelOptions {
    /// Set the slide direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the toggle hook.
    pub fn on_toggle_state(mut self, hook: impl Fn(&HeaderPanel) + 'static) -> Self {
        self.on_toggle_state = Some(Rc::new(hook));
        self
    }

    /// Set the closed hook.
    pub fn on_panel_has_closed(mut self, hook: impl Fn(&HeaderPanel) + 'static) -> Self {
        self.on_panel_has_closed = Some(Rc::new(hook));
        self
    }
}

impl core::fmt::Debug for HeaderPanelOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeaderPanelOptions")
            .field("direction", &self.direction)
            .field("on_toggle_state", &self.on_toggle_state.is_some())
            .field("on_panel_has_closed", &self.on_panel_has_closed.is_some())
            .finish()
    }
}

/// Where the panel is in its open/close cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PanelPhase {
    /// Hidden at rest.
    #[default]
    Closed,
    /// Reveal (and bounce) animation running.
    Opening,
    /// Shown at rest.
    Open,
    /// Hide animation running.
    Closing,
}

impl PanelPhase {
    /// Whether the panel is showing or on its way to showing.
    pub fn is_showing(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }
}

/// Headless header panel state.
#[derive(Debug)]
pub struct HeaderPanel {
    options: HeaderPanelOptions,
    events: Rc<WidgetEvents>,
    phase: PanelPhase,
    offset: Vec2,
    active: bool,
}

impl HeaderPanel {
    /// Create a closed panel.
    pub fn new(options: HeaderPanelOptions) -> Self {
        tracing::debug!(direction = %options.direction, "header panel created");
        Self {
            options,
            events: Rc::new(WidgetEvents::new()),
            phase: PanelPhase::Closed,
            offset: Vec2::ZERO,
            active: false,
        }
    }

    /// Publish through `events` instead of a private dispatcher.
    pub fn with_events(mut self, events: Rc<WidgetEvents>) -> Self {
        self.events = events;
        self
    }

    /// Configured slide direction.
    pub fn direction(&self) -> Direction {
        self.options.direction
    }

    /// Current phase.
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Translation the panel last settled at.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Whether the panel was last toggled open.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The panel only listens for animation ends.
    pub fn listening(&self) -> Listening {
        Listening::ANIMATION_END
    }

    /// Shared handle to the dispatcher this panel publishes through.
    pub fn events(&self) -> &Rc<WidgetEvents> {
        &self.events
    }

    /// Feed one input event to the panel.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<EventResponse, PublishError> {
        match event {
            InputEvent::AnimationEnd(animation) => {
                self.on_animation_end(animation)?;
                Ok(EventResponse::empty())
            }
            _ => Ok(EventResponse::empty()),
        }
    }

    fn on_animation_end(&mut self, animation: PanelAnimation) -> Result<(), PublishError> {
        match animation {
            PanelAnimation::Bounce => {
                self.phase = PanelPhase::Open;
                self.offset = self.options.direction.open_offset();
                tracing::debug!(offset = ?self.offset, "header panel open");
                Ok(())
            }
            PanelAnimation::Hide => {
                self.phase = PanelPhase::Closed;
                self.offset = Vec2::ZERO;
                tracing::debug!("header panel closed");
                if let Some(hook) = self.options.on_panel_has_closed.clone() {
                    hook(self);
                }
                announce(&self.events, PANEL_CLOSED, WidgetKind::HeaderPanel, self.active)
            }
            PanelAnimation::Reveal | PanelAnimation::Other => Ok(()),
        }
    }

    /// Open a closed or closing panel, or close an open or opening one.
    pub fn toggle_state(&mut self) -> Result<(), PublishError> {
        self.active = !self.active;
        self.phase = if self.phase.is_showing() {
            PanelPhase::Closing
        } else {
            PanelPhase::Opening
        };
        tracing::debug!(active = self.active, phase = ?self.phase, "header panel toggled");
        if let Some(hook) = self.options.on_toggle_state.clone() {
            hook(self);
        }
        announce(&self.events, STATE_TOGGLED, WidgetKind::HeaderPanel, self.active)
    }
}

impl Default for HeaderPanel {
    fn default() -> Self {
        Self::new(HeaderPanelOptions::default())
    }
}

impl Publisher<StateChange> for HeaderPanel {
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

    fn end(animation: PanelAnimation) -> InputEvent {
        InputEvent::AnimationEnd(animation)
    }

    #[test]
    fn full_open_close_cycle() {
        let mut p = HeaderPanel::new(HeaderPanelOptions::default().direction(Direction::LeftToRight));
        assert_eq!(p.phase(), PanelPhase::Closed);

        p.toggle_state().unwrap();
        assert_eq!(p.phase(), PanelPhase::Opening);
        assert!(p.is_active());

        p.handle_event(end(PanelAnimation::Reveal)).unwrap();
        assert_eq!(p.phase(), PanelPhase::Opening, "reveal end is not the resting point");
        assert_eq!(p.offset(), Vec2::ZERO);

        p.handle_event(end(PanelAnimation::Bounce)).unwrap();
        assert_eq!(p.phase(), PanelPhase::Open);
        assert_eq!(p.offset(), Vec2::new(320.0, 0.0));

        p.toggle_state().unwrap();
        assert_eq!(p.phase(), PanelPhase::Closing);
        assert!(!p.is_active());
        assert_eq!(p.offset(), Vec2::new(320.0, 0.0), "offset holds until hide ends");

        p.handle_event(end(PanelAnimation::Hide)).unwrap();
        assert_eq!(p.phase(), PanelPhase::Closed);
        assert_eq!(p.offset(), Vec2::ZERO);
    }

    #[test]
    fn toggle_while_closing_reopens() {
        let mut p = HeaderPanel::default();
        p.toggle_state().unwrap();
        p.toggle_state().unwrap();
        assert_eq!(p.phase(), PanelPhase::Closing);
        p.toggle_state().unwrap();
        assert_eq!(p.phase(), PanelPhase::Opening);
        assert!(p.is_active());
    }

    #[test]
    fn open_offset_per_direction() {
        for d in Direction::ALL {
            let mut p = HeaderPanel::new(HeaderPanelOptions::default().direction(d));
            p.toggle_state().unwrap();
            p.handle_event(end(PanelAnimation::Bounce)).unwrap();
            assert_eq!(p.offset(), d.open_offset());
        }
    }

    #[test]
    fn closed_hook_and_topic_fire_after_hide() {
        let closed = Rc::new(Cell::new(0));
        let sink = Rc::clone(&closed);
        let mut p = HeaderPanel::new(
            HeaderPanelOptions::default().on_panel_has_closed(move |p| {
                assert_eq!(p.phase(), PanelPhase::Closed);
                sink.set(sink.get() + 1);
            }),
        );

        let seen: Rc<RefCell<Vec<StateChange>>> = Rc::default();
        let receiver: Rc<dyn Any> = seen.clone();
        let cb = Callback::for_receiver(|s: &RefCell<Vec<StateChange>>, c: &StateChange| {
            s.borrow_mut().push(*c);
            Ok(())
        });
        p.subscribe(PANEL_CLOSED, &cb, &receiver);

        p.toggle_state().unwrap();
        p.handle_event(end(PanelAnimation::Bounce)).unwrap();
        assert_eq!(closed.get(), 0);
        assert!(seen.borrow().is_empty(), "toggling does not publish panelClosed");

        p.toggle_state().unwrap();
        p.handle_event(end(PanelAnimation::Hide)).unwrap();
        assert_eq!(closed.get(), 1);
        assert_eq!(
            *seen.borrow(),
            [StateChange {
                widget: WidgetKind::HeaderPanel,
                active: false
            }]
        );
    }

    #[test]
    fn toggle_hook_sees_new_state() {
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let mut p = HeaderPanel::new(
            HeaderPanelOptions::default().on_toggle_state(move |p| sink.set(Some(p.phase()))),
        );
        p.toggle_state().unwrap();
        assert_eq!(seen.get(), Some(PanelPhase::Opening));
    }

    #[test]
    fn pointer_input_is_ignored() {
        let mut p = HeaderPanel::default();
        assert_eq!(
            p.handle_event(InputEvent::PointerEnd).unwrap(),
            EventResponse::empty()
        );
        assert_eq!(p.phase(), PanelPhase::Closed);
        assert!(!p.listening().contains(Listening::POINTER_END));
    }

    #[test]
    fn toggle_publishes_state_change() {
        let mut p = HeaderPanel::default();
        let seen: Rc<RefCell<Vec<StateChange>>> = Rc::default();
        let receiver: Rc<dyn Any> = seen.clone();
        let cb = Callback::for_receiver(|s: &RefCell<Vec<StateChange>>, c: &StateChange| {
            s.borrow_mut().push(*c);
            Ok(())
        });
        p.subscribe(STATE_TOGGLED, &cb, &receiver);

        p.toggle_state().unwrap();
        p.toggle_state().unwrap();
        assert_eq!(
            *seen.borrow(),
            [
                StateChange {
                    widget: WidgetKind::HeaderPanel,
                    active: true
                },
                StateChange {
                    widget: WidgetKind::HeaderPanel,
                    active: false
                },
            ]
        );
    }
}
