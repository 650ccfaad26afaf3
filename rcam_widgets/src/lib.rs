// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rcam Widgets: headless state for website chrome widgets.
//!
//! ## Overview
//!
//! Four widgets make up the chrome:
//!
//! - [`Hamburger`]: the menu button. Arms on pointer start, toggles on pointer end.
//! - [`HeaderPanel`]: the sliding navigation panel, driven by animation-end events.
//! - [`ContentFade`]: the overlay that dims the page and swallows taps while dimmed.
//! - [`NavPanel`]: the navigation list visibility toggle.
//!
//! This crate owns the state machines only. The host attaches real listeners, forwards them
//! as [`InputEvent`]s, honors the returned [`EventResponse`], and maps widget state onto its
//! own presentation (classes, transforms, labels).
//!
//! ## Notifications
//!
//! Every widget implements [`Publisher`](rcam_pubsub::Publisher) over a [`WidgetEvents`]
//! dispatcher and publishes a [`StateChange`] on [`STATE_TOGGLED`] whenever it toggles.
//! The header panel also publishes on [`PANEL_CLOSED`] once its hide animation ends.
//! Widgets get a private dispatcher by default; pass one shared handle to `with_events` on
//! several widgets to listen to all of them in one place.
//!
//! Each widget also takes an `on_toggle_state` hook in its options, invoked synchronously with
//! the widget itself at the moment it toggles.
//!
//! ## Wiring sketch
//!
//! ```
//! use std::any::Any;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use rcam_pubsub::Callback;
//! use rcam_widgets::{
//!     ContentFade, Direction, Hamburger, HeaderPanel, HeaderPanelOptions, InputEvent,
//!     STATE_TOGGLED, StateChange, WidgetEvents, WidgetKind,
//! };
//!
//! let events = Rc::new(WidgetEvents::new());
//! let mut button = Hamburger::default().with_events(events.clone());
//! let panel = Rc::new(RefCell::new(
//!     HeaderPanel::new(HeaderPanelOptions::default().direction(Direction::LeftToRight)),
//! ));
//! let fade = Rc::new(RefCell::new(ContentFade::default()));
//!
//! // The button drives the panel and the fade.
//! let receiver: Rc<dyn Any> = Rc::new((panel.clone(), fade.clone()));
//! let follow = Callback::for_receiver(
//!     |(panel, fade): &(Rc<RefCell<HeaderPanel>>, Rc<RefCell<ContentFade>>), c: &StateChange| {
//!         if c.widget == WidgetKind::Hamburger {
//!             panel.borrow_mut().toggle_state()?;
//!             fade.borrow_mut().toggle_fade()?;
//!         }
//!         Ok(())
//!     },
//! );
//! events.subscribe(STATE_TOGGLED, &follow, &receiver);
//!
//! button.handle_event(InputEvent::PointerStart).unwrap();
//! button.handle_event(InputEvent::PointerEnd).unwrap();
//! assert!(panel.borrow().is_active());
//! assert!(fade.borrow().is_active());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod content_fade;
pub mod hamburger;
pub mod header_panel;
pub mod nav_panel;
pub mod types;

pub use config::ChromeConfig;
pub use content_fade::{ContentFade, ContentFadeOptions};
pub use hamburger::{Hamburger, HamburgerOptions};
pub use header_panel::{HeaderPanel, HeaderPanelOptions, PanelPhase};
pub use nav_panel::{NavPanel, NavPanelOptions};
pub use types::{
    Direction, EventResponse, Hook, InputEvent, Listening, PANEL_CLOSED, PANEL_HEIGHT,
    PANEL_WIDTH, PanelAnimation, STATE_TOGGLED, StateChange, UnknownDirection, WidgetEvents,
    WidgetKind,
};

use rcam_pubsub::PublishError;

/// Publish a [`StateChange`] for `widget` on `topic`.
pub(crate) fn announce(
    events: &WidgetEvents,
    topic: &str,
    widget: WidgetKind,
    active: bool,
) -> Result<(), PublishError> {
    events.publish(topic, &StateChange { widget, active })
}
