// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared widget types: input events, listener and response flags, notifications, and panel
//! directions.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::str::FromStr;

use kurbo::Vec2;
use rcam_pubsub::Dispatcher;

/// Topic every widget publishes on when its visible state toggles.
pub const STATE_TOGGLED: &str = "stateToggled";

/// Topic the [`HeaderPanel`](crate::HeaderPanel) publishes on once its hide animation ends.
pub const PANEL_CLOSED: &str = "panelClosed";

/// Slide distance of a vertically moving header panel.
pub const PANEL_HEIGHT: f64 = 460.0;

/// Slide distance of a horizontally moving header panel.
pub const PANEL_WIDTH: f64 = 320.0;

/// Dispatcher type the widgets publish [`StateChange`] notifications through.
pub type WidgetEvents = Dispatcher<StateChange>;

/// Hook invoked synchronously with the widget as receiver.
pub type Hook<W> = Rc<dyn Fn(&W)>;

/// Which widget produced a [`StateChange`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// [`Hamburger`](crate::Hamburger) button.
    Hamburger,
    /// [`HeaderPanel`](crate::HeaderPanel).
    HeaderPanel,
    /// [`ContentFade`](crate::ContentFade) overlay.
    ContentFade,
    /// [`NavPanel`](crate::NavPanel).
    NavPanel,
}

/// Payload of [`STATE_TOGGLED`] and [`PANEL_CLOSED`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StateChange {
    /// Widget that changed.
    pub widget: WidgetKind,
    /// Active state after the change.
    pub active: bool,
}

/// Input delivered to a widget by its host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer or touch went down.
    PointerStart,
    /// Pointer or touch was released.
    PointerEnd,
    /// Pointer or touch was cancelled by the host.
    PointerCancel,
    /// A CSS transition on the widget finished.
    TransitionEnd,
    /// A CSS animation on the widget finished.
    AnimationEnd(PanelAnimation),
}

impl InputEvent {
    /// The listener flag an event is gated by.
    pub fn listener(self) -> Listening {
        match self {
            Self::PointerStart => Listening::POINTER_START,
            Self::PointerEnd => Listening::POINTER_END,
            Self::PointerCancel => Listening::POINTER_CANCEL,
            Self::TransitionEnd => Listening::TRANSITION_END,
            Self::AnimationEnd(_) => Listening::ANIMATION_END,
        }
    }
}

/// Header panel animations reported through [`InputEvent::AnimationEnd`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PanelAnimation {
    /// `panelReveal`: the panel slid in.
    Reveal,
    /// `panelBounce`: the settle after the reveal.
    Bounce,
    /// `panelHide`: the panel slid out.
    Hide,
    /// Any other animation name.
    Other,
}

impl PanelAnimation {
    /// Map a host animation name to a known animation.
    pub fn from_name(name: &str) -> Self {
        match name {
            "panelReveal" => Self::Reveal,
            "panelBounce" => Self::Bounce,
            "panelHide" => Self::Hide,
            _ => Self::Other,
        }
    }

    /// Host animation name, if known.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::Reveal => Some("panelReveal"),
            Self::Bounce => Some("panelBounce"),
            Self::Hide => Some("panelHide"),
            Self::Other => None,
        }
    }
}

bitflags::bitflags! {
    /// Input a widget currently listens for.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Listening: u8 {
        /// [`InputEvent::PointerStart`].
        const POINTER_START  = 0b0000_0001;
        /// [`InputEvent::PointerEnd`].
        const POINTER_END    = 0b0000_0010;
        /// [`InputEvent::PointerCancel`].
        const POINTER_CANCEL = 0b0000_0100;
        /// [`InputEvent::TransitionEnd`].
        const TRANSITION_END = 0b0000_1000;
        /// [`InputEvent::AnimationEnd`].
        const ANIMATION_END  = 0b0001_0000;
        /// All pointer input.
        const POINTER = Self::POINTER_START.bits() | Self::POINTER_END.bits() | Self::POINTER_CANCEL.bits();
    }
}

bitflags::bitflags! {
    /// What the host should do with an event after a widget handled it.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventResponse: u8 {
        /// Do not propagate the event further.
        const STOP_PROPAGATION = 0b01;
        /// Suppress the host's default action.
        const PREVENT_DEFAULT  = 0b10;
        /// Both of the above.
        const CONSUME = Self::STOP_PROPAGATION.bits() | Self::PREVENT_DEFAULT.bits();
    }
}

/// Direction a [`HeaderPanel`](crate::HeaderPanel) slides in from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Direction {
    /// Drops down from above the header.
    #[default]
    TopToBottom,
    /// Rises from below.
    BottomToTop,
    /// Slides in from the left edge.
    LeftToRight,
    /// Slides in from the right edge.
    RightToLeft,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::TopToBottom,
        Self::BottomToTop,
        Self::LeftToRight,
        Self::RightToLeft,
    ];

    /// Name used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopToBottom => "topToBottom",
            Self::BottomToTop => "bottomToTop",
            Self::LeftToRight => "leftToRight",
            Self::RightToLeft => "rightToLeft",
        }
    }

    /// Translation of the panel once fully open.
    pub fn open_offset(self) -> Vec2 {
        match self {
            Self::TopToBottom => Vec2::new(0.0, PANEL_HEIGHT),
            Self::BottomToTop => Vec2::new(0.0, -PANEL_HEIGHT),
            Self::LeftToRight => Vec2::new(PANEL_WIDTH, 0.0),
            Self::RightToLeft => Vec2::new(-PANEL_WIDTH, 0.0),
        }
    }

    /// Whether the panel moves along the y axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::TopToBottom | Self::BottomToTop)
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A direction name did not match any [`Direction`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown panel direction `{0}`")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}
