// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wire a hamburger button, header panel, content fade, and nav panel through one shared
//! dispatcher, configured from TOML.
//!
//! The button's toggle drives the panel, the fade, and the nav list. When the panel reports it
//! has closed, the button is re-armed for the next tap.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p rcam_demos --example chrome_wiring`

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use kurbo::Vec2;
use rcam_pubsub::{Callback, CallbackResult};
use rcam_widgets::{
    ChromeConfig, ContentFade, Hamburger, HeaderPanel, InputEvent, NavPanel, PANEL_CLOSED,
    PanelAnimation, PanelPhase, STATE_TOGGLED, StateChange, WidgetEvents, WidgetKind,
};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
[header]
direction = "rightToLeft"

[nav]
animate = false
"#;

struct Chrome {
    panel: RefCell<HeaderPanel>,
    fade: RefCell<ContentFade>,
    nav: RefCell<NavPanel>,
    log: RefCell<Vec<StateChange>>,
}

impl Chrome {
    fn on_state_toggled(&self, change: &StateChange) -> CallbackResult {
        self.log.borrow_mut().push(*change);
        if change.widget == WidgetKind::Hamburger {
            self.panel.borrow_mut().toggle_state()?;
            self.fade.borrow_mut().toggle_fade()?;
            self.nav.borrow_mut().toggle_state()?;
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config: ChromeConfig = toml::from_str(CONFIG).context("failed to parse chrome config")?;
    println!("== Config ==\n  {config:?}");
    tracing::info!(
        direction = %config.header.direction,
        animate = config.nav.animate,
        "config loaded"
    );

    let events = Rc::new(WidgetEvents::new());
    let button = Rc::new(RefCell::new(
        Hamburger::default().with_events(events.clone()),
    ));

    let rearm = Rc::downgrade(&button);
    let header = config.header.on_panel_has_closed(move |_| {
        if let Some(button) = rearm.upgrade() {
            button.borrow_mut().activate_input();
        }
    });

    // Only the button publishes on the shared dispatcher; the followers keep private ones.
    let chrome = Rc::new(Chrome {
        panel: RefCell::new(HeaderPanel::new(header)),
        fade: RefCell::new(ContentFade::default()),
        nav: RefCell::new(NavPanel::new(config.nav)),
        log: RefCell::default(),
    });
    let receiver: Rc<dyn Any> = chrome.clone();
    events.subscribe(
        STATE_TOGGLED,
        &Callback::for_receiver(Chrome::on_state_toggled),
        &receiver,
    );

    let closed = Rc::new(RefCell::new(0_u32));
    let closed_receiver: Rc<dyn Any> = closed.clone();
    chrome.panel.borrow().events().subscribe(
        PANEL_CLOSED,
        &Callback::for_receiver(|n: &RefCell<u32>, _: &StateChange| {
            *n.borrow_mut() += 1;
            Ok(())
        }),
        &closed_receiver,
    );

    // Open: tap the button, then let the panel animations finish.
    button.borrow_mut().handle_event(InputEvent::PointerStart)?;
    button.borrow_mut().handle_event(InputEvent::PointerEnd)?;
    for animation in [PanelAnimation::Reveal, PanelAnimation::Bounce] {
        chrome
            .panel
            .borrow_mut()
            .handle_event(InputEvent::AnimationEnd(animation))?;
    }
    println!(
        "== Open ==\n  panel {:?} at {:?}, faded: {}, nav hidden: {}",
        chrome.panel.borrow().phase(),
        chrome.panel.borrow().offset(),
        chrome.fade.borrow().is_active(),
        chrome.nav.borrow().is_hidden(),
    );
    tracing::info!(offset = ?chrome.panel.borrow().offset(), "chrome open");
    assert_eq!(chrome.panel.borrow().phase(), PanelPhase::Open);
    assert_eq!(chrome.panel.borrow().offset(), Vec2::new(-320.0, 0.0));
    assert!(chrome.fade.borrow().is_active());
    assert!(!chrome.nav.borrow().is_hidden());
    assert!(!chrome.nav.borrow().transitions_enabled());

    // Close: the button still listens for pointer end.
    button.borrow_mut().handle_event(InputEvent::PointerEnd)?;
    chrome
        .panel
        .borrow_mut()
        .handle_event(InputEvent::AnimationEnd(PanelAnimation::Hide))?;
    println!(
        "== Closed ==\n  panel {:?}, faded: {}, closed events: {}",
        chrome.panel.borrow().phase(),
        chrome.fade.borrow().is_active(),
        closed.borrow(),
    );
    tracing::info!(closed_events = *closed.borrow(), "chrome closed");
    assert_eq!(chrome.panel.borrow().phase(), PanelPhase::Closed);
    assert!(!chrome.fade.borrow().is_active());
    assert_eq!(*closed.borrow(), 1);

    // The closed hook re-armed the button.
    let tap = button.borrow_mut().handle_event(InputEvent::PointerStart)?;
    tracing::info!(response = ?tap, "button re-armed");
    println!("== Re-armed ==\n  {tap:?}");
    assert!(!tap.is_empty());

    println!("== Log ==");
    for change in chrome.log.borrow().iter() {
        println!("  {change:?}");
    }
    Ok(())
}
