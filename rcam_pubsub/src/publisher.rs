// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The publisher capability: subscribe, unsubscribe, and publish on any type that owns a
//! [`Dispatcher`].
//!
//! Implement [`Publisher::dispatcher`] and the three operations come for free. Each implementor
//! brings its own table, so two publishers never see each other's registrations unless they
//! deliberately hand out the same dispatcher.
//!
//! ```
//! use std::rc::Rc;
//! use std::cell::Cell;
//! use rcam_pubsub::{Callback, Dispatcher, Publisher};
//!
//! struct Door {
//!     events: Dispatcher<bool, Cell<u32>>,
//!     open: bool,
//! }
//!
//! impl Publisher<bool, Cell<u32>> for Door {
//!     fn dispatcher(&self) -> &Dispatcher<bool, Cell<u32>> {
//!         &self.events
//!     }
//! }
//!
//! impl Door {
//!     fn toggle(&mut self) {
//!         self.open = !self.open;
//!         self.publish("toggled", &self.open).unwrap();
//!     }
//! }
//!
//! let mut door = Door { events: Dispatcher::new(), open: false };
//! let opened = Rc::new(Cell::new(0));
//! let count = Callback::new(|c: &Cell<u32>, open: &bool| {
//!     if *open {
//!         c.set(c.get() + 1);
//!     }
//!     Ok(())
//! });
//! door.subscribe("toggled", &count, &opened);
//! door.toggle();
//! door.toggle();
//! door.toggle();
//! assert_eq!(opened.get(), 2);
//! ```

use alloc::rc::Rc;
use core::any::Any;

use crate::dispatcher::Dispatcher;
use crate::types::{Callback, PublishError};

/// A type that announces events through its own [`Dispatcher`].
pub trait Publisher<P, R: ?Sized = dyn Any> {
    /// The dispatcher holding this publisher's topic table.
    fn dispatcher(&self) -> &Dispatcher<P, R>;

    /// See [`Dispatcher::subscribe`].
    fn subscribe<'t>(
        &self,
        topic: impl Into<Option<&'t str>>,
        callback: &Callback<P, R>,
        receiver: &Rc<R>,
    ) {
        self.dispatcher().subscribe(topic, callback, receiver);
    }

    /// See [`Dispatcher::unsubscribe`].
    fn unsubscribe<'t>(
        &self,
        topic: impl Into<Option<&'t str>>,
        callback: &Callback<P, R>,
        receiver: &Rc<R>,
    ) {
        self.dispatcher().unsubscribe(topic, callback, receiver);
    }

    /// See [`Dispatcher::publish`].
    fn publish<'t>(
        &self,
        topic: impl Into<Option<&'t str>>,
        payload: &P,
    ) -> Result<(), PublishError> {
        self.dispatcher().publish(topic, payload)
    }
}

impl<P, R: ?Sized> Publisher<P, R> for Dispatcher<P, R> {
    #[inline]
    fn dispatcher(&self) -> &Self {
        self
    }
}

impl<P, R: ?Sized, T: Publisher<P, R> + ?Sized> Publisher<P, R> for Rc<T> {
    #[inline]
    fn dispatcher(&self) -> &Dispatcher<P, R> {
        (**self).dispatcher()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    struct Widget {
        events: Dispatcher<&'static str, RefCell<Vec<&'static str>>>,
    }

    impl Publisher<&'static str, RefCell<Vec<&'static str>>> for Widget {
        fn dispatcher(&self) -> &Dispatcher<&'static str, RefCell<Vec<&'static str>>> {
            &self.events
        }
    }

    fn widget() -> Widget {
        Widget {
            events: Dispatcher::new(),
        }
    }

    fn push() -> Callback<&'static str, RefCell<Vec<&'static str>>> {
        Callback::new(|log: &RefCell<Vec<&'static str>>, s: &&'static str| {
            log.borrow_mut().push(*s);
            Ok(())
        })
    }

    #[test]
    fn provided_methods_route_to_own_table() {
        let w = widget();
        let log = Rc::new(RefCell::new(Vec::new()));
        let cb = push();
        w.subscribe("open", &cb, &log);
        w.publish("open", &"a").unwrap();
        w.unsubscribe("open", &cb, &log);
        w.publish("open", &"b").unwrap();
        assert_eq!(*log.borrow(), ["a"]);
        assert_eq!(w.dispatcher().subscriber_count("open"), 0);
    }

    #[test]
    fn two_publishers_never_cross_talk() {
        let a = widget();
        let b = widget();
        let log = Rc::new(RefCell::new(Vec::new()));
        let cb = push();
        a.subscribe("open", &cb, &log);
        a.subscribe(None, &cb, &log);
        b.publish("open", &"from b").unwrap();
        b.publish(None, &"from b").unwrap();
        assert!(log.borrow().is_empty(), "b must not reach a's subscribers");
        a.publish(None, &"from a").unwrap();
        assert_eq!(*log.borrow(), ["from a"]);
    }

    #[test]
    fn shared_handle_publishes_through_inner() {
        let w = Rc::new(widget());
        let log = Rc::new(RefCell::new(Vec::new()));
        let cb = push();
        Publisher::subscribe(&w, "open", &cb, &log);
        Publisher::publish(&w, "open", &"x").unwrap();
        assert_eq!(*log.borrow(), ["x"]);
    }
}
