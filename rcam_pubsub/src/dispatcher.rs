// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher implementation.
//!
//! ## Overview
//!
//! Keeps a topic table (topic name → ordered registrations) and runs publish passes over it.
//!
//! ## Delivery
//!
//! - Registrations on a topic are invoked in the order they were subscribed.
//! - Each publish walks a snapshot of the topic taken when the pass starts. Subscribing during
//!   the pass does not extend it, and unsubscribing during the pass does not shorten it. The next
//!   publish sees the change.
//! - The first callback that returns an error ends the pass. The error is handed back to the
//!   publisher as [`PublishError::Callback`].
//!
//! ## Reentrancy
//!
//! Every operation takes `&self`. No borrow of the table is held while callbacks run, so a
//! callback may subscribe, unsubscribe, or publish on the dispatcher that invoked it.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::any::Any;
use core::cell::RefCell;

use crate::types::{ANY, Callback, PublishError, Registration, resolve_topic};

/// Per-instance topic dispatcher.
///
/// ## Usage
///
/// - Construct with [`Dispatcher::new`]; the table starts with the [`ANY`] topic present.
/// - [`Dispatcher::subscribe`] a [`Callback`] with a receiver handle.
/// - [`Dispatcher::publish`] a payload to a topic.
/// - [`Dispatcher::unsubscribe`] with the same callback and receiver handles.
///
/// Topics are given as `&str` or `Option<&str>`; `None` and `""` both mean [`ANY`].
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use rcam_pubsub::{Callback, Dispatcher};
///
/// let d: Dispatcher<i32, RefCell<Vec<i32>>> = Dispatcher::new();
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let record = Callback::new(|log: &RefCell<Vec<i32>>, n: &i32| {
///     log.borrow_mut().push(*n);
///     Ok(())
/// });
///
/// d.subscribe("open", &record, &log);
/// d.publish("open", &42).unwrap();
/// d.unsubscribe("open", &record, &log);
/// d.publish("open", &43).unwrap();
/// assert_eq!(*log.borrow(), [42]);
/// ```
pub struct Dispatcher<P, R: ?Sized = dyn Any> {
    topics: RefCell<BTreeMap<String, Vec<Registration<P, R>>>>,
}

impl<P, R: ?Sized> Dispatcher<P, R> {
    /// Create a dispatcher with an empty table holding only the [`ANY`] topic.
    pub fn new() -> Self {
        let mut topics = BTreeMap::new();
        topics.insert(ANY.to_string(), Vec::new());
        Self {
            topics: RefCell::new(topics),
        }
    }

    /// Append a registration to `topic`, creating the topic if needed.
    ///
    /// Duplicate registrations are kept; each one is invoked on every publish.
    pub fn subscribe<'t>(
        &self,
        topic: impl Into<Option<&'t str>>,
        callback: &Callback<P, R>,
        receiver: &Rc<R>,
    ) {
        let topic = resolve_topic(topic.into());
        let mut topics = self.topics.borrow_mut();
        let list = topics.entry(topic.to_string()).or_default();
        list.push(Registration::new(callback.clone(), Rc::clone(receiver)));
        tracing::trace!(topic, subscribers = list.len(), "subscribe");
    }

    /// Remove every registration on `topic` whose callback and receiver are both identical
    /// to the given handles.
    ///
    /// Unknown topics and unmatched pairs are ignored.
    pub fn unsubscribe<'t>(
        &self,
        topic: impl Into<Option<&'t str>>,
        callback: &Callback<P, R>,
        receiver: &Rc<R>,
    ) {
        let topic = resolve_topic(topic.into());
        let mut topics = self.topics.borrow_mut();
        let Some(list) = topics.get_mut(topic) else {
            return;
        };
        let before = list.len();
        list.retain(|reg| !reg.matches(callback, receiver));
        tracing::trace!(topic, removed = before - list.len(), "unsubscribe");
    }

    /// Invoke every registration on `topic` with `payload`, in subscription order.
    ///
    /// Publishing to a topic with no registrations does nothing. If a callback fails, the
    /// remaining registrations are skipped and the failure is returned.
    pub fn publish<'t>(
        &self,
        topic: impl Into<Option<&'t str>>,
        payload: &P,
    ) -> Result<(), PublishError> {
        let topic = resolve_topic(topic.into());
        let snapshot = self.registrations(topic);
        tracing::trace!(topic, subscribers = snapshot.len(), "publish");

        for (index, reg) in snapshot.iter().enumerate() {
            if let Err(source) = reg.invoke(payload) {
                tracing::warn!(topic, index, error = %source, "subscriber failed, publish aborted");
                return Err(PublishError::Callback {
                    topic: topic.to_string(),
                    index,
                    source,
                });
            }
        }
        Ok(())
    }

    /// Copy of the registrations currently on `topic`, in delivery order.
    pub fn registrations<'t>(&self, topic: impl Into<Option<&'t str>>) -> Vec<Registration<P, R>> {
        let topic = resolve_topic(topic.into());
        self.topics
            .borrow()
            .get(topic)
            .map(|list| list.to_vec())
            .unwrap_or_default()
    }

    /// Number of registrations on `topic`.
    pub fn subscriber_count<'t>(&self, topic: impl Into<Option<&'t str>>) -> usize {
        let topic = resolve_topic(topic.into());
        self.topics.borrow().get(topic).map_or(0, Vec::len)
    }

    /// Names of all topics the table has seen, in lexical order.
    ///
    /// Topics stay in the table after their last registration is removed.
    pub fn topics(&self) -> Vec<String> {
        self.topics.borrow().keys().cloned().collect()
    }
}

impl<P, R: ?Sized> Default for Dispatcher<P, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, R: ?Sized> core::fmt::Debug for Dispatcher<P, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let topics = self.topics.borrow();
        f.debug_map()
            .entries(topics.iter().map(|(k, v)| (k, v.len())))
            .finish()
    }
}
