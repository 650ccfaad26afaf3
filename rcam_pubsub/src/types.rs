// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the dispatcher: topics, callbacks, registrations, and errors.
//!
//! ## Overview
//!
//! These types describe what a [`Dispatcher`](crate::dispatcher::Dispatcher) stores and what it
//! reports back. Callbacks and receivers are shared handles; their identity (not their contents)
//! is what [`Dispatcher::unsubscribe`](crate::dispatcher::Dispatcher::unsubscribe) matches on.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use core::any::Any;

/// Topic used when no topic (or an empty one) is given.
pub const ANY: &str = "any";

/// Resolve an optional topic name, mapping `None` and `""` to [`ANY`].
#[inline]
pub fn resolve_topic(topic: Option<&str>) -> &str {
    match topic {
        Some(t) if !t.is_empty() => t,
        _ => ANY,
    }
}

/// Error type returned by a failing callback.
pub type CallbackError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Return type of every callback.
pub type CallbackResult = Result<(), CallbackError>;

/// A callback invoked with a receiver and a payload.
///
/// Cloning a callback is cheap and yields a handle with the same identity, so the clone
/// can be used later to [`unsubscribe`](crate::dispatcher::Dispatcher::unsubscribe).
/// Two callbacks built from separate calls to [`Callback::new`] are never identical,
/// even when they wrap the same function.
pub struct Callback<P, R: ?Sized = dyn Any> {
    func: Rc<dyn Fn(&R, &P) -> CallbackResult>,
}

impl<P, R: ?Sized> Callback<P, R> {
    /// Wrap a function into a callback with a fresh identity.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&R, &P) -> CallbackResult + 'static,
    {
        Self { func: Rc::new(f) }
    }

    /// Returns `true` if both handles refer to the same callback.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }

    #[inline]
    pub(crate) fn call(&self, receiver: &R, payload: &P) -> CallbackResult {
        (self.func)(receiver, payload)
    }
}

impl<P: 'static> Callback<P, dyn Any> {
    /// Build a callback for an untyped receiver that expects a `T`.
    ///
    /// The receiver is downcast when the callback runs. If it is not a `T`, the call fails
    /// with [`ReceiverMismatch`] and the publish pass stops there.
    ///
    /// ```
    /// use std::any::Any;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use rcam_pubsub::{Callback, Dispatcher};
    ///
    /// struct Counter(Cell<u32>);
    ///
    /// let d: Dispatcher<u32> = Dispatcher::new();
    /// let counter = Rc::new(Counter(Cell::new(0)));
    /// let receiver: Rc<dyn Any> = counter.clone();
    /// let add = Callback::for_receiver(|c: &Counter, n: &u32| {
    ///     c.0.set(c.0.get() + n);
    ///     Ok(())
    /// });
    /// d.subscribe("add", &add, &receiver);
    /// d.publish("add", &5).unwrap();
    /// assert_eq!(counter.0.get(), 5);
    /// ```
    pub fn for_receiver<T, F>(f: F) -> Self
    where
        T: Any,
        F: Fn(&T, &P) -> CallbackResult + 'static,
    {
        Self::new(move |receiver, payload| match receiver.downcast_ref::<T>() {
            Some(target) => f(target, payload),
            None => Err(ReceiverMismatch {
                expected: core::any::type_name::<T>(),
            }
            .into()),
        })
    }
}

impl<P, R: ?Sized> Clone for Callback<P, R> {
    fn clone(&self) -> Self {
        Self {
            func: Rc::clone(&self.func),
        }
    }
}

impl<P, R: ?Sized> core::fmt::Debug for Callback<P, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callback")
            .field("ptr", &Rc::as_ptr(&self.func).cast::<()>())
            .finish()
    }
}

/// A stored (callback, receiver) pair for one topic.
///
/// Returned by [`Dispatcher::registrations`](crate::dispatcher::Dispatcher::registrations).
pub struct Registration<P, R: ?Sized = dyn Any> {
    pub(crate) callback: Callback<P, R>,
    pub(crate) receiver: Rc<R>,
}

impl<P, R: ?Sized> Registration<P, R> {
    /// Create a registration.
    pub fn new(callback: Callback<P, R>, receiver: Rc<R>) -> Self {
        Self { callback, receiver }
    }

    /// The callback handle.
    pub fn callback(&self) -> &Callback<P, R> {
        &self.callback
    }

    /// The receiver handle.
    pub fn receiver(&self) -> &Rc<R> {
        &self.receiver
    }

    /// Identity match on both halves.
    #[inline]
    pub fn matches(&self, callback: &Callback<P, R>, receiver: &Rc<R>) -> bool {
        self.callback.ptr_eq(callback) && Rc::ptr_eq(&self.receiver, receiver)
    }

    #[inline]
    pub(crate) fn invoke(&self, payload: &P) -> CallbackResult {
        self.callback.call(&self.receiver, payload)
    }
}

impl<P, R: ?Sized> Clone for Registration<P, R> {
    fn clone(&self) -> Self {
        Self {
            callback: self.callback.clone(),
            receiver: Rc::clone(&self.receiver),
        }
    }
}

impl<P, R: ?Sized> core::fmt::Debug for Registration<P, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registration")
            .field("callback", &self.callback)
            .field("receiver", &Rc::as_ptr(&self.receiver).cast::<()>())
            .finish()
    }
}

/// A receiver handed to [`Callback::for_receiver`] was not of the expected type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("receiver is not a `{expected}`")]
pub struct ReceiverMismatch {
    /// Type name the callback expected.
    pub expected: &'static str,
}

/// Errors reported by [`Dispatcher::publish`](crate::dispatcher::Dispatcher::publish).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PublishError {
    /// A callback returned an error; later registrations on the topic were not invoked.
    #[error("subscriber {index} on topic `{topic}` failed")]
    Callback {
        /// Topic being published.
        topic: String,
        /// Position of the failing registration in the delivery pass.
        index: usize,
        /// Error returned by the callback.
        #[source]
        source: CallbackError,
    },
}

impl PublishError {
    /// Topic whose delivery pass was aborted.
    pub fn topic(&self) -> &str {
        match self {
            Self::Callback { topic, .. } => topic,
        }
    }

    /// The callback error, if it is of type `E`.
    pub fn downcast_source<E: core::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Callback { source, .. } => source.downcast_ref::<E>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn topic_defaults_to_any() {
        assert_eq!(resolve_topic(None), ANY);
        assert_eq!(resolve_topic(Some("")), ANY);
        assert_eq!(resolve_topic(Some("open")), "open");
    }

    #[test]
    fn callback_clone_keeps_identity() {
        let a: Callback<u32, ()> = Callback::new(|_, _| Ok(()));
        let b = a.clone();
        let c: Callback<u32, ()> = Callback::new(|_, _| Ok(()));
        assert!(a.ptr_eq(&b), "a clone must share identity");
        assert!(!a.ptr_eq(&c), "separately built callbacks are distinct");
    }

    #[test]
    fn registration_matches_on_both_halves() {
        let cb: Callback<u32, ()> = Callback::new(|_, _| Ok(()));
        let other: Callback<u32, ()> = Callback::new(|_, _| Ok(()));
        let r1 = Rc::new(());
        let r2 = Rc::new(());
        let reg = Registration::new(cb.clone(), r1.clone());
        assert!(reg.matches(&cb, &r1));
        assert!(!reg.matches(&cb, &r2), "receiver differs");
        assert!(!reg.matches(&other, &r1), "callback differs");
    }

    #[test]
    fn for_receiver_reports_mismatch() {
        struct Expected;
        let cb: Callback<u8> = Callback::for_receiver(|_: &Expected, _| Ok(()));
        let wrong: Rc<dyn Any> = Rc::new(7_u32);
        let err = cb.call(&*wrong, &0).unwrap_err();
        let mismatch = err.downcast_ref::<ReceiverMismatch>().unwrap();
        assert!(mismatch.expected.ends_with("Expected"));

        let right: Rc<dyn Any> = Rc::new(Expected);
        assert!(cb.call(&*right, &0).is_ok());
    }

    #[test]
    fn publish_error_display_names_topic() {
        let err = PublishError::Callback {
            topic: "open".to_string(),
            index: 2,
            source: Box::new(ReceiverMismatch { expected: "X" }),
        };
        assert_eq!(err.to_string(), "subscriber 2 on topic `open` failed");
        assert_eq!(err.topic(), "open");
        assert_eq!(
            err.downcast_source::<ReceiverMismatch>(),
            Some(&ReceiverMismatch { expected: "X" })
        );
    }
}
