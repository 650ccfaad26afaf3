// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rcam Pubsub: a small, synchronous, per-instance topic dispatcher.
//!
//! ## Overview
//!
//! A [`Dispatcher`] maps topic names to ordered lists of registrations. A registration pairs a
//! [`Callback`] with a receiver, the value the callback runs against. Publishing a payload to a
//! topic invokes that topic's registrations in the order they were added, right away, on the
//! calling thread.
//!
//! There is no global bus. Every dispatcher owns its table, and types gain the
//! subscribe/unsubscribe/publish operations by implementing [`Publisher`] over a dispatcher they
//! hold. Widgets use this to announce state changes without knowing who listens.
//!
//! ## Topics
//!
//! Topics are plain strings. An omitted or empty topic means [`ANY`], which every fresh table
//! contains. Publishing to [`ANY`] only reaches registrations made on [`ANY`]; it is not a
//! wildcard.
//!
//! ## Identity
//!
//! Callbacks and receivers are reference-counted handles. [`Dispatcher::unsubscribe`] removes the
//! registrations whose callback *and* receiver are the very same handles (pointer identity), so
//! keep the handles you subscribed with.
//!
//! ## Failure
//!
//! Callbacks return [`CallbackResult`]. The first error stops the publish pass and comes back as
//! [`PublishError`]; registrations after the failing one are not invoked for that pass.
//!
//! ## Mutation during publish
//!
//! Each publish pass walks a snapshot taken when it starts, so callbacks may freely subscribe or
//! unsubscribe (on any topic, including the one being delivered). Changes apply from the next pass.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use rcam_pubsub::{Callback, Dispatcher};
//!
//! #[derive(Default)]
//! struct Ctx(RefCell<Vec<(&'static str, u32)>>);
//!
//! let d: Dispatcher<u32, Ctx> = Dispatcher::new();
//! let ctx = Rc::new(Ctx::default());
//! let f = Callback::new(|c: &Ctx, n: &u32| {
//!     c.0.borrow_mut().push(("f", *n));
//!     Ok(())
//! });
//! let g = Callback::new(|c: &Ctx, n: &u32| {
//!     c.0.borrow_mut().push(("g", *n));
//!     Ok(())
//! });
//!
//! d.subscribe("open", &f, &ctx);
//! d.subscribe("open", &g, &ctx);
//! d.publish("open", &42).unwrap();
//! assert_eq!(*ctx.0.borrow(), [("f", 42), ("g", 42)]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
pub mod publisher;
pub mod types;

pub use dispatcher::Dispatcher;
pub use publisher::Publisher;
pub use types::{
    ANY, Callback, CallbackError, CallbackResult, PublishError, ReceiverMismatch, Registration,
    resolve_topic,
};
