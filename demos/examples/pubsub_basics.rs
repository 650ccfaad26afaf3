// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher basics: ordering, default topic, unsubscribe by identity, and isolation.
//!
//! Run:
//! - `cargo run -p rcam_demos --example pubsub_basics`

use std::cell::RefCell;
use std::rc::Rc;

use rcam_pubsub::{ANY, Callback, Dispatcher};

#[derive(Debug)]
struct Ctx {
    name: &'static str,
}

type Log = Rc<RefCell<Vec<String>>>;

fn logger(tag: &'static str, log: &Log) -> Callback<i32, Ctx> {
    let log = log.clone();
    Callback::new(move |ctx: &Ctx, n: &i32| {
        log.borrow_mut().push(format!("{tag}({n}) under {}", ctx.name));
        Ok(())
    })
}

fn main() {
    let log = Log::default();
    let f = logger("f", &log);
    let g = logger("g", &log);
    let ctx = Rc::new(Ctx { name: "ctx" });
    let ctx2 = Rc::new(Ctx { name: "ctx2" });

    // Ordered delivery.
    let d = Dispatcher::new();
    d.subscribe("open", &f, &ctx);
    d.subscribe("open", &g, &ctx);
    d.publish("open", &42).unwrap();
    println!("== Ordered ==\n  {:?}", log.borrow());
    assert_eq!(*log.borrow(), ["f(42) under ctx", "g(42) under ctx"]);
    log.borrow_mut().clear();

    // Default topic.
    let d = Dispatcher::new();
    d.subscribe(None, &f, &ctx);
    d.publish(None, &7).unwrap();
    d.publish("open", &8).unwrap();
    println!("== Default topic `{ANY}` ==\n  {:?}", log.borrow());
    assert_eq!(*log.borrow(), ["f(7) under ctx"]);
    log.borrow_mut().clear();

    // Same callback, two receivers; remove one.
    let d = Dispatcher::new();
    d.subscribe("open", &f, &ctx);
    d.subscribe("open", &f, &ctx2);
    d.unsubscribe("open", &f, &ctx);
    d.publish("open", &1).unwrap();
    println!("== Unsubscribe by identity ==\n  {:?}", log.borrow());
    assert_eq!(*log.borrow(), ["f(1) under ctx2"]);
    log.borrow_mut().clear();

    // Independent dispatchers.
    let a = Dispatcher::new();
    let b: Dispatcher<i32, Ctx> = Dispatcher::new();
    a.subscribe("open", &f, &ctx);
    b.publish("open", &1).unwrap();
    println!("== Isolation ==\n  {:?}", log.borrow());
    assert!(log.borrow().is_empty());
    println!("{a:?} / {b:?}");
}
