//! # sequent: a minimal push-based reactive-sequence engine
//!
//! A sequence is a lazy, re-subscribable description of how to produce
//! notifications. Operators wrap it without running anything; subscribing
//! installs a chain of sinks and lets the notifications flow.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//!
//! use sequent::prelude::*;
//!
//! let out = Arc::new(Mutex::new(String::new()));
//! let sink_out = out.clone();
//!
//! sequence::of(["a", "bb", "ccc"])
//!   .transform(|v: &str| Ok(v.to_uppercase()))
//!   .filter_with(|v| Ok(v.len() > 1))
//!   .subscribe(FnSink::from_next(move |v: String| {
//!     sink_out.lock().unwrap().push_str(&v)
//!   }));
//!
//! assert_eq!(*out.lock().unwrap(), "BBCCC");
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Sequence`] | The core trait defining sequence operations |
//! | [`Sink`] | Consumes `next`, `error`, and `complete` notifications |
//! | [`Disposable`] | Handle to cancel an active subscription |
//! | [`Scheduler`] | Worker pool accepting submitted tasks |
//!
//! Concurrency enters a pipeline only through the two context-switch
//! operators, [`Sequence::on_subscribe_context`] and
//! [`Sequence::on_notify_context`], backed by the schedulers in
//! [`scheduler`]: a fixed compute pool, an elastic I/O pool and a single
//! FIFO worker.
//!
//! [`Sequence`]: sequence::Sequence
//! [`Sequence::on_subscribe_context`]: sequence::Sequence::on_subscribe_context
//! [`Sequence::on_notify_context`]: sequence::Sequence::on_notify_context
//! [`Sink`]: sink::Sink
//! [`Disposable`]: disposable::Disposable
//! [`Scheduler`]: scheduler::Scheduler

pub mod disposable;
pub mod error;
pub mod ops;
pub mod prelude;
pub mod scheduler;
pub mod sequence;
pub mod sink;

pub use prelude::*;
