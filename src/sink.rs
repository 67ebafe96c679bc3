//! Sink trait and implementations
//!
//! The Sink trait defines the consumer of notifications in a sequence
//! pipeline. It provides three methods: next (for values), error (for
//! faults), and complete (for normal termination).

use std::sync::{Arc, Mutex};

use crate::error::Fault;

/// The receiver of the notifications a sequence pushes.
///
/// `error` and `complete` are terminal and mutually exclusive: at most one of
/// them is ever delivered per subscription, and nothing follows it. The gate
/// enforcing that sits in the source adapter's emitter, not in every sink, so
/// a sink implementation can stay stateless.
///
/// All three methods take `&mut self` so a sink can be driven through a
/// `Box<dyn Sink>` or shared behind a lock.
pub trait Sink<Item> {
  /// Receive the next value of the sequence.
  fn next(&mut self, item: Item);

  /// Receive a terminal fault.
  fn error(&mut self, fault: Fault);

  /// Receive the normal end of the sequence.
  fn complete(&mut self);
}

/// Closure adapter: builds a sink out of three callbacks.
///
/// This enables inline subscribers without a named sink type:
/// `seq.subscribe(FnSink::new(|v| .., |f| .., || ..))`.
pub struct FnSink<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> FnSink<N, E, C> {
  pub fn new(next: N, error: E, complete: C) -> Self { FnSink { next, error, complete } }
}

impl<N> FnSink<N, fn(Fault), fn()> {
  /// A sink that only handles values; faults and completion are ignored.
  pub fn from_next(next: N) -> Self {
    FnSink { next, error: discard_fault, complete: noop }
  }
}

fn discard_fault(_: Fault) {}
fn noop() {}

impl<Item, N, E, C> Sink<Item> for FnSink<N, E, C>
where
  N: FnMut(Item),
  E: FnMut(Fault),
  C: FnMut(),
{
  #[inline]
  fn next(&mut self, item: Item) { (self.next)(item) }

  #[inline]
  fn error(&mut self, fault: Fault) { (self.error)(fault) }

  #[inline]
  fn complete(&mut self) { (self.complete)() }
}

/// Shared-ownership sink for fan-in delivery.
///
/// Wraps a sink behind `Arc<Mutex>` so several execution contexts can feed
/// the same downstream: the inner subscriptions of `flatten_map` and the
/// per-notification tasks of `on_notify_context` each hold a clone.
pub struct SharedSink<O>(Arc<Mutex<O>>);

impl<O> SharedSink<O> {
  pub fn new(sink: O) -> Self { SharedSink(Arc::new(Mutex::new(sink))) }
}

impl<O> Clone for SharedSink<O> {
  fn clone(&self) -> Self { SharedSink(self.0.clone()) }
}

impl<Item, O> Sink<Item> for SharedSink<O>
where
  O: Sink<Item>,
{
  fn next(&mut self, item: Item) { self.0.lock().unwrap().next(item) }

  fn error(&mut self, fault: Fault) { self.0.lock().unwrap().error(fault) }

  fn complete(&mut self) { self.0.lock().unwrap().complete() }
}
