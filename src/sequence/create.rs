use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::disposable::Disposable;
use crate::error::Fault;
use crate::sequence::Sequence;
use crate::sink::Sink;

/// Creates a sequence from a producer function.
///
/// The producer is called once per subscription with an [`Emitter`] bound to
/// the subscriber's sink and drives it imperatively: zero or more `next`
/// calls followed by at most one of `error`/`complete`. Nothing enforces
/// that the producer terminates the sequence; one that never does simply
/// leaves the subscription open.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use sequent::prelude::*;
///
/// let emitted = Arc::new(Mutex::new(vec![]));
/// let sink_values = emitted.clone();
///
/// sequence::create(|emitter: &mut Emitter<i32>| {
///   emitter.next(1);
///   emitter.next(2);
///   emitter.complete();
/// })
/// .subscribe(FnSink::from_next(move |v: i32| sink_values.lock().unwrap().push(v)));
///
/// assert_eq!(*emitted.lock().unwrap(), vec![1, 2]);
/// ```
pub fn create<Item, F>(producer: F) -> Create<F, Item>
where
  Item: 'static,
  F: FnOnce(&mut Emitter<Item>),
{
  Create { producer, _marker: PhantomData }
}

/// Sequence created from a producer function.
///
/// This struct is created by [`create`].
#[derive(Clone)]
pub struct Create<F, Item: 'static> {
  producer: F,
  _marker: PhantomData<Item>,
}

impl<F, Item> Sequence for Create<F, Item>
where
  Item: 'static,
  F: FnOnce(&mut Emitter<Item>),
{
  type Item = Item;
  type Unsub = EmitterHandle;

  fn subscribe<O>(self, sink: O) -> EmitterHandle
  where
    O: Sink<Item> + Send + 'static,
  {
    let mut emitter = Emitter::new(sink);
    let handle = emitter.handle();
    (self.producer)(&mut emitter);
    handle
  }
}

/// The producer-facing handle of one live subscription.
///
/// Combines delivery with disposal gating. Two independent flags gate every
/// call into the downstream sink: `done`, set internally once a terminal
/// notification went through, and `disposed`, set externally through
/// [`Disposable::dispose`]. Once either is set, nothing is delivered any
/// more; a second terminal call is a silent no-op.
///
/// `done` is confined to whichever thread drives the producer, so it is a
/// plain bool. `disposed` may be written by an unrelated thread holding the
/// [`EmitterHandle`] and is an atomic with relaxed ordering; each flag has a
/// single logical writer.
pub struct Emitter<Item: 'static> {
  sink: Box<dyn Sink<Item> + Send>,
  done: bool,
  disposed: Arc<AtomicBool>,
}

impl<Item: 'static> Emitter<Item> {
  pub(crate) fn new<O>(sink: O) -> Self
  where
    O: Sink<Item> + Send + 'static,
  {
    Emitter {
      sink: Box::new(sink),
      done: false,
      disposed: Arc::new(AtomicBool::new(false)),
    }
  }

  pub(crate) fn handle(&self) -> EmitterHandle {
    EmitterHandle { disposed: self.disposed.clone() }
  }

  /// Deliver the next value, unless the subscription is done or disposed.
  pub fn next(&mut self, item: Item) {
    if !self.done && !self.disposed.load(Ordering::Relaxed) {
      self.sink.next(item);
    }
  }

  /// Deliver a terminal fault and close the subscription.
  pub fn error(&mut self, fault: Fault) {
    if !self.done && !self.disposed.load(Ordering::Relaxed) {
      self.done = true;
      self.sink.error(fault);
    }
  }

  /// Deliver normal completion and close the subscription.
  pub fn complete(&mut self) {
    if !self.done && !self.disposed.load(Ordering::Relaxed) {
      self.done = true;
      self.sink.complete();
    }
  }
}

impl<Item: 'static> Disposable for Emitter<Item> {
  fn dispose(&mut self) { self.disposed.store(true, Ordering::Relaxed); }

  fn is_disposed(&self) -> bool { self.disposed.load(Ordering::Relaxed) }
}

/// Disposable returned by the source adapters.
///
/// Shares the emitter's `disposed` flag; disposing here gates all future
/// deliveries through that emitter, from whatever thread is driving it.
#[derive(Clone)]
pub struct EmitterHandle {
  disposed: Arc<AtomicBool>,
}

impl Disposable for EmitterHandle {
  fn dispose(&mut self) { self.disposed.store(true, Ordering::Relaxed); }

  fn is_disposed(&self) -> bool { self.disposed.load(Ordering::Relaxed) }
}
