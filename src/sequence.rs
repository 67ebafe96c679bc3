//! The sequence abstraction: a lazy, re-subscribable description of a
//! push-based stream of values.
//!
//! A sequence is built bottom-up by wrapping; nothing runs until `subscribe`
//! is called on the outermost wrapper, which recursively subscribes its
//! upstream and installs a chain of sink adapters that notifications then
//! flow down through.

use std::marker::PhantomData;

use crate::disposable::Disposable;
use crate::error::Fault;
use crate::ops::filter_with::FilterWithOp;
use crate::ops::flatten_map::FlattenMapOp;
use crate::ops::notify_context::NotifyContextOp;
use crate::ops::subscribe_context::SubscribeContextOp;
use crate::ops::transform::TransformOp;
use crate::scheduler::Scheduler;
use crate::sink::Sink;

mod create;
mod of;

pub use create::{create, Create, Emitter, EmitterHandle};
pub use of::{of, OfSeq};

/// A lazily evaluated push-based sequence of values.
///
/// Construction is pure: every operator method only wraps `self` in a new
/// sequence value and no work happens until [`subscribe`](Sequence::subscribe).
/// Subscribing consumes the sequence; since every sequence type is `Clone`,
/// each independent execution is started from its own clone.
///
/// Sinks are required to be `Send + 'static` because any pipeline may be
/// handed over to a scheduler by one of the context-switch operators.
pub trait Sequence {
  /// The element type this sequence pushes.
  type Item;

  /// The disposable returned by `subscribe`.
  type Unsub: Disposable;

  /// Start one execution of this sequence, delivering its notifications to
  /// `sink`.
  ///
  /// Returns immediately once the subscription is installed; whether any
  /// notification has been delivered by then depends on the sources and the
  /// scheduling operators in the chain.
  fn subscribe<O>(self, sink: O) -> Self::Unsub
  where
    Self: Sized,
    O: Sink<Self::Item> + Send + 'static;

  /// Map every value through `mapper` and push the result.
  ///
  /// A mapper returning `Err` has that fault forwarded via `error` on the
  /// downstream sink. The operator keeps no state, so the upstream keeps
  /// running and later items are mapped independently.
  fn transform<B, F>(self, mapper: F) -> TransformOp<Self, F, B>
  where
    Self: Sized,
    F: FnMut(Self::Item) -> Result<B, Fault>,
  {
    TransformOp { source: self, mapper, _marker: PhantomData }
  }

  /// Push only the values for which `predicate` returns `Ok(true)`.
  ///
  /// A predicate returning `Err` is converted to `error` exactly like a
  /// mapper fault in [`transform`](Sequence::transform).
  fn filter_with<F>(self, predicate: F) -> FilterWithOp<Self, F>
  where
    Self: Sized,
    F: FnMut(&Self::Item) -> Result<bool, Fault>,
  {
    FilterWithOp { source: self, predicate }
  }

  /// Map every value to an inner sequence and merge the inner values into
  /// one flat output sequence.
  ///
  /// Each inner sequence is subscribed as soon as its source item arrives.
  /// Inner `next` and `error` go straight to the downstream sink; inner
  /// `complete` is discarded, only the outer completion completes the
  /// output. There is no merge-completion accounting: with an
  /// asynchronous inner sequence the outer `complete` can be delivered
  /// before all inner values. Callers that need the inner values first must
  /// arrange that ordering themselves.
  fn flatten_map<Inner, F>(self, mapper: F) -> FlattenMapOp<Self, F, Inner>
  where
    Self: Sized,
    Inner: Sequence,
    F: FnMut(Self::Item) -> Result<Inner, Fault>,
  {
    FlattenMapOp { source: self, mapper, _marker: PhantomData }
  }

  /// Run the act of subscribing to this sequence as one task on `scheduler`.
  ///
  /// The returned disposable is a [`NopDisposable`]: a subscription that has
  /// not yet run on the scheduler cannot be cancelled.
  ///
  /// [`NopDisposable`]: crate::disposable::NopDisposable
  fn on_subscribe_context<SD>(self, scheduler: SD) -> SubscribeContextOp<Self, SD>
  where
    Self: Sized,
    SD: Scheduler,
  {
    SubscribeContextOp { source: self, scheduler }
  }

  /// Re-dispatch every notification as its own task on `scheduler`.
  ///
  /// Relative notification order is preserved only if the scheduler executes
  /// submitted tasks in FIFO order on a single worker, as
  /// [`SingleThreadScheduler`] does. On a multi-worker pool independently
  /// submitted tasks may run out of submission order.
  ///
  /// [`SingleThreadScheduler`]: crate::scheduler::SingleThreadScheduler
  fn on_notify_context<SD>(self, scheduler: SD) -> NotifyContextOp<Self, SD>
  where
    Self: Sized,
    SD: Scheduler,
  {
    NotifyContextOp { source: self, scheduler }
  }
}
