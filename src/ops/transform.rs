use std::marker::PhantomData;

use crate::error::Fault;
use crate::sequence::Sequence;
use crate::sink::Sink;

/// Applies a mapping function to each value and pushes its result.
///
/// This struct is created by [`Sequence::transform`].
#[derive(Clone)]
pub struct TransformOp<S, F, B> {
  pub(crate) source: S,
  pub(crate) mapper: F,
  pub(crate) _marker: PhantomData<B>,
}

impl<S, F, B> Sequence for TransformOp<S, F, B>
where
  S: Sequence,
  F: FnMut(S::Item) -> Result<B, Fault> + Send + 'static,
{
  type Item = B;
  type Unsub = S::Unsub;

  fn subscribe<O>(self, sink: O) -> Self::Unsub
  where
    O: Sink<B> + Send + 'static,
  {
    self
      .source
      .subscribe(TransformSink { sink, mapper: self.mapper })
  }
}

pub struct TransformSink<O, F> {
  sink: O,
  mapper: F,
}

impl<Item, B, O, F> Sink<Item> for TransformSink<O, F>
where
  O: Sink<B>,
  F: FnMut(Item) -> Result<B, Fault>,
{
  fn next(&mut self, item: Item) {
    match (self.mapper)(item) {
      Ok(mapped) => self.sink.next(mapped),
      Err(fault) => self.sink.error(fault),
    }
  }

  #[inline]
  fn error(&mut self, fault: Fault) { self.sink.error(fault) }

  #[inline]
  fn complete(&mut self) { self.sink.complete() }
}
