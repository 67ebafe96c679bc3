use crate::error::Fault;
use crate::sequence::Sequence;
use crate::sink::Sink;

/// Pushes only the values that pass a predicate test.
///
/// This struct is created by [`Sequence::filter_with`].
#[derive(Clone)]
pub struct FilterWithOp<S, F> {
  pub(crate) source: S,
  pub(crate) predicate: F,
}

impl<S, F> Sequence for FilterWithOp<S, F>
where
  S: Sequence,
  F: FnMut(&S::Item) -> Result<bool, Fault> + Send + 'static,
{
  type Item = S::Item;
  type Unsub = S::Unsub;

  fn subscribe<O>(self, sink: O) -> Self::Unsub
  where
    O: Sink<S::Item> + Send + 'static,
  {
    self
      .source
      .subscribe(FilterWithSink { sink, predicate: self.predicate })
  }
}

pub struct FilterWithSink<O, F> {
  sink: O,
  predicate: F,
}

impl<Item, O, F> Sink<Item> for FilterWithSink<O, F>
where
  O: Sink<Item>,
  F: FnMut(&Item) -> Result<bool, Fault>,
{
  fn next(&mut self, item: Item) {
    match (self.predicate)(&item) {
      Ok(true) => self.sink.next(item),
      Ok(false) => {}
      Err(fault) => self.sink.error(fault),
    }
  }

  #[inline]
  fn error(&mut self, fault: Fault) { self.sink.error(fault) }

  #[inline]
  fn complete(&mut self) { self.sink.complete() }
}
