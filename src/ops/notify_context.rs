use crate::error::Fault;
use crate::scheduler::Scheduler;
use crate::sequence::Sequence;
use crate::sink::{SharedSink, Sink};

/// Re-dispatches every notification through a scheduler.
///
/// The upstream is subscribed synchronously; each `next`/`error`/`complete`
/// then becomes one independently submitted task performing the same call on
/// the shared downstream sink. One task per notification means relative
/// order is only kept when the scheduler itself is FIFO and single-worker;
/// pick [`SingleThreadScheduler`] when order matters.
///
/// This struct is created by [`Sequence::on_notify_context`].
///
/// [`SingleThreadScheduler`]: crate::scheduler::SingleThreadScheduler
#[derive(Clone)]
pub struct NotifyContextOp<S, SD> {
  pub(crate) source: S,
  pub(crate) scheduler: SD,
}

impl<S, SD> Sequence for NotifyContextOp<S, SD>
where
  S: Sequence,
  S::Item: Send + 'static,
  SD: Scheduler + Send + 'static,
{
  type Item = S::Item;
  type Unsub = S::Unsub;

  fn subscribe<O>(self, sink: O) -> Self::Unsub
  where
    O: Sink<S::Item> + Send + 'static,
  {
    self.source.subscribe(NotifyContextSink {
      sink: SharedSink::new(sink),
      scheduler: self.scheduler,
    })
  }
}

pub struct NotifyContextSink<O, SD> {
  sink: SharedSink<O>,
  scheduler: SD,
}

impl<Item, O, SD> Sink<Item> for NotifyContextSink<O, SD>
where
  Item: Send + 'static,
  O: Sink<Item> + Send + 'static,
  SD: Scheduler,
{
  fn next(&mut self, item: Item) {
    let mut sink = self.sink.clone();
    self.scheduler.execute(Box::new(move || sink.next(item)));
  }

  fn error(&mut self, fault: Fault) {
    let mut sink = self.sink.clone();
    self.scheduler.execute(Box::new(move || sink.error(fault)));
  }

  fn complete(&mut self) {
    let mut sink = self.sink.clone();
    self.scheduler.execute(Box::new(move || sink.complete()));
  }
}
