use crate::disposable::NopDisposable;
use crate::scheduler::Scheduler;
use crate::sequence::Sequence;
use crate::sink::Sink;

/// Runs the act of subscribing to the upstream sequence on a scheduler.
///
/// `subscribe` submits one task performing the real upstream subscription
/// and returns immediately. The caller gets a [`NopDisposable`] back:
/// cancelling a subscription that has not yet run on the scheduler is
/// unsupported, so the handle produced on the worker is dropped there.
///
/// This struct is created by [`Sequence::on_subscribe_context`].
#[derive(Clone)]
pub struct SubscribeContextOp<S, SD> {
  pub(crate) source: S,
  pub(crate) scheduler: SD,
}

impl<S, SD> Sequence for SubscribeContextOp<S, SD>
where
  S: Sequence + Send + 'static,
  SD: Scheduler,
{
  type Item = S::Item;
  type Unsub = NopDisposable;

  fn subscribe<O>(self, sink: O) -> NopDisposable
  where
    O: Sink<S::Item> + Send + 'static,
  {
    let source = self.source;
    self.scheduler.execute(Box::new(move || {
      let _ = source.subscribe(sink);
    }));
    NopDisposable
  }
}
