use crate::sequence::create::Emitter;
use crate::sequence::{EmitterHandle, Sequence};
use crate::sink::Sink;

/// Creates a sequence that emits each element of a collection in order and
/// then completes.
///
/// Never emits an error. Clone the sequence to replay it; every subscription
/// walks the collection from the start.
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
/// sequence::of(0..4)
///   .subscribe(FnSink::from_next(move |v: i32| sink_values.lock().unwrap().push(v)));
///
/// assert_eq!(*emitted.lock().unwrap(), vec![0, 1, 2, 3]);
/// ```
pub fn of<I>(items: I) -> OfSeq<I>
where
  I: IntoIterator,
{
  OfSeq(items)
}

/// Sequence over a fixed collection of values.
///
/// This struct is created by [`of`].
#[derive(Clone)]
pub struct OfSeq<I>(pub(crate) I);

impl<I> Sequence for OfSeq<I>
where
  I: IntoIterator,
  I::Item: 'static,
{
  type Item = I::Item;
  type Unsub = EmitterHandle;

  fn subscribe<O>(self, sink: O) -> EmitterHandle
  where
    O: Sink<I::Item> + Send + 'static,
  {
    let mut emitter = Emitter::new(sink);
    let handle = emitter.handle();
    for item in self.0 {
      emitter.next(item);
    }
    emitter.complete();
    handle
  }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  #[test]
  fn emits_in_order_then_completes() {
    let log = Arc::new(Mutex::new(vec![]));
    let next_log = log.clone();
    let complete_log = log.clone();

    sequence::of(["a", "bb", "ccc"]).subscribe(FnSink::new(
      move |v: &str| next_log.lock().unwrap().push(format!("next:{v}")),
      |_: Fault| panic!("of never errors"),
      move || complete_log.lock().unwrap().push("complete".into()),
    ));

    assert_eq!(
      *log.lock().unwrap(),
      vec!["next:a", "next:bb", "next:ccc", "complete"]
    );
  }

  #[test]
  fn empty_collection_just_completes() {
    let completed = Arc::new(Mutex::new(0));
    let complete_count = completed.clone();

    sequence::of(Vec::<i32>::new()).subscribe(FnSink::new(
      |_: i32| panic!("nothing to emit"),
      |_: Fault| panic!("of never errors"),
      move || *complete_count.lock().unwrap() += 1,
    ));

    assert_eq!(*completed.lock().unwrap(), 1);
  }

  #[test]
  fn clone_replays_from_the_start() {
    let sum = Arc::new(Mutex::new(0));
    let seq = sequence::of(1..=3);

    for _ in 0..2 {
      let sink_sum = sum.clone();
      seq
        .clone()
        .subscribe(FnSink::from_next(move |v: i32| *sink_sum.lock().unwrap() += v));
    }

    assert_eq!(*sum.lock().unwrap(), 12);
  }
}
