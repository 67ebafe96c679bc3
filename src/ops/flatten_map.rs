use std::marker::PhantomData;

use crate::error::Fault;
use crate::sequence::Sequence;
use crate::sink::{SharedSink, Sink};

/// Maps each value to an inner sequence and merges the inner values into one
/// flat output sequence.
///
/// The downstream sink is shared between the outer subscription and every
/// inner one, so inner values and faults reach it directly. Inner
/// completions are discarded; only the outer completion completes the
/// downstream. No accounting ties outer completion to the inner sequences,
/// so an asynchronous inner sequence may still be delivering after the
/// downstream saw `complete`.
///
/// This struct is created by [`Sequence::flatten_map`].
#[derive(Clone)]
pub struct FlattenMapOp<S, F, Inner> {
  pub(crate) source: S,
  pub(crate) mapper: F,
  pub(crate) _marker: PhantomData<Inner>,
}

impl<S, F, Inner> Sequence for FlattenMapOp<S, F, Inner>
where
  S: Sequence,
  Inner: Sequence,
  F: FnMut(S::Item) -> Result<Inner, Fault> + Send + 'static,
{
  type Item = Inner::Item;
  type Unsub = S::Unsub;

  fn subscribe<O>(self, sink: O) -> Self::Unsub
  where
    O: Sink<Inner::Item> + Send + 'static,
  {
    self.source.subscribe(FlattenMapSink {
      sink: SharedSink::new(sink),
      mapper: self.mapper,
    })
  }
}

pub struct FlattenMapSink<O, F> {
  sink: SharedSink<O>,
  mapper: F,
}

impl<Item, O, F, Inner> Sink<Item> for FlattenMapSink<O, F>
where
  Inner: Sequence,
  O: Sink<Inner::Item> + Send + 'static,
  F: FnMut(Item) -> Result<Inner, Fault>,
{
  fn next(&mut self, item: Item) {
    match (self.mapper)(item) {
      Ok(inner) => {
        // The inner disposable is dropped: disposing the outer subscription
        // does not reach into inner ones already started.
        let _ = inner.subscribe(InnerSink { sink: self.sink.clone() });
      }
      Err(fault) => self.sink.error(fault),
    }
  }

  #[inline]
  fn error(&mut self, fault: Fault) { self.sink.error(fault) }

  #[inline]
  fn complete(&mut self) { self.sink.complete() }
}

pub struct InnerSink<O> {
  sink: SharedSink<O>,
}

impl<Item, O> Sink<Item> for InnerSink<O>
where
  O: Sink<Item>,
{
  #[inline]
  fn next(&mut self, item: Item) { self.sink.next(item) }

  #[inline]
  fn error(&mut self, fault: Fault) { self.sink.error(fault) }

  /// Inner completion is swallowed; only the outer sequence completes the
  /// downstream sink.
  #[inline]
  fn complete(&mut self) {}
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};
  use std::thread;
  use std::time::Duration;

  use crate::prelude::*;

  #[test]
  fn flattens_inner_values_in_order() {
    let out = Arc::new(Mutex::new(Vec::new()));
    let sink_out = out.clone();

    sequence::of([1, 2])
      .flatten_map(|v| Ok(sequence::of([v * 10, v * 10 + 1])))
      .subscribe(FnSink::from_next(move |v: i32| sink_out.lock().unwrap().push(v)));

    assert_eq!(*out.lock().unwrap(), vec![10, 11, 20, 21]);
  }

  #[test]
  fn inner_completions_are_discarded() {
    let completes = Arc::new(Mutex::new(0));
    let complete_count = completes.clone();

    sequence::of(0..3)
      .flatten_map(|v| Ok(sequence::of([v])))
      .subscribe(FnSink::new(
        |_: i32| {},
        |_: Fault| panic!("no fault expected"),
        move || *complete_count.lock().unwrap() += 1,
      ));

    assert_eq!(*completes.lock().unwrap(), 1);
  }

  #[test]
  fn mapper_fault_becomes_error() {
    let errors = Arc::new(Mutex::new(Vec::new()));
    let error_log = errors.clone();

    sequence::of(0..2)
      .flatten_map(|v| {
        if v == 0 {
          Err("no inner sequence".into())
        } else {
          Ok(sequence::of([v]))
        }
      })
      .subscribe(FnSink::new(
        |_: i32| {},
        move |f: Fault| error_log.lock().unwrap().push(f.to_string()),
        || {},
      ));

    assert_eq!(*errors.lock().unwrap(), vec!["no inner sequence"]);
  }

  #[test]
  fn inner_error_reaches_the_downstream_sink() {
    let errors = Arc::new(Mutex::new(Vec::new()));
    let error_log = errors.clone();

    sequence::of(0..1)
      .flatten_map(|_| {
        Ok(sequence::create(|emitter: &mut Emitter<i32>| {
          emitter.error("inner fault".into());
        }))
      })
      .subscribe(FnSink::new(
        |_: i32| {},
        move |f: Fault| error_log.lock().unwrap().push(f.to_string()),
        || {},
      ));

    assert_eq!(*errors.lock().unwrap(), vec!["inner fault"]);
  }

  #[test]
  fn outer_completion_may_overtake_scheduled_inner_values() {
    let log = Arc::new(Mutex::new(vec![]));
    let next_log = log.clone();
    let complete_log = log.clone();
    let io = scheduler::io();

    sequence::of([1, 2])
      .flatten_map(move |v| {
        let inner = sequence::create(move |emitter: &mut Emitter<i32>| {
          thread::sleep(Duration::from_millis(30));
          emitter.next(v);
          emitter.complete();
        });
        Ok(inner.on_subscribe_context(io.clone()))
      })
      .subscribe(FnSink::new(
        move |v: i32| next_log.lock().unwrap().push(format!("next:{v}")),
        |_: Fault| panic!("no fault expected"),
        move || complete_log.lock().unwrap().push("complete".into()),
      ));

    for _ in 0..200 {
      if log.lock().unwrap().len() == 3 {
        break;
      }
      thread::sleep(Duration::from_millis(5));
    }

    // The outer sequence completed while the inner ones were still pending
    // on the scheduler; both values arrive only afterwards.
    let log = log.lock().unwrap();
    assert_eq!(log[0], "complete");
    let mut values: Vec<_> = log[1..].to_vec();
    values.sort();
    assert_eq!(values, vec!["next:1", "next:2"]);
  }
}
