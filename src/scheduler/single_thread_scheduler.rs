use std::sync::mpsc::{channel, Sender};
use std::thread;

use crate::scheduler::{Scheduler, Task};

/// Scheduler with exactly one worker, for ordering-sensitive consumers.
///
/// All tasks are queued onto a single dedicated thread and executed strictly
/// in submission order. This is the only scheduler in the crate that keeps
/// per-notification tasks in order under `on_notify_context`.
///
/// Cloning is cheap and shares the worker. The worker exits once every
/// handle has been dropped and its queue is drained.
#[derive(Clone)]
pub struct SingleThreadScheduler {
  sender: Sender<Task>,
}

impl SingleThreadScheduler {
  pub fn new() -> Self {
    let (sender, receiver) = channel::<Task>();
    thread::Builder::new()
      .name("sequent-single".into())
      .spawn(move || {
        while let Ok(task) = receiver.recv() {
          task();
        }
      })
      .expect("spawn single worker thread failed.");
    SingleThreadScheduler { sender }
  }
}

impl Default for SingleThreadScheduler {
  fn default() -> Self { Self::new() }
}

impl Scheduler for SingleThreadScheduler {
  fn execute(&self, task: Task) {
    // A task submitted after the worker is gone is dropped silently;
    // submission never reports faults to the caller.
    let _ = self.sender.send(task);
  }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};
  use std::thread;
  use std::time::Duration;

  use super::*;

  #[test]
  fn tasks_run_in_submission_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let scheduler = SingleThreadScheduler::new();

    for i in 0..20 {
      let task_order = order.clone();
      scheduler.execute(Box::new(move || task_order.lock().unwrap().push(i)));
    }

    for _ in 0..400 {
      if order.lock().unwrap().len() == 20 {
        break;
      }
      thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(*order.lock().unwrap(), (0..20).collect::<Vec<_>>());
  }

  #[test]
  fn every_task_runs_on_the_same_worker() {
    let threads = Arc::new(Mutex::new(Vec::new()));
    let scheduler = SingleThreadScheduler::new();

    for _ in 0..3 {
      let task_threads = threads.clone();
      scheduler.execute(Box::new(move || {
        task_threads.lock().unwrap().push(thread::current().id());
      }));
    }

    for _ in 0..400 {
      if threads.lock().unwrap().len() == 3 {
        break;
      }
      thread::sleep(Duration::from_millis(5));
    }

    let threads = threads.lock().unwrap();
    assert_eq!(threads.len(), 3);
    assert_eq!(threads[0], threads[1]);
    assert_eq!(threads[1], threads[2]);
    assert_ne!(threads[0], thread::current().id());
  }
}
