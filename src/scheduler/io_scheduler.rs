use std::sync::mpsc::{channel, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::scheduler::{Scheduler, Task};

/// How long a worker parks on its channel before retiring.
const KEEP_ALIVE: Duration = Duration::from_secs(60);

/// Scheduler that grows workers on demand, for I/O-bound work.
///
/// A task goes to a parked idle worker when one exists; otherwise a new
/// worker thread is spawned for it. After finishing a task a worker parks
/// itself on a fresh one-shot channel and retires if nothing arrives within
/// the keep-alive window, so the pool shrinks back when load drops.
///
/// Cloning is cheap and shares the worker set.
#[derive(Clone)]
pub struct IoScheduler {
  idle: Arc<Mutex<Vec<Sender<Task>>>>,
}

impl IoScheduler {
  pub fn new() -> Self { IoScheduler { idle: Arc::new(Mutex::new(Vec::new())) } }
}

impl Default for IoScheduler {
  fn default() -> Self { Self::new() }
}

impl Scheduler for IoScheduler {
  fn execute(&self, task: Task) {
    let mut task = task;
    loop {
      let parked = self.idle.lock().unwrap().pop();
      match parked {
        Some(worker) => match worker.send(task) {
          Ok(()) => return,
          // The worker retired between parking and now; its channel hands
          // the task back, try the next one.
          Err(returned) => task = returned.0,
        },
        None => return spawn_worker(self.idle.clone(), task),
      }
    }
  }
}

fn spawn_worker(idle: Arc<Mutex<Vec<Sender<Task>>>>, first: Task) {
  thread::Builder::new()
    .name("sequent-io".into())
    .spawn(move || {
      let mut task = first;
      loop {
        task();
        let (sender, receiver) = channel();
        idle.lock().unwrap().push(sender);
        match receiver.recv_timeout(KEEP_ALIVE) {
          Ok(next) => task = next,
          Err(_) => break,
        }
      }
    })
    .expect("spawn io worker thread failed.");
}
