use std::num::NonZeroUsize;
use std::thread;

use futures::executor::ThreadPool;
use futures::future;

use crate::scheduler::{Scheduler, Task};

/// Scheduler over a fixed-size worker pool for CPU-bound work.
///
/// The pool holds one worker per unit of available parallelism and queues
/// further tasks. Tasks submitted together may run in parallel and therefore
/// out of submission order.
///
/// Cloning is cheap and shares the pool.
#[derive(Clone)]
pub struct ComputeScheduler {
  pool: ThreadPool,
}

impl ComputeScheduler {
  pub fn new() -> Self {
    let workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    let pool = ThreadPool::builder()
      .pool_size(workers)
      .name_prefix("sequent-compute-")
      .create()
      .expect("create compute thread pool failed.");
    ComputeScheduler { pool }
  }
}

impl Default for ComputeScheduler {
  fn default() -> Self { Self::new() }
}

impl Scheduler for ComputeScheduler {
  fn execute(&self, task: Task) {
    self.pool.spawn_ok(future::lazy(move |_| task()));
  }
}
