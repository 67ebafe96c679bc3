//! Scheduler abstraction and the worker-pool implementations backing the
//! context-switch operators.

use std::sync::Arc;

mod compute_scheduler;
mod io_scheduler;
mod single_thread_scheduler;

pub use compute_scheduler::ComputeScheduler;
pub use io_scheduler::IoScheduler;
pub use single_thread_scheduler::SingleThreadScheduler;

/// A unit of work handed to a scheduler.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A Scheduler accepts tasks and runs them asynchronously on its workers.
///
/// Submission is fire-and-forget: no return value, no fault channel back to
/// the caller, and no way to cancel an accepted task. What a panicking task
/// does to the pool is the pool's own business and never reaches the
/// pipeline. Implementations must accept concurrent submissions from
/// multiple threads.
pub trait Scheduler {
  fn execute(&self, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
  #[inline]
  fn execute(&self, task: Task) { (**self).execute(task) }
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
  #[inline]
  fn execute(&self, task: Task) { (**self).execute(task) }
}

/// Returns a scheduler with a fixed pool of workers, one per unit of
/// available parallelism. Intended for CPU-bound work.
pub fn compute() -> ComputeScheduler { ComputeScheduler::new() }

/// Returns a scheduler that grows workers on demand and reclaims idle ones.
/// Intended for I/O-bound work.
pub fn io() -> IoScheduler { IoScheduler::new() }

/// Returns a scheduler with exactly one worker executing tasks in FIFO
/// order. Intended for ordering-sensitive consumers.
pub fn single_thread() -> SingleThreadScheduler { SingleThreadScheduler::new() }
