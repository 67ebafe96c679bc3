//! Prelude module for convenient imports
//!
//! This module re-exports the whole public surface for easy access.

pub use crate::disposable::{Disposable, NopDisposable};
pub use crate::error::Fault;
pub use crate::ops::{
  FilterWithOp, FlattenMapOp, NotifyContextOp, SubscribeContextOp, TransformOp,
};
pub use crate::scheduler::{
  self, ComputeScheduler, IoScheduler, Scheduler, SingleThreadScheduler, Task,
};
pub use crate::sequence::{
  self, create, of, Create, Emitter, EmitterHandle, OfSeq, Sequence,
};
pub use crate::sink::{FnSink, SharedSink, Sink};
