//! Cancellation handles returned from `subscribe`.

/// Handle returned by `Sequence::subscribe` to allow cancelling a live
/// subscription.
///
/// Disposal is cooperative and best-effort: it only gates notifications the
/// emitter is asked to forward afterwards. It does not interrupt a producer
/// that is already running, nor recall tasks already handed to a scheduler.
pub trait Disposable {
  /// Stop the subscription from delivering further notifications.
  ///
  /// Idempotent; a second call is a silent no-op.
  fn dispose(&mut self);

  /// Whether `dispose` has been called.
  fn is_disposed(&self) -> bool;
}

/// Placeholder disposable for subscriptions that cannot be cancelled.
///
/// `on_subscribe_context` hands the real subscription to a scheduler and has
/// nothing to offer the caller, so it returns this: `dispose` does nothing
/// and `is_disposed` always reports `false`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NopDisposable;

impl Disposable for NopDisposable {
  #[inline]
  fn dispose(&mut self) {}

  #[inline]
  fn is_disposed(&self) -> bool { false }
}
