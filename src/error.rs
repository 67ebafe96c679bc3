//! Fault payload carried by `error` notifications.

/// The payload of an `error` notification.
///
/// Producers raise a fault by calling [`Emitter::error`] with any error
/// value; operator closures raise one by returning `Err`. The alias accepts
/// every `std::error::Error` type and converts from `&str`/`String`, so
/// ad-hoc faults can be built with `"boom".into()`.
///
/// [`Emitter::error`]: crate::sequence::Emitter::error
pub type Fault = Box<dyn std::error::Error + Send + Sync>;
