pub mod filter_with;
pub mod flatten_map;
pub mod notify_context;
pub mod subscribe_context;
pub mod transform;

pub use filter_with::FilterWithOp;
pub use flatten_map::FlattenMapOp;
pub use notify_context::NotifyContextOp;
pub use subscribe_context::SubscribeContextOp;
pub use transform::TransformOp;
