//! Reorder engine for ordered campus collections.
//!
//! Holds a working copy of a collection's serve order and computes index
//! assignments from user-driven moves, without touching persistence. The
//! backend contract is "replace all indices": [`WorkingOrder::diff`] emits
//! the full id-to-index snapshot, a single idempotent command that is safe
//! to retry wholesale.

pub mod engine;
pub mod snapshot;

pub use engine::WorkingOrder;
pub use snapshot::OrderSnapshot;
