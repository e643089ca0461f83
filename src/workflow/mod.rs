//! Single-writer orchestration around the progression engine
//!
//! The engine is pure; this module owns the load, transition, store cycle
//! and guarantees that only one transition per order item runs at a time.

mod locks;
mod service;

pub use locks::{ItemGuard, ItemLocks};
pub use service::ProgressionService;
