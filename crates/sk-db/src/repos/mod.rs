//! Repository modules for the content store.
//!
//! Each module adds methods to `StoreService` via `impl StoreService` blocks.

pub mod logs;
pub mod terms;
