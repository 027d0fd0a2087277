//! Board module
//!
//! Item model and the external board platform boundary.
//!
//! # Architecture
//!
//! - **Entities**: [`Item`], [`ItemKind`], [`Bounds`]
//! - **Platform**: [`BoardPlatform`] trait over the external board's item API
//! - **Memory**: [`InMemoryBoard`] in-process implementation for tests and
//!   detached snapshots

pub mod entity;
pub mod memory;
pub mod platform;

// Re-export main types
pub use entity::{Bounds, Item, ItemKind};
pub use memory::InMemoryBoard;
pub use platform::BoardPlatform;
