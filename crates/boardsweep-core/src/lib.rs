//! Boardsweep Core Library
//!
//! This crate provides the core functionality for Boardsweep, including:
//! - Pattern compilation from user search input (literal, whole-word, regex)
//! - Content extraction from board items (markup stripping, card fields)
//! - Match preview with per-item counts and samples
//! - Replace-all with sequential per-item persistence
//! - Scope and item-kind target resolution
//! - Best-effort jump-to-result navigation
//!
//! The board itself is an external collaborator behind the
//! [`BoardPlatform`](board::BoardPlatform) trait; this crate never renders a
//! panel or persists anything of its own.

pub mod board;
pub mod error;
pub mod markup;
pub mod search;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::board::{BoardPlatform, Item, ItemKind};
    pub use crate::error::{Error, Result};
    pub use crate::search::{ReplaceOutcome, SearchOptions, SearchReport, SearchService};
}
