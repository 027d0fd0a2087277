//! Board platform trait
//!
//! This module defines the trait for the external board platform's item API.
//! The trait abstracts over whatever transport the host embeds the engine in
//! (browser SDK bridge, test double, etc.); the engine never talks to a
//! concrete platform directly.

use async_trait::async_trait;

use crate::error::Result;

use super::entity::{Bounds, Item};

/// Client trait for the external board platform
///
/// All calls are asynchronous and may fail with transport errors. The engine
/// holds no board state of its own; every operation re-fetches the items it
/// needs and hands changed items back through [`sync_item`].
///
/// [`sync_item`]: BoardPlatform::sync_item
#[async_trait]
pub trait BoardPlatform: Send + Sync {
    /// Fetch every item on the board (may be large)
    async fn list_all(&self) -> Result<Vec<Item>>;

    /// Fetch the items in the user's current selection
    async fn list_selected(&self) -> Result<Vec<Item>>;

    /// Look up a single item by id
    async fn find_by_id(&self, id: &str) -> Result<Option<Item>>;

    /// Replace the user's selection with the given item ids
    async fn select(&self, ids: &[String]) -> Result<()>;

    /// Move the viewport to the given bounds, padded by `margin`
    async fn zoom_to(&self, bounds: &Bounds, margin: f64) -> Result<()>;

    /// Persist a changed item back to the board
    ///
    /// Must be awaited before the next item is modified; a failure is
    /// surfaced as [`Error::Persistence`](crate::error::Error::Persistence)
    /// and halts the remaining batch.
    async fn sync_item(&self, item: &Item) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Verify trait is object-safe
    fn _assert_object_safe(_: &dyn BoardPlatform) {}
}
