//! In-memory board implementation
//!
//! A self-contained [`BoardPlatform`] used by the test suite and by hosts
//! that want to run the engine against a detached snapshot of board items.
//! Persistence failures can be injected per item to exercise the
//! partial-batch semantics of replace-all.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Error, Result};

use super::entity::{Bounds, Item};
use super::platform::BoardPlatform;

/// In-memory implementation of the board platform
#[derive(Default)]
pub struct InMemoryBoard {
    items: RwLock<Vec<Item>>,
    selected: RwLock<Vec<String>>,
    viewport: RwLock<Option<(Bounds, f64)>>,
    synced: RwLock<Vec<String>>,
    failing_sync: RwLock<HashSet<String>>,
}

impl InMemoryBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board pre-populated with items
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
            ..Self::default()
        }
    }

    /// Add an item to the board
    pub async fn insert(&self, item: Item) {
        self.items.write().await.push(item);
    }

    /// Mark the given item ids as the current user selection
    pub async fn set_selection(&self, ids: &[&str]) {
        *self.selected.write().await = ids.iter().map(|id| (*id).to_string()).collect();
    }

    /// Make `sync_item` fail for the given item id
    pub async fn fail_sync_for(&self, id: &str) {
        self.failing_sync.write().await.insert(id.to_string());
    }

    /// Fetch a single item by id, if present
    pub async fn item(&self, id: &str) -> Option<Item> {
        self.items.read().await.iter().find(|i| i.id == id).cloned()
    }

    /// Ids of the current selection, in selection order
    pub async fn selection(&self) -> Vec<String> {
        self.selected.read().await.clone()
    }

    /// Last viewport move requested via `zoom_to`
    pub async fn viewport(&self) -> Option<(Bounds, f64)> {
        *self.viewport.read().await
    }

    /// Ids of items persisted so far, in sync order
    pub async fn synced_ids(&self) -> Vec<String> {
        self.synced.read().await.clone()
    }
}

#[async_trait]
impl BoardPlatform for InMemoryBoard {
    async fn list_all(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn list_selected(&self) -> Result<Vec<Item>> {
        let selected = self.selected.read().await;
        let items = self.items.read().await;
        Ok(selected
            .iter()
            .filter_map(|id| items.iter().find(|i| &i.id == id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Item>> {
        Ok(self.item(id).await)
    }

    async fn select(&self, ids: &[String]) -> Result<()> {
        *self.selected.write().await = ids.to_vec();
        Ok(())
    }

    async fn zoom_to(&self, bounds: &Bounds, margin: f64) -> Result<()> {
        *self.viewport.write().await = Some((*bounds, margin));
        Ok(())
    }

    async fn sync_item(&self, item: &Item) -> Result<()> {
        if self.failing_sync.read().await.contains(&item.id) {
            return Err(Error::Persistence {
                item_id: item.id.clone(),
                message: "injected sync failure".to_string(),
            });
        }

        let mut items = self.items.write().await;
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item.clone(),
            None => {
                return Err(Error::Persistence {
                    item_id: item.id.clone(),
                    message: "item no longer exists on the board".to_string(),
                });
            }
        }
        drop(items);

        self.synced.write().await.push(item.id.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::entity::ItemKind;

    #[tokio::test]
    async fn test_selection_preserves_order_and_drops_unknown_ids() {
        let board = InMemoryBoard::with_items(vec![
            Item::new("a", ItemKind::Text).with_content("<p>one</p>"),
            Item::new("b", ItemKind::StickyNote).with_content("<p>two</p>"),
        ]);
        board.set_selection(&["b", "missing", "a"]).await;

        let selected = board.list_selected().await.unwrap();
        let ids: Vec<_> = selected.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_sync_writes_back_and_records_order() {
        let board = InMemoryBoard::with_items(vec![
            Item::new("a", ItemKind::Text).with_content("<p>one</p>"),
        ]);

        let updated = Item::new("a", ItemKind::Text).with_content("<p>uno</p>");
        board.sync_item(&updated).await.unwrap();

        assert_eq!(
            board.item("a").await.unwrap().content.as_deref(),
            Some("<p>uno</p>")
        );
        assert_eq!(board.synced_ids().await, vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_injected_sync_failure() {
        let board = InMemoryBoard::with_items(vec![
            Item::new("a", ItemKind::Text).with_content("<p>one</p>"),
        ]);
        board.fail_sync_for("a").await;

        let err = board
            .sync_item(&Item::new("a", ItemKind::Text))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Persistence { .. }));
        assert!(board.synced_ids().await.is_empty());
    }

    #[tokio::test]
    async fn test_sync_unknown_item_fails() {
        let board = InMemoryBoard::new();
        let err = board
            .sync_item(&Item::new("ghost", ItemKind::Text))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Persistence { .. }));
    }
}
