//! Search domain module
//!
//! Find & replace over board item text.
//!
//! # Architecture
//!
//! - **Entities**: [`SearchOptions`], [`SearchReport`], [`ReplaceOutcome`]
//! - **Pattern**: [`SearchPattern`] compiled once per operation
//! - **Service**: [`SearchService`] for matching, replacement, and navigation
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use boardsweep_core::board::{InMemoryBoard, Item, ItemKind};
//! use boardsweep_core::search::{SearchOptions, SearchService};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> boardsweep_core::Result<()> {
//! let board = Arc::new(InMemoryBoard::with_items(vec![
//!     Item::new("n1", ItemKind::StickyNote).with_content("<p>ship it</p>"),
//! ]));
//! let service = SearchService::new(board);
//!
//! let report = service.preview("ship", &SearchOptions::new()).await?;
//! assert_eq!(report.total_matches, 1);
//!
//! let outcome = service.replace_all("ship", "send", &SearchOptions::new()).await?;
//! assert_eq!(outcome.items_touched, 1);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod pattern;
pub mod service;

// Re-export main types
pub use entity::{
    ItemMatch, NavigationStatus, ReplaceOutcome, SearchOptions, SearchReport, SearchScope,
};
pub use pattern::SearchPattern;
pub use service::SearchService;
