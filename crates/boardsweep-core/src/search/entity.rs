//! Search entities and related types
//!
//! Value types crossing the boundary between the presentation layer and the
//! find & replace engine: options in, match reports and replace outcomes out.

use serde::{Deserialize, Serialize};

use crate::board::ItemKind;

/// Whether an operation targets the whole board or the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Every item on the board (may be large)
    #[default]
    WholeBoard,
    /// Only the items in the user's current selection
    Selection,
}

/// Options for one search or replace invocation
///
/// Constructed fresh from UI state for every operation; the engine keeps no
/// search state across calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Match case exactly (default: case-insensitive)
    pub case_sensitive: bool,

    /// Anchor the pattern at word boundaries on both sides
    pub whole_word: bool,

    /// Treat the search text as a regular expression instead of a literal
    pub use_regex: bool,

    /// Match and substitute inside raw markup instead of stripped plain text
    pub preserve_markup: bool,

    /// Whole board or current selection
    pub scope: SearchScope,

    /// Restrict targets to a single item kind
    pub kind_filter: Option<ItemKind>,
}

impl SearchOptions {
    /// Create options with all flags off and whole-board scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable case-sensitive matching
    pub fn case_sensitive(mut self) -> Self {
        self.case_sensitive = true;
        self
    }

    /// Enable whole-word matching
    pub fn whole_word(mut self) -> Self {
        self.whole_word = true;
        self
    }

    /// Interpret the search text as a regular expression
    pub fn use_regex(mut self) -> Self {
        self.use_regex = true;
        self
    }

    /// Operate on raw markup instead of stripped plain text
    pub fn preserve_markup(mut self) -> Self {
        self.preserve_markup = true;
        self
    }

    /// Set the search scope
    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    /// Restrict targets to one item kind
    pub fn with_kind_filter(mut self, kind: ItemKind) -> Self {
        self.kind_filter = Some(kind);
        self
    }
}

/// Per-item match row produced by a preview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemMatch {
    /// Id of the matching item
    pub item_id: String,

    /// Kind of the matching item
    pub kind: ItemKind,

    /// Number of non-overlapping matches in the item's extracted text
    pub count: usize,

    /// Leading slice of the extracted text, for human review only
    pub sample: String,
}

/// Aggregate result of one preview operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchReport {
    /// Items with at least one match, in resolved order
    pub matches: Vec<ItemMatch>,

    /// Sum of match counts across all matching items
    pub total_matches: usize,

    /// Number of items with at least one match
    pub matched_items: usize,
}

/// Summary of one replace-all operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceOutcome {
    /// Sum of substitutions over all items and fields
    pub total_replacements: usize,

    /// Number of items whose content actually changed and was persisted
    pub items_touched: usize,
}

/// Result of a best-effort jump to a search result
///
/// Navigation never fails the caller; lookup misses and platform errors all
/// collapse into [`NotFound`](NavigationStatus::NotFound).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationStatus {
    /// The item was selected and brought into view
    Focused,
    /// The item no longer exists or the platform refused to navigate
    NotFound,
}
