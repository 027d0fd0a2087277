//! Search service orchestrating find & replace over board items
//!
//! Handles target resolution, per-item matching, replacement with sequential
//! persistence, and best-effort jump-to-result navigation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::board::{BoardPlatform, Item, ItemKind};
use crate::error::{Error, Result};
use crate::markup::{MarkupRenderer, TagMarkup};

use super::entity::{
    ItemMatch, NavigationStatus, ReplaceOutcome, SearchOptions, SearchReport, SearchScope,
};
use super::pattern::SearchPattern;

/// Leading slice of extracted text shown per preview row
const SAMPLE_LEN: usize = 140;

/// Viewport padding, in board units, when jumping to a result
const ZOOM_MARGIN: f64 = 64.0;

/// Service for searching and replacing text across board items
///
/// Holds no state across operations; every call re-resolves its targets from
/// the platform. Callers are expected not to overlap operations from the same
/// interaction surface.
#[derive(Clone)]
pub struct SearchService {
    board: Arc<dyn BoardPlatform>,
    markup: Arc<dyn MarkupRenderer>,
}

impl SearchService {
    /// Create a service over the given board with the stock markup renderer
    pub fn new(board: Arc<dyn BoardPlatform>) -> Self {
        Self {
            board,
            markup: Arc::new(TagMarkup),
        }
    }

    /// Create a service with an injected markup renderer
    pub fn with_markup(board: Arc<dyn BoardPlatform>, markup: Arc<dyn MarkupRenderer>) -> Self {
        Self { board, markup }
    }

    /// Count matches per item without modifying anything
    ///
    /// Items with zero matches are excluded from the report. Each row carries
    /// the leading slice of the item's extracted text for human review.
    pub async fn preview(&self, search_text: &str, options: &SearchOptions) -> Result<SearchReport> {
        if search_text.is_empty() {
            return Err(Error::EmptySearch);
        }
        let pattern = SearchPattern::compile(search_text, options)?;
        let targets = self.resolve_targets(options).await?;

        let mut report = SearchReport::default();
        for item in &targets {
            let extracted = self.extract(item, options.preserve_markup);
            let count = pattern.count_matches(&extracted);
            if count == 0 {
                continue;
            }
            report.total_matches += count;
            report.matches.push(ItemMatch {
                item_id: item.id.clone(),
                kind: item.kind,
                count,
                sample: extracted.chars().take(SAMPLE_LEN).collect(),
            });
        }
        report.matched_items = report.matches.len();

        info!(
            total = report.total_matches,
            items = report.matched_items,
            "search preview complete"
        );
        Ok(report)
    }

    /// Replace every match in every target item
    ///
    /// Items are processed in resolved order; each changed item is persisted
    /// and awaited before the next one is modified. A persistence failure
    /// propagates immediately and halts the remaining batch — items already
    /// persisted stay changed.
    pub async fn replace_all(
        &self,
        search_text: &str,
        replacement: &str,
        options: &SearchOptions,
    ) -> Result<ReplaceOutcome> {
        if search_text.is_empty() {
            return Err(Error::EmptySearch);
        }
        let pattern = SearchPattern::compile(search_text, options)?;
        let targets = self.resolve_targets(options).await?;

        let mut outcome = ReplaceOutcome::default();
        for mut item in targets {
            let replaced = self.apply_to_item(&mut item, &pattern, replacement, options);
            if replaced == 0 {
                continue;
            }
            self.board.sync_item(&item).await?;
            outcome.total_replacements += replaced;
            outcome.items_touched += 1;
        }

        info!(
            replacements = outcome.total_replacements,
            touched = outcome.items_touched,
            "replace-all complete"
        );
        Ok(outcome)
    }

    /// Select an item and bring it into view, best-effort
    ///
    /// Navigation is non-critical: lookup misses and platform refusals are
    /// logged and reported as a status instead of an error.
    pub async fn jump_to(&self, item_id: &str) -> NavigationStatus {
        let item = match self.board.find_by_id(item_id).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                debug!(item_id, "jump target no longer on the board");
                return NavigationStatus::NotFound;
            }
            Err(err) => {
                warn!(item_id, error = %err, "jump target lookup failed");
                return NavigationStatus::NotFound;
            }
        };

        if let Err(err) = self.board.select(std::slice::from_ref(&item.id)).await {
            warn!(item_id, error = %err, "could not select jump target");
            return NavigationStatus::NotFound;
        }
        if let Some(bounds) = item.bounds {
            if let Err(err) = self.board.zoom_to(&bounds, ZOOM_MARGIN).await {
                warn!(item_id, error = %err, "could not zoom to jump target");
                return NavigationStatus::NotFound;
            }
        }

        NavigationStatus::Focused
    }

    /// Resolve the item set one operation runs over
    ///
    /// Scope picks the source, the kind filter narrows it, and unsupported
    /// kinds are dropped before any matching logic sees them.
    pub async fn resolve_targets(&self, options: &SearchOptions) -> Result<Vec<Item>> {
        let items = match options.scope {
            SearchScope::Selection => self.board.list_selected().await?,
            SearchScope::WholeBoard => self.board.list_all().await?,
        };
        let total = items.len();

        let targets: Vec<Item> = items
            .into_iter()
            .filter(|item| item.is_supported())
            .filter(|item| options.kind_filter.is_none_or(|kind| item.kind == kind))
            .collect();

        debug!(
            scope = ?options.scope,
            fetched = total,
            targets = targets.len(),
            "resolved search targets"
        );
        Ok(targets)
    }

    /// Extract the searchable text of an item
    ///
    /// Markup-bearing items yield raw markup or the renderer's plain text,
    /// depending on `preserve_markup`. Cards always yield plain
    /// title-newline-description. Unsupported items yield nothing.
    pub fn extract(&self, item: &Item, preserve_markup: bool) -> String {
        match item.kind {
            ItemKind::Text | ItemKind::StickyNote | ItemKind::Shape => {
                let content = item.content.as_deref().unwrap_or("");
                if preserve_markup {
                    content.to_string()
                } else {
                    self.markup.to_plain_text(content)
                }
            }
            ItemKind::Card => {
                format!(
                    "{}\n{}",
                    item.title.as_deref().unwrap_or(""),
                    item.description.as_deref().unwrap_or("")
                )
            }
            ItemKind::Other => String::new(),
        }
    }

    /// Substitute inside one item, returning the replacement count
    ///
    /// Returns 0 when nothing textually changed; in that case the item is
    /// left untouched and must not be persisted. Counting runs against the
    /// pre-replacement extracted text.
    fn apply_to_item(
        &self,
        item: &mut Item,
        pattern: &SearchPattern,
        replacement: &str,
        options: &SearchOptions,
    ) -> usize {
        match item.kind {
            ItemKind::Text | ItemKind::StickyNote | ItemKind::Shape => {
                let content = item.content.as_deref().unwrap_or("");
                if options.preserve_markup {
                    // Substituting in raw markup can rewrite matches inside
                    // tag attributes as well; inherited panel behavior.
                    let after = pattern.replace_all(content, replacement);
                    if after == content {
                        return 0;
                    }
                    let count = pattern.count_matches(content);
                    item.content = Some(after);
                    count
                } else {
                    let plain = self.markup.to_plain_text(content);
                    let after = pattern.replace_all(&plain, replacement);
                    if after == plain {
                        return 0;
                    }
                    let count = pattern.count_matches(&plain);
                    item.content = Some(self.markup.wrap_plain_text(&after));
                    count
                }
            }
            ItemKind::Card => {
                let mut count = 0;
                for field in [&mut item.title, &mut item.description] {
                    let Some(text) = field.as_deref() else {
                        continue;
                    };
                    let after = pattern.replace_all(text, replacement);
                    if after != *text {
                        count += pattern.count_matches(text);
                        *field = Some(after);
                    }
                }
                count
            }
            ItemKind::Other => 0,
        }
    }
}
