//! Board item entities
//!
//! Defines the slice of the board platform's item model that find & replace
//! reads and rewrites. Items are owned and persisted by the platform; this
//! module only carries their text-bearing fields across the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of board items the engine understands
///
/// The platform tags items with free-form type strings; this closed enum
/// replaces string comparison with exhaustive dispatch. Anything the engine
/// cannot search maps to `Other` and is filtered out before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Free-standing text box (markup content)
    Text,
    /// Sticky note (markup content)
    StickyNote,
    /// Shape with a text label (markup content)
    Shape,
    /// Card with plain-text title and description
    Card,
    /// Any item type the engine does not search
    Other,
}

impl ItemKind {
    /// Convert to the platform's type tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::StickyNote => "sticky_note",
            Self::Shape => "shape",
            Self::Card => "card",
            Self::Other => "other",
        }
    }

    /// Create from a platform type tag; unknown tags become `Other`
    pub fn from_type_tag(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "sticky_note" => Self::StickyNote,
            "shape" => Self::Shape,
            "card" => Self::Card,
            _ => Self::Other,
        }
    }

    /// Whether items of this kind carry searchable text
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Whether items of this kind hold a single markup `content` field
    pub fn has_markup_content(&self) -> bool {
        matches!(self, Self::Text | Self::StickyNote | Self::Shape)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Axis-aligned bounding box of an item on the board
///
/// Only used for the optional jump-to-result zoom; coordinates are in the
/// platform's board space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A board item as consumed by the find & replace engine
///
/// Text/sticky/shape items expose `content` (markup); cards expose plain-text
/// `title` and `description`. Fields an item does not have are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Platform-assigned item identifier
    pub id: String,

    /// Item kind, derived from the platform's type tag
    pub kind: ItemKind,

    /// Markup content (text, sticky note, shape)
    pub content: Option<String>,

    /// Plain-text title (card)
    pub title: Option<String>,

    /// Plain-text description (card)
    pub description: Option<String>,

    /// Position on the board, if the platform reported one
    pub bounds: Option<Bounds>,
}

impl Item {
    /// Create an item with no text fields set
    pub fn new(id: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            kind,
            content: None,
            title: None,
            description: None,
            bounds: None,
        }
    }

    /// Set the markup content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the card title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the card description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the board-space bounds
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Whether the engine can search this item at all
    pub fn is_supported(&self) -> bool {
        self.kind.is_supported()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tag_round_trip() {
        for kind in [
            ItemKind::Text,
            ItemKind::StickyNote,
            ItemKind::Shape,
            ItemKind::Card,
        ] {
            assert_eq!(ItemKind::from_type_tag(kind.as_str()), kind);
            assert!(kind.is_supported());
        }
    }

    #[test]
    fn test_unknown_tag_maps_to_other() {
        assert_eq!(ItemKind::from_type_tag("frame"), ItemKind::Other);
        assert_eq!(ItemKind::from_type_tag("connector"), ItemKind::Other);
        assert!(!ItemKind::Other.is_supported());
    }

    #[test]
    fn test_markup_content_kinds() {
        assert!(ItemKind::Text.has_markup_content());
        assert!(ItemKind::StickyNote.has_markup_content());
        assert!(ItemKind::Shape.has_markup_content());
        assert!(!ItemKind::Card.has_markup_content());
        assert!(!ItemKind::Other.has_markup_content());
    }

    #[test]
    fn test_kind_serializes_as_platform_tag() {
        let json = serde_json::to_string(&ItemKind::StickyNote).unwrap();
        assert_eq!(json, "\"sticky_note\"");
    }

    #[test]
    fn test_item_builder() {
        let item = Item::new("c1", ItemKind::Card)
            .with_title("Roadmap")
            .with_description("Q3 goals");
        assert_eq!(item.kind, ItemKind::Card);
        assert_eq!(item.title.as_deref(), Some("Roadmap"));
        assert!(item.content.is_none());
    }
}
