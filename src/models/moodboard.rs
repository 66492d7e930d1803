//! Moodboard model
//!
//! A board collects inspiration images (often saved from an inspiration
//! search) plus a small colour palette.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{MoodboardId, MoodboardItemId};

/// An image pinned to a board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodboardItem {
    pub id: MoodboardItemId,

    pub image_url: String,

    #[serde(default)]
    pub source_url: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl MoodboardItem {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            id: MoodboardItemId::new(),
            image_url: image_url.into(),
            source_url: None,
            tags: Vec::new(),
            notes: None,
            created_at: Utc::now(),
        }
    }
}

/// A named collection of inspiration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Moodboard {
    pub id: MoodboardId,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub cover_image: Option<String>,

    /// `#RRGGBB` colours
    #[serde(default)]
    pub color_palette: Vec<String>,

    /// In the order they were pinned
    #[serde(default)]
    pub items: Vec<MoodboardItem>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Moodboard {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: MoodboardId::new(),
            name: name.into(),
            description: None,
            cover_image: None,
            color_palette: Vec::new(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Pin an item; the first image pinned becomes the cover when none is set
    pub fn add_item(&mut self, item: MoodboardItem) {
        if self.cover_image.is_none() {
            self.cover_image = Some(item.image_url.clone());
        }
        self.items.push(item);
        self.updated_at = Utc::now();
    }

    /// Remove an item, returning it if it was on the board
    pub fn remove_item(&mut self, identifier: &str) -> Option<MoodboardItem> {
        let pos = self.items.iter().position(|i| i.id.matches(identifier))?;
        let removed = self.items.remove(pos);
        if self.cover_image.as_deref() == Some(removed.image_url.as_str()) {
            self.cover_image = self.items.first().map(|i| i.image_url.clone());
        }
        self.updated_at = Utc::now();
        Some(removed)
    }

    /// Replace the palette, normalising colours to upper-case `#RRGGBB`
    pub fn set_palette(&mut self, colors: &[String]) -> Result<(), MoodboardValidationError> {
        let normalized = colors
            .iter()
            .map(|c| normalize_color(c))
            .collect::<Result<Vec<_>, _>>()?;
        self.color_palette = normalized;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn validate(&self) -> Result<(), MoodboardValidationError> {
        if self.name.trim().is_empty() {
            return Err(MoodboardValidationError::EmptyName);
        }

        for color in &self.color_palette {
            normalize_color(color)?;
        }

        if let Some(item) = self.items.iter().find(|i| i.image_url.trim().is_empty()) {
            return Err(MoodboardValidationError::EmptyImageUrl(item.id.to_string()));
        }

        Ok(())
    }
}

/// Accept `#abc123` or `abc123`, return `#ABC123`
pub fn normalize_color(color: &str) -> Result<String, MoodboardValidationError> {
    let hex = color.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(MoodboardValidationError::InvalidColor(color.to_string()));
    }
    Ok(format!("#{}", hex.to_ascii_uppercase()))
}

impl fmt::Display for Moodboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodboardValidationError {
    EmptyName,
    InvalidColor(String),
    EmptyImageUrl(String),
}

impl fmt::Display for MoodboardValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Moodboard name cannot be empty"),
            Self::InvalidColor(c) => write!(f, "Invalid colour '{}': expected #RRGGBB", c),
            Self::EmptyImageUrl(id) => write!(f, "Item {} has no image URL", id),
        }
    }
}

impl std::error::Error for MoodboardValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_item_becomes_cover() {
        let mut board = Moodboard::new("Florals");
        board.add_item(MoodboardItem::new("https://img/1.jpg"));
        board.add_item(MoodboardItem::new("https://img/2.jpg"));
        assert_eq!(board.cover_image.as_deref(), Some("https://img/1.jpg"));
        assert_eq!(board.items.len(), 2);
    }

    #[test]
    fn test_remove_cover_item_promotes_next() {
        let mut board = Moodboard::new("Florals");
        let first = MoodboardItem::new("https://img/1.jpg");
        let first_id = first.id.to_string();
        board.add_item(first);
        board.add_item(MoodboardItem::new("https://img/2.jpg"));

        assert!(board.remove_item(&first_id).is_some());
        assert_eq!(board.cover_image.as_deref(), Some("https://img/2.jpg"));
        assert!(board.remove_item(&first_id).is_none());
    }

    #[test]
    fn test_palette_normalization() {
        let mut board = Moodboard::new("Colours");
        board
            .set_palette(&["#e8d5d5".to_string(), "C9A9A6".to_string()])
            .unwrap();
        assert_eq!(board.color_palette, vec!["#E8D5D5", "#C9A9A6"]);

        let err = board.set_palette(&["#12345".to_string()]).unwrap_err();
        assert_eq!(err, MoodboardValidationError::InvalidColor("#12345".into()));
        // A failed update leaves the palette untouched
        assert_eq!(board.color_palette.len(), 2);
    }

    #[test]
    fn test_validation() {
        let board = Moodboard::new(" ");
        assert_eq!(board.validate(), Err(MoodboardValidationError::EmptyName));
    }
}
