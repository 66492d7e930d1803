//! Moodboard service
//!
//! Moodboards collect inspiration images (often pinned straight from an
//! inspiration search) along with a colour palette.

use tracing::debug;

use crate::audit::EntityType;
use crate::error::{WedplanError, WedplanResult};
use crate::models::{Moodboard, MoodboardItem};
use crate::storage::Storage;

/// Service for moodboard management
pub struct MoodboardService<'a> {
    storage: &'a Storage,
}

/// Input for pinning an image to a board
#[derive(Debug, Clone, Default)]
pub struct AddItemInput {
    pub image_url: String,
    pub source_url: Option<String>,
    pub tags: Vec<String>,
    pub notes: Option<String>,
}

impl<'a> MoodboardService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> WedplanResult<Vec<Moodboard>> {
        self.storage.moodboards.get_all()
    }

    /// Find a board by name or ID string
    pub fn find(&self, identifier: &str) -> WedplanResult<Option<Moodboard>> {
        if let Some(board) = self.storage.moodboards.get_by_name(identifier)? {
            return Ok(Some(board));
        }
        self.storage.moodboards.find(identifier)
    }

    fn require(&self, identifier: &str) -> WedplanResult<Moodboard> {
        self.find(identifier)?
            .ok_or_else(|| WedplanError::moodboard_not_found(identifier))
    }

    /// Create an empty board
    pub fn create(&self, name: &str, description: Option<String>) -> WedplanResult<Moodboard> {
        let name = name.trim();

        if self.storage.moodboards.get_by_name(name)?.is_some() {
            return Err(WedplanError::Duplicate {
                entity_type: "Moodboard",
                identifier: name.to_string(),
            });
        }

        let mut board = Moodboard::new(name);
        board.description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        board
            .validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;

        self.storage.moodboards.upsert(board.clone())?;
        self.storage.moodboards.save()?;

        self.storage.log_create(
            EntityType::Moodboard,
            board.id.to_string(),
            Some(board.name.clone()),
            &board,
        )?;

        debug!(board = %board.name, "Moodboard created");
        Ok(board)
    }

    /// Pin an image to a board
    pub fn add_item(&self, board: &str, input: AddItemInput) -> WedplanResult<(Moodboard, MoodboardItem)> {
        let mut board = self.require(board)?;
        let before = board.clone();

        let mut item = MoodboardItem::new(input.image_url.trim());
        item.source_url = input
            .source_url
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        item.tags = input
            .tags
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        item.notes = input.notes.filter(|n| !n.trim().is_empty());

        board.add_item(item.clone());
        board
            .validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;

        self.save_update(&before, &board)?;
        Ok((board, item))
    }

    /// Unpin an item by ID
    pub fn remove_item(&self, board: &str, item: &str) -> WedplanResult<MoodboardItem> {
        let mut board = self.require(board)?;
        let before = board.clone();

        let removed = board.remove_item(item).ok_or_else(|| WedplanError::NotFound {
            entity_type: "Moodboard item",
            identifier: item.to_string(),
        })?;

        self.save_update(&before, &board)?;
        Ok(removed)
    }

    /// Replace a board's colour palette
    pub fn set_palette(&self, board: &str, colors: &[String]) -> WedplanResult<Moodboard> {
        let mut board = self.require(board)?;
        let before = board.clone();

        board
            .set_palette(colors)
            .map_err(|e| WedplanError::Validation(e.to_string()))?;

        self.save_update(&before, &board)?;
        Ok(board)
    }

    /// Delete a board and everything pinned to it
    pub fn delete(&self, identifier: &str) -> WedplanResult<Moodboard> {
        let board = self.require(identifier)?;
        self.storage.moodboards.remove(board.id)?;
        self.storage.moodboards.save()?;

        self.storage.log_delete(
            EntityType::Moodboard,
            board.id.to_string(),
            Some(board.name.clone()),
            &board,
        )?;

        Ok(board)
    }

    fn save_update(&self, before: &Moodboard, after: &Moodboard) -> WedplanResult<()> {
        self.storage.moodboards.upsert(after.clone())?;
        self.storage.moodboards.save()?;
        self.storage.log_update(
            EntityType::Moodboard,
            after.id.to_string(),
            Some(after.name.clone()),
            before,
            after,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::WedplanPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WedplanPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn pin(url: &str) -> AddItemInput {
        AddItemInput {
            image_url: url.into(),
            tags: vec![" Peonies ".into(), "".into()],
            ..AddItemInput::default()
        }
    }

    #[test]
    fn test_create_and_duplicate() {
        let (_temp, storage) = create_test_storage();
        let service = MoodboardService::new(&storage);
        service.create("Florals", Some("  ".into())).unwrap();

        let err = service.create("FLORALS", None).unwrap_err();
        assert!(matches!(err, WedplanError::Duplicate { .. }));
        assert!(service.create(" ", None).unwrap_err().is_validation());
    }

    #[test]
    fn test_pin_and_unpin() {
        let (_temp, storage) = create_test_storage();
        let service = MoodboardService::new(&storage);
        service.create("Florals", None).unwrap();

        let (board, first) = service.add_item("florals", pin("https://img/1.jpg")).unwrap();
        assert_eq!(board.cover_image.as_deref(), Some("https://img/1.jpg"));
        assert_eq!(first.tags, vec!["peonies"]);

        service.add_item("Florals", pin("https://img/2.jpg")).unwrap();
        service.remove_item("Florals", &first.id.to_string()).unwrap();

        let board = service.find("Florals").unwrap().unwrap();
        assert_eq!(board.items.len(), 1);
        assert_eq!(board.cover_image.as_deref(), Some("https://img/2.jpg"));

        assert!(service
            .remove_item("Florals", &first.id.to_string())
            .unwrap_err()
            .is_not_found());
        assert!(service
            .add_item("Florals", pin("  "))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_palette_and_delete() {
        let (_temp, storage) = create_test_storage();
        let service = MoodboardService::new(&storage);
        service.create("Colours", None).unwrap();

        let board = service
            .set_palette("Colours", &["e8d5d5".into(), "#9caf88".into()])
            .unwrap();
        assert_eq!(board.color_palette, vec!["#E8D5D5", "#9CAF88"]);
        assert!(service
            .set_palette("Colours", &["blush".into()])
            .unwrap_err()
            .is_validation());

        service.delete("Colours").unwrap();
        assert!(service.list().unwrap().is_empty());
    }
}
