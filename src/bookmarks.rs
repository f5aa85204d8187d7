//! Bookmarked property listings.
//!
//! Persists bookmarked listing ids as a bare JSON array of numbers, the
//! same layout the web frontend keeps in browser storage.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Set of bookmarked listing ids.
///
/// Kept as an ordered list so the stored file round-trips byte-for-byte:
/// toggling an id on and back off restores the original array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmarks {
    ids: Vec<u64>,
}

impl Bookmarks {
    /// Load bookmarks from file.
    ///
    /// # Details
    /// A missing file is an empty set. A corrupt file also loads as an
    /// empty set: this is presentation-layer preference data, so it fails
    /// closed instead of surfacing an error to the user.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read bookmarks file: {}", path.display()))?;

        let ids = serde_json::from_str::<Vec<u64>>(&content).unwrap_or_default();
        Ok(Self { ids })
    }

    /// Save bookmarks to file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create bookmarks directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string(&self.ids).context("Failed to serialize bookmarks")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write bookmarks file: {}", path.display()))?;

        Ok(())
    }

    /// Toggle a listing id.
    ///
    /// # Returns
    /// * `bool` - True if the id was added, false if it was removed
    pub fn toggle(&mut self, id: u64) -> bool {
        if let Some(pos) = self.ids.iter().position(|&existing| existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Check whether a listing is bookmarked.
    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Number of bookmarked listings.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no listings are bookmarked.
    #[allow(dead_code)] // Keeps len/is_empty paired
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bookmarks_empty_by_default() {
        let bookmarks = Bookmarks::default();
        assert!(bookmarks.is_empty());
        assert!(!bookmarks.contains(1));
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut bookmarks = Bookmarks::default();
        bookmarks.toggle(1);
        bookmarks.toggle(2);
        let before = bookmarks.clone();

        assert!(bookmarks.toggle(5));
        assert!(bookmarks.contains(5));
        assert_eq!(bookmarks.len(), 3);

        assert!(!bookmarks.toggle(5));
        assert_eq!(bookmarks, before);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bookmarks.json");

        let mut bookmarks = Bookmarks::default();
        bookmarks.toggle(1);
        bookmarks.toggle(2);
        bookmarks.save(&path).unwrap();

        let stored = std::fs::read_to_string(&path).unwrap();
        assert_eq!(stored, "[1,2]");

        let loaded = Bookmarks::load(&path).unwrap();
        assert_eq!(loaded, bookmarks);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Bookmarks::load(&temp_dir.path().join("nope.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_corrupt_file_fails_closed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bookmarks.json");
        std::fs::write(&path, "{not json").unwrap();

        let loaded = Bookmarks::load(&path).unwrap();
        assert!(loaded.is_empty());
    }
}
