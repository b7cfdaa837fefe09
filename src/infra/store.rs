use crate::domain::models::WatchItem;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

/// Ordered watchlist persisted as a pretty-printed JSON array.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    items: Vec<WatchItem>,
}

impl Store {
    /// A missing or unreadable file is treated as an empty watchlist; a
    /// corrupt one additionally logs a warning. Never fails.
    pub fn load(path: PathBuf) -> Self {
        if path.exists() {
            if let Ok(content) = fs::read_to_string(&path) {
                match serde_json::from_str(&content) {
                    Ok(items) => return Store { path, items },
                    Err(e) => {
                        eprintln!(
                            "Warning: ignoring corrupt watchlist at {}: {e}",
                            path.display()
                        );
                    }
                }
            }
        }

        Store {
            path,
            items: Vec::new(),
        }
    }

    pub fn save(&self) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Appends and persists unless a title already matches
    /// case-insensitively anywhere in the list.
    pub fn add(&mut self, item: WatchItem) -> bool {
        if self.find_by_title(&item.title).is_some() {
            return false;
        }

        self.items.push(item);
        self.persist()
    }

    pub fn find_by_title(&self, title: &str) -> Option<&WatchItem> {
        // Lookup is case-insensitive
        let needle = title.to_lowercase();
        self.items
            .iter()
            .find(|item| item.title.to_lowercase() == needle)
    }

    /// Replaces the first case-insensitive match wholesale and persists.
    /// False when no title matches; the list is left untouched.
    pub fn update(&mut self, old_title: &str, new_item: WatchItem) -> bool {
        match self.position(old_title) {
            Some(i) => {
                self.items[i] = new_item;
                self.persist()
            }
            None => false,
        }
    }

    /// Removes the first case-insensitive match and persists. No CLI
    /// command deletes entries; only the API surface offers it.
    #[allow(dead_code)]
    pub fn delete(&mut self, title: &str) -> bool {
        match self.position(title) {
            Some(i) => {
                self.items.remove(i);
                self.persist()
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[WatchItem] {
        &self.items
    }

    fn position(&self, title: &str) -> Option<usize> {
        let needle = title.to_lowercase();
        self.items
            .iter()
            .position(|item| item.title.to_lowercase() == needle)
    }

    fn persist(&self) -> bool {
        if let Err(e) = self.save() {
            eprintln!("Warning: failed to save watchlist: {e}");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ItemKind, WatchStatus};
    use tempfile::TempDir;

    fn data_path(dir: &TempDir) -> PathBuf {
        dir.path().join("data.json")
    }

    fn series(title: &str) -> WatchItem {
        WatchItem::new(title.to_string(), ItemKind::Series, 1, 0)
    }

    #[test]
    fn test_add_and_find_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let mut store = Store::load(data_path(&dir));

        assert!(store.add(series("Foo")));
        assert_eq!(store.find_by_title("FOO").unwrap().title, "Foo");
        assert_eq!(store.find_by_title("foo").unwrap().title, "Foo");
        assert!(store.find_by_title("Bar").is_none());
    }

    #[test]
    fn test_add_rejects_duplicate_differing_in_case() {
        let dir = TempDir::new().unwrap();
        let mut store = Store::load(data_path(&dir));

        assert!(store.add(WatchItem::new(
            "Foo".to_string(),
            ItemKind::Movie,
            1,
            0
        )));
        assert!(!store.add(series("foo")));
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_add_scans_entire_list() {
        let dir = TempDir::new().unwrap();
        let mut store = Store::load(data_path(&dir));

        assert!(store.add(series("Alpha")));
        assert!(store.add(series("Beta")));
        assert!(store.add(series("Gamma")));
        assert_eq!(store.items().len(), 3);

        // Duplicate of the last entry must still be caught
        assert!(!store.add(series("GAMMA")));
        assert_eq!(store.items().len(), 3);
    }

    #[test]
    fn test_update_replaces_record() {
        let dir = TempDir::new().unwrap();
        let mut store = Store::load(data_path(&dir));
        store.add(series("Foo"));
        store.add(series("Bar"));

        let mut replacement = series("Foo");
        replacement.season = Some(2);
        replacement.episode = Some(5);
        replacement.status = WatchStatus::Completed;

        assert!(store.update("FOO", replacement.clone()));
        assert_eq!(store.find_by_title("foo").unwrap(), &replacement);
        assert_eq!(store.items().len(), 2);
    }

    #[test]
    fn test_update_missing_title_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut store = Store::load(data_path(&dir));
        store.add(series("Foo"));

        assert!(!store.update("Bar", series("Bar")));
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].title, "Foo");
    }

    #[test]
    fn test_delete_removes_first_match() {
        let dir = TempDir::new().unwrap();
        let mut store = Store::load(data_path(&dir));
        store.add(series("Foo"));
        store.add(series("Bar"));

        assert!(store.delete("foo"));
        assert!(store.find_by_title("Foo").is_none());
        assert_eq!(store.items().len(), 1);

        assert!(!store.delete("foo"));
    }

    #[test]
    fn test_mutations_persist_across_loads() {
        let dir = TempDir::new().unwrap();

        let mut store = Store::load(data_path(&dir));
        let mut item = series("Foo");
        item.rating = 8.5;
        item.notes = "rewatch".to_string();
        store.add(item.clone());
        store.add(series("Bar"));

        let reloaded = Store::load(data_path(&dir));
        assert_eq!(reloaded.items(), store.items());
        assert_eq!(reloaded.find_by_title("Foo").unwrap(), &item);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = Store::load(data_path(&dir));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);
        fs::write(&path, "{ not json").unwrap();

        let store = Store::load(path);
        assert!(store.items().is_empty());
    }
}
