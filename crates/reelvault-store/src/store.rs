use std::io;
use std::path::{Path, PathBuf};

use reelvault_models::Document;
use tracing::debug;

use crate::error::StoreError;

/// Owner of the on-disk catalog document. Every load reads and parses
/// the whole file; every save rewrites it in full. Nothing else in the
/// process touches the file directly.
pub struct DocumentStore {
    db_path: PathBuf,
}

impl DocumentStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Load the document. A missing file is initialized to the empty
    /// document and persisted before being returned, so the file exists
    /// from first access onward.
    pub fn load(&self) -> Result<Document, StoreError> {
        if !self.db_path.exists() {
            debug!(path = %self.db_path.display(), "catalog file does not exist, creating empty document");
            let document = Document::default();
            self.save(&document)?;
            return Ok(document);
        }

        let content = std::fs::read_to_string(&self.db_path)?;
        let document: Document =
            serde_json::from_str(&content).map_err(StoreError::CorruptStore)?;
        debug!(
            movies = document.movies.len(),
            requests = document.requests.len(),
            "loaded catalog document"
        );
        Ok(document)
    }

    /// Persist the full document. Writes go to a temp file that is then
    /// renamed into place, so a concurrent load never observes a
    /// truncated document and a failed write leaves the previous bytes
    /// intact.
    pub fn save(&self, document: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(document)
            .map_err(|e| StoreError::Persistence(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let temp_path = self.db_path.with_extension("json.tmp");
        std::fs::write(&temp_path, json)?;
        std::fs::rename(&temp_path, &self.db_path)?;

        debug!(
            movies = document.movies.len(),
            requests = document.requests.len(),
            "saved catalog document"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelvault_models::{Movie, NewMovie};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> DocumentStore {
        DocumentStore::new(dir.path().join("data").join("db.json"))
    }

    #[test]
    fn test_first_access_creates_empty_document() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(!store.path().exists());

        let document = store.load().unwrap();
        assert!(document.movies.is_empty());
        assert!(document.requests.is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut document = store.load().unwrap();
        document.movies.push(Movie::new(NewMovie {
            title: "Inception".to_string(),
            year: "2010".to_string(),
            ..NewMovie::default()
        }));
        store.save(&document).unwrap();

        assert_eq!(store.load().unwrap(), document);
    }

    #[test]
    fn test_save_of_unmodified_load_preserves_bytes() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut document = store.load().unwrap();
        document.movies.push(Movie::new(NewMovie {
            title: "Heat".to_string(),
            year: "1995".to_string(),
            ..NewMovie::default()
        }));
        store.save(&document).unwrap();

        let before = std::fs::read_to_string(store.path()).unwrap();
        let reloaded = store.load().unwrap();
        store.save(&reloaded).unwrap();
        let after = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_corrupt_file_is_reported_not_discarded() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{\"movies\": [}").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::CorruptStore(_)));
        // The broken file must survive for manual repair.
        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            "{\"movies\": [}"
        );
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        // Valid JSON, but not a catalog document.
        std::fs::write(store.path(), "{\"movies\": []}").unwrap();

        assert!(matches!(
            store.load().unwrap_err(),
            StoreError::CorruptStore(_)
        ));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.load().unwrap();
        assert!(!store.path().with_extension("json.tmp").exists());
    }
}
