use std::path::PathBuf;

use reelvault_models::ValidationError;
use tracing::info;

use crate::error::StoreError;

/// Blob storage for uploaded posters and video files. Bytes are written
/// under the upload directory and referenced everywhere else only by
/// the public path string this returns.
pub struct UploadStore {
    dir: PathBuf,
    max_bytes: u64,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_limit(dir, 2 * 1024 * 1024 * 1024)
    }

    pub fn with_limit(dir: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            dir: dir.into(),
            max_bytes,
        }
    }

    /// Store the bytes under a sanitized version of the client-supplied
    /// filename and return the public `/uploads/...` path. An existing
    /// file of the same name is overwritten.
    pub fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, StoreError> {
        if bytes.len() as u64 > self.max_bytes {
            return Err(ValidationError::TooLarge {
                limit: self.max_bytes,
            }
            .into());
        }
        let name = sanitize_filename(filename).ok_or(ValidationError::EmptyFilename)?;

        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(&name), bytes)?;

        info!(name = %name, size = bytes.len(), "stored upload");
        Ok(format!("/uploads/{}", name))
    }
}

/// Reduce a client-supplied filename to something safe to place in the
/// upload directory: the final path component only, whitespace mapped
/// to underscores, everything outside `[A-Za-z0-9._-]` dropped, and
/// leading dots stripped so the result can never name a hidden file or
/// a parent directory.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let mut name = String::with_capacity(base.len());
    for c in base.chars() {
        if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
            name.push(c);
        } else if c.is_whitespace() {
            name.push('_');
        }
    }

    let name = name.trim_start_matches('.');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_plain_name() {
        assert_eq!(
            sanitize_filename("poster.jpg"),
            Some("poster.jpg".to_string())
        );
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(
            sanitize_filename("../../etc/passwd"),
            Some("passwd".to_string())
        );
        assert_eq!(
            sanitize_filename("C:\\movies\\heat.mp4"),
            Some("heat.mp4".to_string())
        );
    }

    #[test]
    fn test_sanitize_maps_spaces_and_drops_symbols() {
        assert_eq!(
            sanitize_filename("the heat (1995).mp4"),
            Some("the_heat_1995.mp4".to_string())
        );
    }

    #[test]
    fn test_sanitize_rejects_empty_results() {
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename(".."), None);
        assert_eq!(sanitize_filename("???"), None);
    }

    #[test]
    fn test_store_returns_public_path() {
        let dir = TempDir::new().unwrap();
        let uploads = UploadStore::new(dir.path().join("uploads"));

        let path = uploads.store("poster.jpg", b"jpegbytes").unwrap();
        assert_eq!(path, "/uploads/poster.jpg");
        assert_eq!(
            std::fs::read(dir.path().join("uploads").join("poster.jpg")).unwrap(),
            b"jpegbytes"
        );
    }

    #[test]
    fn test_store_enforces_size_limit() {
        let dir = TempDir::new().unwrap();
        let uploads = UploadStore::with_limit(dir.path().join("uploads"), 4);

        assert!(uploads.store("ok.bin", b"1234").is_ok());
        let err = uploads.store("big.bin", b"12345").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::TooLarge { limit: 4 })
        ));
    }

    #[test]
    fn test_store_rejects_unusable_names() {
        let dir = TempDir::new().unwrap();
        let uploads = UploadStore::new(dir.path().join("uploads"));
        let err = uploads.store("..", b"x").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::EmptyFilename)
        ));
    }
}
