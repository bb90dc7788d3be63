use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration, loaded from `config.toml`. Every field has a
/// default so a missing or partial file still yields a usable config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Shared secret gating catalog administration. Overridden by the
    /// REELVAULT_ADMIN_KEY environment variable when set.
    #[serde(default = "default_admin_key")]
    pub admin_key: String,

    /// When true (the default), mutations take a process-wide lock for
    /// their whole load-mutate-save cycle so concurrent writers cannot
    /// lose each other's updates. Turning this off restores the
    /// unguarded behavior of the original service.
    #[serde(default = "default_true")]
    pub serialize_writes: bool,

    /// Upper bound on a single uploaded file, in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

fn default_admin_key() -> String {
    "changeme123".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_upload_bytes() -> u64 {
    2 * 1024 * 1024 * 1024
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_key: default_admin_key(),
            serialize_writes: default_true(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Config {
    /// Load from the given file, fall back to defaults when the file is
    /// absent, then apply environment overrides.
    pub fn load(path: &PathBuf) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        if let Ok(key) = std::env::var("REELVAULT_ADMIN_KEY") {
            config.admin_key = key;
        }
        Ok(config)
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Single shared-secret comparison; there is no user model.
    pub fn verify_admin_key(&self, candidate: &str) -> bool {
        candidate == self.admin_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.admin_key, "changeme123");
        assert!(config.serialize_writes);
        assert_eq!(config.max_upload_bytes, 2 * 1024 * 1024 * 1024);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "admin_key = \"s3cret\"\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.admin_key, "s3cret");
        assert!(config.serialize_writes);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.serialize_writes = false;
        config.save_to_file(&path).unwrap();
        let reloaded = Config::load(&path).unwrap();
        assert!(!reloaded.serialize_writes);
    }

    #[test]
    fn test_verify_admin_key() {
        let config = Config::default();
        assert!(config.verify_admin_key("changeme123"));
        assert!(!config.verify_admin_key("changeme124"));
        assert!(!config.verify_admin_key(""));
    }
}
