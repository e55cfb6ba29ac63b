use std::path::{Path, PathBuf};

use super::MetadataStorage;
use crate::core::{SdkError, SdkResult};

/// Writes blobs into a directory, e.g. one served by a static web server.
///
/// URIs are `<base_url>/<file>` when a base URL is configured, otherwise
/// `file://` URIs of the written files.
pub struct LocalStorage {
    dir: PathBuf,
    base_url: Option<String>,
}

impl LocalStorage {
    pub fn new(dir: impl AsRef<Path>, base_url: Option<String>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            base_url,
        }
    }
}

impl MetadataStorage for LocalStorage {
    fn upload(&self, bytes: &[u8], file_name: &str, _content_type: &str) -> SdkResult<String> {
        if file_name.contains('/') || file_name.contains('\\') || file_name.starts_with('.') {
            return Err(SdkError::StorageError(format!(
                "Invalid file name: {}",
                file_name
            )));
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes)?;

        match &self.base_url {
            Some(base) => Ok(format!("{}/{}", base.trim_end_matches('/'), file_name)),
            None => Ok(format!("file://{}", path.canonicalize()?.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_file_and_returns_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), Some("https://static.example.com/".into()));

        let uri = storage.upload(b"{}", "pepe.json", "application/json").unwrap();
        assert_eq!(uri, "https://static.example.com/pepe.json");
        assert_eq!(std::fs::read(dir.path().join("pepe.json")).unwrap(), b"{}");
    }

    #[test]
    fn test_file_uri_without_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("nested"), None);

        let uri = storage.upload(b"png", "pepe.png", "image/png").unwrap();
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("nested/pepe.png"));
    }

    #[test]
    fn test_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), None);
        assert!(storage.upload(b"x", "../escape.json", "application/json").is_err());
    }
}
