//! Off-chain storage for token images and metadata JSON
//!
//! A [`MetadataStorage`] backend takes raw bytes and returns the URI they
//! can be fetched from. The URI of the JSON document is what ends up in the
//! on-chain metadata account.

pub mod http;
pub mod local;

use std::{path::Path, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    config::StorageConfig,
    core::{SdkError, SdkResult, TokenMetadataArgs},
};

pub use http::HttpStorage;
pub use local::LocalStorage;

/// Backend able to store a blob and hand back its URI
pub trait MetadataStorage: Send + Sync {
    fn upload(&self, bytes: &[u8], file_name: &str, content_type: &str) -> SdkResult<String>;
}

/// Off-chain JSON document referenced by the on-chain `uri`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffchainMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
}

/// URIs produced by [`upload_token_metadata`]
#[derive(Clone, Debug)]
pub struct UploadedMetadata {
    pub image_uri: String,
    pub metadata_uri: String,
}

/// Build the backend described by `config`
pub fn from_config(config: &StorageConfig) -> SdkResult<Arc<dyn MetadataStorage>> {
    match config {
        StorageConfig::Http {
            endpoint,
            gateway,
            timeout_secs,
        } => Ok(Arc::new(HttpStorage::new(endpoint, gateway, *timeout_secs)?)),
        StorageConfig::Local { dir, base_url } => {
            Ok(Arc::new(LocalStorage::new(dir, base_url.clone())))
        }
    }
}

/// Upload the token image, then the JSON document pointing at it
pub fn upload_token_metadata(
    storage: &dyn MetadataStorage,
    args: &TokenMetadataArgs,
) -> SdkResult<UploadedMetadata> {
    let image = std::fs::read(&args.image_path).map_err(|e| {
        SdkError::StorageError(format!(
            "Failed to read image {}: {}",
            args.image_path.display(),
            e
        ))
    })?;
    let image_name = file_name(&args.image_path)?;

    debug!(bytes = image.len(), file = %image_name, "uploading image");
    let image_uri = storage.upload(&image, &image_name, content_type(&args.image_path))?;
    info!("image uri: {}", image_uri);

    let document = OffchainMetadata {
        name: args.name.clone(),
        symbol: args.symbol.clone(),
        description: args.description.clone(),
        image: image_uri.clone(),
    };
    let json = serde_json::to_vec_pretty(&document)?;
    let json_name = format!("{}.json", args.symbol.to_ascii_lowercase());

    let metadata_uri = storage.upload(&json, &json_name, "application/json")?;
    info!("metadata uri: {}", metadata_uri);
    if is_local_uri(&metadata_uri) {
        warn!(
            "metadata uri {} only resolves on this machine; set storage.base_url or use the http backend",
            metadata_uri
        );
    }

    Ok(UploadedMetadata {
        image_uri,
        metadata_uri,
    })
}

/// [`upload_token_metadata`] on the blocking pool, for use from async code
pub async fn upload_token_metadata_async(
    storage: Arc<dyn MetadataStorage>,
    args: TokenMetadataArgs,
) -> SdkResult<UploadedMetadata> {
    tokio::task::spawn_blocking(move || upload_token_metadata(storage.as_ref(), &args))
        .await
        .map_err(|e| SdkError::StorageError(format!("Upload task failed: {}", e)))?
}

/// Whether `uri` points at this machine's filesystem
pub fn is_local_uri(uri: &str) -> bool {
    uri.trim_start()
        .get(..7)
        .map_or(false, |scheme| scheme.eq_ignore_ascii_case("file://"))
}

fn file_name(path: &Path) -> SdkResult<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| SdkError::StorageError(format!("Not a file path: {}", path.display())))
}

/// MIME type guessed from the file extension
pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{path::PathBuf, sync::Mutex};

    #[derive(Default)]
    struct MemoryStorage {
        blobs: Mutex<Vec<(String, String, Vec<u8>)>>,
    }

    impl MetadataStorage for MemoryStorage {
        fn upload(&self, bytes: &[u8], file_name: &str, content_type: &str) -> SdkResult<String> {
            self.blobs.lock().unwrap().push((
                file_name.to_string(),
                content_type.to_string(),
                bytes.to_vec(),
            ));
            Ok(format!("mem://{}", file_name))
        }
    }

    #[test]
    fn test_upload_token_metadata_links_image() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("pepe.png");
        std::fs::write(&image_path, b"\x89PNG fake").unwrap();

        let storage = MemoryStorage::default();
        let args = TokenMetadataArgs {
            name: "PEPE the frog".to_string(),
            symbol: "PEPE".to_string(),
            description: "HODL!!!".to_string(),
            image_path,
        };

        let uploaded = upload_token_metadata(&storage, &args).unwrap();
        assert_eq!(uploaded.image_uri, "mem://pepe.png");
        assert_eq!(uploaded.metadata_uri, "mem://pepe.json");

        let blobs = storage.blobs.lock().unwrap();
        assert_eq!(blobs.len(), 2);
        assert_eq!(blobs[0].1, "image/png");
        assert_eq!(blobs[1].1, "application/json");

        let document: OffchainMetadata = serde_json::from_slice(&blobs[1].2).unwrap();
        assert_eq!(document.name, "PEPE the frog");
        assert_eq!(document.description, "HODL!!!");
        assert_eq!(document.image, "mem://pepe.png");
    }

    #[test]
    fn test_missing_image_is_storage_error() {
        let storage = MemoryStorage::default();
        let args = TokenMetadataArgs {
            name: "n".to_string(),
            symbol: "S".to_string(),
            description: String::new(),
            image_path: PathBuf::from("/definitely/not/here.png"),
        };

        assert!(matches!(
            upload_token_metadata(&storage, &args),
            Err(SdkError::StorageError(_))
        ));
        assert!(storage.blobs.lock().unwrap().is_empty());
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("a/b/pepe.PNG")), "image/png");
        assert_eq!(content_type(Path::new("x.jpeg")), "image/jpeg");
        assert_eq!(content_type(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_local_uri_detection() {
        assert!(is_local_uri("file:///tmp/uploads/pepe.json"));
        assert!(is_local_uri("FILE:///tmp/uploads/pepe.json"));
        assert!(!is_local_uri("https://arweave.net/abc"));
        assert!(!is_local_uri("mem://pepe.json"));
        assert!(!is_local_uri("file"));
    }

    #[test]
    fn test_local_storage_without_base_url_yields_local_uri() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("pepe.png");
        std::fs::write(&image_path, b"\x89PNG fake").unwrap();

        let storage = LocalStorage::new(dir.path().join("uploads"), None);
        let args = TokenMetadataArgs {
            name: "PEPE the frog".to_string(),
            symbol: "PEPE".to_string(),
            description: "HODL!!!".to_string(),
            image_path,
        };

        let uploaded = upload_token_metadata(&storage, &args).unwrap();
        assert!(is_local_uri(&uploaded.metadata_uri));

        let served = LocalStorage::new(
            dir.path().join("served"),
            Some("https://static.example.com".into()),
        );
        let uploaded = upload_token_metadata(&served, &args).unwrap();
        assert!(!is_local_uri(&uploaded.metadata_uri));
    }
}
