//! Payer keypair management

use std::path::{Path, PathBuf};

use solana_sdk::signature::{read_keypair_file, write_keypair_file, Keypair};
use tracing::{info, warn};

use crate::core::{defaults, SdkError, SdkResult};

/// Expand a leading `~` to the home directory
pub fn expand_path(path: &str) -> SdkResult<PathBuf> {
    if let Some(rest) = path.strip_prefix('~') {
        let home = std::env::var("HOME")
            .map_err(|_| SdkError::KeypairError("HOME environment variable not set".to_string()))?;
        Ok(PathBuf::from(format!("{}{}", home, rest)))
    } else {
        Ok(PathBuf::from(path))
    }
}

/// Parse a keypair from its JSON byte-array form, as written by `solana-keygen`
pub fn keypair_from_json(json: &str) -> SdkResult<Keypair> {
    let bytes: Vec<u8> = serde_json::from_str(json.trim())
        .map_err(|e| SdkError::KeypairError(format!("Expected a JSON byte array: {}", e)))?;
    Keypair::from_bytes(&bytes).map_err(|e| SdkError::KeypairError(e.to_string()))
}

/// Load the payer keypair.
///
/// `SHIPYARD_PRIVATE_KEY` takes precedence when set. Otherwise the keypair
/// is read from `path`; if the file does not exist a new keypair is
/// generated and written there.
pub fn load_or_create_keypair(path: &str) -> SdkResult<Keypair> {
    if let Ok(json) = std::env::var(defaults::PRIVATE_KEY_ENV) {
        info!("Using keypair from {}", defaults::PRIVATE_KEY_ENV);
        return keypair_from_json(&json);
    }

    let path = expand_path(path)?;
    if path.exists() {
        return load_keypair(&path);
    }

    warn!("No keypair at {}, generating a new one", path.display());
    let keypair = Keypair::new();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    write_keypair_file(&keypair, &path).map_err(|e| {
        SdkError::KeypairError(format!("Failed to write keypair to {}: {}", path.display(), e))
    })?;

    Ok(keypair)
}

/// Load a keypair file
pub fn load_keypair(path: &Path) -> SdkResult<Keypair> {
    read_keypair_file(path).map_err(|e| {
        SdkError::KeypairError(format!("Failed to load keypair from {}: {}", path.display(), e))
    })
}

/// Persist a keypair, e.g. the mint keypair of a launch
pub fn save_keypair(keypair: &Keypair, path: &str) -> SdkResult<PathBuf> {
    let path = expand_path(path)?;
    write_keypair_file(keypair, &path).map_err(|e| {
        SdkError::KeypairError(format!("Failed to write keypair to {}: {}", path.display(), e))
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Signer;

    #[test]
    fn test_generates_then_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys").join("payer.json");
        let path = path.to_str().unwrap();

        let created = load_or_create_keypair(path).unwrap();
        let reloaded = load_or_create_keypair(path).unwrap();
        assert_eq!(created.pubkey(), reloaded.pubkey());
    }

    #[test]
    fn test_keypair_from_json() {
        let keypair = Keypair::new();
        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();

        let parsed = keypair_from_json(&json).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());

        assert!(keypair_from_json("[1, 2, 3]").is_err());
        assert!(keypair_from_json("not json").is_err());
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(
            expand_path("/tmp/id.json").unwrap(),
            PathBuf::from("/tmp/id.json")
        );
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(
                expand_path("~/.config/solana/id.json").unwrap(),
                PathBuf::from(format!("{}/.config/solana/id.json", home))
            );
        }
    }
}
