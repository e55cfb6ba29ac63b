//! Upload gateway over HTTP, using ureq like the CLI's RPC calls

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use super::MetadataStorage;
use crate::core::{defaults, SdkError, SdkResult};

/// POSTs blobs to an upload gateway.
///
/// The gateway answers with JSON carrying either a full `uri`, used as-is,
/// or a transaction `id` that is appended to `gateway` (Arweave style).
pub struct HttpStorage {
    agent: ureq::Agent,
    endpoint: String,
    gateway: String,
    auth_token: Option<String>,
}

impl HttpStorage {
    pub fn new(endpoint: &str, gateway: &str, timeout_secs: u64) -> SdkResult<Self> {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(SdkError::ConfigError(format!(
                "Upload endpoint must be an http(s) URL: {}",
                endpoint
            )));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .build();

        Ok(Self {
            agent,
            endpoint: endpoint.to_string(),
            gateway: gateway.to_string(),
            auth_token: std::env::var(defaults::STORAGE_TOKEN_ENV).ok(),
        })
    }
}

impl MetadataStorage for HttpStorage {
    fn upload(&self, bytes: &[u8], file_name: &str, content_type: &str) -> SdkResult<String> {
        let mut request = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", content_type)
            .set("X-File-Name", file_name);
        if let Some(token) = &self.auth_token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send_bytes(bytes)
            .map_err(|e| SdkError::StorageError(format!("Upload of {} failed: {}", file_name, e)))?;
        let json: Value = response.into_json()?;
        debug!(%json, "upload gateway reply");

        resolve_uri(&json, &self.gateway)
    }
}

/// URI of an uploaded blob from the gateway reply
pub fn resolve_uri(reply: &Value, gateway: &str) -> SdkResult<String> {
    if let Some(uri) = reply.get("uri").and_then(Value::as_str) {
        return Ok(uri.to_string());
    }
    if let Some(id) = reply.get("id").and_then(Value::as_str) {
        return Ok(format!("{}/{}", gateway.trim_end_matches('/'), id));
    }
    Err(SdkError::StorageError(format!(
        "Upload reply has neither `uri` nor `id`: {}",
        reply
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_uri_prefers_full_uri() {
        let reply = json!({ "uri": "https://cdn.example.com/pepe.png", "id": "ignored" });
        assert_eq!(
            resolve_uri(&reply, "https://arweave.net").unwrap(),
            "https://cdn.example.com/pepe.png"
        );
    }

    #[test]
    fn test_resolve_uri_from_id() {
        let reply = json!({ "id": "Xk3Fq9" });
        assert_eq!(
            resolve_uri(&reply, "https://arweave.net/").unwrap(),
            "https://arweave.net/Xk3Fq9"
        );
    }

    #[test]
    fn test_resolve_uri_rejects_unknown_reply() {
        assert!(resolve_uri(&json!({ "status": "ok" }), "https://arweave.net").is_err());
    }

    #[test]
    fn test_endpoint_must_be_http() {
        assert!(HttpStorage::new("ftp://uploads", "https://arweave.net", 5).is_err());
        assert!(HttpStorage::new("https://uploads.example.com", "https://arweave.net", 5).is_ok());
    }
}
