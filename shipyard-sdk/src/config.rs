//! Configuration loaded from an optional TOML file
//!
//! Every field has a default, so a missing file or a partial file is fine.
//! Command-line flags override whatever the file says.

use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;

use crate::core::{defaults, Amount, Cluster, SdkError, SdkResult, TokenMetadataArgs};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Cluster to connect to
    pub cluster: Cluster,

    /// RPC endpoint overriding the cluster default
    pub rpc_url: Option<String>,

    /// processed, confirmed or finalized
    pub commitment: String,

    /// Payer keypair file, created when missing
    pub wallet: String,

    pub airdrop: AirdropConfig,
    pub storage: StorageConfig,
    pub token: TokenDefaults,
}

/// Devnet funding of the payer
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AirdropConfig {
    pub enabled: bool,
    /// Request an airdrop below this balance
    pub min_balance_lamports: u64,
    pub amount_lamports: u64,
}

/// Where token images and JSON documents are uploaded
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    Http {
        endpoint: String,
        #[serde(default = "default_gateway")]
        gateway: String,
        #[serde(default = "default_upload_timeout")]
        timeout_secs: u64,
    },
    Local {
        dir: PathBuf,
        #[serde(default)]
        base_url: Option<String>,
    },
}

/// Token parameters used when the command line gives none
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenDefaults {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub decimals: u8,
    pub amount: String,
    pub image: PathBuf,
}

fn default_gateway() -> String {
    defaults::ARWEAVE_GATEWAY.to_string()
}

fn default_upload_timeout() -> u64 {
    defaults::UPLOAD_TIMEOUT_SECS
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::Devnet,
            rpc_url: None,
            commitment: "confirmed".to_string(),
            wallet: defaults::WALLET_PATH.to_string(),
            airdrop: AirdropConfig::default(),
            storage: StorageConfig::default(),
            token: TokenDefaults::default(),
        }
    }
}

impl Default for AirdropConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_balance_lamports: defaults::MIN_BALANCE_LAMPORTS,
            amount_lamports: defaults::AIRDROP_LAMPORTS,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::Local {
            dir: PathBuf::from(defaults::UPLOAD_DIR),
            base_url: None,
        }
    }
}

impl Default for TokenDefaults {
    fn default() -> Self {
        Self {
            name: defaults::TOKEN_NAME.to_string(),
            symbol: defaults::TOKEN_SYMBOL.to_string(),
            description: defaults::TOKEN_DESCRIPTION.to_string(),
            decimals: defaults::TOKEN_DECIMALS,
            amount: defaults::LAUNCH_AMOUNT.to_string(),
            image: PathBuf::from(defaults::IMAGE_PATH),
        }
    }
}

impl ShipConfig {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> SdkResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SdkError::ConfigError(format!("Failed to read config file {}: {}", path, e))
        })?;

        let config: ShipConfig = toml::from_str(&content).map_err(|e| {
            SdkError::ConfigError(format!("Failed to parse config file {}: {}", path, e))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: &str) -> SdkResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SdkError::ConfigError(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SdkResult<()> {
        self.commitment_config()?;

        if let Some(url) = &self.rpc_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(SdkError::ConfigError(format!("Invalid rpc_url: {}", url)));
            }
        }

        if self.wallet.is_empty() {
            return Err(SdkError::ConfigError("wallet path cannot be empty".to_string()));
        }

        if self.airdrop.enabled && self.airdrop.amount_lamports == 0 {
            return Err(SdkError::ConfigError(
                "airdrop.amount_lamports must be greater than 0".to_string(),
            ));
        }

        if let StorageConfig::Http { endpoint, .. } = &self.storage {
            if endpoint.is_empty() {
                return Err(SdkError::ConfigError(
                    "storage.endpoint cannot be empty".to_string(),
                ));
            }
        }

        self.token.amount.parse::<Amount>()?;

        Ok(())
    }

    /// Effective RPC endpoint
    pub fn rpc_url(&self) -> String {
        self.rpc_url
            .clone()
            .unwrap_or_else(|| self.cluster.rpc_url().to_string())
    }

    pub fn commitment_config(&self) -> SdkResult<CommitmentConfig> {
        match self.commitment.as_str() {
            "processed" => Ok(CommitmentConfig::processed()),
            "confirmed" => Ok(CommitmentConfig::confirmed()),
            "finalized" => Ok(CommitmentConfig::finalized()),
            other => Err(SdkError::ConfigError(format!(
                "Unknown commitment level: {}",
                other
            ))),
        }
    }
}

impl TokenDefaults {
    pub fn metadata_args(&self) -> TokenMetadataArgs {
        TokenMetadataArgs {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            description: self.description.clone(),
            image_path: self.image.clone(),
        }
    }
}
