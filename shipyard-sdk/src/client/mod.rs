pub mod base;
pub mod launch;
pub mod metadata;
pub mod token;

use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::{
    config::ShipConfig,
    core::{Cluster, SdkResult},
    storage::{self, MetadataStorage},
};

pub use base::{lamports_to_sol, BaseClient};
pub use launch::LaunchService;
pub use metadata::MetadataService;
pub use token::TokenService;

/// Main client with service-based architecture
pub struct ShipClient {
    /// Base RPC client
    pub base: Arc<BaseClient>,
    /// Mint, token account, mint/transfer/burn operations
    pub token: TokenService,
    /// Metaplex metadata operations
    pub metadata: MetadataService,
    /// Single-transaction token launch
    pub launch: LaunchService,
}

impl ShipClient {
    /// Create a client from configuration
    pub fn new(config: &ShipConfig) -> SdkResult<Self> {
        let storage = storage::from_config(&config.storage)?;
        Ok(Self::with_storage(
            &config.rpc_url(),
            config.cluster.clone(),
            config.commitment_config()?,
            storage,
        ))
    }

    /// Create a client with a custom storage backend
    pub fn with_storage(
        rpc_url: &str,
        cluster: Cluster,
        commitment: CommitmentConfig,
        storage: Arc<dyn MetadataStorage>,
    ) -> Self {
        let rpc = Arc::new(RpcClient::new_with_commitment(rpc_url.to_string(), commitment));
        let base = Arc::new(BaseClient::new(rpc, cluster));

        Self {
            token: TokenService::new(base.clone()),
            metadata: MetadataService::new(base.clone(), storage.clone()),
            launch: LaunchService::new(base.clone(), storage),
            base,
        }
    }

    pub fn cluster(&self) -> &Cluster {
        self.base.cluster()
    }

    /// Get the RPC endpoint
    pub fn rpc_url(&self) -> String {
        self.base.rpc_url()
    }
}
