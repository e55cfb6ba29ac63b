use std::sync::Arc;

use crate::prelude::*;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{account::Account, instruction::Instruction, transaction::Transaction};
use tracing::{debug, info, warn};

use crate::{
    config::AirdropConfig,
    core::{Cluster, SdkError, SdkResult, LAMPORTS_PER_SOL},
};

/// Base RPC client wrapper for common operations
pub struct BaseClient {
    rpc: Arc<RpcClient>,
    cluster: Cluster,
}

impl BaseClient {
    pub fn new(rpc: Arc<RpcClient>, cluster: Cluster) -> Self {
        Self { rpc, cluster }
    }

    /// Get the RPC client
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    /// Get the RPC endpoint URL
    pub fn rpc_url(&self) -> String {
        self.rpc.url()
    }

    /// Fetch an account
    pub async fn get_account(&self, address: &Pubkey) -> SdkResult<Account> {
        self.get_account_optional(address)
            .await?
            .ok_or_else(|| SdkError::AccountNotFound(address.to_string()))
    }

    /// Fetch an account, `None` when it does not exist
    pub async fn get_account_optional(&self, address: &Pubkey) -> SdkResult<Option<Account>> {
        Ok(self
            .rpc
            .get_account_with_commitment(address, self.rpc.commitment())
            .await?
            .value)
    }

    /// Sign with `signers` (the first one pays) and send, waiting for confirmation
    pub async fn send_transaction(
        &self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> SdkResult<Signature> {
        let payer = signers
            .first()
            .ok_or_else(|| SdkError::InvalidParameters("no signers".to_string()))?;
        let recent_blockhash = self.rpc.get_latest_blockhash().await?;

        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            signers,
            recent_blockhash,
        );
        debug!(
            instructions = instructions.len(),
            signers = signers.len(),
            "sending transaction"
        );

        Ok(self.rpc.send_and_confirm_transaction(&tx).await?)
    }

    /// Get account balance in lamports
    pub async fn get_balance(&self, pubkey: &Pubkey) -> SdkResult<u64> {
        Ok(self.rpc.get_balance(pubkey).await?)
    }

    /// Lamports needed for an account of `size` bytes to be rent exempt
    pub async fn rent_exempt_minimum(&self, size: usize) -> SdkResult<u64> {
        Ok(self
            .rpc
            .get_minimum_balance_for_rent_exemption(size)
            .await?)
    }

    /// Request an airdrop and wait until it lands
    pub async fn airdrop(&self, pubkey: &Pubkey, lamports: u64) -> SdkResult<Signature> {
        if self.cluster.is_mainnet() {
            return Err(SdkError::InvalidParameters(
                "airdrops are not available on mainnet-beta".to_string(),
            ));
        }

        let signature = self.rpc.request_airdrop(pubkey, lamports).await?;
        self.rpc.poll_for_signature(&signature).await?;
        Ok(signature)
    }

    /// Top the payer up when its balance is under the configured threshold.
    /// Returns the balance afterwards.
    pub async fn ensure_funded(&self, pubkey: &Pubkey, policy: &AirdropConfig) -> SdkResult<u64> {
        let balance = self.get_balance(pubkey).await?;
        if balance >= policy.min_balance_lamports {
            return Ok(balance);
        }

        if !policy.enabled || self.cluster.is_mainnet() {
            warn!(
                "Balance of {} is {} SOL, below the {} SOL threshold",
                pubkey,
                lamports_to_sol(balance),
                lamports_to_sol(policy.min_balance_lamports)
            );
            return Ok(balance);
        }

        info!("Airdropping {} SOL...", lamports_to_sol(policy.amount_lamports));
        let signature = self.airdrop(pubkey, policy.amount_lamports).await?;
        info!("Airdrop: {}", self.cluster.explorer_tx_url(&signature));

        self.get_balance(pubkey).await
    }
}

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
