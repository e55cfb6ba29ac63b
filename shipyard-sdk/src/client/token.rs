use std::sync::Arc;

use crate::prelude::*;
use solana_program::program_pack::Pack;
use spl_token::state::Mint;
use tracing::info;

use crate::{
    client::BaseClient,
    core::{Amount, MintResult, SdkError, SdkResult},
    instructions::{self, MINT_SIZE},
};

/// Service for SPL token operations
pub struct TokenService {
    base: Arc<BaseClient>,
}

impl TokenService {
    pub fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Fetch and decode a mint
    pub async fn get_mint(&self, mint: &Pubkey) -> SdkResult<Mint> {
        let account = self.base.get_account(mint).await?;
        if account.owner != spl_token::id() {
            return Err(SdkError::DeserializationError(format!(
                "{} is not owned by the token program",
                mint
            )));
        }
        Mint::unpack(&account.data)
            .map_err(|e| SdkError::DeserializationError(format!("Mint {}: {}", mint, e)))
    }

    /// Create and initialize a new mint with a fresh keypair
    pub async fn create_mint(
        &self,
        payer: &Keypair,
        mint_authority: &Pubkey,
        freeze_authority: Option<&Pubkey>,
        decimals: u8,
    ) -> SdkResult<MintResult> {
        let mint = Keypair::new();
        let rent = self.base.rent_exempt_minimum(MINT_SIZE).await?;

        let ixs = instructions::create_mint(
            &payer.pubkey(),
            &mint.pubkey(),
            rent,
            mint_authority,
            freeze_authority,
            decimals,
        )?;
        let signature = self.base.send_transaction(&ixs, &[payer, &mint]).await?;

        info!("The token mint account address is {}", mint.pubkey());
        info!(
            "Token Mint: {}",
            self.base.cluster().explorer_address_url(&mint.pubkey())
        );

        Ok(MintResult {
            mint: mint.pubkey(),
            signature,
        })
    }

    /// Associated token account of `owner`, created when missing
    pub async fn get_or_create_token_account(
        &self,
        payer: &Keypair,
        mint: &Pubkey,
        owner: &Pubkey,
    ) -> SdkResult<Pubkey> {
        let address = instructions::associated_token_address(owner, mint);

        if self.base.get_account_optional(&address).await?.is_none() {
            let ix = instructions::create_token_account_idempotent(&payer.pubkey(), owner, mint);
            self.base.send_transaction(&[ix], &[payer]).await?;
        }

        info!(
            "Token Account: {}",
            self.base.cluster().explorer_address_url(&address)
        );

        Ok(address)
    }

    /// Mint `amount` to `destination`, signed by the mint authority
    pub async fn mint_tokens(
        &self,
        payer: &Keypair,
        mint: &Pubkey,
        destination: &Pubkey,
        authority: &Keypair,
        amount: &Amount,
    ) -> SdkResult<Signature> {
        let mint_info = self.get_mint(mint).await?;
        let units = amount.to_base_units(mint_info.decimals)?;

        let ix = instructions::mint_to(mint, destination, &authority.pubkey(), units)?;
        let signature = self
            .base
            .send_transaction(&[ix], &signers(payer, authority))
            .await?;

        info!(
            "Mint Token Transaction: {}",
            self.base.cluster().explorer_tx_url(&signature)
        );

        Ok(signature)
    }

    /// Move `amount` from `source` to `destination`, signed by the source owner
    pub async fn transfer_tokens(
        &self,
        payer: &Keypair,
        source: &Pubkey,
        destination: &Pubkey,
        owner: &Keypair,
        amount: &Amount,
        mint: &Pubkey,
    ) -> SdkResult<Signature> {
        let mint_info = self.get_mint(mint).await?;
        let units = amount.to_base_units(mint_info.decimals)?;

        let ix = instructions::transfer(
            source,
            mint,
            destination,
            &owner.pubkey(),
            units,
            mint_info.decimals,
        )?;
        let signature = self
            .base
            .send_transaction(&[ix], &signers(payer, owner))
            .await?;

        info!(
            "Transfer Transaction: {}",
            self.base.cluster().explorer_tx_url(&signature)
        );

        Ok(signature)
    }

    /// Burn `amount` from `account`, signed by its owner
    pub async fn burn_tokens(
        &self,
        payer: &Keypair,
        account: &Pubkey,
        mint: &Pubkey,
        owner: &Keypair,
        amount: &Amount,
    ) -> SdkResult<Signature> {
        let mint_info = self.get_mint(mint).await?;
        let units = amount.to_base_units(mint_info.decimals)?;

        let ix = instructions::burn(account, mint, &owner.pubkey(), units, mint_info.decimals)?;
        let signature = self
            .base
            .send_transaction(&[ix], &signers(payer, owner))
            .await?;

        info!(
            "Burn Transaction: {}",
            self.base.cluster().explorer_tx_url(&signature)
        );

        Ok(signature)
    }
}

/// Payer first, the authority only when it is a different key
fn signers<'a>(payer: &'a Keypair, authority: &'a Keypair) -> Vec<&'a Keypair> {
    if payer.pubkey() == authority.pubkey() {
        vec![payer]
    } else {
        vec![payer, authority]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signers_dedup() {
        let payer = Keypair::new();
        let other = Keypair::new();

        assert_eq!(signers(&payer, &payer).len(), 1);

        let both = signers(&payer, &other);
        assert_eq!(both.len(), 2);
        assert_eq!(both[0].pubkey(), payer.pubkey());
    }
}
