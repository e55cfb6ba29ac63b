use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use solana_sdk::{pubkey::Pubkey, signature::Signature};

use super::{SdkError, SdkResult};

const EXPLORER_BASE: &str = "https://explorer.solana.com";

/// Solana cluster the client talks to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Cluster {
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
    /// Any other JSON-RPC endpoint
    Custom(String),
}

impl Cluster {
    /// Default JSON-RPC endpoint for the cluster
    pub fn rpc_url(&self) -> &str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Localnet => "http://localhost:8899",
            Cluster::Custom(url) => url,
        }
    }

    pub fn is_mainnet(&self) -> bool {
        matches!(self, Cluster::MainnetBeta)
    }

    /// Query string appended to explorer links
    fn explorer_query(&self) -> String {
        match self {
            Cluster::Devnet => "?cluster=devnet".to_string(),
            Cluster::Testnet => "?cluster=testnet".to_string(),
            Cluster::MainnetBeta => String::new(),
            Cluster::Localnet | Cluster::Custom(_) => {
                format!("?cluster=custom&customUrl={}", self.rpc_url())
            }
        }
    }

    /// Explorer link for a transaction
    pub fn explorer_tx_url(&self, signature: &Signature) -> String {
        format!("{}/tx/{}{}", EXPLORER_BASE, signature, self.explorer_query())
    }

    /// Explorer link for an account
    pub fn explorer_address_url(&self, address: &Pubkey) -> String {
        format!(
            "{}/address/{}{}",
            EXPLORER_BASE,
            address,
            self.explorer_query()
        )
    }
}

impl Default for Cluster {
    fn default() -> Self {
        Cluster::Devnet
    }
}

impl FromStr for Cluster {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "devnet" | "d" => Ok(Cluster::Devnet),
            "testnet" | "t" => Ok(Cluster::Testnet),
            "mainnet" | "mainnet-beta" | "m" => Ok(Cluster::MainnetBeta),
            "localnet" | "localhost" | "l" => Ok(Cluster::Localnet),
            lower if lower.starts_with("http://") || lower.starts_with("https://") => {
                Ok(Cluster::Custom(trimmed.to_string()))
            }
            other => Err(SdkError::ConfigError(format!("Unknown cluster: {}", other))),
        }
    }
}

impl TryFrom<String> for Cluster {
    type Error = SdkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Cluster> for String {
    fn from(cluster: Cluster) -> Self {
        cluster.to_string()
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cluster::Devnet => write!(f, "devnet"),
            Cluster::Testnet => write!(f, "testnet"),
            Cluster::MainnetBeta => write!(f, "mainnet-beta"),
            Cluster::Localnet => write!(f, "localnet"),
            Cluster::Custom(url) => write!(f, "{}", url),
        }
    }
}

/// Token amount as entered by a user
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Amount {
    /// Decimal amount in whole tokens, scaled by the mint's decimals
    Ui(String),
    /// Amount already expressed in base units
    Raw(u64),
}

impl Amount {
    /// Convert to base units for a mint with `decimals` decimals
    pub fn to_base_units(&self, decimals: u8) -> SdkResult<u64> {
        match self {
            Amount::Raw(amount) => Ok(*amount),
            Amount::Ui(value) => ui_to_base_units(value, decimals),
        }
    }
}

impl FromStr for Amount {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        let well_formed = !whole.is_empty()
            && whole.bytes().all(|b| b.is_ascii_digit())
            && frac.bytes().all(|b| b.is_ascii_digit())
            && !(s.ends_with('.'));
        if !well_formed {
            return Err(SdkError::InvalidAmount(format!("'{}' is not a decimal number", s)));
        }
        Ok(Amount::Ui(s.to_string()))
    }
}

impl From<u64> for Amount {
    fn from(amount: u64) -> Self {
        Amount::Ui(amount.to_string())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Ui(value) => write!(f, "{}", value),
            Amount::Raw(amount) => write!(f, "{} (base units)", amount),
        }
    }
}

/// Scale a decimal string by `10^decimals` without floating point
fn ui_to_base_units(value: &str, decimals: u8) -> SdkResult<u64> {
    let (whole, frac) = value.split_once('.').unwrap_or((value, ""));
    if frac.len() > decimals as usize {
        return Err(SdkError::InvalidAmount(format!(
            "{} has more than {} decimal places",
            value, decimals
        )));
    }

    let scale = 10u64
        .checked_pow(decimals as u32)
        .ok_or(SdkError::MathOverflow)?;
    let whole: u64 = whole
        .parse()
        .map_err(|_| SdkError::InvalidAmount(value.to_string()))?;
    let frac_units = if frac.is_empty() {
        0
    } else {
        let frac_scale = 10u64.pow((decimals as usize - frac.len()) as u32);
        frac.parse::<u64>()
            .map_err(|_| SdkError::InvalidAmount(value.to_string()))?
            .checked_mul(frac_scale)
            .ok_or(SdkError::MathOverflow)?
    };

    whole
        .checked_mul(scale)
        .and_then(|units| units.checked_add(frac_units))
        .ok_or(SdkError::MathOverflow)
}

/// Descriptive data of a token, on-chain and off-chain
#[derive(Clone, Debug)]
pub struct TokenMetadataArgs {
    pub name: String,
    pub symbol: String,
    pub description: String,
    /// Image uploaded alongside the off-chain JSON
    pub image_path: std::path::PathBuf,
}

/// Parameters of a single-transaction token launch
#[derive(Clone, Debug)]
pub struct LaunchParams {
    pub metadata: TokenMetadataArgs,
    pub decimals: u8,
    pub amount: Amount,
}

/// Result of creating a mint
#[derive(Clone, Debug)]
pub struct MintResult {
    pub mint: Pubkey,
    pub signature: Signature,
}

/// Result of creating or updating a metadata account
#[derive(Clone, Debug)]
pub struct MetadataResult {
    pub metadata: Pubkey,
    pub image_uri: String,
    pub metadata_uri: String,
    pub signature: Signature,
}

/// Result of a token launch
#[derive(Clone, Debug)]
pub struct LaunchResult {
    pub mint: Pubkey,
    pub token_account: Pubkey,
    pub metadata: Pubkey,
    pub metadata_uri: String,
    pub minted: u64,
    pub signature: Signature,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_amount_scaling() {
        let amount: Amount = "100".parse().unwrap();
        assert_eq!(amount.to_base_units(2).unwrap(), 10_000);

        let amount: Amount = "0.5".parse().unwrap();
        assert_eq!(amount.to_base_units(2).unwrap(), 50);

        let amount: Amount = "12.34".parse().unwrap();
        assert_eq!(amount.to_base_units(2).unwrap(), 1_234);

        let amount: Amount = "7".parse().unwrap();
        assert_eq!(amount.to_base_units(0).unwrap(), 7);
    }

    #[test]
    fn test_raw_amount_is_not_scaled() {
        assert_eq!(Amount::Raw(42).to_base_units(9).unwrap(), 42);
    }

    #[test]
    fn test_excess_precision_rejected() {
        let amount: Amount = "1.234".parse().unwrap();
        assert!(matches!(
            amount.to_base_units(2),
            Err(SdkError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_scaling_overflow() {
        let amount: Amount = "18446744073709551615".parse().unwrap();
        assert!(matches!(amount.to_base_units(1), Err(SdkError::MathOverflow)));
        assert!(matches!(
            Amount::from(1).to_base_units(20),
            Err(SdkError::MathOverflow)
        ));
    }

    #[test]
    fn test_malformed_amounts() {
        for bad in ["", "abc", "1.", ".5", "-3", "1.2.3", "1e5"] {
            assert!(bad.parse::<Amount>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_explorer_links() {
        let sig = Signature::default();
        assert_eq!(
            Cluster::Devnet.explorer_tx_url(&sig),
            format!("https://explorer.solana.com/tx/{}?cluster=devnet", sig)
        );
        assert_eq!(
            Cluster::MainnetBeta.explorer_tx_url(&sig),
            format!("https://explorer.solana.com/tx/{}", sig)
        );

        let address = Pubkey::new_unique();
        assert_eq!(
            Cluster::Localnet.explorer_address_url(&address),
            format!(
                "https://explorer.solana.com/address/{}?cluster=custom&customUrl=http://localhost:8899",
                address
            )
        );
    }

    #[test]
    fn test_cluster_parsing() {
        assert_eq!("devnet".parse::<Cluster>().unwrap(), Cluster::Devnet);
        assert_eq!("mainnet-beta".parse::<Cluster>().unwrap(), Cluster::MainnetBeta);
        assert_eq!(
            "http://127.0.0.1:8899".parse::<Cluster>().unwrap(),
            Cluster::Custom("http://127.0.0.1:8899".to_string())
        );
        assert!("moonnet".parse::<Cluster>().is_err());
    }

    #[test]
    fn test_cluster_url_parsing_ignores_padding_and_scheme_case() {
        assert_eq!(
            " http://127.0.0.1:8899 ".parse::<Cluster>().unwrap(),
            Cluster::Custom("http://127.0.0.1:8899".to_string())
        );
        assert_eq!(
            "HTTPS://rpc.example.com/Key".parse::<Cluster>().unwrap(),
            Cluster::Custom("HTTPS://rpc.example.com/Key".to_string())
        );
        assert!("ftp://rpc.example.com".parse::<Cluster>().is_err());
    }
}
