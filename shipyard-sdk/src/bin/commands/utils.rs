// Utility functions for CLI commands

use anyhow::{Context, Result};
use shipyard_sdk::{prelude::Pubkey, Amount};
use std::str::FromStr;

/// Parse a pubkey from string
pub fn parse_pubkey(s: &str) -> Result<Pubkey> {
    Pubkey::from_str(s).with_context(|| format!("Invalid public key: {}", s))
}

/// Parse an optional pubkey, falling back to `default`
pub fn pubkey_or(s: Option<&str>, default: Pubkey) -> Result<Pubkey> {
    match s {
        Some(s) => parse_pubkey(s),
        None => Ok(default),
    }
}

/// Parse a token amount; `raw` amounts are base units
pub fn parse_amount(s: &str, raw: bool) -> Result<Amount> {
    if raw {
        let units = s
            .parse::<u64>()
            .with_context(|| format!("Invalid raw amount: {}", s))?;
        Ok(Amount::Raw(units))
    } else {
        Ok(s.parse::<Amount>()?)
    }
}

/// Token account of `owner` for `mint`, or the explicit `account` when given
pub fn token_account_or_ata(
    account: Option<&str>,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey> {
    match account {
        Some(account) => parse_pubkey(account),
        None => Ok(shipyard_sdk::instructions::associated_token_address(owner, mint)),
    }
}

/// Print success message with checkmark
pub fn success(msg: &str) {
    println!("[OK] {}", msg);
}

/// Print info message
pub fn info(msg: &str) {
    println!("[INFO] {}", msg);
}

/// Print warning message
pub fn warn(msg: &str) {
    eprintln!("[WARN] {}", msg);
}
