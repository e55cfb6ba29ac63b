// Command modules for shipyard CLI

pub mod launch;
pub mod metadata;
pub mod token;
pub mod utils;

use shipyard_sdk::{prelude::Keypair, ShipClient, ShipConfig};

/// Everything a command needs, built once in main
pub struct CommandContext {
    pub client: ShipClient,
    pub wallet: Keypair,
    pub config: ShipConfig,
}
