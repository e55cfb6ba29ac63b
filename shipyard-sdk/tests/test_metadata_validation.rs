//! Metadata limits are checked before anything is uploaded or sent

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use shipyard_sdk::{
        prelude::*, storage::MetadataStorage, Amount, Cluster, LaunchParams, SdkError, SdkResult,
        ShipClient, TokenMetadataArgs,
    };
    use solana_sdk::commitment_config::CommitmentConfig;

    // Nothing listens here; any RPC call would fail with an RpcError
    const DEAD_RPC: &str = "http://127.0.0.1:1";

    #[derive(Default)]
    struct CountingStorage {
        uploads: AtomicUsize,
    }

    impl MetadataStorage for CountingStorage {
        fn upload(&self, _bytes: &[u8], file_name: &str, _content_type: &str) -> SdkResult<String> {
            self.uploads.fetch_add(1, Ordering::SeqCst);
            Ok(format!("mem://{}", file_name))
        }
    }

    fn client() -> (ShipClient, Arc<CountingStorage>) {
        let storage = Arc::new(CountingStorage::default());
        let client = ShipClient::with_storage(
            DEAD_RPC,
            Cluster::Localnet,
            CommitmentConfig::confirmed(),
            storage.clone(),
        );
        (client, storage)
    }

    fn args(name: &str, symbol: &str) -> TokenMetadataArgs {
        TokenMetadataArgs {
            name: name.to_string(),
            symbol: symbol.to_string(),
            description: "HODL!!!".to_string(),
            image_path: "assets/pepe.png".into(),
        }
    }

    fn assert_invalid(result: SdkResult<impl std::fmt::Debug>, field: &str) {
        match result {
            Err(SdkError::InvalidParameters(msg)) => assert!(msg.contains(field), "{}", msg),
            other => panic!("Expected InvalidParameters for {}, got {:?}", field, other),
        }
    }

    #[tokio::test]
    async fn test_launch_rejects_long_name_before_upload() {
        let (client, storage) = client();
        let payer = Keypair::new();
        let mint = Keypair::new();
        let params = LaunchParams {
            metadata: args(&"frog".repeat(10), "PEPE"),
            decimals: 2,
            amount: Amount::from(100),
        };

        assert_invalid(client.launch.launch(&payer, &mint, &params).await, "name");
        assert_eq!(storage.uploads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_create_metadata_rejects_long_symbol_before_upload() {
        let (client, storage) = client();
        let user = Keypair::new();
        let mint = Pubkey::new_unique();

        let result = client
            .metadata
            .create_metadata(&user, &mint, &args("PEPE the frog", "PEPEPEPEPEPE"))
            .await;

        assert_invalid(result, "symbol");
        assert_eq!(storage.uploads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_update_metadata_rejects_long_name_before_upload() {
        let (client, storage) = client();
        let user = Keypair::new();
        let mint = Pubkey::new_unique();

        let result = client
            .metadata
            .update_metadata(&user, &mint, &args(&"x".repeat(33), "PEPE"))
            .await;

        assert_invalid(result, "name");
        assert_eq!(storage.uploads.load(Ordering::SeqCst), 0);
    }
}
