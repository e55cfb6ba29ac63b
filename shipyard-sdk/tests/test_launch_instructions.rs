//! Test the single-transaction launch bundle

#[cfg(test)]
mod tests {
    use shipyard_sdk::{
        instructions::{self, MINT_SIZE},
        Amount, SdkError,
    };
    use solana_program::program_pack::Pack;
    use solana_sdk::pubkey::Pubkey;

    const RENT: u64 = 1_461_600;

    fn data() -> mpl_token_metadata::types::DataV2 {
        instructions::token_data("PEPE the frog", "PEPE", "https://arweave.net/pepe-json").unwrap()
    }

    #[test]
    fn test_launch_instruction_ordering() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let amount = Amount::from(100).to_base_units(2).unwrap();

        let bundle = instructions::launch(&payer, &mint, RENT, 2, amount, data()).unwrap();

        assert_eq!(bundle.instructions.len(), 5, "Should have 5 instructions");
        let programs: Vec<Pubkey> = bundle.instructions.iter().map(|ix| ix.program_id).collect();
        assert_eq!(
            programs,
            vec![
                solana_program::system_program::id(),
                spl_token::id(),
                mpl_token_metadata::ID,
                spl_associated_token_account::id(),
                spl_token::id(),
            ]
        );
    }

    #[test]
    fn test_launch_accounts() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let bundle = instructions::launch(&payer, &mint, RENT, 2, 10_000, data()).unwrap();

        assert_eq!(bundle.mint, mint);
        assert_eq!(
            bundle.token_account,
            spl_associated_token_account::get_associated_token_address(&payer, &mint)
        );
        assert_eq!(bundle.metadata, instructions::metadata_address(&mint).0);
        assert_eq!(bundle.amount, 10_000);

        // Only the payer and the new mint sign
        let signers: Vec<Pubkey> = bundle
            .instructions
            .iter()
            .flat_map(|ix| ix.accounts.iter())
            .filter(|meta| meta.is_signer)
            .map(|meta| meta.pubkey)
            .collect();
        assert!(signers.iter().all(|key| *key == payer || *key == mint));
        assert!(signers.contains(&mint));
    }

    #[test]
    fn test_launch_mint_allocation_and_supply() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let bundle = instructions::launch(&payer, &mint, RENT, 2, 10_000, data()).unwrap();

        let create = solana_sdk::system_instruction::create_account(
            &payer,
            &mint,
            RENT,
            spl_token::state::Mint::LEN as u64,
            &spl_token::id(),
        );
        assert_eq!(bundle.instructions[0], create);
        assert_eq!(MINT_SIZE, 82);

        let init = spl_token::instruction::initialize_mint2(&spl_token::id(), &mint, &payer, None, 2)
            .unwrap();
        assert_eq!(bundle.instructions[1], init);

        let mint_to = spl_token::instruction::mint_to(
            &spl_token::id(),
            &mint,
            &bundle.token_account,
            &payer,
            &[],
            10_000,
        )
        .unwrap();
        assert_eq!(bundle.instructions[4], mint_to);
    }

    #[test]
    fn test_launch_rejects_oversized_metadata() {
        let result = instructions::token_data(&"frog".repeat(10), "PEPE", "https://arweave.net/x");

        match result {
            Err(SdkError::InvalidParameters(msg)) => assert!(msg.contains("name")),
            _ => panic!("Expected InvalidParameters error for a 40 byte name"),
        }
    }
}
