//! # Bridge Flow Tests
//!
//! Full-path tests: intake record in, appended block and moved balances
//! out, with the durable log written through.

#[cfg(test)]
mod tests {
    use chainpay_ledger::domain::GENESIS_NONCE;
    use chainpay_ledger::{Block, LedgerApi, LedgerConfig};
    use shared_types::FraudClass;

    use crate::common::{harness_with_accounts, harness_with_state, transfer, two_accounts};

    #[tokio::test]
    async fn transfer_between_funded_accounts() {
        let h = harness_with_accounts(two_accounts()).await;

        let block = h
            .service
            .submit_transaction(transfer(1001, 1002, 100))
            .await
            .unwrap();

        // One new block linked to genesis.
        let window = h.service.chain_snapshot().await.unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(block.previous_hash, Block::genesis().hash);
        assert_eq!(block.nonce, GENESIS_NONCE + 1);
        assert_eq!(block.transactions[0].amount, 100);

        // Money moved and is conserved.
        assert_eq!(h.accounts.account(1001).unwrap().balance, 1900);
        assert_eq!(h.accounts.account(1002).unwrap().balance, 2100);
        assert_eq!(h.accounts.total_balance(), 4000);

        // Written through to the durable log.
        assert_eq!(h.blocks.block_count(), 1);
        h.service.verify_chain().await.unwrap();
    }

    #[tokio::test]
    async fn fraud_flow_counts_both_parties() {
        let h = harness_with_accounts(two_accounts()).await;

        let mut record = transfer(1001, 1002, 400);
        record.fraud_class = Some(FraudClass::MoneyLaundering);
        record.risk_score = 0.97;
        h.service.submit_fraud_transaction(record).await.unwrap();

        let alice = h.accounts.account(1001).unwrap();
        let bob = h.accounts.account(1002).unwrap();
        assert_eq!((alice.balance, alice.fraud_count), (1600, 1));
        assert_eq!((bob.balance, bob.fraud_count), (2400, 1));
    }

    #[tokio::test]
    async fn restart_replays_window_and_resumes() {
        let h = harness_with_accounts(two_accounts()).await;
        for amount in [100, 200, 300] {
            h.service
                .submit_transaction(transfer(1001, 1002, amount))
                .await
                .unwrap();
        }
        let persisted = h.blocks.block_count();
        assert_eq!(persisted, 3);

        // "Restart": a new service bootstrapped over the surviving stores,
        // with a window smaller than the full history.
        let restarted = harness_with_state(
            Vec::new(),
            h.service.chain_snapshot().await.unwrap(),
            LedgerConfig {
                replay_window: 2,
                ..LedgerConfig::default()
            },
        )
        .await;
        for account in two_accounts() {
            // Balances carry over from the previous run's end state.
            let mut account = account;
            account.balance = h.accounts.account(account.account_number).unwrap().balance;
            restarted.accounts.upsert_account(account);
        }

        let window = restarted.service.chain_snapshot().await.unwrap();
        assert_eq!(window.len(), 2);
        restarted.service.verify_chain().await.unwrap();

        let block = restarted
            .service
            .submit_transaction(transfer(1002, 1001, 50))
            .await
            .unwrap();
        assert_eq!(block.nonce, 5); // genesis + 3 transfers + this one
        restarted.service.verify_chain().await.unwrap();
        assert_eq!(restarted.accounts.account(1001).unwrap().balance, 1450);
        assert_eq!(restarted.accounts.account(1002).unwrap().balance, 2550);
    }

    #[tokio::test]
    async fn rejects_unknown_receiver_without_side_effects() {
        let h = harness_with_accounts(two_accounts()).await;

        let err = h
            .service
            .submit_transaction(transfer(1001, 4242, 100))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            shared_types::LedgerError::AccountNotFound { .. }
        ));

        assert_eq!(h.accounts.account(1001).unwrap().balance, 2000);
        assert_eq!(h.service.chain_snapshot().await.unwrap().len(), 1);
        assert_eq!(h.blocks.block_count(), 0);
    }
}
