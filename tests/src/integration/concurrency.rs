//! # Concurrency Property Tests
//!
//! Ledger growth must stay linearizable and money conserved when many
//! transfers race on the same accounts.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chainpay_ledger::LedgerApi;
    use rand::Rng;
    use shared_types::Account;
    use tokio::task::JoinSet;

    use crate::common::{harness_with_accounts, transfer, two_accounts};

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_transfers_conserve_money() {
        let h = harness_with_accounts(two_accounts()).await;
        const TASKS: usize = 32;

        let mut join_set = JoinSet::new();
        for i in 0..TASKS {
            let service = Arc::clone(&h.service);
            join_set.spawn(async move {
                // Half the tasks push money one way, half the other.
                let (from, to) = if i % 2 == 0 { (1001, 1002) } else { (1002, 1001) };
                let amount = (i as u64 % 7) + 1;
                service.submit_transaction(transfer(from, to, amount)).await?;
                Ok::<i64, shared_types::LedgerError>(if from == 1001 {
                    amount as i64
                } else {
                    -(amount as i64)
                })
            });
        }

        let mut net_from_alice = 0i64;
        while let Some(result) = join_set.join_next().await {
            net_from_alice += result.unwrap().unwrap();
        }

        // No lost updates on either balance.
        assert_eq!(h.accounts.account(1001).unwrap().balance, 2000 - net_from_alice);
        assert_eq!(h.accounts.account(1002).unwrap().balance, 2000 + net_from_alice);
        assert_eq!(h.accounts.total_balance(), 4000);

        // Exactly one block per transfer, no forks, strict nonce order.
        let window = h.service.chain_snapshot().await.unwrap();
        assert_eq!(window.len(), TASKS + 1);
        for pair in window.windows(2) {
            assert_eq!(pair[1].nonce, pair[0].nonce + 1);
            assert_eq!(pair[1].previous_hash, pair[0].hash);
        }
        assert_eq!(h.blocks.block_count(), TASKS);
        h.service.verify_chain().await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn contended_sender_loses_no_debits() {
        let h = harness_with_accounts(two_accounts()).await;
        const TASKS: usize = 25;
        const AMOUNT: u64 = 40;

        let mut join_set = JoinSet::new();
        for _ in 0..TASKS {
            let service = Arc::clone(&h.service);
            join_set.spawn(async move {
                service
                    .submit_transaction(transfer(1001, 1002, AMOUNT))
                    .await
                    .unwrap();
            });
        }
        while let Some(result) = join_set.join_next().await {
            result.unwrap();
        }

        let debited = TASKS as i64 * AMOUNT as i64;
        assert_eq!(h.accounts.account(1001).unwrap().balance, 2000 - debited);
        assert_eq!(h.accounts.account(1002).unwrap().balance, 2000 + debited);
        h.service.verify_chain().await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn mixed_pairs_and_paths_stay_consistent() {
        // Eight parties, random pairs, normal and fraud paths racing.
        let mut accounts = Vec::new();
        for n in 0..8u64 {
            accounts.push(Account::new(format!("user-{}", 2000 + n), 2000 + n, 10_000));
        }
        let h = harness_with_accounts(accounts).await;
        const TASKS: usize = 40;

        let mut join_set = JoinSet::new();
        for i in 0..TASKS {
            let service = Arc::clone(&h.service);
            join_set.spawn(async move {
                // ThreadRng is not Send; drop it before the first await.
                let record = {
                    let mut rng = rand::thread_rng();
                    let from = 2000 + rng.gen_range(0..8u64);
                    let mut to = 2000 + rng.gen_range(0..8u64);
                    if to == from {
                        to = 2000 + ((to - 2000 + 1) % 8);
                    }
                    transfer(from, to, rng.gen_range(1..=50))
                };
                if i % 5 == 0 {
                    service.submit_fraud_transaction(record).await.unwrap();
                } else {
                    service.submit_transaction(record).await.unwrap();
                }
            });
        }
        while let Some(result) = join_set.join_next().await {
            result.unwrap();
        }

        // Total money never changes, whatever the interleaving.
        assert_eq!(h.accounts.total_balance(), 8 * 10_000);
        assert_eq!(h.service.chain_snapshot().await.unwrap().len(), TASKS + 1);
        h.service.verify_chain().await.unwrap();
    }
}
