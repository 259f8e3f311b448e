//! # Test Fixtures
//!
//! Shared helpers for building a fully wired ledger service over the
//! in-memory adapters.

use std::sync::Arc;

use chainpay_ledger::adapters::{InMemoryAccountStore, InMemoryBlockStore, SystemClock};
use chainpay_ledger::{LedgerConfig, LedgerDependencies, LedgerService};
use shared_types::{Account, FraudClass, TransactionRecord};
use uuid::Uuid;

pub type TestService =
    LedgerService<Arc<InMemoryBlockStore>, Arc<InMemoryAccountStore>, SystemClock>;

/// A wired service plus handles to its stores.
pub struct TestHarness {
    pub service: Arc<TestService>,
    pub blocks: Arc<InMemoryBlockStore>,
    pub accounts: Arc<InMemoryAccountStore>,
}

/// Build a service over empty stores, seeded with the given accounts.
pub async fn harness_with_accounts(accounts: Vec<Account>) -> TestHarness {
    harness_with_state(accounts, Vec::new(), LedgerConfig::default()).await
}

/// Build a service over pre-populated stores.
pub async fn harness_with_state(
    accounts: Vec<Account>,
    block_history: Vec<chainpay_ledger::Block>,
    config: LedgerConfig,
) -> TestHarness {
    let block_store = Arc::new(InMemoryBlockStore::with_history(block_history));
    let account_store = Arc::new(InMemoryAccountStore::new());
    for account in accounts {
        account_store.upsert_account(account);
    }

    let service = LedgerService::bootstrap(
        LedgerDependencies {
            block_store: Arc::clone(&block_store),
            account_store: Arc::clone(&account_store),
            clock: SystemClock,
        },
        config,
    )
    .await;

    TestHarness {
        service: Arc::new(service),
        blocks: block_store,
        accounts: account_store,
    }
}

/// Two demo parties at the intake layer's default opening balance.
pub fn two_accounts() -> Vec<Account> {
    vec![
        Account::new("alice", 1001, 2000),
        Account::new("bob", 1002, 2000),
    ]
}

/// A transfer record between two of the seeded accounts.
pub fn transfer(sender: u64, receiver: u64, amount: u64) -> TransactionRecord {
    TransactionRecord {
        reference: Uuid::new_v4(),
        user_id: user_for(sender),
        receiver_id: user_for(receiver),
        sender_account: sender,
        receiver_account: receiver,
        amount,
        payment_currency: Some("USD".into()),
        merchant: Some("acme".into()),
        sender_location: Some("US".into()),
        receiver_location: Some("DE".into()),
        risk_score: 0.1,
        fraud_class: Some(FraudClass::Valid),
        timestamp: 1_700_000_000_000,
    }
}

fn user_for(account_number: u64) -> String {
    match account_number {
        1001 => "alice".into(),
        1002 => "bob".into(),
        n => format!("user-{n}"),
    }
}
