//! # ChainPay Node Runtime
//!
//! Wiring harness for the transaction ledger: builds the stores, restores
//! the ledger window, and keeps the service alive until shutdown. The
//! transport fronting the ledger is the host deployment's concern; this
//! binary ships with in-memory adapters and an optional smoke flow for
//! development.
//!
//! ## Startup Sequence
//!
//! 1. Initialize tracing (env-filtered)
//! 2. Load configuration from the environment
//! 3. Construct the store adapters
//! 4. Bootstrap the ledger service (window replay)
//! 5. Run the integrity check
//! 6. (demo mode) Seed accounts and run the smoke flow
//! 7. Wait for Ctrl-C

mod config;

use std::sync::Arc;

use anyhow::Context;
use chainpay_ledger::adapters::{InMemoryAccountStore, InMemoryBlockStore, SystemClock};
use chainpay_ledger::{Clock, LedgerApi, LedgerDependencies, LedgerService};
use shared_types::{Account, FraudClass, TransactionRecord};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::config::NodeConfig;

/// Opening balance for demo accounts, matching the intake layer's default
/// for newly onboarded users.
const DEMO_OPENING_BALANCE: i64 = 2000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("CHAINPAY_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = NodeConfig::from_env();
    tracing::info!(?config, "[node] starting");

    let block_store = Arc::new(InMemoryBlockStore::new());
    let account_store = Arc::new(InMemoryAccountStore::new());

    let service = LedgerService::bootstrap(
        LedgerDependencies {
            block_store: Arc::clone(&block_store),
            account_store: Arc::clone(&account_store),
            clock: SystemClock,
        },
        config.ledger_config(),
    )
    .await;

    service
        .verify_chain()
        .await
        .context("ledger failed the startup integrity check")?;

    if config.demo {
        run_demo_flow(&service, &account_store).await?;
    }

    tracing::info!("[node] ready; press Ctrl-C to stop");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    tracing::info!("[node] shutting down");
    Ok(())
}

/// Seed two demo accounts and push one normal and one fraud-flagged
/// transfer through the full bridge flow.
async fn run_demo_flow(
    service: &impl LedgerApi,
    accounts: &InMemoryAccountStore,
) -> anyhow::Result<()> {
    accounts.upsert_account(Account::new("alice", 1001, DEMO_OPENING_BALANCE));
    accounts.upsert_account(Account::new("bob", 1002, DEMO_OPENING_BALANCE));

    let transfer = demo_record(100, Some(FraudClass::Valid));
    let block = service
        .submit_transaction(transfer)
        .await
        .context("demo transfer failed")?;
    tracing::info!(nonce = block.nonce, hash = %block.hash, "[node] demo transfer recorded");

    let flagged = demo_record(250, Some(FraudClass::Smurfing));
    let block = service
        .submit_fraud_transaction(flagged)
        .await
        .context("demo fraud transfer failed")?;
    tracing::info!(nonce = block.nonce, hash = %block.hash, "[node] demo fraud transfer recorded");

    service.verify_chain().await?;
    let window = service.chain_snapshot().await?;
    tracing::info!(
        blocks = window.len(),
        alice = accounts.account(1001).map(|a| a.balance).unwrap_or_default(),
        bob = accounts.account(1002).map(|a| a.balance).unwrap_or_default(),
        "[node] demo flow complete"
    );
    Ok(())
}

fn demo_record(amount: u64, fraud_class: Option<FraudClass>) -> TransactionRecord {
    TransactionRecord {
        reference: Uuid::new_v4(),
        user_id: "alice".into(),
        receiver_id: "bob".into(),
        sender_account: 1001,
        receiver_account: 1002,
        amount,
        payment_currency: Some("USD".into()),
        merchant: Some("chainpay-demo".into()),
        sender_location: Some("US".into()),
        receiver_location: Some("US".into()),
        risk_score: 0.05,
        fraud_class,
        timestamp: SystemClock.now_ms(),
    }
}
