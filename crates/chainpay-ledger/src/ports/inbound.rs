//! # Inbound Ports (Driving Ports)
//!
//! The primary API of the ledger, consumed by the transport layer that
//! fronts it (HTTP controllers and the like live outside this crate).

use async_trait::async_trait;
use shared_types::{LedgerError, TransactionRecord};

use crate::domain::Block;

/// Primary API for the transaction ledger.
///
/// Implementations must keep ledger growth linearizable and the
/// debit+credit pair atomic with respect to other concurrent submissions.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// Record a transfer: append a block, persist it, then move the money.
    ///
    /// ## Errors
    ///
    /// - `InvalidTransaction`: the record failed field validation
    /// - `AccountNotFound`: a party is missing; no balance was touched
    /// - `Persistence`: the durable write failed or timed out after the
    ///   in-memory append (chain ahead of store until next bootstrap)
    async fn submit_transaction(&self, record: TransactionRecord)
        -> Result<Block, LedgerError>;

    /// Record a fraud-flagged transfer.
    ///
    /// Same flow as [`submit_transaction`](Self::submit_transaction), but
    /// parties are resolved by internal user id and both parties' fraud
    /// counters are incremented along with the balance movement.
    async fn submit_fraud_transaction(
        &self,
        record: TransactionRecord,
    ) -> Result<Block, LedgerError>;

    /// A copy of the in-memory chain window, oldest first.
    async fn chain_snapshot(&self) -> Result<Vec<Block>, LedgerError>;

    /// Run the full-window integrity check.
    ///
    /// Failures here are monitoring events, not request-path errors: the
    /// transport should route them to an operator channel.
    async fn verify_chain(&self) -> Result<(), LedgerError>;
}
