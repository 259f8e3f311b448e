//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the ledger service requires the host to implement: the
//! durable block log, the account store, and a clock.
//!
//! Production implementations wrap the host's database; the in-memory
//! adapters in [`crate::adapters`] serve tests and the dev harness.

use std::fmt;

use async_trait::async_trait;
use shared_types::{Account, StoreError};

use crate::domain::Block;

/// Key for resolving an account in the account store.
///
/// The normal transfer path addresses parties by account number; the
/// fraud path addresses them by internal user id. Both key modes are part
/// of the store contract, so the difference stays visible at the boundary
/// instead of being silently unified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKey {
    /// Bank account number.
    Number(u64),
    /// Internal user identifier.
    UserId(String),
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKey::Number(n) => write!(f, "account#{n}"),
            AccountKey::UserId(id) => write!(f, "user:{id}"),
        }
    }
}

/// A debit+credit pair to apply as one atomic unit.
#[derive(Debug, Clone)]
pub struct TransferOp {
    /// Party to debit.
    pub debit: AccountKey,
    /// Party to credit.
    pub credit: AccountKey,
    /// Amount in minor currency units.
    pub amount: u64,
    /// When set, increment both parties' fraud counters as part of the
    /// same unit.
    pub flag_fraud: bool,
}

/// Post-transfer state of both parties.
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    /// Debited account after the transfer.
    pub sender: Account,
    /// Credited account after the transfer.
    pub receiver: Account,
}

/// Durable append log of ledger blocks.
#[async_trait]
pub trait BlockStore: Send + Sync {
    /// The newest `limit` persisted blocks, newest first. Used once at
    /// bootstrap to restore the in-memory window.
    async fn load_recent_blocks(&self, limit: usize) -> Result<Vec<Block>, StoreError>;

    /// Persist one appended block.
    async fn persist_block(&self, block: &Block) -> Result<(), StoreError>;
}

/// The external account store whose balances the bridge mutates.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Resolve an account by either key mode. `Ok(None)` means the key
    /// resolved cleanly to no account.
    async fn find_account(&self, key: &AccountKey) -> Result<Option<Account>, StoreError>;

    /// Apply the debit+credit pair (and fraud increments when flagged) as
    /// one atomic unit.
    ///
    /// ## Atomicity
    ///
    /// Either both balances move or neither does; concurrent transfers
    /// touching either account must not lose updates. A missing party
    /// fails the whole operation with `AccountMissing` and no effect.
    async fn apply_transfer(&self, op: &TransferOp) -> Result<TransferOutcome, StoreError>;
}

/// Clock abstraction so block timestamps are testable.
pub trait Clock: Send + Sync {
    /// Current time in ms since the Unix epoch.
    fn now_ms(&self) -> u64;
}

// Shared handles satisfy the ports too, so a host can keep a reference to
// an adapter it hands to the service.

#[async_trait]
impl<T: BlockStore + ?Sized> BlockStore for std::sync::Arc<T> {
    async fn load_recent_blocks(&self, limit: usize) -> Result<Vec<Block>, StoreError> {
        (**self).load_recent_blocks(limit).await
    }

    async fn persist_block(&self, block: &Block) -> Result<(), StoreError> {
        (**self).persist_block(block).await
    }
}

#[async_trait]
impl<T: AccountStore + ?Sized> AccountStore for std::sync::Arc<T> {
    async fn find_account(&self, key: &AccountKey) -> Result<Option<Account>, StoreError> {
        (**self).find_account(key).await
    }

    async fn apply_transfer(&self, op: &TransferOp) -> Result<TransferOutcome, StoreError> {
        (**self).apply_transfer(op).await
    }
}

impl<T: Clock + ?Sized> Clock for std::sync::Arc<T> {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
