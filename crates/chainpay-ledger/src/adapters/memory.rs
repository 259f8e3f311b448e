//! # In-Memory Store Adapters
//!
//! Reference implementations of the outbound store ports for tests and
//! the dev harness. Production hosts substitute database-backed adapters
//! behind the same traits.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use shared_types::{Account, StoreError};

use crate::domain::Block;
use crate::ports::outbound::{AccountKey, AccountStore, BlockStore, TransferOp, TransferOutcome};

/// In-memory append log of blocks.
pub struct InMemoryBlockStore {
    blocks: RwLock<Vec<Block>>,
}

impl InMemoryBlockStore {
    pub fn new() -> Self {
        Self {
            blocks: RwLock::new(Vec::new()),
        }
    }

    /// Pre-load persisted history (oldest first), for bootstrap tests.
    pub fn with_history(blocks: Vec<Block>) -> Self {
        Self {
            blocks: RwLock::new(blocks),
        }
    }

    /// Number of persisted blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.read().map(|b| b.len()).unwrap_or(0)
    }
}

impl Default for InMemoryBlockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlockStore for InMemoryBlockStore {
    async fn load_recent_blocks(&self, limit: usize) -> Result<Vec<Block>, StoreError> {
        let blocks = self.blocks.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(blocks.iter().rev().take(limit).cloned().collect())
    }

    async fn persist_block(&self, block: &Block) -> Result<(), StoreError> {
        let mut blocks = self.blocks.write().map_err(|_| StoreError::LockPoisoned)?;
        blocks.push(block.clone());
        Ok(())
    }
}

/// Accounts indexed by number, with a user-id secondary index.
///
/// Both maps live under one lock so `apply_transfer` is a single
/// read-modify-write critical section: concurrent transfers touching the
/// same account serialize instead of losing updates.
struct AccountTable {
    by_number: HashMap<u64, Account>,
    number_by_user: HashMap<String, u64>,
}

impl AccountTable {
    fn resolve(&self, key: &AccountKey) -> Option<u64> {
        match key {
            AccountKey::Number(n) => self.by_number.contains_key(n).then_some(*n),
            AccountKey::UserId(id) => self.number_by_user.get(id).copied(),
        }
    }
}

/// In-memory account store.
pub struct InMemoryAccountStore {
    table: RwLock<AccountTable>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(AccountTable {
                by_number: HashMap::new(),
                number_by_user: HashMap::new(),
            }),
        }
    }

    /// Insert or replace an account.
    pub fn upsert_account(&self, account: Account) {
        if let Ok(mut table) = self.table.write() {
            table
                .number_by_user
                .insert(account.user_id.clone(), account.account_number);
            table.by_number.insert(account.account_number, account);
        }
    }

    /// Current state of an account, by number.
    pub fn account(&self, account_number: u64) -> Option<Account> {
        self.table
            .read()
            .ok()
            .and_then(|t| t.by_number.get(&account_number).cloned())
    }

    /// Sum of all balances, for conservation assertions.
    pub fn total_balance(&self) -> i64 {
        self.table
            .read()
            .map(|t| t.by_number.values().map(|a| a.balance).sum())
            .unwrap_or(0)
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_account(&self, key: &AccountKey) -> Result<Option<Account>, StoreError> {
        let table = self.table.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(table
            .resolve(key)
            .and_then(|n| table.by_number.get(&n).cloned()))
    }

    async fn apply_transfer(&self, op: &TransferOp) -> Result<TransferOutcome, StoreError> {
        let mut table = self.table.write().map_err(|_| StoreError::LockPoisoned)?;

        // Resolve both parties before touching either balance.
        let debit_number = table.resolve(&op.debit).ok_or_else(|| {
            StoreError::AccountMissing {
                key: op.debit.to_string(),
            }
        })?;
        let credit_number = table.resolve(&op.credit).ok_or_else(|| {
            StoreError::AccountMissing {
                key: op.credit.to_string(),
            }
        })?;

        let amount = op.amount as i64;
        if let Some(sender) = table.by_number.get_mut(&debit_number) {
            sender.balance -= amount;
            if op.flag_fraud {
                sender.fraud_count += 1;
            }
        }
        if let Some(receiver) = table.by_number.get_mut(&credit_number) {
            receiver.balance += amount;
            if op.flag_fraud {
                receiver.fraud_count += 1;
            }
        }

        let sender = table.by_number[&debit_number].clone();
        let receiver = table.by_number[&credit_number].clone();
        Ok(TransferOutcome { sender, receiver })
    }
}
