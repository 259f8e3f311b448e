//! # Transaction Processing
//!
//! Implements the `LedgerApi` flow: validate, resolve parties, append,
//! persist, move the money.

use async_trait::async_trait;
use shared_types::{LedgerError, StoreError, TransactionRecord};

use super::LedgerService;
use crate::domain::Block;
use crate::ports::inbound::LedgerApi;
use crate::ports::outbound::{AccountKey, AccountStore, BlockStore, Clock, TransferOp};

/// Which party-resolution and counter semantics a submission uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransferKind {
    /// Parties by account number; balances only.
    Standard,
    /// Parties by internal user id; balances plus fraud counters. The
    /// differing lookup key mirrors the intake layer's fraud endpoint.
    FraudFlagged,
}

impl<BS, AS, C> LedgerService<BS, AS, C>
where
    BS: BlockStore,
    AS: AccountStore,
    C: Clock,
{
    async fn process(
        &self,
        record: TransactionRecord,
        kind: TransferKind,
    ) -> Result<Block, LedgerError> {
        record.validate().map_err(LedgerError::InvalidTransaction)?;

        let (debit, credit) = match kind {
            TransferKind::Standard => (
                AccountKey::Number(record.sender_account),
                AccountKey::Number(record.receiver_account),
            ),
            TransferKind::FraudFlagged => (
                AccountKey::UserId(record.user_id.clone()),
                AccountKey::UserId(record.receiver_id.clone()),
            ),
        };

        // Both parties must exist before the ledger or either balance is
        // touched; a missing receiver must not leave a lone debit.
        self.require_account(&debit).await?;
        self.require_account(&credit).await?;

        let amount = record.amount;

        // Critical section: read tip, build, push. The lock is dropped
        // before any store I/O.
        let block = {
            let mut chain = self.chain.write().map_err(|_| LedgerError::LockPoisoned)?;
            chain.append(record, self.clock.now_ms())?.clone()
        };

        // Durable write, bounded. On failure the in-memory window is ahead
        // of the store until the next bootstrap replay; that divergence is
        // logged and surfaced, not rolled back.
        match tokio::time::timeout(
            self.config.persist_timeout,
            self.block_store.persist_block(&block),
        )
        .await
        {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::error!(
                    nonce = block.nonce,
                    error = %e,
                    "[ledger] block persistence failed; window ahead of store"
                );
                return Err(LedgerError::Persistence(e.to_string()));
            }
            Err(_) => {
                tracing::error!(
                    nonce = block.nonce,
                    timeout_ms = self.config.persist_timeout.as_millis() as u64,
                    "[ledger] block persistence timed out; window ahead of store"
                );
                return Err(LedgerError::Persistence(format!(
                    "write timed out after {}ms",
                    self.config.persist_timeout.as_millis()
                )));
            }
        }

        let flagged = kind == TransferKind::FraudFlagged;
        let outcome = self
            .account_store
            .apply_transfer(&TransferOp {
                debit,
                credit,
                amount,
                flag_fraud: flagged,
            })
            .await
            .map_err(|e| match e {
                StoreError::AccountMissing { key } => LedgerError::AccountNotFound { key },
                other => LedgerError::AccountStore(other.to_string()),
            })?;

        tracing::info!(
            nonce = block.nonce,
            amount,
            sender = %outcome.sender.account_number,
            receiver = %outcome.receiver.account_number,
            fraud = flagged,
            "[ledger] ✓ transaction recorded"
        );

        Ok(block)
    }
}

#[async_trait]
impl<BS, AS, C> LedgerApi for LedgerService<BS, AS, C>
where
    BS: BlockStore,
    AS: AccountStore,
    C: Clock,
{
    async fn submit_transaction(
        &self,
        record: TransactionRecord,
    ) -> Result<Block, LedgerError> {
        self.process(record, TransferKind::Standard).await
    }

    async fn submit_fraud_transaction(
        &self,
        record: TransactionRecord,
    ) -> Result<Block, LedgerError> {
        self.process(record, TransferKind::FraudFlagged).await
    }

    async fn chain_snapshot(&self) -> Result<Vec<Block>, LedgerError> {
        let chain = self.chain.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(chain.blocks().to_vec())
    }

    async fn verify_chain(&self) -> Result<(), LedgerError> {
        let result = {
            let chain = self.chain.read().map_err(|_| LedgerError::LockPoisoned)?;
            chain.verify()
        };
        if let Err(e) = &result {
            tracing::error!(error = %e, "[ledger] integrity check failed");
        }
        result
    }
}
