//! # Ledger Service
//!
//! The bridge between the pure chain and the external stores: it appends
//! blocks, writes them through to the durable log, and moves the money.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements [`LedgerApi`](crate::ports::inbound::LedgerApi)
//! 2. Owns the in-memory chain window behind a single writer lock, so
//!    append is a critical section and growth is linearizable
//! 3. Uses dependency injection for the block store, account store, and
//!    clock

mod processing;

use std::sync::RwLock;

use shared_types::LedgerError;

use crate::domain::{Chain, LedgerConfig};
use crate::ports::outbound::{AccountKey, AccountStore, BlockStore, Clock};

/// Dependencies for [`LedgerService`].
pub struct LedgerDependencies<BS, AS, C> {
    pub block_store: BS,
    pub account_store: AS,
    pub clock: C,
}

/// The transaction ledger service.
pub struct LedgerService<BS, AS, C>
where
    BS: BlockStore,
    AS: AccountStore,
    C: Clock,
{
    /// In-memory chain window. Write lock held only across the in-memory
    /// append, never across store I/O.
    pub(crate) chain: RwLock<Chain>,
    pub(crate) block_store: BS,
    pub(crate) account_store: AS,
    pub(crate) clock: C,
    pub(crate) config: LedgerConfig,
}

impl<BS, AS, C> LedgerService<BS, AS, C>
where
    BS: BlockStore,
    AS: AccountStore,
    C: Clock,
{
    /// Restore the ledger window from the durable log and construct the
    /// service.
    ///
    /// Loads the newest `config.replay_window` blocks and adopts them
    /// oldest-first. An empty or unreadable store falls back to a fresh
    /// genesis chain; the load failure is logged, not fatal, since the
    /// durable log remains the source of truth.
    pub async fn bootstrap(deps: LedgerDependencies<BS, AS, C>, config: LedgerConfig) -> Self {
        let seed = match deps.block_store.load_recent_blocks(config.replay_window).await {
            Ok(mut newest_first) => {
                newest_first.reverse();
                newest_first
            }
            Err(e) => {
                tracing::warn!(error = %e, "[ledger] window load failed; starting from genesis");
                Vec::new()
            }
        };

        let chain = Chain::from_seed(seed);
        tracing::info!(
            blocks = chain.len(),
            tip_nonce = chain.tip().nonce,
            "[ledger] window restored"
        );

        Self {
            chain: RwLock::new(chain),
            block_store: deps.block_store,
            account_store: deps.account_store,
            clock: deps.clock,
            config,
        }
    }

    /// Resolve `key` and fail with `AccountNotFound` when it points at
    /// nothing. Called for both parties before any balance is touched.
    pub(crate) async fn require_account(&self, key: &AccountKey) -> Result<(), LedgerError> {
        match self.account_store.find_account(key).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(LedgerError::AccountNotFound {
                key: key.to_string(),
            }),
            Err(e) => Err(LedgerError::AccountStore(e.to_string())),
        }
    }
}
