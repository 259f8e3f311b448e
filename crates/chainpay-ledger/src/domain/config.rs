//! # Ledger Configuration

use std::time::Duration;

/// Tunables for the ledger service.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// How many of the newest persisted blocks to replay into the
    /// in-memory window at bootstrap (default: 25).
    pub replay_window: usize,

    /// Upper bound on a single durable block write (default: 5s). A write
    /// that exceeds this is reported as a persistence failure; the
    /// in-memory chain is left ahead of the store and reconciles on the
    /// next bootstrap.
    pub persist_timeout: Duration,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            replay_window: 25,
            persist_timeout: Duration::from_secs(5),
        }
    }
}
