//! # ChainPay Transaction Ledger
//!
//! A hash-chained, append-only transaction ledger with a transactional
//! balance-update bridge. Blocks link by SHA-256 digest; the bridge
//! appends a block per transfer, writes it through to the durable log,
//! and moves money between the two affected accounts.
//!
//! ## Data Flow
//!
//! ```text
//! intake (external) ──record──→ LedgerService (bridge)
//!                                   │ 1. validate record
//!                                   │ 2. resolve both parties
//!                                   │ 3. append block   [chain, locked]
//!                                   │ 4. persist block  [BlockStore]
//!                                   │ 5. move balances  [AccountStore, atomic]
//!                                   ↓
//!                               appended Block
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Hash Linkage | Every block's previousHash equals its predecessor's hash |
//! | 2 | Nonce Monotonicity | Sequence numbers increase by exactly 1 from genesis |
//! | 3 | Genesis Determinism | A chain rooted at genesis starts with the canonical root block |
//! | 4 | Linearizable Append | Read-tip/build/push happens under one writer lock |
//! | 5 | Balance Conservation | Debit+credit apply as one atomic unit; money is conserved under concurrency |
//! | 6 | No Lone Debit | Both parties are resolved before either balance moves |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure ledger logic (digest, block, chain, config)
//! - `ports/` - Port traits (inbound API, outbound SPI)
//! - `service/` - Application service implementing the API
//! - `adapters/` - In-memory port implementations for tests and the dev
//!   harness
//!
//! ## Usage
//!
//! ```ignore
//! use chainpay_ledger::{LedgerApi, LedgerConfig, LedgerDependencies, LedgerService};
//! use chainpay_ledger::adapters::{InMemoryAccountStore, InMemoryBlockStore, SystemClock};
//!
//! let deps = LedgerDependencies {
//!     block_store: InMemoryBlockStore::new(),
//!     account_store: InMemoryAccountStore::new(),
//!     clock: SystemClock,
//! };
//! let service = LedgerService::bootstrap(deps, LedgerConfig::default()).await;
//!
//! let block = service.submit_transaction(record).await?;
//! service.verify_chain().await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use domain::{Block, Chain, LedgerConfig};
pub use ports::inbound::LedgerApi;
pub use ports::outbound::{
    AccountKey, AccountStore, BlockStore, Clock, TransferOp, TransferOutcome,
};
pub use service::{LedgerDependencies, LedgerService};
