//! # Domain Layer
//!
//! Pure ledger logic: the digest primitive, the block entity, the
//! hash-linked chain, and service configuration. No I/O.

pub mod block;
pub mod chain;
pub mod config;
pub mod hashing;

pub use block::{
    Block, GENESIS_NONCE, GENESIS_PREVIOUS_HASH, GENESIS_TIMESTAMP_MS, GENESIS_VALIDATOR,
};
pub use chain::Chain;
pub use config::LedgerConfig;
pub use hashing::{chain_digest, digest_parts, payload_bytes};
