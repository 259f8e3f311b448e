//! # Shared Types Crate
//!
//! Domain entities and error types shared across the ChainPay crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-crate types are defined here, once.
//! - **Opaque payloads**: the ledger hashes a [`TransactionRecord`] without
//!   interpreting its classifier fields; only the bridge reads the party
//!   and amount fields.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
