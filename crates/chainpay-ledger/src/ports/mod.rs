//! # Port Traits
//!
//! Inbound (driving) API and outbound (driven) SPI of the ledger.

pub mod inbound;
pub mod outbound;

pub use inbound::LedgerApi;
pub use outbound::{AccountKey, AccountStore, BlockStore, Clock, TransferOp, TransferOutcome};
