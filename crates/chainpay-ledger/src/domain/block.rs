//! # Block Entity
//!
//! An immutable record of one transaction payload plus linkage metadata.
//!
//! The serialized form matches the persisted ledger document:
//! `{ timestamp, transactions, previousHash, hash, validator, nonce,
//! signature: null }`.

use serde::{Deserialize, Serialize};
use shared_types::{LedgerError, TransactionRecord};

use super::hashing::{chain_digest, payload_bytes, EMPTY_PAYLOAD};

/// Sequence number of the genesis block.
pub const GENESIS_NONCE: u64 = 1;

/// Fixed genesis timestamp (ms since epoch). Genesis is fully
/// deterministic so the chain root can be re-derived and compared.
pub const GENESIS_TIMESTAMP_MS: u64 = 0;

/// Sentinel previous-hash carried by the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "genesis hash";

/// Sentinel validator tag carried by the genesis block.
pub const GENESIS_VALIDATOR: &str = "genesis block";

/// One block of the ledger.
///
/// `hash` is the digest of this block's own `(timestamp, previousHash,
/// payload)`. `validator` is the digest of the *predecessor* recomputed
/// from the predecessor's own fields, standing in for a real attester
/// identity. `signature` is reserved and always null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Creation instant in ms since the Unix epoch, set at append time.
    pub timestamp: u64,
    /// The transaction payload. Empty for genesis, one record otherwise.
    pub transactions: Vec<TransactionRecord>,
    /// Digest of the predecessor block.
    pub previous_hash: String,
    /// Digest of this block's own timestamp, previousHash, and payload.
    pub hash: String,
    /// Recomputed digest of the predecessor (attestation stand-in).
    pub validator: String,
    /// Sequence number, strictly increasing by one from genesis.
    pub nonce: u64,
    /// Reserved; always null in the persisted document.
    pub signature: Option<String>,
}

impl Block {
    /// The canonical root block all valid chains start from.
    pub fn genesis() -> Self {
        Self {
            timestamp: GENESIS_TIMESTAMP_MS,
            transactions: Vec::new(),
            previous_hash: GENESIS_PREVIOUS_HASH.to_string(),
            // The genesis digest is taken over an empty previous-hash, not
            // the sentinel carried in the field.
            hash: chain_digest(GENESIS_TIMESTAMP_MS, "", EMPTY_PAYLOAD),
            validator: GENESIS_VALIDATOR.to_string(),
            nonce: GENESIS_NONCE,
            signature: None,
        }
    }

    /// Build the successor of `predecessor` carrying `record`.
    ///
    /// Links via the predecessor's stored hash, increments the nonce, and
    /// tags the validator with the predecessor's digest recomputed from the
    /// predecessor's own fields. A predecessor tampered in memory therefore
    /// yields a tag that no longer matches its stored hash.
    pub fn next(
        predecessor: &Block,
        record: TransactionRecord,
        now_ms: u64,
    ) -> Result<Self, LedgerError> {
        let transactions = vec![record];
        let payload = payload_bytes(&transactions)?;
        Ok(Self {
            timestamp: now_ms,
            hash: chain_digest(now_ms, &predecessor.hash, &payload),
            previous_hash: predecessor.hash.clone(),
            validator: predecessor.recomputed_digest()?,
            nonce: predecessor.nonce + 1,
            transactions,
            signature: None,
        })
    }

    /// Digest of this block recomputed from its own fields.
    ///
    /// For every non-genesis block this equals the stored `hash`; genesis
    /// is the one block whose digest was taken over an empty previous-hash
    /// rather than the stored sentinel.
    pub fn recomputed_digest(&self) -> Result<String, LedgerError> {
        let payload = payload_bytes(&self.transactions)?;
        Ok(chain_digest(self.timestamp, &self.previous_hash, &payload))
    }

    /// Whether this block claims the genesis sequence number.
    pub fn claims_genesis(&self) -> bool {
        self.nonce == GENESIS_NONCE
    }
}
