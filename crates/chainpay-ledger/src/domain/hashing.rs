//! # Chain Digest Primitive
//!
//! Deterministic SHA-256 digest over `(timestamp, previousHash, payload)`.
//!
//! Each input part is prefixed with its byte length before hashing, so two
//! different field splits can never produce the same digest input. The
//! payload is canonicalized with serde_json before hashing; field order is
//! fixed by the struct declaration.

use sha2::{Digest, Sha256};
use shared_types::{LedgerError, TransactionRecord};

/// Canonical byte encoding of an empty payload list.
pub const EMPTY_PAYLOAD: &[u8] = b"[]";

/// SHA-256 over length-prefixed parts, as lowercase hex.
pub fn digest_parts(parts: &[&[u8]]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update((part.len() as u64).to_le_bytes());
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}

/// Canonical payload bytes for hashing.
pub fn payload_bytes(records: &[TransactionRecord]) -> Result<Vec<u8>, LedgerError> {
    serde_json::to_vec(records).map_err(|e| LedgerError::HashComputation(e.to_string()))
}

/// The chain digest: SHA-256 over `(timestamp, previousHash, payload)`.
pub fn chain_digest(timestamp_ms: u64, previous_hash: &str, payload: &[u8]) -> String {
    digest_parts(&[
        &timestamp_ms.to_le_bytes(),
        previous_hash.as_bytes(),
        payload,
    ])
}
