//! # Error Types
//!
//! Defines the error taxonomy used across the ledger crates.
//!
//! Transaction-processing errors are returned synchronously to the caller;
//! chain-integrity failures are monitoring events surfaced outside the
//! request path.

use thiserror::Error;

/// Errors surfaced by the ledger service to its callers.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// The transaction record failed field validation.
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    /// Payload serialization for hashing failed. Fatal to the single
    /// operation, not retried.
    #[error("Hash computation failed: {0}")]
    HashComputation(String),

    /// Sender or receiver could not be resolved. Raised before either
    /// balance is touched.
    #[error("Account not found: {key}")]
    AccountNotFound { key: String },

    /// The durable write failed (or timed out) after the in-memory append
    /// succeeded. The in-memory chain is ahead of the store until the next
    /// bootstrap replay; it is not rolled back.
    #[error("Block persistence failed: {0}")]
    Persistence(String),

    /// The account store rejected or failed the balance mutation.
    #[error("Account store error: {0}")]
    AccountStore(String),

    /// The chain failed the integrity check.
    #[error(transparent)]
    ChainIntegrity(#[from] ChainIntegrityError),

    /// A thread panicked while holding the chain lock.
    #[error("Chain lock poisoned")]
    LockPoisoned,
}

/// Chain integrity violations detected by the full-chain check.
///
/// Each variant names the link or field that failed re-verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainIntegrityError {
    /// The first block claims the genesis nonce but does not equal the
    /// canonical genesis block.
    #[error("Genesis mismatch: chain root differs from the canonical genesis block")]
    GenesisMismatch,

    /// A block's previousHash does not equal its predecessor's hash.
    #[error("Broken link at nonce {nonce}: previousHash does not match predecessor")]
    BrokenLink { nonce: u64 },

    /// A block's stored hash does not match the digest recomputed from its
    /// own timestamp, previousHash, and payload.
    #[error("Hash mismatch at nonce {nonce}: stored hash does not match recomputed digest")]
    HashMismatch { nonce: u64 },

    /// A block's validator tag does not match the predecessor's recomputed
    /// digest.
    #[error("Validator mismatch at nonce {nonce}: tag does not match predecessor digest")]
    ValidatorMismatch { nonce: u64 },

    /// Sequence numbers are not strictly increasing by one.
    #[error("Nonce gap: expected {expected}, got {actual}")]
    NonceGap { expected: u64, actual: u64 },
}

/// Errors produced by outbound-port implementations (block and account
/// stores). The service maps these onto [`LedgerError`] variants.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing store failed.
    #[error("Store backend error: {0}")]
    Backend(String),

    /// A referenced account does not exist in the store.
    #[error("Account missing: {key}")]
    AccountMissing { key: String },

    /// A thread panicked while holding a store lock.
    #[error("Store lock poisoned")]
    LockPoisoned,
}
