//! # Hash-Linked Chain
//!
//! The ordered, append-only sequence of blocks plus the full-window
//! integrity check.
//!
//! The chain is a working window over a durable append log owned by the
//! block store: it may be seeded with the most recent page of history
//! rather than the full chain back to genesis. The integrity check anchors
//! on the canonical genesis block only when the window actually starts
//! there; otherwise the window's first block is trusted and linkage is
//! verified from it.

use shared_types::{ChainIntegrityError, LedgerError, TransactionRecord};

use super::block::Block;

/// Ordered sequence of hash-linked blocks. Never empty: an empty seed
/// collapses to `[genesis]`.
#[derive(Debug, Clone)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Adopt a replayed window (oldest first) verbatim, or start a fresh
    /// chain from genesis when the seed is empty.
    pub fn from_seed(seed: Vec<Block>) -> Self {
        if seed.is_empty() {
            Self {
                blocks: vec![Block::genesis()],
            }
        } else {
            Self { blocks: seed }
        }
    }

    /// The newest block.
    pub fn tip(&self) -> &Block {
        self.blocks.last().expect("chain is never empty")
    }

    /// Number of blocks in the window, genesis or anchor included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// A non-empty chain is an invariant; this only exists for symmetry.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All blocks in the window, oldest first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Append a new block carrying `record`, stamped with `now_ms`.
    ///
    /// Read-tip, build, push is a critical section: callers must hold
    /// exclusive access across the whole call.
    pub fn append(
        &mut self,
        record: TransactionRecord,
        now_ms: u64,
    ) -> Result<&Block, LedgerError> {
        let block = Block::next(self.tip(), record, now_ms)?;
        self.blocks.push(block);
        Ok(self.tip())
    }

    /// Full-window integrity check.
    ///
    /// Every block's stored hash must equal the digest recomputed from its
    /// own timestamp, previousHash, and payload; every adjacent pair must
    /// be hash-linked with consecutive nonces and a validator tag matching
    /// the predecessor's recomputed digest. A window rooted at genesis must
    /// additionally start with the canonical genesis block.
    pub fn verify(&self) -> Result<(), LedgerError> {
        let first = &self.blocks[0];
        if first.claims_genesis() {
            if *first != Block::genesis() {
                return Err(ChainIntegrityError::GenesisMismatch.into());
            }
        } else if first.hash != first.recomputed_digest()? {
            // Truncated window: the anchor is trusted for linkage but must
            // still be self-consistent.
            return Err(ChainIntegrityError::HashMismatch { nonce: first.nonce }.into());
        }

        for pair in self.blocks.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            if cur.nonce != prev.nonce + 1 {
                return Err(ChainIntegrityError::NonceGap {
                    expected: prev.nonce + 1,
                    actual: cur.nonce,
                }
                .into());
            }
            if cur.previous_hash != prev.hash {
                return Err(ChainIntegrityError::BrokenLink { nonce: cur.nonce }.into());
            }
            if cur.hash != cur.recomputed_digest()? {
                return Err(ChainIntegrityError::HashMismatch { nonce: cur.nonce }.into());
            }
            if cur.validator != prev.recomputed_digest()? {
                return Err(ChainIntegrityError::ValidatorMismatch { nonce: cur.nonce }.into());
            }
        }
        Ok(())
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::from_seed(Vec::new())
    }
}
