//! # Adapters
//!
//! In-memory implementations of the outbound ports, used by tests and the
//! dev harness.

pub mod clock;
pub mod memory;

pub use clock::{FixedClock, SystemClock};
pub use memory::{InMemoryAccountStore, InMemoryBlockStore};
