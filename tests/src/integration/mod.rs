//! # Integration Tests

pub mod concurrency;
pub mod transfer_flows;
