//! # ChainPay Test Suite
//!
//! Integration tests exercising the full bridge flow and concurrency
//! property tests for ledger growth and balance conservation.

pub mod common;
pub mod integration;
