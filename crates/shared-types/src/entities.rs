//! # Core Domain Entities
//!
//! Defines the entities shared between the ledger core and the runtime.
//!
//! ## Clusters
//!
//! - **Payments**: `TransactionRecord`, `FraudClass`
//! - **Accounts**: `Account` (referenced by the ledger, owned by the
//!   account store)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fraud classification tag attached to a transaction by the upstream
/// risk classifier. The ledger carries it verbatim; the wire strings match
/// the classifier's output labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FraudClass {
    /// No fraud indicators.
    #[serde(rename = "VALID TRANSACTION")]
    Valid,
    /// Credit/debit card fraud suspected.
    #[serde(rename = "C/D CARD FRAUD PROBABLE")]
    CardFraud,
    /// Sender or receiver profile flagged as risky.
    #[serde(rename = "RISKY PROFILE")]
    RiskyProfile,
    /// Structuring pattern detected.
    #[serde(rename = "PROBABLE SMURFING")]
    Smurfing,
    /// Money laundering pattern detected.
    #[serde(rename = "PROBABLE MONEY LAUNDERING")]
    MoneyLaundering,
}

impl FraudClass {
    /// Whether this classification should feed the fraud counters.
    pub fn is_flagged(&self) -> bool {
        !matches!(self, FraudClass::Valid)
    }
}

/// A money-transfer record as produced by the transaction intake layer.
///
/// The ledger treats this as opaque payload: it is serialized and hashed
/// into a block but never interpreted beyond the party/amount fields the
/// balance bridge needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Upstream transaction identifier.
    pub reference: Uuid,
    /// Internal identifier of the sending user (fraud-path lookup key).
    pub user_id: String,
    /// Internal identifier of the receiving user (fraud-path lookup key).
    pub receiver_id: String,
    /// Sender's account number (normal-path lookup key).
    pub sender_account: u64,
    /// Receiver's account number (normal-path lookup key).
    pub receiver_account: u64,
    /// Transfer amount in minor currency units.
    pub amount: u64,
    /// ISO currency code of the payment, if supplied upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_currency: Option<String>,
    /// Merchant descriptor, uninterpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    /// Sender bank location, uninterpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_location: Option<String>,
    /// Receiver bank location, uninterpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_location: Option<String>,
    /// Risk score assigned by the external classifier.
    pub risk_score: f64,
    /// Fraud classification assigned by the external classifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraud_class: Option<FraudClass>,
    /// Record creation time upstream, in ms since the Unix epoch.
    pub timestamp: u64,
}

impl TransactionRecord {
    /// Validate the fields the bridge depends on before any ledger or
    /// balance effect.
    pub fn validate(&self) -> Result<(), String> {
        if self.amount == 0 {
            return Err("amount must be greater than zero".into());
        }
        if self.sender_account == 0 || self.receiver_account == 0 {
            return Err("account numbers must be non-zero".into());
        }
        if self.sender_account == self.receiver_account {
            return Err("sender and receiver accounts must differ".into());
        }
        if self.user_id.is_empty() || self.receiver_id.is_empty() {
            return Err("party identifiers must be non-empty".into());
        }
        Ok(())
    }

    /// Whether the upstream classifier flagged this record.
    pub fn is_fraud_flagged(&self) -> bool {
        self.fraud_class.map(|c| c.is_flagged()).unwrap_or(false)
    }
}

/// A user account as held by the external account store.
///
/// The ledger references accounts by number (normal path) or user id
/// (fraud path) and mutates `balance` / `fraud_count` through the
/// account-store port; it never owns the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Internal user identifier.
    pub user_id: String,
    /// Bank account number.
    pub account_number: u64,
    /// Current balance in minor currency units. May go negative: the
    /// intake layer applies no overdraft floor and neither does the bridge.
    pub balance: i64,
    /// Number of fraud-flagged transactions this account participated in.
    pub fraud_count: u32,
}

impl Account {
    /// Create an account with the given identifiers and opening balance.
    pub fn new(user_id: impl Into<String>, account_number: u64, balance: i64) -> Self {
        Self {
            user_id: user_id.into(),
            account_number,
            balance,
            fraud_count: 0,
        }
    }
}
