//! Draft transaction types produced by the transcript parser

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Confidence reported when a nonzero amount was extracted from the text.
pub const CONFIDENCE_AMOUNT_FOUND: f64 = 0.9;
/// Confidence reported when no numeric amount could be located.
pub const CONFIDENCE_NO_AMOUNT: f64 = 0.6;

/// Direction of money movement, as classified from the transcript
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl TransactionKind {
    /// Category used when no keyword in the rule table matched
    pub fn default_category(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Other Income",
            TransactionKind::Expense => "Other",
        }
    }

    /// Description used when the transcript reduces to an empty string
    pub fn default_description(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income from voice input",
            TransactionKind::Expense => "Expense from voice input",
        }
    }
}

/// A structured transaction draft extracted from one voice transcript.
///
/// Every field is always populated: unparseable content degrades to the
/// documented defaults (amount 0, expense kind, per-kind fallback category
/// and description) rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    /// Non-negative, at most 2 fractional digits as extracted; 0 when no
    /// amount was found in the text
    pub amount: f64,
    /// Label from the fixed category vocabulary
    pub category: String,
    /// Human-readable description derived from the transcript, never empty
    pub description: String,
    /// Income or expense (wire name "type")
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Calendar date stamped by the caller's injected clock (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Extraction trust signal in [0,1]; not a calibrated probability
    pub confidence: f64,
}

impl TransactionDraft {
    /// Returns true if this draft was classified as income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Returns true if this draft was classified as an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Confidence for a draft given the extracted amount
pub fn confidence_for_amount(amount: f64) -> f64 {
    if amount > 0.0 {
        CONFIDENCE_AMOUNT_FOUND
    } else {
        CONFIDENCE_NO_AMOUNT
    }
}
