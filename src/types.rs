//! Core types and data structures for the receipt reporting engine

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single settled receipt as returned by the payments backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    /// Pre-printed receipt code, expected as digits followed by one uppercase letter (e.g. "100A")
    pub code: String,
    /// Amount collected for this receipt, in whole currency units
    pub amount: BigDecimal,
    /// Name of the payer, when the backend provides one
    pub payer: Option<String>,
    /// Additional metadata
    pub metadata: HashMap<String, String>,
}

impl ReceiptRecord {
    /// Create a new receipt record
    pub fn new(code: impl Into<String>, amount: BigDecimal) -> Self {
        Self {
            code: code.into(),
            amount,
            payer: None,
            metadata: HashMap::new(),
        }
    }

    /// Attach the payer name to the record
    pub fn with_payer(mut self, payer: impl Into<String>) -> Self {
        self.payer = Some(payer.into());
        self
    }
}

/// One row of the printed collection report: a compressed run of
/// consecutive receipt codes sharing a unit amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedRange {
    /// Single code for a run of one, otherwise "<first>-<last>"
    pub label: String,
    /// Number of receipts covered by the run
    pub count: u32,
    /// Amount of each receipt in the run
    pub unit_amount: BigDecimal,
    /// Exactly `unit_amount * count`
    pub total_amount: BigDecimal,
}

/// Errors that can occur in the receipt engine
#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("Source error: {0}")]
    Source(String),
    #[error("Invalid receipt code: {0}")]
    InvalidCode(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for receipt engine operations
pub type ReceiptResult<T> = Result<T, ReceiptError>;
