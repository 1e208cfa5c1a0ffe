//! Validation utilities

use bigdecimal::BigDecimal;

use crate::grouping::ParsedCode;
use crate::types::{ReceiptError, ReceiptResult};

/// Validate that an amount is non-negative
pub fn validate_amount(amount: &BigDecimal) -> ReceiptResult<()> {
    if *amount < BigDecimal::from(0) {
        Err(ReceiptError::Validation(
            "Amount cannot be negative".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that a receipt code has the pre-printed format, digits
/// followed by one uppercase letter
pub fn validate_receipt_code(code: &str) -> ReceiptResult<()> {
    ParsedCode::parse(code).map(|_| ())
}

/// Validate that a session identifier is usable
pub fn validate_session_id(session_id: &str) -> ReceiptResult<()> {
    if session_id.trim().is_empty() {
        return Err(ReceiptError::Validation(
            "Session ID cannot be empty".to_string(),
        ));
    }

    Ok(())
}
