//! Parsing and ordering of pre-printed receipt codes

use serde::{Deserialize, Serialize};

use crate::types::{ReceiptError, ReceiptResult};

/// A receipt code split into its numeric block and letter suffix.
///
/// Codes order lexicographically on `(base, letter)`; the derived `Ord`
/// provides exactly that through field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParsedCode {
    /// Numeric block printed before the letter
    pub base: u64,
    /// Uppercase suffix letter, 'A'..='Z'
    pub letter: char,
}

impl ParsedCode {
    /// Split a receipt code into its numeric block and letter suffix.
    ///
    /// Accepts one or more digits followed by exactly one uppercase
    /// letter. Anything else is rejected, which lets the grouping pass
    /// exclude the record rather than fail.
    pub fn parse(code: &str) -> ReceiptResult<Self> {
        let letter = match code.chars().last() {
            Some(c) if c.is_ascii_uppercase() => c,
            _ => return Err(ReceiptError::InvalidCode(code.to_string())),
        };
        let digits = &code[..code.len() - 1];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ReceiptError::InvalidCode(code.to_string()));
        }
        let base = digits
            .parse::<u64>()
            .map_err(|_| ReceiptError::InvalidCode(code.to_string()))?;
        Ok(Self { base, letter })
    }

    /// Whether this code extends a run that currently ends at `prev`.
    ///
    /// A run continues through the next letter within a block and rolls
    /// over from `<n>Z` to `<n+1>A`.
    pub fn follows(&self, prev: &ParsedCode) -> bool {
        if self.base == prev.base {
            return prev.letter as u8 + 1 == self.letter as u8;
        }
        if prev.letter == 'Z' && self.letter == 'A' && prev.base.checked_add(1) == Some(self.base) {
            return true;
        }
        // Historical quirk: the 'A' code of the block below also counts as
        // adjacent. Unreachable once a bucket is sorted ascending.
        self.letter == 'A' && self.base.checked_add(1) == Some(prev.base)
    }
}
