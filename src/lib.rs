//! # Quittance Core
//!
//! The text engine behind municipal market receipt reporting: compresses
//! flat lists of pre-numbered receipt (quittance) codes into printable
//! ranges, and spells amounts out in French for the legally required
//! "somme en lettres" line.
//!
//! ## Features
//!
//! - **Sequence grouping**: collapse per-transaction receipt codes into
//!   `"100A-100D"` style ranges, bucketed by unit amount, with exact
//!   subtotals
//! - **Amount localization**: French cardinal numerals with the
//!   vigesimal 70–99 forms and the `cent`/`cents` agreement rule
//! - **Report assembly**: plain data structures (session report, receipt
//!   document) ready for a PDF/Excel collaborator to lay out
//! - **Source abstraction**: backend-agnostic design with a trait-based
//!   payment source
//!
//! ## Quick Start
//!
//! ```rust
//! use quittance_core::{group_receipts, spelled_amount, ReceiptRecord, DEFAULT_CURRENCY};
//! use bigdecimal::BigDecimal;
//!
//! let records = vec![
//!     ReceiptRecord::new("100A", BigDecimal::from(10)),
//!     ReceiptRecord::new("100B", BigDecimal::from(10)),
//! ];
//! let ranges = group_receipts(&records);
//! assert_eq!(ranges[0].label, "100A-100B");
//!
//! assert_eq!(spelled_amount("21", DEFAULT_CURRENCY), "Vingt et un Dirhams");
//! ```

pub mod grouping;
pub mod report;
pub mod traits;
pub mod types;
pub mod utils;
pub mod words;

// Re-export commonly used types
pub use grouping::*;
pub use report::*;
pub use traits::*;
pub use types::*;
pub use words::{amount_in_words, spelled_amount, DEFAULT_CURRENCY, INVALID_AMOUNT};
