//! Traits for payment-data access abstraction

use async_trait::async_trait;

use crate::types::{ReceiptRecord, ReceiptResult};

/// Access to the payments backend that holds a session's receipt history.
///
/// The dashboard talks to a remote payments API; this trait lets the
/// reporting engine work against any backend (HTTP client, in-memory
/// fixture, etc.) by implementing a single fetch method.
#[async_trait]
pub trait PaymentSource: Send + Sync {
    /// Fetch all settled payments recorded for a market session
    async fn session_payments(&self, session_id: &str) -> ReceiptResult<Vec<ReceiptRecord>>;
}
