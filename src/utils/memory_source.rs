//! In-memory payment source for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::PaymentSource;
use crate::types::{ReceiptRecord, ReceiptResult};

/// In-memory payment source for tests and examples
#[derive(Debug, Clone)]
pub struct MemorySource {
    sessions: Arc<RwLock<HashMap<String, Vec<ReceiptRecord>>>>,
}

impl MemorySource {
    /// Create a new empty source
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Record a settled payment against a session
    pub fn record_payment(&self, session_id: &str, record: ReceiptRecord) {
        self.sessions
            .write()
            .unwrap()
            .entry(session_id.to_string())
            .or_default()
            .push(record);
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.sessions.write().unwrap().clear();
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentSource for MemorySource {
    async fn session_payments(&self, session_id: &str) -> ReceiptResult<Vec<ReceiptRecord>> {
        // A session with no recorded payments is an empty report, not an error
        Ok(self
            .sessions
            .read()
            .unwrap()
            .get(session_id)
            .cloned()
            .unwrap_or_default())
    }
}
