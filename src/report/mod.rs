//! Assembly of the data structures handed to the document collaborators
//!
//! The PDF/Excel layers are outside this crate; they receive these plain
//! structs and only lay them out.

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::grouping::group_receipts;
use crate::traits::PaymentSource;
use crate::types::{GroupedRange, ReceiptRecord, ReceiptResult};
use crate::utils::validation::{validate_amount, validate_session_id};
use crate::words::{amount_in_words, DEFAULT_CURRENCY};

/// Tabular audit report for one market session's collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Identifier of this generated document
    pub id: Uuid,
    /// Session the report covers
    pub session_id: String,
    /// Market the session was held on
    pub market_name: String,
    /// Day of the session
    pub session_date: NaiveDate,
    /// Compressed receipt ranges, one table row each
    pub ranges: Vec<GroupedRange>,
    /// Number of receipts covered by the ranges
    pub receipt_count: u32,
    /// Sum of all range totals
    pub grand_total: BigDecimal,
    /// Grand total spelled out in French
    pub grand_total_in_words: String,
    /// When the report was generated
    pub generated_at: NaiveDateTime,
}

impl SessionReport {
    /// Build a session report from the session's receipt records.
    pub fn build(
        session_id: impl Into<String>,
        market_name: impl Into<String>,
        session_date: NaiveDate,
        records: &[ReceiptRecord],
        currency: &str,
    ) -> Self {
        let ranges = group_receipts(records);
        let receipt_count = ranges.iter().map(|r| r.count).sum();
        let grand_total: BigDecimal = ranges.iter().map(|r| &r.total_amount).sum();
        let grand_total_in_words = amount_in_words(&grand_total, currency);

        Self {
            id: Uuid::new_v4(),
            session_id: session_id.into(),
            market_name: market_name.into(),
            session_date,
            ranges,
            receipt_count,
            grand_total,
            grand_total_in_words,
            generated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Data for one printable payment receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptDocument {
    /// Identifier of this generated document
    pub id: Uuid,
    /// Code printed on the paper receipt
    pub receipt_code: String,
    /// Payer named on the receipt, when known
    pub payer: Option<String>,
    /// Day of the session the payment belongs to
    pub session_date: NaiveDate,
    /// Amount collected
    pub amount: BigDecimal,
    /// "Somme en lettres" line, embedded verbatim by the renderer
    pub amount_in_words: String,
    /// When the document was generated
    pub issued_at: NaiveDateTime,
}

impl ReceiptDocument {
    /// Build the printable document for one settled payment.
    pub fn for_record(record: &ReceiptRecord, session_date: NaiveDate, currency: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            receipt_code: record.code.clone(),
            payer: record.payer.clone(),
            session_date,
            amount: record.amount.clone(),
            amount_in_words: amount_in_words(&record.amount, currency),
            issued_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Builds reports and receipt documents on top of a payments backend
pub struct Reporter<S: PaymentSource> {
    source: S,
    currency: String,
}

impl<S: PaymentSource> Reporter<S> {
    /// Create a reporter over the given source with the default currency
    pub fn new(source: S) -> Self {
        Self::with_currency(source, DEFAULT_CURRENCY)
    }

    /// Create a reporter that renders amounts in the given currency
    pub fn with_currency(source: S, currency: impl Into<String>) -> Self {
        Self {
            source,
            currency: currency.into(),
        }
    }

    /// Build the collection report for one session.
    ///
    /// Record amounts are validated before grouping; amounts must be
    /// non-negative.
    pub async fn session_report(
        &self,
        session_id: &str,
        market_name: &str,
        session_date: NaiveDate,
    ) -> ReceiptResult<SessionReport> {
        validate_session_id(session_id)?;

        let records = self.source.session_payments(session_id).await?;
        for record in &records {
            validate_amount(&record.amount)?;
        }

        Ok(SessionReport::build(
            session_id,
            market_name,
            session_date,
            &records,
            &self.currency,
        ))
    }

    /// Build one printable receipt document per settled payment.
    pub async fn receipt_documents(
        &self,
        session_id: &str,
        session_date: NaiveDate,
    ) -> ReceiptResult<Vec<ReceiptDocument>> {
        validate_session_id(session_id)?;

        let records = self.source.session_payments(session_id).await?;
        for record in &records {
            validate_amount(&record.amount)?;
        }

        Ok(records
            .iter()
            .map(|record| ReceiptDocument::for_record(record, session_date, &self.currency))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_source::MemorySource;

    fn record(code: &str, amount: i64) -> ReceiptRecord {
        ReceiptRecord::new(code, BigDecimal::from(amount))
    }

    fn session_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    #[test]
    fn test_build_computes_totals_and_words() {
        let records = [record("1A", 100), record("1B", 100), record("4C", 250)];
        let report =
            SessionReport::build("s-1", "Marché central", session_date(), &records, "Dirhams");

        assert_eq!(report.ranges.len(), 2);
        assert_eq!(report.receipt_count, 3);
        assert_eq!(report.grand_total, BigDecimal::from(450));
        assert_eq!(
            report.grand_total_in_words,
            "Quatre cent cinquante Dirhams"
        );
    }

    #[test]
    fn test_build_with_no_records_is_a_zero_report() {
        let report = SessionReport::build("s-1", "Marché central", session_date(), &[], "Dirhams");

        assert!(report.ranges.is_empty());
        assert_eq!(report.receipt_count, 0);
        assert_eq!(report.grand_total, BigDecimal::from(0));
        assert_eq!(report.grand_total_in_words, "Zéro Dirhams");
    }

    #[tokio::test]
    async fn test_reporter_builds_report_from_source() {
        let source = MemorySource::new();
        source.record_payment("s-1", record("10A", 100));
        source.record_payment("s-1", record("10B", 100));

        let reporter = Reporter::new(source);
        let report = reporter
            .session_report("s-1", "Marché central", session_date())
            .await
            .unwrap();

        assert_eq!(report.ranges.len(), 1);
        assert_eq!(report.ranges[0].label, "10A-10B");
        assert_eq!(report.grand_total, BigDecimal::from(200));
    }

    #[tokio::test]
    async fn test_reporter_rejects_negative_amounts() {
        let source = MemorySource::new();
        source.record_payment("s-1", record("10A", -5));

        let reporter = Reporter::new(source);
        let result = reporter
            .session_report("s-1", "Marché central", session_date())
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_receipt_documents_carry_amount_in_words() {
        let source = MemorySource::new();
        source.record_payment("s-1", record("10A", 81).with_payer("A. Benali"));

        let reporter = Reporter::new(source);
        let documents = reporter
            .receipt_documents("s-1", session_date())
            .await
            .unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].receipt_code, "10A");
        assert_eq!(documents[0].payer.as_deref(), Some("A. Benali"));
        assert_eq!(documents[0].amount_in_words, "Quatre-vingt et un Dirhams");
    }
}
