//! Session collection report example

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use quittance_core::utils::MemorySource;
use quittance_core::{ReceiptRecord, Reporter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Quittance Core - Session Report Example\n");

    // Seed an in-memory backend with one market session's collections
    let source = MemorySource::new();
    let session_id = "2024-03-14-central";

    println!("💰 Recording settled payments...");
    for code in ["100A", "100B", "100C", "100D", "100E"] {
        source.record_payment(session_id, ReceiptRecord::new(code, BigDecimal::from(10)));
    }
    for code in ["205A", "205B"] {
        source.record_payment(session_id, ReceiptRecord::new(code, BigDecimal::from(25)));
    }
    source.record_payment(
        session_id,
        ReceiptRecord::new("207A", BigDecimal::from(25)).with_payer("A. Benali"),
    );
    println!("  ✓ 8 receipts recorded\n");

    // Build the audit report the PDF layer would lay out
    let reporter = Reporter::new(source);
    let report = reporter
        .session_report(
            session_id,
            "Marché central",
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
        )
        .await?;

    println!("📊 Collection report - {}", report.market_name);
    println!("  Session: {} ({})", report.session_id, report.session_date);
    println!("  {:<12} {:>6} {:>12} {:>12}", "Range", "Count", "Unit", "Subtotal");
    for range in &report.ranges {
        println!(
            "  {:<12} {:>6} {:>12} {:>12}",
            range.label, range.count, range.unit_amount, range.total_amount
        );
    }
    println!("\n  Receipts: {}", report.receipt_count);
    println!("  Grand total: {}", report.grand_total);
    println!("  In words: {}", report.grand_total_in_words);

    Ok(())
}
