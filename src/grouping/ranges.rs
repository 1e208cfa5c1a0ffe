//! Compression of flat receipt lists into printable ranges

use std::collections::BTreeMap;

use bigdecimal::BigDecimal;

use crate::grouping::code::ParsedCode;
use crate::types::{GroupedRange, ReceiptRecord};

/// Compress per-receipt codes into ranges of consecutive codes, grouped
/// by unit amount.
///
/// Records whose code does not parse contribute to no range; only
/// properly coded receipts can be compressed into a reportable run.
/// Output is ordered by unit amount ascending, then by code order within
/// each amount. Ranges never span two different unit amounts.
pub fn group_receipts(records: &[ReceiptRecord]) -> Vec<GroupedRange> {
    let mut buckets: BTreeMap<BigDecimal, Vec<(ParsedCode, &str)>> = BTreeMap::new();
    for record in records {
        if let Ok(parsed) = ParsedCode::parse(&record.code) {
            buckets
                .entry(record.amount.clone())
                .or_default()
                .push((parsed, record.code.as_str()));
        }
    }

    let mut ranges = Vec::new();
    for (amount, mut coded) in buckets {
        // Stable sort keeps first-seen order for duplicate codes
        coded.sort_by(|a, b| a.0.cmp(&b.0));

        let mut run_start = 0;
        for i in 1..coded.len() {
            if !coded[i].0.follows(&coded[i - 1].0) {
                ranges.push(close_run(&coded[run_start..i], &amount));
                run_start = i;
            }
        }
        if !coded.is_empty() {
            ranges.push(close_run(&coded[run_start..], &amount));
        }
    }

    ranges
}

/// Emit the report row for one maximal run of consecutive codes.
///
/// Labels use the original code strings, so leading zeros survive as
/// printed on the paper receipts.
fn close_run(run: &[(ParsedCode, &str)], unit_amount: &BigDecimal) -> GroupedRange {
    let label = if run.len() == 1 {
        run[0].1.to_string()
    } else {
        format!("{}-{}", run[0].1, run[run.len() - 1].1)
    };
    let count = run.len() as u32;

    GroupedRange {
        label,
        count,
        unit_amount: unit_amount.clone(),
        total_amount: unit_amount * BigDecimal::from(count),
    }
}
