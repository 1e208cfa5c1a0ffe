//! Amount-in-words conversion example

use bigdecimal::BigDecimal;
use quittance_core::{amount_in_words, spelled_amount, DEFAULT_CURRENCY};

fn main() {
    println!("🧾 Quittance Core - Somme en Lettres Example\n");

    let samples = [0, 21, 80, 81, 100, 200, 1000, 1984, 1_000_000];
    for value in samples {
        println!(
            "  {:>9} → {}",
            value,
            amount_in_words(&BigDecimal::from(value), DEFAULT_CURRENCY)
        );
    }

    println!("\n  String inputs with thousands groups:");
    for raw in ["12 500", "1 000 000", "brouillon"] {
        println!("  {:>9} → {}", raw, spelled_amount(raw, DEFAULT_CURRENCY));
    }
}
