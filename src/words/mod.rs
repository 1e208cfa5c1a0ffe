//! Amount-in-words rendering ("somme en lettres") for printed receipts

pub mod french;

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};

pub use french::integer_to_words;

/// Fixed sentinel returned for input that is not a usable amount
pub const INVALID_AMOUNT: &str = "Montant invalide";

/// Currency name used when the caller does not inject one
pub const DEFAULT_CURRENCY: &str = "Dirhams";

/// Spell out an amount in French, capitalized and suffixed with the
/// currency name.
///
/// Negative amounts yield [`INVALID_AMOUNT`]; an amount of exactly zero
/// yields `"Zéro <currency>"`. Only the integer part is spelled out; the
/// fraction is truncated, never rounded up.
pub fn amount_in_words(amount: &BigDecimal, currency: &str) -> String {
    if *amount < BigDecimal::from(0) {
        return INVALID_AMOUNT.to_string();
    }
    if *amount == BigDecimal::from(0) {
        return format!("Zéro {}", currency);
    }

    let integral = amount.with_scale_round(0, RoundingMode::Down);
    match integral.to_u64() {
        Some(value) => format!("{} {}", capitalize(&french::integer_to_words(value)), currency),
        None => INVALID_AMOUNT.to_string(),
    }
}

/// String entry point for amounts formatted with space-separated
/// thousands groups (e.g. `"12 500"`).
///
/// All whitespace is stripped and the remainder parsed as a decimal
/// number before conversion. Unparseable input yields
/// [`INVALID_AMOUNT`]; the function never fails.
pub fn spelled_amount(raw: &str, currency: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    match cleaned.parse::<BigDecimal>() {
        Ok(amount) => amount_in_words(&amount, currency),
        Err(_) => INVALID_AMOUNT.to_string(),
    }
}

/// Uppercase only the first character of the assembled phrase.
fn capitalize(words: &str) -> String {
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_conversion_is_deterministic() {
        let amount = BigDecimal::from(1984);
        assert_eq!(
            amount_in_words(&amount, DEFAULT_CURRENCY),
            amount_in_words(&amount, DEFAULT_CURRENCY)
        );
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(
            amount_in_words(&BigDecimal::from(0), DEFAULT_CURRENCY),
            "Zéro Dirhams"
        );
        assert_eq!(spelled_amount("0", DEFAULT_CURRENCY), "Zéro Dirhams");
    }

    #[test]
    fn test_negative_amount_is_invalid() {
        assert_eq!(
            amount_in_words(&BigDecimal::from(-5), DEFAULT_CURRENCY),
            INVALID_AMOUNT
        );
        assert_eq!(spelled_amount("-5", DEFAULT_CURRENCY), INVALID_AMOUNT);
    }

    #[test]
    fn test_non_numeric_input_is_invalid() {
        assert_eq!(spelled_amount("abc", DEFAULT_CURRENCY), INVALID_AMOUNT);
        assert_eq!(spelled_amount("", DEFAULT_CURRENCY), INVALID_AMOUNT);
        assert_eq!(spelled_amount("12,5", DEFAULT_CURRENCY), INVALID_AMOUNT);
    }

    #[test]
    fn test_first_letter_is_capitalized() {
        assert_eq!(
            amount_in_words(&BigDecimal::from(21), DEFAULT_CURRENCY),
            "Vingt et un Dirhams"
        );
        assert_eq!(
            amount_in_words(&BigDecimal::from(200), DEFAULT_CURRENCY),
            "Deux cents Dirhams"
        );
        assert_eq!(
            amount_in_words(&BigDecimal::from(1000), DEFAULT_CURRENCY),
            "Mille Dirhams"
        );
    }

    #[test]
    fn test_thousands_groups_in_string_input() {
        assert_eq!(
            spelled_amount("12 500", DEFAULT_CURRENCY),
            "Douze mille cinq cents Dirhams"
        );
        assert_eq!(
            spelled_amount("1 000 000", DEFAULT_CURRENCY),
            "Un million Dirhams"
        );
    }

    #[test]
    fn test_fraction_is_truncated() {
        let amount = BigDecimal::from_str("10.9").unwrap();
        assert_eq!(amount_in_words(&amount, DEFAULT_CURRENCY), "Dix Dirhams");
    }

    #[test]
    fn test_currency_name_is_injectable() {
        assert_eq!(
            amount_in_words(&BigDecimal::from(80), "Francs"),
            "Quatre-vingts Francs"
        );
        assert_eq!(amount_in_words(&BigDecimal::from(0), "Francs"), "Zéro Francs");
    }
}
