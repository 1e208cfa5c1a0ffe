//! French cardinal numerals

/// Direct lookups for 0–19; hyphens appear only inside these fixed names
const UNITS: [&str; 20] = [
    "zéro",
    "un",
    "deux",
    "trois",
    "quatre",
    "cinq",
    "six",
    "sept",
    "huit",
    "neuf",
    "dix",
    "onze",
    "douze",
    "treize",
    "quatorze",
    "quinze",
    "seize",
    "dix-sept",
    "dix-huit",
    "dix-neuf",
];

/// Tens words indexed by the tens digit. 70–79 and 90–99 have no word of
/// their own and reuse the sixty and eighty entries.
const TENS: [&str; 10] = [
    "",
    "dix",
    "vingt",
    "trente",
    "quarante",
    "cinquante",
    "soixante",
    "soixante",
    "quatre-vingt",
    "quatre-vingt",
];

fn under_hundred(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        return UNITS[n as usize].to_string();
    }
    let ten = (n / 10) as usize;
    let unit = n % 10;
    match ten {
        // Vigesimal irregularity: 70–79 and 90–99 count on from 60 and 80
        7 => format!("{} {}", TENS[7], UNITS[(n - 60) as usize]),
        9 => format!("{} {}", TENS[9], UNITS[(n - 80) as usize]),
        // The one tens word that takes a final "s", and only when bare
        8 if unit == 0 => format!("{}s", TENS[8]),
        _ if unit == 1 => format!("{} et un", TENS[ten]),
        _ if unit == 0 => TENS[ten].to_string(),
        _ => format!("{} {}", TENS[ten], UNITS[unit as usize]),
    }
}

fn under_thousand(n: u64) -> String {
    debug_assert!(n < 1000);
    let hundreds = n / 100;
    let rest = n % 100;
    if hundreds == 0 {
        return under_hundred(rest);
    }
    // "cent" agrees only when it closes its group: several hundreds and
    // nothing after
    let cent = if hundreds > 1 && rest == 0 { "cents" } else { "cent" };
    let head = if hundreds == 1 {
        cent.to_string()
    } else {
        format!("{} {}", UNITS[hundreds as usize], cent)
    };
    if rest == 0 {
        head
    } else {
        format!("{} {}", head, under_hundred(rest))
    }
}

/// Spell out a non-negative integer in French.
///
/// The number is decomposed into billions, millions, thousands and a
/// 0–999 remainder; each group is converted on its own and joined with
/// its scale word. "mille" never pluralizes and never takes a leading
/// "un"; "milliard" and "million" stay singular only for a group of
/// exactly one.
pub fn integer_to_words(n: u64) -> String {
    if n == 0 {
        return UNITS[0].to_string();
    }

    let billions = n / 1_000_000_000;
    let millions = (n / 1_000_000) % 1_000;
    let thousands = (n / 1_000) % 1_000;
    let rest = n % 1_000;

    let mut parts = Vec::new();
    if billions > 0 {
        let scale = if billions == 1 { "milliard" } else { "milliards" };
        parts.push(format!("{} {}", integer_to_words(billions), scale));
    }
    if millions > 0 {
        let scale = if millions == 1 { "million" } else { "millions" };
        parts.push(format!("{} {}", under_thousand(millions), scale));
    }
    if thousands == 1 {
        parts.push("mille".to_string());
    } else if thousands > 1 {
        parts.push(format!("{} mille", under_thousand(thousands)));
    }
    if rest > 0 {
        parts.push(under_thousand(rest));
    }

    parts.join(" ")
}
