//! Field cleaners for noisy recognized cell text.

use super::patterns::{
    DIGITS, DOSAGE_UNIT, FREQUENCY_UNIT, NON_DIGIT, PARENTHESIZED, WHITESPACE,
};

/// Strip parenthesized notes and digits from a drug name.
///
/// `"[정]0012 타이레놀"` becomes `"[정] 타이레놀"`.
pub fn clean_name(raw: &str) -> String {
    let without_notes = PARENTHESIZED.replace_all(raw, "");
    DIGITS.replace_all(&without_notes, "").trim().to_string()
}

/// Drop the unit suffix and render the quantity in cc.
///
/// Every dosage is displayed in cc whatever unit was printed, so a tablet
/// count `"3 정"` becomes `"3 cc"`.
pub fn clean_dosage(raw: &str) -> String {
    let quantity = DOSAGE_UNIT.replace_all(raw, "");
    format!("{} cc", quantity.trim())
}

/// Squeeze out whitespace and express unit counts as "번" (times).
pub fn clean_frequency(raw: &str) -> String {
    let squeezed = WHITESPACE.replace_all(raw, "");
    FREQUENCY_UNIT.replace_all(&squeezed, "번").into_owned()
}

/// Keep only the digits of the day count, defaulting to one day.
pub fn clean_duration(raw: &str) -> String {
    let days = NON_DIGIT.replace_all(raw, "");
    if days.is_empty() {
        "1".to_string()
    } else {
        days.into_owned()
    }
}

pub fn clean_method(raw: &str) -> String {
    raw.trim().to_string()
}

/// Whether a cleaned name belongs to a medication row.
///
/// Drug rows carry a bracketed form marker like `[정]` or a leading code;
/// section separators and notes that land in the name column do not.
pub fn is_medication_name(name: &str) -> bool {
    name.starts_with('[') || name.starts_with(|c: char| c.is_ascii_digit())
}
