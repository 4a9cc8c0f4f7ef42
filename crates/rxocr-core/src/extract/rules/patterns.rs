//! Common regex patterns for prescription field cleaning.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Product codes and counts embedded in names
    pub static ref DIGITS: Regex = Regex::new(r"[0-9]").unwrap();

    // Parenthesized notes, e.g. strength "(10mg)"
    pub static ref PARENTHESIZED: Regex = Regex::new(r"\([^)]*\)").unwrap();

    // Unit suffix after a quantity: "2 cc", "1 정"
    pub static ref DOSAGE_UNIT: Regex = Regex::new(r" (?:cc|gm|개|정)").unwrap();

    // Unit token once whitespace has been squeezed out: "3정"
    pub static ref FREQUENCY_UNIT: Regex = Regex::new(r"(?:cc|gm|개|정)").unwrap();

    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    pub static ref NON_DIGIT: Regex = Regex::new(r"[^0-9]").unwrap();
}
