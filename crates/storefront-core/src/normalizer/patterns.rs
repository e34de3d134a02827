use regex::Regex;
use std::sync::OnceLock;

static LETTER_DIGIT_REGEX: OnceLock<Regex> = OnceLock::new();
static DIGIT_LETTER_REGEX: OnceLock<Regex> = OnceLock::new();
static CAMEL_CASE_REGEX: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();

fn letter_digit_regex() -> &'static Regex {
    LETTER_DIGIT_REGEX
        .get_or_init(|| Regex::new(r"([A-Za-z])([0-9])").expect("Letter-digit regex is valid"))
}

fn digit_letter_regex() -> &'static Regex {
    DIGIT_LETTER_REGEX
        .get_or_init(|| Regex::new(r"([0-9])([A-Za-z])").expect("Digit-letter regex is valid"))
}

fn camel_case_regex() -> &'static Regex {
    // Two lowercase letters before the capital keep `iPhone` / `iPad` / `eBay` intact.
    CAMEL_CASE_REGEX
        .get_or_init(|| Regex::new(r"([a-z]{2})([A-Z])").expect("Camel-case regex is valid"))
}

fn whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").expect("Whitespace regex is valid"))
}

/// Boundary splitting, whitespace collapsing and lowercasing.
///
/// `iPhoneAir13pro` → `iphone air 13 pro`
pub(super) fn split_boundaries(raw: &str) -> String {
    let spaced = split_letter_digit(raw);
    let spaced = camel_case_regex().replace_all(&spaced, "$1 $2");
    // Lowercasing can turn non-ASCII letters into ASCII ones (`\u{212A}` → `k`),
    // so the letter/digit pass runs again on the lowercased text.
    let lowered = spaced.to_lowercase();
    collapse_whitespace(&split_letter_digit(&lowered))
}

fn split_letter_digit(s: &str) -> String {
    let spaced = letter_digit_regex().replace_all(s, "$1 $2");
    digit_letter_regex().replace_all(&spaced, "$1 $2").into_owned()
}

pub(super) fn collapse_whitespace(s: &str) -> String {
    whitespace_regex().replace_all(s, " ").trim().to_string()
}
