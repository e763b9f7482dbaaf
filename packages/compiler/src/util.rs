//! Utility Functions
//!
//! Name-case conversions used when turning tag names into component names.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::chars;

/// Regex for the upper case letters dasherize rewrites
static UPPER_CASE_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());

/// Convert a camel/Pascal case identifier to dash-case.
///
/// Each ASCII upper case letter is lower-cased, with a `-` in front of it
/// unless it starts the string or follows a non-letter (`@`, `.`, `-`, ...).
pub fn dasherize(input: &str) -> String {
    UPPER_CASE_REGEXP
        .replace_all(input, |caps: &Captures| {
            let matched = &caps[0];
            let start = caps.get(0).map_or(0, |m| m.start());
            let follows_letter = input[..start]
                .chars()
                .next_back()
                .is_some_and(chars::is_ascii_letter);

            if follows_letter {
                format!("{}{}", chars::MINUS, matched.to_ascii_lowercase())
            } else {
                matched.to_ascii_lowercase()
            }
        })
        .into_owned()
}
