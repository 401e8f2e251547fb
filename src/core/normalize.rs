// src/core/normalize.rs
use any_ascii::any_ascii;

/// Lookup key of a raw first name: the name in Unicode lower case.
#[inline]
#[must_use]
pub fn name_key(raw_name: &str) -> String {
    raw_name.to_lowercase()
}

/// Base-Latin spelling of `key`, or `None` when it is already plain ASCII.
///
/// The result is lower-cased again since a few transliterations yield capitals.
#[must_use]
pub fn transliterate(key: &str) -> Option<String> {
    if key.is_ascii() {
        return None;
    }
    let ascii = any_ascii(key).to_lowercase();
    (ascii != key).then_some(ascii)
}
