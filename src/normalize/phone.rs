// src/normalize/phone.rs

use std::collections::HashSet;

use crate::utils::constants::PHONE_PATTERNS;

/// Canonicalize a phone number to `(XXX) XXX-XXXX`.
///
/// Anything that does not reduce to exactly ten digits is rejected: this is a
/// US-only pipeline and seven-digit or country-coded numbers are not usable
/// for dedup keys.
pub fn normalize_phone(phone: &str) -> Option<String> {
    if phone.is_empty() {
        return None;
    }

    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 {
        return None;
    }

    Some(format!(
        "({}) {}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..]
    ))
}

/// Pull every recognizable US phone number out of a text blob.
///
/// Each layout pattern is applied in turn and every hit is canonicalized;
/// duplicates are dropped, keeping first-seen order.
pub fn extract_phones_from_text(text: &str) -> Vec<String> {
    let mut phones = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for pattern in PHONE_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let joined: String = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str())
                .collect();
            if let Some(normalized) = normalize_phone(&joined) {
                if seen.insert(normalized.clone()) {
                    phones.push(normalized);
                }
            }
        }
    }

    phones
}
