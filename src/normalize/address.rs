// src/normalize/address.rs

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::models::NormalizedAddress;
use crate::utils::constants::COMMON_STREET_WORDS;

static STREET_NUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d+)\b").unwrap());

/// Parse a free-text address into comparable pieces.
///
/// Tokenization keeps `#` (unit markers) and alphanumerics, drops everything
/// of length <= 1, and loses order on purpose: comparisons downstream are
/// set- and substring-based. The street number is the first bare digit run,
/// which for well-formed addresses is the civic number.
pub fn normalize_address(addr: &str) -> NormalizedAddress {
    let trimmed = addr.trim();
    if trimmed.is_empty() {
        return NormalizedAddress::default();
    }

    let cleaned: String = trimmed
        .to_uppercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '#' {
                c
            } else {
                ' '
            }
        })
        .collect();

    let tokens: HashSet<String> = cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .map(str::to_string)
        .collect();

    let street_num = STREET_NUM_RE
        .captures(&cleaned)
        .map(|c| c[1].to_string())
        .unwrap_or_default();

    let mut street_tokens: Vec<&String> = tokens
        .iter()
        .filter(|t| !COMMON_STREET_WORDS.contains(&t.as_str()) && **t != street_num)
        .collect();
    street_tokens.sort();
    let street_name = street_tokens
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    NormalizedAddress {
        raw: trimmed.to_string(),
        tokens,
        street_num,
        street_name,
    }
}

static ADDRESS_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b\d{1,5}\s+[A-Z]",
        r"\b(ST|AVE|AVENUE|BLVD|BOULEVARD|DR|DRIVE|RD|ROAD|CT|COURT|LN|LANE|PL|PLACE|WAY)\b",
        r"\b(STREET|DRIVE|ROAD|COURT|LANE|PLACE)\b",
        r"\bFL\b|\bFLORIDA\b|\bMIAMI\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Cheap classifier for whether a text fragment looks like a street address.
pub fn is_likely_address(text: &str) -> bool {
    if text.is_empty() || text.len() > 100 {
        return false;
    }

    // A street number is the minimum requirement.
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    let upper = text.to_uppercase();
    ADDRESS_INDICATORS.iter().any(|p| p.is_match(&upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_independent_street_name() {
        let a = normalize_address("123 MAIN ST");
        let b = normalize_address("MAIN ST 123");
        assert_eq!(a.street_name, "MAIN");
        assert_eq!(a.street_name, b.street_name);
        assert_eq!(a.street_num, "123");
        assert_eq!(b.street_num, "123");
    }

    #[test]
    fn test_tokens_drop_short_and_keep_numbers() {
        let a = normalize_address("456 Ocean Dr, Miami FL 33139");
        assert!(a.tokens.contains("456"));
        assert!(a.tokens.contains("OCEAN"));
        assert!(a.tokens.contains("MIAMI"));
        assert!(a.tokens.contains("FL"));
        assert!(a.tokens.contains("33139"));
        // "DR" survives tokenization but is excluded from the street name.
        assert!(a.tokens.contains("DR"));
        assert_eq!(a.street_name, "33139 FL MIAMI OCEAN");
    }

    #[test]
    fn test_street_num_is_first_digit_run() {
        // "4B" is not a bare digit run, so the unit number is skipped.
        let a = normalize_address("APT 4B 123 MAIN ST");
        assert_eq!(a.street_num, "123");
        let b = normalize_address("UNIT 7 123 MAIN ST");
        // The first bare run wins even when it is not the civic number.
        assert_eq!(b.street_num, "7");
    }

    #[test]
    fn test_unit_marker_kept() {
        let a = normalize_address("123 MAIN ST #12");
        assert!(a.tokens.contains("#12"));
    }

    #[test]
    fn test_empty_address() {
        let a = normalize_address("   ");
        assert_eq!(a.raw, "");
        assert!(a.tokens.is_empty());
        assert_eq!(a.street_num, "");
        assert_eq!(a.street_name, "");
    }

    #[test]
    fn test_is_likely_address() {
        assert!(is_likely_address("123 Main St"));
        assert!(is_likely_address("456 Ocean Drive, Miami FL"));
        assert!(!is_likely_address("Maria Garcia")); // no digits
        assert!(!is_likely_address(""));
    }
}
