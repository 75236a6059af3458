// src/normalize/name.rs
//
// Parses free-text display names into first/middle/last parts. County
// mortgage records use LAST FIRST [MIDDLE] order while scraped profiles are
// usually natural order, so a token-count dispatch with a format detector
// sits in the middle. The detector is a heuristic with no ground truth;
// misclassification of ambiguous three-token names is a known limitation.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::models::{NameVariant, NormalizedName, VariantType};
use crate::utils::constants::COMMON_FIRST_NAMES;

static COMMON_FIRST_NAME_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| COMMON_FIRST_NAMES.into_iter().collect());

/// Where a stripped single-letter token sat relative to the multi-letter
/// tokens around it. A trailing initial reads as county order
/// (`SPENCER WARREN J`), an interior one as natural order
/// (`WARREN J SPENCER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InitialPosition {
    Interior,
    Trailing,
}

/// Normalize a display name into comparable parts plus search variants.
pub fn normalize_name(name: &str) -> NormalizedName {
    let mut result = NormalizedName {
        full: name.trim().to_string(),
        ..Default::default()
    };
    if result.full.is_empty() {
        return result;
    }

    let cleaned: String = result
        .full
        .to_uppercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let raw_tokens: Vec<&str> = cleaned.split_whitespace().collect();

    // Single-letter tokens are dropped before the count-based dispatch, but
    // the first one found past the leading position is remembered as a
    // detected middle initial. Grouping and the middle-initial search variant
    // depend on it surviving.
    let mut parts: Vec<String> = Vec::new();
    let mut initial: Option<(String, InitialPosition)> = None;
    for (idx, token) in raw_tokens.iter().enumerate() {
        if token.chars().count() > 1 {
            parts.push((*token).to_string());
        } else if idx > 0 && initial.is_none() {
            let position = if idx == raw_tokens.len() - 1 {
                InitialPosition::Trailing
            } else {
                InitialPosition::Interior
            };
            initial = Some(((*token).to_string(), position));
        }
    }

    match parts.len() {
        0 => {}
        1 => {
            result.first = parts[0].clone();
        }
        2 => {
            // County convention: LAST FIRST. An interior initial flips the
            // reading to natural FIRST I LAST order.
            if matches!(initial, Some((_, InitialPosition::Interior))) {
                result.first = parts[0].clone();
                result.last = parts[1].clone();
            } else {
                result.last = parts[0].clone();
                result.first = parts[1].clone();
            }
        }
        3 => detect_name_format(&parts, &mut result),
        _ => handle_compound_name(&parts, &mut result),
    }

    // A stripped initial only fills the middle slot when the dispatch above
    // produced none; a multi-letter middle name wins.
    if result.middle.is_empty() {
        if let Some((letter, _)) = initial {
            result.middle = letter.clone();
            result.middle_initial = letter;
            result.has_middle = true;
        }
    }

    result.search_variants = generate_name_variants(&result);
    result
}

/// Three multi-letter tokens: decide between FIRST MIDDLE LAST and the county
/// default LAST FIRST MIDDLE. A recognized leading first name tips the scale;
/// otherwise the county order wins.
fn detect_name_format(parts: &[String], result: &mut NormalizedName) {
    if COMMON_FIRST_NAME_SET.contains(parts[0].as_str()) {
        result.first = parts[0].clone();
        result.middle = parts[1].clone();
        result.last = parts[2].clone();
    } else {
        result.last = parts[0].clone();
        result.first = parts[1].clone();
        result.middle = parts[2].clone();
    }
    result.has_middle = true;
    if result.middle.chars().count() == 1 {
        result.middle_initial = result.middle.clone();
    }
}

/// More than three tokens: compound surname like "ESTRADA CASTRO MARTHA".
/// Everything but the final token becomes the last name.
fn handle_compound_name(parts: &[String], result: &mut NormalizedName) {
    result.last = parts[..parts.len() - 1].join(" ");
    result.first = parts[parts.len() - 1].clone();
}

/// Build the ordered search variants: always the basic `first last`, plus a
/// middle-initial variant when a single-letter middle was detected. The
/// initial travels lowercased in its own field, never concatenated into the
/// search name.
fn generate_name_variants(name: &NormalizedName) -> Vec<NameVariant> {
    let search_name = format!("{} {}", name.first, name.last);
    let mut variants = vec![NameVariant {
        search_name: search_name.clone(),
        middle_name: String::new(),
        variant_type: VariantType::Basic,
    }];

    if name.has_middle && !name.middle_initial.is_empty() {
        variants.push(NameVariant {
            search_name,
            middle_name: name.middle_initial.to_lowercase(),
            variant_type: VariantType::MiddleInitial,
        });
    }

    variants
}

static NON_NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+",
        r"(phone|call|contact|email|@)",
        r"(street|ave|blvd|rd|dr|ct|ln)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Cheap classifier for whether a text fragment looks like a person's name.
/// Used when sifting scraped blocks that interleave names, addresses, and
/// boilerplate.
pub fn is_likely_name(text: &str) -> bool {
    if text.is_empty() || text.len() > 50 {
        return false;
    }

    let word_count = text.split_whitespace().count();
    if !(2..=4).contains(&word_count) {
        return false;
    }

    let alpha_chars = text
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .count();
    if (alpha_chars as f64) / (text.chars().count() as f64) < 0.8 {
        return false;
    }

    let lower = text.to_lowercase();
    !NON_NAME_PATTERNS.iter().any(|p| p.is_match(&lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_token_county_order() {
        let n = normalize_name("GARCIA MARIA");
        assert_eq!(n.last, "GARCIA");
        assert_eq!(n.first, "MARIA");
        assert!(!n.has_middle);
        assert_eq!(n.search_variants.len(), 1);
        assert_eq!(n.search_variants[0].search_name, "MARIA GARCIA");
        assert_eq!(n.search_variants[0].variant_type, VariantType::Basic);
    }

    #[test]
    fn test_single_token() {
        let n = normalize_name("MADONNA");
        assert_eq!(n.first, "MADONNA");
        assert_eq!(n.last, "");
    }

    #[test]
    fn test_trailing_middle_initial_county_order() {
        let n = normalize_name("SPENCER WARREN J");
        assert_eq!(n.last, "SPENCER");
        assert_eq!(n.first, "WARREN");
        assert!(n.has_middle);
        assert_eq!(n.middle_initial, "J");
        assert_eq!(n.search_variants.len(), 2);
        assert_eq!(
            n.search_variants[1].variant_type,
            VariantType::MiddleInitial
        );
        assert_eq!(n.search_variants[1].middle_name, "j");
        assert_eq!(n.search_variants[1].search_name, "WARREN SPENCER");
    }

    #[test]
    fn test_interior_initial_natural_order() {
        // "WARREN J SPENCER" and "SPENCER WARREN J" describe the same person
        // and must parse to the same parts.
        let n = normalize_name("WARREN J SPENCER");
        assert_eq!(n.first, "WARREN");
        assert_eq!(n.last, "SPENCER");
        assert_eq!(n.middle_initial, "J");
    }

    #[test]
    fn test_three_tokens_common_first_name() {
        let n = normalize_name("MARIA ELENA RODRIGUEZ");
        assert_eq!(n.first, "MARIA");
        assert_eq!(n.middle, "ELENA");
        assert_eq!(n.last, "RODRIGUEZ");
        assert!(n.has_middle);
        // Multi-letter middle is not a clean initial.
        assert_eq!(n.middle_initial, "");
        assert_eq!(n.search_variants.len(), 1);
    }

    #[test]
    fn test_jacob_recognized_as_first_name() {
        let n = normalize_name("JACOB ALLEN SMITH");
        assert_eq!(n.first, "JACOB");
        assert_eq!(n.middle, "ALLEN");
        assert_eq!(n.last, "SMITH");
    }

    #[test]
    fn test_three_tokens_default_county_order() {
        let n = normalize_name("SPENCER WARREN JACKSON");
        assert_eq!(n.last, "SPENCER");
        assert_eq!(n.first, "WARREN");
        assert_eq!(n.middle, "JACKSON");
        assert_eq!(n.middle_initial, "");
    }

    #[test]
    fn test_compound_last_name() {
        let n = normalize_name("ESTRADA CASTRO MARTHA");
        // Three tokens with an unrecognized leading token fall to county
        // order, not the compound handler.
        assert_eq!(n.last, "ESTRADA");
        assert_eq!(n.first, "CASTRO");
        let n = normalize_name("DE LA CRUZ MARIA");
        assert_eq!(n.last, "DE LA CRUZ");
        assert_eq!(n.first, "MARIA");
    }

    #[test]
    fn test_punctuation_stripped() {
        let n = normalize_name("O'BRIEN, JAMES");
        assert_eq!(n.last, "BRIEN");
        assert_eq!(n.first, "JAMES");
        assert_eq!(n.full, "O'BRIEN, JAMES");
    }

    #[test]
    fn test_empty_name() {
        let n = normalize_name("");
        assert_eq!(n.first, "");
        assert_eq!(n.full, "");
        assert!(n.search_variants.is_empty());
    }

    #[test]
    fn test_is_likely_name() {
        assert!(is_likely_name("Maria Garcia"));
        assert!(is_likely_name("Warren J Spencer"));
        assert!(!is_likely_name("Maria")); // single word
        assert!(!is_likely_name("123 Main St"));
        assert!(!is_likely_name("Call now for details"));
        assert!(!is_likely_name(""));
    }
}
