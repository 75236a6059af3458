// src/matching/address.rs

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::models::NormalizedAddress;
use crate::normalize::normalize_address;
use crate::utils::constants::STREET_STOPWORDS_LOWER;

static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Score the target address against every known address of a candidate,
/// 0-100. A person who has lived at several places matches if any one of
/// them matches well; the best pairwise score wins and is clamped to 100.
pub fn score_address_match(target: &NormalizedAddress, candidate_addresses: &[&str]) -> f64 {
    if candidate_addresses.is_empty() {
        return 0.0;
    }

    let mut best: f64 = 0.0;
    for addr_text in candidate_addresses {
        if addr_text.is_empty() {
            continue;
        }
        let cand = normalize_address(addr_text);
        best = best.max(calculate_address_similarity(target, &cand));
    }

    best.min(100.0)
}

/// Additive pairwise similarity between two normalized addresses.
///
/// The token-recall term is measured against the target's tokens, so this is
/// intentionally directional: the target is the ground-truth record and a
/// candidate address carrying extra tokens (unit, ZIP) should not be
/// penalized. The sum is left unclamped here; the caller clamps after taking
/// the max over a candidate's addresses.
pub fn calculate_address_similarity(target: &NormalizedAddress, cand: &NormalizedAddress) -> f64 {
    let mut score = 0.0;

    // Street number is the strongest single signal.
    if !target.street_num.is_empty() && target.street_num == cand.street_num {
        score += 50.0;
    }

    if !target.street_name.is_empty() && !cand.street_name.is_empty() {
        if target.street_name == cand.street_name {
            score += 30.0;
        } else {
            let t = target.street_name.to_lowercase();
            let c = cand.street_name.to_lowercase();
            if t.contains(&c) || c.contains(&t) {
                score += 20.0;
            }
        }
    }

    // Token recall against the target.
    if !target.tokens.is_empty() {
        let common = target.tokens.intersection(&cand.tokens).count();
        score += (common as f64 / target.tokens.len() as f64) * 30.0;
    }

    score + calculate_partial_matches(target, cand)
}

/// Weak-signal bonuses: any shared digit run between the street numbers
/// (unit-number noise like "123" vs "123-A") and shared meaningful words
/// outside the street-type stoplist.
fn calculate_partial_matches(target: &NormalizedAddress, cand: &NormalizedAddress) -> f64 {
    let mut score = 0.0;

    if !target.street_num.is_empty() && !cand.street_num.is_empty() {
        let target_nums: HashSet<&str> = DIGIT_RUN_RE
            .find_iter(&target.street_num)
            .map(|m| m.as_str())
            .collect();
        let cand_nums: HashSet<&str> = DIGIT_RUN_RE
            .find_iter(&cand.street_num)
            .map(|m| m.as_str())
            .collect();
        if target_nums.intersection(&cand_nums).next().is_some() {
            score += 25.0;
        }
    }

    let meaningful = |tokens: &HashSet<String>| -> HashSet<String> {
        tokens
            .iter()
            .filter(|t| t.chars().count() > 2)
            .map(|t| t.to_lowercase())
            .filter(|t| !STREET_STOPWORDS_LOWER.contains(t.as_str()))
            .collect()
    };
    let common_words = meaningful(&target.tokens)
        .intersection(&meaningful(&cand.tokens))
        .count();
    score += (common_words as f64 * 10.0).min(25.0);

    score
}
