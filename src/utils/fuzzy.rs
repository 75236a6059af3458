// src/utils/fuzzy.rs
//
// Token-set similarity on the 0-100 scale. This reproduces the classic
// fuzzywuzzy `token_set_ratio` construction on top of strsim: both strings
// are split into word sets, and the comparison is driven by the shared
// intersection so that word order and repeated words do not matter.

use std::collections::BTreeSet;
use strsim::normalized_levenshtein;

fn word_set(s: &str) -> BTreeSet<String> {
    s.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn join_nonempty(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.to_string(),
        (_, true) => a.to_string(),
        _ => format!("{} {}", a, b),
    }
}

fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    normalized_levenshtein(a, b) * 100.0
}

/// Order-independent word-overlap similarity between two strings, 0-100.
///
/// The shared words of both strings form a sorted "section"; the score is the
/// best of section-vs-section+remainder comparisons, so a string that fully
/// contains the other's words scores 100 regardless of ordering.
pub fn token_set_ratio(s1: &str, s2: &str) -> f64 {
    let t1 = word_set(s1);
    let t2 = word_set(s2);
    if t1.is_empty() && t2.is_empty() {
        return 0.0;
    }

    let intersection: Vec<String> = t1.intersection(&t2).cloned().collect();
    let diff1: Vec<String> = t1.difference(&t2).cloned().collect();
    let diff2: Vec<String> = t2.difference(&t1).cloned().collect();

    let sect = intersection.join(" ");
    let combined1 = join_nonempty(&sect, &diff1.join(" "));
    let combined2 = join_nonempty(&sect, &diff2.join(" "));

    ratio(&sect, &combined1)
        .max(ratio(&sect, &combined2))
        .max(ratio(&combined1, &combined2))
}
