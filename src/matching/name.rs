// src/matching/name.rs

use crate::models::NormalizedName;
use crate::normalize::normalize_name;
use crate::utils::fuzzy::token_set_ratio;

/// Bonus for an agreeing single-letter middle initial on both sides. Large
/// enough to dominate near-ties; it deliberately lets the score exceed 100,
/// and callers must not clamp before weighting.
const MIDDLE_INITIAL_BONUS: f64 = 30.0;

/// Score how well a candidate's display name matches the target, 0-100
/// (unbounded above 100 when the middle-initial bonus applies).
pub fn score_name_match(target: &NormalizedName, candidate_name: &str) -> f64 {
    if candidate_name.is_empty() {
        return 0.0;
    }

    let cand = normalize_name(candidate_name);

    // Exact first and last is a definitive hit.
    if !target.first.is_empty()
        && !target.last.is_empty()
        && target.first == cand.first
        && target.last == cand.last
    {
        return 100.0;
    }

    // Same last name with a matching first-name stem covers nicknames and
    // truncations (JON / JONATHAN).
    if !target.last.is_empty()
        && target.last == cand.last
        && !target.first.is_empty()
        && !cand.first.is_empty()
    {
        let stem: String = target.first.chars().take(3).collect();
        if cand.first.starts_with(&stem) {
            return 95.0;
        }
    }

    let middle_bonus = if target.has_middle_initial()
        && cand.has_middle_initial()
        && target.middle_initial == cand.middle_initial
    {
        MIDDLE_INITIAL_BONUS
    } else {
        0.0
    };

    // Fuzzy fallback: compare both the raw display strings and the
    // reconstructed "first last" search strings, keep the better.
    let full_similarity = token_set_ratio(&target.full, &cand.full);
    let search_similarity = token_set_ratio(&target.search_name(), &cand.search_name());

    full_similarity.max(search_similarity) + middle_bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_across_orders() {
        // "SMITH JOHN" (county order) normalizes to first=JOHN last=SMITH.
        let target = normalize_name("SMITH JOHN");
        assert_eq!(target.first, "JOHN");
        assert_eq!(score_name_match(&target, "SMITH JOHN"), 100.0);
    }

    #[test]
    fn test_empty_candidate_scores_zero() {
        let target = normalize_name("SMITH JOHN");
        assert_eq!(score_name_match(&target, ""), 0.0);
    }

    #[test]
    fn test_first_name_stem_match() {
        let target = normalize_name("SMITH JONATHAN");
        // Candidate "SMITH JON": same last, first shares the 3-char stem.
        assert_eq!(score_name_match(&target, "SMITH JON"), 95.0);
    }

    #[test]
    fn test_natural_order_candidate_hits_fuzzy_path() {
        let target = normalize_name("GARCIA MARIA");
        // "MARIA GARCIA" parses as first=GARCIA last=MARIA under the county
        // convention, so the exact branch misses, but the token-set ratio on
        // the search strings is 100.
        assert_eq!(score_name_match(&target, "MARIA GARCIA"), 100.0);
    }

    #[test]
    fn test_middle_initial_bonus_can_exceed_100() {
        let target = normalize_name("SPENCER WARREN J");
        let score = score_name_match(&target, "SPENCE WARREN J");
        assert!(score > 100.0, "got {}", score);
    }

    #[test]
    fn test_differing_middle_initials_get_no_bonus() {
        let target = normalize_name("SPENCER WARREN J");
        let with_l = score_name_match(&target, "SPENCE WARREN L");
        let with_j = score_name_match(&target, "SPENCE WARREN J");
        assert!(with_j > with_l);
        assert!(with_l <= 100.0);
    }

    #[test]
    fn test_unrelated_names_score_low() {
        let target = normalize_name("SMITH JOHN");
        assert!(score_name_match(&target, "RODRIGUEZ CARLA") < 50.0);
    }
}
