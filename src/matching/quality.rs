// src/matching/quality.rs

use crate::models::Candidate;
use crate::utils::constants::CANONICAL_PHONE_RE;

/// Score the completeness and formatting of the candidate record itself,
/// 0-100. A fully populated record with a canonically formatted phone tops
/// out at exactly 100 (40 + 30 + 30), so no clamp is needed.
pub fn score_data_quality(candidate: &Candidate) -> f64 {
    let mut score = 0.0;

    if !candidate.name.is_empty() {
        score += 40.0;
    }

    // Only the primary address field counts here; the multi-address list is
    // the address scorer's concern.
    if !candidate.address.is_empty() {
        score += 30.0;
    }

    if !candidate.phone.is_empty() {
        if CANONICAL_PHONE_RE.is_match(&candidate.phone) {
            score += 30.0;
        } else {
            score += 20.0;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, address: &str, phone: &str) -> Candidate {
        Candidate {
            name: name.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_record_scores_100() {
        let c = candidate("MARIA GARCIA", "456 OCEAN DR", "(305) 555-1234");
        assert_eq!(score_data_quality(&c), 100.0);
    }

    #[test]
    fn test_unformatted_phone_scores_lower() {
        let c = candidate("MARIA GARCIA", "456 OCEAN DR", "305-555-1234");
        assert_eq!(score_data_quality(&c), 90.0);
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(score_data_quality(&candidate("", "", "")), 0.0);
        assert_eq!(score_data_quality(&candidate("MARIA", "", "")), 40.0);
        assert_eq!(score_data_quality(&candidate("", "456 OCEAN DR", "")), 30.0);
        assert_eq!(
            score_data_quality(&candidate("", "", "(305) 555-1234")),
            30.0
        );
    }
}
