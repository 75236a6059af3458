// src/matching/location.rs

use crate::utils::constants::MIAMI_ZIP_CODES;

/// Score the candidate's own profile text for Miami/Florida signals, 0-100.
/// Independent of the target: a profile that talks about Miami is more likely
/// to be the borrower from a Miami-Dade filing than one that does not.
/// Missing text is neutral (50), never penalized.
pub fn score_location_context(raw_text: &str) -> f64 {
    if raw_text.is_empty() {
        return 50.0;
    }

    let upper = raw_text.to_uppercase();
    let mut score: f64 = 50.0;

    if upper.contains("MIAMI") {
        score += 30.0;
    } else if upper.contains("FL") || upper.contains("FLORIDA") {
        score += 20.0;
    }

    if MIAMI_ZIP_CODES.iter().any(|zip| upper.contains(zip)) {
        score += 25.0;
    }

    score.min(100.0)
}
