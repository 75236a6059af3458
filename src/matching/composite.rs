// src/matching/composite.rs

use log::debug;

use crate::matching::address::score_address_match;
use crate::matching::location::score_location_context;
use crate::matching::name::score_name_match;
use crate::matching::quality::score_data_quality;
use crate::models::{Candidate, NormalizedAddress, NormalizedName};
use crate::utils::constants::{WEIGHTS_WITHOUT_ADDRESS, WEIGHTS_WITH_ADDRESS};

/// Composite 0-100 match confidence for one candidate.
///
/// A candidate without a phone is unusable for enrichment and scores exactly
/// 0 regardless of how well everything else matches. When the target has no
/// address the weights shift toward the name and the candidate's own
/// geographic context.
///
/// The name score is fed in unclamped, so an agreeing middle initial can push
/// the composite slightly past 100. That overshoot is load-bearing for group
/// ranking and must not be normalized away.
pub fn score_candidate(
    target_name: &NormalizedName,
    target_addr: &NormalizedAddress,
    candidate: &Candidate,
) -> f64 {
    if candidate.phone.is_empty() {
        return 0.0;
    }

    let has_target_address = !target_addr.raw.trim().is_empty();
    let weights = if has_target_address {
        WEIGHTS_WITH_ADDRESS
    } else {
        WEIGHTS_WITHOUT_ADDRESS
    };

    let name_score = score_name_match(target_name, &candidate.name);
    let addr_score = score_address_match(target_addr, &candidate.known_addresses());
    let location_score = score_location_context(&candidate.raw_text);
    let quality_score = score_data_quality(candidate);

    let total = name_score * weights.name
        + addr_score * weights.address
        + location_score * weights.location
        + quality_score * weights.quality;
    let max = 100.0 * weights.total();

    let composite = if max > 0.0 { total / max * 100.0 } else { 0.0 };
    debug!(
        "scored candidate '{}': name={:.1} addr={:.1} loc={:.1} quality={:.1} -> {:.1}",
        candidate.name, name_score, addr_score, location_score, quality_score, composite
    );
    composite
}
