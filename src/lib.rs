// src/lib.rs
//
// Candidate disambiguation core for borrower phone enrichment. Given a
// target name/address from county mortgage records and a batch of scraped
// person-profile candidates, normalize both sides, score each candidate
// along weighted dimensions, cluster candidates into inferred persons, and
// select the phone numbers of the two most likely matches.
//
// The surrounding plumbing (HTTP fetching, HTML parsing, CSV pipeline,
// caching) lives outside this crate; everything here is synchronous, pure,
// and total over its inputs.

pub mod grouping;
pub mod matching;
pub mod models;
pub mod normalize;
pub mod utils;

pub use grouping::{ranked_matches, select_top_two_groups_phones};
pub use matching::score_candidate;
pub use models::{Candidate, EnrichmentRequest, PhoneSelection, RankedCandidate};
pub use normalize::{normalize_address, normalize_name, normalize_phone};

/// Run one full enrichment pass: normalize the target, select phones from
/// the candidate batch, and annotate the matching candidates with their
/// ranks.
pub fn enrich(request: &EnrichmentRequest) -> (PhoneSelection, Vec<RankedCandidate>) {
    let target_name = normalize_name(&request.target_name);
    let target_addr = normalize_address(&request.target_address);

    let selection = select_top_two_groups_phones(&request.candidates, &target_name, &target_addr);
    let matches = ranked_matches(&request.candidates, &selection);

    (selection, matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_enrichment() {
        let request = EnrichmentRequest {
            target_name: "GARCIA MARIA".to_string(),
            target_address: "456 OCEAN DR MIAMI FL".to_string(),
            candidates: vec![
                Candidate {
                    name: "MARIA GARCIA".to_string(),
                    address: "456 OCEAN DR MIAMI FL 33139".to_string(),
                    phone: "(305) 555-1234".to_string(),
                    all_phones: vec!["(305) 555-1234".to_string()],
                    ..Default::default()
                },
                Candidate {
                    name: "MARIA GARCIA".to_string(),
                    address: "789 ELSEWHERE ST".to_string(),
                    phone: "(305) 555-5678".to_string(),
                    all_phones: vec!["(305) 555-5678".to_string()],
                    ..Default::default()
                },
            ],
        };

        let (selection, matches) = enrich(&request);

        // Both candidates share a person key, so the single merged group
        // yields both phones, address-matched candidate first.
        assert_eq!(selection.phone1, "(305) 555-1234");
        assert_eq!(selection.phone2, "(305) 555-5678");
        assert_eq!(selection.phone3, "");
        assert_eq!(selection.phone4, "");

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].rank, 1);
        assert_eq!(matches[1].rank, 2);
    }

    #[test]
    fn test_enrichment_with_no_candidates() {
        let request = EnrichmentRequest {
            target_name: "GARCIA MARIA".to_string(),
            target_address: String::new(),
            candidates: Vec::new(),
        };
        let (selection, matches) = enrich(&request);
        assert!(selection.is_empty());
        assert!(matches.is_empty());
    }
}
