// src/grouping/mod.rs
//
// Clusters scored candidates into inferred real-world persons and picks the
// phone numbers of the two most likely ones. Groups are keyed by normalized
// name and live only for the duration of one selection call.

use log::debug;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::matching::score_candidate;
use crate::models::{
    Candidate, NormalizedAddress, NormalizedName, PhoneSelection, RankedCandidate,
};
use crate::normalize::{normalize_name, normalize_phone};

/// Ranking boost for a group containing a candidate whose middle initial
/// agrees with the target's. Applied at sort time only, never stored.
const MIDDLE_MATCH_RANK_BOOST: f64 = 15.0;

/// Transient cluster of candidates believed to be the same person.
struct PersonGroup {
    best_score: f64,
    members: Vec<Candidate>,
}

/// Derive the grouping key for a candidate: `FIRST LAST`, suffixed with the
/// middle initial when one was cleanly detected so that "WARREN J SPENCER"
/// and "WARREN L SPENCER" stay separate persons. Candidates without any name
/// fall back to their phone string.
fn build_person_key(candidate: &Candidate) -> String {
    let norm = normalize_name(&candidate.name);
    if norm.first.is_empty() && norm.last.is_empty() {
        return candidate.phone.clone();
    }

    let mut first = norm.first.trim().to_uppercase();
    let last = norm.last.trim().to_uppercase();

    // A stray trailing initial inside the first-name field ("RAFAEL P")
    // belongs to the middle name, not the key base.
    let first_parts: Vec<&str> = first.split_whitespace().collect();
    if first_parts.len() > 1 && first_parts.last().map_or(false, |p| p.chars().count() == 1) {
        first = first_parts[..first_parts.len() - 1].join(" ");
    }

    let base_key = format!("{} {}", first, last).trim().to_string();

    if !norm.has_middle {
        return base_key;
    }
    if norm.middle_initial.chars().count() == 1 {
        return format!("{} {}", base_key, norm.middle_initial);
    }
    // A multi-letter middle without a clean initial groups with the base.
    base_key
}

/// Collect up to `max_phones` unique canonical phones from a group, walking
/// members in insertion order and preferring each member's full phone list.
/// Numbers that fail canonicalization are dropped silently.
fn collect_group_phones(
    members: &[Candidate],
    max_phones: usize,
    exclude: &HashSet<String>,
) -> Vec<String> {
    let mut phones = Vec::new();
    let mut seen: HashSet<String> = exclude.clone();

    for candidate in members {
        for number in candidate.known_phones() {
            if let Some(norm) = normalize_phone(number) {
                if seen.insert(norm.clone()) {
                    phones.push(norm);
                    if phones.len() >= max_phones {
                        return phones;
                    }
                }
            }
        }
    }

    phones
}

/// Does any member of the group carry the target's middle initial?
fn group_has_middle_match(members: &[Candidate], target_middle: &str) -> bool {
    members.iter().any(|c| {
        let norm = normalize_name(&c.name);
        norm.has_middle && norm.middle_initial == target_middle
    })
}

/// From a flat candidate batch, choose up to two best person-groups and
/// return up to four phones: two from the best group, two more from the
/// runner-up (excluding anything already picked). There is no fallback to a
/// third group.
pub fn select_top_two_groups_phones(
    candidates: &[Candidate],
    target_name: &NormalizedName,
    target_addr: &NormalizedAddress,
) -> PhoneSelection {
    if candidates.is_empty() {
        return PhoneSelection::default();
    }

    // Group by person key, keeping first-seen group order for stable
    // tie-breaking.
    let mut groups: HashMap<String, PersonGroup> = HashMap::new();
    let mut key_order: Vec<String> = Vec::new();
    for candidate in candidates {
        let score = score_candidate(target_name, target_addr, candidate);
        let key = build_person_key(candidate);
        match groups.entry(key.clone()) {
            Entry::Occupied(mut entry) => {
                let group = entry.get_mut();
                group.best_score = group.best_score.max(score);
                group.members.push(candidate.clone());
            }
            Entry::Vacant(entry) => {
                entry.insert(PersonGroup {
                    best_score: score,
                    members: vec![candidate.clone()],
                });
                key_order.push(key);
            }
        }
    }

    // Rank groups by best score, nudging groups whose middle initial agrees
    // with the target's. The boost only affects ordering.
    let target_middle = if target_name.middle_initial.is_empty() {
        None
    } else {
        Some(target_name.middle_initial.as_str())
    };
    let mut ranked: Vec<&PersonGroup> = key_order.iter().map(|k| &groups[k]).collect();
    let adjusted = |group: &PersonGroup| -> f64 {
        let boost = match target_middle {
            Some(middle) if group_has_middle_match(&group.members, middle) => {
                MIDDLE_MATCH_RANK_BOOST
            }
            _ => 0.0,
        };
        group.best_score + boost
    };
    ranked.sort_by(|a, b| {
        adjusted(b)
            .partial_cmp(&adjusted(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        "built {} person groups from {} candidates",
        ranked.len(),
        candidates.len()
    );

    let mut selection = PhoneSelection::default();

    let first_phones = collect_group_phones(&ranked[0].members, 2, &HashSet::new());
    selection.phone1 = first_phones.first().cloned().unwrap_or_default();
    selection.phone2 = first_phones.get(1).cloned().unwrap_or_default();

    if let Some(second_group) = ranked.get(1) {
        let exclude: HashSet<String> = first_phones.into_iter().collect();
        let second_phones = collect_group_phones(&second_group.members, 2, &exclude);
        selection.phone3 = second_phones.first().cloned().unwrap_or_default();
        selection.phone4 = second_phones.get(1).cloned().unwrap_or_default();
    }

    selection
}

/// Filter the batch down to the candidates whose phone made the selection,
/// tagged with the slot (1-4) it filled. Diagnostic view for the enclosing
/// tool; not needed for the selection itself.
pub fn ranked_matches(candidates: &[Candidate], selection: &PhoneSelection) -> Vec<RankedCandidate> {
    let mut matches: Vec<RankedCandidate> = candidates
        .iter()
        .filter_map(|candidate| {
            let normalized = normalize_phone(&candidate.phone)?;
            let rank = selection.rank_of(&normalized)?;
            Some(RankedCandidate {
                rank,
                candidate: candidate.clone(),
            })
        })
        .collect();
    matches.sort_by_key(|m| m.rank);
    matches
}
