// src/models/mod.rs

pub mod normalized;

pub use normalized::{NameVariant, NormalizedAddress, NormalizedName, VariantType};

use serde::{Deserialize, Serialize};

/// One scraped person-profile record that may or may not be the target
/// borrower. Produced by the (external) HTML extraction layer; every field
/// beyond `name` is optional in the wire format and defaults to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// Every known address for the profile, primary first. Falls back to
    /// `[address]` when absent.
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub phone: String,
    /// Every phone listed on the profile. Falls back to `[phone]` when absent.
    #[serde(default)]
    pub all_phones: Vec<String>,
    /// Full visible text of the profile card, used for geographic context.
    #[serde(default)]
    pub raw_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aka: Option<Vec<String>>,
    /// Which search variant surfaced this candidate, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_variant: Option<String>,
}

impl Candidate {
    /// Addresses to score against, preferring the multi-address list.
    pub fn known_addresses(&self) -> Vec<&str> {
        if self.addresses.is_empty() {
            vec![self.address.as_str()]
        } else {
            self.addresses.iter().map(String::as_str).collect()
        }
    }

    /// Phones to collect from, preferring the multi-phone list.
    pub fn known_phones(&self) -> Vec<&str> {
        if !self.all_phones.is_empty() {
            self.all_phones.iter().map(String::as_str).collect()
        } else if !self.phone.is_empty() {
            vec![self.phone.as_str()]
        } else {
            Vec::new()
        }
    }
}

/// Up to four phone numbers chosen from the two most likely person groups.
/// Unfilled slots stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneSelection {
    pub phone1: String,
    pub phone2: String,
    pub phone3: String,
    pub phone4: String,
}

impl PhoneSelection {
    pub fn is_empty(&self) -> bool {
        self.phone1.is_empty()
            && self.phone2.is_empty()
            && self.phone3.is_empty()
            && self.phone4.is_empty()
    }

    /// The non-empty slots, in rank order.
    pub fn phones(&self) -> Vec<&str> {
        [&self.phone1, &self.phone2, &self.phone3, &self.phone4]
            .into_iter()
            .filter(|p| !p.is_empty())
            .map(String::as_str)
            .collect()
    }

    /// Rank (1-4) of a normalized phone within this selection.
    pub fn rank_of(&self, normalized_phone: &str) -> Option<u8> {
        if normalized_phone.is_empty() {
            return None;
        }
        [&self.phone1, &self.phone2, &self.phone3, &self.phone4]
            .into_iter()
            .position(|p| p == normalized_phone)
            .map(|idx| idx as u8 + 1)
    }
}

/// A candidate whose phone made the final selection, tagged with the slot it
/// filled. Diagnostic output only.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub rank: u8,
    pub candidate: Candidate,
}

/// One enrichment request: the borrower pulled from county records plus the
/// scraped candidate batch for that borrower.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentRequest {
    pub target_name: String,
    #[serde(default)]
    pub target_address: String,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}
