// src/utils/constants.rs
//
// Static configuration data for the scoring and normalization stack. These
// are word lists and weight tables, not logic: swapping the locale (another
// county's ZIP codes, another set of street abbreviations) must not require
// touching any scoring algorithm.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Component weights used when combining the individual scores into one
/// composite score per candidate.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub name: f64,
    pub address: f64,
    pub location: f64,
    pub quality: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.name + self.address + self.location + self.quality
    }
}

/// Weight regime when the target record carries an address.
pub const WEIGHTS_WITH_ADDRESS: ScoringWeights = ScoringWeights {
    name: 0.35,
    address: 0.45,
    location: 0.15,
    quality: 0.05,
};

/// Weight regime when the target address is empty: the name and the
/// geographic context of the candidate's own text have to carry the match.
pub const WEIGHTS_WITHOUT_ADDRESS: ScoringWeights = ScoringWeights {
    name: 0.50,
    address: 0.10,
    location: 0.30,
    quality: 0.10,
};

/// Directionals and street-type abbreviations removed when deriving the
/// order-independent street name from an address.
pub const COMMON_STREET_WORDS: [&str; 13] = [
    "N", "S", "E", "W", "ST", "AVE", "BLVD", "DR", "RD", "CT", "LN", "PL", "WAY",
];

/// Lowercase form of [`COMMON_STREET_WORDS`], used by the partial-match bonus
/// to exclude low-information tokens from the meaningful-word count.
pub static STREET_STOPWORDS_LOWER: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "st", "ave", "blvd", "dr", "rd", "ct", "ln", "pl", "way", "n", "s", "e", "w",
    ]
    .into_iter()
    .collect()
});

/// Common US first names, used by the three-token format detector to decide
/// between FIRST MIDDLE LAST and the county's LAST FIRST MIDDLE convention.
pub const COMMON_FIRST_NAMES: [&str; 46] = [
    "JOHN", "JAMES", "MICHAEL", "MARY", "PATRICIA", "LINDA", "BARBARA", "ELIZABETH", "JENNIFER",
    "MARIA", "SUSAN", "MARGARET", "DOROTHY", "LISA", "NANCY", "KAREN", "BETTY", "HELEN", "SANDRA",
    "DONNA", "ROBERT", "WILLIAM", "DAVID", "RICHARD", "CHARLES", "JOSEPH", "THOMAS", "CHRISTOPHER",
    "DANIEL", "MATTHEW", "ANTHONY", "MARK", "DONALD", "STEVEN", "PAUL", "ANDREW", "JOSHUA",
    "KENNETH", "KEVIN", "BRIAN", "GEORGE", "TIMOTHY", "RONALD", "JASON", "EDWARD", "JACOB",
];

/// Miami-Dade ZIP codes used by the location context scorer.
pub const MIAMI_ZIP_CODES: [&str; 70] = [
    "33101", "33102", "33109", "33125", "33126", "33127", "33128", "33129", "33130", "33131",
    "33132", "33133", "33134", "33135", "33136", "33137", "33138", "33139", "33140", "33141",
    "33142", "33143", "33144", "33145", "33146", "33147", "33150", "33151", "33152", "33153",
    "33154", "33155", "33156", "33157", "33158", "33160", "33161", "33162", "33163", "33164",
    "33165", "33166", "33167", "33168", "33169", "33170", "33172", "33173", "33174", "33175",
    "33176", "33177", "33178", "33179", "33180", "33181", "33182", "33183", "33184", "33185",
    "33186", "33187", "33188", "33189", "33190", "33193", "33194", "33196", "33197", "33199",
];

/// Recognized US phone layouts, tried in order when extracting numbers from
/// free text. Each pattern captures the ten digits in groups.
pub static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\((\d{3})\)\s*(\d{3})-(\d{4})", // (305) 555-1234
        r"(\d{3})-(\d{3})-(\d{4})",       // 305-555-1234
        r"(\d{3})\.(\d{3})\.(\d{4})",     // 305.555.1234
        r"(\d{3})\s+(\d{3})\s+(\d{4})",   // 305 555 1234
        r"(\d{10})",                      // 3055551234
    ]
    .iter()
    .map(|p| Regex::new(p).expect("phone pattern must compile"))
    .collect()
});

/// Canonical `(XXX) XXX-XXXX` layout produced by phone normalization.
pub static CANONICAL_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\d{3}\) \d{3}-\d{4}").expect("canonical phone regex must compile"));
