// src/models/normalized.rs
//
// Structured forms of free-text names and addresses. Both are built fresh
// per normalization call and never mutated afterwards.

use std::collections::HashSet;

/// How a search variant formats the target name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantType {
    Basic,
    MiddleInitial,
}

/// One way of formatting a normalized name for an external people search.
/// The middle initial travels in its own field, lowercased, rather than being
/// folded into `search_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariant {
    pub search_name: String,
    pub middle_name: String,
    pub variant_type: VariantType,
}

/// A display name parsed into comparable parts.
///
/// `search_variants` always holds at least the basic variant; the
/// middle-initial variant is present only when a single-letter middle token
/// was detected.
#[derive(Debug, Clone, Default)]
pub struct NormalizedName {
    pub first: String,
    pub middle: String,
    pub last: String,
    /// Original display text, trimmed but otherwise untouched.
    pub full: String,
    pub has_middle: bool,
    pub middle_initial: String,
    pub search_variants: Vec<NameVariant>,
}

impl NormalizedName {
    /// `"first last"` of the primary search variant, reconstructed from the
    /// parts when no variant exists.
    pub fn search_name(&self) -> String {
        self.search_variants
            .first()
            .map(|v| v.search_name.clone())
            .unwrap_or_else(|| format!("{} {}", self.first, self.last))
    }

    /// True when a clean single-letter middle initial was detected.
    pub fn has_middle_initial(&self) -> bool {
        self.has_middle && !self.middle_initial.is_empty()
    }
}

/// An address reduced to comparable pieces. Token order is deliberately lost:
/// downstream comparisons are set- and substring-based, so "MAIN ST 123" and
/// "123 ST MAIN" must normalize identically.
#[derive(Debug, Clone, Default)]
pub struct NormalizedAddress {
    /// Original text, trimmed.
    pub raw: String,
    /// Uppercase word/number tokens of length > 1.
    pub tokens: HashSet<String>,
    /// First bare digit run, which is usually but not necessarily the civic
    /// number.
    pub street_num: String,
    /// Remaining tokens minus directionals and street types, sorted and
    /// space-joined.
    pub street_name: String,
}
