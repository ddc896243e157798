//! Input normalization: raw identity fragments into base tokens

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::types::IdentityInput;

static FOUR_DIGIT_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

/// Normalized tokens grouped by category.
///
/// "Personal" tokens are the name, pet and date fragments; they drive the
/// combination stage. Keywords and years keep their input order.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    pub name: Option<String>,
    pub pet: Option<String>,
    pub date_fragments: Vec<String>,
    pub keywords: Vec<String>,
    pub years: Vec<String>,
}

impl TokenSet {
    /// Normalize an identity input into its token set.
    ///
    /// Malformed fields (unparseable dob, non-4-digit years) are skipped
    /// silently; generation proceeds with whatever tokens remain.
    pub fn from_input(input: &IdentityInput) -> Self {
        let name = input.name.as_deref().and_then(clean_token);
        let pet = input.pet.as_deref().and_then(clean_token);

        let mut keywords = Vec::new();
        for keyword in &input.keywords {
            if let Some(token) = clean_token(keyword) {
                if !keywords.contains(&token) {
                    keywords.push(token);
                }
            }
        }

        let date_fragments = input
            .dob
            .as_deref()
            .map(date_fragments)
            .unwrap_or_default();

        let mut years = Vec::new();
        for year in &input.years {
            let year = year.trim();
            if FOUR_DIGIT_YEAR.is_match(year) {
                let year = year.to_string();
                if !years.contains(&year) {
                    years.push(year);
                }
            } else if !year.is_empty() {
                tracing::debug!(year = %year, "Dropping malformed year");
            }
        }

        Self {
            name,
            pet,
            date_fragments,
            keywords,
            years,
        }
    }

    /// All distinct base tokens in production order: name, pet, keywords,
    /// date fragments, years.
    pub fn base_tokens(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut tokens = Vec::new();
        let all = self
            .name
            .iter()
            .chain(self.pet.iter())
            .chain(self.keywords.iter())
            .chain(self.date_fragments.iter())
            .chain(self.years.iter());
        for token in all {
            if seen.insert(token.clone()) {
                tokens.push(token.clone());
            }
        }
        tokens
    }

    /// Personal tokens in combination order: name, pet, date fragments.
    pub fn personal(&self) -> Vec<&str> {
        self.name
            .iter()
            .chain(self.pet.iter())
            .chain(self.date_fragments.iter())
            .map(|s| s.as_str())
            .collect()
    }

    /// True when no token survived normalization.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.pet.is_none()
            && self.date_fragments.is_empty()
            && self.keywords.is_empty()
            && self.years.is_empty()
    }
}

/// Trim and lowercase a raw fragment; empty results are dropped.
fn clean_token(raw: &str) -> Option<String> {
    let token = raw.trim().to_lowercase();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Derive date tokens from a `YYYY-MM-DD` date of birth.
///
/// Order: 4-digit year, 2-digit year, padded month, bare month, padded day,
/// bare day. Padded and bare forms collapse for months/days >= 10.
fn date_fragments(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    let date = match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            if !raw.is_empty() {
                tracing::debug!(dob = %raw, "Unparseable date of birth, skipping date tokens");
            }
            return Vec::new();
        }
    };

    let candidates = [
        date.format("%Y").to_string(),
        date.format("%y").to_string(),
        date.format("%m").to_string(),
        date.month().to_string(),
        date.format("%d").to_string(),
        date.day().to_string(),
    ];

    let mut fragments = Vec::new();
    for fragment in candidates {
        if !fragment.is_empty() && !fragments.contains(&fragment) {
            fragments.push(fragment);
        }
    }
    fragments
}
