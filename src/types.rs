//! Core types and structures for passforge

use serde::{Deserialize, Serialize};

/// Default cap on the number of generated words
pub const DEFAULT_MAX_WORDS: usize = 50_000;

/// Default leetspeak substitution table applied during variant expansion
pub const DEFAULT_LEET_TABLE: &[(char, char)] = &[
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
];

/// Default suffixes appended to every candidate in the final stage
pub const DEFAULT_SUFFIXES: &[&str] = &["!", "123", "@", "#"];

/// Identity fragments used to seed wordlist generation.
///
/// Every field is optional; an absent or malformed field drops its derived
/// tokens without raising an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityInput {
    /// Name or nickname
    pub name: Option<String>,
    /// Pet name
    pub pet: Option<String>,
    /// Date of birth in `YYYY-MM-DD` form
    pub dob: Option<String>,
    /// Free-form keywords (company, team, city, ...)
    pub keywords: Vec<String>,
    /// Candidate years as 4-digit strings
    pub years: Vec<String>,
}

impl IdentityInput {
    /// True when no field carries a usable token.
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.pet.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.dob.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.keywords.iter().all(|k| k.trim().is_empty())
            && self.years.iter().all(|y| y.trim().is_empty())
    }
}

/// Configuration for wordlist generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Upper bound on the final wordlist length
    pub max_words: usize,
    /// Leetspeak substitution table (from char, to char)
    pub leet_table: Vec<(char, char)>,
    /// Fixed suffixes appended to every candidate
    pub suffixes: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            leet_table: DEFAULT_LEET_TABLE.to_vec(),
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GeneratorConfig {
    /// Default configuration with a custom cap.
    pub fn with_max_words(max_words: usize) -> Self {
        Self {
            max_words,
            ..Default::default()
        }
    }
}

/// Final deduplicated wordlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wordlist {
    /// Unique candidates in first-production order
    pub words: Vec<String>,
    /// True when generation stopped because the cap was reached
    pub capped: bool,
}

impl Wordlist {
    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words were generated.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in result order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }
}

/// Crack-time estimate for one guessing-speed scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrackTimeEstimate {
    /// Attack scenario, e.g. "online, throttled (100/hour)"
    pub scenario: String,
    /// Human-readable duration, e.g. "3 hours" or "centuries"
    pub display: String,
}

/// Password strength report from an estimator backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Score from 0 (too guessable) to 4 (very unguessable)
    pub score: u8,
    /// Estimated number of guesses needed
    pub guesses: u64,
    /// Crack-time estimates, one per standard scenario
    pub crack_times: Vec<CrackTimeEstimate>,
    /// Warning about the password, if any
    pub warning: Option<String>,
    /// Suggestions for improving the password
    pub suggestions: Vec<String>,
}

impl StrengthReport {
    /// One-word verdict matching the 0-4 score.
    pub fn verdict(&self) -> &'static str {
        match self.score {
            0 => "very weak",
            1 => "weak",
            2 => "fair",
            3 => "strong",
            _ => "very strong",
        }
    }
}
