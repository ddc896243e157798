//! Wordlist generator: runs the expansion stages behind a deduplicating,
//! size-capped sink

use std::collections::HashSet;

use crate::types::{GeneratorConfig, IdentityInput, Wordlist};

use super::combine;
use super::normalize::TokenSet;
use super::variants::TokenVariants;

/// Deduplicating, capped collector for candidate strings.
///
/// First occurrence wins; `push` reports whether the sink can still accept
/// candidates so producers stop the instant the cap is reached.
pub(super) struct CandidateSink {
    seen: HashSet<String>,
    words: Vec<String>,
    max: usize,
}

impl CandidateSink {
    pub(super) fn new(max: usize) -> Self {
        Self {
            seen: HashSet::new(),
            words: Vec::new(),
            max,
        }
    }

    /// True while the sink can accept more candidates.
    pub(super) fn is_open(&self) -> bool {
        self.words.len() < self.max
    }

    /// Insert a candidate, keeping first-seen order.
    ///
    /// Returns false once the cap is reached. An empty candidate is a
    /// programming defect in an upstream stage.
    pub(super) fn push(&mut self, candidate: String) -> bool {
        if !self.is_open() {
            return false;
        }
        debug_assert!(!candidate.is_empty(), "empty candidate reached the sink");
        if candidate.is_empty() {
            return true;
        }
        if self.seen.insert(candidate.clone()) {
            self.words.push(candidate);
        }
        self.is_open()
    }

    pub(super) fn words(&self) -> &[String] {
        &self.words
    }

    pub(super) fn into_words(self) -> Vec<String> {
        self.words
    }
}

/// Wordlist generator driven by identity fragments.
///
/// Generation is a pure function of the input and the configuration:
/// calling `generate` twice with the same arguments yields the same words
/// in the same order.
pub struct WordlistGenerator {
    config: GeneratorConfig,
}

impl WordlistGenerator {
    /// Create a generator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with a custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the wordlist for an identity input.
    ///
    /// An input with no usable tokens yields an empty list, as does a cap
    /// of zero; neither is an error.
    pub fn generate(&self, input: &IdentityInput) -> Wordlist {
        let tokens = TokenSet::from_input(input);
        let mut sink = CandidateSink::new(self.config.max_words);
        let base = tokens.base_tokens();

        self.emit_base(&base, &mut sink);
        if sink.is_open() {
            self.emit_variants(&base, &mut sink);
        }
        if sink.is_open() {
            combine::emit_combinations(&tokens, &mut sink);
        }
        if sink.is_open() {
            self.emit_appended(&tokens, &mut sink);
        }

        let capped = !sink.is_open();
        let words = sink.into_words();
        tracing::debug!(
            words = %words.len(),
            capped = %capped,
            "Wordlist generated"
        );
        Wordlist { words, capped }
    }

    /// Stage 1: the base tokens themselves.
    fn emit_base(&self, base: &[String], sink: &mut CandidateSink) {
        for token in base {
            if !sink.push(token.clone()) {
                return;
            }
        }
    }

    /// Stage 2: case and leetspeak variants of every base token.
    fn emit_variants(&self, base: &[String], sink: &mut CandidateSink) {
        for token in base {
            for variant in TokenVariants::new(token, &self.config.leet_table) {
                if !sink.push(variant) {
                    return;
                }
            }
        }
    }

    /// Stage 4: append years and fixed suffixes to every candidate
    /// produced so far, years first, in result order.
    fn emit_appended(&self, tokens: &TokenSet, sink: &mut CandidateSink) {
        let produced: Vec<String> = sink.words().to_vec();
        for candidate in &produced {
            for year in &tokens.years {
                if !sink.push(format!("{candidate}{year}")) {
                    return;
                }
            }
            for suffix in &self.config.suffixes {
                if !sink.push(format!("{candidate}{suffix}")) {
                    return;
                }
            }
        }
    }
}

impl Default for WordlistGenerator {
    fn default() -> Self {
        Self::new()
    }
}
