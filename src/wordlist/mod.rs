//! Wordlist generation pipeline
//!
//! Stage 1: input normalization into base tokens
//! Stage 2: case and leetspeak variant expansion
//! Stage 3: pairwise/triple combination expansion
//! Stage 4: year and suffix appending
//! Stage 5: deduplication and capping (short-circuits all earlier stages)

mod combine;
mod generator;
mod normalize;
mod variants;

pub use generator::WordlistGenerator;
pub use normalize::TokenSet;
pub use variants::TokenVariants;
