//! Passforge - password strength analysis and targeted wordlist generation
//!
//! A simple CLI tool for scoring passwords and building personalised wordlists
//! from identity fragments (names, pets, dates, keywords).

pub mod error;
pub mod strength;
pub mod types;
pub mod wordlist;

// Re-export commonly used types
pub use error::{PassforgeError, Result};
pub use types::{
    CrackTimeEstimate, GeneratorConfig, IdentityInput, StrengthReport, Wordlist,
};

// Re-export main functionality
pub use strength::{create_estimator, StrengthEstimator, ZxcvbnEstimator};
pub use wordlist::WordlistGenerator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
