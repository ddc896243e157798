//! zxcvbn-backed strength estimator

use zxcvbn::{zxcvbn, Score};

use super::StrengthEstimator;
use crate::error::{PassforgeError, Result};
use crate::types::{CrackTimeEstimate, StrengthReport};

/// Strength estimator backed by the zxcvbn library
pub struct ZxcvbnEstimator;

impl ZxcvbnEstimator {
    /// Create a new estimator
    pub fn new() -> Self {
        Self
    }
}

impl Default for ZxcvbnEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl StrengthEstimator for ZxcvbnEstimator {
    fn estimate(&self, password: &str, user_inputs: &[&str]) -> Result<StrengthReport> {
        if password.is_empty() {
            return Err(PassforgeError::validation("Password cannot be empty"));
        }

        let entropy = zxcvbn(password, user_inputs);

        let score = match entropy.score() {
            Score::Zero => 0,
            Score::One => 1,
            Score::Two => 2,
            Score::Three => 3,
            _ => 4,
        };

        let times = entropy.crack_times();
        let crack_times = vec![
            CrackTimeEstimate {
                scenario: "online, throttled (100/hour)".to_string(),
                display: times.online_throttling_100_per_hour().to_string(),
            },
            CrackTimeEstimate {
                scenario: "online, unthrottled (10/sec)".to_string(),
                display: times.online_no_throttling_10_per_second().to_string(),
            },
            CrackTimeEstimate {
                scenario: "offline, slow hash (10k/sec)".to_string(),
                display: times.offline_slow_hashing_1e4_per_second().to_string(),
            },
            CrackTimeEstimate {
                scenario: "offline, fast hash (10B/sec)".to_string(),
                display: times.offline_fast_hashing_1e10_per_second().to_string(),
            },
        ];

        let feedback = entropy.feedback();
        let warning = feedback
            .and_then(|f| f.warning())
            .map(|w| w.to_string());
        let suggestions = feedback
            .map(|f| f.suggestions().iter().map(|s| s.to_string()).collect())
            .unwrap_or_default();

        tracing::debug!(
            score = %score,
            guesses = %entropy.guesses(),
            "Password strength estimated"
        );

        Ok(StrengthReport {
            score,
            guesses: entropy.guesses(),
            crack_times,
            warning,
            suggestions,
        })
    }

    fn name(&self) -> &'static str {
        "zxcvbn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_empty_password_is_rejected() {
        let estimator = ZxcvbnEstimator::new();
        assert!(estimator.estimate("", &[]).is_err());
    }

    #[test]
    fn test_weak_password_scores_low() -> Result<()> {
        let estimator = ZxcvbnEstimator::new();
        let report = estimator.estimate("password", &[])?;
        assert!(report.score <= 1);
        assert!(report.warning.is_some() || !report.suggestions.is_empty());
        Ok(())
    }

    #[test]
    fn test_strong_password_scores_high() -> Result<()> {
        let estimator = ZxcvbnEstimator::new();
        let report = estimator.estimate("correct-HORSE-battery-staple-99", &[])?;
        assert!(report.score >= 3);
        Ok(())
    }

    #[test]
    fn test_report_covers_standard_scenarios() -> Result<()> {
        let estimator = ZxcvbnEstimator::new();
        let report = estimator.estimate("tr0ub4dour", &[])?;
        assert_eq!(report.crack_times.len(), 4);
        for estimate in &report.crack_times {
            assert!(!estimate.display.is_empty());
        }
        assert!(report.guesses > 0);
        Ok(())
    }

    #[test]
    fn test_user_inputs_penalise_score() -> Result<()> {
        let estimator = ZxcvbnEstimator::new();
        let blind = estimator.estimate("swarajtiger2001", &[])?;
        let informed = estimator.estimate("swarajtiger2001", &["swaraj", "tiger", "2001"])?;
        assert!(informed.score <= blind.score);
        Ok(())
    }
}
