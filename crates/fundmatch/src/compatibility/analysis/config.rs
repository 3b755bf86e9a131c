use serde::{Deserialize, Serialize};

/// Score thresholds separating the three eligibility verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityConfig {
    pub eligible_score: u8,
    pub conditional_score: u8,
}

impl Default for CompatibilityConfig {
    fn default() -> Self {
        Self {
            eligible_score: 70,
            conditional_score: 40,
        }
    }
}

impl CompatibilityConfig {
    /// Thresholds must be ordered and within the 0-100 score range.
    pub fn is_valid(&self) -> bool {
        self.conditional_score <= self.eligible_score && self.eligible_score <= 100
    }
}
