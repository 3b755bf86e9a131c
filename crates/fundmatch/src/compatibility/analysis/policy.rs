use super::config::CompatibilityConfig;
use serde::{Deserialize, Serialize};

/// Coarse verdict derived solely from the compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    Eligible,
    Conditional,
    Ineligible,
}

impl EligibilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eligible => "Eligible",
            Self::Conditional => "Conditional",
            Self::Ineligible => "Ineligible",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Eligible => "profile meets the funding criteria",
            Self::Conditional => "profile may qualify once gaps are addressed",
            Self::Ineligible => "profile does not currently meet the funding criteria",
        }
    }
}

pub(crate) fn classify(score: u8, config: &CompatibilityConfig) -> EligibilityStatus {
    if score >= config.eligible_score {
        EligibilityStatus::Eligible
    } else if score >= config.conditional_score {
        EligibilityStatus::Conditional
    } else {
        EligibilityStatus::Ineligible
    }
}
