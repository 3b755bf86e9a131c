use super::super::domain::{ApplicationDraft, FundingOpportunity};
use super::super::format::{format_rand, format_rand_whole};
use super::views::{RiskCategory, RiskFlag, RiskSeverity};

/// Why a requested amount cannot be considered for an opportunity.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AmountRejection {
    /// The draft amount is blank, non-numeric, non-finite, or not positive.
    Unparseable { raw: String },
    BelowMinimum { requested: f64 },
    AboveMaximum { requested: f64 },
}

/// Hard pre-check run before any analyzer when a draft accompanies an opportunity.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AmountGate {
    min_investment: u64,
    max_investment: u64,
}

impl AmountGate {
    pub(crate) fn for_opportunity(opportunity: &FundingOpportunity) -> Self {
        Self {
            min_investment: opportunity.min_investment,
            max_investment: opportunity.max_investment,
        }
    }

    pub(crate) fn check(&self, draft: &ApplicationDraft) -> Result<f64, AmountRejection> {
        let Some(requested) = draft.parsed_amount() else {
            return Err(AmountRejection::Unparseable {
                raw: draft.requested_amount.trim().to_string(),
            });
        };

        if requested < self.min_investment as f64 {
            return Err(AmountRejection::BelowMinimum { requested });
        }
        if requested > self.max_investment as f64 {
            return Err(AmountRejection::AboveMaximum { requested });
        }

        Ok(requested)
    }

    pub(crate) fn range_label(&self) -> String {
        format!(
            "{} to {}",
            format_rand_whole(self.min_investment),
            format_rand_whole(self.max_investment)
        )
    }

    pub(crate) fn risk_flag(&self, rejection: &AmountRejection) -> RiskFlag {
        let issue = match rejection {
            AmountRejection::Unparseable { raw } if raw.is_empty() => {
                "No funding amount was requested".to_string()
            }
            AmountRejection::Unparseable { raw } => {
                format!("Requested amount '{raw}' is not a valid positive number")
            }
            AmountRejection::BelowMinimum { requested } => format!(
                "Requested amount of {} is below the minimum investment of {}",
                format_rand(*requested),
                format_rand_whole(self.min_investment)
            ),
            AmountRejection::AboveMaximum { requested } => format!(
                "Requested amount of {} exceeds the maximum investment of {}",
                format_rand(*requested),
                format_rand_whole(self.max_investment)
            ),
        };

        RiskFlag {
            category: RiskCategory::Financial,
            severity: RiskSeverity::High,
            issue,
            impact: "Application cannot be considered for this opportunity".to_string(),
        }
    }

    pub(crate) fn adjustment_instruction(&self) -> String {
        format!(
            "Adjust your requested amount to fall within the funding range of {}",
            self.range_label()
        )
    }
}
