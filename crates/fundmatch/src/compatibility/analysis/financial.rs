use super::super::domain::{BusinessProfile, FundingOpportunity};
use super::super::format::format_rand;
use super::views::{FinancialReadiness, ReadinessLevel};

const MAX_SCORE: u32 = 25;
const MIN_REVENUE_PENALTY: u32 = 10;
const MAX_REVENUE_PENALTY: u32 = 5;

pub(crate) fn analyze_financials(
    profile: &BusinessProfile,
    opportunity: Option<&FundingOpportunity>,
) -> FinancialReadiness {
    let annual_revenue = profile.annual_revenue();
    let mut total: u32 = 0;
    let mut notes: Vec<String> = Vec::new();

    if annual_revenue > 5_000_000.0 {
        total += 15;
        notes.push(format!(
            "Strong revenue of {} per year",
            format_rand(annual_revenue)
        ));
    } else if annual_revenue > 1_000_000.0 {
        total += 10;
        notes.push(format!(
            "Moderate revenue of {} per year",
            format_rand(annual_revenue)
        ));
    } else if annual_revenue > 0.0 {
        total += 5;
        notes.push(format!(
            "Early revenue of {} per year",
            format_rand(annual_revenue)
        ));
    } else {
        notes.push("Revenue not disclosed or pre-revenue stage".to_string());
    }

    match (
        profile.has_current_financials(),
        profile.has_prior_year_financials(),
    ) {
        (true, true) => {
            total += 8;
            notes.push("current and prior-year financial statements provided".to_string());
        }
        (true, false) => {
            total += 5;
            notes.push("current-year financial statements provided".to_string());
        }
        _ => notes.push("financial statements outstanding".to_string()),
    }

    match profile.profit_margin() {
        Some(margin) if margin > 10.0 => {
            total += 2;
            notes.push(format!("healthy {margin:.1}% profit margin"));
        }
        Some(margin) if margin > 0.0 => {
            total += 1;
            notes.push(format!("positive {margin:.1}% profit margin"));
        }
        _ => {}
    }

    if let Some(opportunity) = opportunity {
        if let Some(min_revenue) = opportunity.min_revenue() {
            if annual_revenue < min_revenue {
                total = total.saturating_sub(MIN_REVENUE_PENALTY);
                notes.push(format!(
                    "below the {} minimum revenue requirement",
                    format_rand(min_revenue)
                ));
            }
        }
        if let Some(max_revenue) = opportunity.max_revenue() {
            if annual_revenue > max_revenue {
                total = total.saturating_sub(MAX_REVENUE_PENALTY);
                notes.push(format!(
                    "above the {} revenue ceiling",
                    format_rand(max_revenue)
                ));
            }
        }
    }

    let level = if total >= 20 {
        ReadinessLevel::Strong
    } else if total >= 10 {
        ReadinessLevel::Moderate
    } else {
        ReadinessLevel::Weak
    };

    FinancialReadiness {
        score: total.min(MAX_SCORE) as u8,
        level,
        details: notes.join("; "),
    }
}
