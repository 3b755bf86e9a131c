use super::super::domain::{BusinessProfile, FundingOpportunity};
use super::views::{BusinessStage, MatchLevel, StageCompatibility};

const STARTUP_MAX_YEARS: u32 = 2;
const GROWTH_MAX_YEARS: u32 = 5;
const STARTUP_REVENUE_CEILING: f64 = 500_000.0;
const MATURE_REVENUE_FLOOR: f64 = 5_000_000.0;

/// Whole years since founding; unknown or future founding years count as zero.
pub(crate) fn years_in_operation(profile: &BusinessProfile, current_year: i32) -> u32 {
    profile
        .founded_year()
        .map(|founded| current_year.saturating_sub(founded).max(0) as u32)
        .unwrap_or(0)
}

/// Branch order matters: the clauses overlap and the first match wins.
pub(crate) fn derive_stage(years_in_operation: u32, annual_revenue: f64) -> BusinessStage {
    if years_in_operation <= STARTUP_MAX_YEARS || annual_revenue < STARTUP_REVENUE_CEILING {
        BusinessStage::Startup
    } else if years_in_operation <= GROWTH_MAX_YEARS && annual_revenue < MATURE_REVENUE_FLOOR {
        BusinessStage::Growth
    } else if annual_revenue >= MATURE_REVENUE_FLOOR {
        BusinessStage::Mature
    } else {
        BusinessStage::EarlyStage
    }
}

pub(crate) fn analyze_stage(
    profile: &BusinessProfile,
    opportunity: Option<&FundingOpportunity>,
    current_year: i32,
) -> StageCompatibility {
    let years = years_in_operation(profile, current_year);
    let stage = derive_stage(years, profile.annual_revenue());

    let (score, match_level, details) = match opportunity {
        None => (
            25,
            MatchLevel::Strong,
            format!(
                "{} business with {years} year{} in operation",
                stage.label(),
                if years == 1 { "" } else { "s" }
            ),
        ),
        Some(opportunity) => match_against(stage, opportunity),
    };

    StageCompatibility {
        score,
        match_level,
        business_stage: Some(stage),
        years_in_operation: years,
        details,
    }
}

fn match_against(
    stage: BusinessStage,
    opportunity: &FundingOpportunity,
) -> (u8, MatchLevel, String) {
    let accepted: Vec<&str> = opportunity
        .business_stages()
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .collect();

    if accepted.is_empty() {
        return (
            20,
            MatchLevel::Moderate,
            "Opportunity accepts all business stages".to_string(),
        );
    }

    if accepted
        .iter()
        .any(|entry| entry.eq_ignore_ascii_case(stage.as_str()))
    {
        return (
            25,
            MatchLevel::Strong,
            format!("{} stage is explicitly targeted", stage.label()),
        );
    }

    let adjacent = accepted
        .iter()
        .filter_map(|entry| BusinessStage::parse(entry))
        .any(|target| target.position().abs_diff(stage.position()) == 1);

    if adjacent {
        return (
            15,
            MatchLevel::Moderate,
            format!(
                "{} stage is adjacent to the targeted stages ({})",
                stage.label(),
                accepted.join(", ")
            ),
        );
    }

    (
        5,
        MatchLevel::Weak,
        format!(
            "{} stage is outside the targeted stages ({})",
            stage.label(),
            accepted.join(", ")
        ),
    )
}
