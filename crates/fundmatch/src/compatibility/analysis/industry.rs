use super::super::domain::{BusinessProfile, FundingOpportunity};
use super::views::{IndustryAlignment, MatchLevel};

/// Canonical categories and the keyword fragments that place an industry within them.
const RELATED_INDUSTRIES: [(&str, &[&str]); 4] = [
    ("technology", &["fintech", "software", "it", "digital", "tech"]),
    (
        "financial",
        &["fintech", "banking", "finance", "insurance", "investment"],
    ),
    (
        "manufacturing",
        &["production", "industrial", "factory", "assembly", "fabrication"],
    ),
    (
        "healthcare",
        &["medical", "pharma", "health", "biotech", "wellness"],
    ),
];

pub(crate) fn analyze_industry(
    profile: &BusinessProfile,
    opportunity: Option<&FundingOpportunity>,
) -> IndustryAlignment {
    let industry = profile.industry();

    let Some(opportunity) = opportunity else {
        return match industry {
            None => IndustryAlignment {
                score: 10,
                match_level: MatchLevel::None,
                details: "Industry classification not specified".to_string(),
            },
            Some(industry) => IndustryAlignment {
                score: 30,
                match_level: MatchLevel::Strong,
                details: format!("Clearly defined industry focus: {industry}"),
            },
        };
    };

    let Some(industry) = industry else {
        return IndustryAlignment {
            score: 5,
            match_level: MatchLevel::None,
            details: "Industry classification not specified; unable to assess alignment"
                .to_string(),
        };
    };

    let allowed: Vec<String> = opportunity
        .industries()
        .iter()
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect();

    if allowed.is_empty() {
        return IndustryAlignment {
            score: 25,
            match_level: MatchLevel::Moderate,
            details: "Opportunity accepts all industries".to_string(),
        };
    }

    let normalized = industry.to_lowercase();

    if let Some(matched) = allowed
        .iter()
        .find(|entry| normalized.contains(entry.as_str()) || entry.contains(normalized.as_str()))
    {
        return IndustryAlignment {
            score: 30,
            match_level: MatchLevel::Strong,
            details: format!("{industry} directly matches the targeted {matched} sector"),
        };
    }

    if let Some(category) = related_category(&normalized, &allowed) {
        return IndustryAlignment {
            score: 20,
            match_level: MatchLevel::Moderate,
            details: format!("{industry} is related to the targeted {category} sector"),
        };
    }

    IndustryAlignment {
        score: 5,
        match_level: MatchLevel::Weak,
        details: format!(
            "{industry} is outside the targeted industries ({})",
            allowed.join(", ")
        ),
    }
}

/// First category the industry belongs to that the allow-list also names.
fn related_category(industry: &str, allowed: &[String]) -> Option<&'static str> {
    RELATED_INDUSTRIES
        .iter()
        .find(|(category, fragments)| {
            fragments.iter().any(|fragment| industry.contains(fragment))
                && allowed
                    .iter()
                    .any(|entry| entry == category || fragments.contains(&entry.as_str()))
        })
        .map(|(category, _)| *category)
}
