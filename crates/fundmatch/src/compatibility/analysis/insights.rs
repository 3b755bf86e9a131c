use super::super::domain::{BusinessProfile, ProfileSection};
use super::views::{
    AnalysisMode, FinancialReadiness, IndustryAlignment, ProfileCompleteness, RiskCategory,
    RiskFlag, RiskSeverity, StageCompatibility,
};

const INDUSTRY_STRENGTH_THRESHOLD: u8 = 20;
const STAGE_STRENGTH_THRESHOLD: u8 = 20;
const FINANCIAL_STRENGTH_THRESHOLD: u8 = 15;
const COMPLETENESS_STRENGTH_THRESHOLD: u8 = 15;
const FINANCIAL_CONCERN_THRESHOLD: u8 = 10;
const INDUSTRY_CONCERN_THRESHOLD: u8 = 15;
const COMPLIANT_STATUS: &str = "compliant";

/// Feedback lists synthesised from the four analyzer outcomes.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Insights {
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_flags: Vec<RiskFlag>,
}

pub(crate) fn generate_insights(
    profile: &BusinessProfile,
    mode: AnalysisMode,
    industry: &IndustryAlignment,
    stage: &StageCompatibility,
    financial: &FinancialReadiness,
    completeness: &ProfileCompleteness,
) -> Insights {
    let mut insights = Insights::default();

    if industry.score >= INDUSTRY_STRENGTH_THRESHOLD {
        insights
            .strengths
            .push(format!("Industry alignment: {}", industry.details));
    }
    if stage.score >= STAGE_STRENGTH_THRESHOLD {
        insights
            .strengths
            .push(format!("Business stage: {}", stage.details));
    }
    if financial.score >= FINANCIAL_STRENGTH_THRESHOLD {
        insights
            .strengths
            .push(format!("Financial readiness: {}", financial.details));
    }
    if completeness.score >= COMPLETENESS_STRENGTH_THRESHOLD {
        insights.strengths.push(format!(
            "Profile completeness: {}% of the funding profile is complete",
            completeness.percentage
        ));
    }

    if !completeness.missing_critical.is_empty() {
        let sections = section_list(&completeness.missing_critical);
        insights
            .improvement_areas
            .push(format!("Complete critical profile sections: {sections}"));
        insights.recommendations.push(format!(
            "Prioritise the {sections} section{} before submitting applications; funders screen these first",
            if completeness.missing_critical.len() == 1 { "" } else { "s" }
        ));
    }

    if financial.score < FINANCIAL_CONCERN_THRESHOLD {
        insights
            .improvement_areas
            .push("Strengthen financial documentation and disclosure".to_string());
        insights.recommendations.push(
            "Upload current and prior-year financial statements and disclose monthly revenue and profit margin"
                .to_string(),
        );
        insights.risk_flags.push(RiskFlag {
            category: RiskCategory::Financial,
            severity: RiskSeverity::Medium,
            issue: "Limited financial track record or documentation".to_string(),
            impact: "Funders may decline or request additional financial evidence".to_string(),
        });
    }

    match mode {
        AnalysisMode::OpportunityMatch => {
            if industry.score < INDUSTRY_CONCERN_THRESHOLD {
                insights.improvement_areas.push(
                    "Industry focus does not align closely with this opportunity".to_string(),
                );
                insights.recommendations.push(
                    "Target opportunities aimed at your sector, or explain how your business serves the funder's focus industries"
                        .to_string(),
                );
            }
        }
        AnalysisMode::ProfileOnly => {
            insights.recommendations.push(
                "Compare your profile against specific funding opportunities for a tailored match score"
                    .to_string(),
            );
            insights.recommendations.push(
                "Keep your profile current as revenue, documents, and governance evolve".to_string(),
            );
        }
    }

    if profile.tax_compliance_status() != Some(COMPLIANT_STATUS) {
        insights.risk_flags.push(RiskFlag {
            category: RiskCategory::Compliance,
            severity: RiskSeverity::High,
            issue: "Tax compliance status not confirmed".to_string(),
            impact: "Most funders require a valid tax clearance before disbursement".to_string(),
        });
    }

    insights
}

fn section_list(sections: &[ProfileSection]) -> String {
    sections
        .iter()
        .map(|section| section.label())
        .collect::<Vec<_>>()
        .join(", ")
}
