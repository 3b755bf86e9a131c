mod completeness;
mod config;
mod financial;
mod gate;
mod industry;
mod insights;
mod policy;
mod stage;
pub mod views;

pub use config::CompatibilityConfig;
pub use policy::EligibilityStatus;
pub use views::{
    AnalysisMode, BusinessStage, CompatibilityResult, FinancialReadiness, IndustryAlignment,
    MatchLevel, ProfileCompleteness, ReadinessLevel, RiskCategory, RiskFlag, RiskSeverity,
    StageCompatibility,
};

use super::domain::{ApplicationDraft, BusinessProfile, FundingOpportunity};
use chrono::{DateTime, Datelike, Utc};
use gate::{AmountGate, AmountRejection};
use insights::generate_insights;
use policy::classify;
use tracing::{debug, info};

/// Stateless scorer mapping a profile, and optionally an opportunity with a draft, to a result.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityEngine {
    config: CompatibilityConfig,
}

impl CompatibilityEngine {
    pub fn new(config: CompatibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompatibilityConfig {
        &self.config
    }

    /// Assess general funding readiness without a specific opportunity.
    pub fn analyze_profile(&self, profile: &BusinessProfile) -> CompatibilityResult {
        self.analyze_profile_at(profile, Utc::now())
    }

    pub fn analyze_profile_at(
        &self,
        profile: &BusinessProfile,
        generated_at: DateTime<Utc>,
    ) -> CompatibilityResult {
        self.score(profile, None, generated_at)
    }

    /// Assess a draft application against one opportunity, applying the amount gate first.
    pub fn analyze_application(
        &self,
        profile: &BusinessProfile,
        opportunity: &FundingOpportunity,
        draft: &ApplicationDraft,
    ) -> CompatibilityResult {
        self.analyze_application_at(profile, opportunity, draft, Utc::now())
    }

    pub fn analyze_application_at(
        &self,
        profile: &BusinessProfile,
        opportunity: &FundingOpportunity,
        draft: &ApplicationDraft,
        generated_at: DateTime<Utc>,
    ) -> CompatibilityResult {
        let gate = AmountGate::for_opportunity(opportunity);
        match gate.check(draft) {
            Ok(requested) => {
                debug!(
                    requested,
                    opportunity = opportunity.display_name(),
                    "requested amount within investment range"
                );
                self.score(profile, Some(opportunity), generated_at)
            }
            Err(rejection) => {
                info!(
                    ?rejection,
                    opportunity = opportunity.display_name(),
                    "requested amount rejected by amount gate"
                );
                rejected_result(&gate, &rejection, generated_at)
            }
        }
    }

    fn score(
        &self,
        profile: &BusinessProfile,
        opportunity: Option<&FundingOpportunity>,
        generated_at: DateTime<Utc>,
    ) -> CompatibilityResult {
        let mode = if opportunity.is_some() {
            AnalysisMode::OpportunityMatch
        } else {
            AnalysisMode::ProfileOnly
        };

        let industry_alignment = industry::analyze_industry(profile, opportunity);
        let stage_compatibility = stage::analyze_stage(profile, opportunity, generated_at.year());
        let financial_readiness = financial::analyze_financials(profile, opportunity);
        let profile_completeness = completeness::analyze_completeness(profile);

        let total = industry_alignment.score as u32
            + stage_compatibility.score as u32
            + financial_readiness.score as u32
            + profile_completeness.score as u32;
        let compatibility_score = total.min(100) as u8;
        let eligibility_status = classify(compatibility_score, &self.config);

        debug!(
            ?mode,
            industry = industry_alignment.score,
            stage = stage_compatibility.score,
            financial = financial_readiness.score,
            completeness = profile_completeness.score,
            compatibility_score,
            "compatibility analysis complete"
        );

        let insights = generate_insights(
            profile,
            mode,
            &industry_alignment,
            &stage_compatibility,
            &financial_readiness,
            &profile_completeness,
        );

        CompatibilityResult {
            compatibility_score,
            eligibility_status,
            industry_alignment,
            stage_compatibility,
            financial_readiness,
            profile_completeness,
            strengths: insights.strengths,
            improvement_areas: insights.improvement_areas,
            recommendations: insights.recommendations,
            risk_flags: insights.risk_flags,
            analysis_mode: mode,
            generated_at,
        }
    }
}

fn rejected_result(
    gate: &AmountGate,
    rejection: &AmountRejection,
    generated_at: DateTime<Utc>,
) -> CompatibilityResult {
    let not_assessed = "Not assessed: requested amount is outside the funding range".to_string();

    CompatibilityResult {
        compatibility_score: 0,
        eligibility_status: EligibilityStatus::Ineligible,
        industry_alignment: IndustryAlignment {
            score: 0,
            match_level: MatchLevel::None,
            details: not_assessed.clone(),
        },
        stage_compatibility: StageCompatibility {
            score: 0,
            match_level: MatchLevel::None,
            business_stage: None,
            years_in_operation: 0,
            details: not_assessed.clone(),
        },
        financial_readiness: FinancialReadiness {
            score: 0,
            level: ReadinessLevel::Weak,
            details: not_assessed,
        },
        profile_completeness: ProfileCompleteness {
            score: 0,
            percentage: 0,
            missing_critical: Vec::new(),
            missing_optional: Vec::new(),
        },
        strengths: Vec::new(),
        improvement_areas: vec![gate.adjustment_instruction()],
        recommendations: Vec::new(),
        risk_flags: vec![gate.risk_flag(rejection)],
        analysis_mode: AnalysisMode::OpportunityMatch,
        generated_at,
    }
}
