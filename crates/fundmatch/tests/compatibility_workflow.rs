//! End-to-end scenarios for compatibility scoring driven through the public engine, service,
//! and router, using the camelCase payloads the funding portal submits.

mod common {
    use std::collections::HashMap;
    use std::sync::Arc;

    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;

    use fundmatch::compatibility::{
        BusinessProfile, CompatibilityConfig, CompatibilityService, FundingOpportunity,
        OpportunityId, OpportunityRepository, ProfileId, ProfileRepository, RepositoryError,
    };

    pub(super) fn clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    /// One-year-old software startup that has only filled in its company details.
    pub(super) fn startup_profile() -> BusinessProfile {
        serde_json::from_value(json!({
            "companyInfo": {
                "companyName": "Lekker Labs",
                "registrationNumber": "2024/555001/07",
                "industryType": "Software",
                "foundedYear": 2024
            },
            "financialProfile": { "monthlyRevenue": 30000 }
        }))
        .expect("profile payload parses")
    }

    pub(super) fn seed_fund() -> FundingOpportunity {
        serde_json::from_value(json!({
            "id": "opp-seed",
            "title": "Seed Technology Fund",
            "minInvestment": 50000,
            "maxInvestment": 250000,
            "eligibilityCriteria": {
                "industries": ["technology"],
                "businessStages": ["early-stage"]
            }
        }))
        .expect("opportunity payload parses")
    }

    pub(super) struct FixedProfiles(pub(super) HashMap<ProfileId, BusinessProfile>);

    impl ProfileRepository for FixedProfiles {
        fn fetch(&self, id: &ProfileId) -> Result<Option<BusinessProfile>, RepositoryError> {
            Ok(self.0.get(id).cloned())
        }
    }

    pub(super) struct FixedOpportunities(pub(super) HashMap<OpportunityId, FundingOpportunity>);

    impl OpportunityRepository for FixedOpportunities {
        fn fetch(
            &self,
            id: &OpportunityId,
        ) -> Result<Option<FundingOpportunity>, RepositoryError> {
            Ok(self.0.get(id).cloned())
        }
    }

    pub(super) fn service() -> Arc<CompatibilityService<FixedProfiles, FixedOpportunities>> {
        let profiles = FixedProfiles(HashMap::from([(
            ProfileId("lekker-labs".to_string()),
            startup_profile(),
        )]));
        let opportunities = FixedOpportunities(HashMap::from([(
            OpportunityId("opp-seed".to_string()),
            seed_fund(),
        )]));
        Arc::new(CompatibilityService::new(
            Arc::new(profiles),
            Arc::new(opportunities),
            CompatibilityConfig::default(),
        ))
    }
}

use axum::http::StatusCode;
use serde_json::Value;
use tower::ServiceExt;

use common::*;
use fundmatch::compatibility::{
    compatibility_router, ApplicationDraft, BusinessStage, CompatibilityEngine, EligibilityStatus,
    MatchLevel, ProfileSection, ReadinessLevel, RiskCategory, RiskSeverity,
};

#[test]
fn startup_against_adjacent_stage_fund_is_conditional() {
    let engine = CompatibilityEngine::default();

    let result = engine.analyze_application_at(
        &startup_profile(),
        &seed_fund(),
        &ApplicationDraft::new("120000"),
        clock(),
    );

    assert_eq!(result.industry_alignment.score, 20);
    assert_eq!(result.industry_alignment.match_level, MatchLevel::Moderate);
    assert_eq!(
        result.stage_compatibility.business_stage,
        Some(BusinessStage::Startup)
    );
    assert_eq!(result.stage_compatibility.score, 15);
    assert_eq!(result.financial_readiness.score, 5);
    assert_eq!(result.financial_readiness.level, ReadinessLevel::Weak);
    assert_eq!(result.profile_completeness.percentage, 20);
    assert_eq!(result.profile_completeness.score, 0);
    assert_eq!(
        result.profile_completeness.missing_critical,
        vec![
            ProfileSection::FinancialProfile,
            ProfileSection::BusinessStrategy,
            ProfileSection::SupportingDocuments,
        ]
    );

    assert_eq!(result.compatibility_score, 40);
    assert_eq!(result.eligibility_status, EligibilityStatus::Conditional);

    let categories: Vec<_> = result
        .risk_flags
        .iter()
        .map(|flag| (flag.category, flag.severity))
        .collect();
    assert_eq!(
        categories,
        vec![
            (RiskCategory::Financial, RiskSeverity::Medium),
            (RiskCategory::Compliance, RiskSeverity::High),
        ]
    );
}

#[test]
fn amount_above_ceiling_short_circuits_scoring() {
    let engine = CompatibilityEngine::default();

    let result = engine.analyze_application_at(
        &startup_profile(),
        &seed_fund(),
        &ApplicationDraft::new("260000"),
        clock(),
    );

    assert_eq!(result.compatibility_score, 0);
    assert_eq!(result.eligibility_status, EligibilityStatus::Ineligible);
    assert!(result.risk_flags[0].issue.contains("R 260 000"));
    assert!(result.risk_flags[0].issue.contains("R 250 000"));
}

#[tokio::test]
async fn router_serves_stored_application_assessment() {
    let router = compatibility_router(service());

    let response = router
        .oneshot(
            axum::http::Request::post(
                "/api/v1/compatibility/opportunities/opp-seed/profiles/lekker-labs",
            )
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(r#"{"requestedAmount":"120000"}"#))
            .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(payload["compatibilityScore"], 40);
    assert_eq!(payload["eligibilityStatus"], "conditional");
    assert_eq!(payload["stageCompatibility"]["businessStage"], "startup");
    assert_eq!(payload["analysisMode"], "opportunity_match");
}

#[tokio::test]
async fn router_reports_unknown_opportunity() {
    let router = compatibility_router(service());

    let response = router
        .oneshot(
            axum::http::Request::post(
                "/api/v1/compatibility/opportunities/opp-closed/profiles/lekker-labs",
            )
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(r#"{"requestedAmount":"120000"}"#))
            .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
