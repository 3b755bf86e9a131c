use std::sync::Arc;

use super::common::*;
use crate::compatibility::domain::{ApplicationDraft, OpportunityId, ProfileId};
use crate::compatibility::{
    AnalysisMode, AnalysisRequest, CompatibilityConfig, CompatibilityService,
    CompatibilityServiceError, EligibilityStatus,
};

#[test]
fn assess_profile_scores_stored_snapshot() {
    let (service, _, _) = build_service();

    let result = service
        .assess_profile(&profile_id())
        .expect("stored profile scores");

    assert_eq!(result.analysis_mode, AnalysisMode::ProfileOnly);
    assert_eq!(result.eligibility_status, EligibilityStatus::Eligible);
}

#[test]
fn assess_profile_reports_unknown_ids() {
    let (service, _, _) = build_service();

    match service.assess_profile(&ProfileId("missing".to_string())) {
        Err(error @ CompatibilityServiceError::ProfileNotFound(_)) => {
            assert!(error.is_not_found());
            assert!(error.to_string().contains("missing"));
        }
        other => panic!("expected profile not found, got {other:?}"),
    }
}

#[test]
fn assess_application_resolves_both_records() {
    let (service, _, _) = build_service();

    let result = service
        .assess_application(
            &profile_id(),
            &OpportunityId("opp-growth".to_string()),
            ApplicationDraft::new("250000"),
        )
        .expect("application scores");

    assert_eq!(result.analysis_mode, AnalysisMode::OpportunityMatch);
    assert_eq!(result.compatibility_score, 90);
}

#[test]
fn assess_application_reports_unknown_opportunity() {
    let (service, _, _) = build_service();

    match service.assess_application(
        &profile_id(),
        &OpportunityId("opp-closed".to_string()),
        ApplicationDraft::new("250000"),
    ) {
        Err(CompatibilityServiceError::OpportunityNotFound(id)) => assert_eq!(id, "opp-closed"),
        other => panic!("expected opportunity not found, got {other:?}"),
    }
}

#[test]
fn out_of_range_draft_is_a_result_not_an_error() {
    let (service, _, _) = build_service();

    let result = service
        .assess_application(
            &profile_id(),
            &OpportunityId("opp-growth".to_string()),
            ApplicationDraft::new("750000"),
        )
        .expect("gate rejection is still a result");

    assert_eq!(result.compatibility_score, 0);
    assert_eq!(result.eligibility_status, EligibilityStatus::Ineligible);
}

#[test]
fn inverted_investment_range_is_rejected() {
    let (service, _, opportunities) = build_service();
    let mut broken = opportunity();
    broken.id = Some(OpportunityId("opp-broken".to_string()));
    broken.min_investment = 900_000;
    opportunities.insert(broken);

    match service.assess_application(
        &profile_id(),
        &OpportunityId("opp-broken".to_string()),
        ApplicationDraft::new("250000"),
    ) {
        Err(error @ CompatibilityServiceError::InvalidOpportunity { .. }) => {
            assert!(error.is_invalid_request());
        }
        other => panic!("expected invalid opportunity, got {other:?}"),
    }
}

#[test]
fn evaluate_requires_draft_and_opportunity_together() {
    let (service, _, _) = build_service();

    let without_draft = AnalysisRequest {
        profile: strong_profile(),
        opportunity: Some(opportunity()),
        draft: None,
    };
    assert!(matches!(
        service.evaluate(without_draft),
        Err(CompatibilityServiceError::MissingDraft)
    ));

    let without_opportunity = AnalysisRequest {
        profile: strong_profile(),
        opportunity: None,
        draft: Some(ApplicationDraft::new("250000")),
    };
    assert!(matches!(
        service.evaluate(without_opportunity),
        Err(CompatibilityServiceError::MissingOpportunity)
    ));

    let profile_only = AnalysisRequest {
        profile: strong_profile(),
        opportunity: None,
        draft: None,
    };
    let result = service.evaluate(profile_only).expect("profile-only scores");
    assert_eq!(result.analysis_mode, AnalysisMode::ProfileOnly);
}

#[test]
fn repository_failures_surface_as_errors() {
    let service = CompatibilityService::new(
        Arc::new(UnavailableRepository),
        Arc::new(UnavailableRepository),
        CompatibilityConfig::default(),
    );

    match service.assess_profile(&profile_id()) {
        Err(error @ CompatibilityServiceError::Repository(_)) => {
            assert!(!error.is_not_found());
            assert!(!error.is_invalid_request());
        }
        other => panic!("expected repository error, got {other:?}"),
    }
}
