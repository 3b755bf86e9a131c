use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::{ApplicationDraft, OpportunityId, ProfileId};
use super::repository::{OpportunityRepository, ProfileRepository};
use super::service::{AnalysisRequest, CompatibilityService, CompatibilityServiceError};

/// Router builder exposing HTTP endpoints for compatibility scoring.
pub fn compatibility_router<P, O>(service: Arc<CompatibilityService<P, O>>) -> Router
where
    P: ProfileRepository + 'static,
    O: OpportunityRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/compatibility/analyze",
            post(analyze_handler::<P, O>),
        )
        .route(
            "/api/v1/compatibility/profiles/:profile_id",
            post(profile_handler::<P, O>),
        )
        .route(
            "/api/v1/compatibility/opportunities/:opportunity_id/profiles/:profile_id",
            post(application_handler::<P, O>),
        )
        .with_state(service)
}

pub(crate) async fn analyze_handler<P, O>(
    State(service): State<Arc<CompatibilityService<P, O>>>,
    axum::Json(request): axum::Json<AnalysisRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    O: OpportunityRepository + 'static,
{
    match service.evaluate(request) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler<P, O>(
    State(service): State<Arc<CompatibilityService<P, O>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    P: ProfileRepository + 'static,
    O: OpportunityRepository + 'static,
{
    match service.assess_profile(&ProfileId(profile_id)) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn application_handler<P, O>(
    State(service): State<Arc<CompatibilityService<P, O>>>,
    Path((opportunity_id, profile_id)): Path<(String, String)>,
    axum::Json(draft): axum::Json<ApplicationDraft>,
) -> Response
where
    P: ProfileRepository + 'static,
    O: OpportunityRepository + 'static,
{
    match service.assess_application(
        &ProfileId(profile_id),
        &OpportunityId(opportunity_id),
        draft,
    ) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: CompatibilityServiceError) -> Response {
    let status = if error.is_not_found() {
        StatusCode::NOT_FOUND
    } else if error.is_invalid_request() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
