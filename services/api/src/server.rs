use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryOpportunityRepository, InMemoryProfileRepository};
use crate::routes::with_application_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fundmatch::compatibility::CompatibilityService;
use fundmatch::config::AppConfig;
use fundmatch::error::AppError;
use fundmatch::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let profiles = Arc::new(InMemoryProfileRepository::seeded());
    let opportunities = Arc::new(InMemoryOpportunityRepository::seeded());
    let compatibility_service = Arc::new(CompatibilityService::new(
        profiles,
        opportunities,
        config.scoring,
    ));

    let app = with_application_routes(compatibility_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        eligible_score = config.scoring.eligible_score,
        conditional_score = config.scoring.conditional_score,
        "funding compatibility service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
