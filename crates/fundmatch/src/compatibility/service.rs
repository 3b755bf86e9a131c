use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::analysis::{CompatibilityConfig, CompatibilityEngine, CompatibilityResult};
use super::domain::{
    ApplicationDraft, BusinessProfile, FundingOpportunity, OpportunityId, ProfileId,
};
use super::repository::{OpportunityRepository, ProfileRepository, RepositoryError};

/// Inline scoring request carrying every input the engine needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub profile: BusinessProfile,
    #[serde(default)]
    pub opportunity: Option<FundingOpportunity>,
    #[serde(default)]
    pub draft: Option<ApplicationDraft>,
}

/// Service resolving profiles and opportunities before handing them to the engine.
pub struct CompatibilityService<P, O> {
    profiles: Arc<P>,
    opportunities: Arc<O>,
    engine: Arc<CompatibilityEngine>,
}

impl<P, O> CompatibilityService<P, O>
where
    P: ProfileRepository + 'static,
    O: OpportunityRepository + 'static,
{
    pub fn new(profiles: Arc<P>, opportunities: Arc<O>, config: CompatibilityConfig) -> Self {
        Self {
            profiles,
            opportunities,
            engine: Arc::new(CompatibilityEngine::new(config)),
        }
    }

    /// Score a stored profile in profile-only mode.
    pub fn assess_profile(
        &self,
        profile_id: &ProfileId,
    ) -> Result<CompatibilityResult, CompatibilityServiceError> {
        let profile = self.load_profile(profile_id)?;
        let result = self.engine.analyze_profile(&profile);
        debug!(
            profile_id = %profile_id.0,
            score = result.compatibility_score,
            "profile readiness assessed"
        );
        Ok(result)
    }

    /// Score a draft application for a stored profile against a stored opportunity.
    pub fn assess_application(
        &self,
        profile_id: &ProfileId,
        opportunity_id: &OpportunityId,
        draft: ApplicationDraft,
    ) -> Result<CompatibilityResult, CompatibilityServiceError> {
        let profile = self.load_profile(profile_id)?;
        let opportunity = self
            .opportunities
            .fetch(opportunity_id)?
            .ok_or_else(|| {
                CompatibilityServiceError::OpportunityNotFound(opportunity_id.0.clone())
            })?;
        validate_opportunity(&opportunity)?;

        let result = self
            .engine
            .analyze_application(&profile, &opportunity, &draft);
        debug!(
            profile_id = %profile_id.0,
            opportunity_id = %opportunity_id.0,
            score = result.compatibility_score,
            "application compatibility assessed"
        );
        Ok(result)
    }

    /// Score inline inputs without touching the repositories.
    pub fn evaluate(
        &self,
        request: AnalysisRequest,
    ) -> Result<CompatibilityResult, CompatibilityServiceError> {
        self.evaluate_at(request, Utc::now())
    }

    pub fn evaluate_at(
        &self,
        request: AnalysisRequest,
        generated_at: DateTime<Utc>,
    ) -> Result<CompatibilityResult, CompatibilityServiceError> {
        let AnalysisRequest {
            profile,
            opportunity,
            draft,
        } = request;

        match (opportunity, draft) {
            (None, None) => Ok(self.engine.analyze_profile_at(&profile, generated_at)),
            (Some(opportunity), Some(draft)) => {
                validate_opportunity(&opportunity)?;
                Ok(self
                    .engine
                    .analyze_application_at(&profile, &opportunity, &draft, generated_at))
            }
            (Some(_), None) => Err(CompatibilityServiceError::MissingDraft),
            (None, Some(_)) => Err(CompatibilityServiceError::MissingOpportunity),
        }
    }

    fn load_profile(
        &self,
        profile_id: &ProfileId,
    ) -> Result<BusinessProfile, CompatibilityServiceError> {
        self.profiles
            .fetch(profile_id)?
            .ok_or_else(|| CompatibilityServiceError::ProfileNotFound(profile_id.0.clone()))
    }
}

/// Reject investment ranges the funder could never satisfy.
pub fn validate_opportunity(
    opportunity: &FundingOpportunity,
) -> Result<(), CompatibilityServiceError> {
    let (min, max) = (opportunity.min_investment, opportunity.max_investment);
    if min == 0 || max == 0 || min > max {
        warn!(min, max, "opportunity rejected for invalid investment range");
        return Err(CompatibilityServiceError::InvalidOpportunity { min, max });
    }
    Ok(())
}

/// Error raised by the compatibility service.
#[derive(Debug, thiserror::Error)]
pub enum CompatibilityServiceError {
    #[error("business profile '{0}' not found")]
    ProfileNotFound(String),
    #[error("funding opportunity '{0}' not found")]
    OpportunityNotFound(String),
    #[error("an application draft is required when scoring against an opportunity")]
    MissingDraft,
    #[error("an opportunity is required when an application draft is supplied")]
    MissingOpportunity,
    #[error("opportunity investment range is invalid (min {min}, max {max})")]
    InvalidOpportunity { min: u64, max: u64 },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CompatibilityServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound(_) | Self::OpportunityNotFound(_)
        )
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            Self::MissingDraft | Self::MissingOpportunity | Self::InvalidOpportunity { .. }
        )
    }
}
