//! Funding compatibility scoring: profile and opportunity model, the scoring engine, and the
//! service and HTTP surface that feed it stored or inline inputs.

pub mod analysis;
pub mod domain;
pub mod format;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use analysis::{
    AnalysisMode, BusinessStage, CompatibilityConfig, CompatibilityEngine, CompatibilityResult,
    EligibilityStatus, FinancialReadiness, IndustryAlignment, MatchLevel, ProfileCompleteness,
    ReadinessLevel, RiskCategory, RiskFlag, RiskSeverity, StageCompatibility,
};
pub use domain::{
    ApplicationDraft, BusinessAssessment, BusinessProfile, BusinessStrategy, CompanyInfo,
    EligibilityCriteria, FinancialProfile, FundingOpportunity, ManagementStructure,
    OpportunityId, ProfileId, ProfileSection, RequiredFields, SupportingDocuments, SwotAnalysis,
};
pub use repository::{OpportunityRepository, ProfileRepository, RepositoryError};
pub use router::compatibility_router;
pub use service::{AnalysisRequest, CompatibilityService, CompatibilityServiceError};
