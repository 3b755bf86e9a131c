use super::domain::{BusinessProfile, FundingOpportunity, OpportunityId, ProfileId};

/// Source of materialised business profile snapshots.
pub trait ProfileRepository: Send + Sync {
    fn fetch(&self, id: &ProfileId) -> Result<Option<BusinessProfile>, RepositoryError>;
}

/// Source of published funding opportunities.
pub trait OpportunityRepository: Send + Sync {
    fn fetch(&self, id: &OpportunityId) -> Result<Option<FundingOpportunity>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
