use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::compatibility::domain::{
    BusinessAssessment, BusinessProfile, BusinessStrategy, CompanyInfo, EligibilityCriteria,
    FinancialProfile, FundingOpportunity, ManagementStructure, OpportunityId, ProfileId,
    SupportingDocuments, SwotAnalysis,
};
use crate::compatibility::repository::{
    OpportunityRepository, ProfileRepository, RepositoryError,
};
use crate::compatibility::{CompatibilityConfig, CompatibilityEngine, CompatibilityService};

pub(super) fn clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn engine() -> CompatibilityEngine {
    CompatibilityEngine::new(CompatibilityConfig::default())
}

/// Fintech founded in 2016 with R 7.2m annual revenue and every section filled.
pub(super) fn strong_profile() -> BusinessProfile {
    BusinessProfile {
        company_info: Some(CompanyInfo {
            company_name: Some("Kasi Pay (Pty) Ltd".to_string()),
            registration_number: Some("2016/123456/07".to_string()),
            industry_type: Some("fintech".to_string()),
            founded_year: Some(2016),
            tax_compliance_status: Some("compliant".to_string()),
            employee_count: Some(42),
            location: Some("Johannesburg".to_string()),
        }),
        financial_profile: Some(FinancialProfile {
            monthly_revenue: Some(600_000.0),
            profit_margin: Some(14.0),
            debt_to_equity: Some(0.4),
            current_ratio: Some(1.8),
        }),
        business_strategy: Some(BusinessStrategy {
            mission_statement: Some("Cashless payments for township retailers".to_string()),
            target_market: Some("Spaza shops and informal traders".to_string()),
            value_proposition: Some("Same-day settlement".to_string()),
            growth_objectives: vec!["Expand to KwaZulu-Natal".to_string()],
        }),
        business_assessment: Some(BusinessAssessment {
            business_model: Some("Per-transaction fee".to_string()),
            operational_capacity: Some("12 000 active merchants".to_string()),
            key_risks: vec!["Card scheme fee changes".to_string()],
        }),
        management_structure: Some(ManagementStructure {
            management_team: vec![
                "Thandi Nkosi (CEO)".to_string(),
                "Sipho Dlamini (CFO)".to_string(),
            ],
            governance_structure: Some("Independent board".to_string()),
            board_members: vec!["Naledi Mokoena".to_string()],
        }),
        supporting_documents: Some(SupportingDocuments {
            company_registration: true,
            current_year_financials: true,
            prior_year_financials: true,
            bank_statements: true,
            tax_clearance: true,
        }),
        swot_analysis: Some(SwotAnalysis {
            strengths: vec!["Merchant network".to_string()],
            weaknesses: vec!["Thin margins on small tickets".to_string()],
            opportunities: vec!["Government grant disbursement".to_string()],
            threats: vec!["Bank-led competitors".to_string()],
        }),
    }
}

/// Financial-sector fund for growth and mature businesses, R 100 000 to R 500 000.
pub(super) fn opportunity() -> FundingOpportunity {
    FundingOpportunity {
        id: Some(OpportunityId("opp-growth".to_string())),
        title: Some("Township Growth Fund".to_string()),
        min_investment: 100_000,
        max_investment: 500_000,
        eligibility_criteria: Some(EligibilityCriteria {
            industries: vec!["financial".to_string()],
            business_stages: vec!["growth".to_string(), "mature".to_string()],
            min_revenue: Some(1_000_000.0),
            max_revenue: None,
        }),
    }
}

pub(super) fn profile_id() -> ProfileId {
    ProfileId("profile-kasi-pay".to_string())
}

pub(super) fn build_service() -> (
    CompatibilityService<MemoryProfiles, MemoryOpportunities>,
    Arc<MemoryProfiles>,
    Arc<MemoryOpportunities>,
) {
    let profiles = Arc::new(MemoryProfiles::default());
    let opportunities = Arc::new(MemoryOpportunities::default());
    profiles.insert(profile_id(), strong_profile());
    opportunities.insert(opportunity());

    let service = CompatibilityService::new(
        profiles.clone(),
        opportunities.clone(),
        CompatibilityConfig::default(),
    );
    (service, profiles, opportunities)
}

#[derive(Default, Clone)]
pub(super) struct MemoryProfiles {
    records: Arc<Mutex<HashMap<ProfileId, BusinessProfile>>>,
}

impl MemoryProfiles {
    pub(super) fn insert(&self, id: ProfileId, profile: BusinessProfile) {
        self.records
            .lock()
            .expect("profile mutex poisoned")
            .insert(id, profile);
    }
}

impl ProfileRepository for MemoryProfiles {
    fn fetch(&self, id: &ProfileId) -> Result<Option<BusinessProfile>, RepositoryError> {
        let guard = self.records.lock().expect("profile mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryOpportunities {
    records: Arc<Mutex<HashMap<OpportunityId, FundingOpportunity>>>,
}

impl MemoryOpportunities {
    pub(super) fn insert(&self, opportunity: FundingOpportunity) {
        let id = opportunity
            .id
            .clone()
            .expect("stored opportunities carry an id");
        self.records
            .lock()
            .expect("opportunity mutex poisoned")
            .insert(id, opportunity);
    }
}

impl OpportunityRepository for MemoryOpportunities {
    fn fetch(&self, id: &OpportunityId) -> Result<Option<FundingOpportunity>, RepositoryError> {
        let guard = self.records.lock().expect("opportunity mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn fetch(&self, _id: &ProfileId) -> Result<Option<BusinessProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("profile store offline".to_string()))
    }
}

impl OpportunityRepository for UnavailableRepository {
    fn fetch(&self, _id: &OpportunityId) -> Result<Option<FundingOpportunity>, RepositoryError> {
        Err(RepositoryError::Unavailable("opportunity store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
