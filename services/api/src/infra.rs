use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fundmatch::compatibility::{
    BusinessAssessment, BusinessProfile, BusinessStrategy, CompanyInfo, EligibilityCriteria,
    FinancialProfile, FundingOpportunity, ManagementStructure, OpportunityId,
    OpportunityRepository, ProfileId, ProfileRepository, RepositoryError, SupportingDocuments,
    SwotAnalysis,
};
use fundmatch::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<HashMap<ProfileId, BusinessProfile>>>,
}

impl InMemoryProfileRepository {
    pub(crate) fn seeded() -> Self {
        let repository = Self::default();
        for (id, profile) in sample_profiles() {
            repository.insert(id, profile);
        }
        repository
    }

    pub(crate) fn insert(&self, id: ProfileId, profile: BusinessProfile) {
        let mut guard = self.records.lock().expect("profile mutex poisoned");
        guard.insert(id, profile);
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    fn fetch(&self, id: &ProfileId) -> Result<Option<BusinessProfile>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("profile store poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryOpportunityRepository {
    records: Arc<Mutex<HashMap<OpportunityId, FundingOpportunity>>>,
}

impl InMemoryOpportunityRepository {
    pub(crate) fn seeded() -> Self {
        let repository = Self::default();
        for opportunity in sample_opportunities() {
            repository.insert(opportunity);
        }
        repository
    }

    /// Opportunities without an id cannot be looked up and are skipped.
    pub(crate) fn insert(&self, opportunity: FundingOpportunity) {
        let Some(id) = opportunity.id.clone() else {
            return;
        };
        let mut guard = self.records.lock().expect("opportunity mutex poisoned");
        guard.insert(id, opportunity);
    }
}

impl OpportunityRepository for InMemoryOpportunityRepository {
    fn fetch(&self, id: &OpportunityId) -> Result<Option<FundingOpportunity>, RepositoryError> {
        let guard = self.records.lock().map_err(|_| {
            RepositoryError::Unavailable("opportunity store poisoned".to_string())
        })?;
        Ok(guard.get(id).cloned())
    }
}

/// Established fintech with every section filled, and a young software startup.
pub(crate) fn sample_profiles() -> Vec<(ProfileId, BusinessProfile)> {
    let established = BusinessProfile {
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
            management_team: vec!["Thandi Nkosi (CEO)".to_string()],
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
            opportunities: vec!["Grant disbursement rails".to_string()],
            threats: vec!["Bank-led competitors".to_string()],
        }),
    };

    let startup = BusinessProfile {
        company_info: Some(CompanyInfo {
            company_name: Some("Lekker Labs".to_string()),
            registration_number: Some("2024/555001/07".to_string()),
            industry_type: Some("software".to_string()),
            founded_year: Some(2024),
            tax_compliance_status: Some("pending".to_string()),
            ..CompanyInfo::default()
        }),
        financial_profile: Some(FinancialProfile {
            monthly_revenue: Some(30_000.0),
            ..FinancialProfile::default()
        }),
        ..BusinessProfile::default()
    };

    vec![
        (ProfileId("kasi-pay".to_string()), established),
        (ProfileId("lekker-labs".to_string()), startup),
    ]
}

pub(crate) fn sample_opportunities() -> Vec<FundingOpportunity> {
    vec![
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
        },
        FundingOpportunity {
            id: Some(OpportunityId("opp-seed".to_string())),
            title: Some("Seed Technology Fund".to_string()),
            min_investment: 50_000,
            max_investment: 250_000,
            eligibility_criteria: Some(EligibilityCriteria {
                industries: vec!["technology".to_string()],
                business_stages: vec!["early-stage".to_string()],
                min_revenue: None,
                max_revenue: Some(2_000_000.0),
            }),
        },
    ]
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Midnight UTC on the given date; used to pin the analysis clock.
pub(crate) fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::default()))
}

pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&raw)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_repositories_resolve_sample_ids() {
        let profiles = InMemoryProfileRepository::seeded();
        let opportunities = InMemoryOpportunityRepository::seeded();

        let profile = profiles
            .fetch(&ProfileId("kasi-pay".to_string()))
            .expect("fetch succeeds")
            .expect("profile seeded");
        assert_eq!(profile.industry(), Some("fintech"));
        assert!(opportunities
            .fetch(&OpportunityId("opp-seed".to_string()))
            .expect("fetch succeeds")
            .is_some());
        assert!(profiles
            .fetch(&ProfileId("unknown".to_string()))
            .expect("fetch succeeds")
            .is_none());
    }

    #[test]
    fn opportunities_without_ids_are_not_stored() {
        let opportunities = InMemoryOpportunityRepository::default();
        let mut anonymous = sample_opportunities().remove(0);
        anonymous.id = None;
        opportunities.insert(anonymous);
        assert!(opportunities
            .fetch(&OpportunityId("opp-growth".to_string()))
            .expect("fetch succeeds")
            .is_none());
    }

    #[test]
    fn parse_date_reports_the_raw_input() {
        assert_eq!(
            parse_date(" 2025-06-01 "),
            Ok(NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"))
        );
        let error = parse_date("June 1").expect_err("rejected");
        assert!(error.contains("June 1"));
    }

    #[test]
    fn start_of_day_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
        assert_eq!(start_of_day(date).to_rfc3339(), "2025-06-01T00:00:00+00:00");
    }

    #[test]
    fn read_json_file_maps_missing_file_to_io_error() {
        let result: Result<BusinessProfile, AppError> =
            read_json_file(Path::new("/nonexistent/fundmatch/profile.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
