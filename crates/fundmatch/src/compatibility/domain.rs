use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for stored business profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProfileId(pub String);

/// Identifier wrapper for published funding opportunities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OpportunityId(pub String);

/// Snapshot of one SME's funding-readiness data as captured by the profile builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessProfile {
    pub company_info: Option<CompanyInfo>,
    pub financial_profile: Option<FinancialProfile>,
    pub business_strategy: Option<BusinessStrategy>,
    pub business_assessment: Option<BusinessAssessment>,
    pub management_structure: Option<ManagementStructure>,
    pub supporting_documents: Option<SupportingDocuments>,
    pub swot_analysis: Option<SwotAnalysis>,
}

impl BusinessProfile {
    /// Declared industry classification, ignoring blank entries.
    pub fn industry(&self) -> Option<&str> {
        self.company_info
            .as_ref()
            .and_then(|info| filled_text(&info.industry_type))
    }

    pub fn founded_year(&self) -> Option<i32> {
        self.company_info.as_ref().and_then(|info| info.founded_year)
    }

    /// Monthly revenue annualised; undisclosed revenue counts as zero.
    pub fn annual_revenue(&self) -> f64 {
        self.financial_profile
            .as_ref()
            .and_then(|financials| financials.monthly_revenue)
            .filter(|revenue| revenue.is_finite())
            .map(|revenue| revenue * 12.0)
            .unwrap_or(0.0)
    }

    pub fn profit_margin(&self) -> Option<f64> {
        self.financial_profile
            .as_ref()
            .and_then(|financials| financials.profit_margin)
            .filter(|margin| margin.is_finite())
    }

    pub fn tax_compliance_status(&self) -> Option<&str> {
        self.company_info
            .as_ref()
            .and_then(|info| info.tax_compliance_status.as_deref())
    }

    pub fn has_current_financials(&self) -> bool {
        self.supporting_documents
            .as_ref()
            .map(|documents| documents.current_year_financials)
            .unwrap_or(false)
    }

    pub fn has_prior_year_financials(&self) -> bool {
        self.supporting_documents
            .as_ref()
            .map(|documents| documents.prior_year_financials)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInfo {
    pub company_name: Option<String>,
    pub registration_number: Option<String>,
    pub industry_type: Option<String>,
    pub founded_year: Option<i32>,
    pub tax_compliance_status: Option<String>,
    pub employee_count: Option<u32>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialProfile {
    pub monthly_revenue: Option<f64>,
    /// Net margin as a percentage, e.g. `12.5`.
    pub profit_margin: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub current_ratio: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessStrategy {
    pub mission_statement: Option<String>,
    pub target_market: Option<String>,
    pub value_proposition: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub growth_objectives: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessAssessment {
    pub business_model: Option<String>,
    pub operational_capacity: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub key_risks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagementStructure {
    #[serde(deserialize_with = "null_as_default")]
    pub management_team: Vec<String>,
    pub governance_structure: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub board_members: Vec<String>,
}

/// Presence flags for uploaded supporting documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportingDocuments {
    #[serde(deserialize_with = "null_as_default")]
    pub company_registration: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub current_year_financials: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub prior_year_financials: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub bank_statements: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_clearance: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SwotAnalysis {
    #[serde(deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub weaknesses: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub opportunities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub threats: Vec<String>,
}

/// Funder-defined offer with an investment range in whole rand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingOpportunity {
    #[serde(default)]
    pub id: Option<OpportunityId>,
    #[serde(default)]
    pub title: Option<String>,
    pub min_investment: u64,
    pub max_investment: u64,
    #[serde(default)]
    pub eligibility_criteria: Option<EligibilityCriteria>,
}

impl FundingOpportunity {
    pub fn industries(&self) -> &[String] {
        self.eligibility_criteria
            .as_ref()
            .map(|criteria| criteria.industries.as_slice())
            .unwrap_or(&[])
    }

    pub fn business_stages(&self) -> &[String] {
        self.eligibility_criteria
            .as_ref()
            .map(|criteria| criteria.business_stages.as_slice())
            .unwrap_or(&[])
    }

    pub fn min_revenue(&self) -> Option<f64> {
        self.eligibility_criteria
            .as_ref()
            .and_then(|criteria| criteria.min_revenue)
    }

    pub fn max_revenue(&self) -> Option<f64> {
        self.eligibility_criteria
            .as_ref()
            .and_then(|criteria| criteria.max_revenue)
    }

    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .or_else(|| self.id.as_ref().map(|id| id.0.as_str()))
            .unwrap_or("this opportunity")
    }
}

/// Allow-lists and revenue bounds; empty lists accept everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EligibilityCriteria {
    #[serde(deserialize_with = "null_as_default")]
    pub industries: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub business_stages: Vec<String>,
    pub min_revenue: Option<f64>,
    pub max_revenue: Option<f64>,
}

/// Draft application as typed into the funding request form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub requested_amount: String,
}

impl ApplicationDraft {
    pub fn new(requested_amount: impl Into<String>) -> Self {
        Self {
            requested_amount: requested_amount.into(),
        }
    }

    /// Requested amount when it parses to a positive, finite number.
    pub fn parsed_amount(&self) -> Option<f64> {
        self.requested_amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount > 0.0)
    }
}

/// The seven scored sections of a business profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileSection {
    CompanyInfo,
    FinancialProfile,
    BusinessStrategy,
    BusinessAssessment,
    ManagementStructure,
    SupportingDocuments,
    SwotAnalysis,
}

impl ProfileSection {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::CompanyInfo,
            Self::FinancialProfile,
            Self::BusinessStrategy,
            Self::BusinessAssessment,
            Self::ManagementStructure,
            Self::SupportingDocuments,
            Self::SwotAnalysis,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CompanyInfo => "Company information",
            Self::FinancialProfile => "Financial profile",
            Self::BusinessStrategy => "Business strategy",
            Self::BusinessAssessment => "Business assessment",
            Self::ManagementStructure => "Management structure",
            Self::SupportingDocuments => "Supporting documents",
            Self::SwotAnalysis => "SWOT analysis",
        }
    }
}

/// Checklist of fields a section must fill before it counts as complete.
pub trait RequiredFields {
    fn required_fields(&self) -> Vec<(&'static str, bool)>;

    fn is_complete(&self) -> bool {
        self.required_fields().iter().all(|(_, filled)| *filled)
    }
}

impl RequiredFields for CompanyInfo {
    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("companyName", text_is_filled(&self.company_name)),
            ("registrationNumber", text_is_filled(&self.registration_number)),
            ("industryType", text_is_filled(&self.industry_type)),
        ]
    }
}

impl RequiredFields for FinancialProfile {
    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("monthlyRevenue", number_is_filled(self.monthly_revenue)),
            ("profitMargin", number_is_filled(self.profit_margin)),
        ]
    }
}

impl RequiredFields for BusinessStrategy {
    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("missionStatement", text_is_filled(&self.mission_statement)),
            ("targetMarket", text_is_filled(&self.target_market)),
        ]
    }
}

impl RequiredFields for BusinessAssessment {
    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("businessModel", text_is_filled(&self.business_model)),
            (
                "operationalCapacity",
                text_is_filled(&self.operational_capacity),
            ),
        ]
    }
}

impl RequiredFields for ManagementStructure {
    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("managementTeam", list_is_filled(&self.management_team)),
            (
                "governanceStructure",
                text_is_filled(&self.governance_structure),
            ),
        ]
    }
}

impl RequiredFields for SupportingDocuments {
    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("companyRegistration", self.company_registration),
            ("currentYearFinancials", self.current_year_financials),
        ]
    }
}

impl RequiredFields for SwotAnalysis {
    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("strengths", list_is_filled(&self.strengths)),
            ("weaknesses", list_is_filled(&self.weaknesses)),
            ("opportunities", list_is_filled(&self.opportunities)),
            ("threats", list_is_filled(&self.threats)),
        ]
    }
}

pub(crate) fn filled_text(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

fn text_is_filled(value: &Option<String>) -> bool {
    filled_text(value).is_some()
}

fn number_is_filled(value: Option<f64>) -> bool {
    value
        .map(|number| number.is_finite() && number != 0.0)
        .unwrap_or(false)
}

fn list_is_filled(values: &[String]) -> bool {
    values.iter().any(|value| !value.trim().is_empty())
}

/// Reads an explicit JSON `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
