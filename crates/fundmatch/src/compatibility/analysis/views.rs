use super::super::domain::ProfileSection;
use super::policy::EligibilityStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Qualitative fit reported by the industry and stage analyzers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    Strong,
    Moderate,
    Weak,
    None,
}

impl MatchLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
            Self::None => "None",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    Strong,
    Moderate,
    Weak,
}

impl ReadinessLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        }
    }
}

/// Lifecycle stage derived from business age and annualised revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessStage {
    Startup,
    EarlyStage,
    Growth,
    Mature,
}

impl BusinessStage {
    /// Progression used for adjacency checks.
    pub const fn ordered() -> [Self; 4] {
        [Self::Startup, Self::EarlyStage, Self::Growth, Self::Mature]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::EarlyStage => "early-stage",
            Self::Growth => "growth",
            Self::Mature => "mature",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Startup => "Startup",
            Self::EarlyStage => "Early-stage",
            Self::Growth => "Growth",
            Self::Mature => "Mature",
        }
    }

    pub const fn position(self) -> usize {
        match self {
            Self::Startup => 0,
            Self::EarlyStage => 1,
            Self::Growth => 2,
            Self::Mature => 3,
        }
    }

    /// Case-insensitive parse of a funder's stage label.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|stage| stage.as_str() == normalized)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    ProfileOnly,
    OpportunityMatch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryAlignment {
    pub score: u8,
    #[serde(rename = "match")]
    pub match_level: MatchLevel,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCompatibility {
    pub score: u8,
    #[serde(rename = "match")]
    pub match_level: MatchLevel,
    /// Absent when the analysis was short-circuited by the amount gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_stage: Option<BusinessStage>,
    pub years_in_operation: u32,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReadiness {
    pub score: u8,
    pub level: ReadinessLevel,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCompleteness {
    pub score: u8,
    pub percentage: u8,
    pub missing_critical: Vec<ProfileSection>,
    pub missing_optional: Vec<ProfileSection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Financial,
    Compliance,
}

impl RiskCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Financial => "Financial",
            Self::Compliance => "Compliance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSeverity {
    Medium,
    High,
}

impl RiskSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFlag {
    pub category: RiskCategory,
    pub severity: RiskSeverity,
    pub issue: String,
    pub impact: String,
}

/// Full compatibility assessment returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub compatibility_score: u8,
    pub eligibility_status: EligibilityStatus,
    pub industry_alignment: IndustryAlignment,
    pub stage_compatibility: StageCompatibility,
    pub financial_readiness: FinancialReadiness,
    pub profile_completeness: ProfileCompleteness,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_flags: Vec<RiskFlag>,
    pub analysis_mode: AnalysisMode,
    pub generated_at: DateTime<Utc>,
}

impl CompatibilityResult {
    /// One-line summary suitable for logs and CLI headers.
    pub fn headline(&self) -> String {
        format!(
            "{}/100 ({})",
            self.compatibility_score,
            self.eligibility_status.label()
        )
    }
}
