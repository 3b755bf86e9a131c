use super::super::domain::{BusinessProfile, ProfileSection, RequiredFields};
use super::views::ProfileCompleteness;

/// Scoring weight of one profile section.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectionWeight {
    pub section: ProfileSection,
    pub critical: bool,
    pub weight: u8,
}

pub(crate) const SECTION_WEIGHTS: [SectionWeight; 7] = [
    SectionWeight {
        section: ProfileSection::CompanyInfo,
        critical: true,
        weight: 4,
    },
    SectionWeight {
        section: ProfileSection::FinancialProfile,
        critical: true,
        weight: 4,
    },
    SectionWeight {
        section: ProfileSection::BusinessStrategy,
        critical: true,
        weight: 3,
    },
    SectionWeight {
        section: ProfileSection::BusinessAssessment,
        critical: false,
        weight: 2,
    },
    SectionWeight {
        section: ProfileSection::ManagementStructure,
        critical: false,
        weight: 2,
    },
    SectionWeight {
        section: ProfileSection::SupportingDocuments,
        critical: true,
        weight: 3,
    },
    SectionWeight {
        section: ProfileSection::SwotAnalysis,
        critical: false,
        weight: 2,
    },
];

const MAX_SCORE: f64 = 20.0;
const CRITICAL_SECTION_PENALTY: u32 = 3;

/// A section is complete only when it is present and every required field is filled.
fn section_is_complete(profile: &BusinessProfile, section: ProfileSection) -> bool {
    match section {
        ProfileSection::CompanyInfo => complete(&profile.company_info),
        ProfileSection::FinancialProfile => complete(&profile.financial_profile),
        ProfileSection::BusinessStrategy => complete(&profile.business_strategy),
        ProfileSection::BusinessAssessment => complete(&profile.business_assessment),
        ProfileSection::ManagementStructure => complete(&profile.management_structure),
        ProfileSection::SupportingDocuments => complete(&profile.supporting_documents),
        ProfileSection::SwotAnalysis => complete(&profile.swot_analysis),
    }
}

fn complete<T: RequiredFields>(section: &Option<T>) -> bool {
    section.as_ref().map(T::is_complete).unwrap_or(false)
}

pub(crate) fn analyze_completeness(profile: &BusinessProfile) -> ProfileCompleteness {
    let total_weight: u32 = SECTION_WEIGHTS.iter().map(|entry| entry.weight as u32).sum();
    let mut completed_weight: u32 = 0;
    let mut missing_critical = Vec::new();
    let mut missing_optional = Vec::new();

    for entry in SECTION_WEIGHTS {
        if section_is_complete(profile, entry.section) {
            completed_weight += entry.weight as u32;
        } else if entry.critical {
            missing_critical.push(entry.section);
        } else {
            missing_optional.push(entry.section);
        }
    }

    let percentage = (100.0 * completed_weight as f64 / total_weight as f64).round() as u32;
    let base_score = (MAX_SCORE * percentage as f64 / 100.0).round() as u32;
    let penalty = CRITICAL_SECTION_PENALTY * missing_critical.len() as u32;

    ProfileCompleteness {
        score: base_score.saturating_sub(penalty) as u8,
        percentage: percentage as u8,
        missing_critical,
        missing_optional,
    }
}
