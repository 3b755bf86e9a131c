use crate::infra::{
    read_json_file, sample_opportunities, sample_profiles, start_of_day,
    InMemoryOpportunityRepository, InMemoryProfileRepository,
};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use fundmatch::compatibility::format::format_rand_whole;
use fundmatch::compatibility::{
    AnalysisRequest, ApplicationDraft, CompatibilityConfig, CompatibilityResult,
    CompatibilityService, FundingOpportunity,
};
use fundmatch::config::AppConfig;
use fundmatch::error::AppError;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to a business profile JSON document (camelCase fields)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Path to a funding opportunity JSON document
    #[arg(long, requires = "requested_amount")]
    pub(crate) opportunity: Option<PathBuf>,
    /// Amount requested in the draft application, in rand
    #[arg(long, requires = "opportunity")]
    pub(crate) requested_amount: Option<String>,
    /// Analysis date (YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Print the raw JSON result instead of the rendered report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Analysis date (YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

type LocalService = CompatibilityService<InMemoryProfileRepository, InMemoryOpportunityRepository>;

fn build_service(config: CompatibilityConfig) -> LocalService {
    CompatibilityService::new(
        Arc::new(InMemoryProfileRepository::seeded()),
        Arc::new(InMemoryOpportunityRepository::seeded()),
        config,
    )
}

fn analysis_clock(as_of: Option<NaiveDate>) -> DateTime<Utc> {
    as_of.map(start_of_day).unwrap_or_else(Utc::now)
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        profile,
        opportunity,
        requested_amount,
        as_of,
        json,
    } = args;

    let config = AppConfig::load()?;
    let request = AnalysisRequest {
        profile: read_json_file(&profile)?,
        opportunity: opportunity
            .map(|path| read_json_file::<FundingOpportunity>(&path))
            .transpose()?,
        draft: requested_amount.map(ApplicationDraft::new),
    };

    let service = build_service(config.scoring);
    let result = service.evaluate_at(request, analysis_clock(as_of))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_result(&result));
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    print!("{}", demo_report(config.scoring, analysis_clock(args.as_of))?);
    Ok(())
}

fn demo_report(
    scoring: CompatibilityConfig,
    generated_at: DateTime<Utc>,
) -> Result<String, AppError> {
    let service = build_service(scoring);
    let opportunities = sample_opportunities();
    let mut out = String::from("Funding compatibility demo\n");

    for (id, profile) in sample_profiles() {
        let name = profile
            .company_info
            .as_ref()
            .and_then(|info| info.company_name.clone())
            .unwrap_or_else(|| id.0.clone());

        let _ = writeln!(out, "\n=== {name}: general funding readiness ===");
        let readiness = service.evaluate_at(
            AnalysisRequest {
                profile: profile.clone(),
                opportunity: None,
                draft: None,
            },
            generated_at,
        )?;
        out.push_str(&render_result(&readiness));

        for opportunity in &opportunities {
            let requested = (opportunity.min_investment + opportunity.max_investment) / 2;
            let _ = writeln!(
                out,
                "\n=== {name} -> {} (requesting {}) ===",
                opportunity.display_name(),
                format_rand_whole(requested)
            );
            let result = service.evaluate_at(
                AnalysisRequest {
                    profile: profile.clone(),
                    opportunity: Some(opportunity.clone()),
                    draft: Some(ApplicationDraft::new(requested.to_string())),
                },
                generated_at,
            )?;
            out.push_str(&render_result(&result));
        }
    }

    Ok(out)
}

pub(crate) fn render_result(result: &CompatibilityResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Compatibility score: {}: {}",
        result.headline(),
        result.eligibility_status.summary()
    );

    let stage = result
        .stage_compatibility
        .business_stage
        .map(|stage| stage.label())
        .unwrap_or("Not assessed");
    let _ = writeln!(
        out,
        "- Industry alignment: {}/30 ({}) {}",
        result.industry_alignment.score,
        result.industry_alignment.match_level.label(),
        result.industry_alignment.details
    );
    let _ = writeln!(
        out,
        "- Stage compatibility: {}/25 ({}, {stage}) {}",
        result.stage_compatibility.score,
        result.stage_compatibility.match_level.label(),
        result.stage_compatibility.details
    );
    let _ = writeln!(
        out,
        "- Financial readiness: {}/25 ({}) {}",
        result.financial_readiness.score,
        result.financial_readiness.level.label(),
        result.financial_readiness.details
    );
    let _ = writeln!(
        out,
        "- Profile completeness: {}/20 ({}% complete)",
        result.profile_completeness.score, result.profile_completeness.percentage
    );

    render_list(&mut out, "Strengths", &result.strengths);
    render_list(&mut out, "Improvement areas", &result.improvement_areas);
    render_list(&mut out, "Recommendations", &result.recommendations);

    if !result.risk_flags.is_empty() {
        let _ = writeln!(out, "Risk flags");
        for flag in &result.risk_flags {
            let _ = writeln!(
                out,
                "- [{} / {}] {} ({})",
                flag.category.label(),
                flag.severity.label(),
                flag.issue,
                flag.impact
            );
        }
    }

    out
}

fn render_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "{heading}");
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}
