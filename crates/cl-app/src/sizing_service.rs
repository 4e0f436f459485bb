//! Sizing execution: validation, load calculation and optional advisory.

use cl_advisory::{AdvisoryProvider, build_provider, format_prompt, get_advisory};
use cl_sizing::{
    ClampOutcome, LoadConstants, check_input, compute_load_with, recommended_refrigerants,
    sanitize_input,
};
use tracing::info;

use crate::error::AppResult;
use crate::hash::input_fingerprint;
use crate::job_service::{SizingJob, validate_job};
use crate::report::SizingReport;

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Clamp fields into the job's limits; off means values are used as entered.
    pub clamp: bool,
    /// Request an advisory after a successful calculation.
    pub advise: bool,
    pub constants: LoadConstants,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            clamp: true,
            advise: false,
            constants: LoadConstants::default(),
        }
    }
}

/// Size a job, using the advisory provider its config describes.
pub fn run_sizing(job: &SizingJob, options: &RunOptions) -> AppResult<SizingReport> {
    if options.advise {
        let provider = build_provider(&job.advisory);
        run_sizing_with_provider(job, options, Some(provider.as_ref()))
    } else {
        run_sizing_with_provider(job, options, None)
    }
}

/// Size a job with an explicit advisory provider.
///
/// The advisory is only requested when `options.advise` is set and a
/// provider is given. It never turns a successful calculation into an error.
pub fn run_sizing_with_provider(
    job: &SizingJob,
    options: &RunOptions,
    provider: Option<&dyn AdvisoryProvider>,
) -> AppResult<SizingReport> {
    validate_job(job)?;

    let outcome = if options.clamp {
        sanitize_input(&job.input, &job.limits)?
    } else {
        check_input(&job.input)?;
        ClampOutcome {
            input: job.input,
            notices: Vec::new(),
        }
    };

    let input = outcome.input;
    let result = compute_load_with(&input, &options.constants)?;
    info!(
        job = %job.name,
        total_kw = result.total_load_kw,
        clamped_fields = outcome.notices.len(),
        "sizing complete"
    );

    let advisory = match provider {
        Some(provider) if options.advise => {
            let prompt = format_prompt(job.facility, &input, &result);
            Some(get_advisory(provider, &prompt, &job.advisory.options()))
        }
        _ => None,
    };

    Ok(SizingReport {
        job_name: job.name.clone(),
        facility: job.facility,
        generated_at: chrono::Utc::now().to_rfc3339(),
        input_fingerprint: input_fingerprint(&input),
        input,
        clamped: outcome.notices,
        result,
        refrigerants: recommended_refrigerants().to_vec(),
        advisory,
    })
}
