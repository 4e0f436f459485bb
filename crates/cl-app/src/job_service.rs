//! Sizing job files: loading, saving and validation.
//!
//! A job is one sizing case plus its validation limits and advisory settings.
//! Files ending in `.json` are read as JSON, everything else as YAML.

use cl_advisory::AdvisoryConfig;
use cl_sizing::{FacilityType, InputLimits, SizingInput, check_input};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AppError, AppResult};

pub const JOB_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingJob {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub facility: FacilityType,
    pub input: SizingInput,
    #[serde(default)]
    pub limits: InputLimits,
    #[serde(default)]
    pub advisory: AdvisoryConfig,
}

impl Default for SizingJob {
    fn default() -> Self {
        Self {
            version: JOB_VERSION,
            name: "Supermarket freezer room".to_string(),
            facility: FacilityType::Supermarket,
            input: SizingInput::default(),
            limits: InputLimits::default(),
            advisory: AdvisoryConfig::default(),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Load a job from a YAML or JSON file and validate it.
pub fn load_job(path: &Path) -> AppResult<SizingJob> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::JobFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let parsed = if is_json(path) {
        serde_json::from_str::<SizingJob>(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<SizingJob>(&content).map_err(|e| e.to_string())
    };
    let job = parsed.map_err(|message| AppError::JobParse {
        path: path.to_path_buf(),
        message,
    })?;

    validate_job(&job)?;
    Ok(job)
}

/// Validate then write a job, format chosen by extension.
pub fn save_job(path: &Path, job: &SizingJob) -> AppResult<()> {
    validate_job(job)?;
    let content = if is_json(path) {
        serde_json::to_string_pretty(job)?
    } else {
        serde_yaml::to_string(job)?
    };

    std::fs::write(path, content).map_err(|e| AppError::JobFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Structural checks plus the calculator's own input checks.
pub fn validate_job(job: &SizingJob) -> AppResult<()> {
    if job.version != JOB_VERSION {
        return Err(AppError::Validation(format!(
            "Unsupported job version {} (expected {})",
            job.version, JOB_VERSION
        )));
    }

    if job.name.trim().is_empty() {
        return Err(AppError::Validation("Job name must not be empty".to_string()));
    }

    job.limits.check()?;
    check_input(&job.input)?;

    Ok(())
}
