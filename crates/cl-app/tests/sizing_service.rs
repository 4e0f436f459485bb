//! Sizing service behaviour: clamping, strict mode and advisory handling.

use cl_advisory::{
    AdvisoryError, AdvisoryOptions, AdvisoryProvider, AdvisoryResult, AdvisorySource,
};
use cl_app::{AppError, RunOptions, SizingJob, run_sizing, run_sizing_with_provider};

struct Offline;

impl AdvisoryProvider for Offline {
    fn name(&self) -> &str {
        "offline"
    }

    fn is_live(&self) -> bool {
        true
    }

    fn generate_advisory(&self, _: &str, _: &AdvisoryOptions) -> AdvisoryResult<String> {
        Err(AdvisoryError::Unavailable("connection refused".to_string()))
    }
}

#[test]
fn default_job_sizes_without_advisory() {
    let report = run_sizing(&SizingJob::default(), &RunOptions::default()).unwrap();
    assert!((report.result.total_load_kw - 13.253_284_037_037_037).abs() < 1e-9);
    assert!(report.clamped.is_empty());
    assert!(report.advisory.is_none());
    assert_eq!(report.refrigerants.len(), 2);
    assert_eq!(report.input_fingerprint.len(), 64);
}

#[test]
fn out_of_range_fields_are_clamped() {
    let mut job = SizingJob::default();
    job.input.insulation_thickness_mm = 30.0;
    let report = run_sizing(&job, &RunOptions::default()).unwrap();
    assert_eq!(report.clamped.len(), 1);
    assert_eq!(report.clamped[0].field, "insulation_thickness_mm");
    assert_eq!(report.input.insulation_thickness_mm, 50.0);
}

#[test]
fn strict_mode_uses_values_as_entered() {
    let mut job = SizingJob::default();
    job.input.insulation_thickness_mm = 30.0;
    let options = RunOptions {
        clamp: false,
        ..RunOptions::default()
    };
    let report = run_sizing(&job, &options).unwrap();
    assert!(report.clamped.is_empty());
    assert_eq!(report.input.insulation_thickness_mm, 30.0);
}

#[test]
fn invalid_input_is_surfaced() {
    let mut job = SizingJob::default();
    job.input.loading_time_hours = 0.0;
    let err = run_sizing(&job, &RunOptions::default()).unwrap_err();
    assert!(matches!(err, AppError::Sizing(_)));
}

#[test]
fn advisory_failure_keeps_report() {
    let options = RunOptions {
        advise: true,
        ..RunOptions::default()
    };
    let provider: &dyn AdvisoryProvider = &Offline;
    let report = run_sizing_with_provider(&SizingJob::default(), &options, Some(provider)).unwrap();
    let advisory = report.advisory.expect("advisory requested");
    assert_eq!(advisory.source, AdvisorySource::Fallback);
    assert!((report.result.total_load_kw - 13.253_284_037_037_037).abs() < 1e-9);
}

#[test]
fn default_advisory_is_canned() {
    let options = RunOptions {
        advise: true,
        ..RunOptions::default()
    };
    let report = run_sizing(&SizingJob::default(), &options).unwrap();
    let advisory = report.advisory.as_ref().expect("advisory requested");
    assert_eq!(advisory.source, AdvisorySource::Canned);

    let text = report.render_text();
    assert!(text.contains("Total system load: 13.25 kW"));
    assert!(text.contains("R-290"));
    assert!(text.contains("demo"));

    let json = report.to_json().unwrap();
    assert!(json.contains("\"source\": \"canned\""));
}

#[test]
fn huge_advisory_timeout_still_reports() {
    let mut job = SizingJob::default();
    job.advisory.timeout_s = 1e30;
    let options = RunOptions {
        advise: true,
        ..RunOptions::default()
    };
    let report = run_sizing(&job, &options).unwrap();
    assert!((report.result.total_load_kw - 13.253_284_037_037_037).abs() < 1e-9);
    assert!(report.advisory.is_some());
}
