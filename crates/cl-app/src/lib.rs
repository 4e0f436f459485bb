//! Shared application service layer for coldload.
//!
//! Loads sizing jobs, runs validation, the load calculator and the optional
//! advisory, and assembles a report for the CLI.

pub mod error;
pub mod hash;
pub mod job_service;
pub mod report;
pub mod sizing_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use hash::input_fingerprint;
pub use job_service::{JOB_VERSION, SizingJob, load_job, save_job, validate_job};
pub use report::SizingReport;
pub use sizing_service::{RunOptions, run_sizing, run_sizing_with_provider};
