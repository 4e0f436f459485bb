//! Text-generation capability used for advisories.

use crate::error::AdvisoryResult;
use std::time::Duration;

pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a senior HVAC and commercial refrigeration engineer. \
Give precise, technical and safety-oriented advice on refrigerant GWP, installation practice \
and ASHRAE load sizing. Keep answers concise and technically accurate.";

/// Per-request generation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryOptions {
    pub model: String,
    /// Lower is more deterministic.
    pub temperature: f64,
    pub max_tokens: u32,
    pub system_instruction: String,
    /// Upper bound on one request; a timeout counts as unavailable.
    pub timeout: Duration,
}

impl Default for AdvisoryOptions {
    fn default() -> Self {
        Self {
            model: "llama-3.1-70b-versatile".to_string(),
            temperature: 0.2,
            max_tokens: 1024,
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

/// Something that turns a technical prompt into free-text advice.
///
/// Implementations may fail freely; callers go through
/// [`crate::get_advisory`], which recovers every error.
pub trait AdvisoryProvider: Send + Sync {
    /// Provider name for logs and reports.
    fn name(&self) -> &str;

    /// Whether the text comes from a live service rather than canned content.
    fn is_live(&self) -> bool {
        false
    }

    fn generate_advisory(&self, prompt: &str, options: &AdvisoryOptions)
    -> AdvisoryResult<String>;
}
