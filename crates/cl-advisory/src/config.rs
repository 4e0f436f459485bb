//! Advisory configuration and provider selection.

use crate::canned::CannedAdvisor;
use crate::chat::ChatCompletionsAdvisor;
use crate::error::{AdvisoryError, AdvisoryResult};
use crate::provider::{AdvisoryOptions, AdvisoryProvider, DEFAULT_SYSTEM_INSTRUCTION};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_KEY_ENV: &str = "COLDLOAD_ADVISORY_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[default]
    Canned,
    ChatCompletions,
}

/// Advisory section of a job file.
///
/// The API key itself is never stored here, only the name of the environment
/// variable holding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    pub provider: ProviderKind,
    pub base_url: String,
    pub api_key_env: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_s: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        let options = AdvisoryOptions::default();
        Self {
            provider: ProviderKind::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            model: options.model,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            timeout_s: options.timeout.as_secs_f64(),
            system_instruction: None,
        }
    }
}

impl AdvisoryConfig {
    pub fn options(&self) -> AdvisoryOptions {
        // Timeouts that are not a positive, representable duration use the default.
        let timeout = Duration::try_from_secs_f64(self.timeout_s)
            .ok()
            .filter(|d| !d.is_zero())
            .unwrap_or_else(|| AdvisoryOptions::default().timeout);
        AdvisoryOptions {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            system_instruction: self
                .system_instruction
                .clone()
                .unwrap_or_else(|| DEFAULT_SYSTEM_INSTRUCTION.to_string()),
            timeout,
        }
    }

    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> AdvisoryResult<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(AdvisoryError::MissingCredential {
                env_var: self.api_key_env.clone(),
            }),
        }
    }
}

/// Pick the provider described by `config`.
///
/// A live provider without a credential degrades to [`CannedAdvisor`].
pub fn build_provider(config: &AdvisoryConfig) -> Box<dyn AdvisoryProvider> {
    match config.provider {
        ProviderKind::Canned => Box::new(CannedAdvisor::new()),
        ProviderKind::ChatCompletions => match config.api_key() {
            Ok(key) => Box::new(ChatCompletionsAdvisor::new(config.base_url.clone(), key)),
            Err(err) => {
                warn!(error = %err, "live advisory not available, using canned advice");
                Box::new(CannedAdvisor::new())
            }
        },
    }
}
