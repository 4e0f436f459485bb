//! cl-advisory: optional engineering advisory for a sizing result.
//!
//! Builds a plain-text prompt from the sizing input and result, hands it to an
//! [`AdvisoryProvider`], and always returns text: provider failures are turned
//! into a fallback advisory and never reach the caller.

pub mod canned;
pub mod chat;
pub mod config;
pub mod error;
pub mod prompt;
pub mod provider;
pub mod service;

pub use canned::CannedAdvisor;
pub use chat::ChatCompletionsAdvisor;
pub use config::{AdvisoryConfig, ProviderKind, build_provider};
pub use error::{AdvisoryError, AdvisoryResult};
pub use prompt::format_prompt;
pub use provider::{AdvisoryOptions, AdvisoryProvider};
pub use service::{Advisory, AdvisorySource, FALLBACK_ADVICE, get_advisory};
