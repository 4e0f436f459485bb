//! Advisory retrieval with fallback.

use crate::provider::{AdvisoryOptions, AdvisoryProvider};
use serde::Serialize;
use tracing::{info, warn};

pub const FALLBACK_ADVICE: &str = "Technical assistant unavailable; showing general guidance.

- Size the compressor for at least the calculated total load at the design suction temperature.
- Select an evaporator for a 6-8 K coil temperature difference and keep fins clear of frost.
- Prefer low-GWP natural refrigerants: R-744 (CO2) for larger plants, R-290 (Propane) for small \
charges with proper containment.

Check the network connection or advisory credential to get a full engineering review.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorySource {
    Live,
    Canned,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub source: AdvisorySource,
    pub provider: String,
    pub text: String,
}

/// Ask `provider` for advice on `prompt`.
///
/// Never fails: any provider error is logged and replaced by
/// [`FALLBACK_ADVICE`].
pub fn get_advisory(
    provider: &dyn AdvisoryProvider,
    prompt: &str,
    options: &AdvisoryOptions,
) -> Advisory {
    match provider.generate_advisory(prompt, options) {
        Ok(text) => {
            info!(provider = provider.name(), chars = text.len(), "advisory received");
            Advisory {
                source: if provider.is_live() {
                    AdvisorySource::Live
                } else {
                    AdvisorySource::Canned
                },
                provider: provider.name().to_string(),
                text,
            }
        }
        Err(err) => {
            warn!(provider = provider.name(), error = %err, "advisory failed, using fallback");
            Advisory {
                source: AdvisorySource::Fallback,
                provider: provider.name().to_string(),
                text: FALLBACK_ADVICE.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canned::CannedAdvisor;
    use crate::error::{AdvisoryError, AdvisoryResult};

    struct Failing;

    impl AdvisoryProvider for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn is_live(&self) -> bool {
            true
        }

        fn generate_advisory(&self, _: &str, _: &AdvisoryOptions) -> AdvisoryResult<String> {
            Err(AdvisoryError::Timeout)
        }
    }

    #[test]
    fn failure_becomes_fallback() {
        let advisory = get_advisory(&Failing, "prompt", &AdvisoryOptions::default());
        assert_eq!(advisory.source, AdvisorySource::Fallback);
        assert_eq!(advisory.provider, "failing");
        assert!(advisory.text.contains("R-744"));
        assert!(advisory.text.contains("unavailable"));
    }

    #[test]
    fn canned_is_labelled() {
        let advisory = get_advisory(&CannedAdvisor, "prompt", &AdvisoryOptions::default());
        assert_eq!(advisory.source, AdvisorySource::Canned);
    }
}
