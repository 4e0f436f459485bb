//! Deterministic advisory used when no live service is configured.

use crate::error::AdvisoryResult;
use crate::provider::{AdvisoryOptions, AdvisoryProvider};

pub const CANNED_ADVICE: &str = "Engineering review (demo mode)

Based on the sizing calculation:

1. Compressor capacity: select at the design suction temperature with the computed total load \
as the minimum duty. Typical: 3.5-4.5 kW at -10 °C SST for medium temperature, 2.5-3.5 kW at \
0 °C SST for small low temperature cabinets; scale with the room load.

2. Evaporator: direct-expansion coil with 12-15 m² surface for reach-in cabinets, forced-air \
unit cooler with 8-10 m² for walk-in rooms. Size for a 6-8 K coil temperature difference.

3. Low-GWP natural refrigerants:
   - R-290 (Propane): GWP 3, COP 3.5-4.5. Flammable; suited to small and medium systems with \
charge limits and proper containment.
   - R-744 (CO2, transcritical): GWP 1. Best for medium to large plants; operating pressures \
up to about 100 bar.

Note: this is demo advice. Configure an advisory API key for a live engineering review.";

/// Returns [`CANNED_ADVICE`] for every prompt.
#[derive(Debug, Clone, Default)]
pub struct CannedAdvisor;

impl CannedAdvisor {
    pub fn new() -> Self {
        Self
    }
}

impl AdvisoryProvider for CannedAdvisor {
    fn name(&self) -> &str {
        "canned"
    }

    fn generate_advisory(
        &self,
        _prompt: &str,
        _options: &AdvisoryOptions,
    ) -> AdvisoryResult<String> {
        Ok(CANNED_ADVICE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_text_is_stable() {
        let advisor = CannedAdvisor::new();
        let a = advisor
            .generate_advisory("one", &AdvisoryOptions::default())
            .unwrap();
        let b = advisor
            .generate_advisory("two", &AdvisoryOptions::default())
            .unwrap();
        assert_eq!(a, b);
        assert!(a.contains("R-744"));
        assert!(!advisor.is_live());
    }
}
