//! Prompt text for an advisory request.

use cl_sizing::{FacilityType, SizingInput, SizingResult};
use std::fmt::Write as _;

/// Summarise a sizing case as a review request.
pub fn format_prompt(
    facility: FacilityType,
    input: &SizingInput,
    result: &SizingResult,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Review this commercial refrigeration sizing design for a {facility}:"
    );
    let _ = writeln!(
        out,
        "Room: {}x{}x{}m",
        input.room_width_m, input.room_length_m, input.room_height_m
    );
    let _ = writeln!(
        out,
        "Insulation: {}mm {}",
        input.insulation_thickness_mm, input.insulation_type
    );
    let _ = writeln!(
        out,
        "Product: {}kg meat/produce, pulled down over {}h",
        input.product_mass_kg, input.loading_time_hours
    );
    let _ = writeln!(
        out,
        "Ambient: {}C, Target: {}C",
        input.ambient_temp_c, input.target_temp_c
    );
    let _ = writeln!(
        out,
        "Total Calc Load: {:.2}kW (transmission {:.2}kW, product {:.2}kW, infiltration {:.2}kW).",
        result.total_load_kw,
        result.transmission_load_kw,
        result.product_load_kw,
        result.infiltration_load_kw
    );
    out.push_str("Please provide:\n");
    out.push_str("1. Recommended compressor capacity (kW at suction temp).\n");
    out.push_str("2. Evaporator surface area recommendation.\n");
    out.push_str(
        "3. Low-GWP natural refrigerant alternatives (CO2 or Propane) suitable for this load.\n",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cl_sizing::compute_load;

    #[test]
    fn prompt_embeds_case() {
        let input = SizingInput::default();
        let result = compute_load(&input).unwrap();
        let prompt = format_prompt(FacilityType::Supermarket, &input, &result);

        assert!(prompt.starts_with("Review this commercial refrigeration sizing design for a SUPERMARKET:"));
        assert!(prompt.contains("Room: 6x8x3.5m"));
        assert!(prompt.contains("Insulation: 100mm PUR"));
        assert!(prompt.contains("Product: 5000kg"));
        assert!(prompt.contains("Ambient: 35C, Target: -18C"));
        assert!(prompt.contains("Total Calc Load: 13.25kW"));
        assert!(prompt.contains("3. Low-GWP natural refrigerant"));
    }
}
