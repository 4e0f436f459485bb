//! Sizing report assembled for display or export.

use cl_advisory::Advisory;
use cl_sizing::{ClampNotice, FacilityType, RefrigerantOption, SizingInput, SizingResult};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Serialize)]
pub struct SizingReport {
    pub job_name: String,
    pub facility: FacilityType,
    /// RFC 3339, UTC.
    pub generated_at: String,
    pub input_fingerprint: String,
    /// Input actually sized (after clamping).
    pub input: SizingInput,
    pub clamped: Vec<ClampNotice>,
    pub result: SizingResult,
    pub refrigerants: Vec<RefrigerantOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<Advisory>,
}

impl SizingReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_text(&self) -> String {
        let r = &self.result;
        let i = &self.input;
        let mut out = String::new();

            let _ = writeln!(out, "{} ({})", self.job_name, self.facility);
        let _ = writeln!(
            out,
            "  Room: {} x {} x {} m, {} mm {}",
            i.room_width_m,
            i.room_length_m,
            i.room_height_m,
            i.insulation_thickness_mm,
            i.insulation_type
        );
        let _ = writeln!(
            out,
            "  Ambient {} °C, target {} °C, {} kg product over {} h",
            i.ambient_temp_c, i.target_temp_c, i.product_mass_kg, i.loading_time_hours
        );

        for notice in &self.clamped {
            let _ = writeln!(
                out,
                "  ! {} clamped from {} to {}",
                notice.field, notice.original, notice.clamped
            );
        }

        let _ = writeln!(out, "\nTotal system load: {:.2} kW", r.total_load_kw);
        let _ = writeln!(out, "  Transmission:  {:>8.2} kW", r.transmission_load_kw);
        let _ = writeln!(out, "  Product load:  {:>8.2} kW", r.product_load_kw);
        let _ = writeln!(out, "  Infiltration:  {:>8.2} kW", r.infiltration_load_kw);
        let _ = writeln!(out, "  Safety margin: {:>8.2} kW", r.safety_margin_kw);
        let _ = writeln!(
            out,
            "  Envelope {:.1} m², volume {:.1} m³, U {:.3} W/(m²·K), ΔT {} K",
            r.envelope_area_m2, r.volume_m3, r.u_value_w_m2k, r.temp_diff_k
        );

        let _ = writeln!(out, "\nRecommended refrigerants:");
        for option in &self.refrigerants {
            let _ = writeln!(
                out,
                "  {} ({}, GWP {}): {}",
                option.designation, option.common_name, option.gwp, option.note
            );
        }

        if let Some(advisory) = &self.advisory {
            let _ = writeln!(out, "\nEngineering review [{:?}]:", advisory.source);
            let _ = writeln!(out, "{}", advisory.text);
        }

        let _ = writeln!(out, "\nInput fingerprint: {}", self.input_fingerprint);
        out
    }
}
