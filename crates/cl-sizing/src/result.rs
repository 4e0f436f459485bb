//! Load breakdown produced by the calculator.

use cl_core::units::Power;
use serde::{Deserialize, Serialize};

/// Cooling load breakdown for one [`crate::SizingInput`].
///
/// `total_load_kw` = (transmission + product + infiltration) x safety factor.
/// Negative components are reported unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    pub transmission_load_kw: f64,
    pub product_load_kw: f64,
    pub infiltration_load_kw: f64,
    pub total_load_kw: f64,
    /// Share of the total contributed by the safety factor.
    pub safety_margin_kw: f64,
    pub envelope_area_m2: f64,
    pub volume_m3: f64,
    /// W/(m²·K)
    pub u_value_w_m2k: f64,
    pub temp_diff_k: f64,
}

impl SizingResult {
    pub fn total_load(&self) -> Power {
        cl_core::kw(self.total_load_kw)
    }

    /// Sum of the three components before the safety factor, kW.
    pub fn base_load_kw(&self) -> f64 {
        self.transmission_load_kw + self.product_load_kw + self.infiltration_load_kw
    }
}
