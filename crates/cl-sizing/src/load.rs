//! Cooling load calculator.
//!
//! Three heat gains are summed and scaled by a safety factor:
//!
//! - transmission through the envelope: `A * U * dT`
//! - product pull-down: `m * cp * dT / t_pull`
//! - infiltration: `V * ACH * f_air * dT / 3600`
//!
//! Every component is a `uom` [`Power`]; the kW figures are read off only when
//! the [`SizingResult`] is assembled.
//!
//! The infiltration term uses a fixed air-change rate and a lumped
//! density/enthalpy factor. It is a coarse stand-in, not a psychrometric model.

use crate::error::CalcResult;
use crate::input::SizingInput;
use crate::result::SizingResult;
use crate::validate::check_input;
use cl_core::numeric::{ensure_finite, ensure_non_negative, ensure_positive};
use cl_core::units::{
    HeatTransfer, Length, Power, ThermalConductivity, as_kw, as_w, as_w_per_m2_k, hours,
    j_per_m3_k, m2, m3, mm, w_per_m_k,
};
use tracing::debug;

/// Fixed model coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadConstants {
    pub air_changes_per_hour: f64,
    /// Combined air density / enthalpy factor used with the air-change volume,
    /// taken as J/(m³·K).
    pub air_factor: f64,
    /// Multiplier applied once to the summed load.
    pub safety_factor: f64,
}

impl Default for LoadConstants {
    fn default() -> Self {
        Self {
            air_changes_per_hour: 10.0,
            air_factor: 0.3,
            safety_factor: 1.15,
        }
    }
}

impl LoadConstants {
    fn check(&self) -> CalcResult<()> {
        ensure_non_negative(self.air_changes_per_hour, "air_changes_per_hour")?;
        ensure_non_negative(self.air_factor, "air_factor")?;
        ensure_positive(self.safety_factor, "safety_factor")?;
        Ok(())
    }
}

/// Envelope area in m²: four walls plus one horizontal surface.
///
/// Only one of floor/ceiling is counted.
pub fn envelope_area(width_m: f64, length_m: f64, height_m: f64) -> f64 {
    2.0 * (width_m * height_m + length_m * height_m) + width_m * length_m
}

/// Room volume in m³.
pub fn room_volume(width_m: f64, length_m: f64, height_m: f64) -> f64 {
    width_m * length_m * height_m
}

/// Panel U-value in W/(m²·K): conductivity over thickness in metres.
pub fn u_value(conductivity_w_mk: f64, thickness_mm: f64) -> CalcResult<f64> {
    let k = ensure_positive(conductivity_w_mk, "conductivity")?;
    let t = ensure_positive(thickness_mm, "insulation_thickness_mm")?;
    Ok(as_w_per_m2_k(panel_u_value(w_per_m_k(k), mm(t))))
}

fn panel_u_value(conductivity: ThermalConductivity, thickness: Length) -> HeatTransfer {
    conductivity / thickness
}

/// Compute the cooling load with the standard coefficients.
pub fn compute_load(input: &SizingInput) -> CalcResult<SizingResult> {
    compute_load_with(input, &LoadConstants::default())
}

/// Compute the cooling load with explicit coefficients.
pub fn compute_load_with(
    input: &SizingInput,
    constants: &LoadConstants,
) -> CalcResult<SizingResult> {
    check_input(input)?;
    constants.check()?;

    let w_m = input.room_width_m;
    let l_m = input.room_length_m;
    let h_m = input.room_height_m;
    let dt = input.temp_diff();

    let area = envelope_area(w_m, l_m, h_m);
    let volume = room_volume(w_m, l_m, h_m);
    let u = panel_u_value(
        w_per_m_k(input.insulation_type.conductivity_w_mk()),
        input.insulation_thickness(),
    );

    let transmission: Power = m2(area) * u * dt;
    let product: Power =
        input.product_mass() * input.product_cp() * dt / input.loading_time();
    let infiltration: Power = m3(volume) * constants.air_changes_per_hour / hours(1.0)
        * j_per_m3_k(constants.air_factor)
        * dt;

    let base = transmission + product + infiltration;
    let total = base * constants.safety_factor;

    ensure_finite(as_w(total), "total_load")?;

    debug!(
        area_m2 = area,
        u_value = as_w_per_m2_k(u),
        temp_diff_k = input.temp_diff_k(),
        transmission_w = as_w(transmission),
        product_w = as_w(product),
        infiltration_w = as_w(infiltration),
        total_w = as_w(total),
        "cooling load computed"
    );

    Ok(SizingResult {
        transmission_load_kw: as_kw(transmission),
        product_load_kw: as_kw(product),
        infiltration_load_kw: as_kw(infiltration),
        total_load_kw: as_kw(total),
        safety_margin_kw: as_kw(total - base),
        envelope_area_m2: area,
        volume_m3: volume,
        u_value_w_m2k: as_w_per_m2_k(u),
        temp_diff_k: input.temp_diff_k(),
    })
}
