//! Sizing input record.

use crate::insulation::InsulationType;
use cl_core::units::{Length, Mass, SpecificHeat, TempInterval, Time};
use serde::{Deserialize, Serialize};

/// One cold-room sizing case.
///
/// Fields carry their unit in the name. Values are taken as entered; use
/// [`crate::check_input`] / [`crate::sanitize_input`] before trusting them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingInput {
    pub room_width_m: f64,
    pub room_length_m: f64,
    pub room_height_m: f64,
    pub insulation_type: InsulationType,
    pub insulation_thickness_mm: f64,
    pub ambient_temp_c: f64,
    /// Negative for freezer rooms.
    pub target_temp_c: f64,
    pub product_mass_kg: f64,
    /// kJ/(kg·K)
    pub product_cp_kj_kgk: f64,
    /// Pull-down duration.
    pub loading_time_hours: f64,
}

impl Default for SizingInput {
    /// A supermarket freezer room: 6 x 8 x 3.5 m, 100 mm PUR, 35 °C outside,
    /// -18 °C inside, 5 t of product pulled down over a day.
    fn default() -> Self {
        Self {
            room_width_m: 6.0,
            room_length_m: 8.0,
            room_height_m: 3.5,
            insulation_type: InsulationType::Pur,
            insulation_thickness_mm: 100.0,
            ambient_temp_c: 35.0,
            target_temp_c: -18.0,
            product_mass_kg: 5000.0,
            product_cp_kj_kgk: 3.2,
            loading_time_hours: 24.0,
        }
    }
}

impl SizingInput {
    /// Ambient minus target. Zero or negative values are kept as-is.
    pub fn temp_diff_k(&self) -> f64 {
        self.ambient_temp_c - self.target_temp_c
    }

    pub fn temp_diff(&self) -> TempInterval {
        cl_core::delta_k(self.temp_diff_k())
    }

    pub fn insulation_thickness(&self) -> Length {
        cl_core::mm(self.insulation_thickness_mm)
    }

    pub fn product_mass(&self) -> Mass {
        cl_core::kg(self.product_mass_kg)
    }

    pub fn product_cp(&self) -> SpecificHeat {
        cl_core::kj_per_kg_k(self.product_cp_kj_kgk)
    }

    pub fn loading_time(&self) -> Time {
        cl_core::hours(self.loading_time_hours)
    }

    pub fn with_product_mass(mut self, product_mass_kg: f64) -> Self {
        self.product_mass_kg = product_mass_kg;
        self
    }

    pub fn with_temperatures(mut self, ambient_temp_c: f64, target_temp_c: f64) -> Self {
        self.ambient_temp_c = ambient_temp_c;
        self.target_temp_c = target_temp_c;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_freezer_room() {
        let input = SizingInput::default();
        assert_eq!(input.insulation_type, InsulationType::Pur);
        assert_eq!(input.temp_diff_k(), 53.0);
    }

    #[test]
    fn typed_accessors_use_si() {
        let input = SizingInput::default();
        assert!((input.insulation_thickness().value - 0.1).abs() < 1e-15);
        assert!((input.loading_time().value - 86_400.0).abs() < 1e-9);
        assert!((input.product_cp().value - 3200.0).abs() < 1e-9);
        assert!((input.temp_diff().value - 53.0).abs() < 1e-12);
    }

    #[test]
    fn yaml_round_trip_uses_tags() {
        let input = SizingInput::default();
        let yaml = serde_yaml::to_string(&input).unwrap();
        assert!(yaml.contains("insulation_type: PUR"));
        let back: SizingInput = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, input);
    }
}
