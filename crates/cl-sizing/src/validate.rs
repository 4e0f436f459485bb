//! Input validation and range clamping.
//!
//! Two stages:
//! - [`check_input`] rejects values the formulas cannot take (non-finite,
//!   zero or negative divisors and dimensions, negative mass).
//! - [`clamp_input`] pulls accepted values into the ranges a cold room
//!   realistically spans, reporting every field it touched.

use crate::error::{CalcResult, SizingError};
use crate::input::SizingInput;
use cl_core::numeric::{ensure_finite, ensure_non_negative, ensure_positive};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.min).min(self.max)
    }
}

/// Accepted ranges for each input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Width, length and height, m.
    pub dimension_m: Range,
    pub insulation_thickness_mm: Range,
    /// Ambient and target, °C.
    pub temperature_c: Range,
    pub product_mass_kg: Range,
    pub product_cp_kj_kgk: Range,
    pub loading_time_hours: Range,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            dimension_m: Range::new(0.5, 50.0),
            insulation_thickness_mm: Range::new(50.0, 300.0),
            temperature_c: Range::new(-50.0, 60.0),
            product_mass_kg: Range::new(0.0, 1_000_000.0),
            product_cp_kj_kgk: Range::new(0.5, 4.5),
            loading_time_hours: Range::new(1.0, 168.0),
        }
    }
}

impl InputLimits {
    /// Every range must be finite with `min <= max`.
    pub fn check(&self) -> CalcResult<()> {
        let ranges = [
            ("dimension_m", self.dimension_m),
            ("insulation_thickness_mm", self.insulation_thickness_mm),
            ("temperature_c", self.temperature_c),
            ("product_mass_kg", self.product_mass_kg),
            ("product_cp_kj_kgk", self.product_cp_kj_kgk),
            ("loading_time_hours", self.loading_time_hours),
        ];
        for (name, range) in ranges {
            if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
                return Err(SizingError::invalid(
                    name,
                    format!("limit range [{}, {}] is not valid", range.min, range.max),
                ));
            }
        }
        Ok(())
    }
}

/// One field moved into range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClampNotice {
    pub field: String,
    pub original: f64,
    pub clamped: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClampOutcome {
    pub input: SizingInput,
    pub notices: Vec<ClampNotice>,
}

impl ClampOutcome {
    pub fn was_clamped(&self) -> bool {
        !self.notices.is_empty()
    }
}

/// Reject inputs that would make the load formulas undefined.
pub fn check_input(input: &SizingInput) -> CalcResult<()> {
    ensure_positive(input.room_width_m, "room_width_m")?;
    ensure_positive(input.room_length_m, "room_length_m")?;
    ensure_positive(input.room_height_m, "room_height_m")?;
    ensure_positive(input.insulation_thickness_mm, "insulation_thickness_mm")?;
    ensure_finite(input.ambient_temp_c, "ambient_temp_c")?;
    ensure_finite(input.target_temp_c, "target_temp_c")?;
    ensure_non_negative(input.product_mass_kg, "product_mass_kg")?;
    ensure_positive(input.product_cp_kj_kgk, "product_cp_kj_kgk")?;
    ensure_positive(input.loading_time_hours, "loading_time_hours")?;
    Ok(())
}

/// Clamp each field into `limits`.
///
/// Expects an input that already passed [`check_input`].
pub fn clamp_input(input: &SizingInput, limits: &InputLimits) -> ClampOutcome {
    let mut notices = Vec::new();
    let mut clamp = |field: &'static str, v: f64, range: Range| -> f64 {
        let c = range.clamp(v);
        if c != v {
            warn!(field, original = v, clamped = c, "input clamped into range");
            notices.push(ClampNotice {
                field: field.to_string(),
                original: v,
                clamped: c,
            });
        }
        c
    };

    let out = SizingInput {
        room_width_m: clamp("room_width_m", input.room_width_m, limits.dimension_m),
        room_length_m: clamp("room_length_m", input.room_length_m, limits.dimension_m),
        room_height_m: clamp("room_height_m", input.room_height_m, limits.dimension_m),
        insulation_type: input.insulation_type,
        insulation_thickness_mm: clamp(
            "insulation_thickness_mm",
            input.insulation_thickness_mm,
            limits.insulation_thickness_mm,
        ),
        ambient_temp_c: clamp("ambient_temp_c", input.ambient_temp_c, limits.temperature_c),
        target_temp_c: clamp("target_temp_c", input.target_temp_c, limits.temperature_c),
        product_mass_kg: clamp(
            "product_mass_kg",
            input.product_mass_kg,
            limits.product_mass_kg,
        ),
        product_cp_kj_kgk: clamp(
            "product_cp_kj_kgk",
            input.product_cp_kj_kgk,
            limits.product_cp_kj_kgk,
        ),
        loading_time_hours: clamp(
            "loading_time_hours",
            input.loading_time_hours,
            limits.loading_time_hours,
        ),
    };

    ClampOutcome {
        input: out,
        notices,
    }
}

/// [`check_input`] followed by [`clamp_input`].
pub fn sanitize_input(input: &SizingInput, limits: &InputLimits) -> CalcResult<ClampOutcome> {
    check_input(input)?;
    limits.check()?;
    Ok(clamp_input(input, limits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_passes_untouched() {
        let outcome = sanitize_input(&SizingInput::default(), &InputLimits::default()).unwrap();
        assert!(!outcome.was_clamped());
        assert_eq!(outcome.input, SizingInput::default());
    }

    #[test]
    fn rejects_non_physical_values() {
        let cases = [
            SizingInput {
                room_width_m: 0.0,
                ..SizingInput::default()
            },
            SizingInput {
                room_height_m: -3.0,
                ..SizingInput::default()
            },
            SizingInput {
                insulation_thickness_mm: 0.0,
                ..SizingInput::default()
            },
            SizingInput {
                loading_time_hours: -1.0,
                ..SizingInput::default()
            },
            SizingInput {
                product_mass_kg: -10.0,
                ..SizingInput::default()
            },
            SizingInput {
                ambient_temp_c: f64::NAN,
                ..SizingInput::default()
            },
            SizingInput {
                product_cp_kj_kgk: f64::INFINITY,
                ..SizingInput::default()
            },
        ];
        for input in cases {
            let err = check_input(&input).unwrap_err();
            assert!(err.is_invalid_input(), "{input:?} gave {err}");
        }
    }

    #[test]
    fn zero_mass_is_allowed() {
        let input = SizingInput::default().with_product_mass(0.0);
        assert!(check_input(&input).is_ok());
    }

    #[test]
    fn clamps_and_reports_fields() {
        let input = SizingInput {
            insulation_thickness_mm: 20.0,
            loading_time_hours: 500.0,
            ..SizingInput::default()
        };
        let outcome = sanitize_input(&input, &InputLimits::default()).unwrap();
        assert_eq!(outcome.input.insulation_thickness_mm, 50.0);
        assert_eq!(outcome.input.loading_time_hours, 168.0);
        let fields: Vec<&str> = outcome.notices.iter().map(|n| n.field.as_str()).collect();
        assert_eq!(fields, ["insulation_thickness_mm", "loading_time_hours"]);
        assert_eq!(outcome.notices[0].original, 20.0);
    }

    #[test]
    fn zero_is_rejected_not_clamped() {
        let input = SizingInput {
            insulation_thickness_mm: 0.0,
            ..SizingInput::default()
        };
        assert!(sanitize_input(&input, &InputLimits::default()).is_err());
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let limits = InputLimits {
            loading_time_hours: Range::new(10.0, 1.0),
            ..InputLimits::default()
        };
        assert!(limits.check().is_err());
        assert!(sanitize_input(&SizingInput::default(), &limits).is_err());
    }

    #[test]
    fn partial_limits_fill_from_defaults() {
        let limits: InputLimits =
            serde_yaml::from_str("insulation_thickness_mm: { min: 40.0, max: 250.0 }").unwrap();
        assert_eq!(limits.insulation_thickness_mm, Range::new(40.0, 250.0));
        assert_eq!(limits.dimension_m, InputLimits::default().dimension_m);
    }
}
