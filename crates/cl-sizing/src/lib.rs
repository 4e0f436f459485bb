//! cl-sizing: cold-room cooling load sizing.
//!
//! Converts room geometry, insulation, ambient/target temperatures and product
//! mass into a required refrigeration capacity, broken down into transmission,
//! product and infiltration components with a safety margin on top.
//!
//! The calculation is pure and reentrant; nothing here holds shared state.

pub mod error;
pub mod facility;
pub mod input;
pub mod insulation;
pub mod load;
pub mod refrigerant;
pub mod result;
pub mod validate;

pub use error::{CalcResult, SizingError};
pub use facility::FacilityType;
pub use input::SizingInput;
pub use insulation::{InsulationEntry, InsulationType, lookup_conductivity};
pub use load::{
    LoadConstants, compute_load, compute_load_with, envelope_area, room_volume, u_value,
};
pub use refrigerant::{RefrigerantOption, recommended_refrigerants};
pub use result::SizingResult;
pub use validate::{
    ClampNotice, ClampOutcome, InputLimits, Range, check_input, clamp_input, sanitize_input,
};
