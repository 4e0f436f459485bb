//! Low-GWP natural refrigerants suggested alongside a sizing result.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RefrigerantOption {
    pub designation: &'static str,
    pub common_name: &'static str,
    pub gwp: u32,
    pub note: &'static str,
}

const NATURAL_REFRIGERANTS: [RefrigerantOption; 2] = [
    RefrigerantOption {
        designation: "R-744",
        common_name: "CO2",
        gwp: 1,
        note: "Transcritical systems; high operating pressures, suits medium to large plants",
    },
    RefrigerantOption {
        designation: "R-290",
        common_name: "Propane",
        gwp: 3,
        note: "High efficiency; flammable, keep charge within containment limits",
    },
];

pub fn recommended_refrigerants() -> &'static [RefrigerantOption] {
    &NATURAL_REFRIGERANTS
}
