//! Facility categories a cold room is sized for.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FacilityType {
    #[default]
    Supermarket,
    ColdStorage,
    Retail,
}

impl FacilityType {
    pub fn all() -> [FacilityType; 3] {
        [
            FacilityType::Supermarket,
            FacilityType::ColdStorage,
            FacilityType::Retail,
        ]
    }

    pub fn tag(self) -> &'static str {
        match self {
            FacilityType::Supermarket => "SUPERMARKET",
            FacilityType::ColdStorage => "COLD_STORAGE",
            FacilityType::Retail => "RETAIL",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
