//! Insulation materials and their base thermal conductivity.

use crate::error::{CalcResult, SizingError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Panel core material.
///
/// Parsing an unknown tag is a `SizingError::Configuration`; there is no
/// fallback conductivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InsulationType {
    /// Polyurethane foam.
    Pur,
    /// Polyisocyanurate foam.
    Pir,
    /// Expanded polystyrene.
    Eps,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsulationEntry {
    pub kind: InsulationType,
    pub tag: &'static str,
    pub display_name: &'static str,
    /// W/(m·K)
    pub conductivity_w_mk: f64,
}

// PIR shares the PUR figure; EPS sits at the low-density end of its range.
static INSULATION_CATALOG: [InsulationEntry; 3] = [
    InsulationEntry {
        kind: InsulationType::Pur,
        tag: "PUR",
        display_name: "Polyurethane",
        conductivity_w_mk: 0.022,
    },
    InsulationEntry {
        kind: InsulationType::Pir,
        tag: "PIR",
        display_name: "Polyisocyanurate",
        conductivity_w_mk: 0.022,
    },
    InsulationEntry {
        kind: InsulationType::Eps,
        tag: "EPS",
        display_name: "Expanded polystyrene",
        conductivity_w_mk: 0.036,
    },
];

impl InsulationType {
    pub fn all() -> [InsulationType; 3] {
        [InsulationType::Pur, InsulationType::Pir, InsulationType::Eps]
    }

    pub fn entry(self) -> &'static InsulationEntry {
        match self {
            InsulationType::Pur => &INSULATION_CATALOG[0],
            InsulationType::Pir => &INSULATION_CATALOG[1],
            InsulationType::Eps => &INSULATION_CATALOG[2],
        }
    }

    pub fn tag(self) -> &'static str {
        self.entry().tag
    }

    /// Base thermal conductivity in W/(m·K).
    pub fn conductivity_w_mk(self) -> f64 {
        self.entry().conductivity_w_mk
    }
}

pub fn catalog() -> &'static [InsulationEntry] {
    &INSULATION_CATALOG
}

/// Conductivity for a raw tag such as `"PUR"`.
pub fn lookup_conductivity(tag: &str) -> CalcResult<f64> {
    tag.parse::<InsulationType>()
        .map(InsulationType::conductivity_w_mk)
}

impl FromStr for InsulationType {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        INSULATION_CATALOG
            .iter()
            .find(|e| e.tag.eq_ignore_ascii_case(wanted))
            .map(|e| e.kind)
            .ok_or_else(|| SizingError::Configuration {
                tag: s.to_string(),
            })
    }
}

impl TryFrom<String> for InsulationType {
    type Error = SizingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InsulationType> for String {
    fn from(value: InsulationType) -> Self {
        value.tag().to_string()
    }
}

impl fmt::Display for InsulationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
