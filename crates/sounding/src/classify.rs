//! Categorical threat classification from the numeric indices.

use std::fmt;

use serde::Serialize;

/// Categorical threat level for a severe-weather hazard.
///
/// Ladders are evaluated in descending severity order; the first matching
/// threshold wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ThreatLevel {
    /// No identified threat.
    #[default]
    None,
    /// Marginal threat.
    Low,
    /// Moderate threat.
    Moderate,
    /// High threat.
    High,
    /// Extreme threat.
    Extreme,
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ThreatLevel::None => "None",
            ThreatLevel::Low => "Low",
            ThreatLevel::Moderate => "Moderate",
            ThreatLevel::High => "High",
            ThreatLevel::Extreme => "Extreme",
        };
        f.write_str(s)
    }
}

/// Tornado potential from the significant tornado parameter.
pub fn classify_tornado(stp: f64) -> ThreatLevel {
    if stp > 6.0 {
        ThreatLevel::Extreme
    } else if stp > 3.0 {
        ThreatLevel::High
    } else if stp > 1.0 {
        ThreatLevel::Moderate
    } else if stp > 0.5 {
        ThreatLevel::Low
    } else {
        ThreatLevel::None
    }
}

/// Severe thunderstorm potential from CAPE (J/kg) and 0-6 km bulk shear
/// (m/s).
pub fn classify_severe_thunderstorm(cape: f64, shear: f64) -> ThreatLevel {
    if cape > 4000.0 && shear > 20.0 {
        ThreatLevel::Extreme
    } else if cape > 2500.0 && shear > 15.0 {
        ThreatLevel::High
    } else if cape > 1000.0 && shear > 10.0 {
        ThreatLevel::Moderate
    } else if cape > 500.0 {
        ThreatLevel::Low
    } else {
        ThreatLevel::None
    }
}

/// Hail potential from CAPE (J/kg) and the lifted index.
pub fn classify_hail(cape: f64, lifted_index: f64) -> ThreatLevel {
    if cape > 3000.0 && lifted_index < -6.0 {
        ThreatLevel::Extreme
    } else if cape > 2000.0 && lifted_index < -4.0 {
        ThreatLevel::High
    } else if cape > 1000.0 && lifted_index < -2.0 {
        ThreatLevel::Moderate
    } else if cape > 500.0 {
        ThreatLevel::Low
    } else {
        ThreatLevel::None
    }
}
