//! The severe-weather indices record and the analyzer entry point.

use serde::Serialize;
use tracing::debug;

use crate::classify::{
    ThreatLevel, classify_hail, classify_severe_thunderstorm, classify_tornado,
};
use crate::composite::{significant_tornado_parameter, supercell_composite_parameter};
use crate::parcel::{cape, cin, lifted_index, showalter_index};
use crate::profile::Sounding;
use crate::stability::{k_index, total_totals};
use crate::wind::{bulk_shear_0_6km, storm_relative_helicity_0_3km};

/// Immutable snapshot of severe-weather indices for one sounding.
///
/// Level-dependent indices are `None` when the profile never reaches the
/// required pressure or height level, so missing data is never reported
/// as "no instability". Created fresh per [`analyze`] call.
#[derive(Debug, Clone, Serialize)]
pub struct SevereWeatherIndices {
    /// Convective available potential energy, J/kg (>= 0).
    pub cape: f64,
    /// Convective inhibition, J/kg (<= 0).
    pub cin: f64,
    /// Lifted index at 500 hPa; `None` without a 500 hPa level.
    pub lifted_index: Option<f64>,
    /// K-Index; `None` without 850/700/500 hPa levels.
    pub k_index: Option<f64>,
    /// Total Totals; `None` without 850/700/500 hPa levels.
    pub total_totals: Option<f64>,
    /// Showalter index; `None` without 850/500 hPa levels.
    pub showalter_index: Option<f64>,
    /// 0-6 km bulk shear, m/s; `None` if the profile stays below 6 km.
    pub bulk_shear_0_6km: Option<f64>,
    /// 0-3 km storm-relative helicity proxy; `None` with missing shear.
    pub storm_relative_helicity_0_3km: Option<f64>,
    /// Significant tornado parameter; `None` with missing inputs.
    pub significant_tornado_parameter: Option<f64>,
    /// Supercell composite parameter; `None` with missing shear.
    pub supercell_composite_parameter: Option<f64>,
    /// Categorical tornado potential.
    pub tornado_potential: ThreatLevel,
    /// Categorical severe thunderstorm potential.
    pub severe_thunderstorm_potential: ThreatLevel,
    /// Categorical hail potential.
    pub hail_potential: ThreatLevel,
}

/// Computes the full indices record for one sounding.
///
/// Deterministic and side-effect free; the input profile is only read.
/// For classification, a missing sub-index enters the threshold ladders
/// as 0, so absent data can only lower the assessed threat - the record
/// itself still reports `None` for the index.
pub fn analyze(sounding: &Sounding<'_>) -> SevereWeatherIndices {
    let cape = cape(sounding);
    let cin = cin(sounding);
    let lifted_index = lifted_index(sounding);
    let showalter_index = showalter_index(sounding);
    let k_index = k_index(sounding);
    let total_totals = total_totals(sounding);
    let bulk_shear = bulk_shear_0_6km(sounding);
    let srh = storm_relative_helicity_0_3km(sounding);
    let stp = significant_tornado_parameter(cape, srh, bulk_shear, lifted_index);
    let scp = supercell_composite_parameter(cape, bulk_shear);

    debug!(
        n_levels = sounding.len(),
        cape,
        cin,
        ?lifted_index,
        ?bulk_shear,
        "sounding indices computed"
    );

    let tornado_potential = classify_tornado(stp.unwrap_or(0.0));
    let severe_thunderstorm_potential =
        classify_severe_thunderstorm(cape, bulk_shear.unwrap_or(0.0));
    let hail_potential = classify_hail(cape, lifted_index.unwrap_or(0.0));

    SevereWeatherIndices {
        cape,
        cin,
        lifted_index,
        k_index,
        total_totals,
        showalter_index,
        bulk_shear_0_6km: bulk_shear,
        storm_relative_helicity_0_3km: srh,
        significant_tornado_parameter: stp,
        supercell_composite_parameter: scp,
        tornado_potential,
        severe_thunderstorm_potential,
        hail_potential,
    }
}
