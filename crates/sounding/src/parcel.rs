//! Parcel-based instability indices: CAPE, CIN, lifted index, Showalter.
//!
//! Parcels are lifted along a fixed dry-adiabatic lapse rate applied to
//! height above the surface. This is a deliberate approximation; none of
//! the functions here attempt a moist-adiabat solution.

use crate::profile::Sounding;

/// Fixed dry-adiabatic lapse rate, degrees C per km of lift.
pub const DRY_ADIABATIC_LAPSE_C_PER_KM: f64 = 9.8;

/// Gravitational acceleration, m/s^2.
pub const GRAVITY_M_S2: f64 = 9.81;

/// Pressure level the lifted and Showalter indices are evaluated at.
pub const INDEX_LEVEL_HPA: f64 = 500.0;

/// Pressure level the Showalter parcel starts from.
pub const SHOWALTER_BASE_HPA: f64 = 850.0;

/// Fixed cooling applied to the surface parcel at 500 hPa for the lifted
/// index approximation.
const LIFTED_PARCEL_COOLING_C: f64 = 30.0;

const KELVIN_OFFSET: f64 = 273.15;

/// Temperature of a surface parcel lifted dry-adiabatically to the given
/// height above the surface.
fn parcel_temperature(surface_temp: f64, agl_m: f64) -> f64 {
    surface_temp - DRY_ADIABATIC_LAPSE_C_PER_KM * agl_m / 1000.0
}

/// Accumulated positive and negative buoyant work over the profile.
///
/// At each level the surface parcel's temperature is compared to the
/// environment; the buoyant work over the layer up to the next level is
/// `g * (Tparcel - Tenv) / TenvK * dz`, with the denominator in kelvin so
/// the term stays finite across the 0 C isotherm.
fn buoyancy_integral(sounding: &Sounding<'_>) -> (f64, f64) {
    let temperature = sounding.temperature();
    let height = sounding.height();
    let surface_temp = temperature[0];

    let mut positive = 0.0;
    let mut negative = 0.0;
    for i in 0..sounding.len() - 1 {
        let parcel = parcel_temperature(surface_temp, sounding.height_agl(i));
        let env = temperature[i];
        let dz = height[i + 1] - height[i];
        let work = GRAVITY_M_S2 * (parcel - env) / (env + KELVIN_OFFSET) * dz;
        if parcel > env {
            positive += work;
        } else {
            negative += work;
        }
    }
    (positive, negative)
}

/// Convective available potential energy (J/kg), clamped to a minimum
/// of 0. Zero whenever the lifted parcel is never warmer than the
/// environment.
pub fn cape(sounding: &Sounding<'_>) -> f64 {
    buoyancy_integral(sounding).0.max(0.0)
}

/// Convective inhibition (J/kg): the negative-buoyancy counterpart of
/// [`cape`], clamped to a maximum of 0.
pub fn cin(sounding: &Sounding<'_>) -> f64 {
    buoyancy_integral(sounding).1.min(0.0)
}

/// Lifted index: environment temperature at the first level at or below
/// 500 hPa minus a surface parcel approximated as 30 C colder than the
/// surface. Negative values indicate instability.
///
/// `None` if the profile never reaches 500 hPa.
pub fn lifted_index(sounding: &Sounding<'_>) -> Option<f64> {
    let i500 = sounding.level_at_or_below_pressure(INDEX_LEVEL_HPA)?;
    let env = sounding.temperature()[i500];
    let parcel = sounding.temperature()[0] - LIFTED_PARCEL_COOLING_C;
    Some(env - parcel)
}

/// Showalter index: a parcel lifted dry-adiabatically from the 850 hPa
/// level to the 500 hPa level, compared to the environment there.
///
/// `None` if the profile reaches neither 850 nor 500 hPa.
pub fn showalter_index(sounding: &Sounding<'_>) -> Option<f64> {
    let i850 = sounding.level_at_or_below_pressure(SHOWALTER_BASE_HPA)?;
    let i500 = sounding.level_at_or_below_pressure(INDEX_LEVEL_HPA)?;

    let lift_m = sounding.height()[i500] - sounding.height()[i850];
    let parcel =
        sounding.temperature()[i850] - DRY_ADIABATIC_LAPSE_C_PER_KM * lift_m / 1000.0;
    Some(sounding.temperature()[i500] - parcel)
}
