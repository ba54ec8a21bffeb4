//! Wind-derived kinematic quantities: bulk shear and the SRH proxy.

use crate::profile::Sounding;

/// Depth of the bulk shear layer, meters above the surface.
pub const SHEAR_LAYER_DEPTH_M: f64 = 6000.0;

/// Empirical factor mapping 0-6 km bulk shear to the 0-3 km
/// storm-relative helicity proxy.
pub const SRH_SHEAR_FACTOR: f64 = 15.0;

/// Converts speed (m/s) and meteorological direction (degrees the wind
/// blows *from*) to horizontal (u, v) components.
fn wind_components(speed: f64, direction_deg: f64) -> (f64, f64) {
    let rad = direction_deg.to_radians();
    (-speed * rad.sin(), -speed * rad.cos())
}

/// Bulk wind shear between the surface and the first level at least 6 km
/// above it: the magnitude of the vector difference of the horizontal
/// wind. `None` if the profile never reaches 6 km.
pub fn bulk_shear_0_6km(sounding: &Sounding<'_>) -> Option<f64> {
    let top = sounding.level_at_or_above_agl(SHEAR_LAYER_DEPTH_M)?;

    let speed = sounding.wind_speed();
    let direction = sounding.wind_direction();
    let (u0, v0) = wind_components(speed[0], direction[0]);
    let (u6, v6) = wind_components(speed[top], direction[top]);

    Some(((u6 - u0).powi(2) + (v6 - v0).powi(2)).sqrt())
}

/// Storm-relative helicity over 0-3 km, approximated as bulk shear times
/// [`SRH_SHEAR_FACTOR`].
///
/// This is a coarse proxy, not a hodograph integral; it lives behind its
/// own function so a rigorous SRH can be substituted without touching the
/// indices record. `None` when [`bulk_shear_0_6km`] is `None`.
pub fn storm_relative_helicity_0_3km(sounding: &Sounding<'_>) -> Option<f64> {
    bulk_shear_0_6km(sounding).map(|shear| shear * SRH_SHEAR_FACTOR)
}
