//! Composite severe-weather parameters built from the base indices.
//!
//! Both parameters are empirically simplified normalizations, not the
//! literature-standard formulations; they take the already-computed base
//! indices so the whole record is assembled from one pass over the profile.

/// Significant tornado parameter: the product of four normalized,
/// non-negative terms - `CAPE/1500`, `SRH/150`, `shear/20` and
/// `max(0, -LI)/2`.
///
/// `None` when the shear-derived terms or the lifted index are
/// unavailable (profile too shallow).
pub fn significant_tornado_parameter(
    cape: f64,
    srh: Option<f64>,
    shear: Option<f64>,
    lifted_index: Option<f64>,
) -> Option<f64> {
    let srh = srh?;
    let shear = shear?;
    let li = lifted_index?;

    let cape_term = cape / 1500.0;
    let srh_term = srh / 150.0;
    let shear_term = shear / 20.0;
    let li_term = (-li).max(0.0) / 2.0;

    Some(cape_term * srh_term * shear_term * li_term)
}

/// Supercell composite parameter: `(CAPE/1000) * (shear/20)`.
///
/// `None` when shear is unavailable.
pub fn supercell_composite_parameter(cape: f64, shear: Option<f64>) -> Option<f64> {
    let shear = shear?;
    Some(cape / 1000.0 * (shear / 20.0))
}
