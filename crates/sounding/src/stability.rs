//! Empirical stability indices from standard pressure levels.

use crate::profile::Sounding;

/// The three standard levels the empirical indices are built from.
struct StandardLevels {
    i850: usize,
    i700: usize,
    i500: usize,
}

/// Locates the nearest levels at or below 850, 700 and 500 hPa.
/// `None` if any of the three is absent from the profile.
fn standard_levels(sounding: &Sounding<'_>) -> Option<StandardLevels> {
    Some(StandardLevels {
        i850: sounding.level_at_or_below_pressure(850.0)?,
        i700: sounding.level_at_or_below_pressure(700.0)?,
        i500: sounding.level_at_or_below_pressure(500.0)?,
    })
}

/// K-Index: `T850 - T500 + Td850 - (T700 - Td700)`.
///
/// Combines mid-level lapse rate with low-level moisture and the 700 hPa
/// dewpoint depression. `None` if any of the 850/700/500 hPa levels is
/// absent.
pub fn k_index(sounding: &Sounding<'_>) -> Option<f64> {
    let levels = standard_levels(sounding)?;
    let t = sounding.temperature();
    let td = sounding.dewpoint();

    Some(t[levels.i850] - t[levels.i500] + td[levels.i850] - (t[levels.i700] - td[levels.i700]))
}

/// Total Totals: cross totals `Td850 - T500` plus vertical totals
/// `T850 - T500`. Same level-availability precondition as [`k_index`].
pub fn total_totals(sounding: &Sounding<'_>) -> Option<f64> {
    let levels = standard_levels(sounding)?;
    let t = sounding.temperature();
    let td = sounding.dewpoint();

    let cross = td[levels.i850] - t[levels.i500];
    let vertical = t[levels.i850] - t[levels.i500];
    Some(cross + vertical)
}
