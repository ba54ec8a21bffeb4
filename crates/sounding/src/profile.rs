//! Borrowed view over one vertical atmospheric profile.

use crate::error::SoundingError;

/// Borrowed view over a single atmospheric sounding.
///
/// Six parallel slices of equal length, one entry per vertical level,
/// ordered by increasing height (decreasing pressure). This struct does not
/// own its data; it borrows arrays typically held by the caller's fetch or
/// synthesis layer, and never mutates them.
///
/// Units: pressure hPa, temperature and dewpoint degrees C, height m,
/// wind speed m/s, wind direction degrees (meteorological convention,
/// 0-360, the direction the wind blows *from*).
#[derive(Debug, Clone, Copy)]
pub struct Sounding<'a> {
    pressure: &'a [f64],
    temperature: &'a [f64],
    dewpoint: &'a [f64],
    height: &'a [f64],
    wind_speed: &'a [f64],
    wind_direction: &'a [f64],
}

impl<'a> Sounding<'a> {
    /// Creates a new `Sounding` view after validating that the profile is
    /// non-empty and all six slices share the pressure sequence's length.
    ///
    /// # Errors
    ///
    /// Returns [`SoundingError::EmptyProfile`] for a zero-level profile and
    /// [`SoundingError::LengthMismatch`] naming the first field whose
    /// length differs from `pressure.len()`.
    pub fn new(
        pressure: &'a [f64],
        temperature: &'a [f64],
        dewpoint: &'a [f64],
        height: &'a [f64],
        wind_speed: &'a [f64],
        wind_direction: &'a [f64],
    ) -> Result<Self, SoundingError> {
        if pressure.is_empty() {
            return Err(SoundingError::EmptyProfile);
        }

        let expected = pressure.len();
        let fields: [(&'static str, usize); 5] = [
            ("temperature", temperature.len()),
            ("dewpoint", dewpoint.len()),
            ("height", height.len()),
            ("wind_speed", wind_speed.len()),
            ("wind_direction", wind_direction.len()),
        ];
        for (field, got) in fields {
            if got != expected {
                return Err(SoundingError::LengthMismatch {
                    field,
                    expected,
                    got,
                });
            }
        }

        Ok(Self {
            pressure,
            temperature,
            dewpoint,
            height,
            wind_speed,
            wind_direction,
        })
    }

    /// Returns the pressure slice (hPa).
    pub fn pressure(&self) -> &'a [f64] {
        self.pressure
    }

    /// Returns the temperature slice (degrees C).
    pub fn temperature(&self) -> &'a [f64] {
        self.temperature
    }

    /// Returns the dewpoint slice (degrees C).
    pub fn dewpoint(&self) -> &'a [f64] {
        self.dewpoint
    }

    /// Returns the height slice (m).
    pub fn height(&self) -> &'a [f64] {
        self.height
    }

    /// Returns the wind speed slice (m/s).
    pub fn wind_speed(&self) -> &'a [f64] {
        self.wind_speed
    }

    /// Returns the wind direction slice (degrees).
    pub fn wind_direction(&self) -> &'a [f64] {
        self.wind_direction
    }

    /// Returns the number of vertical levels.
    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    /// Returns `true` if the profile has zero levels. Construction rejects
    /// empty profiles, so this is always `false` for a validated view.
    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }

    /// Height of level `i` above the surface level, in meters.
    pub fn height_agl(&self, i: usize) -> f64 {
        self.height[i] - self.height[0]
    }

    /// Index of the first (lowest) level at or below the given pressure.
    ///
    /// Pressure decreases with height, so this is the nearest level at or
    /// above the target altitude. `None` if the profile never reaches it.
    pub fn level_at_or_below_pressure(&self, hpa: f64) -> Option<usize> {
        aeolus_stats::first_at_or_below(self.pressure, hpa)
    }

    /// Index of the first level whose height above the surface is at least
    /// `meters`. `None` if the profile never reaches it.
    pub fn level_at_or_above_agl(&self, meters: f64) -> Option<usize> {
        let surface = self.height[0];
        aeolus_stats::first_at_or_above(self.height, surface + meters)
    }
}
