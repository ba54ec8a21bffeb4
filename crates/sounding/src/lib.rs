//! Severe-weather diagnostics for the aeolus analyzer suite.
//!
//! This crate turns one vertical atmospheric profile (a [`Sounding`]) into
//! an immutable [`SevereWeatherIndices`] record: instability and composite
//! indices plus three categorical threat classifications.
//!
//! The thermodynamics are deliberately simplified: parcels are lifted along
//! a fixed dry-adiabatic lapse rate rather than a full moist-adiabat
//! solver, and storm-relative helicity is a shear proxy. Each simplified
//! quantity lives behind its own function so a rigorous replacement can be
//! swapped in without changing the record shape.
//!
//! # Quick start
//!
//! ```
//! use aeolus_sounding::{Sounding, analyze};
//!
//! let pressure = [1000.0, 850.0, 700.0, 500.0, 300.0];
//! let temperature = [25.0, 16.0, 8.0, -8.0, -33.0];
//! let dewpoint = [20.0, 14.0, 2.0, -15.0, -45.0];
//! let height = [0.0, 1500.0, 3000.0, 5800.0, 9200.0];
//! let wind_speed = [5.0, 15.0, 20.0, 25.0, 35.0];
//! let wind_direction = [180.0, 200.0, 220.0, 240.0, 255.0];
//!
//! let sounding = Sounding::new(
//!     &pressure,
//!     &temperature,
//!     &dewpoint,
//!     &height,
//!     &wind_speed,
//!     &wind_direction,
//! )?;
//! let indices = analyze(&sounding);
//! assert!(indices.cape >= 0.0);
//! # Ok::<(), aeolus_sounding::SoundingError>(())
//! ```

mod classify;
mod composite;
mod error;
mod indices;
mod parcel;
mod profile;
mod stability;
mod wind;

pub use classify::{
    ThreatLevel, classify_hail, classify_severe_thunderstorm, classify_tornado,
};
pub use composite::{significant_tornado_parameter, supercell_composite_parameter};
pub use error::SoundingError;
pub use indices::{SevereWeatherIndices, analyze};
pub use parcel::{cape, cin, lifted_index, showalter_index};
pub use profile::Sounding;
pub use stability::{k_index, total_totals};
pub use wind::{bulk_shear_0_6km, storm_relative_helicity_0_3km};
