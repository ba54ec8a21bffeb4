//! Seeded synthetic demo inputs.
//!
//! Stand-ins for the external data suppliers: a plausible convective-season
//! profile and a gently trending annual series, both reproducible from an
//! explicit seed.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

use aeolus_trend::AnnualObservation;

use crate::config::SyntheticToml;
use crate::input::SoundingFile;

/// Standard demo profile levels, hPa.
const LEVEL_PRESSURE: [f64; 9] = [
    1000.0, 925.0, 850.0, 700.0, 500.0, 400.0, 300.0, 250.0, 200.0,
];

/// Heights for the demo profile levels, m.
const LEVEL_HEIGHT: [f64; 9] = [
    0.0, 750.0, 1500.0, 3000.0, 5800.0, 7200.0, 9200.0, 10400.0, 11800.0,
];

/// Environmental lapse rate for the demo profile, degrees C per km.
const ENVIRONMENTAL_LAPSE_C_PER_KM: f64 = 7.2;

/// Generates a synthetic sounding around the configured surface state.
pub fn sounding(config: &SyntheticToml, seed: u64) -> SoundingFile {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut noise = |sd: f64| -> f64 {
        sd * <StandardNormal as Distribution<f64>>::sample(&StandardNormal, &mut rng)
    };

    let n = LEVEL_PRESSURE.len();
    let surface_depression = config.surface_temperature - config.surface_dewpoint;

    let mut temperature = Vec::with_capacity(n);
    let mut dewpoint = Vec::with_capacity(n);
    let mut wind_speed = Vec::with_capacity(n);
    let mut wind_direction = Vec::with_capacity(n);

    for (i, &height) in LEVEL_HEIGHT.iter().enumerate() {
        let km = height / 1000.0;
        let temp = config.surface_temperature - ENVIRONMENTAL_LAPSE_C_PER_KM * km + noise(0.5);
        // The air dries out with altitude.
        let depression = surface_depression + 1.5 * km;

        temperature.push(temp);
        dewpoint.push(temp - depression);
        wind_speed.push((4.0 + 3.5 * i as f64 + noise(1.0)).max(0.0));
        wind_direction.push((170.0 + 11.0 * i as f64 + noise(5.0)).rem_euclid(360.0));
    }

    SoundingFile {
        pressure: LEVEL_PRESSURE.to_vec(),
        temperature,
        dewpoint,
        height: LEVEL_HEIGHT.to_vec(),
        wind_speed,
        wind_direction,
    }
}

/// Generates a synthetic annual series: linear drift plus Gaussian noise.
pub fn series(config: &SyntheticToml, seed: u64, n_years: usize) -> Vec<AnnualObservation> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..n_years)
        .map(|i| {
            let noise: f64 = StandardNormal.sample(&mut rng);
            let value = config.base_value + config.annual_slope * i as f64 + config.noise_sd * noise;
            AnnualObservation::new(config.start_year + i as i32, value)
        })
        .collect()
}
