//! Property-style checks on an unstable convective profile.

use aeolus_sounding::{
    Sounding, analyze, classify_hail, classify_severe_thunderstorm, classify_tornado,
};
use approx::assert_relative_eq;

const PRESSURE: [f64; 7] = [1000.0, 900.0, 850.0, 700.0, 500.0, 400.0, 300.0];
const TEMPERATURE: [f64; 7] = [30.0, 18.0, 13.0, -2.0, -24.0, -36.0, -50.0];
const DEWPOINT: [f64; 7] = [24.0, 16.0, 12.0, -4.0, -26.0, -40.0, -55.0];
const HEIGHT: [f64; 7] = [0.0, 1000.0, 1500.0, 3000.0, 5700.0, 7400.0, 9400.0];
const WIND_SPEED: [f64; 7] = [3.0, 8.0, 12.0, 18.0, 24.0, 28.0, 32.0];
const WIND_DIRECTION: [f64; 7] = [160.0, 180.0, 190.0, 210.0, 230.0, 240.0, 250.0];

fn unstable() -> Sounding<'static> {
    Sounding::new(
        &PRESSURE,
        &TEMPERATURE,
        &DEWPOINT,
        &HEIGHT,
        &WIND_SPEED,
        &WIND_DIRECTION,
    )
    .unwrap()
}

#[test]
fn steep_lapse_rate_produces_cape() {
    let indices = analyze(&unstable());
    assert!(indices.cape > 0.0, "cape = {}", indices.cape);
}

#[test]
fn classifications_match_ladders_applied_to_record_values() {
    let indices = analyze(&unstable());

    let stp = indices.significant_tornado_parameter.unwrap();
    assert_eq!(indices.tornado_potential, classify_tornado(stp));

    let shear = indices.bulk_shear_0_6km.unwrap();
    assert_eq!(
        indices.severe_thunderstorm_potential,
        classify_severe_thunderstorm(indices.cape, shear)
    );

    let li = indices.lifted_index.unwrap();
    assert_eq!(indices.hail_potential, classify_hail(indices.cape, li));
}

#[test]
fn shear_invariant_under_uniform_wind_rotation() {
    let rotated: Vec<f64> = WIND_DIRECTION.iter().map(|d| (d + 73.0) % 360.0).collect();
    let base = analyze(&unstable());
    let turned = analyze(
        &Sounding::new(
            &PRESSURE,
            &TEMPERATURE,
            &DEWPOINT,
            &HEIGHT,
            &WIND_SPEED,
            &rotated,
        )
        .unwrap(),
    );

    assert_relative_eq!(
        base.bulk_shear_0_6km.unwrap(),
        turned.bulk_shear_0_6km.unwrap(),
        epsilon = 1e-9
    );
    // Everything downstream of shear is rotation-invariant too.
    assert_eq!(base.tornado_potential, turned.tornado_potential);
    assert_eq!(
        base.severe_thunderstorm_potential,
        turned.severe_thunderstorm_potential
    );
}

#[test]
fn srh_and_composites_derive_from_shear() {
    let indices = analyze(&unstable());
    let shear = indices.bulk_shear_0_6km.unwrap();

    assert_relative_eq!(
        indices.storm_relative_helicity_0_3km.unwrap(),
        shear * 15.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        indices.supercell_composite_parameter.unwrap(),
        indices.cape / 1000.0 * (shear / 20.0),
        epsilon = 1e-9
    );
}

#[test]
fn sounding_is_send_and_sync() {
    fn assert_impl<T: Send + Sync>() {}
    assert_impl::<Sounding<'_>>();
}
