//! End-to-end scenario: Barcelona (2.1686° E, 41.3874° N) on
//! 2022-10-10 at 06:00:33 UT, the reference instant of the positioning model.
//! One day past full moon, a few minutes before sunrise.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::f64::consts::{FRAC_PI_2, PI};

use skycalc::constants::{RADEG, SUN_IRRADIANCE};
use skycalc::observer::Observer;
use skycalc::sky_state::{SkySnapshot, SkyState};
use skycalc::time::Instant;

fn reference_snapshot() -> SkySnapshot {
    SkySnapshot::compute(&Observer::new(2.1686, 41.3874), &Instant::new(10, 10, 2022, 6, 0, 33))
        .unwrap()
}

#[test]
fn test_reference_time_chain() {
    let sky = reference_snapshot();
    assert_relative_eq!(sky.julian_date, 2459862.750382, epsilon = 1e-6);
    assert_relative_eq!(sky.centuries, 0.22772759430374362, epsilon = 1e-12);
    assert_relative_eq!(sky.observer_longitude, 0.03784921015874903, epsilon = 1e-12);
    assert_relative_eq!(sky.observer_latitude, 0.7223463988399011, epsilon = 1e-12);
}

#[test]
fn test_reference_sun_coordinates() {
    let sky = reference_snapshot();

    // Early-October solar longitude, unnormalized series output wrapped for
    // display.
    let lon_deg = sky.sun.ecliptic.lon_wrapped() / RADEG;
    assert_relative_eq!(lon_deg, 196.925515, epsilon = 1e-5);
    assert_eq!(sky.sun.ecliptic.lat, 0.0);
    assert_relative_eq!(sky.sun.ecliptic.r, 0.9986769547813757, epsilon = 1e-12);

    // A few minutes before sunrise: the Sun sits just below the eastern
    // horizon.
    let az_deg = sky.sun.horizon.lon_wrapped() / RADEG;
    let alt_deg = sky.sun.horizon.lat / RADEG;
    assert_relative_eq!(az_deg, 81.263058, epsilon = 1e-4);
    assert_relative_eq!(alt_deg, -0.341943, epsilon = 1e-4);
    assert!(alt_deg > -1.0 && alt_deg < 0.0);
}

#[test]
fn test_reference_moon_coordinates() {
    let sky = reference_snapshot();

    assert_relative_eq!(sky.moon.ecliptic.lat, -0.03462309305061334, epsilon = 1e-9);
    assert_relative_eq!(sky.moon.ecliptic.r, 0.0025470264368890657, epsilon = 1e-12);

    // Waning gibbous setting in the west while the Sun rises.
    let az_deg = sky.moon.horizon.lon_wrapped() / RADEG;
    let alt_deg = sky.moon.horizon.lat / RADEG;
    assert_relative_eq!(az_deg, 264.695327, epsilon = 1e-4);
    assert_relative_eq!(alt_deg, 4.137850, epsilon = 1e-4);
}

#[test]
fn test_reference_phase_and_photometry() {
    let sky = reference_snapshot();

    assert_relative_eq!(sky.earth_phase_angle, 3.052312509364504, epsilon = 1e-9);
    assert_relative_eq!(sky.moon_phase_angle, 0.08928014422528907, epsilon = 1e-9);
    assert_abs_diff_eq!(sky.earth_phase_angle + sky.moon_phase_angle, PI, epsilon = 1e-15);

    assert_relative_eq!(sky.earthshine_irradiance(), 0.0001261730812988937, epsilon = 1e-9);
    assert_relative_eq!(
        sky.moon_irradiance(SUN_IRRADIANCE),
        0.0014889331720871232,
        epsilon = 1e-9
    );
    let rgb = sky.moon_irradiance_rgb(SUN_IRRADIANCE);
    assert_relative_eq!(rgb.x, 0.0004963110573623744, epsilon = 1e-9);

    // Sun and Moon subtend nearly identical quarter-degree discs.
    assert_relative_eq!(sky.sun_angular_radius(), 0.004656597275272187, epsilon = 1e-9);
    assert_relative_eq!(sky.moon_angular_radius(), 0.004564785459315629, epsilon = 1e-9);
}

#[test]
fn test_invariants_over_a_full_day() {
    // Sweep the reference date hour by hour: range invariants must hold at
    // every instant, and the Julian date must strictly increase.
    let observer = Observer::new(2.1686, 41.3874);
    let mut prev_jd = f64::NEG_INFINITY;
    for hour in 0..24 {
        let sky =
            SkySnapshot::compute(&observer, &Instant::new(10, 10, 2022, hour, 0, 33)).unwrap();
        assert!(sky.julian_date > prev_jd);
        prev_jd = sky.julian_date;

        for body in [&sky.sun, &sky.moon] {
            assert!(body.horizon.lat >= -FRAC_PI_2 && body.horizon.lat <= FRAC_PI_2);
            assert!(body.equatorial.lat >= -FRAC_PI_2 && body.equatorial.lat <= FRAC_PI_2);
            let az = body.horizon.lon_wrapped();
            assert!((0.0..std::f64::consts::TAU).contains(&az));
            assert!(body.horizon.r > 0.0);
        }
        assert!((0.0..=PI).contains(&sky.earth_phase_angle));
        assert!((0.0..=PI).contains(&sky.moon_phase_angle));
    }
}

#[test]
fn test_state_wrapper_round_trip() {
    let mut state = SkyState::new(
        Observer::new(2.1686, 41.3874),
        Instant::new(10, 10, 2022, 6, 0, 33),
    )
    .unwrap();
    let reference = *state.snapshot();

    // Move the observer to the antipode and back; the final snapshot must be
    // bit-identical to the first (pure recomputation, no hidden state).
    state.observer = Observer::new(-177.8314, -41.3874);
    state.update().unwrap();
    assert_ne!(*state.snapshot(), reference);
    // Ecliptic positions are observer-independent.
    assert_eq!(state.snapshot().sun.ecliptic, reference.sun.ecliptic);
    assert_eq!(state.snapshot().moon.ecliptic, reference.moon.ecliptic);

    state.observer = Observer::new(2.1686, 41.3874);
    state.update().unwrap();
    assert_eq!(*state.snapshot(), reference);
}
