//! # Orbital position model: truncated series for the Sun and the Moon
//!
//! Low-precision geocentric ecliptic positions as trigonometric series in the
//! Julian-century count `T`. The solar longitude carries a two-harmonic
//! equation of center; the lunar series keeps the 13/7/7 leading terms of the
//! truncated lunar theory in longitude, latitude and parallax. Both models
//! depend only on elapsed time, never on the observer.
//!
//! Accuracy is on the order of a hundredth of a degree for the Sun and a few
//! arcminutes for the Moon — sufficient to place a light source in a rendered
//! sky, not for astrometry.
//!
//! Longitudes are returned unnormalized; wrap with
//! [`Spherical::lon_wrapped`](crate::ref_system::Spherical::lon_wrapped) for
//! display.

use crate::constants::{JulianCenturies, EARTH_RADII_PER_AU};
use crate::ref_system::Spherical;

/// Geocentric ecliptic position of the Sun at epoch `T`.
///
/// Returns
/// --------
/// * [`Spherical`] with longitude in radians (unnormalized), latitude exactly
///   zero (the Sun's ecliptic latitude is negligible at this precision), and
///   distance in AU.
pub fn sun_position(t: JulianCenturies) -> Spherical {
    // Mean anomaly.
    let m = 6.24 + 628.302 * t;

    let lambda = 4.895048 + 628.331951 * t
        + (0.033417 - 0.000084 * t) * m.sin()
        + 0.000351 * (2.0 * m).sin();
    let r = 1.000140 - (0.016708 - 0.000042 * t) * m.cos() - 0.000141 * (2.0 * m).cos();

    Spherical::new(lambda, 0.0, r)
}

/// Geocentric ecliptic position of the Moon at epoch `T`.
///
/// The five fundamental arguments of the lunar theory (all in radians):
/// mean longitude `l'`, solar mean anomaly `m`, argument of latitude `f`,
/// lunar mean anomaly `m'`, and mean elongation `d`. Longitude, latitude and
/// equatorial horizontal parallax are truncated series over integer
/// combinations of these arguments; the parallax is inverted and scaled by
/// [`EARTH_RADII_PER_AU`] to yield the distance in AU.
pub fn moon_position(t: JulianCenturies) -> Spherical {
    let lp = 3.8104 + 8399.7091 * t;
    let m = 6.2300 + 628.3019 * t;
    let f = 1.6280 + 8433.4663 * t;
    let mp = 2.3554 + 8328.6911 * t;
    let d = 5.1985 + 7771.3772 * t;

    let lambda = lp
        + 0.1098 * mp.sin()
        + 0.0222 * (2.0 * d - mp).sin()
        + 0.0115 * (2.0 * d).sin()
        + 0.0037 * (2.0 * mp).sin()
        - 0.0032 * m.sin()
        - 0.0020 * (2.0 * f).sin()
        + 0.0010 * (2.0 * d - 2.0 * mp).sin()
        + 0.0010 * (2.0 * d - m - mp).sin()
        + 0.0009 * (2.0 * d + mp).sin()
        + 0.0008 * (2.0 * d - m).sin()
        + 0.0007 * (mp - m).sin()
        - 0.0006 * d.sin()
        - 0.0005 * (m + mp).sin();

    let beta = 0.0895 * f.sin()
        + 0.0049 * (mp + f).sin()
        + 0.0048 * (mp - f).sin()
        + 0.0030 * (2.0 * d - f).sin()
        + 0.0010 * (2.0 * d + f - mp).sin()
        + 0.0008 * (2.0 * d - f - mp).sin()
        + 0.0006 * (2.0 * d + f).sin();

    // Equatorial horizontal parallax.
    let pip = 0.016593
        + 0.000904 * mp.cos()
        + 0.000166 * (2.0 * d - mp).cos()
        + 0.000137 * (2.0 * d).cos()
        + 0.000049 * (2.0 * mp).cos()
        + 0.000015 * (2.0 * d + mp).cos()
        + 0.000009 * (2.0 * d - m).cos();

    let r = (1.0 / pip) / EARTH_RADII_PER_AU;

    Spherical::new(lambda, beta, r)
}

#[cfg(test)]
mod ephemeris_test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::RADEG;
    use crate::ref_system::wrap_two_pi;

    // Reference instant: 2022-10-10 06:00:33 UT.
    const T_REF: f64 = 0.22772759430374362;

    #[test]
    fn test_sun_position_reference_instant() {
        let sun = sun_position(T_REF);
        assert_relative_eq!(sun.lon, 147.95026068550553, epsilon = 1e-12);
        assert_eq!(sun.lat, 0.0);
        assert_relative_eq!(sun.r, 0.9986769547813757, epsilon = 1e-12);
        // Early-October solar longitude, a couple of weeks past the equinox.
        let lon_deg = wrap_two_pi(sun.lon) / RADEG;
        assert_relative_eq!(lon_deg, 196.925515, epsilon = 1e-5);
    }

    #[test]
    fn test_sun_position_near_solstice() {
        // 2023-06-21 12:00:00 UT, within half a degree of λ = 90°.
        let sun = sun_position(0.234688569472964);
        let lon_deg = wrap_two_pi(sun.lon) / RADEG;
        assert_relative_eq!(lon_deg, 89.885111, epsilon = 1e-5);
    }

    #[test]
    fn test_sun_distance_stays_near_one_au() {
        // Eccentricity bounds the Earth-Sun distance well inside [0.98, 1.02].
        for i in 0..200 {
            let t = -0.5 + i as f64 * 0.005;
            let r = sun_position(t).r;
            assert!(r > 0.98 && r < 1.02, "r = {r} at T = {t}");
        }
    }

    #[test]
    fn test_moon_position_reference_instant() {
        let moon = moon_position(T_REF);
        assert_relative_eq!(moon.lon, 1916.7492344018767, epsilon = 1e-12);
        assert_relative_eq!(moon.lat, -0.03462309305061334, epsilon = 1e-9);
        assert_relative_eq!(moon.r, 0.0025470264368890657, epsilon = 1e-12);
    }

    #[test]
    fn test_moon_latitude_bounded_by_orbit_inclination() {
        // The lunar orbit is inclined ~5.1°; the series must stay within ~6°.
        let bound = 6.0 * RADEG;
        for i in 0..500 {
            let t = -0.5 + i as f64 * 0.002;
            let beta = moon_position(t).lat;
            assert!(beta.abs() < bound, "beta = {beta} at T = {t}");
        }
    }

    #[test]
    fn test_moon_distance_range() {
        // Perigee/apogee in AU: roughly 0.00238 to 0.00272.
        for i in 0..500 {
            let t = -0.5 + i as f64 * 0.002;
            let r = moon_position(t).r;
            assert!(r > 0.0023 && r < 0.0028, "r = {r} at T = {t}");
        }
    }
}
