//! # Phase geometry and photometry
//!
//! From the ecliptic rectangular vectors of the Sun and the Moon this module
//! derives:
//!
//! 1. the **Earth phase angle** `φ_E` — the angle at the Moon between the
//!    directions to the Sun and to the Earth — and its complement, the **Moon
//!    phase angle** `φ_M = π − φ_E`;
//! 2. the **visible lit fraction** of a body's disc at a given phase angle;
//! 3. the **earthshine irradiance** at the Moon and the resulting **moon
//!    irradiance** at the Earth, the two light sources a night-sky renderer
//!    feeds into its scattering model.
//!
//! The lit-fraction formula is singular at exactly new and full phase; inputs
//! are clamped to [`PHASE_ANGLE_EPSILON`] away from 0 and π and the result to
//! [0, 1], so the function is total over real phase angles.

use nalgebra::Vector3;

use crate::constants::{
    AstronomicalUnit, Radian, WattPerSquareMeter, FULL_EARTHSHINE_IRRADIANCE, LUNAR_REFLECTANCE,
    MOON_RADIUS_AU,
};
use crate::skycalc_errors::SkycalcError;

/// Clamp margin keeping phase angles away from the lit-fraction singularities
/// at 0 and π.
pub const PHASE_ANGLE_EPSILON: f64 = 1e-6;

/// Angle at the Moon between the directions to the Sun and to the Earth,
/// from the geocentric ecliptic rectangular vectors of the two bodies.
///
/// Arguments
/// ---------
/// * `sun_rect`: geocentric ecliptic rectangular position of the Sun
/// * `moon_rect`: geocentric ecliptic rectangular position of the Moon
///
/// Returns
/// --------
/// * The Earth phase angle in [0, π], or
///   [`SkycalcError::DegenerateDirection`] if either vector has zero length.
pub fn earth_phase_angle(
    sun_rect: &Vector3<f64>,
    moon_rect: &Vector3<f64>,
) -> Result<Radian, SkycalcError> {
    let norms = sun_rect.norm() * moon_rect.norm();
    if norms == 0.0 {
        return Err(SkycalcError::DegenerateDirection);
    }
    // Guard acos against |cos| > 1 from floating-point overshoot.
    let cos_phi = (sun_rect.dot(moon_rect) / norms).clamp(-1.0, 1.0);
    Ok(cos_phi.acos())
}

/// Angle at the Moon between Sun and Earth as seen by a terrestrial observer,
/// complementary to the Earth phase angle by the Sun/Earth/Moon triangle.
pub fn moon_phase_angle(earth_phase: Radian) -> Radian {
    std::f64::consts::PI - earth_phase
}

/// Fraction of a body's disc that appears lit at phase angle `phi`.
///
/// `f(φ) = 1 − sin(φ/2)·tan(φ/2)·ln(1/tan(φ/4))`, singular at exactly 0
/// (full) and π (new). The input is clamped to
/// `[PHASE_ANGLE_EPSILON, π − PHASE_ANGLE_EPSILON]` and the output to [0, 1];
/// near the boundaries the formula converges to 1 and 0 respectively, so the
/// clamp changes the result by less than 1e-9.
pub fn visible_lit_fraction(phi: Radian) -> f64 {
    let phi = phi.clamp(
        PHASE_ANGLE_EPSILON,
        std::f64::consts::PI - PHASE_ANGLE_EPSILON,
    );
    let f = 1.0 - (0.5 * phi).sin() * (0.5 * phi).tan() * (1.0 / (0.25 * phi).tan()).ln();
    f.clamp(0.0, 1.0)
}

/// Irradiance at the Moon contributed by sunlight reflected off the Earth,
/// in W·m⁻².
///
/// `E_em = 0.5 · 0.19 · f(φ_E)`: the baseline is the albedo-weighted
/// irradiance of a fully lit Earth, and the 0.5 accounts for Earth's phase
/// being complementary to the Moon's as seen from Earth.
pub fn earthshine_irradiance(earth_phase: Radian) -> WattPerSquareMeter {
    0.5 * FULL_EARTHSHINE_IRRADIANCE * visible_lit_fraction(earth_phase)
}

/// Irradiance at the Earth contributed by the Moon, in W·m⁻².
///
/// Arguments
/// ---------
/// * `sun_irradiance`: solar irradiance at the Moon, W·m⁻²
/// * `earth_phase`: Earth phase angle `φ_E` in radians
/// * `moon_phase`: Moon phase angle `φ_M` in radians
/// * `moon_distance`: Earth–Moon distance in AU
///
/// Returns
/// --------
/// * `E_m = (2/3)·C·q²·(E_em + E_sun·f(φ_M))`, with `q` the Moon's angular
///   size ratio `R_moon/d` and `C` the empirical lunar reflectance
///   [`LUNAR_REFLECTANCE`].
pub fn moon_irradiance(
    sun_irradiance: WattPerSquareMeter,
    earth_phase: Radian,
    moon_phase: Radian,
    moon_distance: AstronomicalUnit,
) -> WattPerSquareMeter {
    let q = MOON_RADIUS_AU / moon_distance;
    let e_em = earthshine_irradiance(earth_phase);
    (2.0 / 3.0)
        * LUNAR_REFLECTANCE
        * q
        * q
        * (e_em + sun_irradiance * visible_lit_fraction(moon_phase))
}

/// Achromatic moon irradiance as a 3-channel triple, `E_m/3` per channel, the
/// form a 3-channel scattering model consumes.
pub fn moon_irradiance_rgb(
    sun_irradiance: WattPerSquareMeter,
    earth_phase: Radian,
    moon_phase: Radian,
    moon_distance: AstronomicalUnit,
) -> Vector3<f64> {
    let e_m = moon_irradiance(sun_irradiance, earth_phase, moon_phase, moon_distance);
    Vector3::repeat(e_m / 3.0)
}

/// Apparent angular radius of a body of physical radius `radius` seen from
/// distance `distance` (both in AU).
pub fn angular_radius(radius: AstronomicalUnit, distance: AstronomicalUnit) -> Radian {
    (radius / distance).atan()
}
