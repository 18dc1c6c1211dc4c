//! # Reference-frame transformations
//!
//! The frame pipeline of the crate, applied identically to the Sun and the
//! Moon once per update:
//!
//! ```text
//! ecliptic spherical --> ecliptic rectangular          [Spherical::to_rectangular]
//!                    --> equatorial rectangular        [ecliptic_to_equatorial]
//!                    --> horizon rectangular           [equatorial_to_horizon]
//!                    --> horizon spherical (az, alt)   [Spherical::from_rectangular]
//! ```
//!
//! All rotations are composed from the elementary axis-rotation matrix
//! [`rotmt`]. The equatorial→horizon step chains the precession correction
//! [`prec`], the local mean sidereal time [`lmst`] and the observer-latitude
//! rotation.
//!
//! ## Conventions
//!
//! - Rotations are **active**, right-handed: `x' = R · x`.
//! - Horizon-frame longitude is the azimuth, latitude is the altitude.
//! - Longitudes out of [`Spherical`] are not normalized; wrap with
//!   [`Spherical::lon_wrapped`] or [`wrap_two_pi`] for display.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{JulianCenturies, Radian, DPI};

/// A spherical (longitude, latitude, distance) triple in some reference frame.
///
/// The meaning of the components depends on the frame: ecliptic
/// longitude/latitude, right ascension/declination, or azimuth/altitude. The
/// distance unit is whatever the producer used (AU throughout this crate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Longitude-like angle in radians, not normalized
    pub lon: Radian,
    /// Latitude-like angle in radians, in [−π/2, π/2]
    pub lat: Radian,
    /// Distance from the frame origin, strictly positive for real bodies
    pub r: f64,
}

impl Spherical {
    pub fn new(lon: Radian, lat: Radian, r: f64) -> Spherical {
        Spherical { lon, lat, r }
    }

    /// Convert to rectangular coordinates in the same frame.
    pub fn to_rectangular(&self) -> Vector3<f64> {
        Vector3::new(
            self.lat.cos() * self.lon.cos(),
            self.lat.cos() * self.lon.sin(),
            self.lat.sin(),
        ) * self.r
    }

    /// Convert a rectangular vector back to spherical coordinates.
    ///
    /// The zero vector has no direction: both angles then come out NaN
    /// (`atan2(0,0)` is 0 but `asin(0/0)` is NaN), which the caller observes
    /// as NaN propagation rather than an error. Sun and Moon distances are
    /// always strictly positive, so the pipeline never hits this case.
    pub fn from_rectangular(v: &Vector3<f64>) -> Spherical {
        let r = v.norm();
        Spherical {
            lon: v.y.atan2(v.x),
            lat: (v.z / r).asin(),
            r,
        }
    }

    /// Longitude wrapped to [0, 2π), for display or azimuth conventions.
    pub fn lon_wrapped(&self) -> Radian {
        wrap_two_pi(self.lon)
    }
}

/// Wrap an angle to the [0, 2π) range.
pub fn wrap_two_pi(angle: Radian) -> Radian {
    let wrapped = angle % DPI;
    if wrapped < 0.0 {
        wrapped + DPI
    } else {
        wrapped
    }
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal
/// axes (X, Y, or Z).
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in radians (positive = direct/trigonometric sense)
/// * `k`: index of the axis of rotation: `0` → X, `1` → Y, `2` → Z
///
/// Returns
/// --------
/// * A 3×3 rotation matrix `R` such that the rotated vector is `x' = R · x`.
///
/// Panics
/// ------
/// * If `k > 2`, as only axes 0–2 are valid.
pub fn rotmt(alpha: f64, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Mean obliquity of the ecliptic, in radians.
///
/// Linear truncation of the IAU polynomial, matching the precision of the
/// orbital series: `ε(T) = 0.409093 − 0.000227·T`.
pub fn obleq(t: JulianCenturies) -> Radian {
    0.409093 - 0.000227 * t
}

/// Local mean sidereal time, in radians (not normalized).
///
/// `LMST = 4.894961 + 230121.675315·T' + lon`, where the large coefficient
/// encodes Earth's rotation rate in radians per Julian century. Takes the
/// dynamical-time century count `T'`, not `T`.
pub fn lmst(tp: JulianCenturies, lon: Radian) -> Radian {
    4.894961 + 230121.675315 * tp + lon
}

/// Small-angle precession correction of the equinox since J2000.0.
///
/// `P = Rz(0.01118·T) · Ry(−0.00972·T) · Rz(0.01118·T)`.
pub fn prec(t: JulianCenturies) -> Matrix3<f64> {
    rotmt(0.01118 * t, 2) * rotmt(-0.00972 * t, 1) * rotmt(0.01118 * t, 2)
}

/// Rotate an ecliptic rectangular vector into the equatorial frame by the
/// mean obliquity at epoch `T`.
pub fn ecliptic_to_equatorial(ecliptic_rect: &Vector3<f64>, t: JulianCenturies) -> Vector3<f64> {
    rotmt(obleq(t), 0) * ecliptic_rect
}

/// Rotate an equatorial rectangular vector into the observer's horizon frame.
///
/// Arguments
/// ---------
/// * `equatorial_rect`: rectangular position in the equatorial frame
/// * `t`: Julian centuries since J2000.0 (civil time scale), for precession
/// * `tp`: Julian centuries on the dynamical time scale, for sidereal time
/// * `lon`, `lat`: observer geographic coordinates in radians
///
/// Returns
/// --------
/// * The rectangular position in the horizon frame; converting it back to
///   spherical yields (azimuth, altitude, distance).
pub fn equatorial_to_horizon(
    equatorial_rect: &Vector3<f64>,
    t: JulianCenturies,
    tp: JulianCenturies,
    lon: Radian,
    lat: Radian,
) -> Vector3<f64> {
    let theta = lmst(tp, lon);
    let m = rotmt(lat - std::f64::consts::FRAC_PI_2, 1) * rotmt(-theta, 2) * prec(t);
    m * equatorial_rect
}
