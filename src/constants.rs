//! # Constants and type definitions for skycalc
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `skycalc` library.
//!
//! ## Overview
//!
//! - Time-scale constants (J2000.0 epoch, Julian century, civil/dynamical offset)
//! - Unit conversions (degrees ↔ radians, Earth radii ↔ AU)
//! - Photometric constants of the earthshine/moonshine model
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules: time conversion, the orbital
//! position model, the frame-transform pipeline, and photometry.

// -------------------------------------------------------------------------------------------------
// Time-scale constants
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric normalization
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Julian Date of the reference epoch J2000.0 (2000-01-01 12:00:00 TT)
pub const JD2000: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Fixed offset between civil and dynamical time, in seconds.
///
/// Approximates ΔT around the early 2020s. It feeds only the sidereal-time
/// term (through [`Instant::dynamical_centuries`](crate::time::Instant::dynamical_centuries)),
/// never the orbital series.
pub const DELTA_T_SECONDS: f64 = 73.0;

// -------------------------------------------------------------------------------------------------
// Unit conversions and body dimensions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Earth equatorial radii per astronomical unit.
///
/// Converts the equatorial horizontal parallax of the lunar series into an
/// AU distance: `r = (1/π') / EARTH_RADII_PER_AU`.
pub const EARTH_RADII_PER_AU: f64 = 23_455.0;

/// Physical radius of the Sun in AU
pub const SUN_RADIUS_AU: f64 = 0.004_650_47;

/// Physical radius of the Moon in AU
pub const MOON_RADIUS_AU: f64 = 1.162_671e-5;

// -------------------------------------------------------------------------------------------------
// Photometric constants
// -------------------------------------------------------------------------------------------------

/// Nominal solar irradiance at the top of the atmosphere, W·m⁻²
pub const SUN_IRRADIANCE: f64 = 1500.0;

/// Irradiance at the Moon from a fully lit Earth, W·m⁻² (albedo-weighted baseline)
pub const FULL_EARTHSHINE_IRRADIANCE: f64 = 0.19;

/// Effective lunar reflectance of the earthshine/moonshine model
pub const LUNAR_REFLECTANCE: f64 = 0.072;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Date (days, fractional part encodes time-of-day, day boundary at noon UT)
pub type JulianDate = f64;
/// Julian centuries elapsed since J2000.0
pub type JulianCenturies = f64;
/// Irradiance in W·m⁻²
pub type WattPerSquareMeter = f64;
