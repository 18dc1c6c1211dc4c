//! # skycalc: low-precision Sun/Moon positioning and photometry
//!
//! This crate computes, from a civil calendar instant and an observer's
//! geographic coordinates, the apparent positions of the Sun and the Moon
//! (ecliptic, equatorial and horizon frames), their Earth-distance, the
//! Sun–Earth–Moon phase geometry, and the photometric quantities (visible lit
//! fraction, earthshine irradiance, moon irradiance) consumed by a
//! sky-lighting renderer.
//!
//! ## Pipeline
//!
//! ```text
//! Instant --(Julian date)--> T, T'                       [time]
//! T --(truncated series)--> ecliptic spherical           [ephemeris]
//! ecliptic --(obliquity, sidereal time, latitude)--> horizon   [ref_system]
//! ecliptic rectangular pair --> phase angles, irradiance [photometry]
//! ```
//!
//! The whole chain is pure arithmetic over `f64`: no I/O, no allocation
//! beyond fixed-size `nalgebra` vectors/matrices, no background work. It is
//! cheap enough to re-run unconditionally once per render tick; see
//! [`SkyState`](crate::sky_state::SkyState).
//!
//! ## Quick start
//!
//! ```rust
//! use skycalc::observer::Observer;
//! use skycalc::sky_state::SkySnapshot;
//! use skycalc::time::Instant;
//!
//! let observer = Observer::new(2.1686, 41.3874);
//! let instant = Instant::new(10, 10, 2022, 6, 0, 33);
//! let sky = SkySnapshot::compute(&observer, &instant)?;
//!
//! let sun_altitude = sky.sun.horizon.lat;
//! let moon_irradiance = sky.moon_irradiance(1500.0);
//! # let _ = (sun_altitude, moon_irradiance);
//! # Ok::<(), skycalc::skycalc_errors::SkycalcError>(())
//! ```
//!
//! ## Accuracy & scope
//!
//! The orbital series are truncated low-precision models (a fraction of a
//! degree for the Sun, a few arcminutes worse for the Moon) — adequate for
//! lighting, not for astrometry. Atmospheric refraction, leap seconds and
//! calendars other than the proleptic Gregorian are out of scope.

pub mod constants;
pub mod ephemeris;
pub mod observer;
pub mod photometry;
pub mod ref_system;
pub mod sky_state;
pub mod skycalc_errors;
pub mod time;
