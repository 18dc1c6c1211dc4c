//! # Sky state: the central computation entry point
//!
//! This module wires the four stages together:
//!
//! 1. **Time** — [`Instant`] → Julian Date → century counts `T` and `T'`.
//! 2. **Ephemeris** — `T` → ecliptic spherical positions of Sun and Moon.
//! 3. **Frames** — ecliptic → equatorial → horizon, once per body.
//! 4. **Photometry** — ecliptic rectangular pair → phase angles, from which
//!    the irradiance accessors derive earthshine and moonshine.
//!
//! [`SkySnapshot::compute`] is the pure function of `(Observer, Instant)`; a
//! renderer reads its fields and accessors once per frame. [`SkyState`] is the
//! thin mutable wrapper for hosts that prefer edit-then-update semantics: the
//! UI mutates `observer`/`instant` in place and calls
//! [`update`](SkyState::update) every tick. Recomputation is unconditional —
//! the whole chain is a few hundred floating-point operations, cheaper than
//! change tracking — and the previous snapshot is overwritten, so treat
//! borrowed outputs as stale as soon as inputs change.

use nalgebra::Vector3;

use crate::constants::{
    JulianCenturies, JulianDate, Radian, WattPerSquareMeter, MOON_RADIUS_AU, SUN_RADIUS_AU,
};
use crate::ephemeris::{moon_position, sun_position};
use crate::observer::Observer;
use crate::photometry;
use crate::ref_system::{ecliptic_to_equatorial, equatorial_to_horizon, Spherical};
use crate::skycalc_errors::SkycalcError;
use crate::time::Instant;

/// Position of one body in every frame the renderer cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    /// Geocentric ecliptic spherical coordinates (longitude unnormalized, AU)
    pub ecliptic: Spherical,
    /// Geocentric ecliptic rectangular coordinates, input of the phase model
    pub ecliptic_rect: Vector3<f64>,
    /// Equatorial spherical coordinates (right ascension, declination, AU)
    pub equatorial: Spherical,
    /// Horizon spherical coordinates (azimuth, altitude, AU)
    pub horizon: Spherical,
}

impl BodyPosition {
    /// Run the frame-transform pipeline on one body's ecliptic position.
    fn compute(
        ecliptic: Spherical,
        t: JulianCenturies,
        tp: JulianCenturies,
        lon: Radian,
        lat: Radian,
    ) -> BodyPosition {
        let ecliptic_rect = ecliptic.to_rectangular();
        let equatorial_rect = ecliptic_to_equatorial(&ecliptic_rect, t);
        let horizon_rect = equatorial_to_horizon(&equatorial_rect, t, tp, lon, lat);
        BodyPosition {
            ecliptic,
            ecliptic_rect,
            equatorial: Spherical::from_rectangular(&equatorial_rect),
            horizon: Spherical::from_rectangular(&horizon_rect),
        }
    }
}

/// Everything the lighting system reads for one frame, computed as a pure
/// function of `(Observer, Instant)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkySnapshot {
    /// Julian Date of the instant
    pub julian_date: JulianDate,
    /// Julian centuries since J2000.0 (civil time scale)
    pub centuries: JulianCenturies,
    /// Observer longitude in radians, east positive
    pub observer_longitude: Radian,
    /// Observer latitude in radians, north positive
    pub observer_latitude: Radian,
    /// Sun coordinates in all frames
    pub sun: BodyPosition,
    /// Moon coordinates in all frames
    pub moon: BodyPosition,
    /// Angle at the Moon between Sun and Earth directions, in [0, π]
    pub earth_phase_angle: Radian,
    /// π minus the Earth phase angle, in [0, π]
    pub moon_phase_angle: Radian,
}

impl SkySnapshot {
    /// Compute the full snapshot for one observer and one instant.
    ///
    /// Fails only if a body's ecliptic rectangular vector degenerates to zero
    /// length, which the orbital series (strictly positive distances) never
    /// produce for well-formed numeric inputs.
    pub fn compute(observer: &Observer, instant: &Instant) -> Result<SkySnapshot, SkycalcError> {
        let jd = instant.julian_date();
        let t = instant.julian_centuries();
        let tp = instant.dynamical_centuries();
        let lon = observer.longitude_rad();
        let lat = observer.latitude_rad();

        let sun = BodyPosition::compute(sun_position(t), t, tp, lon, lat);
        let moon = BodyPosition::compute(moon_position(t), t, tp, lon, lat);

        let earth_phase_angle =
            photometry::earth_phase_angle(&sun.ecliptic_rect, &moon.ecliptic_rect)?;
        let moon_phase_angle = photometry::moon_phase_angle(earth_phase_angle);

        Ok(SkySnapshot {
            julian_date: jd,
            centuries: t,
            observer_longitude: lon,
            observer_latitude: lat,
            sun,
            moon,
            earth_phase_angle,
            moon_phase_angle,
        })
    }

    /// Earthshine irradiance at the Moon, W·m⁻².
    pub fn earthshine_irradiance(&self) -> WattPerSquareMeter {
        photometry::earthshine_irradiance(self.earth_phase_angle)
    }

    /// Moon irradiance at the Earth for a given solar irradiance, W·m⁻².
    pub fn moon_irradiance(&self, sun_irradiance: WattPerSquareMeter) -> WattPerSquareMeter {
        photometry::moon_irradiance(
            sun_irradiance,
            self.earth_phase_angle,
            self.moon_phase_angle,
            self.moon.horizon.r,
        )
    }

    /// Achromatic moon irradiance triple, `E_m/3` per channel.
    pub fn moon_irradiance_rgb(&self, sun_irradiance: WattPerSquareMeter) -> Vector3<f64> {
        photometry::moon_irradiance_rgb(
            sun_irradiance,
            self.earth_phase_angle,
            self.moon_phase_angle,
            self.moon.horizon.r,
        )
    }

    /// Apparent angular radius of the Sun, radians.
    pub fn sun_angular_radius(&self) -> Radian {
        photometry::angular_radius(SUN_RADIUS_AU, self.sun.horizon.r)
    }

    /// Apparent angular radius of the Moon, radians.
    pub fn moon_angular_radius(&self) -> Radian {
        photometry::angular_radius(MOON_RADIUS_AU, self.moon.horizon.r)
    }
}

/// Mutable per-frame wrapper around [`SkySnapshot`].
///
/// The host edits `observer` and `instant` directly (they are plain value
/// types) and calls [`update`](SkyState::update) once per tick; the snapshot
/// is recomputed unconditionally and overwritten in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyState {
    pub observer: Observer,
    pub instant: Instant,
    snapshot: SkySnapshot,
}

impl SkyState {
    pub fn new(observer: Observer, instant: Instant) -> Result<SkyState, SkycalcError> {
        let snapshot = SkySnapshot::compute(&observer, &instant)?;
        Ok(SkyState {
            observer,
            instant,
            snapshot,
        })
    }

    /// Recompute the snapshot from the current `observer` and `instant`.
    pub fn update(&mut self) -> Result<(), SkycalcError> {
        self.snapshot = SkySnapshot::compute(&self.observer, &self.instant)?;
        Ok(())
    }

    /// The latest computed snapshot.
    pub fn snapshot(&self) -> &SkySnapshot {
        &self.snapshot
    }
}

impl Default for SkyState {
    /// Reference site and instant (Barcelona, 2022-10-10 06:00:33 UT).
    fn default() -> SkyState {
        // The reference inputs are well-formed, compute cannot fail on them.
        SkyState::new(Observer::default(), Instant::default())
            .unwrap_or_else(|_| unreachable!("reference inputs are non-degenerate"))
    }
}

#[cfg(test)]
mod sky_state_test {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn test_snapshot_matches_pipeline_stages() {
        let snapshot = SkySnapshot::compute(&Observer::default(), &Instant::default()).unwrap();
        let t = snapshot.centuries;

        // The snapshot must agree with stage-by-stage evaluation.
        let sun_ecl = crate::ephemeris::sun_position(t);
        assert_eq!(snapshot.sun.ecliptic, sun_ecl);
        assert_eq!(snapshot.sun.ecliptic_rect, sun_ecl.to_rectangular());

        let moon_ecl = crate::ephemeris::moon_position(t);
        assert_eq!(snapshot.moon.ecliptic, moon_ecl);
    }

    #[test]
    fn test_update_overwrites_snapshot() {
        let mut state = SkyState::default();
        let morning = *state.snapshot();

        // Six hours later the Sun must have moved well past the meridian.
        state.instant.hour = 12;
        state.update().unwrap();
        let noon = *state.snapshot();

        assert_ne!(morning, noon);
        assert!(noon.julian_date > morning.julian_date);
        assert!(noon.sun.horizon.lat > morning.sun.horizon.lat);

        // Rolling the input back restores the previous outputs exactly.
        state.instant.hour = 6;
        state.update().unwrap();
        assert_eq!(*state.snapshot(), morning);
    }

    #[test]
    fn test_default_state_matches_reference_instant() {
        let state = SkyState::default();
        assert_relative_eq!(
            state.snapshot().julian_date,
            2459862.750382,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            state.snapshot().earth_phase_angle + state.snapshot().moon_phase_angle,
            std::f64::consts::PI,
            epsilon = 1e-15
        );
    }
}
