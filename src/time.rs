//! # Time conversion: calendar instant → Julian Date → Julian centuries
//!
//! The astronomical time chain of the crate:
//!
//! 1. [`julian_date`] turns the six civil calendar fields (plus an optional
//!    additive seconds correction) into a Julian Date, day boundary at noon UT.
//! 2. [`julian_centuries`] rescales a Julian Date into centuries elapsed since
//!    J2000.0, the time argument of every orbital series and frame rotation.
//!
//! [`Instant`] is the value type carrying the calendar fields. It exposes both
//! `T` (civil) and `T'` (dynamical, shifted by
//! [`DELTA_T_SECONDS`](crate::constants::DELTA_T_SECONDS)); only the
//! sidereal-time term consumes `T'`.
//!
//! ## Caveats
//!
//! Calendar fields are **not validated**: a syntactically well-formed but
//! calendar-invalid input (day 31 of April, …) yields the arithmetic result of
//! the day-number formula, not an error. Leap seconds are ignored.

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::constants::{JulianCenturies, JulianDate, DAYS_PER_CENTURY, DELTA_T_SECONDS, JD2000};

/// Compute the Julian Date of a civil calendar instant.
///
/// Arguments
/// ---------
/// * `month`: calendar month, 1–12
/// * `day`: calendar day of month
/// * `year`: calendar year (proleptic Gregorian)
/// * `hour`, `minute`, `second`: civil time of day
/// * `delta_seconds`: additive correction in seconds, used to model small
///   time-system offsets (0 for civil time, [`DELTA_T_SECONDS`] for dynamical time)
///
/// Returns
/// --------
/// * The Julian Date in days. The fractional part encodes the time of day,
///   with the day boundary at noon UT.
///
/// Remarks
/// -------
/// * January and February are counted as months 13 and 14 of the previous
///   year, so the leap-day correction term never straddles a year boundary.
/// * Out-of-range calendar fields are not rejected; the result is then merely
///   the arithmetic value of the day-number formula.
pub fn julian_date(
    month: i32,
    day: i32,
    year: i32,
    hour: i32,
    minute: i32,
    second: i32,
    delta_seconds: f64,
) -> JulianDate {
    // Shift the year start to March so February is always the last month.
    let (m, y) = if month == 1 || month == 2 {
        (month + 12, year - 1)
    } else {
        (month, year)
    };

    // Fraction of day since the previous noon.
    let q = (hour as f64 + (minute as f64 + (second as f64 + delta_seconds) / 60.0) / 60.0) / 24.0
        - 0.5;

    let jdn = 1_720_997.0 - (y as f64 / 100.0).floor()
        + (y as f64 / 400.0).floor()
        + (y as f64 * 365.25).floor()
        + (30.6001 * (m as f64 + 1.0)).floor()
        + day as f64;

    jdn + q
}

/// Convert a Julian Date to Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: JulianDate) -> JulianCenturies {
    (jd - JD2000) / DAYS_PER_CENTURY
}

/// A civil calendar instant (proleptic Gregorian), second resolution.
///
/// Plain value type: the UI layer owns and edits its copy, then passes it to
/// [`SkySnapshot::compute`](crate::sky_state::SkySnapshot::compute). All
/// derived quantities are pure functions of the six fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instant {
    pub month: i32,
    pub day: i32,
    pub year: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl Instant {
    pub fn new(month: i32, day: i32, year: i32, hour: i32, minute: i32, second: i32) -> Instant {
        Instant {
            month,
            day,
            year,
            hour,
            minute,
            second,
        }
    }

    /// Build an `Instant` from a [`hifitime::Epoch`], truncated to whole
    /// seconds, using the epoch's UTC Gregorian representation.
    pub fn from_epoch(epoch: &Epoch) -> Instant {
        let (year, month, day, hour, minute, second, _nanos) = epoch.to_gregorian_utc();
        Instant {
            month: month as i32,
            day: day as i32,
            year,
            hour: hour as i32,
            minute: minute as i32,
            second: second as i32,
        }
    }

    /// Julian Date of this instant (civil time scale).
    pub fn julian_date(&self) -> JulianDate {
        julian_date(
            self.month,
            self.day,
            self.year,
            self.hour,
            self.minute,
            self.second,
            0.0,
        )
    }

    /// Julian centuries `T` since J2000.0 (civil time scale).
    ///
    /// Time argument of the orbital series and of the obliquity/precession
    /// rotations.
    pub fn julian_centuries(&self) -> JulianCenturies {
        julian_centuries(self.julian_date())
    }

    /// Julian centuries `T'` since J2000.0 on the dynamical time scale,
    /// shifted by [`DELTA_T_SECONDS`].
    ///
    /// Consumed only by the sidereal-time term
    /// ([`lmst`](crate::ref_system::lmst)).
    pub fn dynamical_centuries(&self) -> JulianCenturies {
        julian_centuries(julian_date(
            self.month,
            self.day,
            self.year,
            self.hour,
            self.minute,
            self.second,
            DELTA_T_SECONDS,
        ))
    }
}

impl Default for Instant {
    /// Reference instant: 2022-10-10 06:00:33 UT.
    fn default() -> Instant {
        Instant::new(10, 10, 2022, 6, 0, 33)
    }
}
