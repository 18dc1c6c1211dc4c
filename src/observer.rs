use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Radian, RADEG};

/// A ground observer, reduced to the geographic coordinates the horizon
/// transform needs.
///
/// Plain value type: the UI layer owns and edits its copy, then passes it to
/// [`SkySnapshot::compute`](crate::sky_state::SkySnapshot::compute).
/// Longitude is counted east of Greenwich.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// Geographic longitude in degrees, east positive
    pub longitude: Degree,
    /// Geographic latitude in degrees, north positive
    pub latitude: Degree,
}

impl Observer {
    pub fn new(longitude: Degree, latitude: Degree) -> Observer {
        Observer {
            longitude,
            latitude,
        }
    }

    /// Longitude in radians, as consumed by the sidereal-time term.
    pub fn longitude_rad(&self) -> Radian {
        self.longitude * RADEG
    }

    /// Latitude in radians, as consumed by the horizon rotation.
    pub fn latitude_rad(&self) -> Radian {
        self.latitude * RADEG
    }
}

impl Default for Observer {
    /// Reference site: Barcelona (2.1686° E, 41.3874° N).
    fn default() -> Observer {
        Observer::new(2.1686, 41.3874)
    }
}
