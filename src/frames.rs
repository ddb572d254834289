//! Frame value types and their conversion graph.
//!
//! Five thin, immutable value types — [`Geodetic`], [`Ecef`], [`Enu`], [`Aer`]
//! and [`Eci`] — each exposing conversion methods to the other four. Every
//! cross-frame conversion is a chain through ECEF as the common hub (e.g.
//! AER → ENU → ECEF → Geodetic), except ENU ↔ AER which is direct.
//!
//! Each value carries the [`Ellipsoid`] it is expressed against, and [`Eci`]
//! additionally carries the epoch its inertial frame is evaluated at; both are
//! threaded through every chain. ENU and AER are relative to an external
//! geodetic reference point supplied at conversion time, not stored.
//!
//! Only chains ending in a [`Geodetic`] result are fallible: they run the
//! iterative ECEF inverse and surface its convergence guard. Everything else is
//! total. All methods are referentially transparent; no conversion mutates its
//! receiver.

use hifitime::Epoch;

use crate::constants::{Degree, Meter};
use crate::ellipsoid::Ellipsoid;
use crate::errors::Map3dError;
use crate::sidereal::{ecef_to_eci, eci_to_ecef};
use crate::transforms::{
    aer_to_enu, ecef_to_enu, ecef_to_geodetic, enu_to_aer, enu_to_ecef, geodetic_to_ecef,
};

/// Geodetic position: latitude, longitude, altitude above the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    /// Geodetic latitude in degrees, [-90, 90]
    pub latitude: Degree,
    /// Longitude in degrees east of Greenwich
    pub longitude: Degree,
    /// Height above the ellipsoid surface in meters
    pub altitude: Meter,
    /// Ellipsoid this position is expressed against
    pub ellipsoid: Ellipsoid,
}

/// Earth-centered, Earth-fixed Cartesian position in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ecef {
    pub x: Meter,
    pub y: Meter,
    pub z: Meter,
    /// Ellipsoid needed for conversions back to latitude-sensitive frames
    pub ellipsoid: Ellipsoid,
}

/// Local tangent-plane position (east, north, up) in meters, relative to a
/// reference point supplied at conversion time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enu {
    pub east: Meter,
    pub north: Meter,
    pub up: Meter,
    pub ellipsoid: Ellipsoid,
}

/// Station-centric spherical position: azimuth, elevation, slant range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aer {
    /// Azimuth in degrees clockwise from north, [0, 360)
    pub azimuth: Degree,
    /// Elevation in degrees above the horizon, [-90, 90]
    pub elevation: Degree,
    /// Slant range in meters
    pub slant_range: Meter,
    pub ellipsoid: Ellipsoid,
}

/// Earth-centered inertial Cartesian position in meters, evaluated at `epoch`.
///
/// The epoch is what distinguishes ECI from ECEF: it fixes the Earth's rotation
/// angle relating the two frames, and is carried along so that onward
/// conversions cannot silently lose it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eci {
    pub x: Meter,
    pub y: Meter,
    pub z: Meter,
    /// Instant the inertial frame is evaluated at
    pub epoch: Epoch,
    pub ellipsoid: Ellipsoid,
}

impl Geodetic {
    pub fn new(latitude: Degree, longitude: Degree, altitude: Meter, ellipsoid: Ellipsoid) -> Self {
        Geodetic {
            latitude,
            longitude,
            altitude,
            ellipsoid,
        }
    }

    /// Convert to the Earth-fixed Cartesian frame.
    pub fn to_ecef(&self) -> Ecef {
        let (x, y, z) = geodetic_to_ecef(
            self.latitude,
            self.longitude,
            self.altitude,
            &self.ellipsoid,
        );
        Ecef {
            x,
            y,
            z,
            ellipsoid: self.ellipsoid,
        }
    }

    /// Convert to the local tangent plane centered on `reference`.
    pub fn to_enu(&self, reference: &Geodetic) -> Enu {
        let ecef = self.to_ecef();
        ecef.to_enu(reference)
    }

    /// Convert to azimuth/elevation/range as seen from `reference`.
    pub fn to_aer(&self, reference: &Geodetic) -> Aer {
        self.to_enu(reference).to_aer()
    }

    /// Convert to the inertial frame evaluated at `epoch`.
    pub fn to_eci(&self, epoch: Epoch) -> Eci {
        self.to_ecef().to_eci(epoch)
    }
}

impl Ecef {
    pub fn new(x: Meter, y: Meter, z: Meter, ellipsoid: Ellipsoid) -> Self {
        Ecef { x, y, z, ellipsoid }
    }

    /// Convert to geodetic coordinates (iterative inverse).
    pub fn to_geodetic(&self) -> Result<Geodetic, Map3dError> {
        let (latitude, longitude, altitude) =
            ecef_to_geodetic(self.x, self.y, self.z, &self.ellipsoid)?;
        Ok(Geodetic {
            latitude,
            longitude,
            altitude,
            ellipsoid: self.ellipsoid,
        })
    }

    /// Convert to the local tangent plane centered on `reference`.
    pub fn to_enu(&self, reference: &Geodetic) -> Enu {
        let (east, north, up) = ecef_to_enu(
            self.x,
            self.y,
            self.z,
            reference.latitude,
            reference.longitude,
            reference.altitude,
            &self.ellipsoid,
        );
        Enu {
            east,
            north,
            up,
            ellipsoid: self.ellipsoid,
        }
    }

    /// Convert to azimuth/elevation/range as seen from `reference`.
    pub fn to_aer(&self, reference: &Geodetic) -> Aer {
        self.to_enu(reference).to_aer()
    }

    /// Convert to the inertial frame evaluated at `epoch`.
    pub fn to_eci(&self, epoch: Epoch) -> Eci {
        let (x, y, z) = ecef_to_eci(self.x, self.y, self.z, epoch);
        Eci {
            x,
            y,
            z,
            epoch,
            ellipsoid: self.ellipsoid,
        }
    }
}

impl Enu {
    pub fn new(east: Meter, north: Meter, up: Meter, ellipsoid: Ellipsoid) -> Self {
        Enu {
            east,
            north,
            up,
            ellipsoid,
        }
    }

    /// Convert to azimuth/elevation/range (direct, no reference point needed).
    pub fn to_aer(&self) -> Aer {
        let (azimuth, elevation, slant_range) = enu_to_aer(self.east, self.north, self.up);
        Aer {
            azimuth,
            elevation,
            slant_range,
            ellipsoid: self.ellipsoid,
        }
    }

    /// Convert to the Earth-fixed Cartesian frame, `reference` being the
    /// tangent-plane origin.
    pub fn to_ecef(&self, reference: &Geodetic) -> Ecef {
        let (x, y, z) = enu_to_ecef(
            self.east,
            self.north,
            self.up,
            reference.latitude,
            reference.longitude,
            reference.altitude,
            &self.ellipsoid,
        );
        Ecef {
            x,
            y,
            z,
            ellipsoid: self.ellipsoid,
        }
    }

    /// Convert to geodetic coordinates, `reference` being the tangent-plane
    /// origin.
    pub fn to_geodetic(&self, reference: &Geodetic) -> Result<Geodetic, Map3dError> {
        self.to_ecef(reference).to_geodetic()
    }

    /// Convert to the inertial frame evaluated at `epoch`.
    pub fn to_eci(&self, reference: &Geodetic, epoch: Epoch) -> Eci {
        self.to_ecef(reference).to_eci(epoch)
    }
}

impl Aer {
    pub fn new(azimuth: Degree, elevation: Degree, slant_range: Meter, ellipsoid: Ellipsoid) -> Self {
        Aer {
            azimuth,
            elevation,
            slant_range,
            ellipsoid,
        }
    }

    /// Convert to the local tangent plane (direct, no reference point needed).
    pub fn to_enu(&self) -> Enu {
        let (east, north, up) = aer_to_enu(self.azimuth, self.elevation, self.slant_range);
        Enu {
            east,
            north,
            up,
            ellipsoid: self.ellipsoid,
        }
    }

    /// Convert to the Earth-fixed Cartesian frame, `reference` being the
    /// station position.
    pub fn to_ecef(&self, reference: &Geodetic) -> Ecef {
        self.to_enu().to_ecef(reference)
    }

    /// Convert to geodetic coordinates, `reference` being the station position.
    pub fn to_geodetic(&self, reference: &Geodetic) -> Result<Geodetic, Map3dError> {
        self.to_ecef(reference).to_geodetic()
    }

    /// Convert to the inertial frame evaluated at `epoch`.
    pub fn to_eci(&self, reference: &Geodetic, epoch: Epoch) -> Eci {
        self.to_ecef(reference).to_eci(epoch)
    }
}

impl Eci {
    pub fn new(x: Meter, y: Meter, z: Meter, epoch: Epoch, ellipsoid: Ellipsoid) -> Self {
        Eci {
            x,
            y,
            z,
            epoch,
            ellipsoid,
        }
    }

    /// Convert to the Earth-fixed Cartesian frame at this value's epoch.
    pub fn to_ecef(&self) -> Ecef {
        let (x, y, z) = eci_to_ecef(self.x, self.y, self.z, self.epoch);
        Ecef {
            x,
            y,
            z,
            ellipsoid: self.ellipsoid,
        }
    }

    /// Convert to geodetic coordinates.
    pub fn to_geodetic(&self) -> Result<Geodetic, Map3dError> {
        self.to_ecef().to_geodetic()
    }

    /// Convert to the local tangent plane centered on `reference`.
    pub fn to_enu(&self, reference: &Geodetic) -> Enu {
        self.to_ecef().to_enu(reference)
    }

    /// Convert to azimuth/elevation/range as seen from `reference`.
    pub fn to_aer(&self, reference: &Geodetic) -> Aer {
        self.to_ecef().to_aer(reference)
    }
}
