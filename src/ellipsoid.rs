//! Reference ellipsoid models.
//!
//! An [`Ellipsoid`] carries the shape parameters of a planetary reference
//! surface: the semimajor and semiminor axes as catalog data, and the
//! flattening, third flattening and eccentricity derived from them. The catalog
//! is a closed, compile-time set expressed by [`EllipsoidModel`]; adding a model
//! means adding a variant, there is no dynamic registration.

use std::fmt;
use std::str::FromStr;

use crate::constants::Meter;
use crate::errors::Map3dError;

/// Identifier of a reference ellipsoid in the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EllipsoidModel {
    /// China Geodetic Coordinate System 2000
    Cgcs2000,
    /// World Geodetic System 1984
    Wgs84,
    /// Lunar reference ellipsoid
    Moon,
    /// Martian reference ellipsoid
    Mars,
}

impl EllipsoidModel {
    /// Catalog row for this model: display name, semimajor axis `a` and
    /// semiminor axis `b`, both in meters.
    fn parameters(self) -> (&'static str, Meter, Meter) {
        match self {
            EllipsoidModel::Cgcs2000 => ("CGCS-2000 (2008)", 6_378_137.0, 6_356_752.31414),
            EllipsoidModel::Wgs84 => ("WGS-84 (1984)", 6_378_137.0, 6_356_752.31424518),
            EllipsoidModel::Moon => ("Moon", 1_738_100.0, 1_736_000.0),
            EllipsoidModel::Mars => ("Mars", 3_396_190.0, 3_376_097.80585952),
        }
    }

    /// Catalog key accepted by [`EllipsoidModel::from_str`].
    pub fn key(self) -> &'static str {
        match self {
            EllipsoidModel::Cgcs2000 => "cgcs2000",
            EllipsoidModel::Wgs84 => "wgs84",
            EllipsoidModel::Moon => "moon",
            EllipsoidModel::Mars => "mars",
        }
    }
}

impl FromStr for EllipsoidModel {
    type Err = Map3dError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cgcs2000" => Ok(EllipsoidModel::Cgcs2000),
            "wgs84" => Ok(EllipsoidModel::Wgs84),
            "moon" => Ok(EllipsoidModel::Moon),
            "mars" => Ok(EllipsoidModel::Mars),
            _ => Err(Map3dError::UnknownEllipsoidModel(s.to_string())),
        }
    }
}

impl fmt::Display for EllipsoidModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Shape parameters of a reference ellipsoid.
///
/// Immutable after construction and cheap to copy; frame values embed it by
/// value. Invariant: `semimajor_axis > semiminor_axis > 0` for every catalog
/// entry, so the derived quantities are always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Catalog identifier this ellipsoid was built from
    pub model: EllipsoidModel,
    /// Human-readable display name
    pub name: &'static str,
    /// Equatorial radius `a` in meters
    pub semimajor_axis: Meter,
    /// Polar radius `b` in meters
    pub semiminor_axis: Meter,
    /// Flattening `f = (a - b) / a`
    pub flattening: f64,
    /// Third flattening `n = (a - b) / (a + b)`
    pub third_flattening: f64,
    /// First eccentricity `e = sqrt(2f - f²)`
    pub eccentricity: f64,
}

impl Ellipsoid {
    /// Build an ellipsoid from a catalog model, computing the derived
    /// flattening, third flattening and eccentricity from `(a, b)`.
    pub fn new(model: EllipsoidModel) -> Ellipsoid {
        let (name, a, b) = model.parameters();
        let f = (a - b) / a;

        Ellipsoid {
            model,
            name,
            semimajor_axis: a,
            semiminor_axis: b,
            flattening: f,
            third_flattening: (a - b) / (a + b),
            eccentricity: (2. * f - f * f).sqrt(),
        }
    }

    /// Look up a catalog key (e.g. `"wgs84"`) and build the ellipsoid.
    ///
    /// Fails with [`Map3dError::UnknownEllipsoidModel`] if the key is absent
    /// from the catalog; no partial result and no default substitution.
    pub fn from_name(model: &str) -> Result<Ellipsoid, Map3dError> {
        Ok(Ellipsoid::new(model.parse()?))
    }
}
