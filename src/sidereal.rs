//! Julian date, Greenwich sidereal time and the ECI ↔ ECEF rotation.
//!
//! ECI and ECEF differ only by the Earth's rotation angle about the polar axis
//! at the evaluation instant, so the pair of transforms here is a single
//! time-parameterized Z rotation and its transpose.
//!
//! One canonical time pipeline is used everywhere ECI is involved: the Julian
//! Date comes from [`hifitime`]'s UTC day conversion, and the rotation angle is
//! the IAU 1982 Greenwich Mean Sidereal Time polynomial (Vallado form), treating
//! UT1 ≈ UTC. No Earth-orientation corrections are applied; the sub-second UT1
//! offset is far below the tolerances of the conversions built on top.

use hifitime::Epoch;
use nalgebra::{Rotation3, Vector3};

use crate::constants::{JulianDate, Meter, Radian, DAYS_PER_CENTURY, DPI, JD2000, SECONDS_PER_DAY};

/// Julian Date (UTC) of an epoch.
pub fn julian_date(epoch: Epoch) -> JulianDate {
    epoch.to_jde_utc_days()
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians for a given
/// Julian Date (UT1 ≈ UTC).
///
/// This is the IAU 1982 polynomial, evaluated as a cubic in Julian centuries
/// `T = (jd - 2451545) / 36525` since J2000.0:
///
/// ```text
/// GMST[s] = 67310.54841 + (876600·3600 + 8640184.812866)·T
///         + 0.093104·T² − 6.2e-6·T³
/// ```
///
/// The result is converted from seconds of sidereal time to radians and
/// normalized to [0, 2π).
///
/// # References
/// * IAU 1982, IERS Conventions 1996/2000.
/// * Vallado, *Fundamentals of Astrodynamics and Applications*, Eq. 3-47.
pub fn gmst(jd: JulianDate) -> Radian {
    let t = (jd - JD2000) / DAYS_PER_CENTURY;

    let gmst_sec = 67_310.54841
        + (876_600.0 * 3_600.0 + 8_640_184.812866) * t
        + 0.093104 * t * t
        - 6.2e-6 * t * t * t;

    (gmst_sec * DPI / SECONDS_PER_DAY).rem_euclid(DPI)
}

/// Rotation taking an inertial (ECI) vector into the Earth-fixed (ECEF) frame:
/// the Earth has rotated `gst` radians eastward since the frames coincided, so
/// the frame change is a Z rotation by `-gst` applied to the vector.
fn polar_rotation(gst: Radian) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), -gst)
}

/// Rotate an ECI position into ECEF at the given epoch.
pub fn eci_to_ecef(x: Meter, y: Meter, z: Meter, epoch: Epoch) -> (Meter, Meter, Meter) {
    let gst = gmst(julian_date(epoch));
    let v = polar_rotation(gst) * Vector3::new(x, y, z);
    (v.x, v.y, v.z)
}

/// Rotate an ECEF position into ECI at the given epoch.
///
/// Applies the inverse of the [`eci_to_ecef`] rotation; the two are exact
/// inverses for the same epoch.
pub fn ecef_to_eci(x: Meter, y: Meter, z: Meter, epoch: Epoch) -> (Meter, Meter, Meter) {
    let gst = gmst(julian_date(epoch));
    let v = polar_rotation(gst).inverse() * Vector3::new(x, y, z);
    (v.x, v.y, v.z)
}
