//! C-facing adapter for the map3d conversion surface.
//!
//! Thin shim for host-language bindings: every function mirrors one core
//! transform, takes the ellipsoid as a catalog key string and the epoch as Unix
//! seconds, writes its results through out pointers and returns a
//! [`Map3dStatus`] code. No conversion math lives here.

use std::ffi::{c_char, CStr};

use hifitime::Epoch;

use crate::ellipsoid::Ellipsoid;
use crate::errors::Map3dError;
use crate::sidereal;
use crate::transforms;

/// ABI version for downstream bindings.
pub const MAP3D_API_VERSION: u32 = 1;

/// C-facing status codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Map3dStatus {
    Ok = 0,
    UnknownModel = 1,
    ConvergenceFailed = 2,
    InvalidArgument = 3,
}

impl From<&Map3dError> for Map3dStatus {
    fn from(value: &Map3dError) -> Self {
        match value {
            Map3dError::UnknownEllipsoidModel(_) => Map3dStatus::UnknownModel,
            Map3dError::ConvergenceFailed { .. } => Map3dStatus::ConvergenceFailed,
        }
    }
}

/// Decode a catalog key passed as a C string and build the ellipsoid.
fn ellipsoid_from_key(model: *const c_char) -> Result<Ellipsoid, Map3dStatus> {
    if model.is_null() {
        return Err(Map3dStatus::InvalidArgument);
    }
    let key = unsafe { CStr::from_ptr(model) }
        .to_str()
        .map_err(|_| Map3dStatus::InvalidArgument)?;
    Ellipsoid::from_name(key).map_err(|e| Map3dStatus::from(&e))
}

/// Write a coordinate triple through three out pointers, rejecting nulls.
fn write_triple(
    (a, b, c): (f64, f64, f64),
    out_a: *mut f64,
    out_b: *mut f64,
    out_c: *mut f64,
) -> Map3dStatus {
    if out_a.is_null() || out_b.is_null() || out_c.is_null() {
        return Map3dStatus::InvalidArgument;
    }
    unsafe {
        *out_a = a;
        *out_b = b;
        *out_c = c;
    }
    Map3dStatus::Ok
}

/// ENU → azimuth/elevation/slant-range. Degrees and meters.
#[no_mangle]
pub extern "C" fn map3d_enu_to_aer(
    east: f64,
    north: f64,
    up: f64,
    out_azimuth: *mut f64,
    out_elevation: *mut f64,
    out_slant_range: *mut f64,
) -> i32 {
    write_triple(
        transforms::enu_to_aer(east, north, up),
        out_azimuth,
        out_elevation,
        out_slant_range,
    ) as i32
}

/// Azimuth/elevation/slant-range → ENU. Degrees and meters.
#[no_mangle]
pub extern "C" fn map3d_aer_to_enu(
    azimuth: f64,
    elevation: f64,
    slant_range: f64,
    out_east: *mut f64,
    out_north: *mut f64,
    out_up: *mut f64,
) -> i32 {
    write_triple(
        transforms::aer_to_enu(azimuth, elevation, slant_range),
        out_east,
        out_north,
        out_up,
    ) as i32
}

/// Geodetic → ECEF for the named ellipsoid model.
#[no_mangle]
pub extern "C" fn map3d_geodetic_to_ecef(
    latitude: f64,
    longitude: f64,
    altitude: f64,
    model: *const c_char,
    out_x: *mut f64,
    out_y: *mut f64,
    out_z: *mut f64,
) -> i32 {
    let ell = match ellipsoid_from_key(model) {
        Ok(ell) => ell,
        Err(status) => return status as i32,
    };
    write_triple(
        transforms::geodetic_to_ecef(latitude, longitude, altitude, &ell),
        out_x,
        out_y,
        out_z,
    ) as i32
}

/// ECEF → geodetic for the named ellipsoid model.
#[no_mangle]
pub extern "C" fn map3d_ecef_to_geodetic(
    x: f64,
    y: f64,
    z: f64,
    model: *const c_char,
    out_latitude: *mut f64,
    out_longitude: *mut f64,
    out_altitude: *mut f64,
) -> i32 {
    let ell = match ellipsoid_from_key(model) {
        Ok(ell) => ell,
        Err(status) => return status as i32,
    };
    match transforms::ecef_to_geodetic(x, y, z, &ell) {
        Ok(triple) => write_triple(triple, out_latitude, out_longitude, out_altitude) as i32,
        Err(e) => Map3dStatus::from(&e) as i32,
    }
}

/// ECEF → ENU relative to a geodetic reference point.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn map3d_ecef_to_enu(
    x: f64,
    y: f64,
    z: f64,
    ref_latitude: f64,
    ref_longitude: f64,
    ref_altitude: f64,
    model: *const c_char,
    out_east: *mut f64,
    out_north: *mut f64,
    out_up: *mut f64,
) -> i32 {
    let ell = match ellipsoid_from_key(model) {
        Ok(ell) => ell,
        Err(status) => return status as i32,
    };
    write_triple(
        transforms::ecef_to_enu(x, y, z, ref_latitude, ref_longitude, ref_altitude, &ell),
        out_east,
        out_north,
        out_up,
    ) as i32
}

/// ENU → ECEF relative to a geodetic reference point.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn map3d_enu_to_ecef(
    east: f64,
    north: f64,
    up: f64,
    ref_latitude: f64,
    ref_longitude: f64,
    ref_altitude: f64,
    model: *const c_char,
    out_x: *mut f64,
    out_y: *mut f64,
    out_z: *mut f64,
) -> i32 {
    let ell = match ellipsoid_from_key(model) {
        Ok(ell) => ell,
        Err(status) => return status as i32,
    };
    write_triple(
        transforms::enu_to_ecef(east, north, up, ref_latitude, ref_longitude, ref_altitude, &ell),
        out_x,
        out_y,
        out_z,
    ) as i32
}

/// ECI → ECEF at a Unix-second timestamp.
#[no_mangle]
pub extern "C" fn map3d_eci_to_ecef(
    x: f64,
    y: f64,
    z: f64,
    unix_seconds: f64,
    out_x: *mut f64,
    out_y: *mut f64,
    out_z: *mut f64,
) -> i32 {
    let epoch = Epoch::from_unix_seconds(unix_seconds);
    write_triple(sidereal::eci_to_ecef(x, y, z, epoch), out_x, out_y, out_z) as i32
}

/// ECEF → ECI at a Unix-second timestamp.
#[no_mangle]
pub extern "C" fn map3d_ecef_to_eci(
    x: f64,
    y: f64,
    z: f64,
    unix_seconds: f64,
    out_x: *mut f64,
    out_y: *mut f64,
    out_z: *mut f64,
) -> i32 {
    let epoch = Epoch::from_unix_seconds(unix_seconds);
    write_triple(sidereal::ecef_to_eci(x, y, z, epoch), out_x, out_y, out_z) as i32
}

#[cfg(test)]
mod capi_test {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_geodetic_to_ecef_status_ok() {
        let model = CString::new("wgs84").unwrap();
        let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);
        let status =
            map3d_geodetic_to_ecef(0.0, 0.0, 0.0, model.as_ptr(), &mut x, &mut y, &mut z);
        assert_eq!(status, Map3dStatus::Ok as i32);
        assert!((x - 6_378_137.0).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_model_status() {
        let model = CString::new("bogus").unwrap();
        let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);
        let status =
            map3d_geodetic_to_ecef(0.0, 0.0, 0.0, model.as_ptr(), &mut x, &mut y, &mut z);
        assert_eq!(status, Map3dStatus::UnknownModel as i32);
    }

    #[test]
    fn test_null_arguments_rejected() {
        let (mut a, mut b) = (0.0, 0.0);
        let status = map3d_enu_to_aer(1.0, 2.0, 3.0, &mut a, &mut b, std::ptr::null_mut());
        assert_eq!(status, Map3dStatus::InvalidArgument as i32);

        let status = map3d_geodetic_to_ecef(
            0.0,
            0.0,
            0.0,
            std::ptr::null(),
            &mut a,
            &mut b,
            std::ptr::null_mut(),
        );
        assert_eq!(status, Map3dStatus::InvalidArgument as i32);
    }

    #[test]
    fn test_eci_round_trip_through_c_surface() {
        let (mut xe, mut ye, mut ze) = (0.0, 0.0, 0.0);
        let status =
            map3d_eci_to_ecef(6_378_137.0, 0.0, 0.0, 1.7e9, &mut xe, &mut ye, &mut ze);
        assert_eq!(status, Map3dStatus::Ok as i32);

        let (mut xi, mut yi, mut zi) = (0.0, 0.0, 0.0);
        let status = map3d_ecef_to_eci(xe, ye, ze, 1.7e9, &mut xi, &mut yi, &mut zi);
        assert_eq!(status, Map3dStatus::Ok as i32);
        assert!((xi - 6_378_137.0).abs() < 1e-3);
        assert!(yi.abs() < 1e-3);
        assert!(zi.abs() < 1e-3);
    }
}
