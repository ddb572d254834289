//! Stateless transform functions between the ellipsoid-referenced frames.
//!
//! Three engines live here, composed by the frame value types in
//! [`crate::frames`]:
//!
//! - **ENU ↔ AER**: direct trigonometric pair on the local tangent plane, no
//!   ellipsoid dependency and no iteration.
//! - **Geodetic ↔ ECEF**: closed-form forward conversion through the prime
//!   vertical radius of curvature, and an iterative fixed-point inverse (the
//!   only fallible transform in the crate).
//! - **ENU ↔ ECEF**: orthonormal tangent-plane rotation about a geodetic
//!   reference point, with the transpose as the exact inverse.
//!
//! Angles are degrees and distances meters throughout the public surface.

use nalgebra::{Matrix3, Vector3};

use crate::constants::{
    Degree, Meter, Radian, GEODETIC_CONVERGENCE_EPS, GEODETIC_MAX_ITERATIONS, POLAR_AXIS_EPS,
};
use crate::ellipsoid::Ellipsoid;
use crate::errors::Map3dError;

/// Convert local tangent-plane coordinates to azimuth, elevation and slant range.
///
/// Arguments
/// ---------
/// * `east`, `north`, `up`: offsets from the reference point in meters.
///
/// Return
/// ------
/// * `(azimuth, elevation, slant_range)`: azimuth in degrees clockwise from
///   north, normalized to [0, 360); elevation in degrees above the horizon;
///   slant range in meters.
///
/// The zero vector has no defined azimuth or elevation and maps to
/// `(0.0, 0.0, 0.0)` by convention rather than relying on `atan2(0, 0)`.
pub fn enu_to_aer(east: Meter, north: Meter, up: Meter) -> (Degree, Degree, Meter) {
    let r = east.hypot(north);
    let slant_range = r.hypot(up);

    if slant_range == 0.0 {
        return (0.0, 0.0, 0.0);
    }

    let elevation = up.atan2(r).to_degrees();
    // rem_euclid of a tiny negative bearing can round up to exactly 360.0,
    // which must collapse to 0 to keep the azimuth in [0, 360).
    let azimuth = east.atan2(north).to_degrees().rem_euclid(360.0);
    let azimuth = if azimuth >= 360.0 { 0.0 } else { azimuth };

    (azimuth, elevation, slant_range)
}

/// Convert azimuth, elevation and slant range to local tangent-plane coordinates.
///
/// Exact inverse of [`enu_to_aer`]; pure and total, no singularities.
pub fn aer_to_enu(azimuth: Degree, elevation: Degree, slant_range: Meter) -> (Meter, Meter, Meter) {
    let az = azimuth.to_radians();
    let el = elevation.to_radians();

    let r = slant_range * el.cos();
    (r * az.sin(), r * az.cos(), slant_range * el.sin())
}

/// Convert geodetic coordinates to ECEF.
///
/// Closed form through the radius of curvature in the prime vertical,
/// `N = a² / hypot(a·cos(lat), b·sin(lat))`:
///
/// ```text
/// x = (N + alt)·cos(lat)·cos(lon)
/// y = (N + alt)·cos(lat)·sin(lon)
/// z = (N·(b/a)² + alt)·sin(lat)
/// ```
///
/// Arguments
/// ---------
/// * `latitude`: geodetic latitude in degrees.
/// * `longitude`: longitude in degrees east of Greenwich.
/// * `altitude`: height above the ellipsoid surface in meters.
/// * `ell`: reference ellipsoid.
///
/// Return
/// ------
/// * `(x, y, z)` in meters, in the ellipsoid-centered Cartesian frame.
pub fn geodetic_to_ecef(
    latitude: Degree,
    longitude: Degree,
    altitude: Meter,
    ell: &Ellipsoid,
) -> (Meter, Meter, Meter) {
    let lat = latitude.to_radians();
    let lon = longitude.to_radians();
    let a = ell.semimajor_axis;
    let b = ell.semiminor_axis;

    let n = a * a / (a * lat.cos()).hypot(b * lat.sin());

    let x = (n + altitude) * lat.cos() * lon.cos();
    let y = (n + altitude) * lat.cos() * lon.sin();
    let z = (n * (b / a).powi(2) + altitude) * lat.sin();

    (x, y, z)
}

/// Convert ECEF coordinates to geodetic.
///
/// No closed form exists in general, so the latitude is obtained by fixed-point
/// iteration: starting from `atan2(z, p·(1 - e²))` with `p = hypot(x, y)`, the
/// prime vertical radius `N` and height `h` are recomputed until successive
/// latitude estimates differ by less than [`GEODETIC_CONVERGENCE_EPS`] radians.
/// Longitude is the direct `atan2(y, x)`, in (−180°, 180°].
///
/// Points on the polar axis (`p` below [`POLAR_AXIS_EPS`]) degenerate the
/// iteration and are resolved by convention: latitude ±90°, longitude 0,
/// altitude `|z| − b`.
///
/// Return
/// ------
/// * `(latitude, longitude, altitude)` in degrees and meters, or
///   [`Map3dError::ConvergenceFailed`] if [`GEODETIC_MAX_ITERATIONS`] is
///   exceeded, which cannot occur for points more than a few centimeters from
///   the planet's center.
pub fn ecef_to_geodetic(
    x: Meter,
    y: Meter,
    z: Meter,
    ell: &Ellipsoid,
) -> Result<(Degree, Degree, Meter), Map3dError> {
    let a = ell.semimajor_axis;
    let b = ell.semiminor_axis;
    let e2 = (a * a - b * b) / (a * a);

    let p = x.hypot(y);

    if p < POLAR_AXIS_EPS {
        let latitude = if z >= 0.0 { 90.0 } else { -90.0 };
        return Ok((latitude, 0.0, z.abs() - b));
    }

    let longitude = y.atan2(x).to_degrees();
    let mut lat = z.atan2(p * (1.0 - e2));

    for _ in 0..GEODETIC_MAX_ITERATIONS {
        let n = a / (1.0 - e2 * lat.sin().powi(2)).sqrt();
        let altitude = p / lat.cos() - n;

        let lat_new = (z / p / (1.0 - e2 * n / (n + altitude))).atan();

        if (lat_new - lat).abs() < GEODETIC_CONVERGENCE_EPS {
            return Ok((lat_new.to_degrees(), longitude, altitude));
        }
        lat = lat_new;
    }

    Err(Map3dError::ConvergenceFailed {
        iterations: GEODETIC_MAX_ITERATIONS,
    })
}

/// Rotation from ECEF deltas into the local tangent-plane (east, north, up)
/// basis at the given reference latitude and longitude.
///
/// Rows are the east, north and up unit vectors expressed in ECEF. The matrix
/// is orthonormal, so its transpose is its exact inverse and ENU ↔ ECEF round
/// trips are bit-level consistent for a shared reference point.
fn tangent_plane_rotation(lat: Radian, lon: Radian) -> Matrix3<f64> {
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    Matrix3::new(
        -sin_lon,
        cos_lon,
        0.0,
        -sin_lat * cos_lon,
        -sin_lat * sin_lon,
        cos_lat,
        cos_lat * cos_lon,
        cos_lat * sin_lon,
        sin_lat,
    )
}

/// Convert ECEF coordinates to ENU relative to a geodetic reference point.
///
/// Translates by the reference point's ECEF position (via
/// [`geodetic_to_ecef`]), then rotates the delta into the tangent-plane basis.
///
/// Arguments
/// ---------
/// * `x`, `y`, `z`: ECEF position in meters.
/// * `ref_latitude`, `ref_longitude`, `ref_altitude`: reference point in
///   degrees and meters.
/// * `ell`: reference ellipsoid, shared by the point and the reference.
pub fn ecef_to_enu(
    x: Meter,
    y: Meter,
    z: Meter,
    ref_latitude: Degree,
    ref_longitude: Degree,
    ref_altitude: Meter,
    ell: &Ellipsoid,
) -> (Meter, Meter, Meter) {
    let (x0, y0, z0) = geodetic_to_ecef(ref_latitude, ref_longitude, ref_altitude, ell);
    let delta = Vector3::new(x - x0, y - y0, z - z0);

    let enu = tangent_plane_rotation(ref_latitude.to_radians(), ref_longitude.to_radians()) * delta;
    (enu.x, enu.y, enu.z)
}

/// Convert ENU coordinates to ECEF relative to a geodetic reference point.
///
/// Applies the transpose of the tangent-plane rotation, then adds back the
/// reference point's ECEF position. Exact inverse of [`ecef_to_enu`].
pub fn enu_to_ecef(
    east: Meter,
    north: Meter,
    up: Meter,
    ref_latitude: Degree,
    ref_longitude: Degree,
    ref_altitude: Meter,
    ell: &Ellipsoid,
) -> (Meter, Meter, Meter) {
    let delta = tangent_plane_rotation(ref_latitude.to_radians(), ref_longitude.to_radians())
        .transpose()
        * Vector3::new(east, north, up);

    let (x0, y0, z0) = geodetic_to_ecef(ref_latitude, ref_longitude, ref_altitude, ell);
    (x0 + delta.x, y0 + delta.y, z0 + delta.z)
}

#[cfg(test)]
mod transforms_test {
    use super::*;
    use approx::assert_relative_eq;

    fn wgs84() -> Ellipsoid {
        Ellipsoid::from_name("wgs84").unwrap()
    }

    #[test]
    fn test_aer_to_enu_reference_scenario() {
        // az 45°, el 30°, range 1000 m → east = north = 1000·cos30°·sin45°
        let (e, n, u) = aer_to_enu(45.0, 30.0, 1000.0);
        assert_relative_eq!(e, 612.372435695795, epsilon = 1e-6);
        assert_relative_eq!(n, 612.372435695795, epsilon = 1e-6);
        assert_relative_eq!(u, 500.0, epsilon = 1e-6);

        // Same bearing at 2000 m range scales linearly
        let (e, n, u) = aer_to_enu(45.0, 30.0, 2000.0);
        assert_relative_eq!(e, 1224.74487139159, epsilon = 1e-6);
        assert_relative_eq!(n, 1224.74487139159, epsilon = 1e-6);
        assert_relative_eq!(u, 1000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_enu_aer_round_trip() {
        let cases = [
            (100.0, 200.0, 50.0),
            (-100.0, 200.0, -50.0),
            (0.0, -500.0, 10.0),
            (1.0e6, -2.0e5, 3.0e4),
        ];
        for (e, n, u) in cases {
            let (az, el, srange) = enu_to_aer(e, n, u);
            assert!((0.0..360.0).contains(&az), "azimuth {az} out of [0, 360)");
            let (e2, n2, u2) = aer_to_enu(az, el, srange);
            assert_relative_eq!(e, e2, epsilon = 1e-9, max_relative = 1e-12);
            assert_relative_eq!(n, n2, epsilon = 1e-9, max_relative = 1e-12);
            assert_relative_eq!(u, u2, epsilon = 1e-9, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_enu_to_aer_zero_vector() {
        let (az, el, srange) = enu_to_aer(0.0, 0.0, 0.0);
        assert_eq!((az, el, srange), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_aer_to_enu_zero_range() {
        let (e, n, u) = aer_to_enu(0.0, 0.0, 0.0);
        assert_eq!((e, n, u), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_azimuth_wraps_into_positive_range() {
        // Due west: atan2(-1, 0) is negative, must wrap to 270°
        let (az, _, _) = enu_to_aer(-1000.0, 0.0, 0.0);
        assert_relative_eq!(az, 270.0, epsilon = 1e-9);

        // Due south: atan2(0, -1) = 180°
        let (az, _, _) = enu_to_aer(0.0, -1000.0, 0.0);
        assert_relative_eq!(az, 180.0, epsilon = 1e-9);

        // A hair west of due north: the negative bearing is smaller than the
        // resolution of 360.0, so the wrap must collapse to 0, not 360
        let (az, _, _) = enu_to_aer(-1e-13, 1000.0, 0.0);
        assert!((0.0..360.0).contains(&az), "azimuth {az} out of [0, 360)");
        assert_relative_eq!(az, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_geodetic_to_ecef_equator_prime_meridian() {
        let ell = wgs84();
        let (x, y, z) = geodetic_to_ecef(0.0, 0.0, 0.0, &ell);
        assert_relative_eq!(x, ell.semimajor_axis, epsilon = 1e-6);
        assert_relative_eq!(y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_geodetic_to_ecef_north_pole() {
        let ell = wgs84();
        let (x, y, z) = geodetic_to_ecef(90.0, 0.0, 0.0, &ell);
        // At the pole N = a²/b and N·(b/a)² = b
        assert_relative_eq!(x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(z, ell.semiminor_axis, epsilon = 1e-6);
    }

    #[test]
    fn test_ecef_to_geodetic_equator_point() {
        let ell = wgs84();
        let (lat, lon, alt) = ecef_to_geodetic(ell.semimajor_axis, 0.0, 0.0, &ell).unwrap();
        assert_relative_eq!(lat, 0.0, epsilon = 1e-9);
        assert_relative_eq!(lon, 0.0, epsilon = 1e-9);
        assert_relative_eq!(alt, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ecef_to_geodetic_polar_axis_convention() {
        let ell = wgs84();
        let (lat, lon, alt) = ecef_to_geodetic(0.0, 0.0, ell.semiminor_axis + 1000.0, &ell).unwrap();
        assert_eq!(lat, 90.0);
        assert_eq!(lon, 0.0);
        assert_relative_eq!(alt, 1000.0, epsilon = 1e-6);

        let (lat, _, alt) = ecef_to_geodetic(0.0, 0.0, -ell.semiminor_axis, &ell).unwrap();
        assert_eq!(lat, -90.0);
        assert_relative_eq!(alt, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ecef_to_geodetic_near_center_terminates() {
        // Deep inside the ellipsoid the fixed point is at its worst; the
        // iteration cap guarantees termination and every returned value is a
        // defined Result, never a hang or NaN.
        let ell = wgs84();
        let cases = [(0.01, 0.0, 0.01), (1.0, 1.0, 1.0), (100.0, -50.0, 25.0)];
        for (x, y, z) in cases {
            match ecef_to_geodetic(x, y, z, &ell) {
                Ok((lat, lon, alt)) => {
                    assert!(lat.is_finite() && lon.is_finite() && alt.is_finite());
                    assert!((-90.0..=90.0).contains(&lat), "latitude {lat} out of range");
                }
                Err(e) => assert_eq!(
                    e,
                    Map3dError::ConvergenceFailed {
                        iterations: GEODETIC_MAX_ITERATIONS
                    }
                ),
            }
        }
    }

    #[test]
    fn test_geodetic_ecef_round_trip() {
        let ell = wgs84();
        let cases = [
            (35.6895, 139.6917, 131.0),
            (-30.2446, -70.7494, 2647.0),
            (51.4778, -0.0014, 46.0),
            (-89.0, 10.0, 500.0),
            (0.0, 180.0, 0.0),
        ];
        for (lat, lon, alt) in cases {
            let (x, y, z) = geodetic_to_ecef(lat, lon, alt, &ell);
            let (lat2, lon2, alt2) = ecef_to_geodetic(x, y, z, &ell).unwrap();
            assert_relative_eq!(lat, lat2, epsilon = 1e-9);
            assert_relative_eq!(lon, lon2, epsilon = 1e-9);
            assert_relative_eq!(alt, alt2, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_ecef_to_enu_radial_offset_is_up() {
        let ell = wgs84();
        // 100 m straight out along the equatorial x axis is purely "up" at (0°, 0°)
        let (e, n, u) = ecef_to_enu(ell.semimajor_axis + 100.0, 0.0, 0.0, 0.0, 0.0, 0.0, &ell);
        assert_relative_eq!(e, 0.0, epsilon = 1e-6);
        assert_relative_eq!(n, 0.0, epsilon = 1e-6);
        assert_relative_eq!(u, 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_enu_ecef_round_trip() {
        let ell = wgs84();
        let reference = (42.0, -82.0, 200.0);
        let cases = [
            (0.0, 0.0, 0.0),
            (100.0, -200.0, 50.0),
            (-5.0e4, 3.0e4, -1.0e3),
            (1.0e6, 1.0e6, 1.0e5),
        ];
        for (e, n, u) in cases {
            let (x, y, z) = enu_to_ecef(e, n, u, reference.0, reference.1, reference.2, &ell);
            let (e2, n2, u2) = ecef_to_enu(x, y, z, reference.0, reference.1, reference.2, &ell);
            assert_relative_eq!(e, e2, epsilon = 1e-6);
            assert_relative_eq!(n, n2, epsilon = 1e-6);
            assert_relative_eq!(u, u2, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_tangent_plane_rotation_is_orthonormal() {
        let rot = tangent_plane_rotation(42.0_f64.to_radians(), -82.0_f64.to_radians());
        let identity = rot * rot.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(identity[(i, j)], expected, epsilon = 1e-14);
            }
        }
    }
}
