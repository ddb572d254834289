//! # map3d
//!
//! Coordinate transformations between five reference frames used in geodesy and
//! orbital tracking:
//!
//! - **Geodetic** — latitude / longitude / altitude against a reference ellipsoid
//! - **ECEF** — Earth-centered, Earth-fixed Cartesian
//! - **ENU** — east / north / up local tangent plane
//! - **AER** — azimuth / elevation / slant-range, station-centric
//! - **ECI** — Earth-centered inertial, time-dependent
//!
//! The pairwise engines (Geodetic ↔ ECEF, ECEF ↔ ENU, ENU ↔ AER, ECEF ↔ ECI)
//! live in [`transforms`] and [`sidereal`]; the [`frames`] value types compose
//! them through ECEF as the common hub. Reference ellipsoids come from the
//! closed catalog in [`ellipsoid`].
//!
//! Angles are degrees and distances meters on the whole public surface; epochs
//! are [`hifitime::Epoch`] values. All conversions are pure functions over
//! immutable values and are safe to call from any number of threads.
//!
//! ```
//! use hifitime::Epoch;
//! use map3d::{Aer, Ellipsoid, Geodetic};
//!
//! let ell = Ellipsoid::from_name("wgs84")?;
//! let station = Geodetic::new(42.0, -82.0, 200.0, ell);
//! let target = Aer::new(45.0, 30.0, 2000.0, ell);
//!
//! let geodetic = target.to_geodetic(&station)?;
//! let eci = target.to_eci(&station, Epoch::from_unix_seconds(1_700_000_000.0));
//! # Ok::<(), map3d::Map3dError>(())
//! ```

pub mod constants;
pub mod ellipsoid;
pub mod errors;
pub mod frames;
pub mod sidereal;
pub mod transforms;

#[cfg(feature = "capi")]
pub mod capi;

pub use ellipsoid::{Ellipsoid, EllipsoidModel};
pub use errors::Map3dError;
pub use frames::{Aer, Ecef, Eci, Enu, Geodetic};
