//! # Constants and type definitions for map3d
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `map3d` library.
//!
//! ## Overview
//!
//! - Time-scale constants for the sidereal rotation (J2000 epoch, century length)
//! - Unit conversions (degrees ↔ radians, days ↔ seconds)
//! - Numerical thresholds for the iterative geodetic inverse
//! - Core type aliases used across the crate
//!
//! These definitions are used by all transform modules and by the frame value types.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00)
pub const JD2000: f64 = 2_451_545.0;

// -------------------------------------------------------------------------------------------------
// Numerical thresholds
// -------------------------------------------------------------------------------------------------

/// Convergence threshold of the ECEF → geodetic latitude iteration, in radians
pub const GEODETIC_CONVERGENCE_EPS: f64 = 1e-12;

/// Iteration cap of the ECEF → geodetic inverse. The fixed point is reached in a
/// handful of iterations for any point outside the immediate neighborhood of the
/// planet's center, so hitting the cap indicates a pathological input.
pub const GEODETIC_MAX_ITERATIONS: usize = 64;

/// Distance from the polar axis (meters) below which an ECEF point is treated as
/// exactly polar by the geodetic inverse
pub const POLAR_AXIS_EPS: f64 = 1e-9;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in meters
pub type Meter = f64;
/// Julian Date (days)
pub type JulianDate = f64;
