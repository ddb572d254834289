use thiserror::Error;

/// Errors produced by the map3d conversion surface.
///
/// The taxonomy is deliberately narrow: an unrecognized ellipsoid model name, and
/// a non-converging geodetic inverse. Every other conversion is total over finite
/// inputs, with degenerate cases resolved by explicit convention rather than an
/// error (see [`crate::transforms`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Map3dError {
    #[error("unknown ellipsoid model: {0}")]
    UnknownEllipsoidModel(String),

    #[error("ECEF to geodetic iteration did not converge after {iterations} iterations")]
    ConvergenceFailed { iterations: usize },
}
