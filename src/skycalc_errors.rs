use thiserror::Error;

/// Errors produced by the skycalc computation chain.
///
/// The chain is total over real-number inputs: NaN inputs propagate NaN
/// outputs, and invalid calendar fields produce a garbage Julian Date rather
/// than an error (documented caller responsibility). The only operation with
/// a genuine failure mode is the phase-angle computation, whose direction
/// vectors must have nonzero length.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkycalcError {
    #[error("direction vector has zero length; phase angle is undefined")]
    DegenerateDirection,
}
