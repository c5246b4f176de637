//! Error taxonomy for the elliptic-curve engine.

use thiserror::Error;

/// Errors surfaced by the engine's public operations.
///
/// Variants correspond to the three error kinds the engine distinguishes:
/// malformed caller input, allocation failure bubbled up from the MPI
/// layer, and the catch-all for unknown curves or broken reduction
/// preconditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcpError {
    /// Malformed input to a string-import function (`point_read_string`,
    /// `group_read_string`).
    #[error("malformed input: {0}")]
    Parse(String),

    /// Allocation failure bubbled up from the MPI collaborator.
    #[error("allocation failure: {0}")]
    Alloc(String),

    /// Unknown named curve, a reduction precondition violation, or a
    /// modular-inverse failure during Jacobian-to-affine projection.
    #[error("{0}")]
    Generic(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, EcpError>;
