#![deny(missing_docs)]

//! Elliptic-curve point arithmetic over the NIST short-Weierstrass prime
//! curves (P-192, P-224, P-256, P-384, P-521), in Jacobian projective
//! coordinates.
//!
//! The group law lives in [`curve`] (doubling and mixed addition),
//! modular reduction in [`field`], scalar multiplication in [`ladder`],
//! and curve parameter lifecycle in [`group`]. [`mpi`] is the
//! arbitrary-precision integer backing everything else; [`point`] holds
//! the affine and Jacobian point types. [`collaborators`] stubs out the
//! two external interfaces this engine is wired against but does not
//! implement.

/// Narrow interfaces to external collaborators (AES, session cache).
pub mod collaborators;
/// Jacobian point doubling and mixed Jacobian+affine addition.
pub mod curve;
/// The crate's error type.
pub mod error;
/// Modular field arithmetic and the per-curve reduction strategies.
pub mod field;
/// Curve group lifecycle: named-curve parameter tables and the
/// group-level `add`/`mul` entry points.
pub mod group;
/// Montgomery-style double-and-add-always scalar multiplication.
pub mod ladder;
/// The arbitrary-precision integer type this engine is built on.
pub mod mpi;
/// Affine and Jacobian point representations.
pub mod point;

/// The single authorized import surface for consumers of this crate.
pub mod prelude {
    pub use crate::curve::{add, add_mixed, double};
    pub use crate::error::{EcpError, Result};
    pub use crate::field::{FieldCtx, ReductionStrategy};
    pub use crate::group::{EcpGroup, NamedCurve};
    pub use crate::ladder::scalar_mul;
    pub use crate::mpi::Mpi;
    pub use crate::point::{AffinePoint, JacobianPoint};

    pub use crate::collaborators::aes::{cpu_aes_supported, AesBlockEngine, NullAesEngine};
    pub use crate::collaborators::session_cache::{SessionCache, SessionRecord};
}
