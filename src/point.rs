//! Affine and Jacobian point representations and the conversions between
//! them.

use crate::error::{EcpError, Result};
use crate::field::FieldCtx;
use crate::mpi::Mpi;

/// A point on the curve in affine `(X, Y)` coordinates, or the point at
/// infinity.
///
/// When `is_zero` is `true`, `x` and `y` are logically undefined (they are
/// left at zero, but callers must not read them). Points produced by this
/// engine with `is_zero == false` satisfy the curve equation
/// `Y^2 = X^3 - 3X + b (mod p)`; points constructed from caller-supplied
/// coordinates via [`AffinePoint::from_strings`] are trusted as-is —
/// validating them against the curve equation is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffinePoint {
    /// The X coordinate. Undefined when `is_zero` is set.
    pub x: Mpi,
    /// The Y coordinate. Undefined when `is_zero` is set.
    pub y: Mpi,
    /// Marks the point at infinity (the group identity).
    pub is_zero: bool,
}

impl AffinePoint {
    /// The point at infinity.
    pub fn zero() -> Self {
        AffinePoint { x: Mpi::zero(), y: Mpi::zero(), is_zero: true }
    }

    /// Constructs a non-zero affine point from ASCII coordinates in the
    /// given radix.
    ///
    /// # Errors
    /// Returns [`EcpError::Parse`] if either coordinate fails to parse.
    pub fn from_strings(radix: u32, x: &str, y: &str) -> Result<Self> {
        Ok(AffinePoint {
            x: Mpi::read_string(radix, x)?,
            y: Mpi::read_string(radix, y)?,
            is_zero: false,
        })
    }

    /// Lifts this affine point to Jacobian coordinates.
    ///
    /// The zero point maps to the Jacobian zero `(1, 1, 0)`; otherwise the
    /// result is `(X, Y, 1)`.
    pub fn to_jacobian(&self) -> JacobianPoint {
        if self.is_zero {
            JacobianPoint::zero()
        } else {
            JacobianPoint { x: self.x.clone(), y: self.y.clone(), z: Mpi::lset(1), is_zero: false }
        }
    }
}

/// A point on the curve in Jacobian projective coordinates `(X, Y, Z)`,
/// representing the affine point `(X/Z^2, Y/Z^3)` when `Z != 0`, and the
/// point at infinity when `Z == 0`.
///
/// Every operation in this crate that returns a Jacobian point leaves
/// `0 <= X, Y, Z < p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JacobianPoint {
    /// Projective X coordinate.
    pub x: Mpi,
    /// Projective Y coordinate.
    pub y: Mpi,
    /// Projective Z coordinate; zero marks the point at infinity.
    pub z: Mpi,
    /// Cached zero marker, kept in sync with `z == 0`.
    is_zero: bool,
}

impl JacobianPoint {
    /// The Jacobian point at infinity, `(1, 1, 0)`.
    pub fn zero() -> Self {
        JacobianPoint { x: Mpi::lset(1), y: Mpi::lset(1), z: Mpi::zero(), is_zero: true }
    }

    /// Constructs a non-infinite Jacobian point directly from its three
    /// coordinates.
    pub fn new(x: Mpi, y: Mpi, z: Mpi) -> Self {
        let is_zero = z.is_zero();
        JacobianPoint { x, y, z, is_zero }
    }

    /// True when this is the point at infinity.
    pub fn is_zero(&self) -> bool {
        self.is_zero
    }

    /// Projects this Jacobian point back to affine coordinates.
    ///
    /// If `Z == 0`, the result is the affine zero. Otherwise computes
    /// `Z^-1 mod p`, then `(X * Z^-2, Y * Z^-3) mod p`.
    ///
    /// # Errors
    /// Returns [`EcpError::Generic`] if `Z^-1` cannot be computed — this
    /// can only happen when `Z` shares a factor with `p`, which indicates
    /// a corrupted group parameter (`Z == 0` is handled separately above).
    pub fn to_affine(&self, field: &FieldCtx<'_>) -> Result<AffinePoint> {
        if self.is_zero {
            return Ok(AffinePoint::zero());
        }

        let z_inv = self.z.inv_mod(field.p).map_err(|_| {
            EcpError::Generic("failed to invert Z during Jacobian-to-affine projection".into())
        })?;
        let z_inv_2 = field.square(&z_inv)?;
        let z_inv_3 = field.mul(&z_inv_2, &z_inv)?;

        Ok(AffinePoint {
            x: field.mul(&self.x, &z_inv_2)?,
            y: field.mul(&self.y, &z_inv_3)?,
            is_zero: false,
        })
    }
}
