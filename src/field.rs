// [src/field.rs]
//! Fast modular reduction.
//!
//! Every field-element multiplication, addition, subtraction, and
//! small-integer multiplication is followed by one of three reduction
//! steps (`MOD_MUL`, `MOD_ADD`, `MOD_SUB`), expressed here as inline
//! helpers rather than macros that mutate an outer scope.

use core::cmp::Ordering;

use crate::error::{EcpError, Result};
use crate::mpi::Mpi;

/// The curve-specific reduction strategy held by a [`crate::group::EcpGroup`].
///
/// The set of supported curves is closed, so a tagged variant is used in
/// place of a function pointer. It keeps the group record self-contained
/// and lets the P-521 fast path inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionStrategy {
    /// Generic reduction via `mpi_mod_mpi`, used by P-192/224/256/384.
    Generic,
    /// The Mersenne-style split reduction for P-521.
    P521,
}

impl ReductionStrategy {
    /// `MOD_MUL` (apply the quasi-reduction, then bring the result into
    /// `[0, p)` with a bounded number of conditional add/sub of `p`).
    ///
    /// # Errors
    /// Returns [`EcpError::Generic`] if `n` is negative or does not fit in
    /// `2 * pbits` bits (the quasi-reduction's documented precondition).
    pub fn reduce_after_mul(&self, n: &Mpi, p: &Mpi, pbits: usize) -> Result<Mpi> {
        if n.is_negative() {
            return Err(EcpError::Generic(
                "quasi-reduction input must be non-negative".into(),
            ));
        }
        let limit = Mpi::lset(1).shift_l(2 * pbits);
        if n.cmp_mpi(&limit) != Ordering::Less {
            return Err(EcpError::Generic(format!(
                "quasi-reduction input exceeds 2^{} bits",
                2 * pbits
            )));
        }

        let quasi = match self {
            ReductionStrategy::Generic => n.mod_mpi(p)?,
            ReductionStrategy::P521 => p521_quasi_reduce(n),
        };
        Ok(finish_reduction(quasi, p))
    }
}

/// `N = H * 2^521 + L`, replace `N` by `H + L`. Output fits in at most 522
/// bits, which `finish_reduction` then trims with a bounded fix-up.
fn p521_quasi_reduce(n: &Mpi) -> Mpi {
    const P521_BITS: usize = 521;
    let high = n.shift_r(P521_BITS);
    let low = n.sub_mpi(&high.shift_l(P521_BITS));
    high.add_mpi(&low)
}

/// Brings a quasi-reduced value into `[0, p)` via a small, bounded number
/// of conditional additions/subtractions, the same fix-up `MOD_ADD` and
/// `MOD_SUB` perform for plain addition/subtraction results.
fn finish_reduction(mut value: Mpi, p: &Mpi) -> Mpi {
    while value.is_negative() {
        value = value.add_mpi(p);
    }
    while value.cmp_mpi(p) != Ordering::Less {
        value = value.sub_mpi(p);
    }
    value
}

/// `MOD_ADD` (after addition or small-integer multiplication, subtract
/// `p` while the result is `>= p`).
pub fn mod_add(value: Mpi, p: &Mpi) -> Mpi {
    let mut r = value;
    while r.cmp_mpi(p) != Ordering::Less {
        r = r.sub_mpi(p);
    }
    r
}

/// `MOD_SUB` (after subtraction, add `p` while the result is negative).
pub fn mod_sub(value: Mpi, p: &Mpi) -> Mpi {
    let mut r = value;
    while r.is_negative() {
        r = r.add_mpi(p);
    }
    r
}

/// A field-arithmetic context bound to a specific group's modulus,
/// bundling `p`, `pbits`, and the reduction strategy so callers never have
/// to pass all three around separately.
#[derive(Debug, Clone)]
pub struct FieldCtx<'a> {
    /// The field prime.
    pub p: &'a Mpi,
    /// `ceil(log2(p))`.
    pub pbits: usize,
    /// The curve's reduction strategy.
    pub strategy: ReductionStrategy,
}

impl<'a> FieldCtx<'a> {
    /// Field multiplication, reduced into `[0, p)`.
    pub fn mul(&self, a: &Mpi, b: &Mpi) -> Result<Mpi> {
        self.strategy.reduce_after_mul(&a.mul_mpi(b), self.p, self.pbits)
    }

    /// Field squaring, reduced into `[0, p)`.
    pub fn square(&self, a: &Mpi) -> Result<Mpi> {
        self.mul(a, a)
    }

    /// Field addition, reduced into `[0, p)`.
    pub fn add(&self, a: &Mpi, b: &Mpi) -> Mpi {
        mod_add(a.add_mpi(b), self.p)
    }

    /// Field subtraction, reduced into `[0, p)`.
    pub fn sub(&self, a: &Mpi, b: &Mpi) -> Mpi {
        mod_sub(a.sub_mpi(b), self.p)
    }

    /// Multiplication by a small non-negative integer, reduced into
    /// `[0, p)`.
    pub fn mul_small(&self, a: &Mpi, small: u64) -> Mpi {
        mod_add(a.mul_int(small), self.p)
    }

    /// Division by two modulo `p`: if `a` is odd, add `p` (making it
    /// even, since `p` is odd) before shifting right by one bit. No
    /// further reduction is needed.
    pub fn halve(&self, a: &Mpi) -> Mpi {
        if a.is_odd() {
            a.add_mpi(self.p).shift_r(1)
        } else {
            a.shift_r(1)
        }
    }
}
