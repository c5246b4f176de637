// [src/mpi.rs]
//! Multi-precision integer collaborator.
//!
//! The engine is specified against an external arbitrary-precision integer
//! library exposing a small, C-MPI-flavored surface (`read_string`, `msb`,
//! `get_bit`, `inv_mod`, ...). This module is a thin wrapper around
//! [`num_bigint::BigInt`] that exposes exactly that surface, so the rest of
//! the crate never touches `num_bigint` types directly.

use core::cmp::Ordering;
use core::fmt;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::error::{EcpError, Result};

/// A signed arbitrary-precision integer.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Mpi(BigInt);

impl fmt::Debug for Mpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mpi({})", self.0)
    }
}

impl Mpi {
    /// The value zero.
    pub fn zero() -> Self {
        Mpi(BigInt::zero())
    }

    /// `lset` — set (construct) from a small signed integer.
    pub fn lset(value: i64) -> Self {
        Mpi(BigInt::from(value))
    }

    /// Parses an ASCII string in the given radix (2, 10, or 16).
    ///
    /// # Errors
    /// Returns [`EcpError::Parse`] if `text` contains characters invalid
    /// for `radix`, or if `radix` itself is unsupported.
    pub fn read_string(radix: u32, text: &str) -> Result<Self> {
        if !matches!(radix, 2 | 10 | 16) {
            return Err(EcpError::Parse(format!("unsupported radix {radix}")));
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(EcpError::Parse("empty MPI string".into()));
        }
        BigInt::parse_bytes(trimmed.as_bytes(), radix)
            .map(Mpi)
            .ok_or_else(|| EcpError::Parse(format!("invalid base-{radix} digits: {trimmed}")))
    }

    /// Renders the value as an uppercase hex string, no leading zeros
    /// (`"0"` for zero), matching the curve parameter tables' format.
    pub fn to_hex_string(&self) -> String {
        let (sign, bytes) = self.0.to_bytes_be();
        let mut out = bytes
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<String>();
        let trimmed = out.trim_start_matches('0');
        out = if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() };
        if sign == Sign::Minus {
            out = format!("-{out}");
        }
        out
    }

    /// `cmp_int` — compares against a small signed integer.
    pub fn cmp_int(&self, other: i64) -> Ordering {
        self.0.cmp(&BigInt::from(other))
    }

    /// `cmp_mpi` — compares against another MPI.
    pub fn cmp_mpi(&self, other: &Mpi) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// True when the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `msb` — index of the most significant set bit plus one (the bit
    /// length). Zero for the value zero.
    pub fn msb(&self) -> usize {
        self.0.magnitude().bits() as usize
    }

    /// `get_bit` — value (0 or 1) of the bit at position `pos`, counting
    /// from the least significant bit.
    pub fn get_bit(&self, pos: usize) -> u8 {
        let (_, bytes_le) = self.0.to_bytes_le();
        let byte_idx = pos / 8;
        let bit_idx = pos % 8;
        match bytes_le.get(byte_idx) {
            Some(byte) => (byte >> bit_idx) & 1,
            None => 0,
        }
    }

    /// `add_mpi` — signed addition.
    pub fn add_mpi(&self, other: &Mpi) -> Self {
        Mpi(&self.0 + &other.0)
    }

    /// `sub_mpi` — signed subtraction.
    pub fn sub_mpi(&self, other: &Mpi) -> Self {
        Mpi(&self.0 - &other.0)
    }

    /// `add_abs` — addition of absolute values (result is non-negative).
    pub fn add_abs(&self, other: &Mpi) -> Self {
        let a = BigInt::from_biguint(Sign::Plus, self.0.magnitude().clone());
        let b = BigInt::from_biguint(Sign::Plus, other.0.magnitude().clone());
        Mpi(a + b)
    }

    /// `shift_l` — left shift by `count` bits (multiplication by `2^count`).
    pub fn shift_l(&self, count: usize) -> Self {
        Mpi(&self.0 << count)
    }

    /// `shift_r` — right shift by `count` bits (floor division by `2^count`).
    pub fn shift_r(&self, count: usize) -> Self {
        Mpi(&self.0 >> count)
    }

    /// `mul_mpi` — signed multiplication.
    pub fn mul_mpi(&self, other: &Mpi) -> Self {
        Mpi(&self.0 * &other.0)
    }

    /// `mul_int` — multiplication by a small unsigned integer.
    pub fn mul_int(&self, small: u64) -> Self {
        Mpi(&self.0 * BigInt::from(small))
    }

    /// `mod_mpi` — reduces into `[0, modulus)`.
    ///
    /// # Errors
    /// Returns [`EcpError::Generic`] if `modulus` is zero or negative.
    pub fn mod_mpi(&self, modulus: &Mpi) -> Result<Self> {
        if modulus.0.sign() != Sign::Plus {
            return Err(EcpError::Generic("modulus must be positive".into()));
        }
        Ok(Mpi(self.0.mod_floor(&modulus.0)))
    }

    /// `inv_mod` — modular multiplicative inverse via the extended
    /// Euclidean algorithm.
    ///
    /// # Errors
    /// Returns [`EcpError::Generic`] when `self` is not coprime to
    /// `modulus` (no inverse exists).
    pub fn inv_mod(&self, modulus: &Mpi) -> Result<Self> {
        if modulus.0.sign() != Sign::Plus {
            return Err(EcpError::Generic("modulus must be positive".into()));
        }
        let a = self.0.mod_floor(&modulus.0);
        let (gcd, x, _y) = a.extended_gcd(&modulus.0);
        if gcd != BigInt::from(1) {
            return Err(EcpError::Generic(
                "value is not invertible modulo the given modulus".into(),
            ));
        }
        Ok(Mpi(x.mod_floor(&modulus.0)))
    }

    /// True when the value is negative.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// True when the least-significant bit is set.
    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }
}

impl From<u64> for Mpi {
    fn from(value: u64) -> Self {
        Mpi(BigInt::from(value))
    }
}

impl fmt::Display for Mpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_string_hex_roundtrip() {
        let m = Mpi::read_string(16, "1A2B3C").unwrap();
        assert_eq!(m.to_hex_string(), "1A2B3C");
    }

    #[test]
    fn read_string_rejects_garbage() {
        assert!(Mpi::read_string(16, "not-hex!").is_err());
    }

    #[test]
    fn msb_and_get_bit_agree() {
        let m = Mpi::read_string(16, "8").unwrap(); // 0b1000
        assert_eq!(m.msb(), 4);
        assert_eq!(m.get_bit(3), 1);
        assert_eq!(m.get_bit(2), 0);
        assert_eq!(m.get_bit(4), 0);
    }

    #[test]
    fn mod_mpi_always_nonnegative() {
        let a = Mpi::lset(-7);
        let p = Mpi::lset(5);
        let r = a.mod_mpi(&p).unwrap();
        assert_eq!(r.cmp_int(3), Ordering::Equal);
    }

    #[test]
    fn inv_mod_round_trip() {
        let p = Mpi::read_string(10, "97").unwrap();
        let a = Mpi::lset(13);
        let inv = a.inv_mod(&p).unwrap();
        let product = a.mul_mpi(&inv).mod_mpi(&p).unwrap();
        assert_eq!(product.cmp_int(1), Ordering::Equal);
    }

    #[test]
    fn inv_mod_fails_when_not_coprime() {
        let p = Mpi::lset(10);
        let a = Mpi::lset(4);
        assert!(a.inv_mod(&p).is_err());
    }

    #[test]
    fn shift_l_and_shift_r_are_inverse_on_even_values() {
        let m = Mpi::lset(6);
        assert_eq!(m.shift_l(3).shift_r(3), m);
    }
}
