// [src/ladder.rs]
//! Scalar multiplication via a Montgomery-style double-and-add-always
//! ladder.

use tracing::instrument;

use crate::curve;
use crate::error::Result;
use crate::field::FieldCtx;
use crate::mpi::Mpi;
use crate::point::{AffinePoint, JacobianPoint};

/// `R = k * P`.
///
/// Both the doubling and the addition run on every bit of `k`,
/// independent of the bit's value; only the final select is
/// data-dependent. This gives SPA-pattern resistance at the
/// point-operation granularity. The underlying MPI layer is not itself
/// constant-time, so this is not full constant-time secrecy at the
/// integer-operation granularity.
#[instrument(level = "debug", skip(p, field))]
pub fn scalar_mul(k: &Mpi, p: &AffinePoint, field: &FieldCtx<'_>) -> Result<AffinePoint> {
    if k.is_zero() {
        return Ok(AffinePoint::zero());
    }

    let bits = k.msb();
    let mut acc = JacobianPoint::zero();

    for pos in (0..bits).rev() {
        let doubled = curve::double(&acc, field)?;
        let added = curve::add_mixed(&doubled, p, field)?;
        acc = select(k.get_bit(pos), added, doubled);
    }

    acc.to_affine(field)
}

/// Picks between the two ladder branches by value (a conditional copy of
/// the whole point, never a pointer swap), so the branch taken is the
/// only thing that varies with the secret bit.
fn select(bit: u8, on_one: JacobianPoint, on_zero: JacobianPoint) -> JacobianPoint {
    if bit == 1 {
        on_one
    } else {
        on_zero
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ReductionStrategy;

    const TOY_P: i64 = 97;
    const TOY_B: i64 = 1;

    fn field(p: &Mpi) -> FieldCtx<'_> {
        FieldCtx { p, pbits: p.msb(), strategy: ReductionStrategy::Generic }
    }

    fn find_generator(p: &Mpi) -> AffinePoint {
        let field = field(p);
        for x_val in 2..TOY_P {
            let x = Mpi::lset(x_val);
            let x3 = field.mul(&field.square(&x).unwrap(), &x).unwrap();
            let three_x = field.mul_small(&x, 3);
            let rhs = field.add(&field.sub(&x3, &three_x), &Mpi::lset(TOY_B));
            for y_val in 0..TOY_P {
                let y = Mpi::lset(y_val);
                if field.square(&y).unwrap() == rhs {
                    return AffinePoint { x, y, is_zero: false };
                }
            }
        }
        panic!("no point found on toy curve");
    }

    #[test]
    fn zero_scalar_yields_infinity() {
        let p = Mpi::lset(TOY_P);
        let field = field(&p);
        let g = find_generator(&p);
        let r = scalar_mul(&Mpi::zero(), &g, &field).unwrap();
        assert!(r.is_zero);
    }

    #[test]
    fn one_scalar_yields_the_same_point() {
        let p = Mpi::lset(TOY_P);
        let field = field(&p);
        let g = find_generator(&p);
        let r = scalar_mul(&Mpi::lset(1), &g, &field).unwrap();
        assert_eq!(r, g);
    }

    #[test]
    fn two_scalar_matches_doubling() {
        let p = Mpi::lset(TOY_P);
        let field = field(&p);
        let g = find_generator(&p);
        let via_ladder = scalar_mul(&Mpi::lset(2), &g, &field).unwrap();
        let via_add = curve::add(&g, &g, &field).unwrap();
        assert_eq!(via_ladder, via_add);
    }

    #[test]
    fn scalar_mul_is_additive_via_repeated_addition() {
        let p = Mpi::lset(TOY_P);
        let field = field(&p);
        let g = find_generator(&p);

        let mut expected = AffinePoint::zero();
        for _ in 0..5 {
            expected = curve::add(&expected, &g, &field).unwrap();
        }
        let via_ladder = scalar_mul(&Mpi::lset(5), &g, &field).unwrap();
        assert_eq!(via_ladder, expected);
    }
}
