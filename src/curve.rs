// [src/curve.rs]
//! Jacobian point doubling and mixed Jacobian+affine addition, the group
//! law for short-Weierstrass curves with `a = -3`.

use tracing::instrument;

use crate::error::Result;
use crate::field::FieldCtx;
use crate::mpi::Mpi;
use crate::point::{AffinePoint, JacobianPoint};

/// `R = 2 * P` in Jacobian coordinates.
///
/// `a = -3` lets the tangent slope be computed as
/// `3 * (X - Z^2) * (X + Z^2)` instead of the general `3X^2 + a*Z^4`.
#[instrument(level = "trace", skip_all)]
pub fn double(p: &JacobianPoint, field: &FieldCtx<'_>) -> Result<JacobianPoint> {
    if p.is_zero() {
        return Ok(JacobianPoint::zero());
    }

    let t1 = field.square(&p.z)?; // Z^2
    let t2 = {
        let diff = field.sub(&p.x, &t1);
        let sum = field.add(&p.x, &t1);
        let prod = field.mul(&diff, &sum)?;
        field.mul_small(&prod, 3)
    };

    let mut y = field.mul_small(&p.y, 2); // 2Y
    let z_out = field.mul(&y, &p.z)?; // Z' = 2Y * Z
    y = field.square(&y)?; // 4Y^2
    let t3 = field.mul(&y, &p.x)?; // 4XY^2
    y = field.square(&y)?; // 16Y^4
    y = field.halve(&y); // 8Y^4

    let double_t3 = field.mul_small(&t3, 2);
    let x_out = field.sub(&field.square(&t2)?, &double_t3);

    let y_out = {
        let term = field.mul(&t2, &field.sub(&t3, &x_out))?;
        field.sub(&term, &y)
    };

    Ok(JacobianPoint::new(x_out, y_out, z_out))
}

/// `R = P_jac + Q_aff`, via mixed Jacobian+affine addition.
///
/// One operand (the fixed base point, in the scalar ladder) is kept in
/// affine form, which removes three field multiplications relative to a
/// full Jacobian+Jacobian addition.
#[instrument(level = "trace", skip_all)]
pub fn add_mixed(
    p: &JacobianPoint,
    q: &AffinePoint,
    field: &FieldCtx<'_>,
) -> Result<JacobianPoint> {
    if p.is_zero() {
        return Ok(q.to_jacobian());
    }
    if q.is_zero {
        return Ok(p.clone());
    }

    let t1_z2 = field.square(&p.z)?;
    let t2_z3 = field.mul(&t1_z2, &p.z)?;

    let u2 = field.mul(&t1_z2, &q.x)?;
    let s2 = field.mul(&t2_z3, &q.y)?;

    let h = field.sub(&u2, &p.x);
    let r = field.sub(&s2, &p.y);

    if h.is_zero() {
        return if r.is_zero() {
            double(p, field)
        } else {
            Ok(JacobianPoint::zero())
        };
    }

    let z_out = field.mul(&p.z, &h)?;
    let h2 = field.square(&h)?;
    let h3 = field.mul(&h2, &h)?;
    let v = field.mul(&h2, &p.x)?;

    let x_out = {
        let r2 = field.square(&r)?;
        let two_v = field.mul_small(&v, 2);
        field.sub(&field.sub(&r2, &two_v), &h3)
    };

    let y_out = {
        let v_minus_x = field.sub(&v, &x_out);
        let term1 = field.mul(&r, &v_minus_x)?;
        let term2 = field.mul(&p.y, &h3)?;
        field.sub(&term1, &term2)
    };

    Ok(JacobianPoint::new(x_out, y_out, z_out))
}

/// The public affine wrapper: `R = P + Q`, lifting `P` to Jacobian,
/// running the mixed add with `Q` affine, and projecting back.
pub fn add(p: &AffinePoint, q: &AffinePoint, field: &FieldCtx<'_>) -> Result<AffinePoint> {
    let sum = add_mixed(&p.to_jacobian(), q, field)?;
    sum.to_affine(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ReductionStrategy;

    // y^2 = x^3 - 3x + b over a small prime, with a known point. The
    // field is small enough to brute-force a point on the curve.
    const TOY_P: i64 = 97;
    const TOY_B: i64 = 1;

    fn field(p: &Mpi) -> FieldCtx<'_> {
        FieldCtx { p, pbits: p.msb(), strategy: ReductionStrategy::Generic }
    }

    fn is_on_curve(point: &AffinePoint, field: &FieldCtx<'_>) -> bool {
        if point.is_zero {
            return true;
        }
        let lhs = field.square(&point.y).unwrap();
        let x3 = field.mul(&field.square(&point.x).unwrap(), &point.x).unwrap();
        let three_x = field.mul_small(&point.x, 3);
        let rhs = field.add(&field.sub(&x3, &three_x), &Mpi::lset(TOY_B));
        lhs == rhs
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
    fn doubling_matches_self_addition() {
        let p = Mpi::lset(TOY_P);
        let field = field(&p);
        let g = find_generator(&p);
        assert!(is_on_curve(&g, &field));

        let doubled = double(&g.to_jacobian(), &field).unwrap().to_affine(&field).unwrap();
        let added = add(&g, &g, &field).unwrap();
        assert_eq!(doubled, added);
        assert!(is_on_curve(&doubled, &field));
    }

    #[test]
    fn identity_is_neutral() {
        let p = Mpi::lset(TOY_P);
        let field = field(&p);
        let g = find_generator(&p);
        let zero = AffinePoint::zero();
        assert_eq!(add(&g, &zero, &field).unwrap(), g);
        assert_eq!(add(&zero, &g, &field).unwrap(), g);
    }

    #[test]
    fn point_plus_its_inverse_is_zero() {
        let p = Mpi::lset(TOY_P);
        let field = field(&p);
        let g = find_generator(&p);
        let neg_g = AffinePoint { x: g.x.clone(), y: field.sub(&Mpi::zero(), &g.y), is_zero: false };
        let sum = add(&g, &neg_g, &field).unwrap();
        assert!(sum.is_zero);
    }
}
