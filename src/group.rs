//! Curve group lifecycle: named-curve parameter tables, group construction
//! from ASCII parameters, and the group-level `add`/`mul` entry points.

use tracing::instrument;

use crate::curve;
use crate::error::{EcpError, Result};
use crate::field::{FieldCtx, ReductionStrategy};
use crate::ladder;
use crate::mpi::Mpi;
use crate::point::AffinePoint;

/// One of the five supported NIST short-Weierstrass curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedCurve {
    /// secp192r1 / P-192.
    Secp192r1,
    /// secp224r1 / P-224.
    Secp224r1,
    /// secp256r1 / P-256.
    Secp256r1,
    /// secp384r1 / P-384.
    Secp384r1,
    /// secp521r1 / P-521.
    Secp521r1,
}

struct CurveParams {
    p: &'static str,
    b: &'static str,
    gx: &'static str,
    gy: &'static str,
    n: &'static str,
    pbits: usize,
    strategy: ReductionStrategy,
}

const P192: CurveParams = CurveParams {
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF",
    b: "64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1",
    gx: "188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012",
    gy: "07192B95FFC8DA78631011ED6B24CDD573F977A11E794811",
    n: "FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831",
    pbits: 192,
    strategy: ReductionStrategy::Generic,
};

const P224: CurveParams = CurveParams {
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001",
    b: "B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4",
    gx: "B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21",
    gy: "BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D",
    pbits: 224,
    strategy: ReductionStrategy::Generic,
};

const P256: CurveParams = CurveParams {
    p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    gx: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    gy: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    n: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
    pbits: 256,
    strategy: ReductionStrategy::Generic,
};

const P384: CurveParams = CurveParams {
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFF",
    b: "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875AC656398D8A2ED19D2A85C8EDD3EC2AEF",
    gx: "AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A385502F25DBF55296C3A545E3872760AB7",
    gy: "3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C00A60B1CE1D7E819D7A431D7C90EA0E5F",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF581A0DB248B0A77AECEC196ACCC52973",
    pbits: 384,
    strategy: ReductionStrategy::Generic,
};

const P521: CurveParams = CurveParams {
    p: "1FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
    b: "51953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF109E156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B503F00",
    gx: "C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D3DBAA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5BD66",
    gy: "11839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E662C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD16650",
    n: "1FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFA51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AEBB6FB71E91386409",
    pbits: 521,
    strategy: ReductionStrategy::P521,
};

impl CurveParams {
    fn lookup(curve: NamedCurve) -> &'static CurveParams {
        match curve {
            NamedCurve::Secp192r1 => &P192,
            NamedCurve::Secp224r1 => &P224,
            NamedCurve::Secp256r1 => &P256,
            NamedCurve::Secp384r1 => &P384,
            NamedCurve::Secp521r1 => &P521,
        }
    }
}

/// A curve group: the field prime, curve constant, generator, subgroup
/// order, bit length, and reduction strategy — read-only once
/// constructed.
#[derive(Debug, Clone)]
pub struct EcpGroup {
    /// The field prime `p`.
    pub p: Mpi,
    /// The curve constant `b` (short Weierstrass `a = -3` is implicit).
    pub b: Mpi,
    /// The generator point `G`.
    pub g: AffinePoint,
    /// The subgroup order `n`.
    pub n: Mpi,
    /// `ceil(log2(p))`.
    pub pbits: usize,
    /// The curve's modular-reduction strategy.
    pub strategy: ReductionStrategy,
}

impl EcpGroup {
    /// Populates a group from one of the named NIST curves.
    ///
    /// # Errors
    /// Never fails for the curves this engine supports; kept fallible to
    /// match the C-API shape (`use_known_dp`), where an unknown id is a
    /// [`EcpError::Generic`].
    #[instrument(level = "debug")]
    pub fn use_known_dp(curve: NamedCurve) -> Result<Self> {
        let params = CurveParams::lookup(curve);
        Self::from_params(params)
    }

    /// Populates a group from ASCII parameter strings in the given radix,
    /// matching `group_read_string` in the engine's external interface.
    ///
    /// # Errors
    /// Returns [`EcpError::Parse`] if any parameter fails to parse.
    pub fn read_string(
        radix: u32,
        p: &str,
        b: &str,
        gx: &str,
        gy: &str,
        n: &str,
    ) -> Result<Self> {
        let p = Mpi::read_string(radix, p)?;
        let b = Mpi::read_string(radix, b)?;
        let g = AffinePoint::from_strings(radix, gx, gy)?;
        let n = Mpi::read_string(radix, n)?;
        let pbits = p.msb();
        Ok(EcpGroup { p, b, g, n, pbits, strategy: ReductionStrategy::Generic })
    }

    fn from_params(params: &CurveParams) -> Result<Self> {
        let p = Mpi::read_string(16, params.p)?;
        let b = Mpi::read_string(16, params.b)?;
        let g = AffinePoint::from_strings(16, params.gx, params.gy)?;
        let n = Mpi::read_string(16, params.n)?;
        Ok(EcpGroup { p, b, g, n, pbits: params.pbits, strategy: params.strategy })
    }

    /// Builds the [`FieldCtx`] this group's arithmetic runs against.
    pub fn field(&self) -> FieldCtx<'_> {
        FieldCtx { p: &self.p, pbits: self.pbits, strategy: self.strategy }
    }

    /// `R = P + Q`, on affine points.
    ///
    /// # Errors
    /// Propagates any arithmetic failure from the field layer.
    #[instrument(level = "trace", skip(self, p, q))]
    pub fn add(&self, p: &AffinePoint, q: &AffinePoint) -> Result<AffinePoint> {
        curve::add(p, q, &self.field())
    }

    /// `R = k * P`, via the Montgomery-style double-and-add-always
    /// ladder.
    ///
    /// # Errors
    /// Propagates any arithmetic failure from the field layer.
    #[instrument(level = "trace", skip(self, p))]
    pub fn mul(&self, k: &Mpi, p: &AffinePoint) -> Result<AffinePoint> {
        ladder::scalar_mul(k, p, &self.field())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_curves_build_without_error() {
        for curve in [
            NamedCurve::Secp192r1,
            NamedCurve::Secp224r1,
            NamedCurve::Secp256r1,
            NamedCurve::Secp384r1,
            NamedCurve::Secp521r1,
        ] {
            let group = EcpGroup::use_known_dp(curve).unwrap();
            assert!(!group.g.is_zero);
            assert_eq!(group.p.msb(), group.pbits);
        }
    }

    #[test]
    fn p521_uses_the_fast_reduction_strategy() {
        let group = EcpGroup::use_known_dp(NamedCurve::Secp521r1).unwrap();
        assert_eq!(group.strategy, ReductionStrategy::P521);
        assert_eq!(group.pbits, 521);
    }

    #[test]
    fn other_curves_use_generic_reduction() {
        for curve in [
            NamedCurve::Secp192r1,
            NamedCurve::Secp224r1,
            NamedCurve::Secp256r1,
            NamedCurve::Secp384r1,
        ] {
            let group = EcpGroup::use_known_dp(curve).unwrap();
            assert_eq!(group.strategy, ReductionStrategy::Generic);
        }
    }

    #[test]
    fn generator_satisfies_curve_equation() {
        for curve in [
            NamedCurve::Secp192r1,
            NamedCurve::Secp224r1,
            NamedCurve::Secp256r1,
            NamedCurve::Secp384r1,
            NamedCurve::Secp521r1,
        ] {
            let group = EcpGroup::use_known_dp(curve).unwrap();
            let field = group.field();
            let lhs = field.square(&group.g.y).unwrap();
            let x3 = field.mul(&field.square(&group.g.x).unwrap(), &group.g.x).unwrap();
            let three_x = field.mul_small(&group.g.x, 3);
            let rhs = field.add(&field.sub(&x3, &three_x), &group.b);
            assert_eq!(lhs, rhs);
        }
    }
}
