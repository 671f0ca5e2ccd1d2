use core::fmt::Debug;

use crate::cyclic_group::IsGroup;
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::elliptic_curve::traits::{FromAffine, FromAffineError, IsEllipticCurve};
use crate::field::element::FieldElement;

/// A point on a short-Weierstrass curve `E`, stored in projective
/// coordinates `(X: Y: Z)` standing for the affine point `(X/Z, Y/Z)` when
/// `Z != 0`. The identity element has `Z = 0`.
#[derive(Debug, Clone)]
pub struct ShortWeierstrassProjectivePoint<E: IsShortWeierstrass>(pub [FieldElement<E::BaseField>; 3]);

impl<E: IsShortWeierstrass> ShortWeierstrassProjectivePoint<E> {
    /// Builds a point directly from projective coordinates.
    ///
    /// In debug builds, asserts the coordinates satisfy the curve equation;
    /// this only guards internally constructed points. Points built from
    /// untrusted bytes must go through [`FromAffine::from_affine`] or the
    /// `compression` module, neither of which panics.
    pub fn new(value: [FieldElement<E::BaseField>; 3]) -> Self {
        debug_assert!(
            Self::satisfies_equation_or_infinity(&value),
            "point does not lie on the curve"
        );
        Self(value)
    }

    fn satisfies_equation_or_infinity(value: &[FieldElement<E::BaseField>; 3]) -> bool {
        let [x, y, z] = value;
        if z.is_zero() {
            return true;
        }
        let lhs = y.square() * z;
        let rhs = x.pow(3_u16) + E::a() * x * z.square() + E::b() * z.pow(3_u16);
        lhs == rhs
    }

    pub fn x(&self) -> &FieldElement<E::BaseField> {
        &self.0[0]
    }

    pub fn y(&self) -> &FieldElement<E::BaseField> {
        &self.0[1]
    }

    pub fn z(&self) -> &FieldElement<E::BaseField> {
        &self.0[2]
    }

    pub fn coordinates(&self) -> &[FieldElement<E::BaseField>; 3] {
        &self.0
    }

    /// Returns `true` if the point satisfies the curve equation. Does not
    /// panic on malformed input, unlike [`Self::new`]'s debug assertion.
    pub fn is_on_curve(&self) -> bool {
        Self::satisfies_equation_or_infinity(&self.0)
    }

    /// Returns the same point in affine form `(x/z, y/z, 1)`, or the
    /// identity unchanged.
    pub fn to_affine(&self) -> Self {
        if self.z().is_zero() {
            return self.clone();
        }
        let z_inv = self.z().inv().expect("checked non-zero above");
        Self([self.x() * &z_inv, self.y() * &z_inv, FieldElement::one()])
    }

    /// Checks membership in the curve's prime-order subgroup by the direct
    /// (but auditable) test `r * self == 0`.
    pub fn is_in_subgroup(&self) -> bool
    where
        E: SubgroupOrder,
    {
        self.operate_with_self(E::subgroup_order()).is_neutral_element()
    }
}

/// Supplies the order `r` of a curve's prime-order subgroup, so that
/// membership can be checked by direct scalar multiplication.
pub trait SubgroupOrder: IsShortWeierstrass {
    fn subgroup_order() -> crate::unsigned_integer::element::U256;
}

impl<E: IsShortWeierstrass> PartialEq for ShortWeierstrassProjectivePoint<E> {
    fn eq(&self, other: &Self) -> bool {
        let [x1, y1, z1] = &self.0;
        let [x2, y2, z2] = &other.0;
        match (z1.is_zero(), z2.is_zero()) {
            (true, true) => true,
            (true, false) | (false, true) => false,
            (false, false) => x1 * z2 == x2 * z1 && y1 * z2 == y2 * z1,
        }
    }
}

impl<E: IsShortWeierstrass> Eq for ShortWeierstrassProjectivePoint<E> {}

impl<E: IsShortWeierstrass> IsGroup for ShortWeierstrassProjectivePoint<E> {
    fn neutral_element() -> Self {
        Self([
            FieldElement::zero(),
            FieldElement::one(),
            FieldElement::zero(),
        ])
    }

    fn is_neutral_element(&self) -> bool {
        self.z().is_zero()
    }

    /// Standard (non-unified) projective addition law for `y^2 z = x^3 + a x z^2 + b z^3`.
    fn operate_with(&self, other: &Self) -> Self {
        let [x1, y1, z1] = &self.0;
        let [x2, y2, z2] = &other.0;

        if z1.is_zero() {
            return other.clone();
        }
        if z2.is_zero() {
            return self.clone();
        }

        let u = y2 * z1 - y1 * z2;
        let v = x2 * z1 - x1 * z2;

        if v.is_zero() {
            if u.is_zero() {
                return self.double();
            }
            return Self::neutral_element();
        }

        let vv = v.square();
        let vvv = &v * &vv;
        let r = &vv * x1 * z2;
        let a = u.square() * z1 * z2 - &vvv - r.double();

        let x3 = &v * &a;
        let y3 = u * (&r - &a) - &vvv * y1 * z2;
        let z3 = vvv * z1 * z2;

        Self([x3, y3, z3])
    }

    fn neg(&self) -> Self {
        Self([self.x().clone(), -self.y(), self.z().clone()])
    }
}

impl<E: IsShortWeierstrass> ShortWeierstrassProjectivePoint<E> {
    fn double(&self) -> Self {
        let [x1, y1, z1] = &self.0;
        if y1.is_zero() || z1.is_zero() {
            return Self::neutral_element();
        }
        let three = FieldElement::from(3_u64);
        let eight = FieldElement::from(8_u64);
        let four = FieldElement::from(4_u64);

        let w = E::a() * z1.square() + &three * x1.square();
        let s = y1 * z1;
        let ss = s.square();
        let sss = &s * &ss;
        let r = y1 * &s;
        let b = x1 * &r;
        let h = w.square() - &eight * &b;

        let x3 = (&h * &s).double();
        let y3 = &w * (&four * &b - &h) - &eight * r.square();
        let z3 = &eight * &sss;

        Self([x3, y3, z3])
    }
}

impl<E: IsShortWeierstrass> FromAffine<E::BaseField> for ShortWeierstrassProjectivePoint<E> {
    fn from_affine(
        x: FieldElement<E::BaseField>,
        y: FieldElement<E::BaseField>,
    ) -> Result<Self, FromAffineError> {
        if E::defining_equation(&x, &y) != FieldElement::zero() {
            return Err(FromAffineError::InvalidPoint);
        }
        Ok(Self([x, y, FieldElement::one()]))
    }
}

impl<E: IsShortWeierstrass> ShortWeierstrassProjectivePoint<E> {
    pub fn generator() -> Self {
        Self::new([
            E::generator_affine_x(),
            E::generator_affine_y(),
            FieldElement::one(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elliptic_curve::short_weierstrass::curves::bls12_381::curve::BLS12381Curve;
    use crate::unsigned_integer::element::UnsignedInteger;

    type G1 = ShortWeierstrassProjectivePoint<BLS12381Curve>;

    #[test]
    fn generator_is_on_curve() {
        assert!(G1::generator().is_on_curve());
    }

    #[test]
    fn adding_neutral_element_is_identity() {
        let g = G1::generator();
        assert_eq!(g.operate_with(&G1::neutral_element()), g);
    }

    #[test]
    fn doubling_matches_self_addition() {
        let g = G1::generator();
        assert_eq!(g.operate_with(&g), g.double());
    }

    #[test]
    fn operate_with_self_three_matches_repeated_addition() {
        let g = G1::generator();
        let expected = g.operate_with(&g).operate_with(&g);
        assert_eq!(g.operate_with_self(UnsignedInteger::<4>::from_u64(3)), expected);
    }
}
