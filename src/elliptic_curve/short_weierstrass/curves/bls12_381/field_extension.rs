use crate::field::element::FieldElement;
use crate::field::extensions::{CubicExtensionField, HasCubicNonResidue, HasQuadraticNonResidue, QuadraticExtensionField};
use crate::field::fields::montgomery_backed_prime_field::{IsModulus, MontgomeryBackendPrimeField};
use crate::unsigned_integer::element::U384;

/// The BLS12-381 base prime `q`.
pub const BLS12381_BASE_FIELD_MODULUS: U384 = U384::from_hex_unchecked(
    "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab",
);

#[derive(Clone, Debug)]
pub struct BLS12381FieldModulus;
impl IsModulus<U384> for BLS12381FieldModulus {
    const MODULUS: U384 = BLS12381_BASE_FIELD_MODULUS;
}

/// The base prime field `Fp`.
pub type BLS12381PrimeField = MontgomeryBackendPrimeField<BLS12381FieldModulus, 6>;
pub type FpE = FieldElement<BLS12381PrimeField>;

#[derive(Clone, Debug)]
pub struct Fp2NonResidue;
impl HasQuadraticNonResidue<BLS12381PrimeField> for Fp2NonResidue {
    /// `u^2 = -1`.
    fn residue() -> FpE {
        -FpE::one()
    }
}

/// `Fp2 = Fp[u] / (u^2 + 1)`.
pub type Degree2ExtensionField = QuadraticExtensionField<BLS12381PrimeField, Fp2NonResidue>;
pub type Fp2E = FieldElement<Degree2ExtensionField>;

#[derive(Clone, Debug)]
pub struct Fp6NonResidue;
impl HasCubicNonResidue<Degree2ExtensionField> for Fp6NonResidue {
    /// `v^3 = u + 1`.
    fn residue() -> Fp2E {
        Fp2E::new([FpE::one(), FpE::one()])
    }
}

/// `Fp6 = Fp2[v] / (v^3 - (u + 1))`.
pub type Degree6ExtensionField = CubicExtensionField<Degree2ExtensionField, Fp6NonResidue>;
pub type Fp6E = FieldElement<Degree6ExtensionField>;

/// Reuses `Fp6`'s non-residue to build the `Fp4` subfield the Miller loop's
/// cyclotomic squaring decomposes `Fp12` through ("quad over cube").
#[derive(Clone, Debug)]
pub struct LevelTwoResidue;
impl HasQuadraticNonResidue<Degree2ExtensionField> for LevelTwoResidue {
    fn residue() -> Fp2E {
        Fp6NonResidue::residue()
    }
}
pub type Degree4ExtensionField = QuadraticExtensionField<Degree2ExtensionField, LevelTwoResidue>;

#[derive(Clone, Debug)]
pub struct Fp12NonResidue;
impl HasQuadraticNonResidue<Degree6ExtensionField> for Fp12NonResidue {
    /// `w^2 = v`.
    fn residue() -> Fp6E {
        Fp6E::new([FieldElement::zero(), FieldElement::one(), FieldElement::zero()])
    }
}

/// `Fp12 = Fp6[w] / (w^2 - v)`.
pub type Degree12ExtensionField = QuadraticExtensionField<Degree6ExtensionField, Fp12NonResidue>;
pub type Fp12E = FieldElement<Degree12ExtensionField>;

/// Multiplies an `Fp2` element by `Fp6`'s non-residue `(1 + u)`. Used by the
/// pairing engine's cyclotomic squaring.
pub fn mul_fp2_by_nonresidue(a: &Fp2E) -> Fp2E {
    a * &Fp6NonResidue::residue()
}

impl FieldElement<Degree2ExtensionField> {
    /// Embeds a base-field hex literal as the purely-real element `hex + 0u`.
    pub fn new_base(hex: &str) -> Self {
        Self::new([FpE::from_hex_unchecked(hex), FpE::zero()])
    }

    /// Square root in `Fp2` via the complex method (valid since `p ≡ 3 mod
    /// 4`): reduces to a base-field square root of the norm, then one more
    /// base-field square root to recover the real part.
    pub fn sqrt(&self) -> Option<Self> {
        let [a0, a1] = self.value();
        if a1 == FpE::zero() {
            return if let Some((r, _)) = a0.sqrt() {
                Some(Self::new([r, FpE::zero()]))
            } else {
                (-&a0).sqrt().map(|(r, _)| Self::new([FpE::zero(), r]))
            };
        }

        let norm = &a0 * &a0 + &a1 * &a1;
        let (norm_sqrt, _) = norm.sqrt()?;

        let two_inv = FpE::from(2).inv().ok()?;
        let mut delta = (&a0 + &norm_sqrt) * &two_inv;
        if delta.legendre_symbol() != FpE::one() {
            delta = (&a0 - &norm_sqrt) * &two_inv;
        }
        let (x0, _) = delta.sqrt()?;
        let x1 = &a1 * (x0.double()).inv().ok()?;

        let candidate = Self::new([x0, x1]);
        (&candidate * &candidate == *self).then_some(candidate)
    }
}

impl FieldElement<Degree6ExtensionField> {
    /// Embeds a base-field hex literal as the purely-real element.
    pub fn new_base(hex: &str) -> Self {
        Self::new([
            FieldElement::<Degree2ExtensionField>::new_base(hex),
            FieldElement::zero(),
            FieldElement::zero(),
        ])
    }
}

impl FieldElement<Degree12ExtensionField> {
    /// Builds an `Fp12` element from 12 base-field hex coefficients, ordered
    /// `a.c0.c0, a.c0.c1, a.c1.c0, a.c1.c1, a.c2.c0, a.c2.c1, b.c0.c0, ...`.
    pub fn from_coefficients(coefficients: &[&str; 12]) -> Self {
        let fp = |i: usize| FpE::from_hex_unchecked(coefficients[i]);
        Self::new([
            Fp6E::new([
                Fp2E::new([fp(0), fp(1)]),
                Fp2E::new([fp(2), fp(3)]),
                Fp2E::new([fp(4), fp(5)]),
            ]),
            Fp6E::new([
                Fp2E::new([fp(6), fp(7)]),
                Fp2E::new([fp(8), fp(9)]),
                Fp2E::new([fp(10), fp(11)]),
            ]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fp2_inverse_roundtrips() {
        let a = Fp2E::new([FpE::from(3), FpE::from(5)]);
        let a_inv = a.inv().unwrap();
        assert_eq!(&a * &a_inv, Fp2E::one());
    }

    #[test]
    fn fp6_inverse_roundtrips() {
        let b = Fp6E::new([
            Fp2E::new([FpE::from(3), FpE::from(1)]),
            Fp2E::new([FpE::from(5), FpE::from(2)]),
            Fp2E::new([FpE::from(7), FpE::from(4)]),
        ]);
        let b_inv = b.inv().unwrap();
        assert_eq!(&b * &b_inv, Fp6E::one());
    }

    #[test]
    fn fp12_inverse_roundtrips() {
        let a = Fp12E::from_coefficients(&[
            "1", "2", "3", "4", "5", "6", "7", "8", "9", "a", "b", "c",
        ]);
        let a_inv = a.inv().unwrap();
        assert_eq!(&a * &a_inv, Fp12E::one());
    }
}
