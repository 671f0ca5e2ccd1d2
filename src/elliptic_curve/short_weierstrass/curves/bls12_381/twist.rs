use super::curve::MILLER_LOOP_CONSTANT;
use super::field_extension::{Degree2ExtensionField, Fp2E, FpE};
use crate::cyclic_group::IsGroup;
use crate::elliptic_curve::short_weierstrass::point::{ShortWeierstrassProjectivePoint, SubgroupOrder};
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::elliptic_curve::traits::IsEllipticCurve;
use crate::unsigned_integer::element::U256;

#[derive(Clone, Debug)]
pub struct BLS12381TwistCurve;

impl IsEllipticCurve for BLS12381TwistCurve {
    type BaseField = Degree2ExtensionField;
    type PointRepresentation = ShortWeierstrassProjectivePoint<Self>;

    fn generator() -> Self::PointRepresentation {
        ShortWeierstrassProjectivePoint::generator()
    }
}

impl IsShortWeierstrass for BLS12381TwistCurve {
    fn a() -> Fp2E {
        Fp2E::zero()
    }

    /// `4 * (u + 1)`.
    fn b() -> Fp2E {
        Fp2E::new([FpE::from(4), FpE::from(4)])
    }

    fn generator_affine_x() -> Fp2E {
        Fp2E::new([
            FpE::from_hex_unchecked("024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8"),
            FpE::from_hex_unchecked("13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e"),
        ])
    }

    fn generator_affine_y() -> Fp2E {
        Fp2E::new([
            FpE::from_hex_unchecked("0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801"),
            FpE::from_hex_unchecked("0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be"),
        ])
    }
}

impl SubgroupOrder for BLS12381TwistCurve {
    fn subgroup_order() -> U256 {
        super::curve::SUBGROUP_ORDER
    }
}

pub type G2Point = ShortWeierstrassProjectivePoint<BLS12381TwistCurve>;

/// The `q`-power Frobenius coefficients for the untwist-Frobenius
/// endomorphism `psi`, identical to the `gamma_12`/`gamma_13` pairing
/// coefficients since both describe the same Frobenius action on the twist.
fn psi_coeff_x() -> Fp2E {
    Fp2E::new([
        FpE::zero(),
        FpE::from_hex_unchecked("1a0111ea397fe699ec02408663d4de85aa0d857d89759ad4897d29650fb85f9b409427eb4f49fffd8bfd00000000aaac"),
    ])
}

fn psi_coeff_y() -> Fp2E {
    Fp2E::new([
        FpE::from_hex_unchecked("6af0e0437ff400b6831e36d6bd17ffe48395dabc2d3435e77f76e17009241c5ee67992f72ec05f4c81084fbede3cc09"),
        FpE::from_hex_unchecked("6af0e0437ff400b6831e36d6bd17ffe48395dabc2d3435e77f76e17009241c5ee67992f72ec05f4c81084fbede3cc09"),
    ])
}

impl G2Point {
    /// The untwist-Frobenius endomorphism: applies the `q`-power Frobenius
    /// to each coordinate, then rescales by the twist isomorphism
    /// coefficients so the result lands back on `E'`.
    pub fn psi(&self) -> Self {
        let affine = self.to_affine();
        if affine.is_neutral_element() {
            return Self::neutral_element();
        }
        let x = affine.x().conjugate() * psi_coeff_x();
        let y = affine.y().conjugate() * psi_coeff_y();
        Self::new([x, y, Fp2E::one()])
    }

    pub fn psi2(&self) -> Self {
        self.psi().psi()
    }

    /// Clears the cofactor via the Budroni-Pintore / Fuentes-Castañeda
    /// addition chain for BLS12 curves, using the untwist-Frobenius
    /// endomorphism so no large-scalar multiplication by the full cofactor
    /// is required.
    pub fn clear_cofactor(&self) -> Self {
        let c1 = MILLER_LOOP_CONSTANT;
        let t1 = self.operate_with_self(c1);
        let t2 = self.psi();
        let t3 = self.operate_with_self(2_u64).psi2();
        let t3 = t3.operate_with(&t2.neg());
        let t2 = t1.operate_with(&t2);
        let t2 = t2.operate_with_self(c1);
        let t3 = t3.operate_with(&t2);
        let t3 = t3.operate_with(&t1.neg());
        t3.operate_with(&self.neg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_in_subgroup() {
        assert!(BLS12381TwistCurve::generator().is_in_subgroup());
    }

    #[test]
    fn cofactor_cleared_generator_stays_in_subgroup() {
        assert!(BLS12381TwistCurve::generator().clear_cofactor().is_in_subgroup());
    }
}
