use super::field_extension::{BLS12381PrimeField, FpE};
use crate::cyclic_group::IsGroup;
use crate::elliptic_curve::short_weierstrass::point::{ShortWeierstrassProjectivePoint, SubgroupOrder};
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::elliptic_curve::traits::IsEllipticCurve;
use crate::unsigned_integer::element::{U256, U384};

/// `|x|` for the BLS parameter `x = -0xd201000000010000` that drives both
/// the Miller loop and G2's cofactor-clearing chain.
pub const MILLER_LOOP_CONSTANT: u64 = 0xd201000000010000;

/// The order `r` of both curves' prime-order subgroup.
pub const SUBGROUP_ORDER: U256 =
    U256::from_hex_unchecked("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001");

/// The G1 cofactor `h_eff = (x - 1)^2 / 3`.
pub const G1_H_EFF: U384 = U384::from_hex_unchecked("d201000000010001");

#[derive(Clone, Debug)]
pub struct BLS12381Curve;

impl IsEllipticCurve for BLS12381Curve {
    type BaseField = BLS12381PrimeField;
    type PointRepresentation = ShortWeierstrassProjectivePoint<Self>;

    fn generator() -> Self::PointRepresentation {
        ShortWeierstrassProjectivePoint::generator()
    }
}

impl IsShortWeierstrass for BLS12381Curve {
    fn a() -> FpE {
        FpE::zero()
    }

    fn b() -> FpE {
        FpE::from(4)
    }

    fn generator_affine_x() -> FpE {
        FpE::from_hex_unchecked("17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb")
    }

    fn generator_affine_y() -> FpE {
        FpE::from_hex_unchecked("08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1")
    }
}

impl SubgroupOrder for BLS12381Curve {
    fn subgroup_order() -> U256 {
        SUBGROUP_ORDER
    }
}

pub type G1Point = ShortWeierstrassProjectivePoint<BLS12381Curve>;

impl G1Point {
    /// Clears the cofactor by multiplying by the efficient cofactor
    /// `h_eff = (x - 1)^2 / 3`, guaranteeing the result lies in the
    /// prime-order subgroup.
    pub fn clear_cofactor(&self) -> Self {
        self.operate_with_self(G1_H_EFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_in_subgroup() {
        assert!(BLS12381Curve::generator().is_in_subgroup());
    }

    #[test]
    fn cofactor_cleared_point_is_in_subgroup() {
        let p = BLS12381Curve::generator().operate_with_self(7_u64);
        assert!(p.clear_cofactor().is_in_subgroup());
    }
}
