//! The scalar field `Fr = Z/rZ`, `r` the prime order of `G1`/`G2`'s
//! subgroup. Used for secret keys, HD-derivation tweaks, and MSM scalars —
//! distinct from the curves' base field `Fp`.

use super::curve::SUBGROUP_ORDER;
use crate::field::element::FieldElement;
use crate::field::fields::montgomery_backed_prime_field::{IsModulus, MontgomeryBackendPrimeField};
use crate::unsigned_integer::element::U256;

#[derive(Clone, Debug)]
pub struct BLS12381ScalarModulus;
impl IsModulus<U256> for BLS12381ScalarModulus {
    const MODULUS: U256 = SUBGROUP_ORDER;
}

pub type BLS12381ScalarField = MontgomeryBackendPrimeField<BLS12381ScalarModulus, 4>;
pub type FrE = FieldElement<BLS12381ScalarField>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_inverse_roundtrips() {
        let a = FrE::from(12345_u64);
        let a_inv = a.inv().unwrap();
        assert_eq!(&a * &a_inv, FrE::one());
    }

    #[test]
    fn modulus_itself_reduces_to_zero() {
        let r = FrE::from_hex_unchecked(
            "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
        );
        assert_eq!(r, FrE::zero());
    }
}
