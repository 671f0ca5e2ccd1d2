use core::fmt::Debug;
use core::marker::PhantomData;

use crate::field::element::FieldElement;
use crate::field::traits::{FieldError, IsField};

/// Supplies the non-residue `X^3 = residue` a cubic extension is built over
/// `F` with.
pub trait HasCubicNonResidue<F: IsField>: Clone + Debug {
    fn residue() -> FieldElement<F>;
}

/// `F[X] / (X^3 - Q::residue())`. An element `c0 + c1 X + c2 X^2` is stored
/// as `[c0, c1, c2]`.
#[derive(Clone, Debug)]
pub struct CubicExtensionField<F, Q> {
    phantom: PhantomData<(F, Q)>,
}

impl<F, Q> IsField for CubicExtensionField<F, Q>
where
    F: IsField,
    Q: HasCubicNonResidue<F>,
{
    type BaseType = [FieldElement<F>; 3];

    fn add(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        [&a[0] + &b[0], &a[1] + &b[1], &a[2] + &b[2]]
    }

    fn sub(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        [&a[0] - &b[0], &a[1] - &b[1], &a[2] - &b[2]]
    }

    fn neg(a: &Self::BaseType) -> Self::BaseType {
        [-a[0].clone(), -a[1].clone(), -a[2].clone()]
    }

    fn mul(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        let residue = Q::residue();
        let [a0, a1, a2] = a;
        let [b0, b1, b2] = b;
        let c0 = a0 * b0 + &residue * (a1 * b2 + a2 * b1);
        let c1 = a0 * b1 + a1 * b0 + &residue * (a2 * b2);
        let c2 = a0 * b2 + a1 * b1 + a2 * b0;
        [c0, c1, c2]
    }

    fn inv(a: &Self::BaseType) -> Result<Self::BaseType, FieldError> {
        // Beuchat et al., "High-Speed Software Implementation of the
        // Optimal Ate Pairing over Barreto-Naehrig Curves", section on
        // Fp6 inversion (here specialized to a generic cubic tower).
        let residue = Q::residue();
        let [a0, a1, a2] = a;
        let t0 = a0.square() - &residue * (a1 * a2);
        let t1 = &residue * a2.square() - a0 * a1;
        let t2 = a1.square() - a0 * a2;
        let norm = a0 * &t0 + &residue * (a2 * &t1 + a1 * &t2);
        let norm_inv = norm.inv()?;
        Ok([&t0 * &norm_inv, &t1 * &norm_inv, &t2 * &norm_inv])
    }

    fn eq(a: &Self::BaseType, b: &Self::BaseType) -> bool {
        a[0] == b[0] && a[1] == b[1] && a[2] == b[2]
    }

    fn zero() -> Self::BaseType {
        [FieldElement::zero(), FieldElement::zero(), FieldElement::zero()]
    }

    fn one() -> Self::BaseType {
        [FieldElement::one(), FieldElement::zero(), FieldElement::zero()]
    }

    fn from_u64(x: u64) -> Self::BaseType {
        [FieldElement::from(x), FieldElement::zero(), FieldElement::zero()]
    }
}
