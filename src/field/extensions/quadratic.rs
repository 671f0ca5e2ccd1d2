use core::fmt::Debug;
use core::marker::PhantomData;

use crate::field::element::FieldElement;
use crate::field::traits::{FieldError, IsField};

/// Supplies the non-residue `X^2 = residue` a quadratic extension is built
/// over `F` with.
pub trait HasQuadraticNonResidue<F: IsField>: Clone + Debug {
    fn residue() -> FieldElement<F>;
}

/// `F[X] / (X^2 - Q::residue())`. An element `c0 + c1 X` is stored as
/// `[c0, c1]`.
#[derive(Clone, Debug)]
pub struct QuadraticExtensionField<F, Q> {
    phantom: PhantomData<(F, Q)>,
}

impl<F, Q> IsField for QuadraticExtensionField<F, Q>
where
    F: IsField,
    Q: HasQuadraticNonResidue<F>,
{
    type BaseType = [FieldElement<F>; 2];

    fn add(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        [&a[0] + &b[0], &a[1] + &b[1]]
    }

    fn sub(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        [&a[0] - &b[0], &a[1] - &b[1]]
    }

    fn neg(a: &Self::BaseType) -> Self::BaseType {
        [-a[0].clone(), -a[1].clone()]
    }

    fn mul(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        let residue = Q::residue();
        let a0b0 = &a[0] * &b[0];
        let a1b1 = &a[1] * &b[1];
        let c0 = &a0b0 + &residue * &a1b1;
        let c1 = &a[0] * &b[1] + &a[1] * &b[0];
        [c0, c1]
    }

    fn square(a: &Self::BaseType) -> Self::BaseType {
        let residue = Q::residue();
        let c0 = a[0].square() + &residue * a[1].square();
        let c1 = (&a[0] * &a[1]).double();
        [c0, c1]
    }

    fn inv(a: &Self::BaseType) -> Result<Self::BaseType, FieldError> {
        let residue = Q::residue();
        let norm = a[0].square() - residue * a[1].square();
        let norm_inv = norm.inv()?;
        Ok([&a[0] * &norm_inv, -(&a[1] * &norm_inv)])
    }

    fn eq(a: &Self::BaseType, b: &Self::BaseType) -> bool {
        a[0] == b[0] && a[1] == b[1]
    }

    fn zero() -> Self::BaseType {
        [FieldElement::zero(), FieldElement::zero()]
    }

    fn one() -> Self::BaseType {
        [FieldElement::one(), FieldElement::zero()]
    }

    fn from_u64(x: u64) -> Self::BaseType {
        [FieldElement::from(x), FieldElement::zero()]
    }
}

impl<F, Q> FieldElement<QuadraticExtensionField<F, Q>>
where
    F: IsField,
    Q: HasQuadraticNonResidue<F>,
{
    /// The conjugate `c0 - c1 X`: raising to the Frobenius power that fixes
    /// `F` and negates the extension generator.
    pub fn conjugate(&self) -> Self {
        let [c0, c1] = self.value();
        Self::new([c0, -c1])
    }
}
