use crate::cyclic_group::IsGroup;
use crate::errors::PairingError;
use crate::field::element::FieldElement;
use crate::field::traits::IsField;

/// Common behaviour for elliptic curves: the field points are defined over,
/// and the concrete point representation used for the curve's group.
pub trait IsEllipticCurve {
    type BaseField: IsField;
    type PointRepresentation: IsGroup;

    /// A generator of the curve's prime-order subgroup.
    fn generator() -> Self::PointRepresentation;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FromAffineError {
    InvalidPoint,
}

/// Builds a point from affine coordinates, checking it satisfies the curve
/// equation.
pub trait FromAffine<F: IsField>: Sized {
    fn from_affine(x: FieldElement<F>, y: FieldElement<F>) -> Result<Self, FromAffineError>;
}

/// A bilinear pairing `e: G1 x G2 -> OutputField`.
pub trait IsPairing {
    type G1Point: IsGroup;
    type G2Point: IsGroup;
    type OutputField: IsField;

    /// Computes `prod_i e(pairs[i].0, pairs[i].1)`.
    fn compute_batch(
        pairs: &[(&Self::G1Point, &Self::G2Point)],
    ) -> Result<FieldElement<Self::OutputField>, PairingError>;
}
