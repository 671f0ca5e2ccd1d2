use core::fmt::Debug;

/// A field: the set of operations a [`crate::field::element::FieldElement`]
/// delegates to its backend. Implementors carry no state of their own; they
/// are markers whose associated functions operate on `BaseType` values.
pub trait IsField: Debug + Clone {
    /// Representation the backend stores a field element in (e.g. Montgomery
    /// limbs for a prime field, or `[Self::BaseType; 2]` for an extension).
    type BaseType: Clone + Debug;

    fn add(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType;
    fn sub(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        Self::add(a, &Self::neg(b))
    }
    fn neg(a: &Self::BaseType) -> Self::BaseType;
    fn mul(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType;
    fn div(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        Self::mul(a, &Self::inv(b).expect("division by zero field element"))
    }
    fn square(a: &Self::BaseType) -> Self::BaseType {
        Self::mul(a, a)
    }
    /// Multiplicative inverse. `Err(())` only for the zero element.
    fn inv(a: &Self::BaseType) -> Result<Self::BaseType, FieldError>;
    fn eq(a: &Self::BaseType, b: &Self::BaseType) -> bool;

    fn zero() -> Self::BaseType;
    fn one() -> Self::BaseType;
    fn from_u64(x: u64) -> Self::BaseType;
    /// Lifts a backend value that is already in this field's representation.
    fn from_base_type(x: Self::BaseType) -> Self::BaseType {
        x
    }
}

/// A prime field additionally exposes a canonical (non-Montgomery)
/// representative, used for byte encoding and for the sign conventions hash-
/// to-curve and point compression rely on.
pub trait IsPrimeField: IsField {
    type RepresentativeType: Ord + Clone + Debug;

    fn representative(a: &Self::BaseType) -> Self::RepresentativeType;
    /// Number of bits of the modulus, used to size byte encodings.
    fn field_bit_size() -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    DivisionByZero,
    InvZero,
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldError::DivisionByZero => write!(f, "division by zero"),
            FieldError::InvZero => write!(f, "cannot invert the zero element"),
        }
    }
}
