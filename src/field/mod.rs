/// The generic [`element::FieldElement`] wrapper type.
pub mod element;
/// Concrete prime field backends.
pub mod fields;
/// Generic quadratic/cubic extension-field backends.
pub mod extensions;
/// [`traits::IsField`] and [`traits::IsPrimeField`].
pub mod traits;
