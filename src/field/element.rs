use core::fmt;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::cyclic_group::IsUnsignedInteger;
use crate::field::traits::{FieldError, IsField};

/// An element of the field `F`. A thin, `Copy`-free wrapper around the
/// backend's `BaseType` that provides the usual arithmetic operators.
#[derive(Clone)]
pub struct FieldElement<F: IsField> {
    pub(crate) value: F::BaseType,
    phantom: PhantomData<F>,
}

impl<F: IsField> FieldElement<F> {
    pub fn new(value: F::BaseType) -> Self {
        Self {
            value,
            phantom: PhantomData,
        }
    }

    /// Builds a value directly from an already-encoded backend
    /// representation, skipping any normalization. Used for compile-time
    /// curve/tower constants where the hex literal is already known to be
    /// a valid backend encoding.
    pub const fn const_from_raw(value: F::BaseType) -> Self {
        Self {
            value,
            phantom: PhantomData,
        }
    }

    pub fn value(&self) -> F::BaseType {
        self.value.clone()
    }

    pub fn zero() -> Self {
        Self::new(F::zero())
    }

    pub fn one() -> Self {
        Self::new(F::one())
    }

    pub fn double(&self) -> Self {
        Self::new(F::add(&self.value, &self.value))
    }

    pub fn square(&self) -> Self {
        Self::new(F::square(&self.value))
    }

    pub fn inv(&self) -> Result<Self, FieldError> {
        Ok(Self::new(F::inv(&self.value)?))
    }

    pub fn is_zero(&self) -> bool {
        F::eq(&self.value, &F::zero())
    }

    /// Exponentiation by square-and-multiply, reading `exponent`'s bits from
    /// least to most significant.
    pub fn pow<T: IsUnsignedInteger>(&self, exponent: T) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        for bit in exponent.bits_le() {
            if bit {
                result = &result * &base;
            }
            base = &base * &base;
        }
        result
    }
}

impl<F: IsField> PartialEq for FieldElement<F> {
    fn eq(&self, other: &Self) -> bool {
        F::eq(&self.value, &other.value)
    }
}

impl<F: IsField> Eq for FieldElement<F> {}

impl<F: IsField> fmt::Debug for FieldElement<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldElement").field(&self.value).finish()
    }
}

impl<F: IsField> From<u64> for FieldElement<F> {
    fn from(value: u64) -> Self {
        Self::new(F::from_u64(value))
    }
}

impl<F: IsField> Add for &FieldElement<F> {
    type Output = FieldElement<F>;
    fn add(self, rhs: Self) -> Self::Output {
        FieldElement::new(F::add(&self.value, &rhs.value))
    }
}
impl<F: IsField> Add for FieldElement<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}
impl<F: IsField> Add<&FieldElement<F>> for FieldElement<F> {
    type Output = Self;
    fn add(self, rhs: &FieldElement<F>) -> Self::Output {
        &self + rhs
    }
}
impl<F: IsField> Add<FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;
    fn add(self, rhs: FieldElement<F>) -> Self::Output {
        self + &rhs
    }
}

impl<F: IsField> Sub for &FieldElement<F> {
    type Output = FieldElement<F>;
    fn sub(self, rhs: Self) -> Self::Output {
        FieldElement::new(F::sub(&self.value, &rhs.value))
    }
}
impl<F: IsField> Sub for FieldElement<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}
impl<F: IsField> Sub<&FieldElement<F>> for FieldElement<F> {
    type Output = Self;
    fn sub(self, rhs: &FieldElement<F>) -> Self::Output {
        &self - rhs
    }
}
impl<F: IsField> Sub<FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;
    fn sub(self, rhs: FieldElement<F>) -> Self::Output {
        self - &rhs
    }
}

impl<F: IsField> Mul for &FieldElement<F> {
    type Output = FieldElement<F>;
    fn mul(self, rhs: Self) -> Self::Output {
        FieldElement::new(F::mul(&self.value, &rhs.value))
    }
}
impl<F: IsField> Mul for FieldElement<F> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}
impl<F: IsField> Mul<&FieldElement<F>> for FieldElement<F> {
    type Output = Self;
    fn mul(self, rhs: &FieldElement<F>) -> Self::Output {
        &self * rhs
    }
}
impl<F: IsField> Mul<FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;
    fn mul(self, rhs: FieldElement<F>) -> Self::Output {
        self * &rhs
    }
}

impl<F: IsField> Div for &FieldElement<F> {
    type Output = FieldElement<F>;
    fn div(self, rhs: Self) -> Self::Output {
        FieldElement::new(F::div(&self.value, &rhs.value))
    }
}
impl<F: IsField> Div for FieldElement<F> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl<F: IsField> Neg for &FieldElement<F> {
    type Output = FieldElement<F>;
    fn neg(self) -> Self::Output {
        FieldElement::new(F::neg(&self.value))
    }
}
impl<F: IsField> Neg for FieldElement<F> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<F: IsField> AddAssign<&FieldElement<F>> for FieldElement<F> {
    fn add_assign(&mut self, rhs: &FieldElement<F>) {
        self.value = F::add(&self.value, &rhs.value);
    }
}
impl<F: IsField> AddAssign for FieldElement<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}
impl<F: IsField> SubAssign<&FieldElement<F>> for FieldElement<F> {
    fn sub_assign(&mut self, rhs: &FieldElement<F>) {
        self.value = F::sub(&self.value, &rhs.value);
    }
}
impl<F: IsField> SubAssign for FieldElement<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}
impl<F: IsField> MulAssign<&FieldElement<F>> for FieldElement<F> {
    fn mul_assign(&mut self, rhs: &FieldElement<F>) {
        self.value = F::mul(&self.value, &rhs.value);
    }
}
impl<F: IsField> MulAssign for FieldElement<F> {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

impl<F: IsField> Sum for FieldElement<F> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}
