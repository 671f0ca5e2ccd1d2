use core::fmt::Debug;

/// Minimal trait satisfied by the integer types `operate_with_self` can be
/// driven by: raw machine words and [`crate::unsigned_integer::element::UnsignedInteger`].
pub trait IsUnsignedInteger:
    Copy + PartialOrd + core::ops::Shr<usize, Output = Self> + core::ops::BitAnd<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn bits_le(&self) -> alloc::vec::Vec<bool>;
}

macro_rules! impl_is_unsigned_integer_for_primitive {
    ($t: ty) => {
        impl IsUnsignedInteger for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn bits_le(&self) -> alloc::vec::Vec<bool> {
                let mut bits = alloc::vec::Vec::with_capacity(core::mem::size_of::<$t>() * 8);
                let mut v = *self;
                if v == 0 {
                    bits.push(false);
                }
                while v > 0 {
                    bits.push((v & 1) == 1);
                    v >>= 1;
                }
                bits
            }
        }
    };
}

impl_is_unsigned_integer_for_primitive!(u16);
impl_is_unsigned_integer_for_primitive!(u32);
impl_is_unsigned_integer_for_primitive!(u64);
impl_is_unsigned_integer_for_primitive!(u128);

/// An abelian group written multiplicatively as `operate_with`, used both for
/// the additive groups `G1`/`G2` and for the multiplicative group `Gt`.
pub trait IsGroup: Clone + Debug + PartialEq + Eq + Sized {
    /// The identity element.
    fn neutral_element() -> Self;

    /// Returns `true` iff `self` is the identity element.
    fn is_neutral_element(&self) -> bool {
        self == &Self::neutral_element()
    }

    /// Combines `self` with `other`.
    fn operate_with(&self, other: &Self) -> Self;

    /// The inverse of `self`.
    fn neg(&self) -> Self;

    /// Combines `self` with itself, `exponent` times, by square-and-multiply
    /// reading `exponent`'s bits from least to most significant.
    fn operate_with_self<T: IsUnsignedInteger>(&self, exponent: T) -> Self {
        let mut result = Self::neutral_element();
        let mut base = self.clone();
        for bit in exponent.bits_le() {
            if bit {
                result = result.operate_with(&base);
            }
            base = base.operate_with(&base);
        }
        result
    }
}
