use core::fmt::Debug;
use core::marker::PhantomData;

use crate::cyclic_group::IsUnsignedInteger;
use crate::errors::ByteConversionError;
use crate::field::element::FieldElement;
use crate::field::traits::{FieldError, IsField, IsPrimeField};
use crate::traits::ByteConversion;
use crate::unsigned_integer::element::UnsignedInteger;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Binds a `MontgomeryBackendPrimeField` backend to a concrete modulus. One
/// zero-sized type implements this per prime field in use (the base field
/// and the scalar field of BLS12-381).
pub trait IsModulus<U>: Debug {
    const MODULUS: U;
}

/// A prime field `Z/pZ` whose elements are stored in Montgomery form:
/// an element `a` is represented as `a * R mod p`, with `R = 2^(64 * NUM_LIMBS)`.
/// This avoids an expensive reduction after every multiplication.
#[derive(Clone, Debug)]
pub struct MontgomeryBackendPrimeField<M, const NUM_LIMBS: usize> {
    phantom: PhantomData<M>,
}

impl<M, const NUM_LIMBS: usize> MontgomeryBackendPrimeField<M, NUM_LIMBS>
where
    M: IsModulus<UnsignedInteger<NUM_LIMBS>> + Clone + Debug,
{
    pub const MODULUS: UnsignedInteger<NUM_LIMBS> = M::MODULUS;

    /// `-MODULUS[last_limb]^{-1} mod 2^64`, via the standard doubling
    /// Newton-Raphson iteration for inverses mod a power of two.
    const fn compute_mu() -> u64 {
        let n0 = Self::MODULUS.limbs[NUM_LIMBS - 1];
        let mut inv: u64 = 1;
        let mut i = 0;
        while i < 6 {
            inv = inv.wrapping_mul(2u64.wrapping_sub(n0.wrapping_mul(inv)));
            i += 1;
        }
        inv.wrapping_neg()
    }
    pub const MU: u64 = Self::compute_mu();

    const fn const_geq(a: &[u64; NUM_LIMBS], b: &[u64; NUM_LIMBS]) -> bool {
        let mut i = 0;
        while i < NUM_LIMBS {
            if a[i] > b[i] {
                return true;
            }
            if a[i] < b[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    const fn const_sub(a: &[u64; NUM_LIMBS], b: &[u64; NUM_LIMBS]) -> [u64; NUM_LIMBS] {
        let mut result = [0u64; NUM_LIMBS];
        let mut borrow: i128 = 0;
        let mut i = NUM_LIMBS;
        while i > 0 {
            i -= 1;
            let diff = a[i] as i128 - b[i] as i128 - borrow;
            if diff < 0 {
                result[i] = (diff + (1i128 << 64)) as u64;
                borrow = 1;
            } else {
                result[i] = diff as u64;
                borrow = 0;
            }
        }
        result
    }

    const fn double_mod(value: [u64; NUM_LIMBS], modulus: &[u64; NUM_LIMBS]) -> [u64; NUM_LIMBS] {
        let mut doubled = [0u64; NUM_LIMBS];
        let mut carry: u64 = 0;
        let mut i = NUM_LIMBS;
        while i > 0 {
            i -= 1;
            let v = value[i];
            doubled[i] = (v << 1) | carry;
            carry = v >> 63;
        }
        if carry != 0 || Self::const_geq(&doubled, modulus) {
            Self::const_sub(&doubled, modulus)
        } else {
            doubled
        }
    }

    /// `R mod p`, i.e. the Montgomery encoding of `1`. Computed at compile
    /// time by doubling `1` `64 * NUM_LIMBS` times.
    const fn compute_r_mod_p() -> UnsignedInteger<NUM_LIMBS> {
        let modulus_limbs = Self::MODULUS.limbs;
        let mut value = [0u64; NUM_LIMBS];
        value[NUM_LIMBS - 1] = 1;
        let mut i = 0;
        while i < NUM_LIMBS * 64 {
            value = Self::double_mod(value, &modulus_limbs);
            i += 1;
        }
        UnsignedInteger::from_limbs(value)
    }
    pub const R1: UnsignedInteger<NUM_LIMBS> = Self::compute_r_mod_p();

    /// `R^2 mod p`, used to lift raw integers into Montgomery form.
    const fn compute_r2() -> UnsignedInteger<NUM_LIMBS> {
        let modulus_limbs = Self::MODULUS.limbs;
        let mut value = [0u64; NUM_LIMBS];
        value[NUM_LIMBS - 1] = 1;
        let mut i = 0;
        while i < NUM_LIMBS * 64 * 2 {
            value = Self::double_mod(value, &modulus_limbs);
            i += 1;
        }
        UnsignedInteger::from_limbs(value)
    }
    pub const R2: UnsignedInteger<NUM_LIMBS> = Self::compute_r2();

    /// Montgomery reduction: given a double-width product `hi:lo`, returns
    /// `hi:lo / R mod p`. `hi` and `lo` are each `NUM_LIMBS` limbs.
    fn montgomery_reduce(
        hi: &UnsignedInteger<NUM_LIMBS>,
        lo: &UnsignedInteger<NUM_LIMBS>,
    ) -> UnsignedInteger<NUM_LIMBS> {
        let total = 2 * NUM_LIMBS + 1;
        let mut buffer: Vec<u64> = alloc::vec![0u64; total];
        buffer[1..1 + NUM_LIMBS].copy_from_slice(&hi.limbs);
        buffer[1 + NUM_LIMBS..1 + 2 * NUM_LIMBS].copy_from_slice(&lo.limbs);
        let modulus = Self::MODULUS.limbs;

        for k in 0..NUM_LIMBS {
            let word_k_idx = total - 1 - k;
            let word_k = buffer[word_k_idx];
            let u = word_k.wrapping_mul(Self::MU);
            let mut carry: u128 = 0;
            for j in 0..NUM_LIMBS {
                let modulus_limb = modulus[NUM_LIMBS - 1 - j];
                let idx = total - 1 - (k + j);
                let prod = u as u128 * modulus_limb as u128 + buffer[idx] as u128 + carry;
                buffer[idx] = prod as u64;
                carry = prod >> 64;
            }
            let mut pos = k + NUM_LIMBS;
            while carry != 0 && pos < total {
                let idx = total - 1 - pos;
                let sum = buffer[idx] as u128 + carry;
                buffer[idx] = sum as u64;
                carry = sum >> 64;
                pos += 1;
            }
        }

        let mut result_limbs = [0u64; NUM_LIMBS];
        result_limbs.copy_from_slice(&buffer[1..1 + NUM_LIMBS]);
        let mut candidate = UnsignedInteger::from_limbs(result_limbs);
        let overflow = buffer[0] != 0;
        if overflow || candidate >= Self::MODULUS {
            candidate = candidate.sub(&Self::MODULUS).0;
        }
        if candidate >= Self::MODULUS {
            candidate = candidate.sub(&Self::MODULUS).0;
        }
        candidate
    }

    fn montgomery_mul(
        a: &UnsignedInteger<NUM_LIMBS>,
        b: &UnsignedInteger<NUM_LIMBS>,
    ) -> UnsignedInteger<NUM_LIMBS> {
        let (hi, lo) = a.mul(b);
        Self::montgomery_reduce(&hi, &lo)
    }

    fn to_montgomery(raw: &UnsignedInteger<NUM_LIMBS>) -> UnsignedInteger<NUM_LIMBS> {
        Self::montgomery_mul(raw, &Self::R2)
    }

    /// Reverses `to_montgomery`: recovers the canonical (non-Montgomery)
    /// representative of a stored value.
    fn from_montgomery(a: &UnsignedInteger<NUM_LIMBS>) -> UnsignedInteger<NUM_LIMBS> {
        Self::montgomery_reduce(&UnsignedInteger::zero(), a)
    }
}

impl<M, const NUM_LIMBS: usize> IsField for MontgomeryBackendPrimeField<M, NUM_LIMBS>
where
    M: IsModulus<UnsignedInteger<NUM_LIMBS>> + Clone + Debug,
{
    type BaseType = UnsignedInteger<NUM_LIMBS>;

    fn add(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        let (sum, carry) = a.add(b);
        if carry || sum >= Self::MODULUS {
            sum.sub(&Self::MODULUS).0
        } else {
            sum
        }
    }

    fn sub(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        let (diff, borrow) = a.sub(b);
        if borrow {
            diff.add(&Self::MODULUS).0
        } else {
            diff
        }
    }

    fn neg(a: &Self::BaseType) -> Self::BaseType {
        if a.is_zero() {
            Self::BaseType::zero()
        } else {
            Self::MODULUS.sub(a).0
        }
    }

    fn mul(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        Self::montgomery_mul(a, b)
    }

    fn inv(a: &Self::BaseType) -> Result<Self::BaseType, FieldError> {
        if a.is_zero() {
            return Err(FieldError::InvZero);
        }
        let exponent = Self::MODULUS.sub(&UnsignedInteger::from_u64(2)).0;
        let mut result = Self::R1;
        let mut base = *a;
        for bit in exponent.bits_le() {
            if bit {
                result = Self::montgomery_mul(&result, &base);
            }
            base = Self::montgomery_mul(&base, &base);
        }
        Ok(result)
    }

    fn eq(a: &Self::BaseType, b: &Self::BaseType) -> bool {
        a == b
    }

    fn zero() -> Self::BaseType {
        UnsignedInteger::zero()
    }

    fn one() -> Self::BaseType {
        Self::R1
    }

    fn from_u64(x: u64) -> Self::BaseType {
        Self::to_montgomery(&UnsignedInteger::from_u64(x))
    }
}

impl<M, const NUM_LIMBS: usize> IsPrimeField for MontgomeryBackendPrimeField<M, NUM_LIMBS>
where
    M: IsModulus<UnsignedInteger<NUM_LIMBS>> + Clone + Debug,
{
    type RepresentativeType = UnsignedInteger<NUM_LIMBS>;

    fn representative(a: &Self::BaseType) -> Self::RepresentativeType {
        Self::from_montgomery(a)
    }

    fn field_bit_size() -> usize {
        let mut i = NUM_LIMBS;
        let limbs = Self::MODULUS.limbs;
        while i > 0 && limbs[NUM_LIMBS - i] == 0 {
            i -= 1;
        }
        if i == 0 {
            return 0;
        }
        let top_limb = limbs[NUM_LIMBS - i];
        (i - 1) * 64 + (64 - top_limb.leading_zeros() as usize)
    }
}

impl<M, const NUM_LIMBS: usize> FieldElement<MontgomeryBackendPrimeField<M, NUM_LIMBS>>
where
    M: IsModulus<UnsignedInteger<NUM_LIMBS>> + Clone + Debug,
{
    /// Parses a hex string (optionally `0x`-prefixed) into a field element,
    /// panicking on malformed input or a value `>= p`. Not usable in `const`
    /// contexts: converting into Montgomery form runs a heap-allocating
    /// reduction, which stable Rust does not allow inside `const fn`.
    pub fn from_hex_unchecked(hex_str: &str) -> Self {
        let raw = UnsignedInteger::from_hex_unchecked(hex_str);
        Self::new(MontgomeryBackendPrimeField::<M, NUM_LIMBS>::to_montgomery(&raw))
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, ByteConversionError> {
        let raw = UnsignedInteger::from_hex_unchecked(hex_str);
        if raw >= MontgomeryBackendPrimeField::<M, NUM_LIMBS>::MODULUS {
            return Err(ByteConversionError::InvalidValue);
        }
        Ok(Self::new(MontgomeryBackendPrimeField::<M, NUM_LIMBS>::to_montgomery(&raw)))
    }

    pub fn representative(&self) -> UnsignedInteger<NUM_LIMBS> {
        <MontgomeryBackendPrimeField<M, NUM_LIMBS> as IsPrimeField>::representative(&self.value)
    }

    pub fn is_odd(&self) -> bool {
        self.representative().is_odd()
    }

    /// `a^((p - 1) / 2)`: `0`, `1` or `p - 1`, distinguishing a quadratic
    /// non-residue (`p - 1`) from a residue (`1`).
    pub fn legendre_symbol(&self) -> Self {
        let exponent = MontgomeryBackendPrimeField::<M, NUM_LIMBS>::MODULUS
            .sub(&UnsignedInteger::from_u64(1))
            .0
            .const_shr(1);
        self.pow(exponent)
    }

    /// Square root for a base field whose modulus is `3 mod 4` (true for the
    /// BLS12-381 base field `q`): `sqrt(a) = a^((p + 1) / 4)` when `a` is a
    /// residue. Returns both roots, or `None` if `a` has no square root.
    pub fn sqrt(&self) -> Option<(Self, Self)> {
        if self.is_zero() {
            return Some((Self::zero(), Self::zero()));
        }
        let exponent = MontgomeryBackendPrimeField::<M, NUM_LIMBS>::MODULUS
            .add(&UnsignedInteger::from_u64(1))
            .0
            .const_shr(2);
        let candidate = self.pow(exponent);
        if &candidate * &candidate == *self {
            let other = -candidate.clone();
            Some((candidate, other))
        } else {
            None
        }
    }
}

impl<M, const NUM_LIMBS: usize> ByteConversion
    for FieldElement<MontgomeryBackendPrimeField<M, NUM_LIMBS>>
where
    M: IsModulus<UnsignedInteger<NUM_LIMBS>> + Clone + Debug,
{
    #[cfg(feature = "alloc")]
    fn to_bytes_be(&self) -> Vec<u8> {
        let representative = self.representative();
        let mut bytes = Vec::with_capacity(NUM_LIMBS * 8);
        for limb in representative.limbs.iter() {
            bytes.extend_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    #[cfg(feature = "alloc")]
    fn to_bytes_le(&self) -> Vec<u8> {
        let mut bytes = self.to_bytes_be();
        bytes.reverse();
        bytes
    }

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        if bytes.len() != NUM_LIMBS * 8 {
            return Err(ByteConversionError::FromBEBytesError);
        }
        let mut limbs = [0u64; NUM_LIMBS];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            limbs[i] = u64::from_be_bytes(chunk.try_into().unwrap());
        }
        let raw = UnsignedInteger::from_limbs(limbs);
        if raw >= MontgomeryBackendPrimeField::<M, NUM_LIMBS>::MODULUS {
            return Err(ByteConversionError::InvalidValue);
        }
        Ok(Self::new(MontgomeryBackendPrimeField::<M, NUM_LIMBS>::to_montgomery(&raw)))
    }

    fn from_bytes_le(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        let mut be = bytes.to_vec();
        be.reverse();
        Self::from_bytes_be(&be)
    }
}
