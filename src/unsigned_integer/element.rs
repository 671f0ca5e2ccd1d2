use core::fmt;
use core::ops::{Shl, Shr};

/// A big, fixed-width unsigned integer stored as `NUM_LIMBS` 64-bit limbs,
/// most significant limb first. Used as the canonical representative of
/// prime field elements and as the scalar type for group exponentiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnsignedInteger<const NUM_LIMBS: usize> {
    pub limbs: [u64; NUM_LIMBS],
}

/// 256-bit unsigned integer, used for the BLS12-381 scalar field (order `r`).
pub type U256 = UnsignedInteger<4>;
/// 384-bit unsigned integer, used for the BLS12-381 base field (order `q`).
pub type U384 = UnsignedInteger<6>;

impl<const NUM_LIMBS: usize> UnsignedInteger<NUM_LIMBS> {
    pub const fn from_limbs(limbs: [u64; NUM_LIMBS]) -> Self {
        Self { limbs }
    }

    pub const fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; NUM_LIMBS];
        if NUM_LIMBS > 0 {
            limbs[NUM_LIMBS - 1] = value;
        }
        Self { limbs }
    }

    pub const fn zero() -> Self {
        Self {
            limbs: [0u64; NUM_LIMBS],
        }
    }

    pub const fn one() -> Self {
        Self::from_u64(1)
    }

    /// Parses a hex string (optionally `0x`-prefixed) into a value, panicking
    /// on malformed input or overflow. Usable in `const` contexts, which is
    /// how the curve/field constants in this crate are all declared.
    pub const fn from_hex_unchecked(hex_str: &str) -> Self {
        let hex_bytes = hex_str.as_bytes();
        let mut start = 0;
        if hex_bytes.len() >= 2 && hex_bytes[0] == b'0' && (hex_bytes[1] == b'x' || hex_bytes[1] == b'X') {
            start = 2;
        }
        let mut limbs = [0u64; NUM_LIMBS];
        let mut digit_index = hex_bytes.len();
        let mut limb_index = NUM_LIMBS;
        while digit_index > start {
            if limb_index == 0 {
                panic!("hex literal does not fit in the target UnsignedInteger width");
            }
            limb_index -= 1;
            let chunk_start = if digit_index >= start + 16 {
                digit_index - 16
            } else {
                start
            };
            let mut limb_value: u64 = 0;
            let mut i = chunk_start;
            while i < digit_index {
                limb_value = (limb_value << 4) | hex_digit_value(hex_bytes[i]) as u64;
                i += 1;
            }
            limbs[limb_index] = limb_value;
            digit_index = chunk_start;
        }
        Self { limbs }
    }

    pub const fn const_ne(a: &Self, b: &Self) -> bool {
        let mut i = 0;
        while i < NUM_LIMBS {
            if a.limbs[i] != b.limbs[i] {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Addition with carry-out. Branch-free over limb data.
    pub fn add(&self, other: &Self) -> (Self, bool) {
        let mut limbs = [0u64; NUM_LIMBS];
        let mut carry: u128 = 0;
        for i in (0..NUM_LIMBS).rev() {
            let sum = self.limbs[i] as u128 + other.limbs[i] as u128 + carry;
            limbs[i] = sum as u64;
            carry = sum >> 64;
        }
        (Self { limbs }, carry != 0)
    }

    /// Subtraction with borrow-out (two's complement wraparound on borrow).
    pub fn sub(&self, other: &Self) -> (Self, bool) {
        let mut limbs = [0u64; NUM_LIMBS];
        let mut borrow: i128 = 0;
        for i in (0..NUM_LIMBS).rev() {
            let diff = self.limbs[i] as i128 - other.limbs[i] as i128 - borrow;
            if diff < 0 {
                limbs[i] = (diff + (1i128 << 64)) as u64;
                borrow = 1;
            } else {
                limbs[i] = diff as u64;
                borrow = 0;
            }
        }
        (Self { limbs }, borrow != 0)
    }

    /// Schoolbook multiplication producing a double-width result split as
    /// `(high, low)`, each `NUM_LIMBS` limbs wide.
    pub fn mul(&self, other: &Self) -> (Self, Self) {
        let mut wide = alloc::vec![0u64; 2 * NUM_LIMBS];
        for (i, &a_limb) in self.limbs.iter().rev().enumerate() {
            let mut carry: u128 = 0;
            for (j, &b_limb) in other.limbs.iter().rev().enumerate() {
                let idx = wide.len() - 1 - (i + j);
                let product = a_limb as u128 * b_limb as u128 + wide[idx] as u128 + carry;
                wide[idx] = product as u64;
                carry = product >> 64;
            }
            let mut k = i + other.limbs.len();
            while carry != 0 {
                let idx = wide.len() - 1 - k;
                let sum = wide[idx] as u128 + carry;
                wide[idx] = sum as u64;
                carry = sum >> 64;
                k += 1;
            }
        }
        let mut hi = [0u64; NUM_LIMBS];
        let mut lo = [0u64; NUM_LIMBS];
        hi.copy_from_slice(&wide[0..NUM_LIMBS]);
        lo.copy_from_slice(&wide[NUM_LIMBS..2 * NUM_LIMBS]);
        (Self { limbs: hi }, Self { limbs: lo })
    }

    pub fn const_shr(&self, places: usize) -> Self {
        let mut limbs = self.limbs;
        let limb_shift = places / 64;
        let bit_shift = places % 64;
        if limb_shift >= NUM_LIMBS {
            return Self::zero();
        }
        let mut shifted = [0u64; NUM_LIMBS];
        for i in 0..NUM_LIMBS {
            if i + limb_shift < NUM_LIMBS {
                shifted[i] = limbs[i + limb_shift];
            }
        }
        limbs = shifted;
        if bit_shift > 0 {
            let mut carry = 0u64;
            for limb in limbs.iter_mut() {
                let new_carry = *limb << (64 - bit_shift);
                *limb = (*limb >> bit_shift) | carry;
                carry = new_carry;
            }
        }
        Self { limbs }
    }

    pub fn const_shl(&self, places: usize) -> Self {
        let limb_shift = places / 64;
        let bit_shift = places % 64;
        if limb_shift >= NUM_LIMBS {
            return Self::zero();
        }
        let mut shifted = [0u64; NUM_LIMBS];
        for i in 0..NUM_LIMBS {
            if i >= limb_shift {
                shifted[i - limb_shift] = self.limbs[i];
            }
        }
        let mut limbs = shifted;
        if bit_shift > 0 {
            let mut carry = 0u64;
            for limb in limbs.iter_mut().rev() {
                let new_carry = *limb >> (64 - bit_shift);
                *limb = (*limb << bit_shift) | carry;
                carry = new_carry;
            }
        }
        Self { limbs }
    }

    /// Returns the bit at position `i` (0 = least significant).
    pub fn bit(&self, i: usize) -> bool {
        let limb_index = NUM_LIMBS - 1 - i / 64;
        (self.limbs[limb_index] >> (i % 64)) & 1 == 1
    }

    pub const fn limbs(&self) -> &[u64; NUM_LIMBS] {
        &self.limbs
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    pub fn is_odd(&self) -> bool {
        self.limbs[NUM_LIMBS - 1] & 1 == 1
    }
}

const fn hex_digit_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

impl<const NUM_LIMBS: usize> PartialOrd for UnsignedInteger<NUM_LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<const NUM_LIMBS: usize> Ord for UnsignedInteger<NUM_LIMBS> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        for i in 0..NUM_LIMBS {
            match self.limbs[i].cmp(&other.limbs[i]) {
                core::cmp::Ordering::Equal => continue,
                ord => return ord,
            }
        }
        core::cmp::Ordering::Equal
    }
}

impl<const NUM_LIMBS: usize> fmt::Display for UnsignedInteger<NUM_LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for limb in self.limbs.iter() {
            write!(f, "{:016x}", limb)?;
        }
        Ok(())
    }
}

impl<const NUM_LIMBS: usize> From<u64> for UnsignedInteger<NUM_LIMBS> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<const NUM_LIMBS: usize> From<&str> for UnsignedInteger<NUM_LIMBS> {
    fn from(hex_str: &str) -> Self {
        Self::from_hex_unchecked(hex_str)
    }
}

impl<const NUM_LIMBS: usize> Shr<usize> for UnsignedInteger<NUM_LIMBS> {
    type Output = Self;
    fn shr(self, rhs: usize) -> Self::Output {
        self.const_shr(rhs)
    }
}

impl<const NUM_LIMBS: usize> Shl<usize> for UnsignedInteger<NUM_LIMBS> {
    type Output = Self;
    fn shl(self, rhs: usize) -> Self::Output {
        self.const_shl(rhs)
    }
}

impl<const NUM_LIMBS: usize> core::ops::BitAnd for UnsignedInteger<NUM_LIMBS> {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        let mut limbs = [0u64; NUM_LIMBS];
        for i in 0..NUM_LIMBS {
            limbs[i] = self.limbs[i] & rhs.limbs[i];
        }
        Self { limbs }
    }
}

impl<const NUM_LIMBS: usize> crate::cyclic_group::IsUnsignedInteger for UnsignedInteger<NUM_LIMBS> {
    const ZERO: Self = Self::zero();
    const ONE: Self = Self::one();

    fn bits_le(&self) -> alloc::vec::Vec<bool> {
        let total_bits = NUM_LIMBS * 64;
        let mut bits: alloc::vec::Vec<bool> = (0..total_bits).map(|i| self.bit(i)).collect();
        while bits.len() > 1 && !bits[bits.len() - 1] {
            bits.pop();
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_with_carry() {
        let max = U256::from_hex_unchecked(
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        );
        let (sum, carry) = max.add(&U256::from_u64(1));
        assert!(carry);
        assert_eq!(sum, U256::zero());
    }

    #[test]
    fn sub_with_borrow() {
        let (diff, borrow) = U256::from_u64(0).sub(&U256::from_u64(1));
        assert!(borrow);
        assert_eq!(
            diff,
            U256::from_hex_unchecked(
                "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            )
        );
    }

    #[test]
    fn mul_small_values() {
        let a = U256::from_u64(12);
        let b = U256::from_u64(13);
        let (hi, lo) = a.mul(&b);
        assert_eq!(hi, U256::zero());
        assert_eq!(lo, U256::from_u64(156));
    }

    #[test]
    fn ordering_matches_numeric_value() {
        assert!(U256::from_u64(5) < U256::from_u64(6));
        assert!(U256::from_u64(6) > U256::from_u64(5));
        assert_eq!(U256::from_u64(5), U256::from_u64(5));
    }

    #[test]
    fn shift_right_and_left_roundtrip() {
        let a = U256::from_u64(0b1011_0000);
        assert_eq!(a.const_shr(4).const_shl(4), U256::from_u64(0b1011_0000));
    }

    #[test]
    fn bit_reads_least_significant_first() {
        let a = U256::from_u64(0b101);
        assert!(a.bit(0));
        assert!(!a.bit(1));
        assert!(a.bit(2));
    }
}
