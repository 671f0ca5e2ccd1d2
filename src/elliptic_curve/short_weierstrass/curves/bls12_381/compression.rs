use super::field_extension::{BLS12381PrimeField, Fp2E};
use crate::{
    elliptic_curve::short_weierstrass::{
        curves::bls12_381::{curve::BLS12381Curve, twist::BLS12381TwistCurve},
        point::ShortWeierstrassProjectivePoint,
        traits::{Compress, IsShortWeierstrass},
    },
    field::element::FieldElement,
};
use core::cmp::Ordering;

use crate::{
    cyclic_group::IsGroup, elliptic_curve::traits::FromAffine, errors::ByteConversionError,
    traits::ByteConversion,
};

pub type G1Point = ShortWeierstrassProjectivePoint<BLS12381Curve>;
pub type G2Point = ShortWeierstrassProjectivePoint<BLS12381TwistCurve>;
pub type BLS12381FieldElement = FieldElement<BLS12381PrimeField>;

/// Compares two `Fp2` elements lexicographically by `(c1, c0)`, the
/// ordering used to pick the canonical root when compressing `G2`.
fn fp2_cmp(a: &Fp2E, b: &Fp2E) -> Ordering {
    let [a0, a1] = a.value();
    let [b0, b1] = b.value();
    match a1.representative().cmp(&b1.representative()) {
        Ordering::Equal => a0.representative().cmp(&b0.representative()),
        other => other,
    }
}

pub fn decompress_g1_point(input_bytes: &mut [u8; 48]) -> Result<G1Point, ByteConversionError> {
    let first_byte = input_bytes.first().unwrap();
    let prefix_bits = first_byte >> 5;
    let first_bit = (prefix_bits & 4_u8) >> 2;
    if first_bit != 1 {
        return Err(ByteConversionError::ValueNotCompressed);
    }
    let second_bit = (prefix_bits & 2_u8) >> 1;
    if second_bit == 1 {
        return Ok(G1Point::neutral_element());
    }
    let third_bit = prefix_bits & 1_u8;

    let first_byte_without_control_bits = (first_byte << 3) >> 3;
    input_bytes[0] = first_byte_without_control_bits;

    let x = BLS12381FieldElement::from_bytes_be(input_bytes)?;
    let y_squared = x.pow(3_u16) + BLS12381FieldElement::from(4);
    let (y_sqrt_1, y_sqrt_2) = &y_squared.sqrt().ok_or(ByteConversionError::InvalidValue)?;

    let y = match (
        y_sqrt_1.representative().cmp(&y_sqrt_2.representative()),
        third_bit,
    ) {
        (Ordering::Greater, 0) => y_sqrt_2,
        (Ordering::Greater, _) => y_sqrt_1,
        (Ordering::Less, 0) => y_sqrt_1,
        (Ordering::Less, _) => y_sqrt_2,
        (Ordering::Equal, _) => y_sqrt_1,
    };

    let point =
        G1Point::from_affine(x, y.clone()).map_err(|_| ByteConversionError::InvalidValue)?;

    point
        .is_in_subgroup()
        .then_some(point)
        .ok_or(ByteConversionError::PointNotInSubgroup)
}

#[cfg(feature = "alloc")]
pub fn compress_g1_point(point: &G1Point) -> alloc::vec::Vec<u8> {
    if *point == G1Point::neutral_element() {
        let mut x_bytes = alloc::vec![0_u8; 48];
        x_bytes[0] |= 1 << 7;
        x_bytes[0] |= 1 << 6;
        x_bytes
    } else {
        let point_affine = point.to_affine();
        let x = point_affine.x();
        let y = point_affine.y();

        let mut x_bytes = x.to_bytes_be();
        x_bytes[0] |= 1 << 7;

        let y_neg = core::ops::Neg::neg(y);
        if y_neg.representative() < y.representative() {
            x_bytes[0] |= 1 << 5;
        }
        x_bytes
    }
}

/// Decompresses a 96-byte `G2` encoding: control bits in the top 3 bits of
/// the first byte, followed by `x.c1 || x.c0` (48 bytes each).
pub fn decompress_g2_point(input_bytes: &mut [u8; 96]) -> Result<G2Point, ByteConversionError> {
    let first_byte = input_bytes.first().unwrap();
    let prefix_bits = first_byte >> 5;
    let first_bit = (prefix_bits & 4_u8) >> 2;
    if first_bit != 1 {
        return Err(ByteConversionError::ValueNotCompressed);
    }
    let second_bit = (prefix_bits & 2_u8) >> 1;
    if second_bit == 1 {
        return Ok(G2Point::neutral_element());
    }
    let third_bit = prefix_bits & 1_u8;

    let first_byte_without_control_bits = (first_byte << 3) >> 3;
    input_bytes[0] = first_byte_without_control_bits;

    let x_c1 = BLS12381FieldElement::from_bytes_be(&input_bytes[0..48])?;
    let x_c0 = BLS12381FieldElement::from_bytes_be(&input_bytes[48..96])?;
    let x = Fp2E::new([x_c0, x_c1]);

    let y_squared = x.pow(3_u16) + BLS12381TwistCurve::b();
    let (y_sqrt_1, y_sqrt_2) = y_squared.sqrt().ok_or(ByteConversionError::InvalidValue)?;

    let y = match (fp2_cmp(&y_sqrt_1, &y_sqrt_2), third_bit) {
        (Ordering::Greater, 0) => y_sqrt_2,
        (Ordering::Greater, _) => y_sqrt_1,
        (Ordering::Less, 0) => y_sqrt_1,
        (Ordering::Less, _) => y_sqrt_2,
        (Ordering::Equal, _) => y_sqrt_1,
    };

    let point = G2Point::from_affine(x, y).map_err(|_| ByteConversionError::InvalidValue)?;

    point
        .is_in_subgroup()
        .then_some(point)
        .ok_or(ByteConversionError::PointNotInSubgroup)
}

#[cfg(feature = "alloc")]
pub fn compress_g2_point(point: &G2Point) -> alloc::vec::Vec<u8> {
    if *point == G2Point::neutral_element() {
        let mut bytes = alloc::vec![0_u8; 96];
        bytes[0] |= 1 << 7;
        bytes[0] |= 1 << 6;
        bytes
    } else {
        let point_affine = point.to_affine();
        let x = point_affine.x();
        let y = point_affine.y();
        let [x0, x1] = x.value();

        let mut bytes = alloc::vec::Vec::with_capacity(96);
        bytes.extend(x1.to_bytes_be());
        bytes.extend(x0.to_bytes_be());
        bytes[0] |= 1 << 7;

        let y_neg = core::ops::Neg::neg(y);
        if fp2_cmp(&y_neg, y) == Ordering::Less {
            bytes[0] |= 1 << 5;
        }
        bytes
    }
}

pub struct BLS12381Compress;

impl Compress for BLS12381Compress {
    type G1Point = G1Point;
    type G2Point = G2Point;
    #[cfg(feature = "alloc")]
    type G1Compressed = alloc::vec::Vec<u8>;
    #[cfg(feature = "alloc")]
    type G2Compressed = alloc::vec::Vec<u8>;
    type Error = ByteConversionError;

    #[cfg(feature = "alloc")]
    fn compress_g1_point(point: &Self::G1Point) -> Self::G1Compressed {
        compress_g1_point(point)
    }

    #[cfg(feature = "alloc")]
    fn compress_g2_point(point: &Self::G2Point) -> Self::G2Compressed {
        compress_g2_point(point)
    }

    fn decompress_g1_point(input_bytes: &mut [u8]) -> Result<Self::G1Point, Self::Error> {
        let arr: &mut [u8; 48] = input_bytes
            .try_into()
            .map_err(|_| ByteConversionError::InvalidValue)?;
        decompress_g1_point(arr)
    }

    fn decompress_g2_point(input_bytes: &mut [u8]) -> Result<Self::G2Point, Self::Error> {
        let arr: &mut [u8; 96] = input_bytes
            .try_into()
            .map_err(|_| ByteConversionError::InvalidValue)?;
        decompress_g2_point(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::{BLS12381FieldElement, G1Point, G2Point};
    use crate::elliptic_curve::short_weierstrass::curves::bls12_381::curve::BLS12381Curve;
    use crate::elliptic_curve::short_weierstrass::curves::bls12_381::twist::BLS12381TwistCurve;
    use crate::elliptic_curve::traits::{FromAffine, IsEllipticCurve};

    #[cfg(feature = "alloc")]
    use super::{compress_g1_point, compress_g2_point};
    use super::{decompress_g1_point, decompress_g2_point};
    use crate::{
        cyclic_group::IsGroup, traits::ByteConversion, unsigned_integer::element::UnsignedInteger,
    };

    #[test]
    fn test_zero_point() {
        let g1 = BLS12381Curve::generator();

        assert!(g1.is_in_subgroup());
        let new_x = BLS12381FieldElement::zero();
        let new_y = BLS12381FieldElement::one() + BLS12381FieldElement::one();

        let false_point2 = G1Point::from_affine(new_x, new_y).unwrap();

        assert!(!false_point2.is_in_subgroup());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_g1_compress_generator() {
        let g = BLS12381Curve::generator();
        let mut compressed_g = compress_g1_point(&g);
        let first_byte = compressed_g.first().unwrap();

        let first_byte_without_control_bits = (first_byte << 3) >> 3;
        compressed_g[0] = first_byte_without_control_bits;

        let compressed_g_x = BLS12381FieldElement::from_bytes_be(&compressed_g).unwrap();
        let g_x = g.x();

        assert_eq!(*g_x, compressed_g_x);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_g1_compress_point_at_inf() {
        let inf = G1Point::neutral_element();
        let compressed_inf = compress_g1_point(&inf);
        let first_byte = compressed_inf.first().unwrap();

        assert_eq!(*first_byte >> 6, 3_u8);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_compress_decompress_generator() {
        let g = BLS12381Curve::generator();
        let compressed_g = compress_g1_point(&g);
        let mut compressed_g_slice: [u8; 48] = compressed_g.try_into().unwrap();

        let decompressed_g = decompress_g1_point(&mut compressed_g_slice).unwrap();

        assert_eq!(g, decompressed_g);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_compress_decompress_2g() {
        let g = BLS12381Curve::generator();
        let g_2 = g.operate_with_self(UnsignedInteger::<4>::from("2"));

        let compressed_g2 = compress_g1_point(&g_2);
        let mut compressed_g2_slice: [u8; 48] = compressed_g2.try_into().unwrap();

        let decompressed_g2 = decompress_g1_point(&mut compressed_g2_slice).unwrap();

        assert_eq!(g_2, decompressed_g2);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_compress_decompress_g2_generator() {
        let g2 = BLS12381TwistCurve::generator();
        let compressed = compress_g2_point(&g2);
        let mut compressed_slice: [u8; 96] = compressed.try_into().unwrap();

        let decompressed = decompress_g2_point(&mut compressed_slice).unwrap();

        assert_eq!(g2, decompressed);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_g2_compress_point_at_inf() {
        let inf = G2Point::neutral_element();
        let compressed_inf = compress_g2_point(&inf);
        let first_byte = compressed_inf.first().unwrap();

        assert_eq!(*first_byte >> 6, 3_u8);
    }
}
