//! Multi-scalar multiplication via Pippenger's bucket method, generic over
//! any [`IsGroup`] implementation (used for both `G1` and `G2`).

use crate::cyclic_group::IsGroup;
use crate::unsigned_integer::element::UnsignedInteger;
use alloc::vec;
use alloc::vec::Vec;

/// Picks the bucket window size `c` as a function of the input length.
fn window_size(n: usize) -> usize {
    if n < 2 {
        return 4;
    }
    let ceil_log2 = (usize::BITS - (n - 1).leading_zeros()) as i64;
    (ceil_log2 - 2).clamp(4, 22) as usize
}

/// Extracts the `c`-bit digit of `scalar` at window index `window` (window
/// `0` holds the least-significant bits).
fn window_digit<const NUM_LIMBS: usize>(
    scalar: &UnsignedInteger<NUM_LIMBS>,
    window: usize,
    c: usize,
    bit_width: usize,
) -> usize {
    let mut digit = 0usize;
    for i in (0..c).rev() {
        let bit_index = window * c + i;
        digit <<= 1;
        if bit_index < bit_width && scalar.bit(bit_index) {
            digit |= 1;
        }
    }
    digit
}

/// Computes `sum(scalars[i] * points[i])` via Pippenger's bucket method.
///
/// Tolerates duplicate points and identity elements among `points`. The
/// result does not depend on the order of `points`/`scalars` beyond the
/// commutativity of the group operation.
pub fn pippenger<G: IsGroup, const NUM_LIMBS: usize>(
    points: &[G],
    scalars: &[UnsignedInteger<NUM_LIMBS>],
) -> G {
    assert_eq!(points.len(), scalars.len(), "points and scalars must match in length");
    if points.is_empty() {
        return G::neutral_element();
    }

    let c = window_size(points.len());
    let bit_width = NUM_LIMBS * 64;
    let num_windows = bit_width.div_ceil(c);
    let num_buckets = (1_usize << c) - 1;

    let mut result = G::neutral_element();
    for w in (0..num_windows).rev() {
        for _ in 0..c {
            result = result.operate_with(&result);
        }

        let mut buckets = vec![G::neutral_element(); num_buckets];
        for (point, scalar) in points.iter().zip(scalars) {
            let digit = window_digit(scalar, w, c, bit_width);
            if digit > 0 {
                buckets[digit - 1] = buckets[digit - 1].operate_with(point);
            }
        }

        // Running-sum trick: sum_k (k * bucket[k]) without any scalar
        // multiplications, two passes over the buckets.
        let mut running_sum = G::neutral_element();
        let mut window_sum = G::neutral_element();
        for bucket in buckets.iter().rev() {
            running_sum = running_sum.operate_with(bucket);
            window_sum = window_sum.operate_with(&running_sum);
        }
        result = result.operate_with(&window_sum);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elliptic_curve::short_weierstrass::curves::bls12_381::curve::BLS12381Curve;
    use crate::elliptic_curve::traits::IsEllipticCurve;
    use crate::unsigned_integer::element::U256;

    type G1 = <BLS12381Curve as IsEllipticCurve>::PointRepresentation;

    #[test]
    fn msm_matches_naive_linear_combination() {
        let g = BLS12381Curve::generator();
        let points = vec![g.clone(), g.operate_with(&g), g.operate_with_self(3_u64)];
        let scalars = vec![
            U256::from_u64(5),
            U256::from_u64(7),
            U256::from_u64(11),
        ];

        let result = pippenger(&points, &scalars);

        let mut expected = G1::neutral_element();
        for (p, s) in points.iter().zip(scalars.iter()) {
            expected = expected.operate_with(&p.operate_with_self(*s));
        }
        assert_eq!(result, expected);
    }

    #[test]
    fn msm_of_empty_input_is_neutral_element() {
        let points: Vec<G1> = vec![];
        let scalars: Vec<U256> = vec![];
        assert_eq!(pippenger(&points, &scalars), G1::neutral_element());
    }

    #[test]
    fn msm_tolerates_identity_points() {
        let g = BLS12381Curve::generator();
        let points = vec![G1::neutral_element(), g.clone()];
        let scalars = vec![U256::from_u64(42), U256::from_u64(6)];
        let result = pippenger(&points, &scalars);
        assert_eq!(result, g.operate_with_self(6_u64));
    }
}
