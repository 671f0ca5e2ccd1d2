/// Short-Weierstrass curves: `BLS12-381`'s `G1`/`G2` and the generic
/// projective point/curve traits they're built on.
pub mod short_weierstrass;
/// [`traits::IsEllipticCurve`], [`traits::IsPairing`], [`traits::FromAffine`].
pub mod traits;
