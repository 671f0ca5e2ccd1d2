/// Implementation of particular cases of elliptic curves.
pub mod curves;
/// A generic projective point on a short-Weierstrass curve.
pub mod point;
/// Common behaviour for short-Weierstrass elliptic curves.
pub mod traits;
/// Errors produced when deserializing curve points.
pub mod errors;
