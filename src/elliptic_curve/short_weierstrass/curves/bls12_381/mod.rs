/// `Fp`, and the `Fp2`/`Fp6`/`Fp12` tower built over it.
pub mod field_extension;
/// `Fr`: the scalar field `Z/rZ` used by secret keys and HD derivation.
pub mod scalar_field;
/// `G1`: the curve `E: y^2 = x^3 + 4` over `Fp`.
pub mod curve;
/// `G2`: the sextic twist `E': y^2 = x^3 + 4(u + 1)` over `Fp2`.
pub mod twist;
/// Isogeny maps from the SWU-friendly auxiliary curves back to `E`/`E'`.
pub mod isogeny;
/// Compressed/uncompressed point encodings for `G1` and `G2`.
pub mod compression;
/// The optimal Ate pairing.
pub mod pairing;
/// Hashing arbitrary messages onto `G1`/`G2` (the hash-to-curve draft).
pub mod hash_to_curve;
