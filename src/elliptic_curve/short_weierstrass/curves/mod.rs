/// BLS12-381: the pairing-friendly curve this crate's signature scheme is
/// built on.
pub mod bls12_381;
