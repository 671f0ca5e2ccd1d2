//! BLS signatures over BLS12-381 (IETF BLS signature draft, proof-of-possession
//! ciphersuite) and EIP-2333 hierarchical key derivation.

pub mod errors;
pub mod keygen;
pub mod signature;

pub use errors::BlsError;
pub use signature::{
    aggregate_signatures, aggregate_verify, aggregate_verify_with_dst, PublicKey, SecretKey,
    Signature, POP_DST, POP_PROVE_DST,
};
