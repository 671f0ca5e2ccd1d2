use thiserror::Error;

/// Errors raised by the BLS signature scheme and EIP-2333 key derivation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BlsError {
    #[error("public key is not in its prime-order subgroup or is otherwise malformed")]
    InvalidPublicKey,
    #[error("signature is not in its prime-order subgroup or is otherwise malformed")]
    InvalidSignature,
    #[error("aggregate_verify was given mismatched numbers of public keys and messages")]
    MismatchedInputLengths,
    #[error("key material must be at least 32 bytes")]
    InsufficientKeyMaterial,
    #[error("key derivation was rejection-sampled past its bound without producing a nonzero scalar")]
    KeyDerivationExhausted,
    #[error("secret key bytes did not decode to a valid scalar")]
    InvalidSecretKey,
}
