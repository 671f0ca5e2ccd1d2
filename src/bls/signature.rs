//! BLS signatures over BLS12-381, proof-of-possession ciphersuite:
//! public keys in `G1`, signatures in `G2`.

use super::errors::BlsError;
use super::keygen;
use crate::cyclic_group::IsGroup;
use crate::elliptic_curve::short_weierstrass::curves::bls12_381::compression::compress_g1_point;
#[cfg(test)]
use crate::elliptic_curve::short_weierstrass::curves::bls12_381::compression::compress_g2_point;
use crate::elliptic_curve::short_weierstrass::curves::bls12_381::curve::{BLS12381Curve, G1Point};
use crate::elliptic_curve::short_weierstrass::curves::bls12_381::hash_to_curve::hash_to_g2;
use crate::elliptic_curve::short_weierstrass::curves::bls12_381::pairing::BLS12381AtePairing;
use crate::elliptic_curve::short_weierstrass::curves::bls12_381::scalar_field::FrE;
use crate::elliptic_curve::short_weierstrass::curves::bls12_381::twist::G2Point;
use crate::elliptic_curve::traits::{IsEllipticCurve, IsPairing};
use crate::field::element::FieldElement;
use crate::traits::ByteConversion;
use alloc::vec::Vec;

/// The IETF BLS proof-of-possession ciphersuite's domain separation tag.
pub const POP_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";
/// The proof-of-possession DST used by [`SecretKey::pop_prove`]/[`PublicKey::pop_verify`].
pub const POP_PROVE_DST: &[u8] = b"BLS_POP_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretKey(FrE);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(pub(crate) G1Point);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(pub(crate) G2Point);

impl SecretKey {
    /// EIP-2333/the BLS draft's `KeyGen`: derives a secret key from key
    /// material `ikm`, which must be at least 32 bytes.
    pub fn key_gen(ikm: &[u8]) -> Result<Self, BlsError> {
        keygen::key_gen(ikm).map(Self)
    }

    /// Builds a secret key directly from its big-endian scalar encoding,
    /// bypassing `key_gen`'s HKDF derivation. Ciphersuite test vectors
    /// (e.g. the IETF BLS draft's) supply the raw scalar rather than seed
    /// material, so this constructor exists to feed them in as-is.
    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, BlsError> {
        FrE::from_bytes_be(bytes)
            .map(Self)
            .map_err(|_| BlsError::InvalidSecretKey)
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(BLS12381Curve::generator().operate_with_self(self.0.representative()))
    }

    /// Signs `msg` under the proof-of-possession ciphersuite's DST.
    pub fn sign(&self, msg: &[u8]) -> Signature {
        self.sign_with_dst(msg, POP_DST)
    }

    pub fn sign_with_dst(&self, msg: &[u8], dst: &[u8]) -> Signature {
        let h = hash_to_g2(msg, dst);
        Signature(h.operate_with_self(self.0.representative()))
    }

    /// §4.6.1: proves possession of the secret key matching `self.public_key()`
    /// by signing the compressed public key bytes under a distinct DST.
    pub fn pop_prove(&self) -> Signature {
        let pk_bytes = compress_g1_point(&self.public_key().0);
        self.sign_with_dst(&pk_bytes, POP_PROVE_DST)
    }

    pub fn derive_child(&self, index: u32) -> Self {
        Self(keygen::derive_child_sk(&self.0, index))
    }

    pub fn derive_child_unhardened(&self, index: u32) -> Self {
        Self(keygen::derive_child_sk_unhardened(&self.0, index))
    }
}

impl PublicKey {
    pub fn derive_child_unhardened(&self, index: u32) -> Self {
        Self(keygen::derive_child_pk_unhardened(&self.0, index))
    }

    pub fn verify(&self, msg: &[u8], sig: &Signature) -> Result<bool, BlsError> {
        self.verify_with_dst(msg, sig, POP_DST)
    }

    pub fn verify_with_dst(&self, msg: &[u8], sig: &Signature, dst: &[u8]) -> Result<bool, BlsError> {
        if !self.0.is_in_subgroup() {
            return Err(BlsError::InvalidPublicKey);
        }
        if !sig.0.is_in_subgroup() {
            return Err(BlsError::InvalidSignature);
        }
        let h = hash_to_g2(msg, dst);
        let neg_g1 = BLS12381Curve::generator().neg();
        let result = BLS12381AtePairing::compute_batch(&[(&neg_g1, &sig.0), (&self.0, &h)])
            .expect("both operands were just subgroup-checked above");
        Ok(result == FieldElement::one())
    }

    /// §4.6.1: verifies a proof of possession produced by [`SecretKey::pop_prove`].
    pub fn pop_verify(&self, proof: &Signature) -> Result<bool, BlsError> {
        let pk_bytes = compress_g1_point(&self.0);
        self.verify_with_dst(&pk_bytes, proof, POP_PROVE_DST)
    }
}

impl Signature {
    pub fn aggregate(sigs: &[Signature]) -> Signature {
        let mut acc = G2Point::neutral_element();
        for sig in sigs {
            acc = acc.operate_with(&sig.0);
        }
        Signature(acc)
    }
}

/// Group sum of `sigs` in `G2`.
pub fn aggregate_signatures(sigs: &[Signature]) -> Signature {
    Signature::aggregate(sigs)
}

/// One multi-pairing check across every `(public key, message)` pair against
/// a single aggregated signature.
pub fn aggregate_verify(
    pks: &[PublicKey],
    msgs: &[&[u8]],
    sig: &Signature,
) -> Result<bool, BlsError> {
    aggregate_verify_with_dst(pks, msgs, sig, POP_DST)
}

pub fn aggregate_verify_with_dst(
    pks: &[PublicKey],
    msgs: &[&[u8]],
    sig: &Signature,
    dst: &[u8],
) -> Result<bool, BlsError> {
    if pks.len() != msgs.len() {
        return Err(BlsError::MismatchedInputLengths);
    }
    if !sig.0.is_in_subgroup() {
        return Err(BlsError::InvalidSignature);
    }

    let neg_g1 = BLS12381Curve::generator().neg();
    let hashes: Vec<G2Point> = msgs.iter().map(|m| hash_to_g2(m, dst)).collect();

    let mut pairs: Vec<(&G1Point, &G2Point)> = Vec::with_capacity(pks.len() + 1);
    pairs.push((&neg_g1, &sig.0));
    for (pk, h) in pks.iter().zip(hashes.iter()) {
        if !pk.0.is_in_subgroup() {
            return Err(BlsError::InvalidPublicKey);
        }
        pairs.push((&pk.0, h));
    }

    let result = BLS12381AtePairing::compute_batch(&pairs)
        .expect("every point was subgroup-checked above");
    Ok(result == FieldElement::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify_roundtrip() {
        let sk = SecretKey::key_gen(&[0_u8; 32]).unwrap();
        let pk = sk.public_key();
        let msg = [7_u8, 8, 9];
        let sig = sk.sign(&msg);
        assert_eq!(pk.verify(&msg, &sig), Ok(true));
    }

    #[test]
    fn verify_rejects_wrong_message() {
        let sk = SecretKey::key_gen(&[0_u8; 32]).unwrap();
        let pk = sk.public_key();
        let sig = sk.sign(&[7_u8, 8, 9]);
        assert_eq!(pk.verify(&[1_u8, 2, 3], &sig), Ok(false));
    }

    #[test]
    fn aggregate_verify_accepts_matching_batch() {
        let sk1 = SecretKey::key_gen(&[0_u8; 32]).unwrap();
        let mut ikm2 = [0_u8; 32];
        ikm2[31] = 1;
        let sk2 = SecretKey::key_gen(&ikm2).unwrap();

        let pk1 = sk1.public_key();
        let pk2 = sk2.public_key();
        let msg1 = [7_u8, 8, 9];
        let msg2 = [10_u8, 11, 12];
        let sig1 = sk1.sign(&msg1);
        let sig2 = sk2.sign(&msg2);
        let agg = aggregate_signatures(&[sig1, sig2]);

        let result = aggregate_verify(&[pk1, pk2], &[&msg1[..], &msg2[..]], &agg);
        assert_eq!(result, Ok(true));
    }

    #[test]
    fn aggregate_verify_rejects_mismatched_lengths() {
        let sk = SecretKey::key_gen(&[0_u8; 32]).unwrap();
        let pk = sk.public_key();
        let sig = sk.sign(&[1_u8]);
        let result = aggregate_verify(&[pk], &[], &sig);
        assert_eq!(result, Err(BlsError::MismatchedInputLengths));
    }

    #[test]
    fn pop_prove_and_verify_roundtrip() {
        let sk = SecretKey::key_gen(&[0x9_u8; 32]).unwrap();
        let pk = sk.public_key();
        let proof = sk.pop_prove();
        assert_eq!(pk.pop_verify(&proof), Ok(true));
    }

    /// IETF BLS signature draft test vector: `sk` is the raw scalar
    /// `0x0101..01` (32 bytes of `0x01`), not an EIP-2333 seed.
    #[test]
    fn ietf_basic_signature_vector() {
        let sk_bytes = [0x01_u8; 32];
        let msg = [3_u8, 1, 4, 1, 5, 9];
        let expected_sig: [u8; 96] = [
            0xb6, 0xba, 0x34, 0xfa, 0xc3, 0x3c, 0x7f, 0x12, 0x9d, 0x60, 0x2a, 0x0b, 0xc8,
            0xa3, 0xd4, 0x3f, 0x9a, 0xbc, 0x01, 0x4e, 0xce, 0xaa, 0xb7, 0x35, 0x91, 0x46,
            0xb4, 0xb1, 0x50, 0xe5, 0x7b, 0x80, 0x86, 0x45, 0x73, 0x8f, 0x35, 0x67, 0x1e,
            0x9e, 0x10, 0xe0, 0xd8, 0x62, 0xa3, 0x0c, 0xab, 0x70, 0x07, 0x4e, 0xb5, 0x83,
            0x1d, 0x13, 0xe6, 0xa5, 0xb1, 0x62, 0xd0, 0x1e, 0xeb, 0xe6, 0x87, 0xd0, 0x16,
            0x4a, 0xdb, 0xd0, 0xa8, 0x64, 0x37, 0x0a, 0x7c, 0x22, 0x2a, 0x27, 0x68, 0xd7,
            0x70, 0x4d, 0xa2, 0x54, 0xf1, 0xbf, 0x18, 0x23, 0x66, 0x5b, 0xc2, 0x36, 0x1f,
            0x9d, 0xd8, 0xc0, 0x0e, 0x99,
        ];

        let sk = SecretKey::from_bytes_be(&sk_bytes).unwrap();
        let sig = sk.sign(&msg);
        assert_eq!(compress_g2_point(&sig.0), expected_sig);
    }

    /// Chia's BLS test fixture: two signers over distinct messages, checked
    /// via `aggregate_verify`. The fixture carries no literal expected
    /// signature; unlike `TestIETFVectors` it only asserts the aggregate
    /// relation holds. Chia's own seed-to-key derivation isn't part of the
    /// retrieved corpus, so this crate's own `key_gen` (EIP-2333) is used to
    /// turn the seeds into secret keys instead.
    #[test]
    fn chia_aggregate_verify_two_signers() {
        let seed1 = [0x00_u8; 32];
        let seed2 = [0x01_u8; 32];
        let msg1 = [7_u8, 8, 9];
        let msg2 = [10_u8, 11, 12];

        let sk1 = SecretKey::key_gen(&seed1).unwrap();
        let sk2 = SecretKey::key_gen(&seed2).unwrap();
        let pk1 = sk1.public_key();
        let pk2 = sk2.public_key();

        let sig1 = sk1.sign(&msg1);
        let sig2 = sk2.sign(&msg2);
        assert_eq!(pk1.verify(&msg1, &sig1), Ok(true));
        assert_eq!(pk2.verify(&msg2, &sig2), Ok(true));

        let agg = aggregate_signatures(&[sig1, sig2]);
        let result = aggregate_verify(&[pk1, pk2], &[&msg1[..], &msg2[..]], &agg);
        assert_eq!(result, Ok(true));
    }
}
