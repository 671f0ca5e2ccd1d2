//! EIP-2333 hierarchical deterministic key derivation for BLS12-381 secret
//! keys, plus the unhardened (public-key-homomorphic) variant used by
//! wallets that need to derive child public keys without the parent secret.

use super::errors::BlsError;
use crate::elliptic_curve::short_weierstrass::curves::bls12_381::curve::{BLS12381Curve, G1Point};
use crate::elliptic_curve::short_weierstrass::curves::bls12_381::scalar_field::FrE;
use crate::elliptic_curve::traits::IsEllipticCurve;
use crate::cyclic_group::IsGroup;
use crate::traits::ByteConversion;
use alloc::vec::Vec;
use hkdf::Hkdf;
use sha2::{Digest, Sha256};

const KEYGEN_SALT: &[u8] = b"BLS-SIG-KEYGEN-SALT-";
const L: usize = 48;

/// Interprets `bytes` as a big-endian integer reduced modulo `r`, via
/// Horner's method in field arithmetic.
fn os2ip_mod_r(bytes: &[u8]) -> FrE {
    let base = FrE::from(256_u64);
    bytes.iter().fold(FrE::zero(), |acc, &b| acc * &base + FrE::from(b as u64))
}

fn hkdf_mod_r(ikm: &[u8], key_info: &[u8]) -> Result<FrE, BlsError> {
    let mut salt = KEYGEN_SALT.to_vec();
    let mut ikm_with_suffix = ikm.to_vec();
    ikm_with_suffix.push(0_u8);

    let mut info = Vec::with_capacity(key_info.len() + 2);
    info.extend_from_slice(key_info);
    info.extend_from_slice(&(L as u16).to_be_bytes());

    loop {
        salt = Sha256::digest(&salt).to_vec();
        let hk = Hkdf::<Sha256>::new(Some(&salt), &ikm_with_suffix);
        let mut okm = [0_u8; L];
        hk.expand(&info, &mut okm).map_err(|_| BlsError::KeyDerivationExhausted)?;
        let candidate = os2ip_mod_r(&okm);
        if candidate != FrE::zero() {
            return Ok(candidate);
        }
    }
}

/// `SecretKey::key_gen`: derives a nonzero scalar in `[1, r)` from key
/// material `ikm` (which must be at least 32 bytes) via rejection-sampled
/// HKDF, per EIP-2333's `keygen`.
pub fn key_gen(ikm: &[u8]) -> Result<FrE, BlsError> {
    if ikm.len() < 32 {
        return Err(BlsError::InsufficientKeyMaterial);
    }
    hkdf_mod_r(ikm, b"")
}

fn flip_bits(ikm: &[u8; 32]) -> [u8; 32] {
    let mut out = [0_u8; 32];
    for (o, i) in out.iter_mut().zip(ikm.iter()) {
        *o = !i;
    }
    out
}

/// `IKM_to_lamport_SK`: expands `ikm` (salted by `salt`) into 255 32-byte
/// lamport secret key chunks.
fn ikm_to_lamport_sk(ikm: &[u8], salt: &[u8]) -> Vec<[u8; 32]> {
    let hk = Hkdf::<Sha256>::new(Some(salt), ikm);
    let mut okm = alloc::vec![0_u8; 32 * 255];
    hk.expand(b"", &mut okm).expect("255 * 32 bytes is within HKDF-Expand-SHA256's output bound");
    okm.chunks_exact(32)
        .map(|chunk| chunk.try_into().unwrap())
        .collect()
}

/// `parent_SK_to_lamport_PK`: EIP-2333's hardened per-index compression of
/// a parent secret key into a single 32-byte "lamport public key" seed.
fn parent_sk_to_lamport_pk(parent_sk: &FrE, index: u32) -> [u8; 32] {
    let salt = index.to_be_bytes();
    let ikm: [u8; 32] = parent_sk.to_bytes_be().try_into().unwrap();
    let not_ikm = flip_bits(&ikm);

    let lamport_0 = ikm_to_lamport_sk(&ikm, &salt);
    let lamport_1 = ikm_to_lamport_sk(&not_ikm, &salt);

    let mut lamport_pk = Vec::with_capacity(32 * 255 * 2);
    for chunk in lamport_0.iter().chain(lamport_1.iter()) {
        lamport_pk.extend_from_slice(&Sha256::digest(chunk));
    }
    Sha256::digest(&lamport_pk).into()
}

/// `derive_child_SK`: hardened derivation — the child scalar cannot be
/// recomputed from the parent public key, only from the parent secret key.
pub fn derive_child_sk(parent_sk: &FrE, index: u32) -> FrE {
    let compressed_lamport_pk = parent_sk_to_lamport_pk(parent_sk, index);
    hkdf_mod_r(&compressed_lamport_pk, b"")
        .expect("rejection sampling over a 256-bit space never exhausts in practice")
}

fn tweak_scalar(pk: &G1Point, index: u32) -> FrE {
    use crate::elliptic_curve::short_weierstrass::curves::bls12_381::compression::compress_g1_point;
    let mut ikm = compress_g1_point(pk);
    ikm.extend_from_slice(&index.to_be_bytes());
    hkdf_mod_r(&ikm, b"unhardened")
        .expect("rejection sampling over a 256-bit space never exhausts in practice")
}

/// Unhardened derivation: `derive_child_sk_unhardened(sk, i).public_key()`
/// equals `derive_child_pk_unhardened(sk.public_key(), i)`, since both add
/// the same public tweak (derived from the parent *public* key and `index`)
/// to the parent secret/public key respectively.
pub fn derive_child_sk_unhardened(parent_sk: &FrE, index: u32) -> FrE {
    let parent_pk = BLS12381Curve::generator().operate_with_self(parent_sk.representative());
    let tweak = tweak_scalar(&parent_pk, index);
    parent_sk + &tweak
}

pub fn derive_child_pk_unhardened(parent_pk: &G1Point, index: u32) -> G1Point {
    let tweak = tweak_scalar(parent_pk, index);
    let tweak_point = BLS12381Curve::generator().operate_with_self(tweak.representative());
    parent_pk.operate_with(&tweak_point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_gen_rejects_short_ikm() {
        assert_eq!(key_gen(&[0_u8; 31]), Err(BlsError::InsufficientKeyMaterial));
    }

    #[test]
    fn key_gen_is_deterministic_and_nonzero() {
        let ikm = [0x42_u8; 32];
        let a = key_gen(&ikm).unwrap();
        let b = key_gen(&ikm).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, FrE::zero());
    }

    #[test]
    fn hardened_and_unhardened_derivation_differ() {
        let sk = key_gen(&[0x11_u8; 32]).unwrap();
        let hardened = derive_child_sk(&sk, 0);
        let unhardened = derive_child_sk_unhardened(&sk, 0);
        assert_ne!(hardened, unhardened);
    }

    #[test]
    fn unhardened_derivation_is_public_key_homomorphic() {
        let sk = key_gen(&[0x77_u8; 32]).unwrap();
        let pk = BLS12381Curve::generator().operate_with_self(sk.representative());

        let child_sk = derive_child_sk_unhardened(&sk, 7);
        let child_pk_from_sk = BLS12381Curve::generator().operate_with_self(child_sk.representative());
        let child_pk_from_pk = derive_child_pk_unhardened(&pk, 7);

        assert_eq!(child_pk_from_sk, child_pk_from_pk);
    }

    /// EIP-2333 reference vectors (Test case 0-3 of the EIP's test suite).
    /// Each expected value is reproduced from the EIP's decimal integers via
    /// `int.to_bytes(32, "big")`.
    #[test]
    fn eip2333_test_case_0() {
        let seed = [
            0x31, 0x41, 0x59, 0x26, 0x53, 0x58, 0x97, 0x93, 0x23, 0x84, 0x62, 0x64, 0x33, 0x83,
            0x27, 0x95, 0x02, 0x88, 0x41, 0x97, 0x16, 0x93, 0x99, 0x37, 0x51, 0x05, 0x82, 0x09,
            0x74, 0x94, 0x45, 0x92,
        ];
        let expected_master = [
            0x4f, 0xf5, 0xe1, 0x45, 0x59, 0x0e, 0xd7, 0xb7, 0x1e, 0x57, 0x7b, 0xb0, 0x40, 0x32,
            0x39, 0x6d, 0x16, 0x19, 0xff, 0x41, 0xcb, 0x4e, 0x35, 0x00, 0x53, 0xed, 0x2d, 0xce,
            0x8d, 0x1e, 0xfd, 0x1c,
        ];
        let expected_child = [
            0x5c, 0x62, 0xdc, 0xf9, 0x65, 0x44, 0x81, 0x29, 0x2a, 0xaf, 0xa3, 0x34, 0x8f, 0x1d,
            0x1b, 0x00, 0x17, 0xbb, 0xfb, 0x44, 0xd6, 0x88, 0x1d, 0x26, 0xd2, 0xb1, 0x78, 0x36,
            0xb3, 0x8f, 0x20, 0x4d,
        ];

        let master = key_gen(&seed).unwrap();
        assert_eq!(master.to_bytes_be(), expected_master);
        let child = derive_child_sk(&master, 3141592653);
        assert_eq!(child.to_bytes_be(), expected_child);
    }

    #[test]
    fn eip2333_test_case_1() {
        let seed = [
            0x00, 0x99, 0xff, 0x99, 0x11, 0x11, 0x00, 0x22, 0x99, 0xdd, 0x77, 0x44, 0xee, 0x33,
            0x55, 0xbb, 0xdd, 0x88, 0x44, 0x11, 0x55, 0x66, 0xcc, 0x55, 0x66, 0x33, 0x55, 0x66,
            0x88, 0x88, 0xcc, 0x00,
        ];
        let expected_master = [
            0x1e, 0xbd, 0x70, 0x4b, 0x86, 0x73, 0x2c, 0x3f, 0x05, 0xf3, 0x05, 0x63, 0xde, 0xe6,
            0x18, 0x98, 0x38, 0xe7, 0x39, 0x98, 0xeb, 0xc9, 0xc2, 0x09, 0xcc, 0xff, 0x42, 0x2a,
            0xde, 0xe1, 0x0c, 0x4b,
        ];
        let expected_child = [
            0x1b, 0x98, 0xdb, 0x8b, 0x24, 0x29, 0x60, 0x38, 0xea, 0xe3, 0xf6, 0x4c, 0x25, 0xd6,
            0x93, 0xa2, 0x69, 0xef, 0x1e, 0x4d, 0x7a, 0xe0, 0xf6, 0x91, 0xc5, 0x72, 0xa4, 0x6c,
            0xf3, 0xc0, 0x91, 0x3c,
        ];

        let master = key_gen(&seed).unwrap();
        assert_eq!(master.to_bytes_be(), expected_master);
        let child = derive_child_sk(&master, 4294967295);
        assert_eq!(child.to_bytes_be(), expected_child);
    }

    #[test]
    fn eip2333_test_case_2() {
        let seed = [
            0xd4, 0xe5, 0x67, 0x40, 0xf8, 0x76, 0xae, 0xf8, 0xc0, 0x10, 0xb8, 0x6a, 0x40, 0xd5,
            0xf5, 0x67, 0x45, 0xa1, 0x18, 0xd0, 0x90, 0x6a, 0x34, 0xe6, 0x9a, 0xec, 0x8c, 0x0d,
            0xb1, 0xcb, 0x8f, 0xa3,
        ];
        let expected_master = [
            0x61, 0x4d, 0x21, 0xb1, 0x0c, 0x0e, 0x49, 0x96, 0xac, 0x06, 0x08, 0xe0, 0xe7, 0x45,
            0x2d, 0x57, 0x20, 0xd9, 0x5d, 0x20, 0xfe, 0x03, 0xc5, 0x9a, 0x33, 0x21, 0x00, 0x0a,
            0x42, 0x43, 0x2e, 0x1a,
        ];
        let expected_child = [
            0x08, 0xde, 0x71, 0x36, 0xe4, 0xaf, 0xc5, 0x6a, 0xe3, 0xec, 0x03, 0xb2, 0x05, 0x17,
            0xd9, 0xc1, 0x23, 0x27, 0x05, 0xa7, 0x47, 0xf5, 0x88, 0xfd, 0x17, 0x83, 0x2f, 0x36,
            0xae, 0x33, 0x75, 0x26,
        ];

        let master = key_gen(&seed).unwrap();
        assert_eq!(master.to_bytes_be(), expected_master);
        let child = derive_child_sk(&master, 42);
        assert_eq!(child.to_bytes_be(), expected_child);
    }

    #[test]
    fn eip2333_test_case_3_long_seed() {
        let seed = [
            0xc5, 0x52, 0x57, 0xc3, 0x60, 0xc0, 0x7c, 0x72, 0x02, 0x9a, 0xeb, 0xc1, 0xb5, 0x3c,
            0x05, 0xed, 0x03, 0x62, 0xad, 0xa3, 0x8e, 0xad, 0x3e, 0x3e, 0x9e, 0xfa, 0x37, 0x08,
            0xe5, 0x34, 0x95, 0x53, 0x1f, 0x09, 0xa6, 0x98, 0x75, 0x99, 0xd1, 0x82, 0x64, 0xc1,
            0xe1, 0xc9, 0x2f, 0x2c, 0xf1, 0x41, 0x63, 0x0c, 0x7a, 0x3c, 0x4a, 0xb7, 0xc8, 0x1b,
            0x2f, 0x00, 0x16, 0x98, 0xe7, 0x46, 0x3b, 0x04,
        ];
        let expected_master = [
            0x0b, 0xef, 0xca, 0xbf, 0xf4, 0xa6, 0x64, 0x46, 0x1c, 0xc8, 0xf1, 0x90, 0xcd, 0xd5,
            0x1c, 0x05, 0x62, 0x1e, 0xb2, 0x83, 0x7c, 0x71, 0xa1, 0x36, 0x2d, 0xf5, 0xb4, 0x65,
            0xa6, 0x74, 0xec, 0xfb,
        ];
        let expected_child = [
            0x1a, 0x1d, 0xe3, 0x34, 0x68, 0x83, 0x40, 0x1f, 0x1e, 0x3b, 0x22, 0x81, 0xbe, 0x57,
            0x74, 0x08, 0x0e, 0xdb, 0x8e, 0x5e, 0xbe, 0x6f, 0x77, 0x6b, 0x0f, 0x7a, 0xf9, 0xfe,
            0xa9, 0x42, 0x55, 0x3a,
        ];

        let master = key_gen(&seed).unwrap();
        assert_eq!(master.to_bytes_be(), expected_master);
        let child = derive_child_sk(&master, 0);
        assert_eq!(child.to_bytes_be(), expected_child);
    }
}
