//! `expand_message_xmd` from the hash-to-curve draft, parametrized on
//! SHA-256 as BLS12-381's ciphersuites require.

use alloc::vec;
use alloc::vec::Vec;
use sha2::{Digest, Sha256};

const B_IN_BYTES: usize = 32;
const S_IN_BYTES: usize = 64;

/// Expands `msg` into `len_in_bytes` pseudorandom bytes, domain-separated by
/// `dst`, per `expand_message_xmd` (RFC 9380 §5.3.1) instantiated with
/// SHA-256.
pub fn expand_message_xmd(msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Vec<u8> {
    assert!(dst.len() <= 255, "DST must be at most 255 bytes");
    let ell = len_in_bytes.div_ceil(B_IN_BYTES);
    assert!(ell <= 255, "requested output too long for a single expand_message_xmd call");

    let dst_prime: Vec<u8> = dst.iter().copied().chain(core::iter::once(dst.len() as u8)).collect();
    let z_pad = vec![0_u8; S_IN_BYTES];
    let l_i_b_str = (len_in_bytes as u16).to_be_bytes();

    let mut msg_prime = Vec::with_capacity(z_pad.len() + msg.len() + 2 + 1 + dst_prime.len());
    msg_prime.extend_from_slice(&z_pad);
    msg_prime.extend_from_slice(msg);
    msg_prime.extend_from_slice(&l_i_b_str);
    msg_prime.push(0_u8);
    msg_prime.extend_from_slice(&dst_prime);

    let b0 = Sha256::digest(&msg_prime);

    let mut b1_input = Vec::with_capacity(b0.len() + 1 + dst_prime.len());
    b1_input.extend_from_slice(&b0);
    b1_input.push(1_u8);
    b1_input.extend_from_slice(&dst_prime);
    let mut b_prev = Sha256::digest(&b1_input).to_vec();

    let mut uniform_bytes = b_prev.clone();
    for i in 2..=ell {
        let xored: Vec<u8> = b0.iter().zip(b_prev.iter()).map(|(x, y)| x ^ y).collect();
        let mut input = Vec::with_capacity(xored.len() + 1 + dst_prime.len());
        input.extend_from_slice(&xored);
        input.push(i as u8);
        input.extend_from_slice(&dst_prime);
        b_prev = Sha256::digest(&input).to_vec();
        uniform_bytes.extend_from_slice(&b_prev);
    }

    uniform_bytes.truncate(len_in_bytes);
    uniform_bytes
}
