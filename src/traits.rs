use crate::errors::ByteConversionError;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Gives a byte representation to a type, and allows reconstructing it from
/// that representation. Big-endian unless a `_le` variant is named.
pub trait ByteConversion {
    #[cfg(feature = "alloc")]
    fn to_bytes_be(&self) -> Vec<u8>;

    #[cfg(feature = "alloc")]
    fn to_bytes_le(&self) -> Vec<u8>;

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ByteConversionError>
    where
        Self: Sized;

    fn from_bytes_le(bytes: &[u8]) -> Result<Self, ByteConversionError>
    where
        Self: Sized;
}
