use thiserror::Error;

/// Errors raised while converting between field/group elements and their
/// big-endian byte encodings.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ByteConversionError {
    #[error("Could not read field element from big-endian bytes")]
    FromBEBytesError,
    #[error("Could not read field element from little-endian bytes")]
    FromLEBytesError,
    #[error("Value is not a valid field or group element")]
    InvalidValue,
    #[error("Point is on the curve but not in the prime-order subgroup")]
    PointNotInSubgroup,
    #[error("Value is not a compressed point encoding")]
    ValueNotCompressed,
}

/// Errors raised by the pairing engine.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PairingError {
    #[error("One of the points supplied to the pairing is not in its prime-order subgroup")]
    PointNotInSubgroup,
}
