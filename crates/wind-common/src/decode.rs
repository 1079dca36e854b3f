//! Decode contract for encoded wind-field payloads.

use crate::error::WindResult;
use crate::field::WindField;

/// Turns an encoded grid payload into a wind field.
///
/// The contract is in-memory on both sides; any disk buffering a format
/// library may need is the implementation's own scoped concern. Fails
/// with [`crate::WindError::Decode`] when the payload is not a
/// recognized grid format or the expected component variables are
/// absent.
pub trait WindDecoder {
    fn decode(&self, payload: &[u8]) -> WindResult<WindField>;
}
