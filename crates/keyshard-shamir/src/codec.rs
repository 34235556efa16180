//! Base64 text encoding of field elements
//!
//! Elements are written as URL-safe base64 of their minimal big-endian bytes.
//! No width is enforced on decode.

use crate::field::FieldElement;
use crate::ShamirError;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use num_bigint::BigUint;

/// Encode a field element as URL-safe base64
pub fn encode(element: &FieldElement) -> String {
    URL_SAFE.encode(element.to_bytes_be())
}

/// Decode URL-safe base64 into a field element of whatever width the bytes imply
pub fn decode(text: &str) -> Result<FieldElement, ShamirError> {
    let bytes = URL_SAFE
        .decode(text)
        .map_err(|e| ShamirError::MalformedShareEncoding(format!("invalid base64: {}", e)))?;
    Ok(BigUint::from_bytes_be(&bytes))
}
