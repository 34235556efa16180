//! Secret <-> field element chunking
//!
//! A secret is hex encoded and cut into fixed 64-digit (32-byte) groups. The
//! final group is right-padded with `'0'` digits. Each group is one field
//! element. Create and Combine must agree on this width.

use crate::field::FieldElement;
use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroizing;

/// Hex digits per chunk
pub const CHUNK_HEX_LEN: usize = 64;

/// Bytes per chunk
pub const CHUNK_BYTES: usize = CHUNK_HEX_LEN / 2;

/// Number of chunks a secret of `len` bytes occupies
pub fn chunk_count(len: usize) -> usize {
    (len * 2).div_ceil(CHUNK_HEX_LEN)
}

/// Split a secret into 256-bit field elements, in order
pub fn split_to_chunks(secret: &[u8]) -> Vec<FieldElement> {
    let hex_data = Zeroizing::new(hex::encode(secret));

    hex_data
        .as_bytes()
        .chunks(CHUNK_HEX_LEN)
        .map(|group| {
            let mut digits = Zeroizing::new([b'0'; CHUNK_HEX_LEN]);
            digits[..group.len()].copy_from_slice(group);
            // Input is always valid hex produced above
            BigUint::parse_bytes(&digits[..], 16).unwrap_or_default()
        })
        .collect()
}

/// Merge chunk values back into bytes.
///
/// Each chunk contributes its minimal big-endian encoding, and trailing
/// `0x00` bytes of the result are stripped. Secrets that end in (or have a
/// chunk starting with) zero bytes do not round-trip exactly.
pub fn merge_chunks(chunks: &[FieldElement]) -> Zeroizing<Vec<u8>> {
    let mut merged = Zeroizing::new(Vec::with_capacity(chunks.len() * CHUNK_BYTES));
    for chunk in chunks {
        if chunk.is_zero() {
            continue;
        }
        merged.extend_from_slice(&Zeroizing::new(chunk.to_bytes_be()));
    }

    let trimmed = merged.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    merged.truncate(trimmed);
    merged
}
