//! Share string layout
//!
//! A share is written as one `<x>:<y>` pair per chunk, pairs separated by
//! `,`, where both halves are base64 field elements (see [`crate::codec`]).
//! Every pair in one share carries the same x-coordinate.

use crate::codec;
use crate::field::FieldElement;
use crate::ShamirError;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const PAIR_SEPARATOR: char = ',';
const COORD_SEPARATOR: char = ':';

/// One participant's share of a secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// Share index / x-coordinate (1..=N, never 0)
    pub index: u8,
    /// One y-value per secret chunk, in chunk order
    pub values: Vec<FieldElement>,
}

impl Share {
    /// Number of chunks this share covers
    pub fn chunk_count(&self) -> usize {
        self.values.len()
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = codec::encode(&BigUint::from(self.index));
        for (i, y) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", PAIR_SEPARATOR)?;
            }
            write!(f, "{}{}{}", x, COORD_SEPARATOR, codec::encode(y))?;
        }
        Ok(())
    }
}

impl FromStr for Share {
    type Err = ShamirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_share(s)
    }
}

/// Parse a share string into its index and per-chunk values
pub fn parse_share(input: &str) -> Result<Share, ShamirError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ShamirError::MalformedShareEncoding("Empty share".into()));
    }

    let mut index = None;
    let mut values = Vec::new();

    for pair in trimmed.split(PAIR_SEPARATOR) {
        let (x_text, y_text) = pair.split_once(COORD_SEPARATOR).ok_or_else(|| {
            ShamirError::MalformedShareEncoding(format!(
                "Expected '<x>{}<y>' pair, got {:?}",
                COORD_SEPARATOR, pair
            ))
        })?;

        let x = parse_index(x_text)?;
        match index {
            None => index = Some(x),
            Some(expected) if expected != x => {
                return Err(ShamirError::MalformedShareEncoding(format!(
                    "Share mixes x-coordinates {} and {}",
                    expected, x
                )));
            }
            Some(_) => {}
        }

        values.push(codec::decode(y_text)?);
    }

    // split() always yields at least one item, so index is set here
    let index = index.ok_or_else(|| ShamirError::MalformedShareEncoding("Empty share".into()))?;
    Ok(Share { index, values })
}

fn parse_index(text: &str) -> Result<u8, ShamirError> {
    let x = codec::decode(text)?;
    match x.to_u8() {
        Some(0) | None => Err(ShamirError::MalformedShareEncoding(format!(
            "x-coordinate {} outside 1..=255",
            x
        ))),
        Some(v) => Ok(v),
    }
}

/// Check whether a string is a structurally valid share
pub fn is_valid_share(input: &str) -> bool {
    parse_share(input).is_ok()
}
