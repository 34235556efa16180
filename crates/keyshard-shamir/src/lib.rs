//! Keyshard Shamir Module
//!
//! Split and reconstruct arbitrary secrets using Shamir's Secret Sharing over
//! a large prime field.
//!
//! # How it works
//!
//! - The secret is cut into 32-byte chunks, each treated as one field element
//! - Every chunk gets its own random polynomial of degree `threshold - 1`
//! - Share `i` holds the value of every chunk polynomial at `x = i`
//! - Any `threshold` shares recover each chunk by Lagrange interpolation at 0
//!
//! Shares carry no integrity protection. Combining too few shares, or shares
//! from different splits, silently yields the wrong secret.
//!
//! # Example: Split a recovery phrase
//!
//! ```
//! use keyshard_shamir::{combine, create};
//!
//! let secret = b"correct horse battery staple";
//!
//! // Split into 2-of-3 shares
//! let shares = create(2, 3, secret).unwrap();
//! assert_eq!(shares.len(), 3);
//!
//! // Recover with any 2 shares
//! let recovered = combine(&shares[1..]).unwrap();
//! assert_eq!(recovered, secret);
//! ```

pub mod chunks;
pub mod codec;
pub mod field;
pub mod polynomial;
pub mod shamir;
pub mod shares;

// Re-exports
pub use field::{FieldElement, FieldParams};
pub use shamir::{combine, combine_to_string, combine_with, create, create_with, reconstruct_secret};
pub use shares::{is_valid_share, parse_share, Share};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShamirError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("Secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),
    #[error("Element has no inverse in the field")]
    NonInvertibleElement,
    #[error("Duplicate x-coordinate {0} in interpolation points")]
    DuplicateXCoordinate(u8),
    #[error("Malformed share encoding: {0}")]
    MalformedShareEncoding(String),
    #[error("Mismatched shares: {0}")]
    MismatchedShares(String),
}

/// Largest share count; x-coordinates are single bytes
pub const MAX_SHARES: u8 = u8::MAX;

/// Configuration for Shamir split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShamirConfig {
    /// Minimum shares needed to reconstruct (M)
    pub threshold: u8,
    /// Total shares to generate (N)
    pub total_shares: u8,
}

impl ShamirConfig {
    /// Build and validate a configuration
    pub fn new(threshold: u8, total_shares: u8) -> Result<Self, ShamirError> {
        let config = Self {
            threshold,
            total_shares,
        };
        config.validate()?;
        Ok(config)
    }

    /// Common 2-of-3 setup
    pub fn two_of_three() -> Self {
        Self {
            threshold: 2,
            total_shares: 3,
        }
    }

    /// Common 3-of-5 setup
    pub fn three_of_five() -> Self {
        Self {
            threshold: 3,
            total_shares: 5,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ShamirError> {
        if self.threshold < 2 {
            return Err(ShamirError::InvalidParameters(format!(
                "threshold must be at least 2, got {}",
                self.threshold
            )));
        }
        if self.threshold > self.total_shares {
            return Err(ShamirError::InvalidParameters(format!(
                "threshold {} exceeds share count {}",
                self.threshold, self.total_shares
            )));
        }
        Ok(())
    }
}
