//! Core Shamir's Secret Sharing implementation
//!
//! Split a secret into N shares where any M can reconstruct it.

use crate::chunks::{merge_chunks, split_to_chunks};
use crate::field::FieldParams;
use crate::polynomial::{build_share_set, reconstruct, Point};
use crate::shares::{parse_share, Share};
use crate::{ShamirConfig, ShamirError};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::collections::HashSet;

/// Split a secret into `num_shares` share strings, any `threshold` of which
/// reconstruct it. Uses the default field and the OS random source.
pub fn create(threshold: u8, num_shares: u8, secret: &[u8]) -> Result<Vec<String>, ShamirError> {
    let config = ShamirConfig::new(threshold, num_shares)?;
    create_with(&FieldParams::default(), &config, secret, &mut OsRng)
}

/// Split a secret with explicit field parameters and random source
///
/// # Arguments
/// * `params` - Field the polynomials live in
/// * `config` - Threshold (M) and total share count (N)
/// * `secret` - The secret bytes to split (must be non-empty)
/// * `rng` - Cryptographically secure random source
///
/// # Returns
/// Vector of N share strings, any M of which can reconstruct the secret
pub fn create_with<R: RngCore + CryptoRng>(
    params: &FieldParams,
    config: &ShamirConfig,
    secret: &[u8],
    rng: &mut R,
) -> Result<Vec<String>, ShamirError> {
    config.validate()?;
    if secret.is_empty() {
        log::warn!("Refusing to split an empty secret");
        return Err(ShamirError::InvalidParameters("Empty secret".into()));
    }

    let chunks = split_to_chunks(secret);
    log::debug!(
        "Splitting {}-byte secret ({} chunks) into {}-of-{} shares",
        secret.len(),
        chunks.len(),
        config.threshold,
        config.total_shares
    );

    let mut shares: Vec<Share> = (1..=config.total_shares)
        .map(|i| Share {
            index: i,
            values: Vec::with_capacity(chunks.len()),
        })
        .collect();

    // Independent random polynomial per chunk, evaluated at x = 1, 2, ..., N
    for chunk in &chunks {
        let points = build_share_set(params, config.threshold, config.total_shares, chunk, rng)?;
        for (share, (_, y)) in shares.iter_mut().zip(points) {
            share.values.push(y);
        }
    }

    Ok(shares.iter().map(Share::to_string).collect())
}

/// Reconstruct a secret from share strings using the default field
pub fn combine<S: AsRef<str>>(shares: &[S]) -> Result<Vec<u8>, ShamirError> {
    combine_with(&FieldParams::default(), shares)
}

/// Reconstruct a secret from share strings
///
/// Supplying fewer shares than the original threshold, or shares from
/// different splits, is not detected: the result is simply wrong.
pub fn combine_with<S: AsRef<str>>(
    params: &FieldParams,
    shares: &[S],
) -> Result<Vec<u8>, ShamirError> {
    let parsed = shares
        .iter()
        .map(|s| parse_share(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    reconstruct_secret(params, &parsed)
}

/// Reconstruct a secret from already-parsed shares
pub fn reconstruct_secret(params: &FieldParams, shares: &[Share]) -> Result<Vec<u8>, ShamirError> {
    if shares.is_empty() {
        return Err(ShamirError::InvalidParameters("No shares supplied".into()));
    }

    // All shares must cover the same number of chunks
    let chunk_count = shares[0].chunk_count();
    if shares.iter().any(|s| s.chunk_count() != chunk_count) {
        log::warn!("Rejecting shares with differing chunk counts");
        return Err(ShamirError::MismatchedShares(
            "Shares have different chunk counts".into(),
        ));
    }

    // Check for duplicate indices
    let mut seen = HashSet::with_capacity(shares.len());
    if let Some(dup) = shares.iter().find(|s| !seen.insert(s.index)) {
        log::warn!("Rejecting shares with duplicate index {}", dup.index);
        return Err(ShamirError::MismatchedShares(format!(
            "Duplicate share index {}",
            dup.index
        )));
    }

    log::debug!(
        "Combining {} shares of {} chunks",
        shares.len(),
        chunk_count
    );

    // Reconstruct each chunk using Lagrange interpolation
    let mut chunks = Vec::with_capacity(chunk_count);
    for chunk_idx in 0..chunk_count {
        let points: Vec<Point> = shares
            .iter()
            .map(|s| (s.index, s.values[chunk_idx].clone()))
            .collect();
        chunks.push(reconstruct(params, &points)?);
    }

    Ok(merge_chunks(&chunks).to_vec())
}

/// Reconstruct a secret and decode it as UTF-8
pub fn combine_to_string<S: AsRef<str>>(shares: &[S]) -> Result<String, ShamirError> {
    let bytes = combine(shares)?;
    String::from_utf8(bytes).map_err(|e| {
        ShamirError::MalformedShareEncoding(format!("Recovered secret is not UTF-8: {}", e))
    })
}
