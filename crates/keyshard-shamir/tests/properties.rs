//! Property tests for split/combine across thresholds, share counts and
//! secret lengths.
//!
//! Secrets are drawn without `0x00` bytes: zero bytes at the end of the secret
//! or at the start of a 32-byte chunk are dropped by the chunk merge.

use keyshard_shamir::codec::{decode, encode};
use keyshard_shamir::{combine, create, FieldParams, ShamirError};
use num_bigint::BigUint;
use proptest::prelude::*;
use proptest::sample::subsequence;

prop_compose! {
    /// (threshold, total) with 2 <= threshold <= total <= 20
    fn scheme()(total in 2u8..=20)(threshold in 2u8..=total, total in Just(total)) -> (u8, u8) {
        (threshold, total)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn any_threshold_subset_recovers(
        secret in prop::collection::vec(1u8..=255, 1..=256),
        (threshold, total) in scheme(),
        seed in any::<u64>(),
    ) {
        let shares = create(threshold, total, &secret).unwrap();
        prop_assert_eq!(shares.len(), total as usize);

        // Deterministic subset of exactly `threshold` shares
        let mut picked: Vec<&String> = shares.iter().collect();
        let offset = (seed % total as u64) as usize;
        picked.rotate_left(offset);
        picked.truncate(threshold as usize);

        prop_assert_eq!(combine(&picked).unwrap(), secret);
    }

    #[test]
    fn subsequence_of_threshold_size_recovers(
        secret in prop::collection::vec(1u8..=255, 1..=64),
        picked in subsequence((0..7usize).collect::<Vec<_>>(), 4),
    ) {
        let shares = create(4, 7, &secret).unwrap();
        let chosen: Vec<&String> = picked.iter().map(|&i| &shares[i]).collect();
        prop_assert_eq!(combine(&chosen).unwrap(), secret);
    }

    #[test]
    fn codec_round_trips(bytes in prop::collection::vec(any::<u8>(), 0..=66)) {
        let params = FieldParams::default();
        let x = BigUint::from_bytes_be(&bytes) % params.prime();
        prop_assert_eq!(decode(&encode(&x)).unwrap(), x);
    }
}

#[test]
fn test_fewer_than_threshold_is_wrong() {
    let secret = b"the quick brown fox jumps over the lazy dog";
    let mut wrong = 0;
    for _ in 0..20 {
        let shares = create(4, 6, secret).unwrap();
        if combine(&shares[..3]).unwrap() != secret {
            wrong += 1;
        }
    }
    assert_eq!(wrong, 20);
}

#[test]
fn test_repeated_create_differs() {
    let secret = b"same input twice";
    let first = create(3, 5, secret).unwrap();
    let second = create(3, 5, secret).unwrap();

    assert_ne!(first, second);
    assert_eq!(combine(&first[..3]).unwrap(), secret);
    assert_eq!(combine(&second[2..]).unwrap(), secret);
}

#[test]
fn test_hello_2_of_3() {
    let shares = create(2, 3, b"hello").unwrap();
    assert_eq!(shares.len(), 3);
    for (a, b) in [(0, 1), (0, 2), (1, 2)] {
        assert_eq!(combine(&[&shares[a], &shares[b]]).unwrap(), b"hello");
    }
}

#[test]
fn test_threshold_exceeds_shares() {
    assert!(matches!(
        create(3, 2, b"hello"),
        Err(ShamirError::InvalidParameters(_))
    ));
}

#[test]
fn test_identical_x_coordinates() {
    let first = create(2, 3, b"hello").unwrap();
    let second = create(2, 3, b"hello").unwrap();
    // Both carry x = 1
    assert!(matches!(
        combine(&[&first[0], &second[0]]),
        Err(ShamirError::MismatchedShares(_))
    ));
}

#[test]
fn test_trailing_null_is_trimmed() {
    let shares = create(2, 2, b"seed\x00").unwrap();
    assert_eq!(combine(&shares).unwrap(), b"seed");
}

#[test]
fn test_concurrent_use() {
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            std::thread::spawn(move || {
                let secret = vec![b'a' + i; 50];
                let shares = create(2, 4, &secret).unwrap();
                assert_eq!(combine(&shares[2..]).unwrap(), secret);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
