//! Prime field GF(p) arithmetic for Shamir's Secret Sharing
//!
//! Every element is a [`BigUint`] in `[0, p-1]`. The modulus lives in an
//! immutable [`FieldParams`] value that is passed by reference into every
//! operation, so independent schemes with different primes can coexist.

use crate::ShamirError;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// An element of GF(p)
pub type FieldElement = BigUint;

/// Decimal form of the default modulus, the Mersenne prime 2^521 - 1.
///
/// Any 256-bit chunk value is strictly below it.
pub const DEFAULT_PRIME: &str = "6864797660130609714981900799081393217269435300143305409394463459185543183397656052122559640661454554977296311391480858037121987999716643812574028291115057151";

/// Bit width a chunk may occupy; the modulus must be larger than any such value.
const CHUNK_BITS: u64 = 256;

/// Immutable field parameters shared by Create and Combine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParams {
    prime: BigUint,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            prime: (BigUint::one() << 521u32) - BigUint::one(),
        }
    }
}

impl FieldParams {
    /// Use a caller-supplied prime.
    ///
    /// The value is not primality-tested. It must exceed 2^256 so that every
    /// chunk fits in the field.
    pub fn new(prime: BigUint) -> Result<Self, ShamirError> {
        if prime.bits() <= CHUNK_BITS {
            return Err(ShamirError::InvalidParameters(format!(
                "prime must exceed 2^{}, got a {}-bit modulus",
                CHUNK_BITS,
                prime.bits()
            )));
        }
        Ok(Self { prime })
    }

    /// The modulus p
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Reduce an arbitrary integer into the field
    #[inline]
    pub fn reduce(&self, a: &BigUint) -> FieldElement {
        a % &self.prime
    }

    /// (a + b) mod p
    #[inline]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> FieldElement {
        (a + b) % &self.prime
    }

    /// (a - b) mod p, never negative
    #[inline]
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> FieldElement {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a - b
        } else {
            &self.prime - b + a
        }
    }

    /// (a * b) mod p
    #[inline]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> FieldElement {
        (a * b) % &self.prime
    }

    /// Draw a uniformly random element of `[0, p-1]`.
    ///
    /// Uses rejection sampling over `bits(p)` random bits. A failing source
    /// surfaces as [`ShamirError::RandomnessUnavailable`].
    pub fn random<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<FieldElement, ShamirError> {
        let bits = self.prime.bits();
        let len = bits.div_ceil(8) as usize;
        // Bits of the most significant byte that belong to the modulus
        let top_bits = (bits - 1) % 8 + 1;
        let mask = (0xFFu16 >> (8 - top_bits)) as u8;

        let mut buf = vec![0u8; len];
        loop {
            rng.try_fill_bytes(&mut buf)
                .map_err(|e| ShamirError::RandomnessUnavailable(e.to_string()))?;
            buf[0] &= mask;
            let candidate = BigUint::from_bytes_be(&buf);
            if candidate < self.prime {
                return Ok(candidate);
            }
        }
    }

    /// Multiplicative inverse of `a` modulo p via the extended Euclidean algorithm.
    ///
    /// Fails with [`ShamirError::NonInvertibleElement`] when `a ≡ 0 (mod p)`.
    pub fn mod_inverse(&self, a: &BigUint) -> Result<FieldElement, ShamirError> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(ShamirError::NonInvertibleElement);
        }

        let p = BigInt::from_biguint(Sign::Plus, self.prime.clone());
        let (mut old_r, mut r) = (BigInt::from_biguint(Sign::Plus, a), p.clone());
        let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

        while !r.is_zero() {
            let q = &old_r / &r;
            let next_r = &old_r - &q * &r;
            old_r = std::mem::replace(&mut r, next_r);
            let next_s = &old_s - &q * &s;
            old_s = std::mem::replace(&mut s, next_s);
        }

        // gcd != 1 only happens with a composite modulus
        if !old_r.is_one() {
            return Err(ShamirError::NonInvertibleElement);
        }

        old_s
            .mod_floor(&p)
            .to_biguint()
            .ok_or(ShamirError::NonInvertibleElement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn test_default_prime_matches_constant() {
        let params = FieldParams::default();
        let expected: BigUint = DEFAULT_PRIME.parse().unwrap();
        assert_eq!(params.prime(), &expected);
        assert_eq!(params.prime().bits(), 521);
    }

    #[test]
    fn test_rejects_small_prime() {
        // 2^255 - 19
        let p25519 = (BigUint::one() << 255u32) - BigUint::from(19u32);
        assert!(matches!(
            FieldParams::new(p25519),
            Err(ShamirError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_sub_wraps() {
        let params = FieldParams::default();
        let one = BigUint::one();
        let two = BigUint::from(2u32);
        assert_eq!(params.sub(&one, &two), params.prime() - &one);
        assert_eq!(params.sub(&two, &one), one);
    }

    #[test]
    fn test_mod_inverse() {
        let params = FieldParams::default();
        for a in [1u64, 2, 3, 255, 65537, u64::MAX] {
            let a = BigUint::from(a);
            let inv = params.mod_inverse(&a).unwrap();
            assert_eq!(params.mul(&a, &inv), BigUint::one(), "failed for a={}", a);
        }

        let p_minus_one = params.prime() - BigUint::one();
        let inv = params.mod_inverse(&p_minus_one).unwrap();
        // (-1)^-1 = -1
        assert_eq!(inv, p_minus_one);
    }

    #[test]
    fn test_mod_inverse_of_zero() {
        let params = FieldParams::default();
        assert!(matches!(
            params.mod_inverse(&BigUint::zero()),
            Err(ShamirError::NonInvertibleElement)
        ));
        // p itself reduces to zero
        let p = params.prime().clone();
        assert!(matches!(
            params.mod_inverse(&p),
            Err(ShamirError::NonInvertibleElement)
        ));
    }

    #[test]
    fn test_random_in_range() {
        let params = FieldParams::default();
        let mut rng = OsRng;
        let a = params.random(&mut rng).unwrap();
        let b = params.random(&mut rng).unwrap();
        assert!(&a < params.prime());
        assert!(&b < params.prime());
        assert_ne!(a, b);
    }

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!("only try_fill_bytes is used")
        }
        fn next_u64(&mut self) -> u64 {
            unreachable!("only try_fill_bytes is used")
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!("only try_fill_bytes is used")
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source offline"))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn test_random_fails_closed() {
        let params = FieldParams::default();
        assert!(matches!(
            params.random(&mut BrokenRng),
            Err(ShamirError::RandomnessUnavailable(_))
        ));
    }
}
