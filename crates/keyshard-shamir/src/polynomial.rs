//! Polynomial evaluation and Lagrange interpolation over GF(p)

use crate::field::{FieldElement, FieldParams};
use crate::ShamirError;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// A single (x, y) point on a sharing polynomial
pub type Point = (u8, FieldElement);

/// Evaluate a polynomial at a given x value
/// coefficients[0] is the constant term, coefficients[n-1] is the highest degree
pub fn evaluate(params: &FieldParams, coefficients: &[FieldElement], x: &BigUint) -> FieldElement {
    // Horner's method, reducing after every step
    let mut result = BigUint::zero();
    for coef in coefficients.iter().rev() {
        result = params.add(&params.mul(&result, x), coef);
    }
    result
}

/// Build a fresh random polynomial with `chunk` as its constant term and
/// evaluate it at x = 1..=total.
pub fn build_share_set<R: RngCore + CryptoRng>(
    params: &FieldParams,
    threshold: u8,
    total: u8,
    chunk: &FieldElement,
    rng: &mut R,
) -> Result<Vec<Point>, ShamirError> {
    // p(x) = chunk + c1*x + c2*x^2 + ... + c_{t-1}*x^{t-1}
    let mut coefficients = Vec::with_capacity(threshold as usize);
    coefficients.push(params.reduce(chunk));
    for _ in 1..threshold {
        coefficients.push(params.random(rng)?);
    }

    let points = (1..=total)
        .map(|x| (x, evaluate(params, &coefficients, &BigUint::from(x))))
        .collect();
    Ok(points)
}

/// Lagrange interpolation to recover f(0)
/// points: (x, y) where x is the share index and y is the share value
pub fn reconstruct(params: &FieldParams, points: &[Point]) -> Result<FieldElement, ShamirError> {
    let mut secret = BigUint::zero();

    for (i, &(index, ref yi)) in points.iter().enumerate() {
        let xi = BigUint::from(index);
        let mut numerator = BigUint::one();
        let mut denominator = BigUint::one();

        for (j, (xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let xj = BigUint::from(*xj);
            // numerator *= (0 - xj)
            numerator = params.mul(&numerator, &params.sub(&BigUint::zero(), &xj));
            // denominator *= (xi - xj)
            let term = params.sub(&xi, &xj);
            if term.is_zero() {
                return Err(ShamirError::DuplicateXCoordinate(index));
            }
            denominator = params.mul(&denominator, &term);
        }

        // Lagrange basis polynomial Li(0) = numerator / denominator
        let li = params.mul(&numerator, &params.mod_inverse(&denominator)?);
        secret = params.add(&secret, &params.mul(yi, &li));
    }

    Ok(secret)
}
