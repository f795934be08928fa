//! Modular integer arithmetic over word-sized moduli.
//!
//! Every function takes the modulus `p` explicitly. Results are always
//! canonical representatives in `[0, p)`. Unless noted otherwise the modulus
//! must be greater than 1; it is never checked for primality.

use crate::{Error, Result};

/// Check that `p` is usable as a field modulus, i.e. `p >= 2`.
///
/// Primality is not checked.
pub fn check_modulus(p: i64) -> Result<i64> {
    if p < 2 {
        return Err(Error::InvalidModulus(p));
    }

    Ok(p)
}

/// Returns the unique representative of `n` modulo `p` in `[0, p)`.
///
/// Negative inputs are shifted up by a multiple of `p` rather than negated,
/// so the result is correct for every `n`, including `i64::MIN`.
///
/// `p` must be positive.
#[inline]
pub const fn reduce(n: i64, p: i64) -> i64 {
    n.rem_euclid(p)
}

/// Returns `(x + y) mod p`.
#[inline]
pub const fn add_mod(x: i64, y: i64, p: i64) -> i64 {
    (x as i128 + y as i128).rem_euclid(p as i128) as i64
}

/// Returns `(x - y) mod p`.
#[inline]
pub const fn sub_mod(x: i64, y: i64, p: i64) -> i64 {
    (x as i128 - y as i128).rem_euclid(p as i128) as i64
}

/// Returns `-x mod p`.
#[inline]
pub const fn neg_mod(x: i64, p: i64) -> i64 {
    sub_mod(0, x, p)
}

/// Returns `(x * y) mod p`.
///
/// The product is formed in 128-bit arithmetic, so it never overflows.
#[inline]
pub const fn mul_mod(x: i64, y: i64, p: i64) -> i64 {
    (x as i128 * y as i128).rem_euclid(p as i128) as i64
}

/// Returns `base^exponent mod p` using recursive square-and-multiply.
///
/// `base^0` is `1 mod p`.
pub fn pow_mod(p: i64, base: i64, exponent: u64) -> i64 {
    if exponent == 0 {
        return reduce(1, p);
    }

    let half = pow_mod(p, base, exponent / 2);
    let squared = mul_mod(half, half, p);

    if exponent % 2 == 0 {
        squared
    } else {
        mul_mod(squared, reduce(base, p), p)
    }
}

/// Returns the multiplicative inverse of `n` modulo `p`, computed as
/// `n^(p - 2) mod p` (Fermat's little theorem).
///
/// Returns `None` when `n ≡ 0 (mod p)`. If `p` is not prime the result is
/// simply wrong; no error is signaled.
pub fn inverse_mod(p: i64, n: i64) -> Option<i64> {
    let n = reduce(n, p);

    if n == 0 {
        return None;
    }

    Some(pow_mod(p, n, (p - 2) as u64))
}

/// Returns `x * y^-1 mod p`.
///
/// Returns `None` exactly when [`inverse_mod`] does, i.e. when `y ≡ 0 (mod p)`.
pub fn divide_mod(p: i64, x: i64, y: i64) -> Option<i64> {
    inverse_mod(p, y).map(|inv| mul_mod(x, inv, p))
}
