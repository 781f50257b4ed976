//! Modular reduction and exponentiation over an arbitrary `u64` modulus.
//!
//! Products are widened to `u128` before reduction and sums track the carry
//! out of bit 63, so every modulus in `2..=u64::MAX` is overflow-free.
//! Operands of [`mod_add`], [`mod_sub`] and [`mod_mul`] must already be
//! reduced (`< q`).

/// `a mod q`.
#[inline]
#[must_use]
pub const fn reduce(a: u64, q: u64) -> u64 {
    a % q
}

/// `(a + b) mod q` for `a, b < q`.
#[inline]
#[must_use]
pub const fn mod_add(a: u64, b: u64, q: u64) -> u64 {
    let (sum, carry) = a.overflowing_add(b);
    if carry || sum >= q { sum.wrapping_sub(q) } else { sum }
}

/// `(a - b) mod q` for `a, b < q`, always in `[0, q)`.
#[inline]
#[must_use]
pub const fn mod_sub(a: u64, b: u64, q: u64) -> u64 {
    if a >= b { a - b } else { q - b + a }
}

/// `(a * b) mod q` through a 128-bit intermediate.
#[inline]
#[must_use]
pub const fn mod_mul(a: u64, b: u64, q: u64) -> u64 {
    ((a as u128 * b as u128) % q as u128) as u64
}

/// `base^exp mod modulus` by right-to-left square-and-multiply.
///
/// `modulus` must be non-zero. A modulus of 1 yields 0.
#[must_use]
pub const fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    debug_assert!(modulus != 0);
    let mut result = 1 % modulus;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mod_mul(result, base, modulus);
        }
        base = mod_mul(base, base, modulus);
        exp >>= 1;
    }
    result
}
