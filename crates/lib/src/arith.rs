//! Checked modular exponentiation.

use ntt_math::reduce::pow_mod;

use crate::Error;

/// `base^exponent mod modulus`, in `[0, modulus)`.
///
/// Fails with [`Error::InvalidModulus`] for a zero modulus. A modulus of 1
/// is accepted and always yields 0.
///
/// ```
/// assert_eq!(ntt_rs::modpow(3, 5, 17), Ok(5));
/// ```
pub fn modpow(base: u64, exponent: u64, modulus: u64) -> Result<u64, Error> {
    if modulus == 0 {
        return Err(Error::InvalidModulus { modulus });
    }
    Ok(pow_mod(base, exponent, modulus))
}
