//! `ntt-rs` -- Checked forward Number-Theoretic Transform over `Z_q`.
//!
//! Entry points validate the sequence length and modulus before touching any
//! data, then run one of the [`Schedule`]s from [`ntt_math`]:
//!
//! ```
//! let out = ntt_rs::transform(&[2, 5, 3, 7], 13, 17).unwrap();
//! assert_eq!(out, [0, 15, 14, 13]);
//! ```

#![deny(unsafe_code)]
#![allow(clippy::cast_possible_truncation)]

pub mod arith;
pub mod params;
pub mod plan;
pub mod transform;

pub use arith::modpow;
pub use ntt_math as math;
pub use ntt_math::{ButterflyStep, NoTrace, Observer, Schedule};
pub use params::{Modulus, NttParams};
pub use plan::NttPlan;
pub use transform::{transform, transform_in_place, transform_traced, transform_with};

/// Errors returned by the checked entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Sequence length is zero, not a power of two, or differs from the
    /// length a plan was built for.
    InvalidLength {
        /// Length received.
        len: usize,
    },
    /// Modulus is too small for the requested operation.
    InvalidModulus {
        /// Modulus received.
        modulus: u64,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { len } => write!(f, "invalid sequence length: {len}"),
            Self::InvalidModulus { modulus } => write!(f, "invalid modulus: {modulus}"),
        }
    }
}

impl core::error::Error for Error {}

/// `log2(len)` for a non-zero power of two.
pub(crate) fn log2_len(len: usize) -> Result<u32, Error> {
    if len.is_power_of_two() {
        Ok(len.trailing_zeros())
    } else {
        Err(Error::InvalidLength { len })
    }
}
