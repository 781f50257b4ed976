//! `ntt-math` -- Core primitives for the forward Number-Theoretic Transform.
//!
//! `no_std` modular arithmetic over any `u64` modulus, per-stage root tables,
//! butterfly kernels and the stage schedules that drive them. Inputs are
//! trusted here; the `ntt-rs` crate performs validation.

#![no_std]
#![deny(unsafe_code)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::many_single_char_names
)]

extern crate alloc;

pub mod butterfly;
pub mod ntt;
pub mod reduce;
pub mod roots;
pub mod trace;

pub use ntt::{Schedule, bit_reverse, bit_reverse_permute};
pub use roots::RootTable;
pub use trace::{ButterflyStep, NoTrace, Observer};
