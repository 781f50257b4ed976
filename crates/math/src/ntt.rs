//! Forward Number-Theoretic Transform over `Z_q`, in place.
//!
//! - [`Schedule::CooleyTukey`]: decimation-in-time stages on the input as
//!   given, smallest span first, roots taken from the coarsest table entry
//!   down. No permutation is applied, so the output is not a natural-order
//!   DFT.
//! - [`Schedule::CooleyTukeyBitReversed`]: bit-reversal permutation, then the
//!   same stages. Natural-order DFT with `w = generator^(n-1)`.
//! - [`Schedule::GentlemanSande`]: decimation-in-frequency stages, largest
//!   span first. Bit-reversed DFT with `w = generator`.
//!
//! Nothing here validates its input. Lengths must be powers of two matching
//! the [`RootTable`], and the table must have been built for the schedule.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    butterfly::{self, Block},
    reduce::reduce,
    roots::RootTable,
    trace::Observer,
};

/// Stage ordering of the forward transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Schedule {
    #[default]
    CooleyTukey,
    CooleyTukeyBitReversed,
    GentlemanSande,
}

impl Schedule {
    /// Root table this schedule consumes.
    #[must_use]
    pub fn root_table(self, generator: u64, log_n: u32, modulus: u64) -> RootTable {
        match self {
            Self::CooleyTukey | Self::CooleyTukeyBitReversed => {
                RootTable::cooley_tukey(generator, log_n, modulus)
            }
            Self::GentlemanSande => RootTable::gentleman_sande(generator, log_n, modulus),
        }
    }
}

impl core::fmt::Display for Schedule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::CooleyTukey => "cooley-tukey",
            Self::CooleyTukeyBitReversed => "cooley-tukey-bit-reversed",
            Self::GentlemanSande => "gentleman-sande",
        })
    }
}

/// Reverse the low `bits` bits of `x`.
#[inline]
#[must_use]
pub const fn bit_reverse(x: usize, bits: u32) -> usize {
    if bits == 0 { 0 } else { x.reverse_bits() >> (usize::BITS - bits) }
}

/// Permute `a` into bit-reversed index order. Self-inverse.
pub fn bit_reverse_permute<T>(a: &mut [T]) {
    debug_assert!(a.is_empty() || a.len().is_power_of_two());
    let bits = a.len().trailing_zeros();
    for i in 0..a.len() {
        let j = bit_reverse(i, bits);
        if i < j {
            a.swap(i, j);
        }
    }
}

/// Reduce every element into `[0, q)`.
pub fn reduce_all(a: &mut [u64], q: u64) {
    for x in a.iter_mut() {
        *x = reduce(*x, q);
    }
}

/// Run `schedule` over `a`, whose elements must already be `< q`.
pub fn forward<O: Observer>(a: &mut [u64], schedule: Schedule, roots: &RootTable, obs: &mut O) {
    debug_assert_eq!(a.len(), 1 << roots.len());
    match schedule {
        Schedule::CooleyTukey => cooley_tukey_stages(a, roots, obs),
        Schedule::CooleyTukeyBitReversed => {
            bit_reverse_permute(a);
            cooley_tukey_stages(a, roots, obs);
        }
        Schedule::GentlemanSande => gentleman_sande_stages(a, roots, obs),
    }
}

fn cooley_tukey_stages<O: Observer>(a: &mut [u64], roots: &RootTable, obs: &mut O) {
    let q = roots.modulus();
    let log_n = roots.len();
    let mut stride = 1;
    for stage in 0..log_n {
        let root = roots.get(log_n - 1 - stage);
        for (b, chunk) in a.chunks_exact_mut(2 * stride).enumerate() {
            let (lo, hi) = chunk.split_at_mut(stride);
            let block = Block { stage: stage as u32, start: b * 2 * stride };
            butterfly::cooley_tukey(lo, hi, root, q, block, obs);
        }
        stride <<= 1;
    }
}

fn gentleman_sande_stages<O: Observer>(a: &mut [u64], roots: &RootTable, obs: &mut O) {
    let q = roots.modulus();
    let mut stride = a.len() >> 1;
    for stage in 0..roots.len() {
        let root = roots.get(stage);
        for (b, chunk) in a.chunks_exact_mut(2 * stride).enumerate() {
            let (lo, hi) = chunk.split_at_mut(stride);
            let block = Block { stage: stage as u32, start: b * 2 * stride };
            butterfly::gentleman_sande(lo, hi, root, q, block, obs);
        }
        stride >>= 1;
    }
}

/// [`forward`] with the blocks of each stage spread over the rayon pool.
///
/// Stages still run one after another. Output is identical to [`forward`].
#[cfg(feature = "parallel")]
pub fn forward_parallel(a: &mut [u64], schedule: Schedule, roots: &RootTable) {
    use crate::trace::NoTrace;

    debug_assert_eq!(a.len(), 1 << roots.len());
    let q = roots.modulus();
    let log_n = roots.len();
    match schedule {
        Schedule::CooleyTukey | Schedule::CooleyTukeyBitReversed => {
            if schedule == Schedule::CooleyTukeyBitReversed {
                bit_reverse_permute(a);
            }
            let mut stride = 1;
            for stage in 0..log_n {
                let root = roots.get(log_n - 1 - stage);
                a.par_chunks_exact_mut(2 * stride).enumerate().for_each(|(b, chunk)| {
                    let (lo, hi) = chunk.split_at_mut(stride);
                    let block = Block { stage: stage as u32, start: b * 2 * stride };
                    butterfly::cooley_tukey(lo, hi, root, q, block, &mut NoTrace);
                });
                stride <<= 1;
            }
        }
        Schedule::GentlemanSande => {
            let mut stride = a.len() >> 1;
            for stage in 0..log_n {
                let root = roots.get(stage);
                a.par_chunks_exact_mut(2 * stride).enumerate().for_each(|(b, chunk)| {
                    let (lo, hi) = chunk.split_at_mut(stride);
                    let block = Block { stage: stage as u32, start: b * 2 * stride };
                    butterfly::gentleman_sande(lo, hi, root, q, block, &mut NoTrace);
                });
                stride >>= 1;
            }
        }
    }
}
