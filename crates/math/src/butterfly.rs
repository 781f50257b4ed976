//! Butterfly kernels over one block of a stage.
//!
//! A block is the window `[start, start + 2 * stride)` split into `lo` and
//! `hi` halves. Pair `j` uses twiddle `root^j`, produced by a running product.

use crate::{
    reduce::{mod_add, mod_mul, mod_sub},
    trace::{ButterflyStep, Observer},
};

/// Position of a block inside the transform, for trace events.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub stage: u32,
    pub start: usize,
}

/// Cooley-Tukey butterfly: `(lo, hi) <- (lo + w*hi, lo - w*hi)`.
#[inline]
pub fn cooley_tukey<O: Observer>(
    lo: &mut [u64], hi: &mut [u64], root: u64, q: u64, block: Block, obs: &mut O,
) {
    debug_assert_eq!(lo.len(), hi.len());
    let stride = lo.len();
    let mut twiddle = 1 % q;
    for (j, (a, b)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
        let t = mod_mul(twiddle, *b, q);
        let x = *a;
        *a = mod_add(x, t, q);
        *b = mod_sub(x, t, q);
        obs.butterfly(&ButterflyStep {
            stage: block.stage,
            stride,
            lo: block.start + j,
            hi: block.start + j + stride,
            twiddle,
            lo_value: *a,
            hi_value: *b,
        });
        twiddle = mod_mul(twiddle, root, q);
    }
}

/// Gentleman-Sande butterfly: `(lo, hi) <- (lo + hi, w*(lo - hi))`.
#[inline]
pub fn gentleman_sande<O: Observer>(
    lo: &mut [u64], hi: &mut [u64], root: u64, q: u64, block: Block, obs: &mut O,
) {
    debug_assert_eq!(lo.len(), hi.len());
    let stride = lo.len();
    let mut twiddle = 1 % q;
    for (j, (a, b)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
        let (x, y) = (*a, *b);
        *a = mod_add(x, y, q);
        *b = mod_mul(twiddle, mod_sub(x, y, q), q);
        obs.butterfly(&ButterflyStep {
            stage: block.stage,
            stride,
            lo: block.start + j,
            hi: block.start + j + stride,
            twiddle,
            lo_value: *a,
            hi_value: *b,
        });
        twiddle = mod_mul(twiddle, root, q);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::{reduce::pow_mod, trace::NoTrace};

    const Q: u64 = 12289;
    const ORIGIN: Block = Block { stage: 0, start: 0 };

    fn sample(len: usize, mul: u64, add: u64) -> Vec<u64> {
        (0..len as u64).map(|i| (i * mul + add) % Q).collect()
    }

    #[test]
    fn cooley_tukey_matches_literal_twiddles() {
        let root = 1479;
        let mut lo = sample(16, 13, 5);
        let mut hi = sample(16, 7, 100);
        let (lo_s, hi_s) = (lo.clone(), hi.clone());

        cooley_tukey(&mut lo, &mut hi, root, Q, ORIGIN, &mut NoTrace);
        for j in 0..16 {
            let w = pow_mod(root, j as u64, Q);
            let t = w * hi_s[j] % Q;
            assert_eq!(lo[j], (lo_s[j] + t) % Q);
            assert_eq!(hi[j], (lo_s[j] + Q - t) % Q);
        }
    }

    #[test]
    fn gentleman_sande_matches_literal_twiddles() {
        let root = 8246;
        let mut lo = sample(8, 11, 200);
        let mut hi = sample(8, 5, 50);
        let (lo_s, hi_s) = (lo.clone(), hi.clone());

        gentleman_sande(&mut lo, &mut hi, root, Q, ORIGIN, &mut NoTrace);
        for j in 0..8 {
            let w = pow_mod(root, j as u64, Q);
            assert_eq!(lo[j], (lo_s[j] + hi_s[j]) % Q);
            assert_eq!(hi[j], w * ((lo_s[j] + Q - hi_s[j]) % Q) % Q);
        }
    }

    #[test]
    fn reports_every_pair() {
        let mut lo = sample(4, 1, 0);
        let mut hi = sample(4, 2, 1);
        let mut seen = Vec::new();
        let block = Block { stage: 3, start: 8 };
        cooley_tukey(&mut lo, &mut hi, 2, Q, block, &mut |s: &ButterflyStep| seen.push(*s));

        assert_eq!(seen.len(), 4);
        for (j, s) in seen.iter().enumerate() {
            assert_eq!((s.stage, s.stride), (3, 4));
            assert_eq!((s.lo, s.hi), (8 + j, 12 + j));
            assert_eq!(s.twiddle, 1 << j);
            assert_eq!((s.lo_value, s.hi_value), (lo[j], hi[j]));
        }
    }
}
