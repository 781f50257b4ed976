//! Per-stage roots of unity derived from a caller-supplied generator.

use alloc::vec::Vec;

use crate::reduce::{mod_mul, pow_mod};

/// Roots consumed by the butterfly stages, one per stage.
///
/// `roots[i] = base^(2^i) mod q`, built by repeated squaring. The
/// Cooley-Tukey schedules read it from the last entry down, Gentleman-Sande
/// from the first entry up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootTable {
    roots: Vec<u64>,
    modulus: u64,
}

impl RootTable {
    /// Table for the Cooley-Tukey schedules: `base = generator^(n - 1)`
    /// with `n = 2^log_n`.
    #[must_use]
    pub fn cooley_tukey(generator: u64, log_n: u32, modulus: u64) -> Self {
        let n = 1u64 << log_n;
        Self::from_base(pow_mod(generator, n - 1, modulus), log_n, modulus)
    }

    /// Table for the Gentleman-Sande schedule: `base = generator`.
    #[must_use]
    pub fn gentleman_sande(generator: u64, log_n: u32, modulus: u64) -> Self {
        Self::from_base(generator % modulus, log_n, modulus)
    }

    fn from_base(base: u64, log_n: u32, modulus: u64) -> Self {
        let mut roots = Vec::with_capacity(log_n as usize);
        let mut root = base;
        for _ in 0..log_n {
            roots.push(root);
            root = mod_mul(root, root, modulus);
        }
        Self { roots, modulus }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> u64 {
        self.roots[index]
    }

    /// Number of entries, equal to `log2(n)`.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_for_q17() {
        // 13^3 = 2197 = 129 * 17 + 4
        let t = RootTable::cooley_tukey(13, 2, 17);
        assert_eq!(t.as_slice(), &[4, 16]);
    }

    #[test]
    fn entries_are_repeated_squares() {
        let q = 998_244_353;
        let t = RootTable::cooley_tukey(3, 10, q);
        assert_eq!(t.len(), 10);
        for i in 0..t.len() {
            assert_eq!(t.get(i), pow_mod(t.get(0), 1 << i, q));
        }
    }

    #[test]
    fn gentleman_sande_starts_at_generator() {
        let t = RootTable::gentleman_sande(13 + 17, 2, 17);
        assert_eq!(t.as_slice(), &[13, 16]);
    }

    #[test]
    fn empty_for_single_element() {
        assert!(RootTable::cooley_tukey(5, 0, 17).is_empty());
    }

    #[test]
    fn last_root_is_minus_one_for_genuine_root() {
        // 2 has order 8 mod 17, so 2^7 is a primitive 8th root as well.
        let t = RootTable::cooley_tukey(2, 3, 17);
        assert_eq!(t.get(2), 16);
        assert_eq!(mod_mul(t.get(2), t.get(2), 17), 1);
    }
}
