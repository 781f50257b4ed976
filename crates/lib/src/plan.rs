//! Reusable transform plan: the root table for one parameter set, computed
//! once and shared by every call.

use ntt_math::{NoTrace, Observer, RootTable, Schedule, ntt};

use crate::{Error, Modulus, NttParams, log2_len};

/// Precomputed state for transforms of length `n` under fixed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NttPlan {
    log_n: u32,
    modulus: Modulus,
    schedule: Schedule,
    roots: RootTable,
}

impl NttPlan {
    /// Plan for the reference [`Schedule::CooleyTukey`] ordering.
    pub fn new(n: usize, generator: u64, modulus: u64) -> Result<Self, Error> {
        Self::with_schedule(n, generator, modulus, Schedule::CooleyTukey)
    }

    pub fn with_schedule(
        n: usize, generator: u64, modulus: u64, schedule: Schedule,
    ) -> Result<Self, Error> {
        let log_n = log2_len(n)?;
        let modulus = Modulus::new(modulus)?;
        Ok(Self::build(log_n, generator, modulus, schedule))
    }

    pub fn from_params(n: usize, params: &NttParams) -> Result<Self, Error> {
        let log_n = log2_len(n)?;
        Ok(Self::build(log_n, params.generator, params.modulus, params.schedule))
    }

    fn build(log_n: u32, generator: u64, modulus: Modulus, schedule: Schedule) -> Self {
        Self {
            log_n,
            modulus,
            schedule,
            roots: schedule.root_table(generator, log_n, modulus.get()),
        }
    }

    /// Transform `a` in place.
    ///
    /// Fails with [`Error::InvalidLength`] unless `a.len()` equals
    /// [`Self::len`]; `a` is untouched on error.
    pub fn forward(&self, a: &mut [u64]) -> Result<(), Error> {
        self.forward_traced(a, &mut NoTrace)
    }

    /// [`Self::forward`], reporting each butterfly to `obs`.
    pub fn forward_traced<O: Observer>(&self, a: &mut [u64], obs: &mut O) -> Result<(), Error> {
        self.check_len(a.len())?;
        if a.len() == 1 {
            return Ok(());
        }
        ntt::reduce_all(a, self.modulus.get());
        ntt::forward(a, self.schedule, &self.roots, obs);
        Ok(())
    }

    /// [`Self::forward`] with each stage's blocks processed on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn forward_parallel(&self, a: &mut [u64]) -> Result<(), Error> {
        self.check_len(a.len())?;
        if a.len() == 1 {
            return Ok(());
        }
        ntt::reduce_all(a, self.modulus.get());
        ntt::forward_parallel(a, self.schedule, &self.roots);
        Ok(())
    }

    fn check_len(&self, len: usize) -> Result<(), Error> {
        if len == self.len() { Ok(()) } else { Err(Error::InvalidLength { len }) }
    }

    /// Sequence length `n`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        1 << self.log_n
    }

    /// Always `false`; plans have `n >= 1`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    #[must_use]
    pub const fn log_len(&self) -> u32 {
        self.log_n
    }

    #[inline]
    #[must_use]
    pub const fn modulus(&self) -> Modulus {
        self.modulus
    }

    #[inline]
    #[must_use]
    pub const fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Per-stage roots, `log2(n)` entries.
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[u64] {
        self.roots.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_reuse() {
        let plan = NttPlan::new(4, 13, 17).unwrap();
        assert_eq!(plan.roots(), &[4, 16]);
        for _ in 0..3 {
            let mut a = [2, 5, 3, 7];
            plan.forward(&mut a).unwrap();
            assert_eq!(a, [0, 15, 14, 13]);
        }
    }

    #[test]
    fn rejects_mismatched_length() {
        let plan = NttPlan::new(8, 2, 17).unwrap();
        let mut a = [1u64, 2, 3, 4];
        assert_eq!(plan.forward(&mut a), Err(Error::InvalidLength { len: 4 }));
        assert_eq!(a, [1, 2, 3, 4]);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(NttPlan::new(6, 2, 17), Err(Error::InvalidLength { len: 6 }));
        assert_eq!(NttPlan::new(0, 2, 17), Err(Error::InvalidLength { len: 0 }));
        assert_eq!(NttPlan::new(4, 2, 1), Err(Error::InvalidModulus { modulus: 1 }));
    }

    #[test]
    fn accessors() {
        let params = NttParams::new(3, 17).unwrap().with_schedule(Schedule::GentlemanSande);
        let plan = NttPlan::from_params(16, &params).unwrap();
        assert_eq!(plan.len(), 16);
        assert_eq!(plan.log_len(), 4);
        assert_eq!(plan.modulus().get(), 17);
        assert_eq!(plan.schedule(), Schedule::GentlemanSande);
        assert_eq!(plan.roots(), &[3, 9, 13, 16]);
        assert!(!plan.is_empty());
    }

    #[test]
    fn single_element_plan_is_identity() {
        let plan = NttPlan::new(1, 5, 17).unwrap();
        let mut a = [99u64];
        plan.forward(&mut a).unwrap();
        assert_eq!(a, [99]);
        assert!(plan.roots().is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_forward() {
        let q = 998_244_353;
        let g = crate::modpow(3, (q - 1) >> 12, q).unwrap();
        let plan = NttPlan::new(1 << 12, g, q).unwrap();
        let input: Vec<u64> = (0..1u64 << 12).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
        let mut seq = input.clone();
        let mut par = input;
        plan.forward(&mut seq).unwrap();
        plan.forward_parallel(&mut par).unwrap();
        assert_eq!(seq, par);
    }
}
