//! One-shot forward transforms.
//!
//! Each call validates, builds an [`NttPlan`] and runs it. Callers doing many
//! transforms with the same parameters should hold a plan instead.

use ntt_math::Observer;

use crate::{Error, NttParams, NttPlan};

/// Forward transform of `sequence` under the reference
/// [`Schedule::CooleyTukey`](crate::Schedule::CooleyTukey) ordering.
///
/// `sequence` is left untouched; the result has the same length with every
/// element in `[0, modulus)`. A length-1 input is returned as is.
///
/// `generator` is not checked: one without an order compatible with `n`
/// produces a well-defined but meaningless result.
///
/// # Errors
///
/// [`Error::InvalidLength`] if the length is zero or not a power of two,
/// [`Error::InvalidModulus`] if `modulus < 2`.
pub fn transform(sequence: &[u64], generator: u64, modulus: u64) -> Result<Vec<u64>, Error> {
    let plan = NttPlan::new(sequence.len(), generator, modulus)?;
    run_copy(&plan, sequence, &mut ntt_math::NoTrace)
}

/// [`transform`] writing into `sequence`. On error nothing is written.
pub fn transform_in_place(sequence: &mut [u64], generator: u64, modulus: u64) -> Result<(), Error> {
    NttPlan::new(sequence.len(), generator, modulus)?.forward(sequence)
}

/// [`transform`] with `obs` called once per butterfly, in execution order.
pub fn transform_traced<O: Observer>(
    sequence: &[u64], generator: u64, modulus: u64, obs: &mut O,
) -> Result<Vec<u64>, Error> {
    let plan = NttPlan::new(sequence.len(), generator, modulus)?;
    run_copy(&plan, sequence, obs)
}

/// Forward transform with the generator, modulus and schedule from `params`.
pub fn transform_with(sequence: &[u64], params: &NttParams) -> Result<Vec<u64>, Error> {
    let plan = NttPlan::from_params(sequence.len(), params)?;
    run_copy(&plan, sequence, &mut ntt_math::NoTrace)
}

fn run_copy<O: Observer>(plan: &NttPlan, sequence: &[u64], obs: &mut O) -> Result<Vec<u64>, Error> {
    let mut res = sequence.to_vec();
    plan.forward_traced(&mut res, obs)?;
    Ok(res)
}
