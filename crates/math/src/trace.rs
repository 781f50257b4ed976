//! Per-butterfly observation hook.
//!
//! Every schedule in [`crate::ntt`] reports each butterfly it performs to an
//! [`Observer`]. [`NoTrace`] compiles away; any `FnMut(&ButterflyStep)`
//! closure is an observer.

/// One completed butterfly.
///
/// `lo_value` / `hi_value` are the values written to `lo` and `hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButterflyStep {
    /// Zero-based stage number, in execution order.
    pub stage: u32,
    /// Distance between the paired elements.
    pub stride: usize,
    /// Index of the first element of the pair.
    pub lo: usize,
    /// Index of the second element (`lo + stride`).
    pub hi: usize,
    /// Twiddle factor applied to this pair.
    pub twiddle: u64,
    pub lo_value: u64,
    pub hi_value: u64,
}

/// Receiver of [`ButterflyStep`] events.
pub trait Observer {
    fn butterfly(&mut self, step: &ButterflyStep);
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Observer for NoTrace {
    #[inline(always)]
    fn butterfly(&mut self, _step: &ButterflyStep) {}
}

impl<F: FnMut(&ButterflyStep)> Observer for F {
    #[inline]
    fn butterfly(&mut self, step: &ButterflyStep) {
        self(step);
    }
}
