//! Transform parameters. [`Modulus`] is a validated `q >= 2`; [`NttParams`]
//! bundles it with a generator and a [`Schedule`].

use ntt_math::Schedule;

use crate::Error;

/// Field modulus `q`, at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u64", into = "u64")
)]
pub struct Modulus(u64);

impl Modulus {
    /// Fails with [`Error::InvalidModulus`] below 2.
    pub const fn new(value: u64) -> Result<Self, Error> {
        if value < 2 {
            return Err(Error::InvalidModulus { modulus: value });
        }
        Ok(Self(value))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Modulus {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Modulus> for u64 {
    #[inline]
    fn from(m: Modulus) -> Self {
        m.0
    }
}

impl core::fmt::Display for Modulus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `(generator, modulus, schedule)` triple, independent of length.
///
/// With the `serde` feature this reads from e.g.
/// `{"generator": 13, "modulus": 17, "schedule": "gentleman-sande"}`;
/// `schedule` defaults to [`Schedule::CooleyTukey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NttParams {
    pub generator: u64,
    pub modulus: Modulus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub schedule: Schedule,
}

impl NttParams {
    pub const fn new(generator: u64, modulus: u64) -> Result<Self, Error> {
        match Modulus::new(modulus) {
            Ok(modulus) => Ok(Self { generator, modulus, schedule: Schedule::CooleyTukey }),
            Err(e) => Err(e),
        }
    }

    #[must_use]
    pub const fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }
}
