//! Power Lookup Table
//!
//! ## Motivation
//!
//! Inverting the phase-control power curve takes a trigonometric root
//! search, far too slow for an 8-bit controller that must schedule a firing
//! pulse within microseconds of every zero crossing. The inversion is done
//! once, at build time, and the controller only indexes.
//!
//! ## Layout
//!
//! ```text
//! index:   0        1      ...    250    ...    499    500
//! power:   0%       0.2%          50%           99.8%  100%
//! delay:   16667    ...           8333          ...    0      (Timer1 ticks)
//! ```
//!
//! Each entry is the delay after a zero crossing, in Timer1 ticks at 2MHz
//! (0.5µs), before the TRIAC gate is pulsed. Entries never increase with the
//! index.
//!
//! ## Reference settings
//!
//! ```text
//! UC_FREQ   = 16000000
//! TIMER     = 1
//! PRESCALER = 8
//! SAMPLES   = 501
//! AC_FREQ   = 60
//! ```
//!
//! The table the controller originally shipped with (generated 2020-01-25)
//! was produced offline from these settings; `build.rs` regenerates it from
//! the power model in [`phase`](crate::phase).
//!
//! ## Concurrency
//!
//! [`POWER_LUT`] is an immutable `static`. Readers in any thread or
//! interrupt handler need no synchronization.

use crate::constants::timing;
use crate::errors::{LutError, LutResult};

pub use crate::constants::timing::POWER_SAMPLES;

/// Firing delays indexed by power level, in timer ticks
pub static POWER_LUT: [u16; POWER_SAMPLES] = include!(concat!(env!("OUT_DIR"), "/power_lut.rs"));

/// Delay measured in ticks of a `TICK_HZ` timer
pub type FiringDelay<const TICK_HZ: u32> = fugit::TimerDurationU32<TICK_HZ>;

/// The shipped table
pub static POWER_TABLE: PowerLookupTable<POWER_SAMPLES> = PowerLookupTable::new(&POWER_LUT);

/// Read-only view over a firing-delay table
///
/// `N` is the number of power levels, `TICK_HZ` the rate of the timer the
/// values count in. Works for the shipped table and for tables emitted by
/// `powerlut-gen --format rust`.
#[derive(Debug, Clone, Copy)]
pub struct PowerLookupTable<const N: usize, const TICK_HZ: u32 = { timing::TICK_HZ }> {
    values: &'static [u16; N],
}

impl<const N: usize, const TICK_HZ: u32> PowerLookupTable<N, TICK_HZ> {
    /// Wrap a static table
    pub const fn new(values: &'static [u16; N]) -> Self {
        Self { values }
    }

    /// Number of power levels
    pub const fn len(&self) -> usize {
        N
    }

    /// True only for a zero-length table
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Raw entries
    pub const fn as_slice(&self) -> &'static [u16] {
        self.values
    }

    /// Iterate over entries from 0% to 100%
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'static, u16>> {
        self.values.iter().copied()
    }

    /// Entry at `index`, `None` past the end
    #[inline]
    pub fn get(&self, index: usize) -> Option<u16> {
        self.values.get(index).copied()
    }

    /// Entry at `index`, with an error naming the bound
    pub fn try_get(&self, index: usize) -> LutResult<u16> {
        self.get(index).ok_or(LutError::IndexOutOfRange { index, len: N })
    }

    /// Entry at `index` as a timer duration
    pub fn delay(&self, index: usize) -> Option<FiringDelay<TICK_HZ>> {
        self.get(index).map(|ticks| FiringDelay::<TICK_HZ>::from_ticks(ticks as u32))
    }

    /// Index of the level closest to `duty` (fraction of full power)
    ///
    /// `duty` is clamped to `[0, 1]`; NaN counts as 0.
    pub fn level_for_duty(&self, duty: f32) -> usize {
        let top = N.saturating_sub(1);
        let (clamped, was_clamped) = clamp_duty(duty);

        if was_clamped {
            log_warn!("Power table: duty clamped ({} → {})", duty, clamped);
        }

        libm::roundf(clamped * top as f32) as usize
    }

    /// Fixed-point variant of [`level_for_duty`](Self::level_for_duty)
    ///
    /// For targets without an FPU. Values above 1.0 are clamped.
    #[cfg(feature = "fixed")]
    pub fn level_for_duty_fixed(&self, duty: fixed::types::U1F15) -> usize {
        const ONE: u64 = 1 << 15;
        let top = N.saturating_sub(1) as u64;
        let bits = (duty.to_bits() as u64).min(ONE);

        // Round to nearest: add half an LSB before the shift
        ((bits * top + (ONE >> 1)) >> 15) as usize
    }

    /// Firing delay for a power fraction
    ///
    /// `None` only for an empty table.
    pub fn delay_for_duty(&self, duty: f32) -> Option<FiringDelay<TICK_HZ>> {
        self.delay(self.level_for_duty(duty))
    }
}

impl<const N: usize, const TICK_HZ: u32> IntoIterator for PowerLookupTable<N, TICK_HZ> {
    type Item = u16;
    type IntoIter = core::iter::Copied<core::slice::Iter<'static, u16>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Clamp to `[0, 1]` and report whether clamping occurred
fn clamp_duty(duty: f32) -> (f32, bool) {
    if duty.is_nan() || duty < 0.0 {
        (0.0, true)
    } else if duty > 1.0 {
        (1.0, true)
    } else {
        (duty, false)
    }
}
