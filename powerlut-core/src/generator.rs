//! Table Generator
//!
//! Turns a set of timer settings into a firing-delay table. The shipped
//! [`POWER_LUT`](crate::table::POWER_LUT) is produced by `build.rs` from
//! [`GeneratorConfig::default()`]; the same code is available at runtime so
//! tools and tests can produce tables for other clocks or mains frequencies.
//!
//! ```
//! use powerlut_core::generator::GeneratorConfig;
//!
//! // 50Hz mains, same board
//! let config = GeneratorConfig { ac_freq_hz: 50, samples: 101, ..Default::default() };
//! let table: [u16; 101] = config.generate().unwrap();
//! assert_eq!(table[0], 20_000);
//! assert_eq!(table[100], 0);
//! ```

use crate::constants::{timers, timing};
use crate::errors::{LutError, LutResult};
use crate::phase;

/// Settings a table is generated with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// CPU clock (Hz)
    pub uc_freq_hz: u32,
    /// Hardware timer number
    pub timer: u8,
    /// Timer prescaler
    pub prescaler: u16,
    /// Number of power levels, including 0% and 100%
    pub samples: usize,
    /// Mains frequency (Hz)
    pub ac_freq_hz: u16,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl GeneratorConfig {
    /// Settings of the shipped table
    pub const REFERENCE: Self = Self {
        uc_freq_hz: timing::UC_FREQ_HZ,
        timer: timing::TIMER,
        prescaler: timing::PRESCALER,
        samples: timing::POWER_SAMPLES,
        ac_freq_hz: timing::AC_FREQ_HZ,
    };

    /// Timer tick rate (Hz), truncated to whole hertz
    pub fn tick_hz(&self) -> u32 {
        self.uc_freq_hz / self.prescaler.max(1) as u32
    }

    /// Exact ticks per mains half cycle
    pub fn half_cycle_ticks(&self) -> f64 {
        phase::half_cycle_ticks(self.uc_freq_hz, self.prescaler, self.ac_freq_hz)
    }

    /// Check the settings against what the timer hardware can do
    pub fn validate(&self) -> LutResult<()> {
        if self.uc_freq_hz == 0 {
            return Err(LutError::ZeroFrequency { which: "uc_freq_hz" });
        }
        if self.ac_freq_hz == 0 {
            return Err(LutError::ZeroFrequency { which: "ac_freq_hz" });
        }

        let max = timers::counter_max(self.timer)
            .ok_or(LutError::UnsupportedTimer { timer: self.timer })?;

        if !timers::prescaler_supported(self.timer, self.prescaler) {
            return Err(LutError::UnsupportedPrescaler {
                timer: self.timer,
                prescaler: self.prescaler,
            });
        }

        if self.samples < 2 {
            return Err(LutError::TooFewSamples { samples: self.samples });
        }
        if self.samples > timers::MAX_SAMPLES {
            return Err(LutError::TooManySamples {
                samples: self.samples,
                max: timers::MAX_SAMPLES,
            });
        }

        // Entry 0 holds the rounded half cycle, so that is what must fit
        let ticks = libm::round(self.half_cycle_ticks()) as u32;
        if ticks > max {
            return Err(LutError::CounterOverflow { ticks, max });
        }

        Ok(())
    }

    /// Firing delay for one level, without validation
    ///
    /// Saturates at `u16::MAX` when the half cycle is longer than a `u16`.
    pub fn entry(&self, level: usize) -> u16 {
        saturate_ticks(phase::firing_delay_ticks(level, self.samples, self.half_cycle_ticks()))
    }

    /// Validate, then fill `out` with one delay per level
    pub fn fill(&self, out: &mut [u16]) -> LutResult<()> {
        self.validate()?;
        if out.len() != self.samples {
            return Err(LutError::SampleCountMismatch {
                expected: self.samples,
                actual: out.len(),
            });
        }

        let half_cycle = self.half_cycle_ticks();
        for (level, slot) in out.iter_mut().enumerate() {
            *slot = saturate_ticks(phase::firing_delay_ticks(level, self.samples, half_cycle));
        }

        log_debug!(
            "Generated {} levels: timer {} /{}, {}Hz mains, {} ticks per half cycle",
            self.samples, self.timer, self.prescaler, self.ac_freq_hz, out[0]
        );
        Ok(())
    }

    /// Generate a table sized by the type
    pub fn generate<const N: usize>(&self) -> LutResult<[u16; N]> {
        let mut table = [0u16; N];
        self.fill(&mut table)?;
        Ok(table)
    }
}

fn saturate_ticks(ticks: u32) -> u16 {
    ticks.min(u16::MAX as u32) as u16
}
