//! Firing-delay lookup table for TRIAC phase-angle power control
//!
//! Holds the precomputed table an AVR controller indexes to turn a power
//! setting into the delay, after each mains zero crossing, at which the
//! TRIAC is fired. Built for a 16MHz ATmega328P with Timer1 at /8 on 60Hz
//! mains.
//!
//! Key constraints:
//! - Table lives in flash as a `static`, no RAM copy
//! - No floating point needed at runtime (see the `fixed` feature)
//! - No heap allocation
//!
//! ```
//! use powerlut_core::{POWER_LUT, POWER_SAMPLES, POWER_TABLE};
//!
//! assert_eq!(POWER_LUT.len(), POWER_SAMPLES);
//!
//! // 75% power
//! let level = POWER_TABLE.level_for_duty(0.75);
//! let delay = POWER_TABLE.delay(level).unwrap();
//! assert!(delay.ticks() < POWER_LUT[POWER_SAMPLES / 2] as u32);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod constants;
pub mod errors;
pub mod generator;
pub mod phase;
pub mod table;

// Public API
pub use errors::{LutError, LutResult};
pub use generator::GeneratorConfig;
pub use table::{FiringDelay, PowerLookupTable, POWER_LUT, POWER_SAMPLES, POWER_TABLE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn shipped_table_matches_generator() {
        let generated: [u16; POWER_SAMPLES] = GeneratorConfig::default().generate().unwrap();
        assert_eq!(generated, POWER_LUT);
    }
}
