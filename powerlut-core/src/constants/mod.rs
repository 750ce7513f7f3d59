//! Constants for PowerLUT Core
//!
//! ## Organization
//!
//! - **Timing**: clock, prescaler, and mains settings the shipped table was
//!   generated with, plus the tick rates derived from them
//! - **Timers**: what the ATmega328P timers can physically do
//!
//! Values carry their unit in the name (`_HZ`, `_TICKS`).

/// Generator settings and derived tick rates.
pub mod timing;

/// ATmega328P timer widths and prescaler taps.
pub mod timers;

pub use timing::{
    UC_FREQ_HZ, TIMER, PRESCALER, AC_FREQ_HZ, POWER_SAMPLES,
    TICK_HZ, HALF_CYCLE_TICKS,
};

pub use timers::{MAX_SAMPLES, counter_bits, counter_max, prescaler_supported};
