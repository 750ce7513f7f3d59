//! Timing Parameters of the Reference Power Table
//!
//! The shipped table targets an ATmega328P-class controller clocked at
//! 16MHz, with Timer1 running from a /8 prescaler and triggering a TRIAC on
//! 60Hz mains. Every derived value below follows from those four numbers.
//!
//! This file is also compiled into `build.rs`, so it must stay free of
//! crate-relative paths.

// ===== GENERATOR SETTINGS =====

/// CPU clock feeding the timer prescaler (Hz).
///
/// Source: 16MHz crystal, standard for ATmega328P boards
pub const UC_FREQ_HZ: u32 = 16_000_000;

/// Hardware timer used to schedule the firing pulse.
///
/// Timer1 is the only 16-bit timer on the ATmega328P.
pub const TIMER: u8 = 1;

/// Timer clock prescaler.
pub const PRESCALER: u16 = 8;

/// Mains frequency (Hz).
pub const AC_FREQ_HZ: u16 = 60;

/// Number of power levels in the table.
///
/// Index 0 is 0% power, index `POWER_SAMPLES - 1` is 100% power, giving a
/// resolution of 0.2% per step.
pub const POWER_SAMPLES: usize = 501;

// ===== DERIVED VALUES =====

/// Timer tick rate (Hz): 2MHz, one tick every 0.5µs.
pub const TICK_HZ: u32 = UC_FREQ_HZ / PRESCALER as u32;

/// Zero crossings per second (two per mains cycle).
pub const HALF_CYCLES_PER_SECOND: u32 = 2 * AC_FREQ_HZ as u32;

/// Whole timer ticks in one mains half cycle (16666 at 60Hz).
///
/// The exact value is 16666.67; table entries are rounded from the exact
/// value, so entry 0 reads one tick higher than this constant.
pub const HALF_CYCLE_TICKS: u32 = TICK_HZ / HALF_CYCLES_PER_SECOND;
