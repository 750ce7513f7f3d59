//! Error Types for Table Access and Generation
//!
//! Reading the shipped table cannot fail: its length is part of its type.
//! Errors only arise at the edges:
//!
//! - **Access**: a caller-supplied index past the end (`IndexOutOfRange`)
//! - **Generation**: settings the target timer cannot run, or a destination
//!   buffer of the wrong size
//!
//! Like the rest of the crate, errors are `Copy`, carry no heap data, and
//! fit in a few words so they can be returned from interrupt context.

use thiserror_no_std::Error;

/// Result type for table operations
pub type LutResult<T> = Result<T, LutError>;

/// Table access and generation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutError {
    /// Index past the end of the table
    #[error("Index {index} out of range for table of {len} entries")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Table length
        len: usize,
    },

    /// Clock or mains frequency of zero
    #[error("Frequency must be non-zero: {which}")]
    ZeroFrequency {
        /// Which setting was zero
        which: &'static str,
    },

    /// Timer number the chip does not have
    #[error("Unsupported timer {timer}")]
    UnsupportedTimer {
        /// Requested timer
        timer: u8,
    },

    /// Prescaler tap not wired to the timer
    #[error("Timer {timer} has no /{prescaler} prescaler")]
    UnsupportedPrescaler {
        /// Requested timer
        timer: u8,
        /// Requested prescaler
        prescaler: u16,
    },

    /// Need at least the 0% and 100% levels
    #[error("Need at least 2 samples, got {samples}")]
    TooFewSamples {
        /// Requested sample count
        samples: usize,
    },

    /// More levels than a `u16` index can address
    #[error("At most {max} samples supported, got {samples}")]
    TooManySamples {
        /// Requested sample count
        samples: usize,
        /// Largest supported count
        max: usize,
    },

    /// A half cycle is longer than the timer can count
    #[error("Half cycle needs {ticks} ticks, timer counts to {max}")]
    CounterOverflow {
        /// Ticks in one half cycle
        ticks: u32,
        /// Largest counter value
        max: u32,
    },

    /// Destination size differs from the configured sample count
    #[error("Expected {expected} samples, destination holds {actual}")]
    SampleCountMismatch {
        /// Configured sample count
        expected: usize,
        /// Destination length
        actual: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for LutError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::IndexOutOfRange { index, len } =>
                defmt::write!(fmt, "Index {} out of range ({})", index, len),
            Self::ZeroFrequency { which } =>
                defmt::write!(fmt, "Zero frequency: {}", which),
            Self::UnsupportedTimer { timer } =>
                defmt::write!(fmt, "Unsupported timer {}", timer),
            Self::UnsupportedPrescaler { timer, prescaler } =>
                defmt::write!(fmt, "Timer {} has no /{} prescaler", timer, prescaler),
            Self::TooFewSamples { samples } =>
                defmt::write!(fmt, "Need 2 samples, got {}", samples),
            Self::TooManySamples { samples, max } =>
                defmt::write!(fmt, "At most {} samples, got {}", max, samples),
            Self::CounterOverflow { ticks, max } =>
                defmt::write!(fmt, "{} ticks exceeds counter max {}", ticks, max),
            Self::SampleCountMismatch { expected, actual } =>
                defmt::write!(fmt, "Expected {} samples, got {}", expected, actual),
        }
    }
}
