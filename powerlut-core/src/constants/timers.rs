//! ATmega328P Timer Characteristics
//!
//! Counter widths and prescaler taps per timer, from the ATmega328P
//! datasheet (sections 14-18). Used to reject generator settings the
//! hardware cannot run.

/// Most power levels a table may hold.
///
/// Firmware indexes the table with a `u16` level.
pub const MAX_SAMPLES: usize = u16::MAX as usize + 1;

/// Number of hardware timers (Timer0, Timer1, Timer2).
pub const TIMER_COUNT: u8 = 3;

/// Prescalers available on Timer0 and Timer1.
pub const TIMER0_1_PRESCALERS: [u16; 5] = [1, 8, 64, 256, 1024];

/// Prescalers available on Timer2, which has its own prescaler block.
pub const TIMER2_PRESCALERS: [u16; 7] = [1, 8, 32, 64, 128, 256, 1024];

/// Counter width in bits, `None` for a timer the chip does not have.
pub const fn counter_bits(timer: u8) -> Option<u8> {
    match timer {
        0 | 2 => Some(8),
        1 => Some(16),
        _ => None,
    }
}

/// Largest count the timer can hold before overflowing.
pub const fn counter_max(timer: u8) -> Option<u32> {
    match counter_bits(timer) {
        Some(bits) => Some((1u32 << bits) - 1),
        None => None,
    }
}

/// Prescaler taps wired to the given timer.
pub fn prescalers(timer: u8) -> &'static [u16] {
    match timer {
        0 | 1 => &TIMER0_1_PRESCALERS,
        2 => &TIMER2_PRESCALERS,
        _ => &[],
    }
}

/// Whether `prescaler` is a tap the timer actually offers.
pub fn prescaler_supported(timer: u8, prescaler: u16) -> bool {
    prescalers(timer).contains(&prescaler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer1_is_16_bit() {
        assert_eq!(counter_bits(1), Some(16));
        assert_eq!(counter_max(1), Some(65535));
        assert_eq!(counter_max(0), Some(255));
        assert_eq!(counter_max(3), None);
    }

    #[test]
    fn timer2_has_extra_taps() {
        assert!(prescaler_supported(2, 32));
        assert!(!prescaler_supported(1, 32));
        assert!(prescaler_supported(1, 8));
        assert!(!prescaler_supported(7, 8));
    }
}
