//! Integration tests for the shipped power table
//!
//! Covers the table contract as seen by firmware:
//! - Length and constant agree
//! - Entries are bounded by one mains half cycle and never increase
//! - Reads are repeatable and safe from many threads
//! - Out-of-range indices are caught by the checked accessors

#![cfg(test)]

use std::sync::Arc;
use std::thread;

use powerlut_core::{
    constants::{HALF_CYCLE_TICKS, TICK_HZ},
    LutError, PowerLookupTable, POWER_LUT, POWER_SAMPLES, POWER_TABLE,
};

#[test]
fn test_length_contract() {
    assert_eq!(POWER_SAMPLES, 501);
    assert_eq!(POWER_LUT.len(), POWER_SAMPLES);
    assert_eq!(POWER_TABLE.as_slice().len(), POWER_SAMPLES);
    assert_eq!(POWER_TABLE.iter().count(), POWER_SAMPLES);
}

#[test]
fn test_first_and_last_entries_readable() {
    let first = POWER_TABLE.try_get(0).expect("index 0 in range");
    let last = POWER_TABLE.try_get(500).expect("index 500 in range");

    // Zero power waits out the whole half cycle, full power fires at once
    assert_eq!(first as u32, HALF_CYCLE_TICKS + 1);
    assert_eq!(last, 0);
}

#[test]
fn test_one_past_end_rejected() {
    assert_eq!(POWER_TABLE.get(POWER_SAMPLES), None);
    assert_eq!(
        POWER_TABLE.try_get(POWER_SAMPLES),
        Err(LutError::IndexOutOfRange { index: 501, len: 501 })
    );
    assert!(POWER_TABLE.try_get(usize::MAX).is_err());
}

#[test]
fn test_entries_bounded_and_non_increasing() {
    let max = POWER_LUT[0];
    for window in POWER_LUT.windows(2) {
        assert!(window[1] <= window[0], "table rises: {} -> {}", window[0], window[1]);
    }
    assert!(POWER_LUT.iter().all(|&ticks| ticks <= max));
}

#[test]
fn test_power_steps_are_nonlinear_in_time() {
    // Near 50% power the firing point sits on the sine peak, so a power step
    // moves it less than near 0% or 100%, where the sine is flat
    let step_at = |i: usize| POWER_LUT[i] - POWER_LUT[i + 1];
    assert!(step_at(250) < step_at(0));
    assert!(step_at(250) < step_at(499));
}

#[test]
fn test_repeated_reads_identical() {
    let snapshot: Vec<u16> = POWER_TABLE.into_iter().collect();
    for (i, &expected) in snapshot.iter().enumerate() {
        assert_eq!(POWER_LUT[i], expected);
        assert_eq!(POWER_TABLE.get(i), Some(expected));
    }
}

#[test]
fn test_concurrent_readers() {
    let expected = Arc::new(POWER_LUT.to_vec());

    let handles: Vec<_> = (0..8)
        .map(|offset| {
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for i in (offset..POWER_SAMPLES).step_by(8) {
                    assert_eq!(POWER_TABLE.get(i), Some(expected[i]));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("reader thread panicked");
    }
}

#[test]
fn test_delays_use_timer_rate() {
    assert_eq!(TICK_HZ, 2_000_000);

    // 50% power fires a quarter cycle in: 1/240 s
    let delay = POWER_TABLE.delay_for_duty(0.5).unwrap();
    assert_eq!(delay.ticks(), 8333);
    assert_eq!(delay.to_nanos(), 4_166_500);
}

#[test]
fn test_custom_table_wrapper() {
    static COARSE: [u16; 3] = [16667, 8333, 0];
    let table: PowerLookupTable<3> = PowerLookupTable::new(&COARSE);

    assert_eq!(table.len(), 3);
    assert_eq!(table.level_for_duty(0.5), 1);
    assert_eq!(table.delay_for_duty(0.9).unwrap().ticks(), 0);
}
