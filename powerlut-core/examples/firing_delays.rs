//! Firing Delays Example
//!
//! Shows how controller firmware turns a power setting into a TRIAC firing
//! delay using the shipped table, and how much time the table saves over
//! solving the power curve on the spot.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example firing_delays
//! ```

use powerlut_core::{
    constants::{AC_FREQ_HZ, PRESCALER, TICK_HZ, UC_FREQ_HZ},
    GeneratorConfig, POWER_LUT, POWER_SAMPLES, POWER_TABLE,
};
use std::time::Instant;

fn main() {
    println!("PowerLUT Firing Delays Example");
    println!("==============================\n");

    println!("Table Settings:");
    println!("---------------");
    show_settings();

    println!("\n\nPower Settings:");
    println!("---------------");
    demo_power_settings();

    println!("\n\nLookup vs Calculation:");
    println!("----------------------");
    benchmark_lookup_vs_calculation();

    println!("\n\nOther Mains Frequencies:");
    println!("------------------------");
    demo_fifty_hertz();
}

fn show_settings() {
    println!("  Clock:      {} Hz / {} = {} Hz timer", UC_FREQ_HZ, PRESCALER, TICK_HZ);
    println!("  Mains:      {} Hz", AC_FREQ_HZ);
    println!("  Levels:     {} ({:.1}% per step)", POWER_SAMPLES, 100.0 / (POWER_SAMPLES - 1) as f32);
    println!("  Flash used: {} bytes", core::mem::size_of_val(&POWER_LUT));
}

fn demo_power_settings() {
    for duty in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
        let level = POWER_TABLE.level_for_duty(duty);
        match POWER_TABLE.delay(level) {
            Some(delay) => println!(
                "  {:5.1}% power → level {:3} → fire after {:5} ticks ({:4} µs)",
                duty * 100.0,
                level,
                delay.ticks(),
                delay.to_micros()
            ),
            None => println!("  {:5.1}% power → level {} out of range", duty * 100.0, level),
        }
    }
}

fn benchmark_lookup_vs_calculation() {
    const ITERATIONS: usize = 100_000;
    let config = GeneratorConfig::default();

    let start = Instant::now();
    let mut sum = 0u64;
    for i in 0..ITERATIONS {
        sum += POWER_TABLE.get(i % POWER_SAMPLES).unwrap_or(0) as u64;
    }
    let lookup_time = start.elapsed();

    let start = Instant::now();
    let mut check = 0u64;
    for i in 0..ITERATIONS {
        check += config.entry(i % POWER_SAMPLES) as u64;
    }
    let calc_time = start.elapsed();

    assert_eq!(sum, check);
    println!("  {} iterations:", ITERATIONS);
    println!("  Lookup table: {:?}", lookup_time);
    println!("  Calculation:  {:?}", calc_time);
    println!("  Speedup:      {:.1}x faster", calc_time.as_secs_f64() / lookup_time.as_secs_f64());
}

fn demo_fifty_hertz() {
    let config = GeneratorConfig { ac_freq_hz: 50, ..Default::default() };
    match config.generate::<POWER_SAMPLES>() {
        Ok(table) => {
            println!("  50Hz: zero power waits {} ticks, half power {} ticks", table[0], table[250]);
            println!("  60Hz: zero power waits {} ticks, half power {} ticks", POWER_LUT[0], POWER_LUT[250]);
        }
        Err(e) => println!("  Error: {}", e),
    }
}
