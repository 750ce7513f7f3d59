//! Build script for PowerLUT Core
//!
//! Generates the firing-delay table from the reference timer settings and
//! writes it to `$OUT_DIR/power_lut.rs`, where `src/table.rs` includes it.
//! Shares the math and settings with the library by compiling the same
//! source files.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

#[allow(dead_code)]
#[path = "src/phase.rs"]
mod phase;

#[allow(dead_code)]
#[path = "src/constants/timing.rs"]
mod timing;

/// Values per line in the generated array
const VALUES_PER_LINE: usize = 10;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/phase.rs");
    println!("cargo:rerun-if-changed=src/constants/timing.rs");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set by cargo");
    let half_cycle = phase::half_cycle_ticks(timing::UC_FREQ_HZ, timing::PRESCALER, timing::AC_FREQ_HZ);

    let values: Vec<u32> = (0..timing::POWER_SAMPLES)
        .map(|level| phase::firing_delay_ticks(level, timing::POWER_SAMPLES, half_cycle))
        .collect();

    if let Some(&first) = values.first() {
        if first > u16::MAX as u32 {
            panic!("Half cycle of {} ticks does not fit in u16", first);
        }
    }

    let mut output = String::new();
    writeln!(
        output,
        "// Generated by build.rs: UC_FREQ = {}, TIMER = {}, PRESCALER = {}, SAMPLES = {}, AC_FREQ = {}",
        timing::UC_FREQ_HZ, timing::TIMER, timing::PRESCALER, timing::POWER_SAMPLES, timing::AC_FREQ_HZ
    )
    .unwrap();
    output.push('[');

    for (line, chunk) in values.chunks(VALUES_PER_LINE).enumerate() {
        let start = line * VALUES_PER_LINE;
        output.push_str("\n    ");
        for value in chunk {
            write!(output, "{}, ", value).unwrap();
        }
        write!(output, "// {}..={}", start, start + chunk.len() - 1).unwrap();
    }
    output.push_str("\n]\n");

    fs::write(Path::new(&out_dir).join("power_lut.rs"), output)
        .expect("Failed to write power_lut.rs");
}
