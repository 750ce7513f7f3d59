//! Artifact rendering
//!
//! Three output flavours share one banner listing the generator settings:
//!
//! - **C header**: size macro and `extern` declaration, for firmware that
//!   links a separately compiled table
//! - **C source**: the table definition itself
//! - **Rust**: `POWER_SAMPLES` and `POWER_LUT`, ready to wrap in
//!   `PowerLookupTable`

use std::fmt::Write as _;

use clap::ValueEnum;
use powerlut_core::GeneratorConfig;

/// Values per line in emitted arrays
pub const VALUES_PER_LINE: usize = 10;

/// Placeholder used when no timestamp is requested, keeps output reproducible
pub const NO_TIMESTAMP: &str = "(use --timestamp for current time)";

/// Output flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `power_lut.h`: size macro plus extern declaration
    CHeader,
    /// `power_lut.c`: table definition
    CSource,
    /// Rust module with `POWER_SAMPLES` and `POWER_LUT`
    Rust,
}

impl Format {
    /// Conventional file name for this flavour
    pub fn default_file_name(self) -> &'static str {
        match self {
            Format::CHeader => "power_lut.h",
            Format::CSource => "power_lut.c",
            Format::Rust => "power_lut.rs",
        }
    }
}

/// Provenance printed in the banner
#[derive(Debug, Clone, Default)]
pub struct Provenance {
    /// Human-readable generation time
    pub generated_on: Option<String>,
    /// Author line, omitted when `None`
    pub author: Option<String>,
}

/// Render a complete artifact
pub fn render(format: Format, config: &GeneratorConfig, values: &[u16], provenance: &Provenance) -> String {
    match format {
        Format::CHeader => render_c_header(config, provenance),
        Format::CSource => render_c_source(config, values, provenance),
        Format::Rust => render_rust(config, values, provenance),
    }
}

/// Settings block, one line each, without comment markers
fn banner_lines(config: &GeneratorConfig, provenance: &Provenance) -> Vec<String> {
    let mut lines = vec![
        "Power Look-up Table".to_string(),
        String::new(),
        "Generated with the following settings:".to_string(),
        format!("    - UC_FREQ = {}", config.uc_freq_hz),
        format!("    - TIMER = {}", config.timer),
        format!("    - PRESCALER = {}", config.prescaler),
        format!("    - SAMPLES = {}", config.samples),
        format!("    - AC_FREQ = {}", config.ac_freq_hz),
        String::new(),
        format!(
            "Generated on: {}",
            provenance.generated_on.as_deref().unwrap_or(NO_TIMESTAMP)
        ),
    ];
    if let Some(author) = &provenance.author {
        lines.push(format!("Author: {}", author));
    }
    lines
}

fn c_banner(config: &GeneratorConfig, provenance: &Provenance) -> String {
    let mut out = String::from("/*****************************************\n");
    for line in banner_lines(config, provenance) {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str("  ");
            out.push_str(&line);
            out.push('\n');
        }
    }
    out.push_str("*****************************************/\n");
    out
}

fn render_c_header(config: &GeneratorConfig, provenance: &Provenance) -> String {
    let mut out = c_banner(config, provenance);
    out.push_str("\n#ifndef _POWER_LUT_H\n#define _POWER_LUT_H\n\n#include <stdint.h>\n\n");
    let _ = writeln!(out, "#define POWER_SAMPLES {}\n", config.samples);
    let _ = writeln!(out, "extern const uint16_t power_lut[{}];\n", config.samples);
    out.push_str("#endif   /* _POWER_LUT_H */\n");
    out
}

fn render_c_source(config: &GeneratorConfig, values: &[u16], provenance: &Provenance) -> String {
    let mut out = c_banner(config, provenance);
    out.push_str("\n#include \"power_lut.h\"\n\n");
    out.push_str("const uint16_t power_lut[POWER_SAMPLES] = {");
    push_values(&mut out, values, "/*", " */");
    out.push_str("\n};\n");
    out
}

fn render_rust(config: &GeneratorConfig, values: &[u16], provenance: &Provenance) -> String {
    let mut out = String::new();
    for line in banner_lines(config, provenance) {
        if line.is_empty() {
            out.push_str("//\n");
        } else {
            let _ = writeln!(out, "// {}", line);
        }
    }
    out.push('\n');
    out.push_str("/// Number of power levels, 0% to 100%\n");
    let _ = writeln!(out, "pub const POWER_SAMPLES: usize = {};\n", config.samples);
    let _ = writeln!(
        out,
        "/// Firing delays in ticks of a {} Hz timer, index 0 = 0% power",
        config.tick_hz()
    );
    out.push_str("pub static POWER_LUT: [u16; POWER_SAMPLES] = [");
    push_values(&mut out, values, "//", "");
    out.push_str("\n];\n");
    out
}

/// Write values ten per line, each line tagged with its index range
fn push_values(out: &mut String, values: &[u16], open: &str, close: &str) {
    for (line, chunk) in values.chunks(VALUES_PER_LINE).enumerate() {
        let start = line * VALUES_PER_LINE;
        out.push_str("\n    ");
        for value in chunk {
            let _ = write!(out, "{:5}, ", value);
        }
        let _ = write!(out, "{} {}..={}{}", open, start, start + chunk.len() - 1, close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GeneratorConfig {
        GeneratorConfig { samples: 3, ..Default::default() }
    }

    #[test]
    fn header_matches_reference_layout() {
        let provenance = Provenance {
            generated_on: Some("Sat Jan 25 09:40:36 2020".to_string()),
            author: Some("Test Author".to_string()),
        };
        let header = render(Format::CHeader, &GeneratorConfig::default(), &[], &provenance);

        assert!(header.starts_with("/*****************************************\n  Power Look-up Table\n\n"));
        assert!(header.contains("      - UC_FREQ = 16000000\n"));
        assert!(header.contains("      - TIMER = 1\n"));
        assert!(header.contains("      - PRESCALER = 8\n"));
        assert!(header.contains("      - SAMPLES = 501\n"));
        assert!(header.contains("      - AC_FREQ = 60\n"));
        assert!(header.contains("  Generated on: Sat Jan 25 09:40:36 2020\n  Author: Test Author\n"));
        assert!(header.contains("#define POWER_SAMPLES 501\n"));
        assert!(header.contains("extern const uint16_t power_lut[501];\n"));
        assert!(header.ends_with("#endif   /* _POWER_LUT_H */\n"));
    }

    #[test]
    fn author_line_optional() {
        let header = render(Format::CHeader, &small_config(), &[], &Provenance::default());
        assert!(!header.contains("Author:"));
        assert!(header.contains(NO_TIMESTAMP));
    }

    #[test]
    fn c_source_defines_table() {
        let source = render(Format::CSource, &small_config(), &[16667, 8333, 0], &Provenance::default());
        assert!(source.contains("#include \"power_lut.h\""));
        assert!(source.contains("const uint16_t power_lut[POWER_SAMPLES] = {\n    16667,  8333,     0, /* 0..=2 */\n};\n"));
    }

    #[test]
    fn rust_output_tags_index_ranges() {
        let values: Vec<u16> = (0..12).rev().collect();
        let config = GeneratorConfig { samples: 12, ..Default::default() };
        let rust = render(Format::Rust, &config, &values, &Provenance::default());

        assert!(rust.contains("pub const POWER_SAMPLES: usize = 12;"));
        assert!(rust.contains("ticks of a 2000000 Hz timer"));
        assert!(rust.contains("// 0..=9\n"));
        assert!(rust.contains("    1,     0, // 10..=11\n];\n"));
        assert!(rust.lines().all(|line| !line.starts_with("/*")));
    }

    #[test]
    fn default_file_names() {
        assert_eq!(Format::CHeader.default_file_name(), "power_lut.h");
        assert_eq!(Format::Rust.default_file_name(), "power_lut.rs");
    }
}
