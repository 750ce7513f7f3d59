//! PowerLUT generator library
//!
//! Resolves generator settings from defaults, an optional JSON file and
//! command-line overrides, then renders the table in the requested format.

pub mod emit;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use powerlut_core::GeneratorConfig;

pub use emit::{render, Format, Provenance};

/// Per-field overrides applied on top of the base settings
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    /// CPU clock (Hz)
    pub uc_freq_hz: Option<u32>,
    /// Timer number
    pub timer: Option<u8>,
    /// Timer prescaler
    pub prescaler: Option<u16>,
    /// Number of power levels
    pub samples: Option<usize>,
    /// Mains frequency (Hz)
    pub ac_freq_hz: Option<u16>,
}

impl ConfigOverrides {
    /// Apply every override that is set
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(v) = self.uc_freq_hz {
            config.uc_freq_hz = v;
        }
        if let Some(v) = self.timer {
            config.timer = v;
        }
        if let Some(v) = self.prescaler {
            config.prescaler = v;
        }
        if let Some(v) = self.samples {
            config.samples = v;
        }
        if let Some(v) = self.ac_freq_hz {
            config.ac_freq_hz = v;
        }
    }
}

/// Load settings: reference defaults, then `file`, then `overrides`
///
/// Fields missing from the file keep their reference values.
pub fn resolve_config(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<GeneratorConfig> {
    let mut config = match file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };
    overrides.apply(&mut config);

    config.validate().context("Invalid generator settings")?;
    debug!("Resolved settings: {:?}", config);
    Ok(config)
}

/// Compute the table for validated settings
pub fn generate_table(config: &GeneratorConfig) -> Result<Vec<u16>> {
    let mut values = vec![0u16; config.samples];
    config.fill(&mut values).context("Table generation failed")?;
    info!(
        "Generated {} levels, {} to {} ticks at {} Hz",
        values.len(),
        values[0],
        values[values.len() - 1],
        config.tick_hz()
    );
    Ok(values)
}

/// Where to write `format` output given `--output`
///
/// An existing directory gets the format's conventional file name.
pub fn output_path(output: &Path, format: Format) -> PathBuf {
    if output.is_dir() {
        output.join(format.default_file_name())
    } else {
        output.to_path_buf()
    }
}

/// Generate and render in one step
pub fn build_artifact(format: Format, config: &GeneratorConfig, provenance: &Provenance) -> Result<String> {
    let values = generate_table(config)?;
    Ok(render(format, config, &values, provenance))
}
