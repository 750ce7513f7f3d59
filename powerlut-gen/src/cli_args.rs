//! CLI argument definitions for powerlut-gen.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use powerlut_gen::{ConfigOverrides, Format};

/// PowerLUT - firing-delay table generator for TRIAC phase control
#[derive(Parser)]
#[command(name = "powerlut-gen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a table and write it as C or Rust source
    Generate {
        /// Output flavour
        #[arg(short, long, value_enum, default_value = "c-source")]
        format: Format,

        /// Output file or directory (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stamp the banner with the current local time
        #[arg(long)]
        timestamp: bool,

        /// Author line for the banner
        #[arg(long)]
        author: Option<String>,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Validate settings and print a summary
    Check {
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

/// Settings shared by all subcommands
#[derive(Args)]
pub(crate) struct SettingsArgs {
    /// JSON file with generator settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CPU clock in Hz
    #[arg(long)]
    pub uc_freq: Option<u32>,

    /// Hardware timer number (0, 1 or 2)
    #[arg(long)]
    pub timer: Option<u8>,

    /// Timer prescaler
    #[arg(long)]
    pub prescaler: Option<u16>,

    /// Number of power levels, including 0% and 100%
    #[arg(long)]
    pub samples: Option<usize>,

    /// Mains frequency in Hz
    #[arg(long)]
    pub ac_freq: Option<u16>,
}

impl SettingsArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            uc_freq_hz: self.uc_freq,
            timer: self.timer,
            prescaler: self.prescaler,
            samples: self.samples,
            ac_freq_hz: self.ac_freq,
        }
    }
}
