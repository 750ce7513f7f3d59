//! powerlut-gen - generate firing-delay tables for TRIAC phase control
//!
//! ```bash
//! powerlut-gen generate --format c-header -o power_lut.h
//! powerlut-gen generate --format c-source -o power_lut.c --timestamp
//! powerlut-gen check --ac-freq 50
//! ```

mod cli_args;

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use cli_args::{Cli, Commands, SettingsArgs};
use powerlut_gen::{build_artifact, generate_table, output_path, resolve_config, Provenance};

/// ctime-style stamp, e.g. `Sat Jan 25 09:40:36 2020`
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate { format, output, timestamp, author, settings } => {
            let provenance = Provenance {
                generated_on: timestamp
                    .then(|| chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()),
                author,
            };
            run_generate(format, output, &provenance, &settings)
        }
        Commands::Check { settings } => run_check(&settings),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_generate(
    format: powerlut_gen::Format,
    output: Option<std::path::PathBuf>,
    provenance: &Provenance,
    settings: &SettingsArgs,
) -> Result<()> {
    let config = resolve_config(settings.config.as_deref(), &settings.overrides())?;
    let artifact = build_artifact(format, &config, provenance)?;

    match output {
        Some(output) => {
            let path = output_path(&output, format);
            fs::write(&path, artifact)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", artifact),
    }
    Ok(())
}

fn run_check(settings: &SettingsArgs) -> Result<()> {
    let config = resolve_config(settings.config.as_deref(), &settings.overrides())?;
    let values = generate_table(&config)?;

    println!("Timer tick rate:   {} Hz", config.tick_hz());
    println!("Half cycle:        {:.2} ticks", config.half_cycle_ticks());
    println!("Levels:            {}", values.len());
    println!("0% power delay:    {} ticks", values[0]);
    println!("100% power delay:  {} ticks", values[values.len() - 1]);
    println!(
        "{}",
        serde_json::to_string_pretty(&config).context("Failed to serialize settings")?
    );
    Ok(())
}
