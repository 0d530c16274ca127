//! Binary entrypoint for fit4k.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use fit4k::{TARGET_HEIGHT, TARGET_WIDTH};

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "fit4k", version, about = "Fit images onto a 3840x2160 frame")]
struct Cli {
    /// Image file to fit
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output path, always written as PNG (default: `<input-stem>_4k.png`)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter =
        EnvFilter::from_default_env().add_directive(format!("fit4k={}", level).parse().unwrap());
    fmt().with_env_filter(filter).with_target(false).init();
    Ok(())
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}_4k.png"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let output = cli.output.unwrap_or_else(|| default_output(&cli.input));
    fit4k::pipeline::fit_file(&cli.input, &output).with_context(|| {
        format!(
            "fitting {} onto a {}x{} frame",
            cli.input.display(),
            TARGET_WIDTH,
            TARGET_HEIGHT
        )
    })?;

    info!(output = %output.display(), "done");
    Ok(())
}
