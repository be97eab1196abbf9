use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod convert;
mod error;
mod header;
mod loader;

use convert::convert;

/// Convert an image to VGA Mode 13h format (320x200, 256 colors)
#[derive(Parser, Debug)]
#[command(name = "mode13h-convert")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Image to convert (PNG, JPEG, BMP, ...)
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// C header to write
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let conversion = convert(&cli.input, &cli.output)
        .with_context(|| format!("Failed to convert {:?}", cli.input))?;

    let placement = conversion.placement;
    debug!(
        "{}x{} -> {}x{} at ({}, {}), {} colors, checksum 0x{:08X}",
        conversion.source_width,
        conversion.source_height,
        placement.new_width,
        placement.new_height,
        placement.x_offset,
        placement.y_offset,
        conversion.distinct_colors,
        conversion.checksum
    );
    debug!("Mean quantization error: {:.2}", conversion.quantization_error);

    Ok(())
}

fn main() {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            let program = std::env::args_os()
                .next()
                .map(|a| a.to_string_lossy().into_owned())
                .unwrap_or_else(|| "mode13h-convert".to_string());
            eprintln!("Usage: {} <input.png> <output.h>", program);
            eprintln!("{}", err.kind());
            std::process::exit(1);
        }
    };

    init_logging();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
