use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;
use mpw_config::{Config, FlagOrigin, FlagResolution};
use std::io::Write;

/// Report whether Master Password should check for updates.
///
/// Reads `MPW_CHECKUPDATES` from the environment and prints the resolved
/// value along with where it came from.
#[derive(Debug, Parser)]
#[command(name = "mpw-config", version, about)]
struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Print only `true` or `false` (same as `--format plain`)
    #[arg(long, conflicts_with = "format")]
    plain: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Json,
    Plain,
}

impl Args {
    fn output_format(&self) -> OutputFormat {
        if self.plain {
            OutputFormat::Plain
        } else {
            self.format
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let resolution = config.resolve_check_for_updates();
    if let Some(note) = unset_note(&resolution) {
        info!("{note}");
    }

    let stdout = std::io::stdout();
    write_resolution(stdout.lock(), &resolution, args.output_format())
}

fn unset_note(resolution: &FlagResolution) -> Option<String> {
    match resolution.origin {
        FlagOrigin::Unset => Some(format!(
            "{} is unset; update checks default to {}",
            resolution.key, resolution.value
        )),
        _ => None,
    }
}

fn write_resolution(
    mut out: impl Write,
    resolution: &FlagResolution,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            writeln!(out, "{}", resolution.value).context("failed to write to stdout")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, resolution)
                .context("failed to write resolution as JSON")?;
            writeln!(out).context("failed to write to stdout")?;
        }
    }
    Ok(())
}
