mod cli_modes;
mod common;
mod logging;
mod render;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use bedtime_core::Config;
use chrono::{Local, NaiveDateTime};
use clap::{ArgGroup, Parser};
use cli_modes::{CliModeResult, Session};
use render::{ColorMode, RenderOptions, Renderer};
use std::{path::PathBuf, process::ExitCode};

/// Input format of `--now`.
const NOW_FORMAT: &str = "%Y-%m-%d %H:%M";

/// bedtime: daily notes for people who go to bed late
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("solo").args(["path", "status", "cutoff", "suggest"])),
)]
pub struct Cli {
    /// Prints the path of today's daily note (considering the cutoff)
    #[arg(long, short)]
    pub path: bool,
    /// Tells whether FILE is today's daily note (e.g. `bedtime --status ~/notes/Daily/2026-01-01.md`)
    #[arg(long, value_name = "FILE")]
    pub status: Option<PathBuf>,
    /// Prints the cutoff, or sets it when a value is given (e.g. `bedtime --cutoff 4:30`)
    #[arg(long, value_name = "HH:MM", num_args = 0..=1)]
    pub cutoff: Option<Option<String>>,
    /// Shows how a cutoff value would be read (e.g. `bedtime --suggest 130`)
    #[arg(long, value_name = "QUERY")]
    pub suggest: Option<String>,
    /// Creates today's note without asking if it doesn't exist yet
    #[arg(long, short)]
    pub yes: bool,
    /// Pretends it is this time instead of now, as "YYYY-MM-DD HH:MM"
    #[arg(long, env = "BEDTIME_NOW")]
    pub now: Option<String>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Prints debug logs to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bedtime: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init(cli.verbose)?;

    let mut session = Session {
        config: Config::load()?,
        now: resolve_now(cli.now.as_deref())?,
    };
    let renderer = Renderer::new(Some(RenderOptions {
        use_color: render::use_color(cli.color),
    }));

    let modes = [
        cli_modes::path_mode,
        cli_modes::status_mode,
        cli_modes::cutoff_mode,
        cli_modes::suggest_mode,
    ];
    for mode in modes {
        if let CliModeResult::Finish = mode(&cli, &renderer, &mut session)? {
            return Ok(());
        }
    }

    cli_modes::open_mode(&cli, &renderer, &mut session)?;
    Ok(())
}

fn resolve_now(now: Option<&str>) -> Result<NaiveDateTime> {
    match now {
        Some(s) => NaiveDateTime::parse_from_str(s.trim(), NOW_FORMAT)
            .with_context(|| format!("'{s}' is not a time like \"2026-01-02 03:45\"")),
        None => Ok(Local::now().naive_local()),
    }
}
