use super::{CliModeResult, Session};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use bedtime_core::sexagesimal::{decode, encode};
use log::info;

pub fn cutoff_mode(cli: &Cli, renderer: &Renderer, session: &mut Session) -> Result<CliModeResult> {
    let Some(value) = &cli.cutoff else {
        return Ok(CliModeResult::NothingToDo);
    };
    let config = &mut session.config;

    if let Some(value) = value {
        config.set_cutoff(i64::from(decode(value)));
        let path = config.save()?;
        info!("cutoff set to {} in {}", config.cutoff_minutes, path.display());
        renderer.print_info(&format!("Cutoff saved to {}", path.display()));
    }
    renderer.print_cutoff(&encode(config.cutoff_minutes), config.cutoff_minutes);
    Ok(CliModeResult::Finish)
}
