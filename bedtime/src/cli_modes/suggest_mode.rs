use super::{CliModeResult, Session};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use bedtime_core::suggest;

pub fn suggest_mode(cli: &Cli, renderer: &Renderer, _session: &mut Session) -> Result<CliModeResult> {
    let Some(query) = &cli.suggest else {
        return Ok(CliModeResult::NothingToDo);
    };
    renderer.print_suggestions(suggest(query));
    Ok(CliModeResult::Finish)
}
