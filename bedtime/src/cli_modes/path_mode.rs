use super::{CliModeResult, Session};
use crate::{Cli, common::todays_note, render::Renderer};
use anyhow::Result;

pub fn path_mode(cli: &Cli, renderer: &Renderer, session: &mut Session) -> Result<CliModeResult> {
    if !cli.path {
        return Ok(CliModeResult::NothingToDo);
    }
    let note = todays_note(&session.config, session.now);
    renderer.print_value(&note.path.display().to_string());
    Ok(CliModeResult::Finish)
}
