use super::{CliModeResult, Session};
use crate::{Cli, common::note_tree_path, render::Renderer};
use anyhow::Result;
use bedtime_core::{classify, window_for_note};

pub fn status_mode(cli: &Cli, renderer: &Renderer, session: &mut Session) -> Result<CliModeResult> {
    let Some(file) = &cli.status else {
        return Ok(CliModeResult::NothingToDo);
    };
    let config = &session.config;
    let tree_path = note_tree_path(config, file);

    match window_for_note(&tree_path, &config.convention, config.cutoff_minutes) {
        Some(window) => {
            renderer.print_status(&tree_path, classify(session.now, &window));
        }
        None => {
            renderer.print_info(&format!("{tree_path} is not a daily note."));
        }
    }
    Ok(CliModeResult::Finish)
}
