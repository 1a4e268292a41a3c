use super::{CliModeResult, Session};
use crate::{
    Cli,
    common::{
        CreateAnswer, TodaysNote, ask_to_create, create_note, open_file_in_editor, resolve_editor,
        todays_note,
    },
    render::Renderer,
};
use anyhow::Result;
use bedtime_core::Config;
use log::{debug, warn};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

/// What happened to today's note before opening it.
#[derive(Debug, PartialEq, Eq)]
enum Prepared {
    Existing,
    Created {
        /// Settings file that now says "don't ask again", if that was asked for
        /// and could be saved.
        remembered_in: Option<PathBuf>,
    },
    Declined,
}

/// Opens today's daily note, creating it first if needed (and allowed).
pub fn open_mode(cli: &Cli, renderer: &Renderer, session: &mut Session) -> Result<CliModeResult> {
    let note = todays_note(&session.config, session.now);

    match prepare_note(
        &note,
        cli.yes,
        &mut session.config,
        io::stdin().lock(),
        io::stdout(),
    )? {
        Prepared::Declined => {
            renderer.print_info("Nothing was created.");
            return Ok(CliModeResult::Finish);
        }
        Prepared::Created { remembered_in } => {
            renderer.print_info(&format!("Created {}", note.path.display()));
            if let Some(path) = remembered_in {
                renderer.print_md(&format!(
                    "You can turn confirmation back on in `{}`.",
                    path.display()
                ));
            }
        }
        Prepared::Existing => {}
    }

    debug!(
        "Therefore opening {} (the note for {})",
        note.path.display(),
        note.date
    );
    let editor = resolve_editor(session.config.editor.as_deref());
    open_file_in_editor(&editor, &note.path)?;
    Ok(CliModeResult::Finish)
}

/// Makes sure today's note exists, asking on `input`/`output` first unless
/// `yes` is set or the settings say not to ask.
///
/// The note is created before "don't ask again" is saved; failing to save
/// that setting only logs a warning.
fn prepare_note(
    note: &TodaysNote,
    yes: bool,
    config: &mut Config,
    input: impl BufRead,
    output: impl Write,
) -> Result<Prepared> {
    if note.path.exists() {
        return Ok(Prepared::Existing);
    }

    let answer = if yes || !config.confirm_before_create {
        CreateAnswer::Create
    } else {
        ask_to_create(input, output)?
    };
    if answer == CreateAnswer::NeverMind {
        return Ok(Prepared::Declined);
    }

    if let Err(e) = create_note(&note.path) {
        warn!("Failed to retrieve or create daily note: {e:#}");
        return Err(e);
    }

    let mut remembered_in = None;
    if answer == CreateAnswer::CreateAndDontAskAgain {
        config.confirm_before_create = false;
        match config.save() {
            Ok(path) => remembered_in = Some(path),
            Err(e) => warn!("Couldn't remember to stop asking: {e:#}"),
        }
    }
    Ok(Prepared::Created { remembered_in })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::{at, mk_config};
    use bedtime_core::SettingsFile;
    use std::fs;
    use tempfile::tempdir;

    fn late_night_note(config: &Config) -> TodaysNote {
        todays_note(config, at(2026, 1, 2, 3, 45))
    }

    #[test]
    fn existing_note_is_left_alone() {
        let tmp = tempdir().unwrap();
        let mut config = mk_config(tmp.path().to_path_buf());
        let note = late_night_note(&config);
        create_note(&note.path).unwrap();
        fs::write(&note.path, "already here").unwrap();

        let mut out = Vec::new();
        let prepared = prepare_note(&note, false, &mut config, &b""[..], &mut out).unwrap();
        assert_eq!(prepared, Prepared::Existing);
        assert!(out.is_empty());
        assert_eq!(fs::read_to_string(&note.path).unwrap(), "already here");
    }

    #[test]
    fn yes_flag_creates_without_asking() {
        let tmp = tempdir().unwrap();
        let mut config = mk_config(tmp.path().to_path_buf());
        let note = late_night_note(&config);

        let mut out = Vec::new();
        let prepared = prepare_note(&note, true, &mut config, &b"n\n"[..], &mut out).unwrap();
        assert_eq!(prepared, Prepared::Created { remembered_in: None });
        assert!(out.is_empty());
        assert!(note.path.is_file());
        assert!(note.path.ends_with("Daily/2026-01-01.md"));
    }

    #[test]
    fn disabled_confirmation_creates_without_asking() {
        let tmp = tempdir().unwrap();
        let mut config = mk_config(tmp.path().to_path_buf());
        config.confirm_before_create = false;
        let note = late_night_note(&config);

        let mut out = Vec::new();
        let prepared = prepare_note(&note, false, &mut config, &b"n\n"[..], &mut out).unwrap();
        assert_eq!(prepared, Prepared::Created { remembered_in: None });
        assert!(out.is_empty());
        assert!(note.path.is_file());
    }

    #[test]
    fn never_mind_creates_nothing() {
        let tmp = tempdir().unwrap();
        let mut config = mk_config(tmp.path().to_path_buf());
        let note = late_night_note(&config);

        let mut out = Vec::new();
        let prepared = prepare_note(&note, false, &mut config, &b"\n"[..], &mut out).unwrap();
        assert_eq!(prepared, Prepared::Declined);
        assert!(!out.is_empty());
        assert!(!note.path.exists());
        assert!(config.confirm_before_create);
    }

    #[test]
    fn yes_answer_creates_and_keeps_asking() {
        let tmp = tempdir().unwrap();
        let mut config = mk_config(tmp.path().to_path_buf());
        let note = late_night_note(&config);

        let mut out = Vec::new();
        let prepared = prepare_note(&note, false, &mut config, &b"y\n"[..], &mut out).unwrap();
        assert_eq!(prepared, Prepared::Created { remembered_in: None });
        assert!(note.path.is_file());
        assert!(config.confirm_before_create);
    }

    #[test]
    fn always_answer_saves_dont_ask_again() {
        let tmp = tempdir().unwrap();
        let settings = tmp.path().join("config.toml");
        let mut config = mk_config(tmp.path().join("notes"));
        config.source = SettingsFile::Loaded(settings.clone());
        let note = late_night_note(&config);

        let mut out = Vec::new();
        let prepared = prepare_note(&note, false, &mut config, &b"a\n"[..], &mut out).unwrap();
        assert_eq!(
            prepared,
            Prepared::Created {
                remembered_in: Some(settings.clone())
            }
        );
        assert!(note.path.is_file());
        assert!(!config.confirm_before_create);
        let saved = fs::read_to_string(&settings).unwrap();
        assert!(saved.contains("confirm_before_creating_nonexistent_daily_note = false"));
    }

    #[test]
    fn note_is_created_even_if_settings_cannot_be_saved() {
        let tmp = tempdir().unwrap();
        let settings = tmp.path().join("config.toml");
        fs::write(&settings, "editor = hx").unwrap();
        let mut config = mk_config(tmp.path().join("notes"));
        config.source = SettingsFile::Invalid(settings.clone());
        let note = late_night_note(&config);

        let mut out = Vec::new();
        let prepared = prepare_note(&note, false, &mut config, &b"a\n"[..], &mut out).unwrap();
        assert_eq!(prepared, Prepared::Created { remembered_in: None });
        assert!(note.path.is_file());
        assert_eq!(fs::read_to_string(&settings).unwrap(), "editor = hx");
    }
}
