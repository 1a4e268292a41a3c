//! Daily notes on disk.

use anyhow::{Context, Result};
use bedtime_core::{Config, effective_date};
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use std::{
    fs::{self, OpenOptions},
    path::{Component, Path, PathBuf},
};

/// Today's daily note at `now`, considering the cutoff.
pub struct TodaysNote {
    pub date: NaiveDate,
    pub path: PathBuf,
}

pub fn todays_note(config: &Config, now: NaiveDateTime) -> TodaysNote {
    let date = effective_date(now, config.cutoff_minutes);
    let path = config.notes_dir.join(config.convention.note_path(date));
    debug!("today's daily note is {}", path.display());
    TodaysNote { date, path }
}

/// `path` as the note-tree path the daily-note convention expects.
///
/// Paths that lead into `notes_dir`, either directly or from the current
/// directory, lose that prefix; anything else is taken as already relative to
/// the notes root. `.` and `..` are resolved lexically first.
pub fn note_tree_path(config: &Config, path: &Path) -> String {
    let cleaned = lexically_normal(path);
    let from_cwd = cleaned
        .is_relative()
        .then(std::env::current_dir)
        .and_then(Result::ok)
        .map(|cwd| lexically_normal(&cwd.join(&cleaned)));

    let relative = from_cwd
        .as_deref()
        .and_then(|p| p.strip_prefix(&config.notes_dir).ok())
        .or_else(|| cleaned.strip_prefix(&config.notes_dir).ok())
        .unwrap_or(cleaned.as_path());
    relative.to_string_lossy().into_owned()
}

/// Drops `.` and folds `..` into its parent without touching the disk.
/// A leading `..` that has nothing to fold into is kept.
fn lexically_normal(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let folds = matches!(out.components().next_back(), Some(Component::Normal(_)));
                if folds {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Creates an empty note (and its folders). Fails if it already exists.
pub fn create_note(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating parent directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("creating {}", path.display()))?;
    debug!("created {}", path.display());
    Ok(())
}
