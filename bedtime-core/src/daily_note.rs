//! Which files count as daily notes, and what they are called.
//!
//! Paths here are note-tree-relative strings with `/` separators, e.g.
//! `Daily/2026-01-02.md`. Turning them into real file system paths is the
//! caller's business.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write;

/// File extension (without the dot) every daily note has.
pub const NOTE_EXTENSION: &str = "md";

/// Date format used when none is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

static SLASH_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\\/]+").expect("valid regex"));

/// Canonical form of a note-tree path.
///
/// Backslashes become `/`, repeated separators collapse, leading and trailing
/// separators are dropped and non-breaking spaces become plain spaces.
/// The root itself is `/`.
pub fn normalize_path(path: &str) -> String {
    let collapsed = SLASH_RUNS.replace_all(path, "/");
    let normalized = collapsed
        .trim_matches('/')
        .replace(['\u{00A0}', '\u{202F}'], " ");
    if normalized.is_empty() {
        "/".to_string()
    } else {
        normalized
    }
}

/// Last path segment, e.g. `2026-01-02.md`.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Splits a file name into `(basename, extension)` at its last dot.
/// A name without a dot (or starting with its only dot) has no extension.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(0) | None => (name, None),
        Some(i) => (&name[..i], Some(&name[i + 1..])),
    }
}

/// Whether `candidate_path` sits directly in `directory` and is a Markdown file.
///
/// This says nothing about whether the name is a valid date; a file that
/// fails here is not a daily note no matter what it is called.
pub fn matches_note_naming_convention(candidate_path: &str, directory: &str) -> bool {
    let name = file_name(candidate_path);
    let is_note = matches!(
        split_extension(name).1,
        Some(ext) if ext.eq_ignore_ascii_case(NOTE_EXTENSION)
    );
    is_note && normalize_path(candidate_path) == normalize_path(&format!("{directory}/{name}"))
}

/// Where daily notes live and how their names encode a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyNoteConvention {
    folder: String,
    format: String,
}

impl DailyNoteConvention {
    /// Builds a convention, rejecting `format`s chrono can't render as a date
    /// (unknown specifiers, or time-of-day fields like `%H`).
    pub fn new(folder: impl Into<String>, format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        if format.trim().is_empty() {
            bail!("date format must not be empty");
        }
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            bail!("invalid date format '{format}'");
        }
        // Renders one date to catch specifiers that need more than a date.
        let mut sample = String::new();
        if write!(sample, "{}", NaiveDate::MIN.format(&format)).is_err() {
            bail!("date format '{format}' needs more than a calendar date");
        }
        Ok(Self {
            folder: folder.into(),
            format,
        })
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// `2026-01-02.md` for the default format.
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!("{}.{NOTE_EXTENSION}", date.format(&self.format))
    }

    /// Normalized note-tree path of the note for `date`.
    pub fn note_path(&self, date: NaiveDate) -> String {
        normalize_path(&format!("{}/{}", self.folder, self.file_name(date)))
    }

    /// Reads the date out of a note basename (file name without extension).
    ///
    /// Parsing is strict: the whole basename must be exactly what the format
    /// would produce, so `2026-1-2` is not a date under `%Y-%m-%d`.
    pub fn parse_date(&self, basename: &str) -> Option<NaiveDate> {
        let date = NaiveDate::parse_from_str(basename, &self.format).ok()?;
        (date.format(&self.format).to_string() == basename).then_some(date)
    }

    /// See [`matches_note_naming_convention`].
    pub fn matches(&self, candidate_path: &str) -> bool {
        matches_note_naming_convention(candidate_path, &self.folder)
    }

    /// The date a note is for, if it is a daily note at all.
    pub fn date_of(&self, candidate_path: &str) -> Option<NaiveDate> {
        if !self.matches(candidate_path) {
            return None;
        }
        let (basename, _) = split_extension(file_name(candidate_path));
        self.parse_date(basename)
    }
}

impl Default for DailyNoteConvention {
    fn default() -> Self {
        Self {
            folder: String::new(),
            format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}
