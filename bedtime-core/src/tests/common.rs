use crate::{Config, DailyNoteConvention, config::SettingsFile};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(notes_dir: PathBuf) -> Config {
    Config {
        notes_dir,
        editor: None,
        convention: DailyNoteConvention::new("Daily", "%Y-%m-%d").expect("valid format"),
        cutoff_minutes: 240,
        confirm_before_create: true,
        source: SettingsFile::Missing,
    }
}
