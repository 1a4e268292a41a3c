use bedtime_core::{Config, DailyNoteConvention, SettingsFile};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration in this crate.
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

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid date")
        .and_hms_opt(h, min, 0)
        .expect("valid time")
}
