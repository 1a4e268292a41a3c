//! Bedtime-aware daily notes: "today" doesn't start until the configured
//! cutoff, so writing at 2 AM still lands in yesterday's note.

pub mod config;
pub mod daily_note;
pub mod resolver;
pub mod sexagesimal;

#[cfg(test)]
mod tests;

pub use config::{Config, SettingsFile};
pub use daily_note::{DailyNoteConvention, matches_note_naming_convention, normalize_path};
pub use resolver::{
    DayStatus, DayWindow, classify, effective_date, effective_instant, is_daily_note,
    window_for_date, window_for_note,
};
pub use sexagesimal::{Suggestion, Suggestions, suggest};
