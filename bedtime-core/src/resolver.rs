//! Cutoff-adjusted days.
//!
//! With a cutoff of `c` minutes, the day for a calendar date `D` runs from
//! `D 00:00 + c` up to (but not including) the same time on `D + 1`. Times
//! before the cutoff therefore still belong to the previous day: with the
//! default 04:00 cutoff, 2026-01-02 03:45 is part of 2026-01-01.
//!
//! All instants are local wall-clock times. A window is always exactly 24
//! hours of wall-clock time, so consecutive windows tile the timeline with no
//! gaps or overlaps.
//!
//! The cutoff is expected to be within `0..=1439` already; nothing here clamps.
//! Nothing here panics either: instants saturate at the start of the calendar
//! and days without a whole window at its end have none.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use strum_macros::{Display, EnumIter};

use crate::daily_note::DailyNoteConvention;

/// Pretends it is `cutoff_minutes` earlier than `now`.
///
/// The calendar date of the result is the date whose daily note counts as
/// "today". Saturates at the earliest representable instant.
pub fn effective_instant(now: NaiveDateTime, cutoff_minutes: u32) -> NaiveDateTime {
    let effective = now
        .checked_sub_signed(Duration::minutes(i64::from(cutoff_minutes)))
        .unwrap_or(NaiveDateTime::MIN);
    debug!("now = {now}, cutoff = {cutoff_minutes} minutes, pretending that now = {effective}");
    effective
}

/// Calendar date of [`effective_instant`].
pub fn effective_date(now: NaiveDateTime, cutoff_minutes: u32) -> NaiveDate {
    effective_instant(now, cutoff_minutes).date()
}

/// Half-open `[from, to)` span of one logical day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayWindow {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl DayWindow {
    /// Window of the calendar `date`, starting from its local midnight.
    pub fn for_date(date: NaiveDate, cutoff_minutes: u32) -> Option<Self> {
        window_for_date(date.and_time(NaiveTime::MIN), cutoff_minutes)
    }

    /// `from <= t < to`
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.from <= t && t < self.to
    }
}

/// Window that starts `cutoff_minutes` after `date_instant` and lasts 24 hours.
///
/// `date_instant` is normally local midnight of the note's date.
/// `None` when the window would end past the last representable instant.
pub fn window_for_date(date_instant: NaiveDateTime, cutoff_minutes: u32) -> Option<DayWindow> {
    let from = date_instant.checked_add_signed(Duration::minutes(i64::from(cutoff_minutes)))?;
    let to = from.checked_add_signed(Duration::days(1))?;
    Some(DayWindow { from, to })
}

/// Whether a note's day is the one we are in right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum DayStatus {
    #[strum(to_string = "(This is today's daily note.)")]
    Today,
    #[strum(to_string = "(This is not today's daily note.)")]
    NotToday,
}

impl DayStatus {
    /// Text shown next to a daily note's title.
    pub fn annotation(&self) -> String {
        self.to_string()
    }
}

pub fn classify(t: NaiveDateTime, window: &DayWindow) -> DayStatus {
    if window.contains(t) {
        DayStatus::Today
    } else {
        DayStatus::NotToday
    }
}

/// Day window of the note at `candidate_path`.
///
/// `None` when the file is not a daily note: wrong extension, outside the
/// daily-note folder, a basename that isn't a date in the configured format,
/// or a date too close to the end of the calendar to have a whole day.
pub fn window_for_note(
    candidate_path: &str,
    convention: &DailyNoteConvention,
    cutoff_minutes: u32,
) -> Option<DayWindow> {
    let date = convention.date_of(candidate_path)?;
    DayWindow::for_date(date, cutoff_minutes)
}

pub fn is_daily_note(
    candidate_path: &str,
    convention: &DailyNoteConvention,
    cutoff_minutes: u32,
) -> bool {
    window_for_note(candidate_path, convention, cutoff_minutes).is_some()
}
