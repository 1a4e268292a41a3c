use bedtime_core::Config;
use chrono::NaiveDateTime;

pub enum CliModeResult {
    /// The mode handled the invocation.
    Finish,
    /// The mode's flags weren't given; try the next one.
    NothingToDo,
}

/// Everything a mode needs besides the parsed arguments.
pub struct Session {
    pub config: Config,
    /// Reference instant; the real clock unless `--now` overrides it.
    pub now: NaiveDateTime,
}
