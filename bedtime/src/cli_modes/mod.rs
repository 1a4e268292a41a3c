mod cli_mode;
mod cutoff_mode;
mod open_mode;
mod path_mode;
mod status_mode;
mod suggest_mode;

pub use cli_mode::{CliModeResult, Session};
pub use cutoff_mode::cutoff_mode;
pub use open_mode::open_mode;
pub use path_mode::path_mode;
pub use status_mode::status_mode;
pub use suggest_mode::suggest_mode;
