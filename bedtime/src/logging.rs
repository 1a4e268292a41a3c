use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};

/// Starts logging to stderr. `RUST_LOG` wins over the `--verbose` default.
///
/// Keep the returned handle alive for as long as logs should be written.
pub fn init(verbose: bool) -> Result<LoggerHandle> {
    let level = if verbose { "debug" } else { "warn" };
    Logger::try_with_env_or_str(level)
        .with_context(|| format!("invalid log level `{level}`"))?
        .log_to_stderr()
        .start()
        .context("failed to start logger")
}
