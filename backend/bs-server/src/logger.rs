use crate::error::{Result as ServerErrorResult, ServerError};

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, Output};
use log::{LevelFilter, info};

/// Initialize the global logger.
///
/// Lines look like `[<rfc3339> - <LEVEL>] <message> [<file>:<line>]`.
/// Levels are colored only on stdout, never in a log file.
pub fn initialize(
    log_level: bs_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;
    let output = open_output(log_file.as_deref())?;
    let colors = (colored && log_file.is_none()).then(level_colors);

    Dispatch::new()
        .level(level_filter)
        .level_for("hyper_util", LevelFilter::Info)
        .level_for("reqwest", LevelFilter::Info)
        .format(move |out, message, record| {
            let now = humantime::format_rfc3339(SystemTime::now());
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            match colors {
                Some(colors) => out.finish(format_args!(
                    "[{} - {}] {} [{}:{}]",
                    now,
                    colors.color(record.level()),
                    message,
                    file,
                    line
                )),
                None => out.finish(format_args!(
                    "[{} - {}] {} [{}:{}]",
                    now,
                    record.level(),
                    message,
                    file,
                    line
                )),
            }
        })
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    // Dependencies that emit tracing events end up in the same log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// Stdout, or the log file opened for append with its directory created.
pub(crate) fn open_output(log_file: Option<&Path>) -> ServerErrorResult<Output> {
    let Some(path) = log_file else {
        return Ok(std::io::stdout().into());
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ServerError::Logger {
            message: format!("Failed to create log directory {}: {}", dir.display(), e),
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })?;

    Ok(file.into())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}
