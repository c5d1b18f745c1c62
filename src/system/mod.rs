//! System boundary: command dispatch, console encoding, output extraction,
//! working-directory paths, and logging initialization.

pub mod command;
pub mod encoding;
pub mod extract;
pub mod paths;

use log::LevelFilter;

use crate::config::LoggerConfig;
use crate::logger::FileLogger;

/// Install the file logger as the global `log` sink.
///
/// Must run before anything logs. A second call (only tests do this) is a
/// no-op because the global logger can be set once per process.
pub fn initialize_logging(config: &LoggerConfig) {
    let level = parse_level(&config.level);
    match FileLogger::new(config.log_file.clone().into(), level, config.color) {
        Ok(logger) => {
            if log::set_boxed_logger(Box::new(logger)).is_ok() {
                log::set_max_level(level);
            }
        }
        Err(e) => {
            eprintln!("logging unavailable, continuing without file log: {e}");
        }
    }
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}
