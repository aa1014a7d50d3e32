//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {M} - {m}{n}";

/// Initialise logging from `config_file`, or log to stderr at info level
/// when the file is missing or unusable.
pub fn init_logging(config_file: &str) -> Result<(), Box<dyn Error>> {
    let mut file_error = None;
    if Path::new(config_file).exists() {
        match log4rs::init_file(config_file, Default::default()) {
            Ok(()) => return Ok(()),
            Err(e) => file_error = Some(e),
        }
    }
    log4rs::init_config(fallback_config()?)?;
    match file_error {
        Some(e) => log::warn!("Ignoring {config_file}: {e}"),
        None => log::debug!("No {config_file}, logging to stderr"),
    }
    Ok(())
}

/// Console appender on stderr, so stdout only carries the report.
pub fn fallback_config() -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    Ok(config)
}
