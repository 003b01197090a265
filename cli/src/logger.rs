//! Application-level logging configuration.

use log::{LevelFilter, SetLoggerError};

/// The application-level logger.
struct IconLogger;

impl log::Log for IconLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.target().starts_with("inline_svg") || metadata.target().starts_with("cli")
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{}] {:<5} {}",
                chrono::Local::now().format("%a %Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// The global logging instance.
static LOGGER: IconLogger = IconLogger;

/// Initializes logging.
///
/// # Errors
///
/// This will return an error if the logger has already been initialized.
pub fn init_logger(debug: bool) -> Result<(), SetLoggerError> {
    let max_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    log::set_logger(&LOGGER).map(|()| log::set_max_level(max_level))
}
