//! Adapter from the `log` facade onto [`Logger`].
//!
//! Libraries that emit through `log::info!` and friends end up in the same
//! stream, with the same `[LABEL] | file:line | message` layout. Facade
//! records arrive already formatted, so they skip the template renderer.

use log::{LevelFilter, Metadata, Record};

use crate::error::Result;
use crate::logger::{global, Logger};
use crate::record::{Severity, SourceLocation};

impl log::Log for Logger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let location = SourceLocation::new(
            record.file().unwrap_or(record.target()),
            record.line().unwrap_or(0),
        );
        let message = record.args().to_string();
        let _ = self.write_line(Severity::from(record.level()), location, &message);
    }

    fn flush(&self) {
        let _ = self.flush_output();
    }
}

impl Logger {
    /// Hands this logger to the `log` facade.
    pub fn install(self, max_level: LevelFilter) -> Result<()> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

/// Routes the `log` facade into the process-wide logger.
pub fn install_global(max_level: LevelFilter) -> Result<()> {
    log::set_logger(global())?;
    log::set_max_level(max_level);
    Ok(())
}
