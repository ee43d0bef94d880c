//! The logging sink and the process-wide logger.

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use alt_format::{default_formatter, stringify_all, TemplateFormatter};
use once_cell::sync::OnceCell;

use crate::error::{LogError, Result};
use crate::record::{format_line, Severity, SourceLocation};

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// Writes formatted, severity-tagged lines to a destination stream.
///
/// Messages go through the injected [`TemplateFormatter`] before being laid
/// out as `[LABEL] | file:line | message`. Each line is written and flushed
/// under a lock so concurrent callers never interleave within a line.
///
/// ```rust
/// use alt_format::RenderMode;
/// use alt_log::{Logger, MemoryWriter, Severity, SourceLocation};
///
/// let buffer = MemoryWriter::new();
/// let logger = Logger::new(buffer.clone()).with_formatter(RenderMode::Substitute);
///
/// logger
///     .log(Severity::Info, SourceLocation::new("main.rs", 7), "loaded {} assets", &[&12])
///     .unwrap();
/// assert_eq!(buffer.contents(), "[INFO] | main.rs:7 | loaded 12 assets\n");
/// ```
pub struct Logger {
    formatter: Arc<dyn TemplateFormatter>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// Creates a logger writing to `writer` with the process-wide formatter.
    ///
    /// The render mode is looked up when a message is formatted, not here.
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            formatter: default_formatter(),
            out: Mutex::new(Box::new(writer)),
        }
    }

    /// Creates a logger writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Replaces the formatter used for message templates.
    pub fn with_formatter(self, formatter: impl TemplateFormatter + 'static) -> Self {
        self.with_shared_formatter(Arc::new(formatter))
    }

    /// Replaces the formatter with one shared with other call sites.
    pub fn with_shared_formatter(mut self, formatter: Arc<dyn TemplateFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// The formatter applied to message templates.
    pub fn formatter(&self) -> &Arc<dyn TemplateFormatter> {
        &self.formatter
    }

    /// Formats `template` with `args` and writes it as a tagged line.
    pub fn log(
        &self,
        severity: Severity,
        location: SourceLocation<'_>,
        template: &str,
        args: &[&dyn Display],
    ) -> io::Result<()> {
        let message = self.formatter.format(template, &stringify_all(args));
        self.write_line(severity, location, &message)
    }

    /// Writes an already formatted message as a tagged line.
    pub fn write_line(
        &self,
        severity: Severity,
        location: SourceLocation<'_>,
        message: &str,
    ) -> io::Result<()> {
        self.write_raw(&format_line(severity, location, message))
    }

    /// Formats `template` with `args` and writes it without tag or location.
    pub fn print(&self, template: &str, args: &[&dyn Display]) -> io::Result<()> {
        let message = self.formatter.format(template, &stringify_all(args));
        self.write_raw(&message)
    }

    #[track_caller]
    pub fn info(&self, template: &str, args: &[&dyn Display]) -> io::Result<()> {
        self.log(Severity::Info, SourceLocation::caller(), template, args)
    }

    #[track_caller]
    pub fn warn(&self, template: &str, args: &[&dyn Display]) -> io::Result<()> {
        self.log(Severity::Warn, SourceLocation::caller(), template, args)
    }

    #[track_caller]
    pub fn error(&self, template: &str, args: &[&dyn Display]) -> io::Result<()> {
        self.log(Severity::Error, SourceLocation::caller(), template, args)
    }

    #[track_caller]
    pub fn debug(&self, template: &str, args: &[&dyn Display]) -> io::Result<()> {
        self.log(Severity::Debug, SourceLocation::caller(), template, args)
    }

    pub(crate) fn flush_output(&self) -> io::Result<()> {
        self.lock_output().flush()
    }

    fn write_raw(&self, line: &str) -> io::Result<()> {
        let mut out = self.lock_output();
        writeln!(out, "{}", line)?;
        out.flush()
    }

    // A writer that panicked mid-line leaves nothing we need to repair.
    fn lock_output(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// Returns the process-wide logger, building the stdout default on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::stdout)
}

/// Installs `logger` as the process-wide logger.
///
/// Must happen before the first logging macro runs.
pub fn set_global(logger: Logger) -> Result<()> {
    GLOBAL
        .set(logger)
        .map_err(|_| LogError::AlreadyInitialized)
}

/// In-memory destination, cloneable so tests can read back what was logged.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Written lines, without their terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
