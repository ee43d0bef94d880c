//! # alt-log - Call-Site Tagged Console Logging
//!
//! Severity-tagged logging built on [`alt_format`]. Each line carries a
//! fixed-width label and the call site:
//!
//! ```text
//! [INFO] | src/main.rs:12 | loaded | <== { assets/logo.png }
//! [WARN] | src/main.rs:20 | retrying in 5s
//! ```
//!
//! Messages are templates plus positional arguments, merged by whatever
//! [`TemplateFormatter`](alt_format::TemplateFormatter) the logger holds. By
//! default that is the process-wide [`RenderMode`](alt_format::RenderMode).
//!
//! ## Macros
//!
//! | Macro | Label |
//! |-------|-------|
//! | [`alt_info!`] | `INFO` |
//! | [`alt_warn!`] | `WARN` |
//! | [`alt_err!`] | `ERRO` |
//! | [`alt_debug!`] | `DEBG` |
//! | [`alt_print!`] | none, message only |
//!
//! All macros write through [`global()`] and never fail: a broken output
//! stream is ignored rather than surfaced to the caller.
//!
//! ```rust,no_run
//! use alt_log::{alt_info, alt_warn};
//!
//! let path = "assets/logo.png";
//! alt_info!("loaded {}", path);
//! alt_warn!("retrying in {}s", 5);
//! ```
//!
//! ## Custom destinations
//!
//! Install a [`Logger`] before the first macro runs to redirect output or
//! swap the formatter. The same logger can also receive `log` facade records
//! via [`install_global`].

mod bridge;
mod error;
mod logger;
mod record;

pub use bridge::install_global;
pub use error::{LogError, Result};
pub use logger::{global, set_global, Logger, MemoryWriter};
pub use record::{format_line, Severity, SourceLocation};

#[doc(hidden)]
#[macro_export]
macro_rules! __alt_log {
    ($severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        let _ = $crate::global().log(
            $severity,
            $crate::SourceLocation::new(::std::file!(), ::std::line!()),
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        );
    }};
}

/// Logs an `INFO` line through the global logger.
#[macro_export]
macro_rules! alt_info {
    ($($arg:tt)+) => {
        $crate::__alt_log!($crate::Severity::Info, $($arg)+)
    };
}

/// Logs a `WARN` line through the global logger.
#[macro_export]
macro_rules! alt_warn {
    ($($arg:tt)+) => {
        $crate::__alt_log!($crate::Severity::Warn, $($arg)+)
    };
}

/// Logs an `ERRO` line through the global logger.
#[macro_export]
macro_rules! alt_err {
    ($($arg:tt)+) => {
        $crate::__alt_log!($crate::Severity::Error, $($arg)+)
    };
}

/// Logs a `DEBG` line through the global logger.
#[macro_export]
macro_rules! alt_debug {
    ($($arg:tt)+) => {
        $crate::__alt_log!($crate::Severity::Debug, $($arg)+)
    };
}

/// Prints a formatted message through the global logger, without label or
/// location.
#[macro_export]
macro_rules! alt_print {
    ($template:expr $(, $arg:expr)* $(,)?) => {{
        let _ = $crate::global().print(
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        );
    }};
}
