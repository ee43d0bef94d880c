//! # alt-format - Positional Template Formatting
//!
//! `alt-format` formats a message template against a list of positional
//! values without a full format-string engine. It backs the logging macros
//! in `alt-log` and the `alt_fmt!` string builder.
//!
//! ## Pipeline
//!
//! ```text
//! template + values ──► stringify_all ──► render(mode) ──► String
//! ```
//!
//! Values are first turned into text tokens in call order (booleans as
//! `true`/`false`, floats with their default projection). The tokens are then
//! merged into the template by the active [`RenderMode`]:
//!
//! - **Append** (default): the template is kept as-is and the arguments are
//!   listed after it: `loaded | <== { a.png } : { 3 }`
//! - **Substitute** (`substitute` feature or `ALT_FORMAT_MODE=substitute`):
//!   each `{}`-shaped placeholder is replaced in order. Directives such as
//!   `{:>8}` are recognized but not honored.
//!
//! ```rust
//! use alt_format::{render_template_with, RenderMode};
//!
//! let out = render_template_with("user={} count={}", &[&"alice", &3], RenderMode::Substitute);
//! assert_eq!(out, "user=alice count=3");
//!
//! let out = render_template_with("user={} count={}", &[&"alice", &3], RenderMode::Append);
//! assert_eq!(out, "user={} count={} | <== { alice } : { 3 }");
//! ```
//!
//! Rendering never fails. Missing arguments leave their placeholders
//! visible; surplus arguments are listed (append) or dropped (substitute).

pub mod config;
mod error;
pub mod formatter;
pub mod placeholder;
pub mod render;
pub mod stringify;

use std::fmt::Display;

pub use config::{active_mode, init, Config, MODE_ENV_VAR};
pub use error::{FormatError, Result};
pub use formatter::{default_formatter, ActiveMode, TemplateFormatter};
pub use placeholder::{count_placeholders, find_placeholder, Scan};
pub use render::{render, RenderMode, APPEND_SEPARATOR};
pub use stringify::{stringify_all, stringify_json, stringify_serialized};

/// Formats `template` with `values` using the process-wide render mode.
pub fn render_template(template: &str, values: &[&dyn Display]) -> String {
    render_template_with(template, values, active_mode())
}

/// Formats `template` with `values` using an explicit render mode.
pub fn render_template_with(template: &str, values: &[&dyn Display], mode: RenderMode) -> String {
    render(template, &stringify_all(values), mode)
}

/// Builds a string from a template and positional arguments.
///
/// ```rust
/// let path = "assets/logo.png";
/// let msg = alt_format::alt_fmt!("loaded {}", path);
/// assert!(msg.contains("assets/logo.png"));
/// ```
#[macro_export]
macro_rules! alt_fmt {
    ($template:expr $(,)?) => {
        $crate::render_template($template, &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::render_template(
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),+],
        )
    };
}
