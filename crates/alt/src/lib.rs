//! # alt - Everyday Helpers
//!
//! A grab bag of small utilities shared between projects:
//!
//! - [`aliases`]: terse names for containers and pointers
//! - [`time`]: unit conversion constants and [`ElapsedTimer`]
//! - [`strings`]: [`str_replace`], [`str_split`]
//! - [`binary`]: [`bin_read`], [`bin_check_magic`]
//! - [`files`]: whole-file reads/writes and extension checks
//! - [`math`]: range remapping, tolerant comparison, angle wrapping
//! - [`defer`](mod@defer): scope-exit guards
//!
//! Formatting and logging come from [`alt_format`] and [`alt_log`], both
//! re-exported here along with their macros.
//!
//! ```rust
//! use alt::{alt_fmt, str_split};
//!
//! let parts = str_split("a,b", ",");
//! let msg = alt_fmt!("split into {}", parts.len());
//! assert!(msg.contains('2'));
//! ```
//!
//! ## Render modes
//!
//! `alt_fmt!` and the logging macros list their arguments after the template
//! by default (`split into {} | <== { 2 }`). Enable the `substitute` feature,
//! or set `ALT_FORMAT_MODE=substitute`, to replace `{}` placeholders in place
//! instead.

pub mod aliases;
pub mod binary;
pub mod defer;
mod error;
pub mod files;
pub mod math;
pub mod strings;
pub mod time;

pub use aliases::{bit, snew, unew, Omap, Opt, Oset, Sptr, Str, Umap, Uptr, Uset};
pub use binary::{bin_check_magic, bin_read};
pub use defer::Defer;
pub use error::{Result, UtilError};
pub use files::{file_check_extension, file_read, file_write_append, file_write_trunc};
pub use math::{clamp_angle, fuzzy_eq, fuzzy_eq_n, fuzzy_eq_within, map, map_100, FUZZY_THRESHOLD};
pub use strings::{str_replace, str_split};
pub use time::{ETimer, ElapsedTimer};

pub use alt_format::{self as format, alt_fmt, render_template, RenderMode};
pub use alt_log::{
    self as logging, alt_debug, alt_err, alt_info, alt_print, alt_warn, Logger, Severity,
};
