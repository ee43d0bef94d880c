//! Process-wide render mode selection.
//!
//! The active [`RenderMode`] is resolved once and never changes afterwards.
//! Resolution order:
//!
//! 1. An explicit [`init`] call made before anything rendered
//! 2. The `ALT_FORMAT_MODE` environment variable (`append` / `substitute`)
//! 3. The compiled default from the `substitute` cargo feature
//!
//! ```rust
//! use alt_format::{Config, RenderMode};
//!
//! let config = Config::from_yaml("render_mode: substitute").unwrap();
//! assert_eq!(config.render_mode, RenderMode::Substitute);
//! ```

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};
use crate::render::RenderMode;

/// Environment variable consulted when the mode is first resolved.
pub const MODE_ENV_VAR: &str = "ALT_FORMAT_MODE";

static ACTIVE_MODE: OnceCell<RenderMode> = OnceCell::new();

/// Formatter configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render_mode: RenderMode,
}

impl Config {
    /// Parses a YAML document such as `render_mode: append`.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Builds a config from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// An unset or blank variable keeps the compiled default; an unknown
    /// value is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let render_mode = match lookup(MODE_ENV_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => RenderMode::compiled_default(),
        };
        Ok(Self { render_mode })
    }

    /// Installs this config as the process-wide one.
    pub fn apply(self) -> Result<()> {
        init(self.render_mode)
    }
}

/// Fixes the process-wide render mode.
///
/// Fails if the mode was already set, either by a previous `init` or by a
/// render that resolved the default.
pub fn init(mode: RenderMode) -> Result<()> {
    ACTIVE_MODE
        .set(mode)
        .map_err(|_| FormatError::AlreadyInitialized(active_mode()))
}

/// Returns the process-wide render mode, resolving it on first use.
///
/// A malformed `ALT_FORMAT_MODE` falls back to the compiled default so that
/// formatting keeps working.
pub fn active_mode() -> RenderMode {
    *ACTIVE_MODE.get_or_init(|| {
        Config::from_env()
            .map(|config| config.render_mode)
            .unwrap_or_else(|_| RenderMode::compiled_default())
    })
}
