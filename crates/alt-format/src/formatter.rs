//! Pluggable formatter backends.
//!
//! Call sites that format messages (the logger, string builders) hold a
//! [`TemplateFormatter`] instead of a concrete mode. [`RenderMode`] is the
//! built-in implementation; a richer formatter can be dropped in without
//! touching those call sites.

use std::sync::Arc;

use crate::config::active_mode;
use crate::render::{render, RenderMode};

/// Formats a template against already-stringified arguments.
pub trait TemplateFormatter: Send + Sync {
    fn format(&self, template: &str, args: &[String]) -> String;
}

impl TemplateFormatter for RenderMode {
    fn format(&self, template: &str, args: &[String]) -> String {
        render(template, args, *self)
    }
}

impl<F> TemplateFormatter for F
where
    F: Fn(&str, &[String]) -> String + Send + Sync,
{
    fn format(&self, template: &str, args: &[String]) -> String {
        self(template, args)
    }
}

/// Renders with the process-wide mode, looked up on every call.
///
/// Holding one does not resolve the mode, so [`init`](crate::init) still
/// works until the first message is actually formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveMode;

impl TemplateFormatter for ActiveMode {
    fn format(&self, template: &str, args: &[String]) -> String {
        render(template, args, active_mode())
    }
}

/// Shared handle to the formatter selected for this process.
pub fn default_formatter() -> Arc<dyn TemplateFormatter> {
    Arc::new(ActiveMode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_as_formatter() {
        let formatter: Arc<dyn TemplateFormatter> = Arc::new(RenderMode::Substitute);
        assert_eq!(formatter.format("n={}", &["1".to_string()]), "n=1");
    }

    #[test]
    fn test_closure_as_formatter() {
        let upper = |template: &str, args: &[String]| {
            format!("{}:{}", template.to_uppercase(), args.join(","))
        };
        assert_eq!(upper.format("ab", &["x".into(), "y".into()]), "AB:x,y");
    }
}
