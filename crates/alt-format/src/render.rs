//! Template rendering strategies.
//!
//! [`render`] takes a template and already-stringified arguments and
//! produces the final text with one of two strategies:
//!
//! | Mode | Template | Arguments |
//! |------|----------|-----------|
//! | [`RenderMode::Append`] | kept verbatim, placeholders included | listed after ` \| <== ` |
//! | [`RenderMode::Substitute`] | placeholders replaced in order | extras dropped |
//!
//! Neither strategy can fail. Count mismatches degrade instead: unused
//! placeholders stay visible in the output, unused arguments are listed
//! (append) or silently discarded (substitute).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::placeholder::{find_placeholder, Scan};

/// Separator between the template and the listed arguments in append mode.
pub const APPEND_SEPARATOR: &str = " | <== ";

/// How arguments are merged into a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Replace placeholder spans with arguments, left to right.
    Substitute,
    /// Leave the template untouched and list the arguments after it.
    Append,
}

impl RenderMode {
    /// The mode compiled in by the `substitute` cargo feature.
    pub const fn compiled_default() -> Self {
        if cfg!(feature = "substitute") {
            RenderMode::Substitute
        } else {
            RenderMode::Append
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Substitute => "substitute",
            RenderMode::Append => "append",
        }
    }
}

impl Default for RenderMode {
    fn default() -> Self {
        Self::compiled_default()
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substitute" => Ok(RenderMode::Substitute),
            "append" => Ok(RenderMode::Append),
            _ => Err(FormatError::UnknownMode(s.to_string())),
        }
    }
}

/// Renders `template` against `args` using `mode`.
///
/// An empty argument list returns the template unchanged in both modes.
pub fn render(template: &str, args: &[String], mode: RenderMode) -> String {
    if args.is_empty() {
        return template.to_string();
    }
    match mode {
        RenderMode::Append => render_append(template, args),
        RenderMode::Substitute => render_substitute(template, args),
    }
}

fn render_append(template: &str, args: &[String]) -> String {
    let listed: usize = args.iter().map(|a| a.len() + 7).sum();
    let mut out = String::with_capacity(template.len() + APPEND_SEPARATOR.len() + listed);
    out.push_str(template);

    let Some((last, rest)) = args.split_last() else {
        return out;
    };

    out.push_str(APPEND_SEPARATOR);
    for arg in rest {
        out.push_str("{ ");
        out.push_str(arg);
        out.push_str(" } : ");
    }
    out.push_str("{ ");
    out.push_str(last);
    out.push_str(" }");
    out
}

// Every pass rescans from the start of the partially rendered text. An
// argument whose own text looks like a placeholder (say a literal `{}`) is
// therefore picked up on a later pass and consumes the next argument.
fn render_substitute(template: &str, args: &[String]) -> String {
    let mut out = template.to_string();
    let mut remaining = args.iter();

    while let Scan::Found { start, len } = find_placeholder(&out) {
        let Some(arg) = remaining.next() else {
            break;
        };
        out.replace_range(start..start + len, arg);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_no_args_returns_template() {
        for mode in [RenderMode::Append, RenderMode::Substitute] {
            assert_eq!(render("left {} alone", &[], mode), "left {} alone");
        }
    }

    #[test]
    fn test_append_single() {
        assert_eq!(
            render("loaded", &args(&["a.png"]), RenderMode::Append),
            "loaded | <== { a.png }"
        );
    }

    #[test]
    fn test_append_many_keeps_placeholders() {
        assert_eq!(
            render("user={} count={}", &args(&["alice", "3"]), RenderMode::Append),
            "user={} count={} | <== { alice } : { 3 }"
        );
    }

    #[test]
    fn test_substitute_in_order() {
        assert_eq!(
            render("user={} count={}", &args(&["alice", "3"]), RenderMode::Substitute),
            "user=alice count=3"
        );
    }

    #[test]
    fn test_substitute_under_supply() {
        assert_eq!(
            render("{} and {}", &args(&["x"]), RenderMode::Substitute),
            "x and {}"
        );
    }

    #[test]
    fn test_substitute_over_supply() {
        assert_eq!(render("{}", &args(&["x", "y"]), RenderMode::Substitute), "x");
    }

    #[test]
    fn test_substitute_discards_directive() {
        assert_eq!(render("{:>5}", &args(&["9"]), RenderMode::Substitute), "9");
        assert_eq!(
            render("pi={:.2f}!", &args(&["3.14159"]), RenderMode::Substitute),
            "pi=3.14159!"
        );
    }

    #[test]
    fn test_substitute_without_placeholders() {
        assert_eq!(render("plain", &args(&["x"]), RenderMode::Substitute), "plain");
    }

    #[test]
    fn test_substitute_rescans_inserted_text() {
        // The first argument is itself placeholder-shaped, so the rescan
        // fills it with the second argument before reaching the template's
        // own second placeholder.
        assert_eq!(
            render("{} / {}", &args(&["{}", "b"]), RenderMode::Substitute),
            "b / {}"
        );
    }

    #[test]
    fn test_substitute_multibyte() {
        assert_eq!(
            render("é{}ü{}", &args(&["ß", "ø"]), RenderMode::Substitute),
            "éßüø"
        );
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("append".parse::<RenderMode>().unwrap(), RenderMode::Append);
        assert_eq!(" Substitute ".parse::<RenderMode>().unwrap(), RenderMode::Substitute);
        assert!(matches!(
            "fmt".parse::<RenderMode>(),
            Err(FormatError::UnknownMode(name)) if name == "fmt"
        ));
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [RenderMode::Append, RenderMode::Substitute] {
            assert_eq!(mode.to_string().parse::<RenderMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_compiled_default_follows_feature() {
        let expected = if cfg!(feature = "substitute") {
            RenderMode::Substitute
        } else {
            RenderMode::Append
        };
        assert_eq!(RenderMode::default(), expected);
    }
}
