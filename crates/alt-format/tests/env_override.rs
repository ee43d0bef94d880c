//! `ALT_FORMAT_MODE` chooses the mode when nothing called `init`.
//!
//! Runs in its own process so the global mode is still unresolved.

use alt_format::{active_mode, render_template, RenderMode, MODE_ENV_VAR};
use serial_test::serial;

fn opposite(mode: RenderMode) -> RenderMode {
    match mode {
        RenderMode::Substitute => RenderMode::Append,
        RenderMode::Append => RenderMode::Substitute,
    }
}

#[test]
#[serial]
fn env_var_overrides_compiled_default() {
    let wanted = opposite(RenderMode::compiled_default());
    std::env::set_var(MODE_ENV_VAR, format!("  {}  ", wanted.as_str().to_uppercase()));

    assert_eq!(active_mode(), wanted);

    // Resolved once; later changes to the variable are ignored.
    std::env::set_var(MODE_ENV_VAR, RenderMode::compiled_default().as_str());
    assert_eq!(active_mode(), wanted);

    let expected = match wanted {
        RenderMode::Substitute => "id=7",
        RenderMode::Append => "id={} | <== { 7 }",
    };
    assert_eq!(render_template("id={}", &[&7]), expected);

    std::env::remove_var(MODE_ENV_VAR);
}
