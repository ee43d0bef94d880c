//! Building loggers before choosing the render mode.
//!
//! Runs in its own process so the global render mode is still unresolved.

use alt_format::{init, RenderMode, TemplateFormatter};
use alt_log::{alt_info, set_global, Logger, MemoryWriter};

#[test]
fn render_mode_can_be_chosen_after_loggers_exist() {
    let fixed = MemoryWriter::new();
    let fixed_logger = Logger::new(fixed.clone()).with_formatter(RenderMode::Append);

    let buffer = MemoryWriter::new();
    set_global(Logger::new(buffer.clone())).unwrap();

    init(RenderMode::Substitute).unwrap();

    alt_info!("loaded {} assets", 12);
    let line = line!() - 1;
    assert_eq!(
        buffer.lines(),
        vec![format!("[INFO] | {}:{} | loaded 12 assets", file!(), line)]
    );

    // An explicit formatter is unaffected by the process-wide mode.
    fixed_logger.print("loaded {} assets", &[&12]).unwrap();
    assert_eq!(fixed.contents(), "loaded {} assets | <== { 12 }\n");
    assert_eq!(
        fixed_logger.formatter().format("{}", &["x".to_string()]),
        "{} | <== { x }"
    );
}
