use themis_logger::{LevelFilter, Logger};

#[test]
fn console_logger_has_no_file_guard() {
    let logger = Logger::builder()
        .name("integration-console-only")
        .identity("Version: 1.2.0")
        .console(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}
