use tracing_subscriber::filter::LevelFilter;

use crate::logging::levels;
use crate::shared::config::LoggingConfig;

fn config(stdout: &str, file: &str) -> LoggingConfig {
    LoggingConfig {
        log_dir: None,
        stdout_level: stdout.to_string(),
        file_level: file.to_string(),
    }
}

#[test]
fn parses_both_levels() {
    let (stdout, file) = levels(&config("warn", "trace")).unwrap();
    assert_eq!(stdout, LevelFilter::WARN);
    assert_eq!(file, LevelFilter::TRACE);
}

#[test]
fn rejects_unknown_level_names() {
    let err = levels(&config("info", "chatty")).unwrap_err();
    assert!(err.to_string().contains("file_level 'chatty'"));
}
