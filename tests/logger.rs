use innerbloom::config::LoggingConfig;
use innerbloom::logger::{Logger, MAX_BUFFERED_LOGS};
use log::{Level, Log, Metadata, Record};
use std::fs;
use uuid::Uuid;

fn sink_for(logger: &Logger, level: &str) -> Box<dyn Log> {
    let config = LoggingConfig {
        enabled: false,
        level: level.to_string(),
    };
    let (_, sink) = logger.dispatch(&config).unwrap().into_log();
    sink
}

fn emit(sink: &dyn Log, level: Level, message: &str) {
    sink.log(
        &Record::builder()
            .args(format_args!("{}", message))
            .level(level)
            .target("innerbloom::journal")
            .build(),
    );
}

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.is_enabled());

    emit(sink_for(&logger, "info").as_ref(), Level::Info, "Test message");
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].starts_with('['));
    assert!(logs[0].contains("INFO innerbloom::journal]"));
    assert!(logs[0].ends_with("] Test message"));
}

#[test]
fn test_log_file_receives_records() {
    let dir = std::env::temp_dir().join(format!("innerbloom-{}", Uuid::new_v4()));
    let path = dir.join("innerbloom.log");

    let logger = Logger::with_log_file(&path).unwrap();
    assert!(logger.is_enabled());

    emit(sink_for(&logger, "info").as_ref(), Level::Warn, "Journal saved with file logging");
    assert_eq!(logger.get_logs().len(), 1);

    let file_content = fs::read_to_string(&path).unwrap();
    assert!(file_content.contains("WARN innerbloom::journal] Journal saved with file logging"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_level_filter_applies() {
    let logger = Logger::new();
    let sink = sink_for(&logger, "warn");

    let debug = Metadata::builder().level(Level::Debug).target("innerbloom").build();
    let error = Metadata::builder().level(Level::Error).target("innerbloom").build();
    assert!(!sink.enabled(&debug));
    assert!(sink.enabled(&error));

    let crossterm_info = Metadata::builder().level(Level::Info).target("crossterm").build();
    assert!(!sink_for(&logger, "trace").enabled(&crossterm_info));

    assert!(logger.dispatch(&LoggingConfig { enabled: false, level: "loud".to_string() }).is_err());
}

#[test]
fn test_logs_newest_first() {
    let logger = Logger::new();
    let sink = sink_for(&logger, "info");
    emit(sink.as_ref(), Level::Info, "first");
    emit(sink.as_ref(), Level::Info, "second");
    emit(sink.as_ref(), Level::Info, "third");

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 3);
    assert!(logs[0].ends_with("third"));
    assert!(logs[2].ends_with("first"));
}

#[test]
fn test_clones_share_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    emit(sink_for(&clone, "info").as_ref(), Level::Info, "from the clone");
    assert_eq!(logger.get_logs().len(), 1);
}

#[test]
fn test_buffer_is_capped() {
    let logger = Logger::new();
    let sink = sink_for(&logger, "info");
    for i in 0..1100 {
        emit(sink.as_ref(), Level::Info, &format!("entry {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), MAX_BUFFERED_LOGS);
    assert!(logs[0].ends_with("entry 1099"));
    assert!(logs[999].ends_with("entry 100"));
}
