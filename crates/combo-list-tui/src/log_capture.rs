/// Debug console log capture system
///
/// Provides a logger that captures log records into a thread-safe circular
/// buffer for display in the in-app debug console, while still forwarding
/// to env_logger for terminal output.
use chrono::{DateTime, Utc};
use log::{Level, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 1000;

/// A single log entry with timestamp and metadata
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Thread-safe log buffer shared between logger and UI
pub type LogBuffer = Arc<Mutex<VecDeque<LogEntry>>>;

/// Logger that captures records to the console buffer and tees them to
/// env_logger
pub struct DebugConsoleLogger {
    logs: LogBuffer,
    env_logger: env_logger::Logger,
    console_filter: env_logger::Logger,
}

impl DebugConsoleLogger {
    pub fn new(logs: LogBuffer) -> Self {
        // Terminal output defaults to Error level only; the terminal is
        // the UI surface and must stay clean
        let env_logger = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .build();

        // Console buffer filter: RUST_LOG wins if set, otherwise capture
        // this workspace's crates at Debug level
        let console_filter = if std::env::var("RUST_LOG").is_ok() {
            env_logger::Builder::from_default_env().build()
        } else {
            env_logger::Builder::new()
                .filter_module("combo_list_tui", log::LevelFilter::Debug)
                .filter_module("combo_list_core", log::LevelFilter::Debug)
                .build()
        };

        Self {
            logs,
            env_logger,
            console_filter,
        }
    }

    /// Create a new empty log buffer
    pub fn create_buffer() -> LogBuffer {
        Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES)))
    }
}

impl Log for DebugConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console_filter.enabled(metadata) || self.env_logger.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.console_filter.enabled(record.metadata()) {
            let entry = LogEntry {
                timestamp: Utc::now(),
                level: record.level(),
                target: record.target().to_string(),
                message: format!("{}", record.args()),
            };

            if let Ok(mut logs) = self.logs.lock() {
                if logs.len() >= MAX_LOG_ENTRIES {
                    logs.pop_front();
                }
                logs.push_back(entry);
            }
        }

        if self.env_logger.enabled(record.metadata()) {
            self.env_logger.log(record);
        }
    }

    fn flush(&self) {
        self.env_logger.flush();
    }
}

/// Initialize the debug console logger
///
/// Call once at startup before any logging occurs. Returns the log buffer
/// shared with the UI. Terminal output stays Error-level only; the console
/// buffer captures workspace crates at Debug level unless RUST_LOG says
/// otherwise.
pub fn init_logger() -> LogBuffer {
    let logs = DebugConsoleLogger::create_buffer();
    let logger = DebugConsoleLogger::new(logs.clone());

    log::set_boxed_logger(Box::new(logger)).expect("Failed to initialize logger");
    log::set_max_level(log::LevelFilter::Debug);

    log::info!("Debug console initialized - press F12 to toggle");

    logs
}
