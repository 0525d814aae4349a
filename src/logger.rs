use crate::config::ClientConfig;
use chrono::{DateTime, Utc};
use colored::*;
use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};

static CONSOLE_LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

pub fn init_with_config(config: LoggerConfig) -> Result<(), String> {
    log::set_logger(&*CONSOLE_LOGGER).map_err(|e| format!("Failed to set logger: {:?}", e))?;

    log::set_max_level(config.min_level.to_level_filter());
    CONSOLE_LOGGER.update_config(config);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn color(&self) -> Color {
        match self {
            LogLevel::Trace => Color::Cyan,
            LogLevel::Debug => Color::Blue,
            LogLevel::Info => Color::Green,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Error => Color::Red,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            LogLevel::Trace => "🔍",
            LogLevel::Debug => "🐛",
            LogLevel::Info => "💡",
            LogLevel::Warn => "⚠️",
            LogLevel::Error => "❌",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn to_level(&self) -> Level {
        match self {
            LogLevel::Trace => Level::Trace,
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Warn => Level::Warn,
            LogLevel::Error => Level::Error,
        }
    }

    pub fn to_level_filter(&self) -> LevelFilter {
        self.to_level().to_level_filter()
    }

    pub fn from_level(level: Level) -> Self {
        match level {
            Level::Trace => LogLevel::Trace,
            Level::Debug => LogLevel::Debug,
            Level::Info => LogLevel::Info,
            Level::Warn => LogLevel::Warn,
            Level::Error => LogLevel::Error,
        }
    }

    /// Parses `RUST_LOG`-style names, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub module: String,
    pub file: String,
    pub line: u32,
}

impl LogEntry {
    fn from_record(record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::from_level(record.level()),
            message: record.args().to_string(),
            module: record.module_path().unwrap_or("unknown").to_string(),
            file: record.file().unwrap_or("unknown").to_string(),
            line: record.line().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub show_colors: bool,
    pub show_emojis: bool,
    pub show_module: bool,
    pub show_file_location: bool,
    pub include_timestamp: bool,
    pub timestamp_format: String,
    /// One JSON object per line instead of the console layout.
    pub output_json: bool,
    pub custom_prefix: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            show_colors: true,
            show_emojis: true,
            show_module: true,
            show_file_location: false,
            include_timestamp: true,
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            output_json: false,
            custom_prefix: None,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.show_colors = enabled;
        self
    }

    pub fn with_json_output(mut self, enabled: bool) -> Self {
        self.output_json = enabled;
        self
    }

    pub fn development() -> Self {
        Self {
            min_level: LogLevel::Debug,
            show_file_location: true,
            ..Default::default()
        }
    }
}

/// Writes records to stderr so stdout stays free for program output.
pub struct ConsoleLogger {
    config: Mutex<LoggerConfig>,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            config: Mutex::new(LoggerConfig::default()),
        }
    }

    pub fn update_config(&self, new_config: LoggerConfig) {
        if let Ok(mut config) = self.config.lock() {
            *config = new_config;
        }
    }

    fn format_console(entry: &LogEntry, config: &LoggerConfig) -> String {
        let mut output = String::new();

        if let Some(prefix) = &config.custom_prefix {
            if config.show_colors {
                output.push_str(&format!("[{}] ", prefix.bright_white().bold()));
            } else {
                output.push_str(&format!("[{}] ", prefix));
            }
        }

        if config.include_timestamp {
            let timestamp = entry.timestamp.format(&config.timestamp_format).to_string();
            if config.show_colors {
                output.push_str(&format!("{} ", timestamp.bright_black()));
            } else {
                output.push_str(&format!("{} ", timestamp));
            }
        }

        let level = if config.show_emojis {
            format!("{} {}", entry.level.emoji(), entry.level.as_str())
        } else {
            entry.level.as_str().to_string()
        };
        if config.show_colors {
            output.push_str(&format!("[{}] ", level.color(entry.level.color()).bold()));
        } else {
            output.push_str(&format!("[{}] ", level));
        }

        if config.show_module && !entry.module.is_empty() {
            if config.show_colors {
                output.push_str(&format!("{}: ", entry.module.bright_blue()));
            } else {
                output.push_str(&format!("{}: ", entry.module));
            }
        }

        output.push_str(&entry.message);

        if config.show_file_location {
            let location = format!("{}:{}", entry.file, entry.line);
            if config.show_colors {
                output.push_str(&format!(" ({})", location.bright_black()));
            } else {
                output.push_str(&format!(" ({})", location));
            }
        }

        output
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match self.config.lock() {
            Ok(config) => metadata.level() <= config.min_level.to_level(),
            Err(_) => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry::from_record(record);

        if let Ok(config) = self.config.lock() {
            let line = if config.output_json {
                serde_json::to_string(&entry).unwrap_or_default()
            } else {
                Self::format_console(&entry, &config)
            };
            let _ = writeln!(io::stderr(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Logs how long it lived when dropped.
pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn new(name: &str) -> Self {
        log::debug!("⏱️  Starting timer: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        log::info!(
            "⏱️  {} finished in {}ms",
            self.name,
            self.elapsed().as_millis()
        );
    }
}

pub fn timer(name: &str) -> Timer {
    Timer::new(name)
}

pub fn log_startup_info(app_name: &str, version: &str, config: &ClientConfig) {
    log::info!("🚀 Starting {} v{}", app_name, version);
    log::info!("⚙️  Configuration:");
    log::info!("   Backend: {}", config.backend_url);
    log::info!("   Styles:  {}", config.styles_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: LogLevel) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level,
            message: "styles loaded".to_string(),
            module: "promptcanvas::ui".to_string(),
            file: "src/ui/controller.rs".to_string(),
            line: 42,
        }
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(LogLevel::Info.as_str(), "INFO");
        assert_eq!(LogLevel::Error.emoji(), "❌");
        assert_eq!(LogLevel::Debug.color(), Color::Blue);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert_eq!(LogLevel::parse("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("verbose"), None);
    }

    #[test]
    fn test_logger_config() {
        let config = LoggerConfig::development();
        assert_eq!(config.min_level, LogLevel::Debug);
        assert!(config.show_colors);

        let json_config = LoggerConfig::new().with_json_output(true);
        assert!(json_config.output_json);
        assert_eq!(json_config.min_level, LogLevel::Info);
    }

    #[test]
    fn test_plain_console_format() {
        let config = LoggerConfig {
            show_colors: false,
            custom_prefix: Some("canvas".to_string()),
            show_emojis: false,
            include_timestamp: false,
            show_file_location: true,
            ..LoggerConfig::new()
        };
        let line = ConsoleLogger::format_console(&entry(LogLevel::Warn), &config);
        assert_eq!(
            line,
            "[canvas] [WARN] promptcanvas::ui: styles loaded (src/ui/controller.rs:42)"
        );
    }

    #[test]
    fn test_json_entry() {
        let json = serde_json::to_value(entry(LogLevel::Error)).unwrap();
        assert_eq!(json["level"], "ERROR");
        assert_eq!(json["line"], 42);
    }

    #[test]
    fn test_logger_initialization() {
        let config = LoggerConfig::development();
        assert!(init_with_config(config).is_ok());
        assert!(init_with_config(LoggerConfig::default()).is_err());
    }
}
