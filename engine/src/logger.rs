use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

/// Where `Info` lines go. `Warn` lines always go to stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogTarget {
    #[default]
    Stdout,
    Stderr,
}

pub struct Logger {
    prefix: Option<String>,
    target: LogTarget,
}

impl Logger {
    fn new(prefix: Option<String>, target: LogTarget) -> Self {
        Self { prefix, target }
    }

    pub fn target_for(&self, level: Level) -> LogTarget {
        match level {
            Level::Info => self.target,
            Level::Warn => LogTarget::Stderr,
        }
    }

    pub fn format_line(&self, timestamp: &str, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => {
                format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
            }
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, level: Level, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let formatted = self.format_line(&timestamp, file, line, message);
        match self.target_for(level) {
            LogTarget::Stdout => println!("{}", formatted),
            LogTarget::Stderr => eprintln!("{}", formatted),
        }
    }
}

pub fn init_logger(prefix: Option<String>, target: LogTarget) {
    LOGGER.get_or_init(|| Logger::new(prefix, target));
}

pub fn log(level: Level, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Warn, file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_prefix_strips_directories() {
        let logger = Logger::new(Some("Console".to_string()), LogTarget::Stdout);
        let line = logger.format_line("2026-01-01 10:00:00", "console/src/main.rs", 42, "hello");
        assert_eq!(line, "[2026-01-01 10:00:00][Console][main.rs:42] hello");
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, LogTarget::Stdout);
        let line = logger.format_line("2026-01-01 10:00:00", "C:\\src\\game.rs", 7, "move 4");
        assert_eq!(line, "[2026-01-01 10:00:00][game.rs:7] move 4");
    }

    #[test]
    fn test_stderr_target_keeps_info_off_stdout() {
        let logger = Logger::new(None, LogTarget::Stderr);
        assert_eq!(logger.target_for(Level::Info), LogTarget::Stderr);
        assert_eq!(logger.target_for(Level::Warn), LogTarget::Stderr);

        let logger = Logger::new(None, LogTarget::Stdout);
        assert_eq!(logger.target_for(Level::Info), LogTarget::Stdout);
        assert_eq!(logger.target_for(Level::Warn), LogTarget::Stderr);
    }
}
