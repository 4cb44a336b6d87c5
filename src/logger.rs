//! Structured logging with visual formatting.
//!
//! Output uses Unicode box drawing characters so that multi-line reports
//! (configuration summaries, validation warnings) read as one block.
//!
//! Logging can be switched off at runtime, which keeps library consumers and
//! test runs quiet.

use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Log level enumeration for categorizing message importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Log,  // Normal operational logs
    Warn, // Warning messages (non-fatal issues)
    Err,  // Error messages (recoverable failures)
    Info, // Informational messages (status updates)
}

impl LogLevel {
    /// Prefix printed in front of messages at this level.
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Log => "[LOG] ",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Err => "[ERR] ",
            LogLevel::Info => "[INFO] ",
        }
    }
}

/// Main logging interface providing structured output formatting.
pub struct Log;

impl Log {
    /// Enable or disable logging globally.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Log a message with its level prefix.
    ///
    /// # Arguments
    /// * `level` - LogLevel indicating message importance
    /// * `message` - Text content to log
    pub fn log(level: LogLevel, message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("{}{}", level.prefix(), message);
    }

    // ═══ Convenience Methods for Common Log Levels ═══

    pub fn log_error(message: &str) {
        Self::log(LogLevel::Err, message);
    }

    pub fn log_warning(message: &str) {
        Self::log(LogLevel::Warn, message);
    }

    pub fn log_info(message: &str) {
        Self::log(LogLevel::Info, message);
    }

    pub fn log_debug(message: &str) {
        Self::log(LogLevel::Log, message);
    }

    // ═══ Visual Formatting Functions ═══

    /// Log an indented message for sub-items or details.
    pub fn log_indented(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┃   {}", message);
    }

    /// Log a block start message with visual separation.
    ///
    /// Used to open a new report section, e.g. a configuration summary.
    pub fn log_block_start(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┃");
        println!("┣ {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_level_prefixes() {
        assert_eq!(LogLevel::Log.prefix(), "[LOG] ");
        assert_eq!(LogLevel::Warn.prefix(), "[WARN] ");
        assert_eq!(LogLevel::Err.prefix(), "[ERR] ");
        assert_eq!(LogLevel::Info.prefix(), "[INFO] ");
    }

    #[test]
    #[serial]
    fn test_enable_toggle() {
        Log::set_enabled(false);
        assert!(!Log::is_enabled());
        // Disabled logging must be a silent no-op
        Log::log_warning("suppressed");
        Log::log_block_start("suppressed");

        Log::set_enabled(true);
        assert!(Log::is_enabled());
    }
}
