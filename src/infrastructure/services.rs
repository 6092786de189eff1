use crate::domain::logging::{get_time_provider, LogEntry, LogLevel, Logger, TimeProvider};
use chrono::{TimeZone, Utc};

/// Console logger for native hosts, writing to stderr.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    fn format_log_entry(&self, entry: &LogEntry) -> String {
        format!(
            "[{}] {:>5} {} | {}",
            get_time_provider().format_timestamp(entry.timestamp),
            entry.level.to_string(),
            entry.component,
            entry.message
        )
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level >= self.min_level {
            eprintln!("{}", self.format_log_entry(&entry));
        }
    }
}

/// Wall-clock time provider backed by the system clock.
pub struct SystemTimeProvider;

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for SystemTimeProvider {
    fn current_timestamp(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format_timestamp(timestamp)
    }
}

fn format_timestamp(timestamp: u64) -> String {
    match Utc.timestamp_millis_opt(timestamp as i64).single() {
        Some(datetime) => datetime.format("%H:%M:%S%.3f").to_string(),
        None => format!("{:06}", timestamp),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, ConsoleLogger};
    use crate::domain::logging::LogLevel;

    #[test]
    fn formats_wall_clock_millis() {
        assert_eq!(format_timestamp(0), "00:00:00.000");
        assert_eq!(format_timestamp(61_250), "00:01:01.250");
    }

    #[test]
    fn production_logger_starts_at_info() {
        assert_eq!(ConsoleLogger::new_production().min_level, LogLevel::Info);
        assert_eq!(ConsoleLogger::new_development().min_level, LogLevel::Debug);
    }
}
