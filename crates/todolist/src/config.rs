use std::{env, time::Duration};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key-value table holding the ToDo items (default: "todolist")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub table_name: String,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Log output format (default: pretty)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - Table holding the ToDo items (default: "todolist")
    /// - `REQUEST_TIMEOUT_SECONDS` - Per-request timeout (default: 10)
    /// - `LOG_FORMAT` - `pretty` or `json` (default: pretty)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "todolist".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            log_format: env::var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            table_name: "todos".to_string(),
            request_timeout_seconds: 30,
            log_format: LogFormat::Pretty,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("TABLE_NAME");
        env::remove_var("REQUEST_TIMEOUT_SECONDS");
        env::remove_var("LOG_FORMAT");

        let config = Config::from_env();

        assert_eq!(config.table_name, "todolist");
        assert_eq!(config.request_timeout_seconds, 10);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }
}
