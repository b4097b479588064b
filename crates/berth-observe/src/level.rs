use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::LoggerError;

/// Validated `EnvFilter` expression.
///
/// Stores the raw string (`"info"`, `"berth_core=debug,info"`) and guarantees it parses, so
/// building the filter later cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// # Examples
    /// ```
    /// use berth_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("berth_docker=trace,info").unwrap();
    /// assert_eq!(lvl.as_str(), "berth_docker=trace,info");
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).unwrap_or_else(|_| EnvFilter::new(LoggerLevel::DEFAULT))
    }

    const DEFAULT: &'static str = "info";
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_valid_levels() {
        for lvl in ["info", "warn", "trace", "berth_core=debug,info"] {
            assert!(
                lvl.parse::<LoggerLevel>().is_ok(),
                "expected {lvl} to parse"
            );
        }
    }

    #[test]
    fn rejects_invalid_levels() {
        for lvl in ["berth_core=loud", "other=trace,another=wat"] {
            assert!(
                lvl.parse::<LoggerLevel>().is_err(),
                "expected {lvl} to fail"
            );
        }
    }

    #[test]
    fn serde_from_plain_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(lvl.as_str(), "debug");
        assert_eq!(serde_json::to_string(&lvl).unwrap(), r#""debug""#);
    }

    #[test]
    fn default_is_info() {
        assert_eq!(LoggerLevel::default().as_str(), "info");
        let _filter = LoggerLevel::default().to_env_filter();
    }
}
