//! Configuration file for the `signpost` front end.
//!
//! ```toml
//! [extract]
//! exclude_selectors = ["header", "footer", "[class*='breadcrumb']"]
//! annotate_links = true
//!
//! [report]
//! agency = "Crafted"
//! client_name = "LeShuttle"
//! include_schema = true
//!
//! [fetch]
//! user_agent = "Mozilla/5.0 (compatible; ContentRecTool/1.0)"
//! timeout_secs = 30
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! ```
//!
//! Every section and field is optional.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::options::ExtractOptions;

/// User agent sent with every page request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; ContentRecTool/1.0)";

/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Extraction options
    #[serde(default)]
    pub extract: ExtractOptions,
    /// Report header fields
    #[serde(default)]
    pub report: ReportConfig,
    /// HTTP fetch settings
    #[serde(default)]
    pub fetch: FetchSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Io`] if the file cannot be read, [`crate::Error::Config`]
    /// if it is not valid TOML for this schema.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load from `path` when given, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Caller-supplied report fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Agency or practitioner name for `[AGENCY]`
    pub agency: String,
    /// Client name for `[CLIENT NAME]` and the output file name
    pub client_name: String,
    /// Keep JSON-LD schema lines in the output
    pub include_schema: bool,
}

/// HTTP fetch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// User agent string
    pub user_agent: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl FetchSettings {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Log severity level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Raise verbosity by `steps` (`-v` count), saturating at trace.
    #[must_use]
    pub fn more_verbose(self, steps: u8) -> Self {
        const ORDER: [LogLevel; 5] = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let current = ORDER.iter().position(|l| *l == self).unwrap_or(1);
        ORDER[(current + usize::from(steps)).min(ORDER.len() - 1)]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log format
    pub format: LogFormat,
    /// Log level
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.fetch.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.fetch.timeout(), Duration::from_secs(30));
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
            [extract]
            exclude_selectors = ["nav"]
            remove_before_h1 = true

            [report]
            agency = "Crafted"
            include_schema = true

            [fetch]
            timeout_secs = 5

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.extract.exclude_selectors, vec!["nav"]);
        assert!(config.extract.remove_before_h1);
        assert!(!config.extract.annotate_links);
        assert_eq!(config.report.agency, "Crafted");
        assert_eq!(config.report.client_name, "");
        assert!(config.report.include_schema);
        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.fetch.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let err = toml::from_str::<Config>("[logging]\nlevel = \"loud\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_load_from_file_and_missing() {
        let dir = std::env::temp_dir().join(format!("signpost-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("signpost.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[report]\nclient_name = \"LeShuttle\"").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.report.client_name, "LeShuttle");

        assert!(matches!(
            Config::from_file(&dir.join("missing.toml")),
            Err(crate::Error::Io(_))
        ));
        assert_eq!(Config::load(None).unwrap(), Config::default());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_log_level_verbosity() {
        assert_eq!(LogLevel::Warn.more_verbose(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.more_verbose(1), LogLevel::Info);
        assert_eq!(LogLevel::Warn.more_verbose(9), LogLevel::Trace);
        assert_eq!(LogLevel::Debug.to_string(), "debug");
    }
}
