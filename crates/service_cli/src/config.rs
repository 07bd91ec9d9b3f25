//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.

use pricer_core::types::{MarketInputs, PricingError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "bs_pricer.toml";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "BS_PRICER_LOG_LEVEL";

/// Environment variable overriding the output format
pub const ENV_FORMAT: &str = "BS_PRICER_FORMAT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid market inputs: {0}")]
    InvalidInputs(#[from] PricingError),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Side-by-side price panel and Greeks table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub format: OutputFormat,
    /// Default market inputs, overridden field by field from the command line
    pub inputs: MarketInputs,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply environment overrides through `lookup`.
    ///
    /// Taking the lookup as a closure keeps this testable without touching
    /// process-wide environment state.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }

        let inputs = &mut self.inputs;
        let overrides = &cli.inputs;
        if let Some(spot) = overrides.spot {
            inputs.spot = spot;
        }
        if let Some(strike) = overrides.strike {
            inputs.strike = strike;
        }
        if let Some(expiry) = overrides.expiry {
            inputs.expiry = expiry;
        }
        if let Some(rate) = overrides.rate {
            inputs.rate = rate;
        }
        if let Some(volatility) = overrides.volatility {
            inputs.volatility = volatility;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.inputs.validate()?;
        Ok(())
    }
}

/// Per-field market input overrides from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputOverrides {
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub expiry: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise the log level to debug
    pub verbose: bool,
    /// Output format override
    pub format: Option<String>,
    /// Market input overrides
    pub inputs: InputOverrides,
    /// Leave the configured inputs unchecked (commands that take their own)
    pub skip_input_validation: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (explicit `--config`, else `bs_pricer.toml` if present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_from(cli, Path::new(DEFAULT_CONFIG_FILE), |key| {
        std::env::var(key).ok()
    })
}

/// [`build_config`] with an injectable fallback file and environment lookup.
///
/// `default_file` is read only when `cli.config_file` is `None` and the file
/// exists.
pub fn build_config_from<F>(
    cli: &CliArgs,
    default_file: &Path,
    lookup: F,
) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None if default_file.exists() => CliConfig::from_file(default_file)?,
        None => CliConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    if !cli.skip_input_validation {
        config.validate()?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.inputs, MarketInputs::default());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(matches!(
            OutputFormat::from_str("csv"),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Error), "error");
        assert_eq!(format!("{}", OutputFormat::Json), "json");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            format = "json"

            [inputs]
            spot = 100.0
            strike = 95.0
            expiry = 0.5
            rate = 0.03
            volatility = 0.25
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.inputs, MarketInputs::new(100.0, 95.0, 0.5, 0.03, 0.25));
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("[inputs]\nspot = 42.0").unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.inputs.spot, 42.0);
        assert_eq!(config.inputs.strike, 0.0);
    }

    #[test]
    fn test_toml_rejects_bad_log_level() {
        assert!(toml::from_str::<CliConfig>("log_level = \"loud\"").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [(ENV_LOG_LEVEL, "info"), (ENV_FORMAT, "json")]
            .into_iter()
            .collect();
        let mut config = CliConfig::default();
        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_env_invalid_value() {
        let mut config = CliConfig::default();
        let result = config.apply_env(|key| (key == ENV_FORMAT).then(|| "xml".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidFormat(_))));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig {
            inputs: MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2),
            ..Default::default()
        };
        let cli = CliArgs {
            log_level: Some("error".to_string()),
            format: Some("json".to_string()),
            inputs: InputOverrides {
                strike: Some(110.0),
                rate: Some(-0.01),
                ..Default::default()
            },
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.inputs, MarketInputs::new(100.0, 110.0, 1.0, -0.01, 0.2));
    }

    #[test]
    fn test_verbose_raises_to_debug() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            verbose: true,
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_validate_rejects_negative_volatility() {
        let config = CliConfig {
            inputs: MarketInputs::new(100.0, 100.0, 1.0, 0.05, -0.2),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidInputs(PricingError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_build_config_cli_beats_env() {
        let dir = tempdir().unwrap();
        let cli = CliArgs {
            config_file: None,
            log_level: Some("trace".to_string()),
            inputs: InputOverrides {
                spot: Some(100.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let config = build_config_from(&cli, &dir.path().join(DEFAULT_CONFIG_FILE), |key| {
            (key == ENV_LOG_LEVEL).then(|| "info".to_string())
        })
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.inputs.spot, 100.0);
    }

    #[test]
    fn test_build_config_reads_default_file_when_present() {
        let dir = tempdir().unwrap();
        let default_file = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&default_file, "format = \"json\"\n[inputs]\nspot = 42.0\n").unwrap();

        let config = build_config_from(&CliArgs::default(), &default_file, no_env).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.inputs.spot, 42.0);
    }

    #[test]
    fn test_build_config_explicit_file_wins_over_default() {
        let dir = tempdir().unwrap();
        let default_file = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&default_file, "[inputs]\nspot = 42.0\n").unwrap();
        let explicit = write_config("[inputs]\nspot = 7.0\n");

        let cli = CliArgs {
            config_file: Some(explicit.path().to_path_buf()),
            ..Default::default()
        };
        let config = build_config_from(&cli, &default_file, no_env).unwrap();
        assert_eq!(config.inputs.spot, 7.0);
    }

    #[test]
    fn test_build_config_missing_file() {
        let dir = tempdir().unwrap();
        let cli = CliArgs {
            config_file: Some(dir.path().join("missing.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_from(&cli, &dir.path().join(DEFAULT_CONFIG_FILE), no_env),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_build_config_input_validation_can_be_skipped() {
        let dir = tempdir().unwrap();
        let stale = write_config("[inputs]\nstrike = -5.0\n");
        let default_file = dir.path().join(DEFAULT_CONFIG_FILE);

        let mut cli = CliArgs {
            config_file: Some(stale.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            build_config_from(&cli, &default_file, no_env),
            Err(ConfigError::InvalidInputs(_))
        ));

        cli.skip_input_validation = true;
        let config = build_config_from(&cli, &default_file, no_env).unwrap();
        assert_eq!(config.inputs.strike, -5.0);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));

        let err = ConfigError::InvalidFormat("bad".to_string());
        assert!(err.to_string().contains("Invalid output format"));
    }
}
