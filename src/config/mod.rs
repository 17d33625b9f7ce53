pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_INPUT_PATH: &str = "./docker-compose.yml";
pub const DEFAULT_OUTPUT_PATH: &str = "./services.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "compose-services")]
#[command(version)]
#[command(about = "Extract per-service labels and ports from a Docker Compose file into JSON")]
pub struct CliConfig {
    /// Compose file to read [default: ./docker-compose.yml]
    pub input: Option<String>,

    /// JSON file to write [default: ./services.json]
    pub output: Option<String>,

    /// TOML config file supplying input, output and monitoring settings
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[arg(long, help = "Log CPU and memory usage for each phase")]
    pub monitor: bool,

    /// Extract and transform only, print a summary and write nothing
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file, if any, and merges it under the command line.
    pub fn resolve(&self) -> Result<ExtractorConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        let mut config =
            ExtractorConfig::resolve(self.input.clone(), self.output.clone(), file.as_ref())?;
        config.monitor |= self.monitor;
        Ok(config)
    }
}

/// Settings for one extraction run after command line, config file and
/// defaults have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub input_path: String,
    pub output_path: String,
    pub monitor: bool,
}

impl ExtractorConfig {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            monitor: false,
        }
    }

    /// Explicit paths win over the config file, which wins over the fixed
    /// defaults.
    pub fn resolve(
        input: Option<String>,
        output: Option<String>,
        file: Option<&TomlConfig>,
    ) -> Result<Self> {
        if let Some(file) = file {
            file.validate()?;
        }

        let input_path = input
            .or_else(|| file.and_then(|f| f.input_path()).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_INPUT_PATH.to_string());
        let output_path = output
            .or_else(|| file.and_then(|f| f.output_path()).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

        Ok(Self {
            input_path,
            output_path,
            monitor: file.map(TomlConfig::monitoring_enabled).unwrap_or(false),
        })
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}

impl ConfigProvider for ExtractorConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for ExtractorConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output", &self.output_path)?;
        validate_distinct_paths(&self.input_path, &self.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_fixed_paths() {
        let config = ExtractorConfig::resolve(None, None, None).unwrap();
        assert_eq!(config, ExtractorConfig::default());
        assert_eq!(config.input_path(), "./docker-compose.yml");
        assert_eq!(config.output_path(), "./services.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_paths_win() {
        let file = TomlConfig::from_toml_str(
            "[extract]\ninput_path = \"file.yml\"\n[load]\noutput_path = \"file.json\"\n",
        )
        .unwrap();

        let config = ExtractorConfig::resolve(
            Some("arg.yml".to_string()),
            Some("arg.json".to_string()),
            Some(&file),
        )
        .unwrap();

        assert_eq!(config.input_path, "arg.yml");
        assert_eq!(config.output_path, "arg.json");
    }

    #[test]
    fn test_config_file_fills_missing_arguments() {
        let file = TomlConfig::from_toml_str(
            "[load]\noutput_path = \"file.json\"\n[monitoring]\nenabled = true\n",
        )
        .unwrap();

        let config = ExtractorConfig::resolve(Some("arg.yml".to_string()), None, Some(&file)).unwrap();

        assert_eq!(config.input_path, "arg.yml");
        assert_eq!(config.output_path, "file.json");
        assert!(config.monitor);
    }

    #[test]
    fn test_only_input_given_uses_default_output() {
        let config = ExtractorConfig::resolve(Some("stack.yml".to_string()), None, None).unwrap();
        assert_eq!(config.output_path, DEFAULT_OUTPUT_PATH);
    }

    #[test]
    fn test_invalid_config_file_is_rejected() {
        let file = TomlConfig::from_toml_str("[extract]\ninput_path = \"\"\n").unwrap();
        assert!(ExtractorConfig::resolve(None, None, Some(&file)).is_err());
    }

    #[test]
    fn test_same_input_and_output_fails_validation() {
        let config = ExtractorConfig::new("compose.yml", "./compose.yml");
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_positional_arguments() {
        let cli = CliConfig::parse_from(["compose-services", "in.yml", "out.json", "--monitor"]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.input_path, "in.yml");
        assert_eq!(config.output_path, "out.json");
        assert!(config.monitor);
        assert!(!cli.dry_run);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_without_arguments_uses_fixed_paths() {
        let cli = CliConfig::parse_from(["compose-services"]);
        let config = cli.resolve().unwrap();

        assert_eq!(config, ExtractorConfig::default());
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_rejects_extra_positional_argument() {
        let result = CliConfig::try_parse_from(["compose-services", "a.yml", "b.json", "c"]);
        assert!(result.is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_log_format_json() {
        let cli = CliConfig::parse_from(["compose-services", "--log-format", "json", "-v"]);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(cli.verbose);
    }
}
