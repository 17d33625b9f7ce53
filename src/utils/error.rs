use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Failed to read compose file '{path}': {source}")]
    InputReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in '{path}': {source}")]
    YamlParseError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Config,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 程序退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::InputReadError { .. } | EtlError::OutputWriteError { .. } => {
                ErrorCategory::Io
            }
            EtlError::YamlParseError { .. } | EtlError::SerializationError(_) => {
                ErrorCategory::Parse
            }
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            EtlError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Parse | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::InputReadError { path, .. } => {
                format!("Cannot read compose file: {}", path)
            }
            EtlError::YamlParseError { path, source } => {
                format!("Compose file {} is not valid YAML ({})", path, source)
            }
            EtlError::OutputWriteError { path, .. } => {
                format!("Cannot write output file: {}", path)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::InputReadError { .. } => {
                "Check that the compose file exists, is a regular file and is readable"
            }
            EtlError::YamlParseError { .. } => {
                "Fix the YAML syntax (indentation, quoting, duplicate keys) and retry"
            }
            EtlError::OutputWriteError { .. } => {
                "Check that the output directory exists and is writable"
            }
            EtlError::SerializationError(_) => "Report this input file as a bug",
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => {
                "Review the command line arguments and the config file"
            }
            EtlError::ProcessingError { .. } => {
                "Make sure 'services' is a mapping of service name to definition"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
