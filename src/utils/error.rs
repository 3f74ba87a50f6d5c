use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordtoneError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Word service returned HTTP {status} for {relation} lookup")]
    HttpStatusError { relation: String, status: u16 },

    #[error("Malformed word service response: {message}")]
    MalformedResponseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("OSC encoding error: {message}")]
    EncodeError { message: String },

    #[error("OSC decoding error: {message}")]
    DecodeError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    Transport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl WordtoneError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::HttpStatusError { .. } => ErrorCategory::Network,
            Self::MalformedResponseError { .. } => ErrorCategory::Data,
            Self::IoError(_) | Self::EncodeError { .. } | Self::DecodeError { .. } => {
                ErrorCategory::Transport
            }
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Network | ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Transport => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) if e.is_timeout() => {
                "The word service did not answer in time".to_string()
            }
            Self::ApiError(_) => "Could not reach the word service".to_string(),
            Self::HttpStatusError { relation, status } => {
                format!("The word service rejected the {} lookup (HTTP {})", relation, status)
            }
            Self::MalformedResponseError { .. } => {
                "The word service answered with data that could not be read".to_string()
            }
            Self::IoError(e) => format!("Could not send OSC messages: {}", e),
            Self::EncodeError { message } | Self::DecodeError { message } => {
                format!("Invalid OSC message: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the command line flags and the config file",
            ErrorCategory::Network => {
                "Check your network connection or raise --timeout-secs, then run again"
            }
            ErrorCategory::Data => "Check that --endpoint points at a Datamuse-compatible API",
            ErrorCategory::Transport => "Check --host/--port and that the receiver host is reachable",
        }
    }
}

pub type Result<T> = std::result::Result<T, WordtoneError>;
