use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PricingError>;

/// Broad classes the interface reacts to differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The rate table could not be loaded; nothing can be computed this session.
    DataUnavailable,
    /// The selected port and container size have no rate.
    NoRateForSelection,
    /// A request value is missing, unparseable or not strictly positive.
    InvalidInput,
    /// Configuration file, environment or flags are invalid.
    Configuration,
    /// A computed result could not be written out.
    Output,
}

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Pricing data unavailable from {}: {reason}", .path.display())]
    DataUnavailable { path: PathBuf, reason: String },

    #[error("Invalid pricing data: {0}")]
    InvalidData(String),

    #[error("No data found for {port} with {container_size} container size")]
    NoRateForSelection {
        port: String,
        container_size: String,
    },

    #[error("No volume configured for product type '{product_type}'")]
    UnknownProduct { product_type: String },

    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },
}

impl PricingError {
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PricingError::NoRateForSelection { .. } => ErrorKind::NoRateForSelection,
            PricingError::UnknownProduct { .. } | PricingError::InvalidInput { .. } => {
                ErrorKind::InvalidInput
            }
            PricingError::Config(_) | PricingError::Validation(_) => ErrorKind::Configuration,
            PricingError::Serialization(_) => ErrorKind::Output,
            PricingError::Io(_)
            | PricingError::Csv(_)
            | PricingError::DataUnavailable { .. }
            | PricingError::InvalidData(_) => ErrorKind::DataUnavailable,
        }
    }

    /// Whether the session can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self.kind(),
            ErrorKind::DataUnavailable | ErrorKind::Configuration
        )
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::NoRateForSelection | ErrorKind::InvalidInput => 1,
            ErrorKind::DataUnavailable | ErrorKind::Configuration => 2,
            ErrorKind::Output => 3,
        }
    }
}
