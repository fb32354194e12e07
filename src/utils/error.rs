use thiserror::Error;

#[derive(Error, Debug)]
pub enum AviaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown ticket field: {name}")]
    UnknownFieldError { name: String },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

impl AviaError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AviaError::ConfigValidationError { .. }
                | AviaError::InvalidConfigValueError { .. }
                | AviaError::MissingConfigError { .. }
                | AviaError::UnknownFieldError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AviaError::IoError(_) => "Check that the input file exists and is readable".to_string(),
            AviaError::SerializationError(_) => {
                "Check that the JSON ticket file is well formed".to_string()
            }
            AviaError::CsvError(_) | AviaError::RenderError { .. } => {
                "Try another output format with --format".to_string()
            }
            AviaError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' section of the ticket file", field)
            }
            AviaError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            AviaError::MissingConfigError { field } => format!("Add the '{}' setting", field),
            AviaError::UnknownFieldError { .. } => {
                let names: Vec<&str> = crate::core::sorter::TicketField::ALL
                    .iter()
                    .map(|f| f.name())
                    .collect();
                format!("Known fields: {}", names.join(", "))
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            e if e.is_config_error() => 1,
            AviaError::IoError(_) | AviaError::SerializationError(_) => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AviaError>;
