use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("catalog contains no records")]
    Empty,

    #[error("week {week} appears more than once")]
    DuplicateWeek { week: u32 },

    #[error("week {week} is out of order (previous week {previous})")]
    Unsorted { previous: u32, week: u32 },

    #[error("week {week}: {field} must be a finite non-negative number, got {value}")]
    InvalidMeasurement {
        week: u32,
        field: &'static str,
        value: f64,
    },
}

#[derive(Error, Debug)]
pub enum WeekError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Output,
}

impl WeekError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WeekError::ConfigValidationError { .. }
            | WeekError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            WeekError::CatalogError(_) | WeekError::InvalidDate { .. } => ErrorCategory::Data,
            WeekError::IoError(_) | WeekError::CsvError(_) | WeekError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            WeekError::CatalogError(e) => format!("The week catalog is invalid: {}", e),
            WeekError::InvalidDate { value, .. } => {
                format!("Could not understand the date '{}'", value)
            }
            WeekError::ConfigValidationError { field, .. }
            | WeekError::InvalidConfigValueError { field, .. } => {
                format!("Configuration problem in '{}': {}", field, self)
            }
            WeekError::IoError(e) => format!("File operation failed: {}", e),
            WeekError::CsvError(_) | WeekError::SerializationError(_) => {
                "Failed to render the export output".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WeekError::CatalogError(_) => {
                "Check that [[weeks]] entries are sorted by week, unique and non-negative"
            }
            WeekError::InvalidDate { .. } => "Use the YYYY-MM-DD format, e.g. 2026-03-14",
            WeekError::ConfigValidationError { .. } | WeekError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
            WeekError::IoError(_) => "Check that the output path exists and is writable",
            WeekError::CsvError(_) | WeekError::SerializationError(_) => {
                "Try a different --format or rerun with --verbose for details"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Data => 1,
            ErrorCategory::Output => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, WeekError>;
