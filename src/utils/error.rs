use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Source file not found: {path}")]
    SourceNotFound { path: String },

    #[error("Malformed source '{path}': {message}")]
    SourceMalformed { path: String, message: String },

    #[error("Required field missing: {field}")]
    FieldMissing { field: String },

    #[error("Type mismatch in '{field}' at row {row}: cannot read {value:?} as {expected}")]
    TypeMismatch {
        field: String,
        row: usize,
        value: String,
        expected: &'static str,
    },

    #[error("Failed to write '{path}': {message}")]
    SinkWriteError { path: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
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
    Source,
    Transform,
    Sink,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::SourceNotFound { .. } | EtlError::SourceMalformed { .. } => {
                ErrorCategory::Source
            }
            EtlError::FieldMissing { .. } | EtlError::TypeMismatch { .. } => {
                ErrorCategory::Transform
            }
            EtlError::SinkWriteError { .. } => ErrorCategory::Sink,
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            EtlError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Source | ErrorCategory::Transform | ErrorCategory::Sink => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::SourceNotFound { path } => {
                format!("Input file '{}' does not exist", path)
            }
            EtlError::SourceMalformed { path, message } => {
                format!("Input file '{}' could not be read as CSV: {}", path, message)
            }
            EtlError::FieldMissing { field } => {
                format!("Input data has no '{}' column", field)
            }
            EtlError::TypeMismatch {
                field, row, value, ..
            } => format!("Row {} has a non-numeric {} value: {:?}", row, field, value),
            EtlError::SinkWriteError { path, message } => {
                format!("Could not write output file '{}': {}", path, message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::SourceNotFound { .. } => {
                "Check the --source path or the [source] path in your config file"
            }
            EtlError::SourceMalformed { .. } => {
                "Make sure the file is UTF-8 CSV with the header id,name,age,city,salary and one value per column on every row"
            }
            EtlError::FieldMissing { .. } => {
                "Add the missing column to the input header"
            }
            EtlError::TypeMismatch { .. } => {
                "Fix the offending cell so that id and age are integers and salary is a number"
            }
            EtlError::SinkWriteError { .. } => {
                "Check that the output directory is writable and not shadowed by a regular file"
            }
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Review the command-line flags or the TOML configuration file"
            }
            EtlError::IoError(_) => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
