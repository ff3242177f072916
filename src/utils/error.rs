use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    CatalogError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SeedError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SeedError::IoError(_) => ErrorSeverity::High,
            // The catalog is embedded at build time; failing to parse it
            // means the shipped binary itself is broken.
            SeedError::CatalogError(_) => ErrorSeverity::Critical,
            SeedError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SeedError::IoError(e) => format!("Could not write the seed SQL: {}", e),
            SeedError::CatalogError(e) => format!("The embedded catalog is malformed: {}", e),
            SeedError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid --{}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SeedError::IoError(_) => "Check that the output path is writable",
            SeedError::CatalogError(_) => "Rebuild from a clean checkout of data/locations.json",
            SeedError::InvalidConfigValueError { .. } => "Run with --help for accepted values",
        }
    }
}

pub type Result<T> = std::result::Result<T, SeedError>;
