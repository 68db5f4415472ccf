use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a rejected report request
/// from a genuine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report generated and presented
    Success = 0,
    /// The report request was rejected (validation, sign-in, unknown name)
    ReportRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, malformed CSV, formatting error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned by the application.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<HierarchyError>() {
            Some(err) if err.is_rejection() => ExitCode::ReportRejected,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ReportRejected => write!(f, "Report Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for hierarchy generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// Validation error for request builders and domain values
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}\n\n💡 Hint: Pass --user <ID>, set FAMILY_HIERARCHY_USER, or add 'user' to the config file")]
    NotSignedIn { message: String },

    #[error("The entered name is not found in the family data: {name}\n\n💡 Hint: Names are matched exactly against the Parent column of the uploaded CSV")]
    PersonNotFound { name: String },

    #[error("Please upload a valid CSV file: {path}\nReason: {reason}\n\n💡 Hint: The family data must be a regular .csv file")]
    InvalidSourceFile { path: PathBuf, reason: String },

    #[error("Error parsing CSV file. Please check the format.\nDetails: {details}\n\n💡 Hint: The first row must be the header \"Parent,Children\"")]
    RelationParseError { details: String },

    #[error("No data found in CSV or error during parsing.\n\n💡 Hint: Add at least one row with a non-blank Parent value")]
    EmptyRelation,

    #[error("Failed to upload data to store: {path}\nDetails: {details}")]
    UploadStoreError { path: PathBuf, details: String },

    #[error("No graph to download.")]
    NoGraph,

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl HierarchyError {
    /// Shorthand for a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        HierarchyError::Validation {
            message: message.into(),
        }
    }

    /// Whether this error rejects a request before any traversal ran.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            HierarchyError::Validation { .. }
                | HierarchyError::NotSignedIn { .. }
                | HierarchyError::PersonNotFound { .. }
        )
    }
}
