use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Conditions that stop a dataset scan early.
///
/// None of these are fatal to the caller: `count_dataset` reports them on
/// stdout and hands back an empty result.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Folder not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("No images found in dataset.")]
    EmptyDataset(PathBuf),

    #[error("Cannot read dataset folder {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AuditError {
    /// Line printed to stdout when the scan is abandoned.
    pub fn diagnostic(&self) -> String {
        match self {
            AuditError::PathNotFound(_) | AuditError::Unreadable { .. } => format!("❌ {}", self),
            AuditError::PermissionDenied(_) | AuditError::EmptyDataset(_) => format!("⚠️ {}", self),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AppError {
    pub message: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError {
            message: format!("Failed to serialize result: {}", err),
        }
    }
}

impl From<AuditError> for AppError {
    fn from(err: AuditError) -> Self {
        AppError {
            message: err.to_string(),
        }
    }
}
