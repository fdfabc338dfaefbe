//! Error types for report rendering

use thiserror::Error;

/// Errors raised while rendering a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report session has not been started")]
    NotStarted,

    #[error("Report session was already started")]
    AlreadyStarted,

    #[error("Report session is already finished")]
    AlreadyFinished,

    #[error("Unknown report format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
