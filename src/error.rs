// src/error.rs
use std::io;

use thiserror::Error;

/// Root error type shared across the crate.
#[derive(Debug, Error)]
pub enum CountCharsError {
    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, CountCharsError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read line from standard input: {source}")]
    StdinRead {
        #[source]
        source: io::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to write prompt: {source}")]
    PromptWrite {
        #[source]
        source: io::Error,
    },

    #[error("Failed to write report: {source}")]
    ReportWrite {
        #[source]
        source: io::Error,
    },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;
