//! Crate-level error type and `Result` alias.
//! Every failure is raised at the point of detection and handed straight back to
//! the caller; nothing in the library retries, swallows or logs an error.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: scale must be positive, got {scale}")]
    InvalidScale { scale: f64 },

    #[error("Invalid argument: executable path must be provided")]
    MissingExecutable,

    #[error("rife-ncnn-vulkan executable not found at {}", path.display())]
    ExecutableNotFound { path: PathBuf },

    #[error("Invalid argument: time must be within [0, 1], got {time}")]
    InvalidTime { time: f64 },

    #[error("{program} exited with code {code}")]
    ProcessFailed { program: String, code: i32 },

    #[error("Failed to launch {program}: {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse failure category, independent of the concrete variant.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    ProcessFailed,
    LaunchFailed,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidScale { .. } | Error::MissingExecutable | Error::InvalidTime { .. } => {
                ErrorKind::InvalidArgument
            }
            Error::ExecutableNotFound { .. } => ErrorKind::NotFound,
            Error::ProcessFailed { .. } => ErrorKind::ProcessFailed,
            Error::LaunchFailed { .. } => ErrorKind::LaunchFailed,
        }
    }

    /// Exit code observed from the external process, if it ran and failed.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::ProcessFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}
