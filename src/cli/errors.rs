use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Rife(#[from] rifeinterp::Error),

    #[error("Failed to encode command as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status for this failure: the child's own code when it is a
    /// valid non-zero status, otherwise 1.
    pub fn exit_status(&self) -> u8 {
        match self {
            AppError::Rife(e) => e
                .exit_code()
                .and_then(|code| u8::try_from(code).ok())
                .filter(|code| *code != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}
