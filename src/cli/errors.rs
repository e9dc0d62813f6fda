use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid value for {arg}: {reason}")]
    InvalidArgument { arg: &'static str, reason: String },
}
