//! Error types for the observability crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber is already installed, or the exporter failed to build
    #[error("failed to initialize tracing: {0}")]
    InitFailed(String),

    #[error("invalid log filter {filter:?}: {reason}")]
    Filter { filter: String, reason: String },
}
