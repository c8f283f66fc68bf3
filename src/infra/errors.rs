// src/infra/errors.rs — Error types for voicedial

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoicedialError {
    // Call provider errors
    #[error("Call provider error (HTTP {status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Call provider request failed: {0}")]
    Transport(String),

    #[error("Call accepted but the response carried no execution id")]
    MissingExecutionId,

    // User errors
    #[error("Phone number must not be empty")]
    EmptyPhoneNumber,

    #[error("A demo call is already in progress")]
    CallInProgress,

    #[error("No call is currently active")]
    NoActiveCall,

    #[error("Reset is only valid after the call has ended or failed")]
    ResetMidCall,

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
