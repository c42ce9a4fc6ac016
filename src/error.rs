//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! HTTP status mapping lives in the server layer; this module stays
//! transport-agnostic.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("API key not configured on server.")]
    ApiKeyMissing,

    #[error("{0}")]
    AiProvider(String),

    #[error("No suitable image or text data found in Gemini response")]
    NoUsableContent,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
