//! Relay server for prompt-driven image editing via Google Gemini.
//!
//! Accepts a base64-encoded image plus a natural-language edit instruction
//! over HTTP, forwards them to Gemini's `generateContent` endpoint, and
//! normalizes the mixed image/text/error response into one stable JSON
//! contract for the client application.

pub mod ai;
pub mod edit;
pub mod error;
pub mod models;
pub mod server;

pub use error::{Error, Result};
