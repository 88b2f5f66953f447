//! Typed HTTP client for the Swagger Buddy backend.
//!
//! The backend parses Swagger/OpenAPI documents into projects, sections and
//! endpoints. This crate only talks to it: every response arrives wrapped in a
//! `{message, status_code, data}` envelope which the [`Client`] unwraps.

mod client;
mod errors;
pub mod types;

pub use self::client::{Client, DEFAULT_API_URL, REQUEST_TIMEOUT};
pub use self::errors::Error;
