//! Error types for the obra API client.
//!
//! # Design
//! A non-2xx response becomes a single `Api` variant carrying the numeric
//! status, the extracted human-readable message, and the raw parsed payload,
//! so callers can branch on any of the three. Nothing is logged or swallowed
//! inside this crate; every error propagates to the caller.

use std::fmt;

use serde_json::Value;

/// Errors returned by the client and service layers.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` is extracted
    /// from the response payload (see `client::extraer_mensaje`), `payload`
    /// is the parsed JSON body when one existed.
    Api {
        status: u16,
        message: String,
        payload: Option<Value>,
    },

    /// The request never completed: connection, DNS, or stream failure.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// A cost category key outside the fixed set, rejected before any
    /// request is built.
    CategoriaDesconocida(String),
}

impl ApiError {
    /// Status code for API errors, `None` for everything else.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Api { message, .. } => write!(f, "{message}"),
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::CategoriaDesconocida(clave) => {
                write!(f, "Categoría no soportada: {clave}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_extracted_message() {
        let err = ApiError::Api {
            status: 500,
            message: "HTTP 500".to_string(),
            payload: None,
        };
        assert_eq!(err.to_string(), "HTTP 500");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn categoria_error_matches_backend_wording() {
        let err = ApiError::CategoriaDesconocida("florista".to_string());
        assert_eq!(err.to_string(), "Categoría no soportada: florista");
        assert_eq!(err.status(), None);
    }
}
