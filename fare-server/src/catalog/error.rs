//! Catalog client error types.

use std::fmt;

/// Errors from the catalog HTTP client.
#[derive(Debug)]
pub enum CatalogError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Server returned an error status code
    Api { status: u16, message: String },

    /// No catalog URL is configured
    NotConfigured,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Http(e) => write!(f, "HTTP error: {e}"),
            CatalogError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            CatalogError::Api { status, message } => {
                write!(f, "catalog server error {status}: {message}")
            }
            CatalogError::NotConfigured => write!(f, "no catalog URL configured"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Http(err)
    }
}
