//! Error types for Libricat
//!
//! This module defines error types using thiserror for ergonomic error
//! handling. Errors are categorized by domain (API, registration, queries,
//! storage) so callers can recover at the right boundary: everything here is
//! local to a single catalog operation and none of it is fatal to the
//! process.

use thiserror::Error;

/// Result type alias using our CatalogError type
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Main error type for Libricat
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== API Errors =====
    /// Transport or HTTP failure reaching the external catalog
    #[error("API request failed: {message}")]
    ApiRequestFailed {
        message: String,
        /// HTTP status code if available
        status_code: Option<u16>,
        /// URL that failed
        endpoint: Option<String>,
    },

    /// API returned a payload that could not be decoded
    #[error("invalid API response: {message}")]
    InvalidApiResponse { message: String },

    // ===== Registration Errors =====
    /// The search returned zero candidates
    #[error("no results found for '{term}'")]
    NoResults { term: String },

    /// Candidates were returned but none contain the search term
    #[error("no candidate title contains '{term}'")]
    NoMatch { term: String },

    /// The selected candidate violates the catalog data contract
    /// (a registerable candidate must report at least one language)
    #[error("invalid candidate: {0}")]
    InvalidCandidate(String),

    // ===== Query Errors =====
    /// Language code outside the supported set
    #[error("unsupported language code: {0}")]
    InvalidLanguage(String),

    // ===== Storage Errors =====
    /// Database schema migration failed
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Filesystem error while preparing the database location
    #[error("file I/O error: {0}")]
    FileIo(String),

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Low-level HTTP client error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl CatalogError {
    /// Helper for building API request failures with context
    pub fn api_failed(
        message: impl Into<String>,
        status_code: Option<u16>,
        endpoint: Option<String>,
    ) -> Self {
        Self::ApiRequestFailed {
            message: message.into(),
            status_code,
            endpoint,
        }
    }

    /// True when the failure happened while reaching or decoding the
    /// external catalog (as opposed to local storage or validation).
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            CatalogError::ApiRequestFailed { .. }
                | CatalogError::InvalidApiResponse { .. }
                | CatalogError::Network(_)
        )
    }

    /// Get user-friendly error message suitable for display
    ///
    /// The menu loop prints this and continues; technical detail stays in
    /// the `Display` impl and the logs.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::ApiRequestFailed { message, .. } => {
                format!("Could not reach the book catalog: {}", message)
            }
            CatalogError::InvalidApiResponse { .. } => {
                "The book catalog returned an unreadable response.".to_string()
            }
            CatalogError::NoResults { term } => {
                format!("No books found for '{}'.", term)
            }
            CatalogError::NoMatch { term } => {
                format!("None of the returned books contain '{}' in their title.", term)
            }
            CatalogError::InvalidLanguage(code) => {
                format!("'{}' is not a supported language code (es, en, fr, pt).", code)
            }
            CatalogError::InvalidCandidate(reason) => {
                format!("The matched book cannot be registered: {}", reason)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_are_categorized() {
        let err = CatalogError::api_failed("timeout", None, Some("https://example".into()));
        assert!(err.is_fetch_error());

        let err = CatalogError::NoResults { term: "x".into() };
        assert!(!err.is_fetch_error());
    }

    #[test]
    fn user_message_names_the_term() {
        let err = CatalogError::NoMatch { term: "hobbit".into() };
        assert!(err.user_message().contains("hobbit"));
    }
}
