//! Error Types

use thiserror::Error;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Message shown in the results area whenever a query fails.
pub const REQUEST_FAILED_MESSAGE: &str =
    "Sorry, there was an error processing your request. Please try again later.";

/// Advisor error types
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Transport failure reaching the LLM endpoint
    #[error("Request error: {0}")]
    Request(String),

    /// Endpoint answered with something that is not a completion
    #[error("Parse error: {0}")]
    Parse(String),

    /// Query was empty after trimming
    #[error("Query is empty")]
    EmptyQuery,
}

impl AdvisorError {
    /// Convert to a user-friendly message.
    ///
    /// Network and parse failures are not distinguished for the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyQuery => "Please enter a question about investments.".into(),
            Self::Request(_) | Self::Parse(_) => REQUEST_FAILED_MESSAGE.into(),
        }
    }
}
