use thiserror::Error;

/// Errors that can occur during Cameo core operations.
#[derive(Debug, Error)]
pub enum CameoError {
    /// The line does not start with a title followed by a parenthesized year.
    ///
    /// Displays as the untouched input line so callers can log it as-is.
    #[error("{input}")]
    ParseFailed {
        /// The input that could not be parsed.
        input: String,
    },

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

impl CameoError {
    pub(crate) fn parse_failed(input: &str) -> Self {
        Self::ParseFailed {
            input: input.to_string(),
        }
    }
}

/// Result type alias for Cameo operations.
pub type Result<T> = std::result::Result<T, CameoError>;
