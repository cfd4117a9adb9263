//! Error types for enhancement operations

use thiserror::Error;

/// Errors surfaced by enhancers and the registry.
///
/// All variants are synchronous validation failures. None of them are fatal
/// to the process; the tool layer translates them into an error envelope.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// Requested strategy name is not in the registry
    #[error("Unknown enhancement strategy: {0}")]
    UnknownStrategy(String),

    /// Domain knowledge enhancement invoked without a domain
    #[error("Domain must be specified for domain knowledge enhancement")]
    MissingDomain,

    /// Legacy path numeric parameter outside 1-5
    #[error("{what} must be between {min} and {max}")]
    OutOfRange {
        what: &'static str,
        min: u8,
        max: u8,
    },

    /// A present option key had a value of the wrong shape
    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
