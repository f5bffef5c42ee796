//! # Error Types
//!
//! Errors raised by the helper layer. These are configuration errors: a
//! caller misused an API. Nothing here describes invalid instance data.

use thiserror::Error;

/// Error returned by the detection predicates that require a fragment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// A required argument was `None`.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
}
