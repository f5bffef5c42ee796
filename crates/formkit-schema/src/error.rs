//! # Facade Errors
//!
//! Configuration errors only. An instance that fails validation is reported
//! as data through [`ParseResult`](crate::ParseResult), never as an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema could not be serialized to JSON.
    #[error("schema serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// No compiled schema is registered under the key.
    #[error("missing schema '{key}'")]
    MissingSchema {
        /// Registry key that was looked up.
        key: String,
    },

    /// Strict mode rejected the schema.
    #[error("strict mode: {reason} at '{path}'")]
    Strict {
        /// JSON Pointer to the offending schema node.
        path: String,
        /// What was rejected.
        reason: String,
    },

    /// A `patternProperties` key is not a valid regular expression.
    #[error("invalid property pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The engine could not compile the schema.
    #[error("validator build error: {reason}")]
    ValidatorBuild {
        /// Engine error message.
        reason: String,
    },

    /// A valid instance did not deserialize into the requested type.
    #[error("validated instance does not fit the target type: {0}")]
    Deserialize(#[source] serde_json::Error),
}
