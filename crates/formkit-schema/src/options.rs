//! # Engine Configuration
//!
//! Options read once when a [`SchemaValidator`](crate::SchemaValidator) is
//! constructed. Every structure deserializes with `#[serde(default)]`, so a
//! configuration file only names the settings it changes; in code, use
//! struct update syntax over `Default::default()`.

use serde::{Deserialize, Serialize};

/// How far type coercion may go when a value matches none of the declared
/// types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoerceTypes {
    /// Never coerce.
    Off,
    /// Convert between string, number, integer, boolean and null.
    Scalar,
    /// Scalar coercion, plus wrapping a scalar into an array and unwrapping
    /// a single-element array into a scalar.
    #[default]
    Array,
}

impl CoerceTypes {
    pub fn enabled(self) -> bool {
        self != Self::Off
    }
}

/// Behavior of the normalization pass and error collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineOptions {
    pub coerce_types: CoerceTypes,
    /// Reject unknown keywords and unknown formats at construction.
    pub strict: bool,
    /// Fill absent properties from their schema's `default`.
    pub use_defaults: bool,
    /// Drop undeclared properties where `additionalProperties` is `false`.
    pub remove_additional: bool,
    /// Report every error rather than only the first.
    pub all_errors: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            coerce_types: CoerceTypes::Array,
            strict: false,
            use_defaults: true,
            remove_additional: true,
            all_errors: true,
        }
    }
}

/// Format checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FormatOptions {
    /// When false, `format` is an annotation only.
    pub validate_formats: bool,
    /// Standard formats to check. `None` checks all of them; standard
    /// formats missing from the list accept any string. `color-hex` is
    /// checked whenever formats are validated.
    pub formats: Option<Vec<String>>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            validate_formats: true,
            formats: None,
        }
    }
}

impl FormatOptions {
    /// Returns true if `format` should be checked.
    pub fn checks(&self, format: &str) -> bool {
        self.validate_formats
            && self
                .formats
                .as_ref()
                .map_or(true, |allowed| allowed.iter().any(|f| f == format))
    }
}

/// Both option sets, as loaded from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FacadeConfig {
    pub engine: EngineOptions,
    pub formats: FormatOptions,
}
