//! # formkit-schema — Validation Facade
//!
//! Compiles a schema fragment once and validates instances against it,
//! normalizing them on the way in.
//!
//! ## Pipeline
//!
//! 1. **Prepare**: lower `nullable`, apply strict checks and compile
//!    `patternProperties` regexes.
//! 2. **Compile** ([`keywords`]): build a `jsonschema` validator (Draft
//!    2020-12) with the inert `kind`/`modifier` keywords and the `color-hex`
//!    format registered.
//! 3. **Normalize** (per call): coerce types, fill defaults, strip
//!    undeclared properties.
//! 4. **Validate** (per call): collect structured [`ValidationIssue`]s.
//!
//! ## Example
//!
//! ```
//! use formkit_core::{builder, helpers, FragmentOptions};
//! use formkit_schema::SchemaValidator;
//! use serde_json::json;
//!
//! let schema = builder::object(
//!     [
//!         ("accent", helpers::color_hex(FragmentOptions::new())),
//!         ("count", builder::optional(builder::integer(FragmentOptions::new().default_value(32)))),
//!     ],
//!     FragmentOptions::new().additional_properties(false),
//! );
//! let validator = SchemaValidator::with_defaults(&schema).unwrap();
//!
//! let result = validator.parse(&json!({"accent": "#FFAA33", "extra": true})).unwrap();
//! assert!(result.is_valid);
//! assert_eq!(result.data, json!({"accent": "#FFAA33", "count": 32}));
//! ```
//!
//! ## Crate Policy
//!
//! - Invalid data is never an `Err`; only misuse is.
//! - No network or disk access: `$ref` resolves within the schema only.

pub mod error;
pub mod keywords;
mod normalize;
pub mod options;
mod prepare;
pub mod validate;

pub use error::SchemaError;
pub use options::{CoerceTypes, EngineOptions, FacadeConfig, FormatOptions};
pub use validate::{CompiledSchema, ParseResult, SchemaValidator, ValidationIssue, SCHEMA_KEY};
