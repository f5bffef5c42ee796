//! # Validation Facade
//!
//! [`SchemaValidator`] compiles a schema once and applies it to instances
//! with two postures:
//!
//! - [`parse`](SchemaValidator::parse) works on a deep copy and returns
//!   the normalized copy together with the outcome, valid or not.
//! - [`validate`](SchemaValidator::validate) normalizes the caller's value
//!   in place and answers with a boolean.
//!
//! ## Failure Contract
//!
//! Misuse is an error ([`SchemaError`]); invalid data is not. An instance
//! that fails validation always yields `Ok`, with `is_valid == false` and
//! structured [`ValidationIssue`]s, so callers can still render partial
//! data.
//!
//! ## Thread Safety
//!
//! `SchemaValidator` is `Send + Sync`. Compilation happens once in the
//! constructor and nothing is mutated afterwards. `validate` takes the
//! instance by `&mut`, so concurrent use of one instance must be
//! serialized by the caller.

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::SchemaError;
use crate::keywords::engine_options;
use crate::normalize::Normalizer;
use crate::options::{EngineOptions, FacadeConfig, FormatOptions};
use crate::prepare::{prepare, PatternTable};

/// Registry key of the root schema.
pub const SCHEMA_KEY: &str = "schema";

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// JSON Pointer to the failing value in the instance.
    pub instance_path: String,
    /// JSON Pointer to the failing keyword in the schema.
    pub schema_path: String,
    /// The keyword that failed, e.g. `type` or `format`.
    pub keyword: String,
    /// Human-readable description of the failure.
    pub message: String,
    /// The schema node holding the failing keyword, when the path resolves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Outcome of [`SchemaValidator::parse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// The normalized copy, returned whether or not it is valid.
    pub data: Value,
    pub is_valid: bool,
    /// Empty when valid.
    pub errors: Vec<ValidationIssue>,
}

/// A schema compiled by the engine, with everything the normalization pass
/// needs.
pub struct CompiledSchema {
    key: &'static str,
    schema: Value,
    patterns: PatternTable,
    validator: jsonschema::Validator,
}

impl CompiledSchema {
    pub fn key(&self) -> &str {
        self.key
    }

    /// The schema as compiled, with `nullable` lowered.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// The engine's validator. It does not normalize.
    pub fn validator(&self) -> &jsonschema::Validator {
        &self.validator
    }

    fn issues(&self, instance: &Value, all_errors: bool) -> Vec<ValidationIssue> {
        let limit = if all_errors { usize::MAX } else { 1 };
        self.validator
            .iter_errors(instance)
            .take(limit)
            .map(|e| {
                let schema_path = e.schema_path.to_string();
                let (parent, keyword) = schema_path
                    .rsplit_once('/')
                    .unwrap_or(("", schema_path.as_str()));
                ValidationIssue {
                    instance_path: e.instance_path.to_string(),
                    keyword: keyword.replace("~1", "/").replace("~0", "~"),
                    message: e.to_string(),
                    schema: self.schema.pointer(parent).cloned(),
                    schema_path: schema_path.clone(),
                }
            })
            .collect()
    }
}

impl fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledSchema")
            .field("key", &self.key)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

/// Validation facade over a single compiled schema.
#[derive(Debug)]
pub struct SchemaValidator {
    engine: EngineOptions,
    formats: FormatOptions,
    registry: HashMap<&'static str, CompiledSchema>,
}

impl SchemaValidator {
    /// Compile `schema` (a [`Fragment`](formkit_core::Fragment), a raw
    /// `serde_json::Value`, or anything else that serializes to a schema).
    ///
    /// # Errors
    ///
    /// - [`SchemaError::Serialize`] if the schema does not serialize.
    /// - [`SchemaError::Strict`] if strict mode rejects a keyword or format.
    /// - [`SchemaError::InvalidPattern`] for a bad `patternProperties` key.
    /// - [`SchemaError::ValidatorBuild`] if the engine rejects the schema.
    pub fn new<S>(schema: &S, engine: EngineOptions, formats: FormatOptions) -> Result<Self, SchemaError>
    where
        S: Serialize + ?Sized,
    {
        let mut schema = serde_json::to_value(schema).map_err(SchemaError::Serialize)?;
        let patterns = prepare(&mut schema, engine.strict)?;

        let validator = engine_options(&formats)
            .build(&schema)
            .map_err(|e| SchemaError::ValidatorBuild {
                reason: e.to_string(),
            })?;

        tracing::debug!(
            key = SCHEMA_KEY,
            coerce_types = ?engine.coerce_types,
            strict = engine.strict,
            validate_formats = formats.validate_formats,
            "compiled schema"
        );

        let mut registry = HashMap::new();
        registry.insert(
            SCHEMA_KEY,
            CompiledSchema {
                key: SCHEMA_KEY,
                schema,
                patterns,
                validator,
            },
        );

        Ok(Self {
            engine,
            formats,
            registry,
        })
    }

    /// Compile with the default engine and format options.
    pub fn with_defaults<S>(schema: &S) -> Result<Self, SchemaError>
    where
        S: Serialize + ?Sized,
    {
        Self::new(schema, EngineOptions::default(), FormatOptions::default())
    }

    /// Compile with options loaded from a configuration file.
    pub fn from_config<S>(schema: &S, config: FacadeConfig) -> Result<Self, SchemaError>
    where
        S: Serialize + ?Sized,
    {
        Self::new(schema, config.engine, config.formats)
    }

    pub fn engine_options(&self) -> &EngineOptions {
        &self.engine
    }

    pub fn format_options(&self) -> &FormatOptions {
        &self.formats
    }

    /// The compiled root schema.
    ///
    /// # Errors
    ///
    /// [`SchemaError::MissingSchema`] if nothing was compiled.
    pub fn get_schema(&self) -> Result<&CompiledSchema, SchemaError> {
        self.registry
            .get(SCHEMA_KEY)
            .ok_or_else(|| SchemaError::MissingSchema {
                key: SCHEMA_KEY.to_string(),
            })
    }

    /// Normalize and validate a deep copy of `instance`.
    ///
    /// The copy is returned in [`ParseResult::data`] even when it is
    /// invalid. `instance` is never modified.
    pub fn parse(&self, instance: &Value) -> Result<ParseResult, SchemaError> {
        let mut data = instance.clone();
        let errors = self.run(&mut data)?;
        Ok(ParseResult {
            data,
            is_valid: errors.is_empty(),
            errors,
        })
    }

    /// Normalize `instance` in place and report whether it is valid.
    ///
    /// Defaults are written, values coerced and undeclared properties
    /// removed in the caller's value, valid or not. Clone first if the
    /// original must survive, or use [`parse`](Self::parse).
    pub fn validate(&self, instance: &mut Value) -> Result<bool, SchemaError> {
        Ok(self.run(instance)?.is_empty())
    }

    /// [`validate`](Self::validate), then deserialize the valid instance.
    ///
    /// Returns `Ok(None)` when the instance is invalid.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Deserialize`] if a valid instance does not fit `T`,
    /// meaning `T` and the schema disagree.
    pub fn validate_as<T>(&self, instance: &mut Value) -> Result<Option<T>, SchemaError>
    where
        T: DeserializeOwned,
    {
        if !self.validate(instance)? {
            return Ok(None);
        }
        serde_json::from_value(instance.clone())
            .map(Some)
            .map_err(SchemaError::Deserialize)
    }

    fn run(&self, instance: &mut Value) -> Result<Vec<ValidationIssue>, SchemaError> {
        let compiled = self.get_schema()?;
        Normalizer::new(&compiled.schema, &compiled.patterns, &self.engine).normalize(instance);
        let issues = compiled.issues(instance, self.engine.all_errors);
        tracing::trace!(valid = issues.is_empty(), errors = issues.len(), "validated instance");
        Ok(issues)
    }
}
