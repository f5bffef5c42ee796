//! # Engine Registration
//!
//! Builds the `jsonschema` options shared by every compiled schema:
//!
//! - Draft 2020-12.
//! - `kind` and `modifier` registered as inert keywords, so fragment tags
//!   never affect validation.
//! - The non-standard `color-hex` format.
//! - Format checking per [`FormatOptions`]. Standard formats left off the
//!   allow-list are replaced by a checker that accepts everything.
//! - A retriever that refuses every external `$ref`, so compilation never
//!   reaches the network or the filesystem.

use jsonschema::paths::{LazyLocation, Location};
use jsonschema::{Keyword, Retrieve, Uri, ValidationError, ValidationOptions};
use serde_json::{Map, Value};

use formkit_core::helpers::FORMAT_COLOR_HEX;

use crate::options::FormatOptions;

/// Keywords carried by fragments for bookkeeping only.
pub const INERT_KEYWORDS: &[&str] = &["kind", "modifier"];

/// Formats the engine checks natively under Draft 2020-12.
pub const STANDARD_FORMATS: &[&str] = &[
    "date",
    "date-time",
    "duration",
    "email",
    "hostname",
    "idn-email",
    "idn-hostname",
    "ipv4",
    "ipv6",
    "iri",
    "iri-reference",
    "json-pointer",
    "regex",
    "relative-json-pointer",
    "time",
    "uri",
    "uri-reference",
    "uri-template",
    "uuid",
];

/// Every keyword strict mode accepts.
pub const KNOWN_KEYWORDS: &[&str] = &[
    // Core
    "$schema",
    "$id",
    "$ref",
    "$defs",
    "$anchor",
    "$dynamicRef",
    "$dynamicAnchor",
    "$comment",
    "$vocabulary",
    "definitions",
    // Validation
    "type",
    "enum",
    "const",
    "multipleOf",
    "maximum",
    "exclusiveMaximum",
    "minimum",
    "exclusiveMinimum",
    "maxLength",
    "minLength",
    "pattern",
    "maxItems",
    "minItems",
    "uniqueItems",
    "maxContains",
    "minContains",
    "maxProperties",
    "minProperties",
    "required",
    "dependentRequired",
    "dependencies",
    // Applicators
    "allOf",
    "anyOf",
    "oneOf",
    "not",
    "if",
    "then",
    "else",
    "dependentSchemas",
    "prefixItems",
    "items",
    "contains",
    "properties",
    "patternProperties",
    "additionalProperties",
    "propertyNames",
    "unevaluatedItems",
    "unevaluatedProperties",
    // Content and format
    "format",
    "contentEncoding",
    "contentMediaType",
    "contentSchema",
    // Annotations
    "title",
    "description",
    "default",
    "deprecated",
    "readOnly",
    "writeOnly",
    "examples",
    // Fragment extensions
    "nullable",
    "kind",
    "modifier",
];

/// Returns true if `format` is a standard format or `color-hex`.
pub fn is_known_format(format: &str) -> bool {
    format == FORMAT_COLOR_HEX || STANDARD_FORMATS.contains(&format)
}

/// `^#?([0-9A-F]{3}|[0-9A-F]{4}|[0-9A-F]{6}|[0-9A-F]{8})$`, case-insensitive.
pub fn is_color_hex(value: &str) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

struct InertKeyword;

impl Keyword for InertKeyword {
    fn validate<'i>(
        &self,
        _instance: &'i Value,
        _location: &LazyLocation,
    ) -> Result<(), ValidationError<'i>> {
        Ok(())
    }

    fn is_valid(&self, _instance: &Value) -> bool {
        true
    }
}

fn inert_keyword<'a>(
    _parent: &'a Map<String, Value>,
    _value: &'a Value,
    _path: Location,
) -> Result<Box<dyn Keyword>, ValidationError<'a>> {
    Ok(Box::new(InertKeyword))
}

fn accept_any(_value: &str) -> bool {
    true
}

/// Refuses to resolve any external reference.
struct LocalOnlyRetriever;

impl Retrieve for LocalOnlyRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("external reference '{}' cannot be resolved", uri.as_str()).into())
    }
}

/// Engine options with the custom keywords and formats registered.
pub(crate) fn engine_options(formats: &FormatOptions) -> ValidationOptions {
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);
    opts.should_validate_formats(formats.validate_formats);
    opts.with_retriever(LocalOnlyRetriever);

    for keyword in INERT_KEYWORDS {
        opts.with_keyword(*keyword, inert_keyword);
    }

    opts.with_format(FORMAT_COLOR_HEX, is_color_hex);
    for format in STANDARD_FORMATS {
        if !formats.checks(format) {
            opts.with_format(*format, accept_any);
        }
    }

    opts
}
