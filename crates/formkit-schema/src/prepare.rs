//! # Schema Preparation
//!
//! One pass over the serialized schema before it reaches the engine:
//!
//! 1. Lower `nullable: true` into the standard form: `"null"` joins the
//!    node's `type`, and `null` joins its `enum` when one is present.
//! 2. In strict mode, reject unknown keywords and unknown formats.
//! 3. Compile every `patternProperties` key for the normalization pass.

use std::collections::HashMap;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::keywords::{is_known_format, KNOWN_KEYWORDS};

/// Keywords whose value is a map of name to subschema.
const SCHEMA_MAP_KEYWORDS: &[&str] = &[
    "properties",
    "patternProperties",
    "$defs",
    "definitions",
    "dependentSchemas",
];

/// Keywords whose value is a subschema or a list of subschemas.
const SCHEMA_KEYWORDS: &[&str] = &[
    "items",
    "prefixItems",
    "additionalProperties",
    "allOf",
    "anyOf",
    "oneOf",
    "not",
    "if",
    "then",
    "else",
    "contains",
    "propertyNames",
    "unevaluatedItems",
    "unevaluatedProperties",
];

/// Compiled `patternProperties` keys, by source pattern.
pub(crate) type PatternTable = HashMap<String, Regex>;

/// Lower, check and index `schema` in place.
pub(crate) fn prepare(schema: &mut Value, strict: bool) -> Result<PatternTable, SchemaError> {
    let mut patterns = PatternTable::new();
    walk(schema, "", &mut |node: &mut Map<String, Value>, path: &str| {
        lower_nullable(node);
        if strict {
            check_strict(node, path)?;
        }
        collect_patterns(node, &mut patterns)
    })?;
    Ok(patterns)
}

fn walk<F>(schema: &mut Value, path: &str, visit: &mut F) -> Result<(), SchemaError>
where
    F: FnMut(&mut Map<String, Value>, &str) -> Result<(), SchemaError>,
{
    let Value::Object(node) = schema else {
        return Ok(());
    };
    visit(node, path)?;

    for keyword in SCHEMA_MAP_KEYWORDS {
        if let Some(Value::Object(children)) = node.get_mut(*keyword) {
            for (name, child) in children.iter_mut() {
                let child_path = format!("{path}/{keyword}/{}", escape(name));
                walk(child, &child_path, visit)?;
            }
        }
    }

    for keyword in SCHEMA_KEYWORDS {
        match node.get_mut(*keyword) {
            Some(Value::Array(children)) => {
                for (i, child) in children.iter_mut().enumerate() {
                    walk(child, &format!("{path}/{keyword}/{i}"), visit)?;
                }
            }
            Some(child @ Value::Object(_)) => {
                walk(child, &format!("{path}/{keyword}"), visit)?;
            }
            _ => {}
        }
    }

    Ok(())
}

/// JSON Pointer token escaping (RFC 6901).
fn escape(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

fn lower_nullable(node: &mut Map<String, Value>) {
    if node.get("nullable") != Some(&Value::Bool(true)) {
        return;
    }

    let lowered = match node.get("type") {
        Some(Value::String(ty)) if ty != "null" => {
            Some(Value::Array(vec![Value::String(ty.clone()), "null".into()]))
        }
        Some(Value::Array(types)) if !types.iter().any(|t| t == "null") => {
            let mut types = types.clone();
            types.push("null".into());
            Some(Value::Array(types))
        }
        _ => None,
    };
    if let Some(ty) = lowered {
        node.insert("type".to_string(), ty);
    }

    if let Some(Value::Array(values)) = node.get_mut("enum") {
        if !values.contains(&Value::Null) {
            values.push(Value::Null);
        }
    }
}

fn check_strict(node: &Map<String, Value>, path: &str) -> Result<(), SchemaError> {
    let at = if path.is_empty() { "/" } else { path };

    if let Some(keyword) = node.keys().find(|k| !KNOWN_KEYWORDS.contains(&k.as_str())) {
        return Err(SchemaError::Strict {
            path: at.to_string(),
            reason: format!("unknown keyword '{keyword}'"),
        });
    }

    if let Some(Value::String(format)) = node.get("format") {
        if !is_known_format(format) {
            return Err(SchemaError::Strict {
                path: at.to_string(),
                reason: format!("unknown format '{format}'"),
            });
        }
    }

    Ok(())
}

fn collect_patterns(
    node: &Map<String, Value>,
    patterns: &mut PatternTable,
) -> Result<(), SchemaError> {
    let Some(Value::Object(pattern_properties)) = node.get("patternProperties") else {
        return Ok(());
    };
    for pattern in pattern_properties.keys() {
        if patterns.contains_key(pattern) {
            continue;
        }
        let regex = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        patterns.insert(pattern.clone(), regex);
    }
    Ok(())
}
