//! # Instance Normalization
//!
//! Mutates an instance toward its schema before the engine validates it:
//! coercion, defaults and additional-property stripping. The rules follow
//! Ajv's `coerceTypes`, `useDefaults` and `removeAdditional: true`:
//!
//! - Coercion runs only when the value matches none of the declared types.
//!   Declared types are tried in order and the first success wins. A
//!   failed coercion leaves the value untouched for the engine to reject.
//! - A default fills a property only when the property is absent.
//! - Undeclared properties are removed only where `additionalProperties`
//!   is `false`.
//!
//! `$ref` (local pointers) and `allOf` are followed. `anyOf`, `oneOf` and
//! `not` are not, since which branch applies is only known after validation.

use serde_json::{Map, Number, Value};

use formkit_core::numeric::parse_js_number;

use crate::options::{CoerceTypes, EngineOptions};
use crate::prepare::PatternTable;

/// Bound on `$ref` hops without descending into the instance.
const MAX_REF_HOPS: usize = 32;

/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub(crate) struct Normalizer<'a> {
    root: &'a Value,
    patterns: &'a PatternTable,
    options: &'a EngineOptions,
}

impl<'a> Normalizer<'a> {
    pub(crate) fn new(root: &'a Value, patterns: &'a PatternTable, options: &'a EngineOptions) -> Self {
        Self {
            root,
            patterns,
            options,
        }
    }

    pub(crate) fn normalize(&self, instance: &mut Value) {
        self.apply(self.root, instance, 0);
    }

    fn apply(&self, schema: &Value, instance: &mut Value, hops: usize) {
        let Value::Object(node) = schema else {
            return;
        };

        if let Some(Value::String(reference)) = node.get("$ref") {
            if hops < MAX_REF_HOPS {
                if let Some(target) = self.resolve(reference) {
                    self.apply(target, instance, hops + 1);
                }
            }
        }

        if let Some(types) = node.get("type") {
            self.coerce(types, instance);
        }

        if let Some(Value::Array(branches)) = node.get("allOf") {
            for branch in branches {
                self.apply(branch, instance, hops);
            }
        }

        match instance {
            Value::Object(map) => self.apply_object(node, map),
            Value::Array(items) => self.apply_array(node, items),
            _ => {}
        }
    }

    fn resolve(&self, reference: &str) -> Option<&'a Value> {
        let pointer = reference.strip_prefix('#')?;
        self.root.pointer(pointer)
    }

    fn coerce(&self, types: &Value, instance: &mut Value) {
        if !self.options.coerce_types.enabled() {
            return;
        }

        let declared: Vec<&str> = match types {
            Value::String(ty) => vec![ty.as_str()],
            Value::Array(tys) => tys.iter().filter_map(Value::as_str).collect(),
            _ => return,
        };
        if declared.iter().any(|ty| matches_type(ty, &*instance)) {
            return;
        }

        let array_mode = self.options.coerce_types == CoerceTypes::Array;
        let source = match &*instance {
            Value::Array(items)
                if array_mode && items.len() == 1 && !declared.contains(&"array") =>
            {
                items[0].clone()
            }
            Value::Array(_) | Value::Object(_) => return,
            scalar => scalar.clone(),
        };

        if declared.iter().any(|ty| matches_type(ty, &source)) {
            *instance = source;
            return;
        }

        if let Some(coerced) = declared
            .iter()
            .find_map(|ty| coerce_to(ty, &source, array_mode))
        {
            tracing::trace!(from = %source, to = %coerced, "coerced value");
            *instance = coerced;
        }
    }

    fn apply_object(&self, node: &Map<String, Value>, map: &mut Map<String, Value>) {
        let properties = node.get("properties").and_then(Value::as_object);

        if let Some(properties) = properties {
            for (name, subschema) in properties {
                if self.options.use_defaults && !map.contains_key(name) {
                    if let Some(default) = subschema.get("default") {
                        map.insert(name.clone(), default.clone());
                    }
                }
                if let Some(value) = map.get_mut(name) {
                    self.apply(subschema, value, 0);
                }
            }
        }

        let patterns: Vec<(&regex::Regex, &Value)> = node
            .get("patternProperties")
            .and_then(Value::as_object)
            .map(|pp| {
                pp.iter()
                    .filter_map(|(p, s)| self.patterns.get(p).map(|re| (re, s)))
                    .collect()
            })
            .unwrap_or_default();
        let additional = node.get("additionalProperties");

        let constrains_rest = matches!(additional, Some(Value::Bool(false) | Value::Object(_)));
        if patterns.is_empty() && !constrains_rest {
            return;
        }

        let keys: Vec<String> = map.keys().cloned().collect();
        for key in keys {
            let mut declared = properties.is_some_and(|p| p.contains_key(&key));
            for (regex, subschema) in &patterns {
                if regex.is_match(&key) {
                    declared = true;
                    if let Some(value) = map.get_mut(&key) {
                        self.apply(subschema, value, 0);
                    }
                }
            }
            if declared {
                continue;
            }

            match additional {
                Some(Value::Bool(false)) if self.options.remove_additional => {
                    map.remove(&key);
                    tracing::trace!(property = %key, "removed additional property");
                }
                Some(subschema @ Value::Object(_)) => {
                    if let Some(value) = map.get_mut(&key) {
                        self.apply(subschema, value, 0);
                    }
                }
                _ => {}
            }
        }
    }

    fn apply_array(&self, node: &Map<String, Value>, items: &mut Vec<Value>) {
        let mut rest = 0;
        if let Some(prefix) = node.get("prefixItems").and_then(Value::as_array) {
            self.fill_positional_defaults(prefix, items);
            for (subschema, item) in prefix.iter().zip(items.iter_mut()) {
                self.apply(subschema, item, 0);
            }
            rest = prefix.len();
        }

        match node.get("items") {
            Some(Value::Array(tuple)) => {
                self.fill_positional_defaults(tuple, items);
                for (subschema, item) in tuple.iter().zip(items.iter_mut()) {
                    self.apply(subschema, item, 0);
                }
            }
            Some(subschema @ Value::Object(_)) => {
                for item in items.iter_mut().skip(rest) {
                    self.apply(subschema, item, 0);
                }
            }
            _ => {}
        }
    }

    /// Append the defaults of missing tuple positions. Stops at the first
    /// position without a default, so no gap is ever filled with a
    /// placeholder.
    fn fill_positional_defaults(&self, positions: &[Value], items: &mut Vec<Value>) {
        if !self.options.use_defaults {
            return;
        }
        for subschema in positions.iter().skip(items.len()) {
            match subschema.get("default") {
                Some(default) => items.push(default.clone()),
                None => break,
            }
        }
    }
}

fn matches_type(ty: &str, value: &Value) -> bool {
    match ty {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => is_integer(value),
        "boolean" => value.is_boolean(),
        "null" => value.is_null(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        // Unknown types are the engine's problem.
        _ => true,
    }
}

fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64() || value.as_f64().is_some_and(|f| f.fract() == 0.0)
}

fn coerce_to(ty: &str, value: &Value, array_mode: bool) -> Option<Value> {
    match (ty, value) {
        ("string", Value::Number(n)) => Some(Value::String(n.to_string())),
        ("string", Value::Bool(b)) => Some(Value::String(b.to_string())),
        ("string", Value::Null) => Some(Value::String(String::new())),

        ("number", Value::String(s)) => parse_number(s, false),
        ("integer", Value::String(s)) => parse_number(s, true),
        ("number" | "integer", Value::Bool(b)) => Some(Value::from(u8::from(*b))),
        ("number" | "integer", Value::Null) => Some(Value::from(0)),

        ("boolean", Value::String(s)) => match s.as_str() {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            _ => None,
        },
        ("boolean", Value::Number(n)) => match n.as_f64() {
            Some(f) if f == 1.0 => Some(Value::Bool(true)),
            Some(f) if f == 0.0 => Some(Value::Bool(false)),
            _ => None,
        },
        ("boolean", Value::Null) => Some(Value::Bool(false)),

        ("null", Value::String(s)) if s.is_empty() => Some(Value::Null),
        ("null", Value::Number(n)) if n.as_f64() == Some(0.0) => Some(Value::Null),
        ("null", Value::Bool(false)) => Some(Value::Null),

        ("array", scalar) if array_mode => Some(Value::Array(vec![scalar.clone()])),

        _ => None,
    }
}

/// Coerce a numeric string, reading it as JavaScript's `Number()` does.
/// Blank strings and non-finite results are not numbers.
fn parse_number(s: &str, integer: bool) -> Option<Value> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Value::from(i));
    }

    let f = parse_js_number(trimmed).filter(|f| f.is_finite())?;
    if f.fract() == 0.0 {
        if f.abs() <= MAX_SAFE_INTEGER {
            return Some(Value::from(f as i64));
        }
    } else if integer {
        return None;
    }
    Number::from_f64(f).map(Value::Number)
}
