//! # Schema Fragment — Data Model
//!
//! A [`Fragment`] describes the accepted shape of one value. It serializes
//! to a JSON-Schema node with camelCase keywords; unset fields are omitted.
//!
//! Besides the standard keywords, fragments carry two internal tags:
//!
//! - `kind` — the builder primitive that produced the fragment.
//! - `modifier` — set to `Optional` by [`optional`](crate::builder::optional).
//!
//! Validation engines do not know these keywords, so the validation facade
//! registers them as inert.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON instance types accepted by the `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl InstanceType {
    /// The keyword spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value of a `type` keyword: one type or a union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(InstanceType),
    Union(Vec<InstanceType>),
}

impl SchemaType {
    /// Returns true if `ty` is one of the declared types.
    pub fn includes(&self, ty: InstanceType) -> bool {
        match self {
            Self::Single(t) => *t == ty,
            Self::Union(ts) => ts.contains(&ty),
        }
    }
}

impl From<InstanceType> for SchemaType {
    fn from(ty: InstanceType) -> Self {
        Self::Single(ty)
    }
}

/// The value of an `additionalProperties` keyword: a flag, or a schema the
/// undeclared properties must match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Fragment>),
}

impl AdditionalProperties {
    /// Returns true for `additionalProperties: false`.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Allowed(false))
    }
}

impl From<bool> for AdditionalProperties {
    fn from(allowed: bool) -> Self {
        Self::Allowed(allowed)
    }
}

impl From<Fragment> for AdditionalProperties {
    fn from(schema: Fragment) -> Self {
        Self::Schema(Box::new(schema))
    }
}

/// Builder primitive that produced a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FragmentKind {
    String,
    Number,
    Integer,
    Boolean,
    Null,
    Object,
    Array,
}

/// Structural modifier applied to a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// The property may be absent; excluded from the parent's `required`.
    Optional,
}

/// A declarative description of one accepted value shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FragmentKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Modifier>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    /// Semantic string subtype, e.g. `"uri-reference"` or `"color-hex"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// MIME pattern such as `"image/*"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_media_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Value>>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    /// The value may additionally be `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Fragment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Fragment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
}

impl Fragment {
    /// Returns true if the declared `type` includes `ty`.
    pub fn declares(&self, ty: InstanceType) -> bool {
        self.schema_type.as_ref().is_some_and(|t| t.includes(ty))
    }

    /// Returns true if this fragment was wrapped by `optional`.
    pub fn is_optional(&self) -> bool {
        self.modifier == Some(Modifier::Optional)
    }

    /// Returns true if `name` is listed in `required`.
    pub fn requires(&self, name: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|r| r.iter().any(|n| n == name))
    }

    /// Serialize this fragment to a JSON-Schema value.
    pub fn to_value(&self) -> Value {
        // Every field is a plain JSON type with string keys, and non-finite
        // limits serialize as null, so conversion cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
