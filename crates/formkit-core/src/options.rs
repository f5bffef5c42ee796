//! # Fragment Options
//!
//! Caller-supplied options that every builder and helper accepts. Only the
//! fields that are set are applied, and they always overwrite whatever the
//! constructor computed. A caller can therefore replace even the semantic
//! markers of a helper (`type`, `format`, `contentMediaType`).

use serde_json::Value;

use crate::fragment::{AdditionalProperties, Fragment, SchemaType};

/// Options merged over a constructor's computed fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragmentOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub default: Option<Value>,
    pub examples: Option<Vec<Value>>,
    pub format: Option<String>,
    pub content_media_type: Option<String>,
    pub schema_type: Option<SchemaType>,
    pub additional_properties: Option<AdditionalProperties>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
}

impl FragmentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn examples<I, V>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.examples = Some(examples.into_iter().map(Into::into).collect());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn content_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.content_media_type = Some(media_type.into());
        self
    }

    pub fn schema_type(mut self, schema_type: impl Into<SchemaType>) -> Self {
        self.schema_type = Some(schema_type.into());
        self
    }

    pub fn additional_properties(mut self, rest: impl Into<AdditionalProperties>) -> Self {
        self.additional_properties = Some(rest.into());
        self
    }

    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn min_length(mut self, len: u64) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: u64) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn min_items(mut self, n: u64) -> Self {
        self.min_items = Some(n);
        self
    }

    pub fn max_items(mut self, n: u64) -> Self {
        self.max_items = Some(n);
        self
    }

    /// Overlay the set fields onto `fragment`.
    pub fn apply_to(self, fragment: &mut Fragment) {
        fn overlay<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        overlay(&mut fragment.title, self.title);
        overlay(&mut fragment.description, self.description);
        overlay(&mut fragment.default, self.default);
        overlay(&mut fragment.examples, self.examples);
        overlay(&mut fragment.format, self.format);
        overlay(&mut fragment.content_media_type, self.content_media_type);
        overlay(&mut fragment.schema_type, self.schema_type);
        overlay(&mut fragment.additional_properties, self.additional_properties);
        overlay(&mut fragment.minimum, self.minimum);
        overlay(&mut fragment.maximum, self.maximum);
        overlay(&mut fragment.min_length, self.min_length);
        overlay(&mut fragment.max_length, self.max_length);
        overlay(&mut fragment.pattern, self.pattern);
        overlay(&mut fragment.min_items, self.min_items);
        overlay(&mut fragment.max_items, self.max_items);
    }
}
