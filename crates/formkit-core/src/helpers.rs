//! # Format Helpers
//!
//! String fragments with a semantic subtype, identified by their
//! `format`/`contentMediaType` pair:
//!
//! | Helper | format | contentMediaType |
//! |---|---|---|
//! | [`url`] | `uri-reference` | — |
//! | [`image`] | `uri-reference` | `image/*` |
//! | [`font`] | — | `font/*` |
//! | [`email`] | `email` | — |
//! | [`date`] | `date` | — |
//! | [`time`] | `time` | — |
//! | [`date_time`] | `date-time` | — |
//! | [`color_hex`] | `color-hex` | — |
//!
//! The markers are set before the caller's options are applied. Passing
//! `format`, `content_media_type` or `schema_type` in the options replaces
//! the marker, and the result is then no longer recognized as that helper.
//! This escape hatch is kept on purpose.

use serde_json::Value;

use crate::builder;
use crate::fragment::{Fragment, FragmentKind, InstanceType};
use crate::numeric::parse_js_number;
use crate::options::FragmentOptions;

pub const FORMAT_URI_REFERENCE: &str = "uri-reference";
pub const FORMAT_EMAIL: &str = "email";
pub const FORMAT_DATE: &str = "date";
pub const FORMAT_TIME: &str = "time";
pub const FORMAT_DATE_TIME: &str = "date-time";
pub const FORMAT_COLOR_HEX: &str = "color-hex";

pub const MEDIA_IMAGE: &str = "image/*";
pub const MEDIA_FONT: &str = "font/*";

fn semantic_string(
    format: Option<&str>,
    media_type: Option<&str>,
    options: FragmentOptions,
) -> Fragment {
    let mut fragment = builder::string(FragmentOptions::new());
    fragment.format = format.map(str::to_string);
    fragment.content_media_type = media_type.map(str::to_string);
    options.apply_to(&mut fragment);
    fragment
}

pub fn url(options: FragmentOptions) -> Fragment {
    semantic_string(Some(FORMAT_URI_REFERENCE), None, options)
}

pub fn image(options: FragmentOptions) -> Fragment {
    semantic_string(Some(FORMAT_URI_REFERENCE), Some(MEDIA_IMAGE), options)
}

pub fn font(options: FragmentOptions) -> Fragment {
    semantic_string(None, Some(MEDIA_FONT), options)
}

pub fn email(options: FragmentOptions) -> Fragment {
    semantic_string(Some(FORMAT_EMAIL), None, options)
}

pub fn date(options: FragmentOptions) -> Fragment {
    semantic_string(Some(FORMAT_DATE), None, options)
}

pub fn time(options: FragmentOptions) -> Fragment {
    semantic_string(Some(FORMAT_TIME), None, options)
}

pub fn date_time(options: FragmentOptions) -> Fragment {
    semantic_string(Some(FORMAT_DATE_TIME), None, options)
}

/// A hex color such as `#fa3` or `FFAA33CC`. `color-hex` is not a standard
/// format; validators must be told how to check it.
pub fn color_hex(options: FragmentOptions) -> Fragment {
    semantic_string(Some(FORMAT_COLOR_HEX), None, options)
}

/// Allow `null` in addition to the values `fragment` accepts.
///
/// The field stays required and visible; compare
/// [`optional`](crate::builder::optional), which lets it be absent.
pub fn nullable(mut fragment: Fragment) -> Fragment {
    fragment.nullable = Some(true);
    fragment
}

/// A string fragment whose `enum` is the labels of an enum-like mapping.
///
/// `entries` are `(label, value)` pairs in declaration order; only the
/// labels are used. Labels that read as numbers are dropped, which removes
/// the reverse-mapping entries that numeric enums generate. `type` and
/// `enum` are set after the options and cannot be overridden.
pub fn enum_keys<I, K, V>(entries: I, options: FragmentOptions) -> Fragment
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
{
    let labels: Vec<Value> = entries
        .into_iter()
        .map(|(label, _)| label.into())
        .filter(|label| !is_numeric_label(label))
        .map(Value::String)
        .collect();

    let mut fragment = Fragment {
        kind: Some(FragmentKind::String),
        ..Default::default()
    };
    options.apply_to(&mut fragment);
    fragment.schema_type = Some(InstanceType::String.into());
    fragment.enum_values = Some(labels);
    fragment
}

/// True if `label` converts to a number, infinities included. Blank labels
/// convert to zero.
fn is_numeric_label(label: &str) -> bool {
    parse_js_number(label).is_some()
}
