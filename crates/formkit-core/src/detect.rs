//! # Fragment Type Detection
//!
//! Predicates that recognize which helper produced a fragment from its
//! declared fields. `None` stands for a missing fragment.
//!
//! [`is_url`] and [`is_font`] reject a missing fragment with
//! [`DetectError::MissingArgument`]; every other predicate answers `false`.
//! Callers rely on both behaviors, so they are kept distinct.

use crate::error::DetectError;
use crate::fragment::{Fragment, InstanceType};
use crate::helpers::{
    FORMAT_COLOR_HEX, FORMAT_DATE, FORMAT_DATE_TIME, FORMAT_EMAIL, FORMAT_TIME,
    FORMAT_URI_REFERENCE, MEDIA_FONT, MEDIA_IMAGE,
};

fn is_string(fragment: &Fragment) -> bool {
    fragment.declares(InstanceType::String)
}

fn has_format(fragment: &Fragment, format: &str) -> bool {
    fragment.format.as_deref() == Some(format)
}

fn has_media(fragment: &Fragment, media: &str) -> bool {
    fragment.content_media_type.as_deref() == Some(media)
}

/// A plain string of the given format with no media type.
fn is_plain_format(fragment: Option<&Fragment>, format: &str) -> bool {
    fragment.is_some_and(|f| {
        is_string(f) && has_format(f, format) && f.content_media_type.is_none()
    })
}

pub fn is_nullable(fragment: Option<&Fragment>) -> bool {
    fragment.is_some_and(|f| f.nullable == Some(true))
}

pub fn is_image(fragment: Option<&Fragment>) -> bool {
    fragment.is_some_and(|f| {
        is_string(f) && has_format(f, FORMAT_URI_REFERENCE) && has_media(f, MEDIA_IMAGE)
    })
}

/// # Errors
///
/// [`DetectError::MissingArgument`] when `fragment` is `None`.
pub fn is_url(fragment: Option<&Fragment>) -> Result<bool, DetectError> {
    let fragment = fragment.ok_or(DetectError::MissingArgument("schema"))?;
    Ok(is_plain_format(Some(fragment), FORMAT_URI_REFERENCE))
}

/// # Errors
///
/// [`DetectError::MissingArgument`] when `fragment` is `None`.
pub fn is_font(fragment: Option<&Fragment>) -> Result<bool, DetectError> {
    let fragment = fragment.ok_or(DetectError::MissingArgument("schema"))?;
    Ok(is_string(fragment) && has_media(fragment, MEDIA_FONT))
}

pub fn is_email(fragment: Option<&Fragment>) -> bool {
    is_plain_format(fragment, FORMAT_EMAIL)
}

pub fn is_date(fragment: Option<&Fragment>) -> bool {
    is_plain_format(fragment, FORMAT_DATE)
}

pub fn is_time(fragment: Option<&Fragment>) -> bool {
    is_plain_format(fragment, FORMAT_TIME)
}

pub fn is_date_time(fragment: Option<&Fragment>) -> bool {
    is_plain_format(fragment, FORMAT_DATE_TIME)
}

pub fn is_color_hex(fragment: Option<&Fragment>) -> bool {
    is_plain_format(fragment, FORMAT_COLOR_HEX)
}

/// Semantic string subtypes recognized by the predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    Url,
    Image,
    Font,
    Email,
    Date,
    Time,
    DateTime,
    ColorHex,
}

impl SemanticType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Image => "image",
            Self::Font => "font",
            Self::Email => "email",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date-time",
            Self::ColorHex => "color-hex",
        }
    }
}

/// Classify a fragment by the helper that produced it, if any.
pub fn semantic_type(fragment: &Fragment) -> Option<SemanticType> {
    let f = Some(fragment);
    // is_url/is_font only fail on None.
    let checks = [
        (is_image(f), SemanticType::Image),
        (is_url(f).unwrap_or(false), SemanticType::Url),
        (is_font(f).unwrap_or(false), SemanticType::Font),
        (is_email(f), SemanticType::Email),
        (is_date(f), SemanticType::Date),
        (is_time(f), SemanticType::Time),
        (is_date_time(f), SemanticType::DateTime),
        (is_color_hex(f), SemanticType::ColorHex),
    ];
    checks
        .into_iter()
        .find_map(|(matched, ty)| matched.then_some(ty))
}
