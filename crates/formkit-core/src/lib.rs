//! # formkit-core — Schema Fragments for Form Data
//!
//! Builds JSON-Schema fragments for form-like records. The crate has no
//! validation logic; it only produces and inspects declarative values that
//! `formkit-schema` compiles and applies.
//!
//! ## Layers
//!
//! - [`fragment`] — the [`Fragment`] data model.
//! - [`builder`] — primitive constructors (`string`, `integer`, `object`, ...)
//!   and the [`optional`](builder::optional) modifier.
//! - [`helpers`] — semantic string helpers (`url`, `image`, `font`, `email`,
//!   `date`, `time`, `date_time`, `color_hex`), [`nullable`] and
//!   [`enum_keys`].
//! - [`detect`] — predicates that recognize which helper produced a fragment.
//! - [`numeric`] — the JavaScript `Number()` reading of numeric strings.
//!
//! ## Example
//!
//! ```
//! use formkit_core::{builder, helpers, FragmentOptions};
//!
//! let profile = builder::object(
//!     [
//!         ("avatar", helpers::image(FragmentOptions::new().description("Avatar URL"))),
//!         ("email", helpers::nullable(helpers::email(FragmentOptions::new()))),
//!         ("age", builder::optional(builder::integer(FragmentOptions::new().default_value(32)))),
//!     ],
//!     FragmentOptions::new().additional_properties(false),
//! );
//! assert_eq!(profile.required, Some(vec!["avatar".to_string(), "email".to_string()]));
//! ```
//!
//! ## Crate Policy
//!
//! - Fragments are plain values; constructors never mutate their inputs
//!   other than the fragment they take by value.
//! - No `.unwrap()` outside tests.

pub mod builder;
pub mod detect;
pub mod error;
pub mod fragment;
pub mod helpers;
pub mod numeric;
pub mod options;

pub use detect::{
    is_color_hex, is_date, is_date_time, is_email, is_font, is_image, is_nullable, is_time,
    is_url, semantic_type, SemanticType,
};
pub use error::DetectError;
pub use fragment::{
    AdditionalProperties, Fragment, FragmentKind, InstanceType, Modifier, SchemaType,
};
pub use helpers::{enum_keys, nullable};
pub use options::FragmentOptions;
