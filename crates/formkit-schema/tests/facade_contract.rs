//! Integration tests: the observable contract of the validation facade.
//!
//! Schemas are built from `formkit-core` helpers exactly as callers build
//! them, then run through `parse` and `validate`.

use formkit_core::{builder, helpers, is_nullable, Fragment, FragmentOptions};
use formkit_schema::{CoerceTypes, EngineOptions, FormatOptions, SchemaValidator, ValidationIssue};
use serde_json::{json, Value};

fn counter() -> Fragment {
    builder::object(
        [(
            "number",
            builder::optional(builder::integer(FragmentOptions::new().default_value(32))),
        )],
        FragmentOptions::new(),
    )
}

fn single_field(name: &str, fragment: Fragment) -> SchemaValidator {
    let schema = builder::object([(name.to_string(), fragment)], FragmentOptions::new());
    SchemaValidator::with_defaults(&schema).unwrap()
}

#[test]
fn test_parse_fills_default() {
    let validator = SchemaValidator::with_defaults(&counter()).unwrap();
    let result = validator.parse(&json!({})).unwrap();
    assert_eq!(result.data, json!({"number": 32}));
    assert!(result.is_valid);
}

#[test]
fn test_parse_coerces_string_to_integer() {
    let validator = SchemaValidator::with_defaults(&counter()).unwrap();
    let result = validator.parse(&json!({"number": "2"})).unwrap();
    assert_eq!(result.data, json!({"number": 2}));
    assert!(result.is_valid);
}

#[test]
fn test_parse_keeps_uncoercible_value() {
    let validator = SchemaValidator::with_defaults(&counter()).unwrap();
    let result = validator.parse(&json!({"number": "foo"})).unwrap();
    assert_eq!(result.data, json!({"number": "foo"}));
    assert!(!result.is_valid);
    assert!(!result.errors.is_empty());
}

#[test]
fn test_parse_returns_data_for_non_object_input() {
    let validator = SchemaValidator::with_defaults(&counter()).unwrap();
    for input in [json!(null), json!("text"), json!([1, 2]), json!(4.5)] {
        let result = validator.parse(&input).unwrap();
        assert!(!result.is_valid, "{input} should be invalid");
        assert_eq!(result.data, input);
    }
}

#[test]
fn test_validate_rejects_bad_email() {
    let validator = single_field("email", helpers::email(FragmentOptions::new()));
    assert!(!validator.validate(&mut json!({"email": "not-an-email"})).unwrap());
    assert!(validator.validate(&mut json!({"email": "ada@example.com"})).unwrap());
}

#[test]
fn test_validate_color_hex() {
    let validator = single_field("color", helpers::color_hex(FragmentOptions::new()));
    assert!(!validator.validate(&mut json!({"color": "#ZZZZZZ"})).unwrap());
    assert!(validator.validate(&mut json!({"color": "#FFAA33"})).unwrap());
    assert!(validator.validate(&mut json!({"color": "#ffaa33"})).unwrap());
    assert!(validator.validate(&mut json!({"color": "fa3"})).unwrap());
}

#[test]
fn test_validate_date_and_time_formats() {
    let validator = single_field("day", helpers::date(FragmentOptions::new()));
    assert!(validator.validate(&mut json!({"day": "2024-02-29"})).unwrap());
    assert!(!validator.validate(&mut json!({"day": "29/02/2024"})).unwrap());

    let validator = single_field("at", helpers::date_time(FragmentOptions::new()));
    assert!(validator.validate(&mut json!({"at": "2024-02-29T10:30:00Z"})).unwrap());
    assert!(!validator.validate(&mut json!({"at": "yesterday"})).unwrap());
}

#[test]
fn test_image_and_font_fragments_accept_references() {
    let validator = single_field("avatar", helpers::image(FragmentOptions::new()));
    assert!(validator.validate(&mut json!({"avatar": "/img/a.png"})).unwrap());
    assert!(validator.validate(&mut json!({"avatar": "https://cdn.example.com/a.png"})).unwrap());

    let validator = single_field("face", helpers::font(FragmentOptions::new()));
    assert!(validator.validate(&mut json!({"face": "Inter.woff2"})).unwrap());
    assert!(!validator.validate(&mut json!({"face": {"family": "Inter"}})).unwrap());
}

#[test]
fn test_additional_properties_false_strips() {
    let schema = builder::object(
        [("title", builder::string(FragmentOptions::new()))],
        FragmentOptions::new().additional_properties(false),
    );
    let validator = SchemaValidator::with_defaults(&schema).unwrap();
    let result = validator.parse(&json!({"title": "x", "extra": "y"})).unwrap();
    assert_eq!(result.data, json!({"title": "x"}));
    assert!(result.is_valid);
}

#[test]
fn test_additional_properties_default_retains() {
    let open = builder::object(
        [("title", builder::string(FragmentOptions::new()))],
        FragmentOptions::new(),
    );
    let explicit = builder::object(
        [("title", builder::string(FragmentOptions::new()))],
        FragmentOptions::new().additional_properties(true),
    );
    for schema in [open, explicit] {
        let validator = SchemaValidator::with_defaults(&schema).unwrap();
        let result = validator.parse(&json!({"title": "x", "extra": "y"})).unwrap();
        assert_eq!(result.data, json!({"title": "x", "extra": "y"}));
        assert!(result.is_valid);
    }
}

#[test]
fn test_nullable_wrapper() {
    let base = helpers::url(FragmentOptions::new());
    let wrapped = helpers::nullable(base.clone());
    assert!(is_nullable(Some(&wrapped)));
    assert!(!is_nullable(Some(&base)));

    let validator = single_field("link", wrapped);
    let result = validator.parse(&json!({"link": null})).unwrap();
    assert!(result.is_valid);
    assert_eq!(result.data, json!({"link": null}));
}

#[test]
fn test_null_coerces_to_empty_string_unless_nullable() {
    // A plain string field has no null branch, so coercion turns null into "".
    let validator = single_field("link", helpers::url(FragmentOptions::new()));
    let result = validator.parse(&json!({"link": null})).unwrap();
    assert!(result.is_valid);
    assert_eq!(result.data, json!({"link": ""}));

    // With nullable, null already matches the declared type and is kept.
    let validator = single_field("link", helpers::nullable(helpers::url(FragmentOptions::new())));
    let result = validator.parse(&json!({"link": null})).unwrap();
    assert_eq!(result.data, json!({"link": null}));
}

#[test]
fn test_null_rejected_without_coercion() {
    let schema = builder::object(
        [("link", helpers::url(FragmentOptions::new()))],
        FragmentOptions::new(),
    );
    let validator = SchemaValidator::new(
        &schema,
        EngineOptions {
            coerce_types: CoerceTypes::Off,
            ..Default::default()
        },
        FormatOptions::default(),
    )
    .unwrap();
    let mut instance = json!({"link": null});
    assert!(!validator.validate(&mut instance).unwrap());
    assert_eq!(instance, json!({"link": null}));

    let nullable = builder::object(
        [("link", helpers::nullable(helpers::url(FragmentOptions::new())))],
        FragmentOptions::new(),
    );
    let validator = SchemaValidator::new(
        &nullable,
        EngineOptions {
            coerce_types: CoerceTypes::Off,
            ..Default::default()
        },
        FormatOptions::default(),
    )
    .unwrap();
    assert!(validator.validate(&mut json!({"link": null})).unwrap());
}

#[test]
fn test_hex_string_coerced_to_integer() {
    let validator = single_field("mask", builder::integer(FragmentOptions::new()));
    let result = validator.parse(&json!({"mask": "0x1F"})).unwrap();
    assert!(result.is_valid);
    assert_eq!(result.data, json!({"mask": 31}));
}

#[test]
fn test_schema_valued_additional_properties() {
    let schema = builder::object(
        [("title", builder::string(FragmentOptions::new()))],
        FragmentOptions::new().additional_properties(builder::integer(FragmentOptions::new())),
    );
    let validator = SchemaValidator::with_defaults(&schema).unwrap();
    let result = validator.parse(&json!({"title": "x", "rank": "4"})).unwrap();
    assert!(result.is_valid);
    assert_eq!(result.data, json!({"title": "x", "rank": 4}));

    let result = validator.parse(&json!({"title": "x", "rank": "high"})).unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].instance_path, "/rank");
}

#[test]
fn test_nullable_field_stays_required() {
    let validator = single_field("link", helpers::nullable(helpers::url(FragmentOptions::new())));
    let result = validator.parse(&json!({})).unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].keyword, "required");
}

#[test]
fn test_enum_keys_validation() {
    let status = helpers::enum_keys(
        [("Draft", json!(0)), ("Published", json!(1)), ("0", json!("Draft")), ("1", json!("Published"))],
        FragmentOptions::new(),
    );
    let validator = single_field("status", status);
    assert!(validator.validate(&mut json!({"status": "Draft"})).unwrap());
    assert!(!validator.validate(&mut json!({"status": "0"})).unwrap());
}

#[test]
fn test_default_never_overrides_invalid_value() {
    let validator = SchemaValidator::with_defaults(&counter()).unwrap();
    let mut instance = json!({"number": "foo"});
    assert!(!validator.validate(&mut instance).unwrap());
    assert_eq!(instance, json!({"number": "foo"}));
}

#[test]
fn test_validate_mutates_shared_value_even_when_invalid() {
    let schema = builder::object(
        [
            ("title", builder::string(FragmentOptions::new())),
            ("count", builder::integer(FragmentOptions::new())),
        ],
        FragmentOptions::new().additional_properties(false),
    );
    let validator = SchemaValidator::with_defaults(&schema).unwrap();
    let mut instance = json!({"title": 5, "count": "many", "extra": 1});
    assert!(!validator.validate(&mut instance).unwrap());
    assert_eq!(instance, json!({"title": "5", "count": "many"}));
}

#[test]
fn test_nested_form() {
    let address = builder::object(
        [
            ("street", builder::string(FragmentOptions::new().min_length(1))),
            ("zip", builder::optional(builder::string(FragmentOptions::new()))),
        ],
        FragmentOptions::new().additional_properties(false),
    );
    let schema = builder::object(
        [
            ("name", builder::string(FragmentOptions::new())),
            ("addresses", builder::array(address, FragmentOptions::new().min_items(1))),
            ("newsletter", builder::optional(builder::boolean(FragmentOptions::new().default_value(false)))),
        ],
        FragmentOptions::new(),
    );
    let validator = SchemaValidator::with_defaults(&schema).unwrap();

    let result = validator
        .parse(&json!({
            "name": "Ada",
            "addresses": [{"street": "Main St", "zip": 12345, "note": "gate"}]
        }))
        .unwrap();
    assert!(result.is_valid, "{:?}", result.errors);
    assert_eq!(
        result.data,
        json!({
            "name": "Ada",
            "addresses": [{"street": "Main St", "zip": "12345"}],
            "newsletter": false
        })
    );

    let result = validator
        .parse(&json!({"name": "Ada", "addresses": [{"street": ""}]}))
        .unwrap();
    assert!(!result.is_valid);
    let paths: Vec<&str> = result
        .errors
        .iter()
        .map(|e: &ValidationIssue| e.instance_path.as_str())
        .collect();
    assert!(paths.contains(&"/addresses/0/street"), "{paths:?}");
}

#[test]
fn test_hand_written_schema_value() {
    let schema: Value = json!({
        "type": "object",
        "properties": {
            "ratio": {"type": "number", "minimum": 0, "maximum": 1},
            "tags": {"type": "array", "items": {"type": "string"}, "default": []}
        },
        "required": ["ratio"]
    });
    let validator = SchemaValidator::with_defaults(&schema).unwrap();
    let result = validator.parse(&json!({"ratio": "0.25"})).unwrap();
    assert!(result.is_valid);
    assert_eq!(result.data, json!({"ratio": 0.25, "tags": []}));

    let result = validator.parse(&json!({"ratio": "1.5"})).unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].keyword, "maximum");
}
