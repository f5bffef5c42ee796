//! Property tests: `parse` is total over arbitrary JSON input.
//!
//! Whatever the instance, `parse` answers `Ok`, leaves the input alone and
//! reports validity consistently with its error list.

use formkit_core::{builder, helpers, Fragment, FragmentOptions};
use formkit_schema::SchemaValidator;
use proptest::prelude::*;
use serde_json::{json, Value};

fn profile() -> Fragment {
    builder::object(
        [
            ("name", builder::string(FragmentOptions::new().min_length(1))),
            ("age", builder::optional(builder::integer(FragmentOptions::new().minimum(0.0)))),
            ("homepage", builder::optional(helpers::nullable(helpers::url(FragmentOptions::new())))),
            ("accent", builder::optional(helpers::color_hex(FragmentOptions::new().default_value("#FFF")))),
            ("tags", builder::optional(builder::array(builder::string(FragmentOptions::new()), FragmentOptions::new()))),
        ],
        FragmentOptions::new().additional_properties(false),
    )
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        "[a-z0-9#:/ .-]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(
                prop_oneof![
                    Just("name".to_string()),
                    Just("age".to_string()),
                    Just("homepage".to_string()),
                    Just("accent".to_string()),
                    Just("tags".to_string()),
                    "[a-z]{1,6}",
                ],
                inner,
                0..5,
            )
            .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn parse_never_fails(instance in arb_json()) {
        let validator = SchemaValidator::with_defaults(&profile()).unwrap();
        let before = instance.clone();
        let result = validator.parse(&instance).unwrap();
        prop_assert_eq!(&instance, &before);
        prop_assert_eq!(result.is_valid, result.errors.is_empty());
    }

    #[test]
    fn parse_strips_undeclared_keys(instance in arb_json()) {
        let validator = SchemaValidator::with_defaults(&profile()).unwrap();
        let result = validator.parse(&instance).unwrap();
        if let Value::Object(map) = &result.data {
            for key in map.keys() {
                prop_assert!(
                    ["name", "age", "homepage", "accent", "tags"].contains(&key.as_str()),
                    "undeclared key survived: {}", key
                );
            }
        }
    }

    #[test]
    fn validate_agrees_with_parse(instance in arb_json()) {
        let validator = SchemaValidator::with_defaults(&profile()).unwrap();
        let result = validator.parse(&instance).unwrap();
        let mut shared = instance.clone();
        let valid = validator.validate(&mut shared).unwrap();
        prop_assert_eq!(valid, result.is_valid);
        prop_assert_eq!(shared, result.data);
    }
}
