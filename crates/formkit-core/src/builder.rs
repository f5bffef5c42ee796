//! # Builder Primitives
//!
//! Constructors for the basic fragment shapes. Each constructor computes
//! its fragment first and then applies the caller's [`FragmentOptions`],
//! so explicit options always win over computed defaults.

use std::collections::BTreeMap;

use crate::fragment::{Fragment, FragmentKind, InstanceType, Modifier};
use crate::options::FragmentOptions;

fn primitive(kind: FragmentKind, ty: InstanceType, options: FragmentOptions) -> Fragment {
    let mut fragment = Fragment {
        kind: Some(kind),
        schema_type: Some(ty.into()),
        ..Default::default()
    };
    options.apply_to(&mut fragment);
    fragment
}

pub fn string(options: FragmentOptions) -> Fragment {
    primitive(FragmentKind::String, InstanceType::String, options)
}

pub fn number(options: FragmentOptions) -> Fragment {
    primitive(FragmentKind::Number, InstanceType::Number, options)
}

pub fn integer(options: FragmentOptions) -> Fragment {
    primitive(FragmentKind::Integer, InstanceType::Integer, options)
}

pub fn boolean(options: FragmentOptions) -> Fragment {
    primitive(FragmentKind::Boolean, InstanceType::Boolean, options)
}

pub fn null(options: FragmentOptions) -> Fragment {
    primitive(FragmentKind::Null, InstanceType::Null, options)
}

/// An object fragment.
///
/// Every property not wrapped by [`optional`] is listed in `required`, in
/// the order given. `required` is omitted when no property is required.
pub fn object<I, K>(properties: I, options: FragmentOptions) -> Fragment
where
    I: IntoIterator<Item = (K, Fragment)>,
    K: Into<String>,
{
    let mut required = Vec::new();
    let mut props = BTreeMap::new();
    for (name, fragment) in properties {
        let name = name.into();
        if !fragment.is_optional() && !required.contains(&name) {
            required.push(name.clone());
        }
        props.insert(name, fragment);
    }

    let mut fragment = Fragment {
        kind: Some(FragmentKind::Object),
        schema_type: Some(InstanceType::Object.into()),
        properties: Some(props),
        required: (!required.is_empty()).then_some(required),
        ..Default::default()
    };
    options.apply_to(&mut fragment);
    fragment
}

/// An array fragment whose elements match `items`.
pub fn array(items: Fragment, options: FragmentOptions) -> Fragment {
    let mut fragment = Fragment {
        kind: Some(FragmentKind::Array),
        schema_type: Some(InstanceType::Array.into()),
        items: Some(Box::new(items)),
        ..Default::default()
    };
    options.apply_to(&mut fragment);
    fragment
}

/// Mark a fragment as optional: the enclosing [`object`] will not require it.
///
/// Optional is a property of the field, not of the value. Use
/// [`nullable`](crate::helpers::nullable) to accept `null` for a field that
/// stays required.
pub fn optional(mut fragment: Fragment) -> Fragment {
    fragment.modifier = Some(Modifier::Optional);
    fragment
}
