//! # Describe Subcommand
//!
//! Loads a schema as a [`Fragment`] and lists its top-level properties with
//! the semantic type the predicates recognize, plus their nullable and
//! required flags. Properties that match no helper show their JSON type.

use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use formkit_core::{is_nullable, semantic_type, Fragment};

use crate::{load_document, EXIT_VALID};

/// Arguments for the `formkit describe` subcommand.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Schema file (JSON or YAML).
    #[arg(long)]
    pub schema: PathBuf,
}

/// One line of `describe` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    pub name: String,
    /// Semantic type (`url`, `image`, ...) or the JSON type.
    pub semantic: String,
    pub nullable: bool,
    pub required: bool,
}

impl fmt::Display for PropertyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<24} {:<10}", self.name, self.semantic)?;
        if self.required {
            write!(f, " required")?;
        }
        if self.nullable {
            write!(f, " nullable")?;
        }
        Ok(())
    }
}

/// Execute the describe subcommand.
pub fn run_describe(args: &DescribeArgs) -> Result<u8> {
    let document = load_document(&args.schema)?;
    let fragment: Fragment = serde_json::from_value(document)
        .with_context(|| format!("{} is not a schema fragment", args.schema.display()))?;

    for row in describe(&fragment)? {
        println!("{row}");
    }
    Ok(EXIT_VALID)
}

/// Rows for every top-level property, in name order.
pub fn describe(fragment: &Fragment) -> Result<Vec<PropertyRow>> {
    let Some(properties) = &fragment.properties else {
        bail!("schema has no top-level properties");
    };

    Ok(properties
        .iter()
        .map(|(name, property)| PropertyRow {
            name: name.clone(),
            semantic: semantic_type(property)
                .map(|ty| ty.as_str().to_string())
                .or_else(|| property.schema_type.as_ref().map(type_label))
                .unwrap_or_else(|| "any".to_string()),
            nullable: is_nullable(Some(property)),
            required: fragment.requires(name),
        })
        .collect())
}

fn type_label(ty: &formkit_core::SchemaType) -> String {
    serde_json::to_value(ty)
        .map(|v| match v {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        })
        .unwrap_or_default()
}
