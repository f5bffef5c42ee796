//! # formkit-cli — Command Line Front End
//!
//! Provides the `formkit` binary over `formkit-schema`.
//!
//! ## Subcommands
//!
//! - `formkit parse` — normalize a copy of a document and print the result.
//! - `formkit check` — validate a document, optionally writing the
//!   normalized form back.
//! - `formkit describe` — list the top-level properties of a schema with
//!   their detected semantic type.
//!
//! ```bash
//! formkit parse --schema profile.schema.json --data profile.json
//! formkit -v --config formkit.yaml check --schema profile.schema.json --data profile.yaml --write
//! formkit describe --schema profile.schema.json
//! ```
//!
//! Exit codes: 0 valid, 1 invalid, 2 operational error.

pub mod check;
pub mod config;
pub mod describe;
pub mod parse;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use formkit_schema::{FacadeConfig, SchemaValidator};

/// Exit code for a valid document.
pub const EXIT_VALID: u8 = 0;
/// Exit code for an invalid document.
pub const EXIT_INVALID: u8 = 1;
/// Exit code for an operational error.
pub const EXIT_ERROR: u8 = 2;

/// Returns true if `path` has a `.yaml` or `.yml` extension.
pub fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

/// Load a JSON or YAML document, chosen by extension.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if is_yaml(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML in {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))
    }
}

/// Load a document from `path`, or from stdin as JSON when `path` is `None`.
pub fn load_document_or_stdin(path: Option<&Path>) -> Result<Value> {
    match path {
        Some(path) => load_document(path),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            serde_json::from_str(&content).context("failed to parse JSON from stdin")
        }
    }
}

/// Compile the schema at `path` with `config`.
pub fn load_validator(path: &Path, config: &FacadeConfig) -> Result<SchemaValidator> {
    let schema = load_document(path)?;
    let validator = SchemaValidator::from_config(&schema, config.clone())
        .with_context(|| format!("failed to compile schema {}", path.display()))?;
    tracing::info!(schema = %path.display(), "compiled schema");
    Ok(validator)
}
