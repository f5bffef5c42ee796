//! # Parse Subcommand
//!
//! Normalizes a copy of a document and prints the full outcome as JSON:
//! the normalized data, the validity flag and every issue.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use formkit_schema::{FacadeConfig, ParseResult};

use crate::{load_document_or_stdin, load_validator, EXIT_INVALID, EXIT_VALID};

/// Arguments for the `formkit parse` subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Schema file (JSON or YAML).
    #[arg(long)]
    pub schema: PathBuf,

    /// Document to parse. Reads JSON from stdin when omitted.
    #[arg(long)]
    pub data: Option<PathBuf>,
}

/// Execute the parse subcommand.
///
/// Returns exit code: 0 when the document is valid, 1 when it is not.
pub fn run_parse(args: &ParseArgs, config: &FacadeConfig) -> Result<u8> {
    let validator = load_validator(&args.schema, config)?;
    let document = load_document_or_stdin(args.data.as_deref())?;

    let result = validator.parse(&document)?;
    println!("{}", render(&result)?);

    Ok(if result.is_valid { EXIT_VALID } else { EXIT_INVALID })
}

/// Pretty JSON for a parse outcome.
pub fn render(result: &ParseResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize parse result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn counter_schema(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("counter.schema.json");
        std::fs::write(
            &path,
            r#"{"type": "object", "properties": {"number": {"type": "integer", "default": 32}}}"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn valid_document_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data.json");
        std::fs::write(&data, r#"{"number": "2"}"#).unwrap();

        let args = ParseArgs {
            schema: counter_schema(&dir),
            data: Some(data.clone()),
        };
        assert_eq!(run_parse(&args, &FacadeConfig::default()).unwrap(), EXIT_VALID);
        // parse never writes back
        assert_eq!(std::fs::read_to_string(&data).unwrap(), r#"{"number": "2"}"#);
    }

    #[test]
    fn invalid_document_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data.yaml");
        std::fs::write(&data, "number: foo\n").unwrap();

        let args = ParseArgs {
            schema: counter_schema(&dir),
            data: Some(data),
        };
        assert_eq!(run_parse(&args, &FacadeConfig::default()).unwrap(), EXIT_INVALID);
    }

    #[test]
    fn render_uses_camel_case() {
        let result = ParseResult {
            data: json!({"number": 32}),
            is_valid: true,
            errors: Vec::new(),
        };
        let rendered: serde_json::Value = serde_json::from_str(&render(&result).unwrap()).unwrap();
        assert_eq!(rendered, json!({"data": {"number": 32}, "isValid": true, "errors": []}));
    }
}
