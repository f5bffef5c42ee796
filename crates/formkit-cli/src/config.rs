//! # Configuration Loading
//!
//! Reads a [`FacadeConfig`] from YAML or JSON. Absent settings keep their
//! defaults, so a file only needs the keys it changes:
//!
//! ```yaml
//! engine:
//!   coerce_types: scalar
//!   strict: true
//! formats:
//!   formats: [email, date]
//! ```

use std::path::Path;

use anyhow::{Context, Result};

use formkit_schema::FacadeConfig;

/// Load the configuration at `path`, or the defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<FacadeConfig> {
    let Some(path) = path else {
        return Ok(FacadeConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    // YAML is a superset of JSON, so one parser covers both.
    let config: FacadeConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("invalid config {}", path.display()))?;

    tracing::debug!(config = %path.display(), ?config, "loaded configuration");
    Ok(config)
}
