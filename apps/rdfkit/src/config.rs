//! # Configuration Loading
//!
//! Resolves the `FactoryConfig` for a CLI invocation.
//!
//! ## Sources (first match wins)
//!
//! 1. `--config <path>`: a TOML file; absent keys take their defaults
//! 2. Environment overrides on top of the defaults:
//!    - `RDFKIT_ALLOW_RELATIVE_IRIS`: accept relative IRIs (`true`/`false`/`1`/`0`)
//!    - `RDFKIT_REJECT_BNODE_COLON`: reject `:` in blank node names

use crate::error::AppError;
use rdfkit_core::FactoryConfig;
use std::path::Path;

pub const ENV_ALLOW_RELATIVE_IRIS: &str = "RDFKIT_ALLOW_RELATIVE_IRIS";
pub const ENV_REJECT_BNODE_COLON: &str = "RDFKIT_REJECT_BNODE_COLON";

/// Load the factory configuration from a file, or from the process environment.
pub fn load_factory_config(path: Option<&Path>) -> Result<FactoryConfig, AppError> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("cannot read '{}': {}", path.display(), e))
            })?;
            let config = parse_factory_config(&text)?;
            tracing::debug!("Loaded factory config from {}", path.display());
            Ok(config)
        }
        None => config_from_env(|key| std::env::var(key).ok()),
    }
}

/// Parse TOML text into a factory configuration.
pub fn parse_factory_config(text: &str) -> Result<FactoryConfig, AppError> {
    Ok(toml::from_str(text)?)
}

/// Apply environment overrides to the defaults.
///
/// `lookup` returns the value of a variable, if set.
pub fn config_from_env(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<FactoryConfig, AppError> {
    let mut config = FactoryConfig::default();
    if let Some(value) = lookup(ENV_ALLOW_RELATIVE_IRIS) {
        config.allow_relative_iris = parse_flag(ENV_ALLOW_RELATIVE_IRIS, &value)?;
    }
    if let Some(value) = lookup(ENV_REJECT_BNODE_COLON) {
        config.reject_colon_in_blank_node_names = parse_flag(ENV_REJECT_BNODE_COLON, &value)?;
    }
    Ok(config)
}

fn parse_flag(key: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be true/false/1/0, got {:?}",
            key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = parse_factory_config("").expect("parse");
        assert_eq!(config, FactoryConfig::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let config = parse_factory_config(
            "allow_relative_iris = false\nreject_colon_in_blank_node_names = true\n",
        )
        .expect("parse");
        assert_eq!(config, FactoryConfig::strict());
    }

    #[test]
    fn unknown_toml_key_rejected() {
        let result = parse_factory_config("allow_relative = true\n");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn env_overrides_defaults() {
        let config = config_from_env(|key| match key {
            ENV_ALLOW_RELATIVE_IRIS => Some("0".to_string()),
            _ => None,
        })
        .expect("env");
        assert!(!config.allow_relative_iris);
        assert!(!config.reject_colon_in_blank_node_names);
    }

    #[test]
    fn env_without_overrides_is_default() {
        let config = config_from_env(|_| None).expect("env");
        assert_eq!(config, FactoryConfig::default());
    }

    #[test]
    fn malformed_env_value_rejected() {
        let result = config_from_env(|key| {
            (key == ENV_REJECT_BNODE_COLON).then(|| "maybe".to_string())
        });
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
