//! Configuration schema definitions.
//!
//! This module defines the allocation table format. All types derive Serde
//! traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::path::Path;
use crate::prefix::{MultiLevelType, Prefix, PrefixError};

/// Root configuration for a path space.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SpaceConfig {
    /// Registry behaviour.
    pub space: SpaceSettings,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Prefixes to allocate, in registration order.
    pub allocations: Vec<AllocationConfig>,
}

/// Registry behaviour.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SpaceSettings {
    /// Cross-check every indexed lookup against a sequential scan.
    pub verify_lookups: bool,
}

/// One named allocation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AllocationConfig {
    /// Allocation identifier, becomes the registered value.
    pub name: String,

    /// The claimed prefix.
    pub prefix: PrefixSpec,
}

/// A prefix written either in canonical form or as separate fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PrefixSpec {
    /// e.g. `"/docs/*/***"`.
    Canonical(String),

    /// e.g. `{ base = "/docs", wildcards = 1, multi_level = "greedy" }`.
    Fields {
        base: String,
        #[serde(default)]
        wildcards: usize,
        #[serde(default)]
        multi_level: MultiLevelType,
    },
}

impl PrefixSpec {
    /// Validate into a [`Prefix`].
    pub fn to_prefix(&self) -> Result<Prefix, PrefixError> {
        match self {
            PrefixSpec::Canonical(s) => Prefix::parse(s),
            PrefixSpec::Fields {
                base,
                wildcards,
                multi_level,
            } => Prefix::new(Path::parse(base.as_str())?, *wildcards, *multi_level),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error), overridden by `RUST_LOG`.
    pub log_level: String,

    /// Emit registration and lookup metrics.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_defaults() {
        let config: SpaceConfig = toml::from_str("").unwrap();
        assert!(config.allocations.is_empty());
        assert!(!config.space.verify_lookups);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_both_prefix_forms() {
        let config: SpaceConfig = toml::from_str(
            r#"
            [[allocations]]
            name = "docs"
            prefix = "/docs/***"

            [[allocations]]
            name = "api"
            prefix = { base = "/api", wildcards = 1, multi_level = "unbounded" }
            "#,
        )
        .unwrap();

        let prefixes: Vec<String> = config
            .allocations
            .iter()
            .map(|a| a.prefix.to_prefix().unwrap().to_string())
            .collect();
        assert_eq!(prefixes, ["/docs/***", "/api/*/**"]);
    }

    #[test]
    fn test_field_form_defaults_to_bounded() {
        let spec = PrefixSpec::Fields {
            base: "/x".into(),
            wildcards: 0,
            multi_level: MultiLevelType::None,
        };
        assert!(matches!(spec.to_prefix(), Err(PrefixError::MissingWildcard(_))));
    }
}
