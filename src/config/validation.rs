//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject empty and duplicate allocation names
//! - Reject malformed prefixes
//! - Detect conflicting allocations
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SpaceConfig → Result<(), Vec<ValidationError>>
//! - Runs before any prefix is registered

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::SpaceConfig;
use crate::prefix::{Prefix, PrefixError};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("allocation #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("allocation name \"{name}\" is used more than once")]
    DuplicateName { name: String },

    #[error("allocation \"{name}\": {source}")]
    InvalidPrefix { name: String, source: PrefixError },

    #[error("allocation \"{adding}\" ({adding_prefix}) conflicts with allocation \"{existing}\" ({existing_prefix})")]
    Conflict {
        existing: String,
        existing_prefix: Prefix,
        adding: String,
        adding_prefix: Prefix,
    },
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &SpaceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    let mut accepted: Vec<(&str, Prefix)> = Vec::new();

    for (index, allocation) in config.allocations.iter().enumerate() {
        let name = allocation.name.as_str();
        if name.is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if !names.insert(name) {
            errors.push(ValidationError::DuplicateName {
                name: name.to_string(),
            });
        }

        let prefix = match allocation.prefix.to_prefix() {
            Ok(prefix) => prefix,
            Err(source) => {
                errors.push(ValidationError::InvalidPrefix {
                    name: name.to_string(),
                    source,
                });
                continue;
            }
        };

        for (existing, existing_prefix) in &accepted {
            if existing_prefix.conflicts_with(&prefix) {
                errors.push(ValidationError::Conflict {
                    existing: existing.to_string(),
                    existing_prefix: existing_prefix.clone(),
                    adding: name.to_string(),
                    adding_prefix: prefix.clone(),
                });
            }
        }
        accepted.push((name, prefix));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
