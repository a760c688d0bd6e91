//! Prefix building blocks and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path::PathError;

/// "/*": one single-segment wildcard.
pub const WILDCARD_SUFFIX: &str = "/*";

/// "/**": see [`MultiLevelType::Unbounded`].
pub const UNBOUNDED_SUFFIX: &str = "/**";

/// "/***": see [`MultiLevelType::Greedy`].
pub const GREEDY_SUFFIX: &str = "/***";

/// How a prefix treats paths deeper than its wildcard segments.
///
/// Declaration order matters: specificity ordering sorts greedy before
/// unbounded before none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiLevelType {
    /// Claims paths of exactly one total depth.
    #[default]
    None,
    /// Claims everything below, while still permitting deeper subspaces.
    Unbounded,
    /// Claims everything below and forbids any subspace beneath it.
    Greedy,
}

impl MultiLevelType {
    /// Suffix appended to the canonical form, `""` for [`MultiLevelType::None`].
    pub fn suffix(self) -> &'static str {
        match self {
            MultiLevelType::None => "",
            MultiLevelType::Unbounded => UNBOUNDED_SUFFIX,
            MultiLevelType::Greedy => GREEDY_SUFFIX,
        }
    }

    /// Whether other prefixes may claim subspaces within this space.
    pub fn allows_subspaces(self) -> bool {
        !matches!(self, MultiLevelType::Greedy)
    }

    /// The one extra wildcard unit a multi-level suffix contributes.
    pub(crate) fn extra_wildcard(self) -> usize {
        match self {
            MultiLevelType::None => 0,
            MultiLevelType::Unbounded | MultiLevelType::Greedy => 1,
        }
    }
}

/// Errors produced while building or parsing a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixError {
    /// The base is not a valid path.
    #[error("invalid prefix base: {0}")]
    Path(#[from] PathError),

    #[error("prefix base may not end with slash \"/\" unless it is the root \"/\" itself: {0}")]
    TrailingSlash(String),

    #[error("prefix base may not end in {suffix}: {base}")]
    WildcardSuffix { base: String, suffix: &'static str },

    #[error("infix wildcards not supported: {0}")]
    InfixWildcard(String),

    /// A bounded prefix needs at least one wildcard segment.
    #[error("prefix does not end with any type of wildcard: {0}")]
    MissingWildcard(String),
}
