//! Path-space prefixes.
//!
//! # Data Flow
//! ```text
//! "/api/*/**" or (base, wildcards, type)
//!     → parse.rs (validate base, canonical form)
//!     → Prefix (immutable)
//!     → conflict.rs (could two prefixes own the same path?)
//!     → matcher.rs (does a prefix own this path, and where is the boundary?)
//!     → ordering.rs (specificity, most specific first)
//! ```
//!
//! # Design Decisions
//! - Wildcards only trail the base; infix wildcards are rejected
//! - The canonical string form is the only textual form, parse ∘ format = id
//! - Equality is structural over (base, wildcards, type)

mod conflict;
mod matcher;
mod ordering;
mod parse;
pub mod types;

pub use types::{MultiLevelType, PrefixError};

use serde::{Deserialize, Serialize};

use crate::path::Path;

/// A claimed region of the path namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prefix {
    base: Path,
    wildcards: usize,
    multi_level: MultiLevelType,
}

impl Prefix {
    /// The literal part, without any wildcard suffix.
    ///
    /// Never ends in a slash unless it is the root.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Number of "/*" segments after the base.
    pub fn wildcards(&self) -> usize {
        self.wildcards
    }

    pub fn multi_level_type(&self) -> MultiLevelType {
        self.multi_level
    }

    /// Wildcards, plus one when a multi-level suffix is present.
    pub fn effective_wildcards(&self) -> usize {
        self.wildcards + self.multi_level.extra_wildcard()
    }

    /// Separators in the base plus effective wildcards.
    pub fn total_depth(&self) -> usize {
        self.base_depth() + self.effective_wildcards()
    }

    /// Literal segments in the base, zero for the root.
    pub(crate) fn base_depth(&self) -> usize {
        if self.base.is_root() {
            0
        } else {
            self.base.depth()
        }
    }

    /// The base as used for matching and indexing: `""` for the root.
    pub(crate) fn base_str(&self) -> &str {
        if self.base.is_root() {
            ""
        } else {
            self.base.as_str()
        }
    }
}
