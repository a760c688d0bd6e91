//! Lookup results and error definitions.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::path::Path;
use crate::prefix::{Prefix, PrefixError};

/// Raised when a prefix overlaps one already registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("prefix \"{adding}\" conflicts with existing prefix \"{existing}\"")]
pub struct ConflictError {
    existing: Prefix,
    adding: Prefix,
}

impl ConflictError {
    pub(crate) fn new(existing: Prefix, adding: Prefix) -> Self {
        Self { existing, adding }
    }

    /// The registered prefix that was in the way.
    pub fn existing(&self) -> &Prefix {
        &self.existing
    }

    /// The prefix that was rejected.
    pub fn adding(&self) -> &Prefix {
        &self.adding
    }
}

/// Errors from registering a prefix given in its string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpaceError {
    #[error(transparent)]
    Prefix(#[from] PrefixError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),
}

/// The result of a successful lookup.
///
/// `head` is the part of the path owned by the prefix, `remainder` is
/// everything past it, starting at a separator.
pub struct PathMatch<V> {
    prefix: Prefix,
    head: Path,
    remainder: Path,
    value: Arc<V>,
}

impl<V> PathMatch<V> {
    pub(crate) fn new(prefix: Prefix, path: &Path, offset: usize, value: Arc<V>) -> Self {
        let (head, remainder) = path.split_at(offset);
        Self {
            prefix,
            head,
            remainder,
            value,
        }
    }

    /// The registered prefix that owns the path.
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    /// The matched part of the path; the root when nothing was consumed.
    pub fn head(&self) -> &Path {
        &self.head
    }

    pub fn remainder(&self) -> &Path {
        &self.remainder
    }

    pub fn value(&self) -> &Arc<V> {
        &self.value
    }

    /// Reassembles the path that was looked up.
    pub fn rejoin(&self) -> Path {
        if self.head.is_root() {
            self.remainder.clone()
        } else {
            // Both halves were cut from one valid path at a separator.
            Path::parse(format!("{}{}", self.head, self.remainder))
                .unwrap_or_else(|e| unreachable!("rejoined path is invalid: {e}"))
        }
    }
}

impl<V> Clone for PathMatch<V> {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            head: self.head.clone(),
            remainder: self.remainder.clone(),
            value: Arc::clone(&self.value),
        }
    }
}

/// Values compare by identity.
impl<V> PartialEq for PathMatch<V> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
            && self.prefix == other.prefix
            && self.head == other.head
            && self.remainder == other.remainder
    }
}

impl<V> Eq for PathMatch<V> {}

impl<V> fmt::Debug for PathMatch<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathMatch")
            .field("prefix", &self.prefix.to_string())
            .field("head", &self.head.as_str())
            .field("remainder", &self.remainder.as_str())
            .finish_non_exhaustive()
    }
}

impl<V> fmt::Display for PathMatch<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.head, self.remainder)
    }
}
