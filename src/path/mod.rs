//! Normalized absolute paths.
//!
//! # Responsibilities
//! - Validate the textual form of a path
//! - Slice a path into head and tail at a separator
//! - Count separators (path depth)
//!
//! # Design Decisions
//! - Owned string newtype; ordering and equality are those of the string
//! - A trailing '/' is allowed and denotes one final empty segment
//! - The root "/" has depth 1 (a single empty segment)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The path separator.
pub const SEPARATOR: char = '/';

/// Errors produced while parsing a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path may not be empty")]
    Empty,

    #[error("path must start with \"/\": {0}")]
    NotAbsolute(String),

    #[error("path may not contain empty segments \"//\": {0}")]
    EmptySegment(String),

    #[error("path may not contain \".\" or \"..\" segments: {0}")]
    DotSegment(String),

    #[error("path may not contain NUL characters: {0:?}")]
    Nul(String),
}

/// An absolute, normalized, '/'-separated path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Path(String);

impl Path {
    /// The root path "/".
    pub fn root() -> Self {
        Self(SEPARATOR.to_string())
    }

    /// Parse and validate a path.
    pub fn parse(s: impl Into<String>) -> Result<Self, PathError> {
        let s = s.into();
        validate(&s)?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// Number of separators in the path.
    pub fn depth(&self) -> usize {
        self.0.bytes().filter(|&b| b == b'/').count()
    }

    /// Split at a separator offset into a head and the tail that starts at that separator.
    ///
    /// Offset 0 yields the root as head and the whole path as tail.
    pub fn split_at(&self, offset: usize) -> (Path, Path) {
        debug_assert!(
            self.0.as_bytes().get(offset) == Some(&b'/'),
            "split offset {offset} is not a separator in {}",
            self.0
        );
        if offset == 0 {
            return (Path::root(), self.clone());
        }
        let (head, tail) = self.0.split_at(offset);
        (Self(head.to_string()), Self(tail.to_string()))
    }
}

fn validate(s: &str) -> Result<(), PathError> {
    if s.is_empty() {
        return Err(PathError::Empty);
    }
    if !s.starts_with(SEPARATOR) {
        return Err(PathError::NotAbsolute(s.to_string()));
    }
    if s.contains('\0') {
        return Err(PathError::Nul(s.to_string()));
    }
    // The first split item is the empty text before the leading '/'.
    let mut segments = s.split(SEPARATOR).skip(1).peekable();
    while let Some(segment) = segments.next() {
        let last = segments.peek().is_none();
        match segment {
            "" if !last => return Err(PathError::EmptySegment(s.to_string())),
            "." | ".." => return Err(PathError::DotSegment(s.to_string())),
            _ => {}
        }
    }
    Ok(())
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Path {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
