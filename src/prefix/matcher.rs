//! Prefix matching against concrete paths.
//!
//! # Responsibilities
//! - Decide whether a prefix owns a path
//! - Locate the boundary between the matched head and the remainder
//!
//! # Design Decisions
//! - The base must be followed by a separator ("/path" is not owned by "/path/*")
//! - One path segment is consumed per effective wildcard
//! - The boundary is the separator before the last consumed segment
//! - No allocation, a single forward scan

use crate::path::{Path, SEPARATOR};
use crate::prefix::{MultiLevelType, Prefix};

impl Prefix {
    /// Checks whether `path` falls in this space.
    ///
    /// Returns the byte offset splitting the matched head from the
    /// remainder, `Some(0)` when the head is the root.
    pub fn matches(&self, path: &Path) -> Option<usize> {
        let path = path.as_str();
        let base = self.base_str();
        if !path.strip_prefix(base)?.starts_with(SEPARATOR) {
            return None;
        }

        let mut boundary = base.len();
        let mut remaining = self.effective_wildcards();
        while remaining > 0 {
            remaining -= 1;
            match path[boundary + 1..].find(SEPARATOR) {
                // Path exhausted: only a match if this was the last segment wanted.
                None => return (remaining == 0).then_some(boundary),
                Some(next) if remaining > 0 => boundary += 1 + next,
                Some(_) => {}
            }
        }

        // Every wildcard consumed with path left over.
        (self.multi_level != MultiLevelType::None).then_some(boundary)
    }
}
