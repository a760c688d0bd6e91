//! Path space registry.
//!
//! # Data Flow
//! ```text
//! register(prefix, value):
//!     load current snapshot
//!     → scan registered prefixes for a conflict (ConflictError, unchanged)
//!     → clone snapshot, insert into canonical map and depth index
//!     → compare-and-swap; on a lost race start over from the new snapshot
//!
//! lookup(path):
//!     load current snapshot (lock-free)
//!     → index.rs probes bounded table, then unbounded tables by depth
//!     → PathMatch { prefix, head, remainder, value }
//! ```
//!
//! # Design Decisions
//! - Snapshots are immutable once published; readers never observe a
//!   partially built index
//! - Registration is expected at startup only, so it pays for a full
//!   snapshot clone and a linear conflict scan
//! - Values are shared as `Arc<V>` between snapshots and matches
//! - Verification mode re-checks every indexed lookup against a sequential
//!   scan in canonical order

mod index;
pub mod types;

pub use types::{ConflictError, PathMatch, SpaceError};

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::SpaceConfig;
use crate::observability::metrics::{self, Registration};
use crate::path::{Path, PathError};
use crate::prefix::Prefix;
use crate::space::index::DepthIndex;

/// One published state of the registry.
struct Snapshot<V> {
    entries: BTreeMap<Prefix, Arc<V>>,
    index: DepthIndex<V>,
}

impl<V> Snapshot<V> {
    fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            index: DepthIndex::new(),
        }
    }

    fn find_conflict(&self, prefix: &Prefix) -> Option<&Prefix> {
        self.entries.keys().find(|existing| existing.conflicts_with(prefix))
    }

    fn insert(&mut self, prefix: Prefix, value: Arc<V>) {
        self.index.insert(prefix.clone(), Arc::clone(&value));
        let previous = self.entries.insert(prefix, value);
        debug_assert!(previous.is_none(), "duplicate prefix passed the conflict check");
    }

    /// First prefix in canonical order that accepts the path.
    fn lookup_sequential(&self, path: &Path) -> Option<PathMatch<V>> {
        self.entries.iter().find_map(|(prefix, value)| {
            prefix
                .matches(path)
                .map(|offset| PathMatch::new(prefix.clone(), path, offset, Arc::clone(value)))
        })
    }
}

impl<V> Clone for Snapshot<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            index: self.index.clone(),
        }
    }
}

/// A set of non-conflicting prefixes, each owning a value.
pub struct PathSpace<V> {
    snap: ArcSwap<Snapshot<V>>,
    verify: bool,
    metrics: bool,
}

impl<V> PathSpace<V> {
    pub fn new() -> Self {
        Self {
            snap: ArcSwap::from_pointee(Snapshot::empty()),
            verify: false,
            metrics: true,
        }
    }

    /// A space whose every lookup is cross-checked against a sequential
    /// scan. Disagreement panics.
    pub fn with_verification() -> Self {
        Self {
            verify: true,
            ..Self::new()
        }
    }

    /// Enable or disable metric updates.
    pub fn record_metrics(mut self, enabled: bool) -> Self {
        self.metrics = enabled;
        self
    }

    pub fn len(&self) -> usize {
        self.snap.load().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snap.load().entries.is_empty()
    }

    /// Allocate `prefix` to `value`.
    ///
    /// Fails, leaving the space unchanged, when `prefix` conflicts with any
    /// registered prefix.
    pub fn register(&self, prefix: Prefix, value: V) -> Result<(), ConflictError> {
        let value = Arc::new(value);
        loop {
            let cur = self.snap.load_full();

            if let Some(existing) = cur.find_conflict(&prefix) {
                tracing::warn!(
                    existing = %existing,
                    adding = %prefix,
                    "Prefix conflict"
                );
                if self.metrics {
                    metrics::record_registration(Registration::Conflict);
                }
                return Err(ConflictError::new(existing.clone(), prefix));
            }

            let mut next = (*cur).clone();
            next.insert(prefix.clone(), Arc::clone(&value));
            let size = next.entries.len();

            let prev = self.snap.compare_and_swap(&cur, Arc::new(next));
            if Arc::ptr_eq(&prev, &cur) {
                tracing::debug!(
                    prefix = %prefix,
                    total_depth = prefix.total_depth(),
                    effective_wildcards = prefix.effective_wildcards(),
                    size,
                    "Prefix registered"
                );
                if self.metrics {
                    metrics::record_registration(Registration::Accepted);
                    metrics::record_space_size(size);
                }
                return Ok(());
            }
        }
    }

    /// Allocate a prefix given in canonical form.
    pub fn register_spec(&self, prefix: &str, value: V) -> Result<(), SpaceError> {
        self.register(Prefix::parse(prefix)?, value)?;
        Ok(())
    }

    /// Finds the prefix owning `path`.
    ///
    /// When several registered prefixes accept the path, the deepest one
    /// owns it.
    pub fn lookup(&self, path: &Path) -> Option<PathMatch<V>> {
        let snap = self.snap.load();
        let found = snap.index.lookup(path);

        if self.verify || cfg!(any(test, feature = "verify-index")) {
            let expected = snap.lookup_sequential(path);
            assert_eq!(
                found, expected,
                "indexed lookup disagrees with sequential scan for {path}"
            );
        }

        tracing::trace!(
            path = %path,
            hit = found.is_some(),
            head = found.as_ref().map(|m| m.head().as_str()),
            "Lookup"
        );
        if self.metrics {
            metrics::record_lookup(found.is_some());
        }
        found
    }

    /// Parses `path` then looks it up.
    pub fn lookup_str(&self, path: &str) -> Result<Option<PathMatch<V>>, PathError> {
        let path = Path::parse(path)?;
        Ok(self.lookup(&path))
    }

    /// Reference lookup: first registered prefix in canonical order that
    /// accepts `path`.
    pub fn lookup_sequential(&self, path: &Path) -> Option<PathMatch<V>> {
        self.snap.load().lookup_sequential(path)
    }

    /// Registered prefixes in canonical order.
    pub fn prefixes(&self) -> Vec<Prefix> {
        self.snap.load().entries.keys().cloned().collect()
    }

    /// Registered prefixes and their values in canonical order.
    pub fn entries(&self) -> Vec<(Prefix, Arc<V>)> {
        self.snap
            .load()
            .entries
            .iter()
            .map(|(prefix, value)| (prefix.clone(), Arc::clone(value)))
            .collect()
    }

    /// The registered prefix `prefix` would conflict with, if any.
    pub fn find_conflict(&self, prefix: &Prefix) -> Option<Prefix> {
        self.snap.load().find_conflict(prefix).cloned()
    }
}

impl PathSpace<String> {
    /// Registers every allocation of `config`, in declaration order, with
    /// the allocation name as value.
    pub fn from_config(config: &SpaceConfig) -> Result<Self, SpaceError> {
        let space = Self {
            verify: config.space.verify_lookups,
            ..Self::new()
        }
        .record_metrics(config.observability.metrics_enabled);

        for allocation in &config.allocations {
            let prefix = allocation.prefix.to_prefix()?;
            space.register(prefix, allocation.name.clone())?;
        }

        tracing::info!(
            allocations = space.len(),
            verify_lookups = space.verify,
            "Path space built from configuration"
        );
        Ok(space)
    }
}

impl<V> Default for PathSpace<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for PathSpace<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snap = self.snap.load();
        f.debug_struct("PathSpace")
            .field("prefixes", &snap.entries.keys().map(ToString::to_string).collect::<Vec<_>>())
            .field("verify", &self.verify)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(s: &str) -> Prefix {
        Prefix::parse(s).unwrap()
    }

    fn parts(m: &PathMatch<&'static str>) -> (String, String, String, &'static str) {
        (
            m.prefix().to_string(),
            m.head().to_string(),
            m.remainder().to_string(),
            **m.value(),
        )
    }

    #[test]
    fn test_new_space_is_empty() {
        let space: PathSpace<()> = PathSpace::new();
        assert!(space.is_empty());
        assert_eq!(space.len(), 0);
        assert!(space.lookup_str("/").unwrap().is_none());
    }

    #[test]
    fn test_subspace_under_unbounded_root() {
        let space = PathSpace::new();
        space.register(prefix("/**"), "root").unwrap();
        space.register(prefix("/path/*"), "path").unwrap();

        let m = space.lookup_str("/path/other").unwrap().unwrap();
        assert_eq!(parts(&m), ("/path/*".into(), "/path".into(), "/other".into(), "path"));

        let m = space.lookup_str("/elsewhere").unwrap().unwrap();
        assert_eq!(parts(&m), ("/**".into(), "/".into(), "/elsewhere".into(), "root"));
    }

    #[test]
    fn test_conflict_leaves_space_unchanged() {
        let space = PathSpace::new();
        space.register(prefix("/*"), "one").unwrap();

        let err = space.register(prefix("/***"), "two").unwrap_err();
        assert_eq!(err.existing(), &prefix("/*"));
        assert_eq!(err.adding(), &prefix("/***"));
        let message = err.to_string();
        assert!(message.contains("\"/*\"") && message.contains("\"/***\""));

        assert_eq!(space.prefixes(), vec![prefix("/*")]);
        assert_eq!(space.lookup_str("/a/b").unwrap(), None);
    }

    #[test]
    fn test_greedy_requires_wildcard_segment() {
        let space = PathSpace::new();
        space.register_spec("/path/*/***", "p").unwrap();

        let m = space.lookup_str("/path/a/b/c").unwrap().unwrap();
        assert_eq!(parts(&m), ("/path/*/***".into(), "/path/a".into(), "/b/c".into(), "p"));
        assert_eq!(m.rejoin().as_str(), "/path/a/b/c");

        assert!(space.lookup_str("/path/a").unwrap().is_none());
    }

    #[test]
    fn test_equal_depth_overlap_conflicts() {
        let space = PathSpace::new();
        space.register_spec("/a/*/*", "wild").unwrap();
        let err = space.register_spec("/a/b/*", "literal").unwrap_err();
        assert!(matches!(err, SpaceError::Conflict(_)));
        assert_eq!(space.len(), 1);
    }

    #[test]
    fn test_trailing_slash_base_rejected() {
        let space: PathSpace<()> = PathSpace::new();
        let err = space.register_spec("/x//*", ()).unwrap_err();
        assert!(matches!(err, SpaceError::Prefix(_)));

        let base = Path::parse("/x/").unwrap();
        assert!(Prefix::new(base, 1, crate::prefix::MultiLevelType::None).is_err());
    }

    #[test]
    fn test_find_conflict_is_dry_run() {
        let space = PathSpace::new();
        space.register_spec("/docs/***", 1).unwrap();
        assert_eq!(space.find_conflict(&prefix("/docs/a/*")), Some(prefix("/docs/***")));
        assert_eq!(space.find_conflict(&prefix("/api/*")), None);
        assert_eq!(space.len(), 1);
    }

    #[test]
    fn test_entries_in_canonical_order() {
        let space = PathSpace::new();
        for (i, p) in ["/*/*", "/b/c/*", "/**"].iter().enumerate() {
            space.register_spec(p, i).unwrap();
        }
        let entries: Vec<(String, usize)> = space
            .entries()
            .into_iter()
            .map(|(p, v)| (p.to_string(), *v))
            .collect();
        assert_eq!(
            entries,
            [("/b/c/*".to_string(), 1), ("/*/*".to_string(), 0), ("/**".to_string(), 2)]
        );
    }

    #[test]
    fn test_lookup_rejects_invalid_path() {
        let space: PathSpace<()> = PathSpace::new();
        assert!(matches!(space.lookup_str("relative"), Err(PathError::NotAbsolute(_))));
    }

    #[test]
    fn test_from_config() {
        let config: SpaceConfig = toml::from_str(
            r#"
            [space]
            verify_lookups = true

            [[allocations]]
            name = "docs"
            prefix = "/docs/***"

            [[allocations]]
            name = "api"
            prefix = { base = "/api", wildcards = 1, multi_level = "unbounded" }
            "#,
        )
        .unwrap();
        let space = PathSpace::from_config(&config).unwrap();
        assert_eq!(space.len(), 2);

        let m = space.lookup_str("/api/v1/users").unwrap().unwrap();
        assert_eq!(m.value().as_str(), "api");
        assert_eq!(m.head().as_str(), "/api/v1");
        assert_eq!(m.remainder().as_str(), "/users");
    }
}
