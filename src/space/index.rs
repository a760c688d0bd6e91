//! Depth index over registered prefixes.
//!
//! # Responsibilities
//! - File each prefix under (total depth, effective wildcards, base)
//! - Find the owning prefix of a path in time bounded by path depth
//!
//! # Design Decisions
//! - Two tables: bounded prefixes only match at their exact depth,
//!   unbounded and greedy ones match at their depth or deeper
//! - Depth and wildcard levels are dense vectors (offset by one), the
//!   bases within a level are hashed
//! - Path separators are located lazily, never deeper than the deepest
//!   registered prefix
//! - The first hit wins: registered prefixes never conflict, so at most one
//!   prefix per total depth can own a path, and deeper ones are probed first

use std::collections::HashMap;
use std::sync::Arc;

use crate::path::{Path, SEPARATOR};
use crate::prefix::{MultiLevelType, Prefix};
use crate::space::types::PathMatch;

struct Slot<V> {
    prefix: Prefix,
    value: Arc<V>,
}

impl<V> Clone for Slot<V> {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            value: Arc::clone(&self.value),
        }
    }
}

/// total depth - 1 → effective wildcards - 1 → base → slot.
struct DepthTable<V> {
    levels: Vec<Vec<HashMap<String, Slot<V>>>>,
}

impl<V> DepthTable<V> {
    fn new() -> Self {
        Self { levels: Vec::new() }
    }

    /// Deepest total depth filed in this table.
    fn deepest(&self) -> usize {
        self.levels.len()
    }

    fn insert(&mut self, prefix: Prefix, value: Arc<V>) {
        let depth = prefix.total_depth();
        let wildcards = prefix.effective_wildcards();
        if self.levels.len() < depth {
            self.levels.resize_with(depth, Vec::new);
        }
        let level = &mut self.levels[depth - 1];
        if level.len() < wildcards {
            level.resize_with(wildcards, HashMap::new);
        }
        let base = prefix.base_str().to_string();
        let previous = level[wildcards - 1].insert(base, Slot { prefix, value });
        debug_assert!(
            previous.is_none(),
            "duplicate prefix should have been rejected as a conflict"
        );
    }

    /// Probe every wildcard bucket at `depth`.
    ///
    /// `separators` holds the byte offsets of at least the first `depth`
    /// separators of `path`.
    fn probe(&self, depth: usize, path: &str, separators: &[usize]) -> Option<&Slot<V>> {
        let level = self.levels.get(depth - 1)?;
        level
            .iter()
            .enumerate()
            .filter(|(_, bases)| !bases.is_empty())
            .find_map(|(i, bases)| {
                let literal_segments = depth - (i + 1);
                bases.get(&path[..separators[literal_segments]])
            })
    }
}

impl<V> Clone for DepthTable<V> {
    fn clone(&self) -> Self {
        Self {
            levels: self.levels.clone(),
        }
    }
}

pub(crate) struct DepthIndex<V> {
    bounded: DepthTable<V>,
    unbounded: DepthTable<V>,
}

impl<V> DepthIndex<V> {
    pub(crate) fn new() -> Self {
        Self {
            bounded: DepthTable::new(),
            unbounded: DepthTable::new(),
        }
    }

    pub(crate) fn insert(&mut self, prefix: Prefix, value: Arc<V>) {
        match prefix.multi_level_type() {
            MultiLevelType::None => self.bounded.insert(prefix, value),
            MultiLevelType::Unbounded | MultiLevelType::Greedy => self.unbounded.insert(prefix, value),
        }
    }

    pub(crate) fn lookup(&self, path: &Path) -> Option<PathMatch<V>> {
        let deepest = self.bounded.deepest().max(self.unbounded.deepest());
        if deepest == 0 {
            return None;
        }
        let s = path.as_str();
        // One separator past the deepest registered depth is enough to know
        // the path is too deep for any bounded prefix.
        let separators: Vec<usize> = s
            .match_indices(SEPARATOR)
            .map(|(i, _)| i)
            .take(deepest + 1)
            .collect();
        let path_depth = separators.len();

        if path_depth <= self.bounded.deepest() {
            if let Some(slot) = self.bounded.probe(path_depth, s, &separators) {
                return Some(found(slot, path, separators[path_depth - 1]));
            }
        }

        (1..=path_depth.min(self.unbounded.deepest()))
            .rev()
            .find_map(|depth| {
                self.unbounded
                    .probe(depth, s, &separators)
                    .map(|slot| found(slot, path, separators[depth - 1]))
            })
    }
}

fn found<V>(slot: &Slot<V>, path: &Path, offset: usize) -> PathMatch<V> {
    PathMatch::new(slot.prefix.clone(), path, offset, Arc::clone(&slot.value))
}

impl<V> Clone for DepthIndex<V> {
    fn clone(&self) -> Self {
        Self {
            bounded: self.bounded.clone(),
            unbounded: self.unbounded.clone(),
        }
    }
}
