//! Shared utilities for integration tests.

use path_space::{Path, PathMatch, PathSpace, Prefix};
use rand::seq::SliceRandom;

/// Build a verifying space from `prefixes`, registered in a random order.
/// Each value is the prefix's own canonical string.
#[allow(dead_code)]
pub fn shuffled_space(prefixes: &[&str]) -> PathSpace<String> {
    try_shuffled_space(prefixes).unwrap_or_else(|e| panic!("{e}"))
}

/// Like [`shuffled_space`], reporting the first conflict instead.
#[allow(dead_code)]
pub fn try_shuffled_space(prefixes: &[&str]) -> Result<PathSpace<String>, path_space::SpaceError> {
    let mut order = prefixes.to_vec();
    order.shuffle(&mut rand::thread_rng());

    let space = PathSpace::with_verification();
    for prefix in order {
        space.register_spec(prefix, prefix.to_string())?;
    }
    Ok(space)
}

#[allow(dead_code)]
pub fn path(s: &str) -> Path {
    Path::parse(s).unwrap()
}

#[allow(dead_code)]
pub fn prefix(s: &str) -> Prefix {
    Prefix::parse(s).unwrap()
}

/// Assert `path` resolves to `prefix`, split into `head` and `remainder`.
#[allow(dead_code)]
pub fn assert_match(space: &PathSpace<String>, p: &str, prefix: &str, head: &str, remainder: &str) {
    let found: PathMatch<String> = space
        .lookup(&path(p))
        .unwrap_or_else(|| panic!("{p} should match {prefix}"));
    assert_eq!(found.prefix().to_string(), prefix, "prefix for {p}");
    assert_eq!(found.head().as_str(), head, "head for {p}");
    assert_eq!(found.remainder().as_str(), remainder, "remainder for {p}");
    assert_eq!(found.value().as_str(), prefix, "value for {p}");
    assert_eq!(found.rejoin().as_str(), p, "rejoin for {p}");
}

#[allow(dead_code)]
pub fn assert_no_match(space: &PathSpace<String>, p: &str) {
    let found = space.lookup(&path(p));
    assert!(found.is_none(), "{p} should not match, got {found:?}");
}
