//! Specificity ordering of prefixes.
//!
//! Most specific first: total depth descending, then effective wildcards
//! descending, then greedy before unbounded before bounded, then base
//! ascending. A sequential scan in this order returns the same match as the
//! indexed lookup.

use std::cmp::Ordering;

use crate::prefix::Prefix;

impl Ord for Prefix {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .total_depth()
            .cmp(&self.total_depth())
            .then_with(|| other.effective_wildcards().cmp(&self.effective_wildcards()))
            .then_with(|| other.multi_level_type().cmp(&self.multi_level_type()))
            .then_with(|| self.base().cmp(other.base()))
    }
}

impl PartialOrd for Prefix {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(s: &str) -> Prefix {
        Prefix::parse(s).unwrap()
    }

    /// `first` sorts strictly before every one of `later`.
    fn assert_before(first: &str, later: &[&str]) {
        let first = prefix(first);
        for other in later {
            let other = prefix(other);
            assert_eq!(first.cmp(&other), Ordering::Less, "{first} must sort before {other}");
            assert_eq!(other.cmp(&first), Ordering::Greater, "{other} must sort after {first}");
        }
    }

    /// `last` sorts strictly after every one of `earlier`.
    fn assert_after(last: &str, earlier: &[&str]) {
        let last = prefix(last);
        for other in earlier {
            let other = prefix(other);
            assert_eq!(last.cmp(&other), Ordering::Greater, "{last} must sort after {other}");
            assert_eq!(other.cmp(&last), Ordering::Less, "{other} must sort before {last}");
        }
    }

    #[test]
    fn test_equal_iff_same_prefix() {
        for s in ["/*", "/**", "/***", "/path/*/**"] {
            assert_eq!(prefix(s).cmp(&prefix(s)), Ordering::Equal);
        }
        assert_ne!(prefix("/a/*").cmp(&prefix("/b/*")), Ordering::Equal);
    }

    #[test]
    fn test_root_types() {
        assert_before("/***", &["/**", "/*"]);
        assert_before("/**", &["/*"]);
    }

    #[test]
    fn test_deeper_before_shallower() {
        let deeper = ["/path/*/*/*", "/path/*/*/**", "/path/*/*/***"];
        assert_after("/path/*/*", &deeper);
        assert_after("/path/*/**", &deeper);
        assert_after("/path/*/***", &deeper);

        let deeper_literal = ["/path/other/*/*", "/path/other/*/**", "/path/other/*/***"];
        assert_after("/path/*/*", &deeper_literal);
        assert_after("/path/*/***", &deeper_literal);
    }

    #[test]
    fn test_much_deeper() {
        assert_before(
            "/z/z/z/z/z/*",
            &["/**", "/a/**", "/z/z/**", "/*/*/*/*/**", "/z/*/*/*/**"],
        );
        assert_after(
            "/z/z/z/z/z/*",
            &["/*/*/*/*/*/**", "/a/*/*/*/*/**", "/a/a/a/a/a/a/**", "/*/*/*/*/*/*/**"],
        );
    }

    #[test]
    fn test_more_wildcards_first_at_equal_depth() {
        assert_before("/*/*", &["/a/*"]);
        assert_before("/a/*", &["/b/*"]);
    }

    #[test]
    fn test_sorting_is_canonical() {
        let mut prefixes: Vec<Prefix> = ["/a/*", "/**", "/*/*/***", "/b/c/*", "/*"]
            .iter()
            .map(|s| prefix(s))
            .collect();
        prefixes.sort();
        let sorted: Vec<String> = prefixes.iter().map(|p| p.to_string()).collect();
        assert_eq!(sorted, ["/*/*/***", "/b/c/*", "/a/*", "/**", "/*"]);
    }
}
