//! Conflict detection between prefixes.
//!
//! Two prefixes conflict when they occupy the same space, or when one lies
//! within a greedy space of the other. Both bases are walked one segment at a
//! time in lockstep. Past its base a prefix absorbs one segment per effective
//! wildcard, then either absorbs everything (greedy) or nothing more.
//!
//! An unbounded prefix does not conflict with deeper prefixes beneath it:
//! those are subspaces, and lookup resolves to the deeper one.

use crate::prefix::{MultiLevelType, Prefix};

/// What one side of the walk offers at the current depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step<'a> {
    Literal(&'a str),
    Wildcard,
    /// Past all wildcards of a greedy prefix.
    Greedy,
    /// Past all wildcards of a bounded or unbounded prefix.
    Exhausted,
}

struct Walk<'a> {
    segments: std::str::Split<'a, char>,
    wildcards_left: usize,
    greedy: bool,
}

impl<'a> Walk<'a> {
    fn new(prefix: &'a Prefix) -> Self {
        let mut segments = prefix.base_str().split('/');
        // Drop the empty text before the leading separator; for the root
        // this drops the only item.
        segments.next();
        Self {
            segments,
            wildcards_left: prefix.effective_wildcards(),
            greedy: prefix.multi_level_type() == MultiLevelType::Greedy,
        }
    }

    fn step(&mut self) -> Step<'a> {
        if let Some(segment) = self.segments.next() {
            Step::Literal(segment)
        } else if self.wildcards_left > 0 {
            self.wildcards_left -= 1;
            Step::Wildcard
        } else if self.greedy {
            Step::Greedy
        } else {
            Step::Exhausted
        }
    }
}

impl Prefix {
    /// Checks whether `self` and `other` claim overlapping space.
    ///
    /// Reflexive and symmetric.
    pub fn conflicts_with(&self, other: &Prefix) -> bool {
        let mut left = Walk::new(self);
        let mut right = Walk::new(other);
        loop {
            match (left.step(), right.step()) {
                (Step::Literal(a), Step::Literal(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Step::Literal(_), Step::Greedy) | (Step::Greedy, Step::Literal(_)) => return true,
                // The literal side still has at least one wildcard ahead of
                // it, which settles the walk on a later step.
                (Step::Literal(_), _) | (_, Step::Literal(_)) => {}
                (Step::Wildcard, Step::Wildcard) => {}
                (Step::Wildcard, other) | (other, Step::Wildcard) => return other == Step::Greedy,
                // Both sides past their wildcards at the same depth.
                _ => return true,
            }
        }
    }
}
