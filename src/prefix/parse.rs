//! Prefix construction, validation and the canonical string form.

use std::fmt;
use std::str::FromStr;

use crate::path::{Path, SEPARATOR};
use crate::prefix::types::{
    MultiLevelType, PrefixError, GREEDY_SUFFIX, UNBOUNDED_SUFFIX, WILDCARD_SUFFIX,
};
use crate::prefix::Prefix;

impl Prefix {
    /// Build a prefix from its fields.
    ///
    /// `wildcards` must be at least one when `multi_level` is
    /// [`MultiLevelType::None`]. The base may not end in "/" (unless it is the
    /// root) or in a wildcard suffix, and may not contain infix wildcards.
    pub fn new(base: Path, wildcards: usize, multi_level: MultiLevelType) -> Result<Self, PrefixError> {
        if multi_level == MultiLevelType::None && wildcards < 1 {
            return Err(PrefixError::MissingWildcard(base.to_string()));
        }
        check_base(&base)?;
        Ok(Self {
            base,
            wildcards,
            multi_level,
        })
    }

    /// Parse the canonical string form, the inverse of `Display`.
    pub fn parse(prefix: &str) -> Result<Self, PrefixError> {
        let (mut rest, multi_level) = if let Some(rest) = prefix.strip_suffix(GREEDY_SUFFIX) {
            (rest, MultiLevelType::Greedy)
        } else if let Some(rest) = prefix.strip_suffix(UNBOUNDED_SUFFIX) {
            (rest, MultiLevelType::Unbounded)
        } else {
            (prefix, MultiLevelType::None)
        };

        let mut wildcards = 0;
        while let Some(shorter) = rest.strip_suffix(WILDCARD_SUFFIX) {
            wildcards += 1;
            rest = shorter;
        }
        if multi_level == MultiLevelType::None && wildcards < 1 {
            return Err(PrefixError::MissingWildcard(prefix.to_string()));
        }

        let base = if rest.is_empty() {
            Path::root()
        } else {
            Path::parse(rest)?
        };
        check_base(&base)?;
        Ok(Self {
            base,
            wildcards,
            multi_level,
        })
    }
}

fn check_base(base: &Path) -> Result<(), PrefixError> {
    if base.is_root() {
        return Ok(());
    }
    let s = base.as_str();
    if s.ends_with(SEPARATOR) {
        return Err(PrefixError::TrailingSlash(s.to_string()));
    }
    for suffix in [WILDCARD_SUFFIX, UNBOUNDED_SUFFIX, GREEDY_SUFFIX] {
        if s.ends_with(suffix) {
            return Err(PrefixError::WildcardSuffix {
                base: s.to_string(),
                suffix,
            });
        }
    }
    if let Some(first) = s.find(WILDCARD_SUFFIX) {
        let tail = &s[first..];
        if ["/*/", "/**/", "/***/"].iter().any(|infix| tail.contains(infix)) {
            return Err(PrefixError::InfixWildcard(s.to_string()));
        }
    }
    Ok(())
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_str())?;
        for _ in 0..self.wildcards {
            f.write_str(WILDCARD_SUFFIX)?;
        }
        f.write_str(self.multi_level.suffix())
    }
}

impl FromStr for Prefix {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Prefix {
    type Error = PrefixError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl TryFrom<&str> for Prefix {
    type Error = PrefixError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Prefix> for String {
    fn from(prefix: Prefix) -> Self {
        prefix.to_string()
    }
}
