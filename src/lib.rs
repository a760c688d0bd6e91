//! Hierarchical path-space allocation library.
//!
//! A [`PathSpace`] hands out non-overlapping regions of a `/`-separated
//! path space, each described by a [`Prefix`], and resolves concrete
//! [`Path`]s to the region that owns them.

pub mod config;
pub mod observability;
pub mod path;
pub mod prefix;
pub mod space;

pub use config::SpaceConfig;
pub use path::{Path, PathError};
pub use prefix::{MultiLevelType, Prefix, PrefixError};
pub use space::{ConflictError, PathMatch, PathSpace, SpaceError};
