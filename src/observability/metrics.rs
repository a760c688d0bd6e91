//! Metrics collection.
//!
//! # Metrics
//! - `path_space_registrations_total` (counter): registrations by outcome
//!   (`accepted`, `conflict`)
//! - `path_space_lookups_total` (counter): lookups by outcome (`hit`, `miss`)
//! - `path_space_prefixes` (gauge): prefixes currently registered
//!
//! # Design Decisions
//! - Low-overhead metric updates through the `metrics` facade
//! - Exposition is left to whichever recorder the application installs

pub const REGISTRATIONS_TOTAL: &str = "path_space_registrations_total";
pub const LOOKUPS_TOTAL: &str = "path_space_lookups_total";
pub const PREFIXES: &str = "path_space_prefixes";

/// Outcome label of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Accepted,
    Conflict,
}

impl Registration {
    pub fn as_str(self) -> &'static str {
        match self {
            Registration::Accepted => "accepted",
            Registration::Conflict => "conflict",
        }
    }
}

pub fn record_registration(outcome: Registration) {
    ::metrics::counter!(REGISTRATIONS_TOTAL, "outcome" => outcome.as_str()).increment(1);
}

pub fn record_lookup(hit: bool) {
    let outcome = if hit { "hit" } else { "miss" };
    ::metrics::counter!(LOOKUPS_TOTAL, "outcome" => outcome).increment(1);
}

pub fn record_space_size(prefixes: usize) {
    ::metrics::gauge!(PREFIXES).set(prefixes as f64);
}
