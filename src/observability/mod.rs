//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! PathSpace produces:
//!     → tracing events (register, conflict, lookup)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → logging.rs installs a stdout subscriber for binaries and tests
//!     → any `metrics` recorder installed by the embedding application
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or recorder on its own
//! - Metric updates go through the `metrics` facade and are no-ops until a
//!   recorder exists

pub mod logging;
pub mod metrics;
