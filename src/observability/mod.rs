//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters, gauges, histograms via the `metrics` facade)
//!
//! Consumers:
//!     → stderr (pretty or JSON lines)
//!     → whichever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Each navigation fan-out runs in a span carrying a navigation ID
//! - Metrics are no-ops until a recorder is installed
//! - Log level configurable via config and environment

pub mod logging;
pub mod metrics;
