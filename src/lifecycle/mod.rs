//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Registry (startup fragment rule) → instances in config order
//!         → each instance routed to the current fragment on registration
//!
//! Shutdown (shutdown.rs):
//!     trigger → navigation loop leaves → final views stay in their containers
//!
//! Signals (signals.rs):
//!     Ctrl-C → trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Instances register sequentially, never concurrently
//! - There is no unregister; instances live until shutdown

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
