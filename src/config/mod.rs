//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → dispatch::template builds handlers per configured instance
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; route tables are rebuilt every run
//! - All sections have defaults to allow minimal files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{InstanceConfig, LogFormat, NavigationConfig, ObservabilityConfig, RouteConfig, RouterConfig};
pub use validation::{validate_config, ValidationError};
