//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML.
//!
//! ```toml
//! [observability]
//! log_level = "debug"
//!
//! [navigation]
//! initial_fragment = "#/docs/intro"
//!
//! [[routers]]
//! name = "main"
//!
//! [[routers.routes]]
//! path = "/"
//! view = "Welcome to {metadata}"
//! metadata = ["Home"]
//!
//! [[routers.routes]]
//! path = "/docs/$404$"
//! view = "No such page: {path}"
//! ```

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Navigation source settings.
    pub navigation: NavigationConfig,

    /// Router instances, in registration order.
    pub routers: Vec<InstanceConfig>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or filter directive (e.g. "info", "fragment_router=debug").
    pub log_level: String,

    /// Output format for log lines.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Navigation configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NavigationConfig {
    /// Fragment present when the session starts. Empty becomes `#/`.
    pub initial_fragment: String,
}

/// One router instance and its route table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstanceConfig {
    /// Instance identifier for logging/metrics.
    pub name: String,

    /// Routes, registered in file order.
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// A single route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path to register, e.g. "/docs/intro", "/" or "/docs/$404$".
    pub path: String,

    /// View template; `{path}` and `{metadata}` are substituted.
    pub view: String,

    /// Metadata passed to the render function.
    #[serde(default)]
    pub metadata: Vec<String>,
}
