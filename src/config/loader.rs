//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    tracing::debug!(
        path = %path.display(),
        routers = config.routers.len(),
        "Configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;

    const SAMPLE: &str = r##"
[observability]
log_level = "debug"
log_format = "json"

[navigation]
initial_fragment = "#/docs/x"

[[routers]]
name = "main"

[[routers.routes]]
path = "/"
view = "{metadata}"
metadata = ["Home"]

[[routers.routes]]
path = "/docs/$404$"
view = "No doc {path}"

[[routers]]
name = "sidebar"

[[routers.routes]]
path = "/$404$"
view = "nav"
"##;

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE).unwrap();

        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.navigation.initial_fragment, "#/docs/x");
        assert_eq!(config.routers.len(), 2);
        assert_eq!(config.routers[0].routes[0].metadata, vec!["Home"]);
        assert!(config.routers[0].routes[1].metadata.is_empty());
    }

    #[test]
    fn test_defaults_for_missing_sections() {
        let config = parse_config("[[routers]]\nname = \"main\"\n").unwrap();

        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
        assert!(config.navigation.initial_fragment.is_empty());
        assert!(config.routers[0].routes.is_empty());
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = parse_config("[[routers]\nname=").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_semantic_error_is_validation_error() {
        let err = parse_config("").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert!(err.to_string().starts_with("Validation failed: "));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
