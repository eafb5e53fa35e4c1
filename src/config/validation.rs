//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject route paths the trie would refuse at registration
//! - Detect duplicate instance names and duplicate routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::path::{self, INDEX_SEGMENT, NOT_FOUND_SEGMENT};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no routers configured")]
    NoRouters,

    #[error("router #{0} has an empty name")]
    EmptyRouterName(usize),

    #[error("router name {0:?} is used more than once")]
    DuplicateRouterName(String),

    #[error("router {router:?}: path {path:?} is empty or has empty inner segments")]
    InvalidRoutePath { router: String, path: String },

    #[error("router {router:?}: path {path:?} uses '$404$' as a subtree")]
    ReservedSegment { router: String, path: String },

    #[error("router {router:?}: path {path:?} is registered more than once")]
    DuplicateRoute { router: String, path: String },
}

/// Key of the trie slot a valid path's handler lands in.
///
/// A trailing empty segment names the index slot of its parent, the same
/// slot a plain segment fills once it has children: `/docs/` and `/docs`
/// collide.
fn handler_slot(mut segments: Vec<&str>) -> Vec<&str> {
    if segments.last() == Some(&INDEX_SEGMENT) {
        segments.pop();
    }
    segments
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routers.is_empty() {
        errors.push(ValidationError::NoRouters);
    }

    let mut names = HashSet::new();
    for (i, router) in config.routers.iter().enumerate() {
        if router.name.trim().is_empty() {
            errors.push(ValidationError::EmptyRouterName(i));
        } else if !names.insert(router.name.as_str()) {
            errors.push(ValidationError::DuplicateRouterName(router.name.clone()));
        }

        let mut slots = HashSet::new();
        for route in &router.routes {
            let segments = path::route_segments(&route.path);
            let inner = segments.split_last().map(|(_, inner)| inner);

            let problem = match inner {
                None => Some(ValidationError::InvalidRoutePath {
                    router: router.name.clone(),
                    path: route.path.clone(),
                }),
                Some(inner) if inner.contains(&INDEX_SEGMENT) => {
                    Some(ValidationError::InvalidRoutePath {
                        router: router.name.clone(),
                        path: route.path.clone(),
                    })
                }
                Some(inner) if inner.contains(&NOT_FOUND_SEGMENT) => {
                    Some(ValidationError::ReservedSegment {
                        router: router.name.clone(),
                        path: route.path.clone(),
                    })
                }
                Some(_) => None,
            };

            if let Some(problem) = problem {
                errors.push(problem);
            } else if !slots.insert(handler_slot(segments)) {
                errors.push(ValidationError::DuplicateRoute {
                    router: router.name.clone(),
                    path: route.path.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
