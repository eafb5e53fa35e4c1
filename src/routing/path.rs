//! Path and fragment handling.
//!
//! All functions are pure. A path is split on `/` and the token in front of
//! the leading slash is discarded, so `"/"` yields a single empty segment
//! (the root index route) and a routed path without a leading slash yields
//! nothing.

use std::borrow::Cow;

/// Segment naming the index slot of a node.
pub const INDEX_SEGMENT: &str = "";

/// Segment naming the not-found slot of a node.
pub const NOT_FOUND_SEGMENT: &str = "$404$";

/// Split a path into its segments.
///
/// ```
/// use fragment_router::routing::segments;
///
/// assert_eq!(segments("/docs/intro"), vec!["docs", "intro"]);
/// assert_eq!(segments("/"), vec![""]);
/// assert_eq!(segments("/docs/"), vec!["docs", ""]);
/// assert!(segments("docs").is_empty());
/// ```
pub fn segments(path: &str) -> Vec<&str> {
    let mut tokens = path.split('/');
    // Whatever precedes the first '/' is not part of the route.
    tokens.next();
    tokens.collect()
}

/// Split a registration path into its segments.
///
/// Route table keys are always rooted, so the leading slash is optional:
/// `"$404$"` and `"/$404$"` both name the root's not-found slot. An empty
/// path yields nothing.
///
/// ```
/// use fragment_router::routing::path::route_segments;
///
/// assert_eq!(route_segments("$404$"), vec!["$404$"]);
/// assert_eq!(route_segments("/docs/$404$"), vec!["docs", "$404$"]);
/// assert!(route_segments("").is_empty());
/// ```
pub fn route_segments(path: &str) -> Vec<&str> {
    if path.is_empty() {
        Vec::new()
    } else if path.starts_with('/') {
        segments(path)
    } else {
        path.split('/').collect()
    }
}

/// Turn a location fragment into a routable path.
///
/// Strips the leading `#`. An empty fragment maps to the root path `/`.
///
/// ```
/// use fragment_router::routing::fragment_to_path;
///
/// assert_eq!(fragment_to_path("#/docs"), "/docs");
/// assert_eq!(fragment_to_path("/docs"), "/docs");
/// assert_eq!(fragment_to_path("#"), "/");
/// assert_eq!(fragment_to_path(""), "/");
/// ```
pub fn fragment_to_path(fragment: &str) -> Cow<'_, str> {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);
    if path.is_empty() {
        Cow::Owned("/".to_string())
    } else {
        Cow::Borrowed(path)
    }
}
