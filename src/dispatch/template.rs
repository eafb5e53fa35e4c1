//! Text-template handlers built from configuration.
//!
//! A configured view is a string with two placeholders:
//! - `{path}`: the full path being routed
//! - `{metadata}`: the route's metadata, joined with `", "`

use crate::config::{InstanceConfig, RouteConfig};
use crate::routing::{BoxError, Handler};

/// Fill the placeholders of `view`.
pub fn render_template(view: &str, path: &str, metadata: &[String]) -> String {
    view.replace("{path}", path)
        .replace("{metadata}", &metadata.join(", "))
}

/// Handler rendering the route's view template.
///
/// Routes with metadata become `Handler::WithMetadata` so the metadata
/// reaches the render function the same way a hand-written one would.
pub fn template_handler(route: &RouteConfig) -> Handler<String> {
    let view = route.view.clone();
    if route.metadata.is_empty() {
        Handler::simple(move |path: String| {
            let rendered = render_template(&view, &path, &[]);
            async move { Ok::<_, BoxError>(rendered) }
        })
    } else {
        Handler::with_metadata(
            move |path: String, metadata: Vec<String>| {
                let rendered = render_template(&view, &path, &metadata);
                async move { Ok::<_, BoxError>(rendered) }
            },
            route.metadata.iter().cloned(),
        )
    }
}

/// All `(path, handler)` pairs of a configured router instance.
pub fn template_routes(instance: &InstanceConfig) -> Vec<(String, Handler<String>)> {
    instance
        .routes
        .iter()
        .map(|route| (route.path.clone(), template_handler(route)))
        .collect()
}
