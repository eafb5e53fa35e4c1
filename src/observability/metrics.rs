//! Router metrics.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): resolutions by router, kind
//! - `router_renders_total` (counter): route_to results by router, outcome
//! - `router_render_failures_total` (counter): failed handlers by router
//! - `router_render_duration_seconds` (histogram): handler + swap latency
//! - `router_registered_instances` (gauge): instances in the registry

use std::time::Instant;

use crate::dispatch::RouteOutcome;
use crate::routing::ResolutionKind;

pub fn record_resolution(router: &str, kind: ResolutionKind) {
    ::metrics::counter!(
        "router_resolutions_total",
        "router" => router.to_string(),
        "kind" => kind.as_str()
    )
    .increment(1);
}

pub fn record_outcome(router: &str, outcome: RouteOutcome) {
    ::metrics::counter!(
        "router_renders_total",
        "router" => router.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

pub fn record_render_failure(router: &str) {
    ::metrics::counter!("router_render_failures_total", "router" => router.to_string())
        .increment(1);
}

pub fn record_render_duration(router: &str, start_time: Instant) {
    ::metrics::histogram!("router_render_duration_seconds", "router" => router.to_string())
        .record(start_time.elapsed().as_secs_f64());
}

pub fn record_registered_instances(count: usize) {
    ::metrics::gauge!("router_registered_instances").set(count as f64);
}
