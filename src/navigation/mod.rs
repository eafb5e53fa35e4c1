//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Registration:
//!     register_instance(instance)
//!     → append to registry
//!     → instance.route_to(current path)
//!
//! Fragment change:
//!     source.rs (FragmentChannel::set_fragment → broadcast "#/new")
//!     → registry.rs run loop
//!     → navigate_all: A.route_to → await → B.route_to → await → ...
//! ```
//!
//! # Design Decisions
//! - The registry is an explicit object; nothing is installed at load time
//! - Fan-out is sequential in registration order
//! - An empty fragment at startup is rewritten to `#/`

pub mod registry;
pub mod source;

pub use registry::Registry;
pub use source::{FragmentChannel, NavigationSource};
