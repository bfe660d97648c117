//! Core abstractions for the Are-zōu product page.
//!
//! This crate provides the fundamental types:
//! - `RequestContext` - Typed request path and query parameters
//! - `PageManifest` / `RenderConfig` - Page routing and render configuration
//! - `TimingContext` / `LifecyclePhase` - Request lifecycle tracking
//! - `PageError` - Errors raised while streaming a page

mod config;
mod context;
mod error;
mod lifecycle;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
