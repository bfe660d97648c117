//! Observability for the Are-zōu product page.
//!
//! This crate provides:
//! - `StructuredLogger` - Request-correlated structured logging
//! - `MetricsCollector` - Shell and per-section render timings

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;

// Re-export RequestId and TimingContext from arezou-core for convenience
pub use arezou_core::{RequestId, TimingContext};
