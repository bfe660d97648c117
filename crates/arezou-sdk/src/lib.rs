//! Public SDK for the Are-zōu product page.
//!
//! This crate re-exports everything a page handler needs:
//!
//! ```ignore
//! use arezou_sdk::prelude::*;
//!
//! async fn handle<S, E>(ctx: RequestContext, sink: &mut StreamingSink<S, E>) -> Result<(), PageError> {
//!     let logger = StructuredLogger::new(ctx.request_id.clone());
//!     let decoded = PageState::from_query(&ctx.query);
//!
//!     sink.send_shell(&shell.render_opening()).await?;
//!     sink.send_section("details", &render_details(&decoded.state)).await?;
//!     sink.finish(&shell.render_closing()).await
//! }
//! ```

pub use arezou_core;
pub use arezou_observability;
pub use arezou_state;
pub use arezou_streaming;

/// Prelude for convenient imports.
pub mod prelude {
    pub use arezou_core::*;
    pub use arezou_observability::*;
    pub use arezou_state::*;
    pub use arezou_streaming::*;
}
