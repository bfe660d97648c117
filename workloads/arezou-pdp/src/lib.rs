//! Are-zōu Radiance & Glow Face Oil product page.
//!
//! Streams a server-rendered product page whose interactive state (size,
//! quantity, accordion, wishlist, zoom, review browsing and the insights
//! panel) lives in the URL query string. Every control is a link to the
//! state it leads to, so the page works without client script.

mod data;
mod page;
mod sections;
mod styles;

#[cfg(target_arch = "wasm32")]
mod handler;

pub use data::*;
pub use page::*;
pub use sections::*;
pub use styles::PDP_STYLES;
