//! Static catalog data for the product page.

mod chrome;
mod ingredient;
mod insight;
mod product;
mod recommendation;
mod review;
mod ritual;

pub use chrome::*;
pub use ingredient::*;
pub use insight::*;
pub use product::*;
pub use recommendation::*;
pub use review::*;
pub use ritual::*;
