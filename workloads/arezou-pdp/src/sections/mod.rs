//! Section renderers for the product page.

mod cards;
mod chrome;
mod details;
mod gallery;
mod html;
mod ingredients;
mod insights;
mod recommendations;
mod reviews;
mod ritual;
mod trust_journey;

pub use cards::*;
pub use chrome::*;
pub use details::*;
pub use gallery::*;
pub use html::*;
pub use ingredients::*;
pub use insights::*;
pub use recommendations::*;
pub use reviews::*;
pub use ritual::*;
pub use trust_journey::*;
