//! UI state for the Are-zōu product page.
//!
//! Every interactive control on the page maps to a [`PageAction`]; applying
//! it to a [`PageState`] is a single synchronous transition. The whole state
//! round-trips through the URL query string, so a rendered link carries the
//! state that clicking it leads to.
//!
//! - `options` - size, quantity, wishlist and the detail accordion
//! - `gallery` - image zoom
//! - `reviews` - review browser (view mode, show-all, filter) and trust journey
//! - `insights` - insights panel visibility and card expansion
//! - `page` - the page-wide state and reducer
//! - `query` - query-string encoding and lenient decoding

mod choice;
mod disclosure;
mod error;
mod gallery;
mod insights;
mod options;
mod page;
mod query;
mod reviews;

pub use choice::*;
pub use disclosure::*;
pub use error::*;
pub use gallery::*;
pub use insights::*;
pub use options::*;
pub use page::*;
pub use query::*;
pub use reviews::*;
