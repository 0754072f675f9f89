//! Domain Layer
//!
//! Content entities and the feed payload they arrive in.
//! This layer has NO network or runtime dependencies.

mod category;
mod entity;
mod item;
mod payload;

pub use category::Category;
pub use entity::{find_first, Entity};
pub use item::{parse_feed_date, ContentItem};
pub use payload::{Payload, RawSettings, Settings};
