//! Domain Layer - Core Entity Trait
//!
//! Every record in a feed is addressed by a string key.

/// Core trait for feed entities
pub trait Entity: Clone {
    /// The entity's identifier as it appears in the feed
    fn key(&self) -> &str;
}

/// First entity with the given key.
///
/// Feeds are not deduplicated, so the earliest occurrence wins.
pub fn find_first<'a, T: Entity>(entities: &'a [T], key: &str) -> Option<&'a T> {
    entities.iter().find(|entity| entity.key() == key)
}
