//! AllVale Content Engine
//!
//! Layered architecture:
//! - domain: Content items, categories, settings and the feed payload
//! - source: Where payloads come from (remote admin endpoint, bundled JSON)
//! - store: The canonical item list, loaded with remote-then-local fallback
//! - view: Filtering, sorting and pagination over the store
//! - poller: Periodic re-synchronization against the remote endpoint
//!
//! Everything runs on a single thread. Shared state lives behind
//! `Rc<RefCell<_>>` and no borrow is held across an await point.

pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod poller;
pub mod runtime;
pub mod source;
pub mod store;
pub mod taxonomy;
pub mod view;

pub use config::ContentConfig;
pub use domain::{Category, ContentItem, Entity, Payload, Settings};
pub use error::{ContentError, Result};
pub use poller::{PollOutcome, SyncPoller};
pub use source::{ContentSource, Fetched, HttpSource, Origin, StaticSource};
pub use store::{CommitOutcome, ContentStore, Generation, LoadReport};
pub use taxonomy::{TagCount, TagSize};
pub use view::{Filter, ListView, PageView, PaginationMode, RenderIntent};
