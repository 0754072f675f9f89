//! Source Layer
//!
//! Defines where feed payloads come from. The store never talks to the
//! network directly; it is handed a primary and a fallback source.

mod http;
mod static_source;

use async_trait::async_trait;

use crate::domain::Payload;
use crate::error::Result;

pub use http::HttpSource;
pub use static_source::StaticSource;

/// Which of the two sources produced a committed payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Primary,
    Fallback,
}

/// A successfully fetched and parsed payload
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub payload: Payload,
    /// Opaque marker used by the poller to detect remote changes
    pub change_token: Option<String>,
}

/// A place a feed payload can be fetched from.
///
/// Futures are `?Send` because the browser executor is single-threaded.
/// Implementations make exactly one attempt per call.
#[async_trait(?Send)]
pub trait ContentSource {
    /// Label used in logs and error messages
    fn name(&self) -> &str;

    /// Fetch and parse the payload
    async fn fetch(&self) -> Result<Fetched>;
}
