//! Bundled JSON Source
//!
//! A payload compiled into the binary or provided inline by the page.

use async_trait::async_trait;

use super::{ContentSource, Fetched};
use crate::domain::Payload;
use crate::error::Result;

/// Serves a fixed JSON document; parsing happens on every fetch
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    body: String,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

#[async_trait(?Send)]
impl ContentSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Fetched> {
        let payload = Payload::parse(&self.name, &self.body)?;
        Ok(Fetched {
            payload,
            change_token: None,
        })
    }
}
