//! Category Entity

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A taxonomy bucket that items point at by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    /// Label shown in filters and cards
    #[serde(rename = "name", alias = "displayName")]
    pub display_name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

impl Entity for Category {
    fn key(&self) -> &str {
        &self.id
    }
}
