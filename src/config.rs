//! Page Configuration
//!
//! Which page is mounted and which feed it reads. Pages may override the
//! defaults with an inline `<script id="allvale-config" type="application/json">`.

use allvale_content::{ContentConfig, ContentError};

const INLINE_CONFIG_ID: &str = "allvale-config";

/// Page the app is mounted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Blog,
    Portfolio,
    /// `post.html?slug=...`
    Post,
}

impl PageKind {
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_lowercase();
        if lower.ends_with("/post.html") || lower == "post.html" {
            PageKind::Post
        } else if lower.contains("portfolio") || lower.contains("portf%c3%b3lio") {
            PageKind::Portfolio
        } else {
            PageKind::Blog
        }
    }

    pub fn default_config(self) -> ContentConfig {
        match self {
            PageKind::Portfolio => ContentConfig::portfolio(),
            PageKind::Blog | PageKind::Post => ContentConfig::blog(),
        }
    }
}

/// Everything the app needs to know about where it runs
#[derive(Debug, Clone)]
pub struct PageSetup {
    pub kind: PageKind,
    pub config: ContentConfig,
    /// Absolute page URL, base for the bundled fallback feed
    pub page_url: String,
    /// `slug` query parameter (post page)
    pub slug: Option<String>,
}

/// Inline JSON wins over the page defaults
pub fn resolve_config(kind: PageKind, inline: Option<&str>) -> Result<ContentConfig, ContentError> {
    match inline.map(str::trim).filter(|text| !text.is_empty()) {
        Some(text) => {
            // Missing fields fall back to this page's defaults, not the blog's
            let mut merged = serde_json::to_value(kind.default_config())
                .map_err(|e| ContentError::InvalidConfig(e.to_string()))?;
            let overrides: serde_json::Value =
                serde_json::from_str(text).map_err(|e| ContentError::InvalidConfig(e.to_string()))?;
            if let (Some(base), Some(fields)) = (merged.as_object_mut(), overrides.as_object()) {
                for (key, value) in fields {
                    base.insert(key.clone(), value.clone());
                }
            }
            ContentConfig::from_json(&merged.to_string())
        }
        None => Ok(kind.default_config()),
    }
}

/// Read location and inline config from the current document
pub fn detect() -> Result<PageSetup, String> {
    let window = web_sys::window().ok_or("no window")?;
    let location = window.location();
    let page_url = location.href().map_err(|e| format!("{:?}", e))?;
    let path = location.pathname().map_err(|e| format!("{:?}", e))?;
    let search = location.search().map_err(|e| format!("{:?}", e))?;

    let kind = PageKind::from_path(&path);
    let inline = window
        .document()
        .and_then(|doc| doc.get_element_by_id(INLINE_CONFIG_ID))
        .and_then(|el| el.text_content());
    let config = resolve_config(kind, inline.as_deref()).map_err(|e| e.to_string())?;

    let slug = web_sys::UrlSearchParams::new_with_str(&search)
        .ok()
        .and_then(|params| params.get("slug"))
        .filter(|slug| !slug.is_empty());

    Ok(PageSetup {
        kind,
        config,
        page_url,
        slug,
    })
}
