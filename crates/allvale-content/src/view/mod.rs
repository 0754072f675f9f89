//! View Layer
//!
//! Derives what a list page shows from the store: filter, sort, paginate.

mod filter;
mod list_view;

pub use filter::{search_preview, sort_by_date_desc, Filter, SEARCH_PREVIEW_LIMIT, SEARCH_PREVIEW_MIN_CHARS};
pub use list_view::{ListView, PageView, PaginationMode, RenderIntent};
