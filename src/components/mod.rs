//! UI Components
//!
//! Reusable Leptos components.

mod category_filter;
mod featured_post;
mod message_banner;
mod pagination;
mod post_card;
mod recent_posts;
mod search_box;
mod tag_cloud;

pub use category_filter::CategoryFilter;
pub use featured_post::FeaturedPost;
pub use message_banner::MessageBanner;
pub use pagination::Pagination;
pub use post_card::PostCardView;
pub use recent_posts::RecentPosts;
pub use search_box::SearchBox;
pub use tag_cloud::TagCloud;
