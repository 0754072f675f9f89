//! Pages
//!
//! One top-level component per HTML page the app mounts on.

mod blog;
mod portfolio;
mod post;

pub use blog::BlogPage;
pub use portfolio::PortfolioPage;
pub use post::PostPage;
