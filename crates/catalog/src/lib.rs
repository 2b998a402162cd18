//! Catalog query engine.
//!
//! Shopper-facing filtering, searching and sorting over an already-fetched
//! product snapshot. Everything here is pure and synchronous: fetching (and
//! cancelling fetches) is the caller's job.

pub mod browse;
pub mod config;
pub mod query;

pub use browse::{CategoryListing, browse_by_slug, categories_in_use, featured, latest};
pub use config::CatalogConfig;
pub use query::{CatalogQuery, CategoryFilter, SortBy, filter_and_sort};
