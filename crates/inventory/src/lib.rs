//! Seller inventory module.
//!
//! Per-seller aggregation for the management dashboard: summary counters,
//! product rows joined with taxonomy names, in-memory removal and the
//! taxonomy removal policy. The acting seller is always an explicit argument.

pub mod dashboard;
pub mod listing;
pub mod removal;
pub mod summary;

pub use dashboard::SellerDashboard;
pub use listing::{InventoryRow, join_taxonomy_names, owned_by, remove_product};
pub use removal::{ensure_category_removable, ensure_subcategory_removable};
pub use summary::{InventorySummary, summarize};
