//! Taxonomy module: the two-level Category → Subcategory hierarchy.
//!
//! Categories and subcategories arrive as fetched snapshots from the hosted
//! store. [`Taxonomy`] indexes a snapshot once so lookups, containment checks
//! and slug resolution never rescan the raw rows.

pub mod category;
pub mod slug;
pub mod taxonomy;

pub use category::{Category, CategoryDraft, NewCategory, NewSubcategory, Subcategory, SubcategoryDraft};
pub use slug::{Slug, slugify};
pub use taxonomy::{CategoryNode, Taxonomy};
