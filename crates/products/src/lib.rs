//! Products domain module.
//!
//! Business rules for a single product: creation-time validation, price and
//! stock-status derivation, image list handling and seller-owned edits. Pure
//! domain logic (no IO, no HTTP, no storage).

pub mod draft;
pub mod images;
pub mod price;
pub mod pricing;
pub mod product;

pub use draft::{NewProduct, ProductDraft, ProductForm, validate_for_creation};
pub use images::{assign_images, image_object_path, remove_image_at};
pub use price::Price;
pub use pricing::{PricingFacts, derive_pricing_facts, discount_percent};
pub use product::Product;

pub use marketplace_core::ProductId;
