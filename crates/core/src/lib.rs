//! `marketplace-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the taxonomy,
//! product, catalog and inventory crates (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{Entity, index_by_id, without_id};
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId, SellerId, SubcategoryId};
pub use value_object::ValueObject;
