//! Value object trait: equality by value, not identity.
//!
//! Prices and slugs are value objects: two prices of `7 000` are the same price,
//! whereas two products with the same name are still different products.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one (e.g. repricing a product replaces its `Price`, it never
/// mutates it in place).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
