//! Taxonomy removal policy: a category or subcategory still referenced by a
//! product cannot be removed. Sellers must move or delete those products first.

use marketplace_core::{CategoryId, DomainError, DomainResult, SubcategoryId};
use marketplace_products::Product;

pub fn ensure_category_removable(category_id: CategoryId, products: &[Product]) -> DomainResult<()> {
    let in_use = products.iter().filter(|p| p.category_id == category_id).count();
    if in_use > 0 {
        return Err(DomainError::conflict(format!(
            "category {category_id} is still used by {in_use} product(s)"
        )));
    }
    Ok(())
}

pub fn ensure_subcategory_removable(
    subcategory_id: SubcategoryId,
    products: &[Product],
) -> DomainResult<()> {
    let in_use = products
        .iter()
        .filter(|p| p.subcategory_id == subcategory_id)
        .count();
    if in_use > 0 {
        return Err(DomainError::conflict(format!(
            "subcategory {subcategory_id} is still used by {in_use} product(s)"
        )));
    }
    Ok(())
}
