use serde::Serialize;

use marketplace_core::{ProductId, SellerId, without_id};
use marketplace_products::{PricingFacts, Product};
use marketplace_taxonomy::Taxonomy;

/// One dashboard row: the product plus the names and facts it is shown with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRow {
    #[serde(flatten)]
    pub product: Product,
    pub category_name: Option<String>,
    pub subcategory_name: Option<String>,
    pub pricing: PricingFacts,
}

/// Attaches category/subcategory display names to each product.
///
/// A reference that does not resolve in the snapshot yields `None` for that
/// row only; the batch never fails.
pub fn join_taxonomy_names(products: &[Product], taxonomy: &Taxonomy) -> Vec<InventoryRow> {
    products
        .iter()
        .map(|product| {
            let category_name = taxonomy.category(product.category_id).map(|c| c.name.clone());
            let subcategory_name = taxonomy
                .subcategory(product.subcategory_id)
                .map(|s| s.name.clone());
            if category_name.is_none() || subcategory_name.is_none() {
                tracing::warn!(
                    product_id = %product.id,
                    category_id = %product.category_id,
                    subcategory_id = %product.subcategory_id,
                    "product taxonomy reference does not resolve"
                );
            }
            InventoryRow {
                product: product.clone(),
                category_name,
                subcategory_name,
                pricing: product.pricing_facts(),
            }
        })
        .collect()
}

/// The products owned by `seller_id`, in snapshot order.
pub fn owned_by(products: &[Product], seller_id: SellerId) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.seller_id == seller_id)
        .cloned()
        .collect()
}

/// In-memory view update after a delete. Removing an absent id is a no-op.
pub fn remove_product(products: &[Product], product_id: ProductId) -> Vec<Product> {
    without_id(products, &product_id)
}
