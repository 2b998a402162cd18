use serde::{Deserialize, Serialize};

use marketplace_products::Product;

/// Dashboard counters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_products: usize,
    /// Sum of `stock_quantity` over the snapshot.
    pub total_stock: i64,
    pub on_sale_count: usize,
}

pub fn summarize(products: &[Product]) -> InventorySummary {
    products
        .iter()
        .fold(InventorySummary::default(), |mut acc, product| {
            acc.total_products += 1;
            acc.total_stock = acc.total_stock.saturating_add(product.stock_quantity);
            if product.is_on_sale() {
                acc.on_sale_count += 1;
            }
            acc
        })
}
