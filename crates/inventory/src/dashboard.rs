use serde::Serialize;

use marketplace_core::{ProductId, SellerId};
use marketplace_products::Product;
use marketplace_taxonomy::{Category, Taxonomy};

use crate::listing::{InventoryRow, join_taxonomy_names, owned_by};
use crate::summary::{InventorySummary, summarize};

/// Everything the seller management view renders for one seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerDashboard {
    pub seller_id: SellerId,
    pub summary: InventorySummary,
    pub rows: Vec<InventoryRow>,
    /// The seller's own categories, alphabetical (add-product form choices).
    pub categories: Vec<Category>,
}

impl SellerDashboard {
    /// Builds the view from snapshots. `products` may contain other sellers'
    /// products; only `seller_id`'s are kept.
    pub fn build(seller_id: SellerId, products: &[Product], taxonomy: &Taxonomy) -> Self {
        let mine = owned_by(products, seller_id);
        Self {
            seller_id,
            summary: summarize(&mine),
            rows: join_taxonomy_names(&mine, taxonomy),
            categories: taxonomy
                .list_categories(Some(seller_id))
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.rows.iter().map(|row| &row.product)
    }

    /// Reflects a confirmed delete. Unknown ids leave the view unchanged.
    pub fn without_product(mut self, product_id: ProductId) -> Self {
        self.rows.retain(|row| row.product.id != product_id);
        let products: Vec<Product> = self.products().cloned().collect();
        self.summary = summarize(&products);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::tests::{product, taxonomy};

    #[test]
    fn build_scopes_rows_and_summary_to_the_seller() {
        let seller = SellerId::new();
        let mut products = vec![
            product("Sac A", 10_000, 7_000, 3, 1, 10),
            product("Autre vendeur", 1_000, 500, 50, 1, 10),
            product("Sac B", 5_000, 5_000, 0, 1, 10),
        ];
        products[0].seller_id = seller;
        products[2].seller_id = seller;

        let dashboard = SellerDashboard::build(seller, &products, &taxonomy());
        assert_eq!(dashboard.rows.len(), 2);
        assert_eq!(
            dashboard.summary,
            InventorySummary {
                total_products: 2,
                total_stock: 3,
                on_sale_count: 1,
            }
        );
        // The fixture category belongs to someone else.
        assert!(dashboard.categories.is_empty());
    }

    #[test]
    fn without_product_updates_rows_and_counters() {
        let seller = SellerId::new();
        let mut products = vec![
            product("Sac A", 10_000, 7_000, 3, 1, 10),
            product("Sac B", 5_000, 5_000, 2, 1, 10),
        ];
        for p in &mut products {
            p.seller_id = seller;
        }
        let removed = products[0].id;

        let dashboard = SellerDashboard::build(seller, &products, &taxonomy())
            .without_product(removed);
        assert_eq!(dashboard.rows.len(), 1);
        assert_eq!(dashboard.summary.total_stock, 2);
        assert_eq!(dashboard.summary.on_sale_count, 0);

        let again = dashboard.clone().without_product(removed);
        assert_eq!(again, dashboard);
    }
}
