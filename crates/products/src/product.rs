use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use marketplace_core::{
    CategoryId, DomainError, DomainResult, Entity, ProductId, SellerId, SubcategoryId,
};

use crate::price::{Price, price_pair};
use crate::pricing::{PricingFacts, derive_pricing_facts};

/// A product record as stored and fetched from the hosted store.
///
/// Shared read-only with every shopper; mutations (`reprice`, `adjust_stock`)
/// belong to the owning seller. Field aliases accept the store's column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(alias = "nom")]
    pub name: String,
    pub description: String,
    #[serde(alias = "prix_initial")]
    pub initial_price: Price,
    #[serde(alias = "prix_solde")]
    pub sale_price: Price,
    #[serde(alias = "quantite_stock")]
    pub stock_quantity: i64,
    #[serde(default)]
    pub images: Vec<String>,
    pub category_id: CategoryId,
    pub subcategory_id: SubcategoryId,
    #[serde(alias = "id_vendeur")]
    pub seller_id: SellerId,
    pub created_at: DateTime<Utc>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Product {
    pub fn pricing_facts(&self) -> PricingFacts {
        derive_pricing_facts(self)
    }

    pub fn is_on_sale(&self) -> bool {
        self.sale_price < self.initial_price
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock_quantity <= 0
    }

    /// A product needs at least one image to be published.
    pub fn is_published(&self) -> bool {
        !self.images.is_empty()
    }

    /// Out-of-stock products stay listable but cannot be bought.
    pub fn is_purchasable(&self) -> bool {
        self.is_published() && !self.is_out_of_stock()
    }

    /// The image a product card shows.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Advisory ownership check; the store's access control is authoritative.
    pub fn ensure_owned_by(&self, seller_id: SellerId) -> DomainResult<()> {
        if self.seller_id != seller_id {
            return Err(DomainError::Unauthorized);
        }
        Ok(())
    }

    /// Replace both prices. Without a sale price the product goes back to full price.
    pub fn reprice(&mut self, initial: i64, sale: Option<i64>) -> DomainResult<()> {
        let (initial, sale) = price_pair(initial, sale)?;
        self.initial_price = initial;
        self.sale_price = sale;
        Ok(())
    }

    /// Apply a stock movement (restock or sale).
    pub fn adjust_stock(&mut self, delta: i64) -> DomainResult<()> {
        if delta == 0 {
            return Err(DomainError::invalid_stock("delta cannot be zero"));
        }
        let new_stock = self
            .stock_quantity
            .checked_add(delta)
            .ok_or_else(|| DomainError::invalid_stock("stock quantity overflow"))?;
        if new_stock < 0 {
            return Err(DomainError::invalid_stock(format!(
                "stock cannot go negative (have {}, delta {delta})",
                self.stock_quantity
            )));
        }
        self.stock_quantity = new_stock;
        Ok(())
    }
}
