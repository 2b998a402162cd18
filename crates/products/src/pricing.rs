//! Derived price and stock-status facts.
//!
//! These are recomputed from the record every time they are needed and never
//! stored: a concurrent stock update would otherwise leave them stale.

use serde::{Deserialize, Serialize};

use crate::price::Price;
use crate::product::Product;

/// What a product card or dashboard row shows next to the raw price fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingFacts {
    pub is_on_sale: bool,
    /// Present only when on sale.
    pub discount_percent: Option<u32>,
    pub is_out_of_stock: bool,
}

impl PricingFacts {
    /// The "-30%" badge is hidden when the product is out of stock.
    pub fn shows_discount_badge(&self) -> bool {
        self.is_on_sale && !self.is_out_of_stock
    }
}

pub fn derive_pricing_facts(product: &Product) -> PricingFacts {
    let discount = discount_percent(product.initial_price, product.sale_price);
    PricingFacts {
        is_on_sale: product.sale_price < product.initial_price,
        discount_percent: discount,
        is_out_of_stock: product.stock_quantity <= 0,
    }
}

/// `round((initial - sale) / initial * 100)`, halves rounding up.
///
/// `None` when not on sale. A zero initial price (only possible in a stale or
/// hand-edited row) can never be "on sale" since prices are unsigned.
pub fn discount_percent(initial: Price, sale: Price) -> Option<u32> {
    let (initial, sale) = (u128::from(initial.units()), u128::from(sale.units()));
    if initial == 0 || sale >= initial {
        return None;
    }
    let pct = ((initial - sale) * 200 + initial) / (2 * initial);
    u32::try_from(pct).ok()
}
