//! Creation-time validation: from seller input to a normalized product draft.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use marketplace_core::{
    CategoryId, DomainError, DomainResult, ProductId, SellerId, SubcategoryId,
};
use marketplace_taxonomy::Taxonomy;

use crate::price::{Price, price_pair};
use crate::product::Product;

/// Typed creation input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub initial_price: i64,
    /// Defaults to `initial_price` when absent.
    pub sale_price: Option<i64>,
    pub stock_quantity: i64,
    /// Public URLs already returned by the blob store.
    pub images: Vec<String>,
    pub category_id: Option<CategoryId>,
    pub subcategory_id: Option<SubcategoryId>,
    pub seller_id: SellerId,
}

/// Raw text fields exactly as the "add product" form submits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub initial_price: String,
    /// Blank means "no promotion".
    pub sale_price: String,
    pub stock_quantity: String,
    pub category_id: String,
    pub subcategory_id: String,
    pub images: Vec<String>,
}

impl ProductForm {
    /// Converts text fields to numbers. Non-numeric prices fail with
    /// `InvalidPrice`, non-integer stock with `InvalidStock`; blank selects
    /// become absent references.
    pub fn parse(self, seller_id: SellerId) -> DomainResult<NewProduct> {
        let initial_price = parse_amount("initial_price", &self.initial_price)?
            .ok_or(DomainError::MissingField("initial_price"))?;
        let sale_price = parse_amount("sale_price", &self.sale_price)?;

        let stock = self.stock_quantity.trim();
        if stock.is_empty() {
            return Err(DomainError::MissingField("stock_quantity"));
        }
        let stock_quantity = stock.parse::<i64>().map_err(|_| {
            DomainError::invalid_stock(format!("stock must be a whole number (got {stock:?})"))
        })?;

        Ok(NewProduct {
            name: self.name,
            description: self.description,
            initial_price,
            sale_price,
            stock_quantity,
            images: self.images,
            category_id: parse_reference(&self.category_id)?,
            subcategory_id: parse_reference(&self.subcategory_id)?,
            seller_id,
        })
    }
}

fn parse_amount(field: &'static str, raw: &str) -> DomainResult<Option<i64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>().map(Some).map_err(|_| {
        DomainError::invalid_price(format!("{field} must be a whole amount (got {raw:?})"))
    })
}

fn parse_reference<T>(raw: &str) -> DomainResult<Option<T>>
where
    T: core::str::FromStr<Err = DomainError>,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|e| DomainError::dangling(e.to_string()))
}

/// A validated product, ready to be inserted. The store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub initial_price: Price,
    pub sale_price: Price,
    pub stock_quantity: i64,
    pub images: Vec<String>,
    pub category_id: CategoryId,
    pub subcategory_id: SubcategoryId,
    pub seller_id: SellerId,
}

impl ProductDraft {
    pub fn into_product(self, id: ProductId, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            initial_price: self.initial_price,
            sale_price: self.sale_price,
            stock_quantity: self.stock_quantity,
            images: self.images,
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
            seller_id: self.seller_id,
            created_at,
        }
    }
}

/// Validates creation input against the current taxonomy snapshot.
///
/// Checks run in order (name, description, prices, stock, images, category
/// and subcategory presence, placement) and the first failure is returned.
pub fn validate_for_creation(input: NewProduct, taxonomy: &Taxonomy) -> DomainResult<ProductDraft> {
    let seller_id = input.seller_id;
    check(input, taxonomy).inspect_err(|err| {
        tracing::debug!(seller_id = %seller_id, error = %err, "product creation rejected");
    })
}

fn check(input: NewProduct, taxonomy: &Taxonomy) -> DomainResult<ProductDraft> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(DomainError::MissingField("name"));
    }
    let description = input.description.trim();
    if description.is_empty() {
        return Err(DomainError::MissingField("description"));
    }

    let (initial_price, sale_price) = price_pair(input.initial_price, input.sale_price)?;

    if input.stock_quantity < 0 {
        return Err(DomainError::invalid_stock(format!(
            "stock cannot be negative (got {})",
            input.stock_quantity
        )));
    }

    let images: Vec<String> = input
        .images
        .into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect();
    if images.is_empty() {
        return Err(DomainError::NoImages);
    }

    let category_id = input
        .category_id
        .ok_or(DomainError::MissingField("category_id"))?;
    let subcategory_id = input
        .subcategory_id
        .ok_or(DomainError::MissingField("subcategory_id"))?;
    taxonomy.check_placement(category_id, subcategory_id)?;

    Ok(ProductDraft {
        name: name.to_string(),
        description: description.to_string(),
        initial_price,
        sale_price,
        stock_quantity: input.stock_quantity,
        images,
        category_id,
        subcategory_id,
        seller_id: input.seller_id,
    })
}
