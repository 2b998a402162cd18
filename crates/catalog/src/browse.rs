//! Storefront views built on top of [`filter_and_sort`]: category pages, the
//! "latest arrivals" rail and the category list of the shop sidebar.

use serde::Serialize;

use marketplace_core::CategoryId;
use marketplace_products::Product;
use marketplace_taxonomy::{Category, Subcategory, Taxonomy};

use crate::query::{CatalogQuery, SortBy, filter_and_sort};

/// Products of a category page (`/categorie/<slug>[/<sub-slug>]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListing<'a> {
    pub category: &'a Category,
    pub subcategory: Option<&'a Subcategory>,
    pub products: Vec<Product>,
}

/// Resolves the page's slugs and lists matching products, newest first.
///
/// Returns `None` when a slug does not resolve. A resolved page with no
/// products is an empty listing, not an error.
pub fn browse_by_slug<'a>(
    taxonomy: &'a Taxonomy,
    products: &[Product],
    category_slug: &str,
    subcategory_slug: Option<&str>,
) -> Option<CategoryListing<'a>> {
    let category = taxonomy.resolve_by_slug(category_slug)?;
    let subcategory = match subcategory_slug {
        Some(slug) => Some(taxonomy.resolve_subcategory_by_slug(category.id, slug)?),
        None => None,
    };

    let mut query = CatalogQuery::new()
        .in_category(category.id)
        .sorted_by(SortBy::Newest);
    if let Some(sub) = subcategory {
        query = query.in_subcategory(sub.id);
    }

    Some(CategoryListing {
        category,
        subcategory,
        products: filter_and_sort(products, &query),
    })
}

/// The first `limit` products of a newest-first snapshot.
pub fn latest(products: &[Product], limit: usize) -> Vec<Product> {
    products.iter().take(limit).cloned().collect()
}

/// The first `limit` published products (hero carousel needs an image).
pub fn featured(products: &[Product], limit: usize) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.is_published())
        .take(limit)
        .cloned()
        .collect()
}

/// Distinct category references, in order of first appearance.
pub fn categories_in_use(products: &[Product]) -> Vec<CategoryId> {
    let mut seen = Vec::new();
    for product in products {
        if !seen.contains(&product.category_id) {
            seen.push(product.category_id);
        }
    }
    seen
}
