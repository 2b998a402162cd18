use core::str::FromStr;

use serde::{Deserialize, Serialize};

use marketplace_core::{CategoryId, DomainError, SubcategoryId};
use marketplace_products::Product;

/// Catalog ordering.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Keep the snapshot order (fetched newest first).
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

impl FromStr for SortBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "newest" => Ok(Self::Newest),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            other => Err(DomainError::validation(format!("unknown sort order {other:?}"))),
        }
    }
}

/// Category restriction. The storefront sends the sentinel `"all"` for "no filter".
///
/// On the wire this is either a category id (number or numeric string) or `"all"`,
/// the same forms [`FromStr`] accepts.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Option<CategoryFilterRepr>", into = "CategoryFilterRepr")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryId),
}

impl CategoryFilter {
    pub const ALL: &'static str = "all";

    fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => product.category_id == id,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == Self::ALL {
            return Ok(Self::All);
        }
        Ok(Self::Only(s.parse()?))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum CategoryFilterRepr {
    Id(i64),
    Text(String),
}

impl TryFrom<Option<CategoryFilterRepr>> for CategoryFilter {
    type Error = DomainError;

    fn try_from(value: Option<CategoryFilterRepr>) -> Result<Self, Self::Error> {
        match value {
            None => Ok(Self::All),
            Some(CategoryFilterRepr::Id(id)) => Ok(Self::Only(CategoryId::new(id))),
            Some(CategoryFilterRepr::Text(text)) => text.parse(),
        }
    }
}

impl From<CategoryFilter> for CategoryFilterRepr {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => Self::Text(CategoryFilter::ALL.to_owned()),
            CategoryFilter::Only(id) => Self::Id(id.get()),
        }
    }
}

impl From<Option<CategoryId>> for CategoryFilter {
    fn from(value: Option<CategoryId>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl From<CategoryId> for CategoryFilter {
    fn from(value: CategoryId) -> Self {
        Self::Only(value)
    }
}

/// Shopper-supplied criteria. Active filters are ANDed; sorting runs last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub subcategory: Option<SubcategoryId>,
    #[serde(default)]
    pub search_text: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn in_subcategory(mut self, subcategory_id: SubcategoryId) -> Self {
        self.subcategory = Some(subcategory_id);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn sorted_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Lowercased needle; `None` when empty (empty search matches everything).
    /// Whitespace is part of the needle.
    fn needle(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

/// Filters then sorts a product snapshot.
///
/// - category / subcategory: exact match on the stored reference;
/// - search: case-insensitive substring of the name (descriptions are not searched);
/// - sort: `Newest` keeps input order, price sorts use `sale_price` and are stable.
pub fn filter_and_sort(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let needle = query.needle();

    let mut out: Vec<Product> = products
        .iter()
        .filter(|p| query.category.matches(p))
        .filter(|p| query.subcategory.is_none_or(|id| p.subcategory_id == id))
        .filter(|p| {
            needle
                .as_deref()
                .is_none_or(|n| p.name.to_lowercase().contains(n))
        })
        .cloned()
        .collect();

    match query.sort_by {
        SortBy::Newest => {}
        SortBy::PriceAsc => out.sort_by_key(|p| p.sale_price),
        SortBy::PriceDesc => out.sort_by(|a, b| b.sale_price.cmp(&a.sale_price)),
    }

    tracing::trace!(
        input = products.len(),
        matched = out.len(),
        sort_by = ?query.sort_by,
        "catalog query"
    );
    out
}
