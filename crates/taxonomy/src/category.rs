//! Category and subcategory entities, plus the drafts sellers submit to create them.

use serde::{Deserialize, Serialize};

use marketplace_core::{CategoryId, DomainError, DomainResult, Entity, SellerId, SubcategoryId};

use crate::slug::Slug;

/// Top-level category, owned by the seller who created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: Slug,
    #[serde(alias = "id_vendeur")]
    pub seller_id: SellerId,
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Second-level category; always contained in exactly one [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub name: String,
    pub slug: Slug,
    pub category_id: CategoryId,
}

impl Entity for Subcategory {
    type Id = SubcategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input: a seller creates a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    /// Derived from `name` when absent.
    pub slug: Option<String>,
    pub seller_id: SellerId,
}

/// Input: a seller creates a subcategory under an existing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubcategory {
    pub name: String,
    pub slug: Option<String>,
    pub category_id: CategoryId,
}

/// A validated category, ready to be inserted. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub slug: Slug,
    pub seller_id: SellerId,
}

impl CategoryDraft {
    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            slug: self.slug,
            seller_id: self.seller_id,
        }
    }
}

/// A validated subcategory, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubcategoryDraft {
    pub name: String,
    pub slug: Slug,
    pub category_id: CategoryId,
}

impl SubcategoryDraft {
    pub fn into_subcategory(self, id: SubcategoryId) -> Subcategory {
        Subcategory {
            id,
            name: self.name,
            slug: self.slug,
            category_id: self.category_id,
        }
    }
}

/// Trims the display name and resolves the slug (explicit or derived).
pub(crate) fn normalize_name_and_slug(
    name: &str,
    slug: Option<&str>,
) -> DomainResult<(String, Slug)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::MissingField("name"));
    }
    let slug = match slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(explicit) => Slug::parse(explicit)?,
        None => Slug::from_name(name)?,
    };
    Ok((name.to_string(), slug))
}
