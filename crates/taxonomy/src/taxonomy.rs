use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use marketplace_core::{
    CategoryId, DomainError, DomainResult, SellerId, SubcategoryId, index_by_id,
};

use crate::category::{
    Category, CategoryDraft, NewCategory, NewSubcategory, Subcategory, SubcategoryDraft,
    normalize_name_and_slug,
};
use crate::slug::Slug;

/// Indexed view over one fetched category/subcategory snapshot.
///
/// Build it once per fetch with [`Taxonomy::from_snapshot`]; every lookup after
/// that is a map access.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    categories: HashMap<CategoryId, Category>,
    subcategories: HashMap<SubcategoryId, Subcategory>,
    slugs: HashMap<Slug, CategoryId>,
}

/// A category with its subcategories nested (navigation sidebar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNode<'a> {
    #[serde(flatten)]
    pub category: &'a Category,
    pub subcategories: Vec<&'a Subcategory>,
}

impl Taxonomy {
    pub fn from_snapshot(
        categories: impl IntoIterator<Item = Category>,
        subcategories: impl IntoIterator<Item = Subcategory>,
    ) -> Self {
        let categories = index_by_id(categories);
        let subcategories = index_by_id(subcategories);

        // Lowest id wins a slug collision so the index is independent of map order.
        let mut ordered: Vec<&Category> = categories.values().collect();
        ordered.sort_by_key(|c| c.id);
        let mut slugs = HashMap::with_capacity(ordered.len());
        for category in ordered {
            if let Some(existing) = slugs.get(&category.slug) {
                tracing::warn!(
                    slug = %category.slug,
                    kept = %existing,
                    ignored = %category.id,
                    "duplicate category slug in snapshot"
                );
                continue;
            }
            slugs.insert(category.slug.clone(), category.id);
        }

        for sub in subcategories.values() {
            if !categories.contains_key(&sub.category_id) {
                tracing::warn!(
                    subcategory_id = %sub.id,
                    category_id = %sub.category_id,
                    "subcategory references a missing category"
                );
            }
        }

        Self {
            categories,
            subcategories,
            slugs,
        }
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    pub fn subcategory(&self, id: SubcategoryId) -> Option<&Subcategory> {
        self.subcategories.get(&id)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn subcategory_count(&self) -> usize {
        self.subcategories.len()
    }

    /// Categories in alphabetical order.
    ///
    /// With a seller: only that seller's categories (management view).
    /// Without: every category (public browsing).
    pub fn list_categories(&self, seller_id: Option<SellerId>) -> Vec<&Category> {
        let mut out: Vec<&Category> = self
            .categories
            .values()
            .filter(|c| seller_id.is_none_or(|s| c.seller_id == s))
            .collect();
        out.sort_by(|a, b| by_name(&a.name, &b.name).then(a.id.cmp(&b.id)));
        out
    }

    /// Subcategories of `category_id` in alphabetical order. Unknown category → empty.
    pub fn list_subcategories(&self, category_id: CategoryId) -> Vec<&Subcategory> {
        if !self.categories.contains_key(&category_id) {
            return Vec::new();
        }
        let mut out: Vec<&Subcategory> = self
            .subcategories
            .values()
            .filter(|s| s.category_id == category_id)
            .collect();
        out.sort_by(|a, b| by_name(&a.name, &b.name).then(a.id.cmp(&b.id)));
        out
    }

    pub fn resolve_by_slug(&self, slug: &str) -> Option<&Category> {
        self.slugs
            .get(slug)
            .and_then(|id| self.categories.get(id))
    }

    /// Resolves `/categorie/<category>/<subcategory>` style paths.
    pub fn resolve_subcategory_by_slug(
        &self,
        category_id: CategoryId,
        slug: &str,
    ) -> Option<&Subcategory> {
        self.list_subcategories(category_id)
            .into_iter()
            .find(|s| s.slug.as_str() == slug)
    }

    /// Every category (alphabetical) with its subcategories nested.
    pub fn tree(&self) -> Vec<CategoryNode<'_>> {
        self.list_categories(None)
            .into_iter()
            .map(|category| CategoryNode {
                category,
                subcategories: self.list_subcategories(category.id),
            })
            .collect()
    }

    /// Resolves a product placement and checks containment.
    ///
    /// Dangling ids fail with `InvalidTaxonomyReference`; a subcategory filed
    /// under another category fails with `TaxonomyMismatch`.
    pub fn check_placement(
        &self,
        category_id: CategoryId,
        subcategory_id: SubcategoryId,
    ) -> DomainResult<(&Category, &Subcategory)> {
        let category = self
            .category(category_id)
            .ok_or_else(|| DomainError::dangling(format!("unknown category {category_id}")))?;
        let subcategory = self.subcategory(subcategory_id).ok_or_else(|| {
            DomainError::dangling(format!("unknown subcategory {subcategory_id}"))
        })?;
        if subcategory.category_id != category.id {
            return Err(DomainError::TaxonomyMismatch {
                category_id,
                subcategory_id,
            });
        }
        Ok((category, subcategory))
    }

    pub fn validate_new_category(&self, input: NewCategory) -> DomainResult<CategoryDraft> {
        let (name, slug) = normalize_name_and_slug(&input.name, input.slug.as_deref())?;
        if self.slugs.contains_key(&slug) {
            return Err(DomainError::conflict(format!(
                "category slug {slug} is already taken"
            )));
        }
        Ok(CategoryDraft {
            name,
            slug,
            seller_id: input.seller_id,
        })
    }

    /// The parent category must exist and the slug must be unique within it.
    pub fn validate_new_subcategory(
        &self,
        input: NewSubcategory,
    ) -> DomainResult<SubcategoryDraft> {
        if self.category(input.category_id).is_none() {
            return Err(DomainError::dangling(format!(
                "unknown category {}",
                input.category_id
            )));
        }
        let (name, slug) = normalize_name_and_slug(&input.name, input.slug.as_deref())?;
        if self
            .resolve_subcategory_by_slug(input.category_id, slug.as_str())
            .is_some()
        {
            return Err(DomainError::conflict(format!(
                "subcategory slug {slug} is already taken in category {}",
                input.category_id
            )));
        }
        Ok(SubcategoryDraft {
            name,
            slug,
            category_id: input.category_id,
        })
    }
}

fn by_name(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketplace_core::SellerId;

    fn category(id: i64, name: &str, seller: SellerId) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            slug: Slug::from_name(name).unwrap(),
            seller_id: seller,
        }
    }

    fn subcategory(id: i64, name: &str, category_id: i64) -> Subcategory {
        Subcategory {
            id: SubcategoryId::new(id),
            name: name.to_string(),
            slug: Slug::from_name(name).unwrap(),
            category_id: CategoryId::new(category_id),
        }
    }

    fn fixture() -> (Taxonomy, SellerId, SellerId) {
        let alice = SellerId::new();
        let bob = SellerId::new();
        let taxonomy = Taxonomy::from_snapshot(
            vec![
                category(1, "Sacs", alice),
                category(2, "Chaussures", bob),
                category(3, "montres", alice),
            ],
            vec![
                subcategory(10, "Sacs à dos", 1),
                subcategory(11, "Pochettes", 1),
                subcategory(20, "Baskets", 2),
                subcategory(99, "Orpheline", 42),
            ],
        );
        (taxonomy, alice, bob)
    }

    fn names<'a>(items: impl IntoIterator<Item = &'a Category>) -> Vec<&'a str> {
        items.into_iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn list_categories_is_alphabetical_and_seller_scoped() {
        let (taxonomy, alice, bob) = fixture();
        assert_eq!(
            names(taxonomy.list_categories(None)),
            vec!["Chaussures", "montres", "Sacs"]
        );
        assert_eq!(names(taxonomy.list_categories(Some(alice))), vec!["montres", "Sacs"]);
        assert_eq!(names(taxonomy.list_categories(Some(bob))), vec!["Chaussures"]);
        assert!(taxonomy.list_categories(Some(SellerId::new())).is_empty());
    }

    #[test]
    fn list_subcategories_filters_by_parent() {
        let (taxonomy, _, _) = fixture();
        let subs: Vec<&str> = taxonomy
            .list_subcategories(CategoryId::new(1))
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(subs, vec!["Pochettes", "Sacs à dos"]);
        assert!(taxonomy.list_subcategories(CategoryId::new(3)).is_empty());
    }

    #[test]
    fn resolve_by_slug_maps_path_segments() {
        let (taxonomy, _, _) = fixture();
        assert_eq!(taxonomy.resolve_by_slug("chaussures").map(|c| c.id), Some(CategoryId::new(2)));
        assert!(taxonomy.resolve_by_slug("inconnue").is_none());

        let sub = taxonomy.resolve_subcategory_by_slug(CategoryId::new(1), "sacs-a-dos");
        assert_eq!(sub.map(|s| s.id), Some(SubcategoryId::new(10)));
        // Slug exists, but under another category.
        assert!(taxonomy
            .resolve_subcategory_by_slug(CategoryId::new(2), "sacs-a-dos")
            .is_none());
    }

    #[test]
    fn duplicate_slugs_keep_lowest_id() {
        let seller = SellerId::new();
        let mut dup = category(8, "Sacs", seller);
        dup.name = "Sacs (doublon)".to_string();
        let taxonomy =
            Taxonomy::from_snapshot(vec![dup, category(5, "Sacs", seller)], Vec::new());
        assert_eq!(taxonomy.resolve_by_slug("sacs").map(|c| c.id), Some(CategoryId::new(5)));
    }

    #[test]
    fn check_placement_distinguishes_dangling_from_mismatch() {
        let (taxonomy, _, _) = fixture();
        assert!(taxonomy
            .check_placement(CategoryId::new(1), SubcategoryId::new(11))
            .is_ok());

        let err = taxonomy
            .check_placement(CategoryId::new(2), SubcategoryId::new(10))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::TaxonomyMismatch {
                category_id: CategoryId::new(2),
                subcategory_id: SubcategoryId::new(10),
            }
        );

        let err = taxonomy
            .check_placement(CategoryId::new(77), SubcategoryId::new(10))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTaxonomyReference(_)));

        let err = taxonomy
            .check_placement(CategoryId::new(1), SubcategoryId::new(404))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTaxonomyReference(_)));
    }

    #[test]
    fn orphan_subcategory_is_indexed_but_never_listed() {
        let (taxonomy, _, _) = fixture();
        assert!(taxonomy.subcategory(SubcategoryId::new(99)).is_some());
        let listed: usize = taxonomy.tree().iter().map(|n| n.subcategories.len()).sum();
        assert_eq!(listed, 3);
    }

    #[test]
    fn orphans_are_not_listed_under_their_missing_category() {
        let (taxonomy, _, _) = fixture();
        assert!(taxonomy.list_subcategories(CategoryId::new(42)).is_empty());
        assert!(
            taxonomy
                .resolve_subcategory_by_slug(CategoryId::new(42), "orpheline")
                .is_none()
        );
    }

    #[test]
    fn tree_nests_subcategories_under_categories() {
        let (taxonomy, _, _) = fixture();
        let tree = taxonomy.tree();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree[0].category.name, "Chaussures");
        assert_eq!(tree[0].subcategories.len(), 1);
        assert_eq!(tree[2].category.name, "Sacs");
        assert_eq!(tree[2].subcategories.len(), 2);

        let json = serde_json::to_value(&tree[0]).unwrap();
        assert_eq!(json["slug"], "chaussures");
        assert_eq!(json["subcategories"][0]["name"], "Baskets");
    }

    #[test]
    fn new_subcategory_requires_existing_category() {
        let (taxonomy, _, _) = fixture();
        let err = taxonomy
            .validate_new_subcategory(NewSubcategory {
                name: "Bottes".to_string(),
                slug: None,
                category_id: CategoryId::new(404),
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTaxonomyReference(_)));

        let draft = taxonomy
            .validate_new_subcategory(NewSubcategory {
                name: " Bottes ".to_string(),
                slug: None,
                category_id: CategoryId::new(2),
            })
            .unwrap();
        assert_eq!(draft.name, "Bottes");
        let sub = draft.into_subcategory(SubcategoryId::new(21));
        assert_eq!(sub.slug.as_str(), "bottes");
    }

    #[test]
    fn subcategory_slug_is_unique_per_category() {
        let (taxonomy, _, _) = fixture();
        let err = taxonomy
            .validate_new_subcategory(NewSubcategory {
                name: "Pochettes".to_string(),
                slug: None,
                category_id: CategoryId::new(1),
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // Same slug under another category is fine.
        assert!(taxonomy
            .validate_new_subcategory(NewSubcategory {
                name: "Pochettes".to_string(),
                slug: None,
                category_id: CategoryId::new(2),
            })
            .is_ok());
    }

    #[test]
    fn new_category_slug_must_be_unique() {
        let (taxonomy, alice, _) = fixture();
        let err = taxonomy
            .validate_new_category(NewCategory {
                name: "SACS".to_string(),
                slug: None,
                seller_id: alice,
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let draft = taxonomy
            .validate_new_category(NewCategory {
                name: "Bijoux".to_string(),
                slug: Some("bijoux-fantaisie".to_string()),
                seller_id: alice,
            })
            .unwrap();
        let created = draft.into_category(CategoryId::new(4));
        assert_eq!(created.slug.as_str(), "bijoux-fantaisie");
        assert_eq!(created.seller_id, alice);
    }
}
