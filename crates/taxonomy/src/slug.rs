//! URL slugs for categories and subcategories (`/categorie/<slug>`).

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use marketplace_core::{DomainError, DomainResult, ValueObject};

/// A URL path segment identifying a category or subcategory.
///
/// Slugs read back from the store are trusted as-is; slugs built from seller
/// input go through [`Slug::parse`] or [`Slug::from_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl ValueObject for Slug {}

impl Slug {
    /// Accepts an already-normalized slug (`[a-z0-9]` runs joined by single dashes).
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        let well_formed = !raw.is_empty()
            && !raw.starts_with('-')
            && !raw.ends_with('-')
            && !raw.contains("--")
            && raw
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
        if !well_formed {
            return Err(DomainError::validation(format!("malformed slug: {raw:?}")));
        }
        Ok(Self(raw.to_string()))
    }

    /// Derives a slug from a display name ("Sacs à main" → `sacs-a-main`).
    pub fn from_name(name: &str) -> DomainResult<Self> {
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(DomainError::validation(format!(
                "cannot derive a slug from {name:?}"
            )));
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lowercases, folds French accents to ASCII and collapses every other run of
/// characters into a single `-`.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        let folded: &str = match c {
            'à' | 'â' | 'ä' | 'á' | 'ã' => "a",
            'é' | 'è' | 'ê' | 'ë' => "e",
            'î' | 'ï' | 'í' | 'ì' => "i",
            'ô' | 'ö' | 'ó' | 'ò' | 'õ' => "o",
            'ù' | 'û' | 'ü' | 'ú' => "u",
            'ç' => "c",
            'ÿ' => "y",
            'ñ' => "n",
            'œ' => "oe",
            'æ' => "ae",
            _ if c.is_ascii_alphanumeric() => {
                if pending_dash && !out.is_empty() {
                    out.push('-');
                }
                pending_dash = false;
                out.push(c);
                continue;
            }
            _ => {
                pending_dash = true;
                continue;
            }
        };
        if pending_dash && !out.is_empty() {
            out.push('-');
        }
        pending_dash = false;
        out.push_str(folded);
    }

    out
}
