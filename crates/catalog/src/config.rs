//! Storefront catalog configuration.

pub const LATEST_LIMIT_VAR: &str = "MARKETPLACE_LATEST_LIMIT";
pub const FEATURED_LIMIT_VAR: &str = "MARKETPLACE_FEATURED_LIMIT";

/// Sizes of the home page rails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// "Latest arrivals" rail length.
    pub latest_limit: usize,
    /// Hero carousel length.
    pub featured_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            latest_limit: 8,
            featured_limit: 3,
        }
    }
}

impl CatalogConfig {
    /// Reads overrides from the process environment.
    ///
    /// Missing variables keep their defaults; unparsable ones are logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            latest_limit: parse_or(&lookup, LATEST_LIMIT_VAR, defaults.latest_limit),
            featured_limit: parse_or(&lookup, FEATURED_LIMIT_VAR, defaults.featured_limit),
        }
    }

    pub fn with_latest_limit(mut self, limit: usize) -> Self {
        self.latest_limit = limit;
        self
    }

    pub fn with_featured_limit(mut self, limit: usize) -> Self {
        self.featured_limit = limit;
        self
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: core::str::FromStr + core::fmt::Debug,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, ?default, "ignoring unparsable catalog setting");
            default
        }
    }
}
