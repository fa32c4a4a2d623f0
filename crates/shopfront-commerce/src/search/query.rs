//! Catalog query.

use serde::{Deserialize, Serialize};

/// Sort keys for catalog results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Sort by title A-Z.
    #[default]
    Name,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    RatingDesc,
}

impl SortKey {
    /// Parse a sort key string; unknown values fall back to the default.
    pub fn parse(s: &str) -> Self {
        match s {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "rating-desc" => Self::RatingDesc,
            _ => Self::Name,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::RatingDesc => "rating-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "Sort by Name",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::RatingDesc => "Highest Rated",
        }
    }
}

/// One catalog rendering's worth of query state: search term, category,
/// sort key, and page.
///
/// Changing the search term, category, or sort key through the setters
/// resets the page to 1, so a stale page number from a larger result set
/// never produces an out-of-range slice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogQuery {
    /// Case-insensitive search term; empty matches everything.
    pub search_term: String,
    /// Exact category; empty matches everything.
    pub category: String,
    /// Sort key.
    pub sort: SortKey,
    /// Current page (1-indexed).
    pub page: i64,
}

impl CatalogQuery {
    /// Query with no filters: everything, sorted by name, page 1.
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            category: String::new(),
            sort: SortKey::Name,
            page: 1,
        }
    }

    /// Set the search term and reset to page 1.
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self.page = 1;
        self
    }

    /// Set the category and reset to page 1.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self.page = 1;
        self
    }

    /// Set the sort key and reset to page 1.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self.page = 1;
        self
    }

    /// Set the page, clamped to at least 1.
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page.max(1);
        self
    }

    /// Drop all filters and sorting back to the defaults.
    pub fn cleared(self) -> Self {
        Self::new()
    }

    /// Whether any filter is active.
    pub fn has_filters(&self) -> bool {
        !self.search_term.is_empty() || !self.category.is_empty()
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new()
    }
}
