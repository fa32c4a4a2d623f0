//! Catalog query pipeline: filter, sort, paginate.

use crate::catalog::Product;
use crate::search::{CatalogPage, CatalogQuery, Pagination, SortKey};

/// Derive one page of catalog results from the full product collection.
///
/// Stages run in fixed order: search-term filter, category filter, stable
/// sort, page slice. The computation is pure; the caller decides when to
/// recompute. A page past the end yields an empty item list, not an error.
pub fn compute_page(products: &[Product], query: &CatalogQuery, page_size: i64) -> CatalogPage {
    let page_size = page_size.max(1);

    // Filter by search term: case-insensitive match on title or description.
    let term = query.search_term.to_lowercase();
    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|p| {
            term.is_empty()
                || p.title.to_lowercase().contains(&term)
                || p.description.to_lowercase().contains(&term)
        })
        .filter(|p| query.category.is_empty() || p.category == query.category)
        .collect();

    // Stable sort: ties keep their pre-sort relative order, which keeps
    // pagination deterministic.
    match query.sort {
        SortKey::Name => {
            matched.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortKey::PriceAsc => {
            matched.sort_by(|a, b| a.price.amount_cents.cmp(&b.price.amount_cents))
        }
        SortKey::PriceDesc => {
            matched.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents))
        }
        SortKey::RatingDesc => {
            matched.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate))
        }
    }

    let total = matched.len() as i64;
    let pagination = Pagination::new(query.page, page_size, total);

    let items: Vec<Product> = matched
        .into_iter()
        .skip(pagination.offset().max(0) as usize)
        .take(page_size as usize)
        .cloned()
        .collect();

    CatalogPage::new(items, pagination)
}
