//! The catalog filter engine.
//!
//! Assumes already-normalized input: products come out of
//! [`crate::normalize`] and the [`FilterState`] out of trusted UI state.
//! A stable filter, never a sort — relative order is the store's order.

use vitrine_core::{FilterState, Product};

/// Returns `true` if `product` satisfies every active constraint:
/// case-insensitive substring match on the title, inclusive price range,
/// and exact category match when a category is selected.
#[must_use]
pub fn matches_filter(product: &Product, state: &FilterState) -> bool {
    let query_ok = state.search_query.is_empty()
        || product
            .title
            .to_lowercase()
            .contains(&state.search_query.to_lowercase());

    let price_ok = state.price_range.contains(product.price);

    let category_ok = state
        .selected_category_id
        .as_ref()
        .is_none_or(|selected| product.category_id == *selected);

    query_ok && price_ok && category_ok
}

/// Filters a product list against the current state, preserving relative
/// order. No pagination here — "load more" truncation is a cosmetic slice
/// layered on top by the rendering side.
#[must_use]
pub fn filter_products(products: &[Product], state: &FilterState) -> Vec<Product> {
    products
        .iter()
        .filter(|product| matches_filter(product, state))
        .cloned()
        .collect()
}
