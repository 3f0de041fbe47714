use serde::{Deserialize, Serialize};

use crate::discount::discounted_price;

/// Title used when the upstream document has no usable `title` field.
pub const FALLBACK_TITLE: &str = "Untitled Product";

/// Description used when the upstream document has no usable `description`
/// field. A visible placeholder beats a blank detail pane.
pub const FALLBACK_DESCRIPTION: &str = "No description available.";

/// Product type used when the upstream field is null or absent.
pub const UNKNOWN_PRODUCT_TYPE: &str = "unknown";

/// A catalog product normalized for display and filtering.
///
/// Every field is fully defaulted by the normalizer in `vitrine-catalog`;
/// consumers never need to null-check. Prices are `f64` view-model
/// conveniences — the hosted store owns the authoritative records, so no
/// persistence-grade decimal type is involved on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Document identifier assigned by the catalog store. Immutable.
    pub id: String,
    pub title: String,
    /// Current price. Coerced to `0.0` when the upstream value is missing
    /// or not numeric-like.
    pub price: f64,
    pub description: String,
    /// Image URLs in gallery order; the first element is the thumbnail.
    pub images: Vec<String>,
    /// Canonical category id, `"uncategorized"` when unresolvable.
    pub category_id: String,
    /// Resolved display name, `"Uncategorized"` when unresolvable.
    pub category_name: String,
    /// Percentage off `original_price`. `None` when the upstream document
    /// omitted the field entirely; `Some(0.0)` is a genuine zero discount
    /// and must never trigger a display-layer fallback.
    pub discount: Option<f64>,
    /// Pre-discount price; defaults to `price` when absent upstream.
    pub original_price: f64,
    /// Normalized product type string, `"unknown"` when absent.
    pub product_type: String,
    pub stock: u32,
}

impl Product {
    /// Returns the first image URL, used as the list thumbnail.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Returns `true` if at least one unit is in stock.
    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Price after applying this product's discount.
    ///
    /// `default_pct` is applied only when the upstream document carried no
    /// discount field at all. A product with an explicit `0` discount is
    /// shown at full price.
    #[must_use]
    pub fn display_price(&self, default_pct: f64) -> f64 {
        discounted_price(self.original_price, self.discount, default_pct)
    }
}
