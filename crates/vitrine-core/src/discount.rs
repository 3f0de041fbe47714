//! Discounted-price derivation.
//!
//! The discount field is nullable end to end: `None` means the upstream
//! document never carried the field, and only then does the caller-supplied
//! default apply. An explicit `0` is a real "no discount" and is honored.
//! (The storefront this replaces conflated the two, so zero-discount
//! products showed a phantom 15% markdown.)

/// Default percentage applied by flash-sale styling when a product carries
/// no discount field at all.
pub const DEFAULT_FLASH_SALE_DISCOUNT_PCT: f64 = 15.0;

/// Derives the displayed price from `original_price` and a nullable
/// discount percentage.
///
/// The effective percentage is clamped to `[0, 100]` — upstream documents
/// are not validated, so out-of-range values degrade rather than producing
/// negative or inflated prices.
#[must_use]
pub fn discounted_price(original_price: f64, discount_pct: Option<f64>, default_pct: f64) -> f64 {
    let pct = discount_pct.unwrap_or(default_pct).clamp(0.0, 100.0);
    original_price - original_price * (pct / 100.0)
}
