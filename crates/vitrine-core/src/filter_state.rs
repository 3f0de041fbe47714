use serde::{Deserialize, Serialize};

/// Inclusive price bounds for catalog filtering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    /// Creates an inclusive range `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`. The range is built from trusted UI state, so a
    /// reversed range is a caller bug rather than bad upstream data.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        assert!(min <= max, "invalid price range: min {min} > max {max}");
        Self { min, max }
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if `price` falls within the range, both ends inclusive.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    /// The unconstrained range: matches every non-negative price.
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::MAX,
        }
    }
}

/// The ephemeral, UI-held set of active catalog constraints.
///
/// Held by whichever screen drives the list, mutated by user interaction,
/// and consumed synchronously by the filter engine on every render. Never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text query, matched case-insensitively against product titles.
    /// Empty string matches everything.
    pub search_query: String,
    pub price_range: PriceRange,
    /// `None` means "all categories". `Some(id)` is compared exactly against
    /// the resolved `category_id`.
    pub selected_category_id: Option<String>,
}

impl FilterState {
    /// Returns `true` if no constraint is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty()
            && self.selected_category_id.is_none()
            && self.price_range == PriceRange::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_both_ends() {
        let range = PriceRange::new(10.0, 20.0);
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(range.contains(15.0));
        assert!(!range.contains(9.99));
        assert!(!range.contains(20.01));
    }

    #[test]
    fn degenerate_range_matches_single_price() {
        let range = PriceRange::new(5.0, 5.0);
        assert!(range.contains(5.0));
        assert!(!range.contains(5.5));
    }

    #[test]
    #[should_panic(expected = "invalid price range")]
    fn reversed_range_panics() {
        let _ = PriceRange::new(20.0, 10.0);
    }

    #[test]
    fn default_range_matches_everything() {
        let range = PriceRange::default();
        assert!(range.contains(0.0));
        assert!(range.contains(1_000_000.0));
    }

    #[test]
    fn default_filter_state_is_empty() {
        assert!(FilterState::default().is_empty());
    }

    #[test]
    fn filter_state_with_category_is_not_empty() {
        let state = FilterState {
            selected_category_id: Some("2".to_string()),
            ..FilterState::default()
        };
        assert!(!state.is_empty());
    }
}
