//! The single shared category table.
//!
//! Every screen that filters or labels by category must go through this
//! module. The upstream store's category documents are inconsistent enough
//! that ad hoc per-screen tables drift (id `"4"` has been observed as both
//! `"Handbags"` and `"Hand Bags"`), and a drifted table silently produces
//! empty result sets. One table, imported everywhere.

/// Category id assigned when a document's category reference is absent or
/// unresolvable.
pub const UNCATEGORIZED_ID: &str = "uncategorized";

/// Display name paired with [`UNCATEGORIZED_ID`].
pub const UNCATEGORIZED_NAME: &str = "Uncategorized";

/// Canonical id → display-name pairs for the storefront's fixed categories.
pub const CATEGORIES: [(&str, &str); 9] = [
    ("1", "Body Care"),
    ("2", "Skin Care"),
    ("3", "Accessories"),
    ("4", "Handbags"),
    ("5", "Makeup"),
    ("6", "Hair Care"),
    ("7", "Perfumes"),
    ("8", "Watches"),
    ("9", "Gifts"),
];

/// Looks up the display name for a canonical category id.
#[must_use]
pub fn category_name(category_id: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, name)| *name)
}

/// Returns `true` if `category_id` is one of the fixed storefront categories.
#[must_use]
pub fn is_known_category(category_id: &str) -> bool {
    category_name(category_id).is_some()
}
