//! Normalization from raw store documents to [`vitrine_core::Product`].
//!
//! The normalizer is total: whatever shape a document arrives in, it comes
//! out as a fully-defaulted canonical product. Bad data degrades to
//! placeholders instead of surfacing errors, because the upstream store
//! enforces no schema at all.

use serde_json::Value;
use vitrine_core::product::{FALLBACK_DESCRIPTION, FALLBACK_TITLE, UNKNOWN_PRODUCT_TYPE};
use vitrine_core::Product;

use crate::resolve::resolve_category;
use crate::value_helpers::{
    count_or_zero, number_or, product_type_of, string_array, string_or, truthy_id,
};

/// Normalizes one raw catalog record into a canonical [`Product`].
///
/// `id` is the store-assigned document identifier, passed separately
/// because the store keeps it outside the document body in list responses.
#[must_use]
pub fn normalize_record(id: impl Into<String>, raw: &Value) -> Product {
    let resolved = resolve_category(raw.get("category"));

    let price = number_or(raw.get("price"), 0.0);

    // Absent and explicit-zero discounts are distinct states: only a truly
    // missing field may trigger the flash-sale fallback at display time.
    let discount = match raw.get("discount") {
        None | Some(Value::Null) => None,
        Some(value) => Some(number_or(Some(value), 0.0)),
    };

    let original_price = match raw.get("originalPrice") {
        None | Some(Value::Null) => price,
        Some(value) => number_or(Some(value), price),
    };

    Product {
        id: id.into(),
        title: string_or(raw.get("title"), FALLBACK_TITLE),
        price,
        description: string_or(raw.get("description"), FALLBACK_DESCRIPTION),
        images: string_array(raw.get("images")),
        category_id: resolved.category_id,
        category_name: resolved.category_name,
        discount,
        original_price,
        product_type: product_type_of(raw.get("productType"), UNKNOWN_PRODUCT_TYPE),
        stock: count_or_zero(raw.get("stock")),
    }
}

/// Normalizes a document that carries its own store-assigned id (`$id`,
/// with `id` as a fallback key).
///
/// Documents with no usable id still normalize — the id degrades to the
/// empty string with a warning, since a missing id only breaks navigation
/// to the detail view, not list rendering.
#[must_use]
pub fn normalize_document(document: &Value) -> Product {
    let id = truthy_id(document.get("$id"))
        .or_else(|| truthy_id(document.get("id")))
        .unwrap_or_else(|| {
            tracing::warn!("catalog document has no usable $id/id field");
            String::new()
        });
    normalize_record(id, document)
}

/// Normalizes a whole document-list snapshot, preserving store order.
#[must_use]
pub fn normalize_documents(documents: &[Value]) -> Vec<Product> {
    documents.iter().map(normalize_document).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_record_maps_every_field() {
        let raw = json!({
            "title": "Velvet Matte Lipstick",
            "price": 24.0,
            "description": "Long-wear matte finish.",
            "images": ["https://cdn.example.com/lip-1.jpg"],
            "category": {"id": 5, "name": "Makeup"},
            "discount": 20,
            "originalPrice": 30.0,
            "productType": "lipstick",
            "stock": 12
        });
        let product = normalize_record("doc-9", &raw);
        assert_eq!(product.id, "doc-9");
        assert_eq!(product.title, "Velvet Matte Lipstick");
        assert_eq!(product.price, 24.0);
        assert_eq!(product.category_id, "5");
        assert_eq!(product.category_name, "Makeup");
        assert_eq!(product.discount, Some(20.0));
        assert_eq!(product.original_price, 30.0);
        assert_eq!(product.product_type, "lipstick");
        assert_eq!(product.stock, 12);
    }

    #[test]
    fn empty_record_gets_full_defaults() {
        let product = normalize_record("doc-0", &json!({}));
        assert_eq!(product.title, "Untitled Product");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.description, "No description available.");
        assert!(product.images.is_empty());
        assert_eq!(product.category_id, "uncategorized");
        assert_eq!(product.category_name, "Uncategorized");
        assert!(product.discount.is_none());
        assert_eq!(product.original_price, 0.0);
        assert_eq!(product.product_type, "unknown");
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn missing_price_zeroes_both_prices() {
        let product = normalize_record("doc-1", &json!({"title": "Mystery Box"}));
        assert_eq!(product.price, 0.0);
        assert_eq!(product.original_price, 0.0);
    }

    #[test]
    fn original_price_defaults_to_price() {
        let product = normalize_record("doc-2", &json!({"price": 45.0}));
        assert_eq!(product.original_price, 45.0);
    }

    #[test]
    fn string_price_is_coerced() {
        let product = normalize_record("doc-3", &json!({"price": "19.99"}));
        assert_eq!(product.price, 19.99);
    }

    #[test]
    fn explicit_zero_discount_survives_as_some() {
        let product = normalize_record("doc-4", &json!({"discount": 0}));
        assert_eq!(product.discount, Some(0.0));
    }

    #[test]
    fn null_discount_is_absent() {
        let product = normalize_record("doc-5", &json!({"discount": null}));
        assert!(product.discount.is_none());
    }

    #[test]
    fn non_array_images_become_empty() {
        let product = normalize_record("doc-6", &json!({"images": "front.jpg"}));
        assert!(product.images.is_empty());
    }

    #[test]
    fn product_type_array_takes_first_element() {
        let product = normalize_record("doc-7", &json!({"productType": ["serum", "gel"]}));
        assert_eq!(product.product_type, "serum");
    }

    #[test]
    fn normalizer_never_fails_on_hostile_shapes() {
        for raw in [
            json!(null),
            json!([]),
            json!("just a string"),
            json!({"price": {"amount": 10}, "images": {"0": "x.jpg"}, "stock": "many"}),
        ] {
            let product = normalize_record("doc-x", &raw);
            assert_eq!(product.price, 0.0);
            assert_eq!(product.stock, 0);
        }
    }

    #[test]
    fn document_id_prefers_dollar_id() {
        let product = normalize_document(&json!({"$id": "abc", "id": "legacy", "price": 1}));
        assert_eq!(product.id, "abc");
    }

    #[test]
    fn document_id_falls_back_to_plain_id() {
        let product = normalize_document(&json!({"id": 42, "price": 1}));
        assert_eq!(product.id, "42");
    }

    #[test]
    fn document_without_id_degrades_to_empty() {
        let product = normalize_document(&json!({"price": 1}));
        assert!(product.id.is_empty());
    }

    #[test]
    fn raw_documents_flow_straight_into_the_filter_engine() {
        use vitrine_core::{FilterState, PriceRange};

        let docs = vec![
            json!({"$id": "p1", "title": "Rose Hand Cream", "price": 50, "category": {"id": "2"}}),
            json!({"$id": "p2", "title": "Gold Watch", "price": 150, "category": {"id": "5"}}),
            json!({"$id": "p3", "title": "Silk Scarf", "price": 80}),
        ];
        let products = normalize_documents(&docs);

        let state = FilterState {
            search_query: String::new(),
            price_range: PriceRange::new(0.0, 100.0),
            selected_category_id: Some("2".to_string()),
        };
        let filtered = crate::filter::filter_products(&products, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "p1");
    }

    #[test]
    fn documents_preserve_store_order() {
        let docs = vec![
            json!({"$id": "a", "price": 1}),
            json!({"$id": "b", "price": 2}),
            json!({"$id": "c", "price": 3}),
        ];
        let products = normalize_documents(&docs);
        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
