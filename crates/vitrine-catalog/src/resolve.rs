//! Category resolution for raw catalog documents.
//!
//! Upstream category references come in three shapes: an embedded object
//! (`{"id": 5, "name": "Makeup"}`), a bare primitive id (`5` or `"5"`), or
//! nothing at all. Resolution is total and always lands on the shared table
//! in [`vitrine_core::categories`].

use serde_json::Value;
use vitrine_core::categories::{category_name, UNCATEGORIZED_ID, UNCATEGORIZED_NAME};

use crate::value_helpers::truthy_id;

/// A canonical `{category_id, category_name}` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCategory {
    pub category_id: String,
    pub category_name: String,
}

impl ResolvedCategory {
    fn uncategorized() -> Self {
        Self {
            category_id: UNCATEGORIZED_ID.to_string(),
            category_name: UNCATEGORIZED_NAME.to_string(),
        }
    }
}

/// Resolves a raw category reference to its canonical pair.
///
/// An embedded object wins its own `name` when present; otherwise the
/// shared table supplies the name; otherwise the literal `"Uncategorized"`.
/// Ids are "truthy" in the upstream sense: `0`, `""`, and `null` all mean
/// no category.
#[must_use]
pub fn resolve_category(raw: Option<&Value>) -> ResolvedCategory {
    let (id, embedded_name) = match raw {
        Some(Value::Object(map)) => (truthy_id(map.get("id")), map.get("name")),
        other => (truthy_id(other), None),
    };

    let Some(category_id) = id else {
        return ResolvedCategory::uncategorized();
    };

    let category_name = match embedded_name {
        Some(Value::String(name)) if !name.is_empty() => name.clone(),
        _ => category_name(&category_id)
            .unwrap_or(UNCATEGORIZED_NAME)
            .to_string(),
    };

    ResolvedCategory {
        category_id,
        category_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_with_id_and_name_uses_embedded_name() {
        let resolved = resolve_category(Some(&json!({"id": 5, "name": "Makeup"})));
        assert_eq!(resolved.category_id, "5");
        assert_eq!(resolved.category_name, "Makeup");
    }

    #[test]
    fn object_without_name_falls_back_to_table() {
        let resolved = resolve_category(Some(&json!({"id": "4"})));
        assert_eq!(resolved.category_id, "4");
        assert_eq!(resolved.category_name, "Handbags");
    }

    #[test]
    fn object_with_unknown_id_keeps_id_but_uncategorized_name() {
        let resolved = resolve_category(Some(&json!({"id": "77"})));
        assert_eq!(resolved.category_id, "77");
        assert_eq!(resolved.category_name, "Uncategorized");
    }

    #[test]
    fn bare_numeric_id_resolves_through_table() {
        let resolved = resolve_category(Some(&json!(2)));
        assert_eq!(resolved.category_id, "2");
        assert_eq!(resolved.category_name, "Skin Care");
    }

    #[test]
    fn bare_string_id_resolves_through_table() {
        let resolved = resolve_category(Some(&json!("7")));
        assert_eq!(resolved.category_id, "7");
        assert_eq!(resolved.category_name, "Perfumes");
    }

    #[test]
    fn absent_is_uncategorized() {
        let resolved = resolve_category(None);
        assert_eq!(resolved.category_id, "uncategorized");
        assert_eq!(resolved.category_name, "Uncategorized");
    }

    #[test]
    fn null_is_uncategorized() {
        let resolved = resolve_category(Some(&json!(null)));
        assert_eq!(resolved.category_id, "uncategorized");
        assert_eq!(resolved.category_name, "Uncategorized");
    }

    #[test]
    fn falsy_ids_are_uncategorized() {
        assert_eq!(
            resolve_category(Some(&json!({"id": 0, "name": "Ghost"}))).category_id,
            "uncategorized"
        );
        assert_eq!(
            resolve_category(Some(&json!({"id": ""}))).category_id,
            "uncategorized"
        );
    }

    #[test]
    fn embedded_empty_name_falls_back_to_table() {
        let resolved = resolve_category(Some(&json!({"id": 1, "name": ""})));
        assert_eq!(resolved.category_name, "Body Care");
    }
}
