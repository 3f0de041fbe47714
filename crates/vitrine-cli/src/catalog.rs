//! `catalog` command: load, normalize, filter, print.

use std::path::Path;

use serde_json::Value;
use vitrine_catalog::{filter_products, normalize_documents, StoreClient};
use vitrine_core::{load_store_config, FilterState, PriceRange};

/// Loads a collection (remote or local file), applies the filter state, and
/// prints one line per matching product.
///
/// # Errors
///
/// Returns an error if the filter bounds are reversed, the file cannot be
/// read or parsed, the store config is incomplete, or the fetch fails.
/// Fetch failures are not retried — rerun the command.
pub(crate) async fn run_catalog(
    collection: &str,
    file: Option<&Path>,
    query: Option<&str>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    category: Option<&str>,
    default_discount: f64,
) -> anyhow::Result<()> {
    let min = min_price.unwrap_or(0.0);
    let max = max_price.unwrap_or(f64::MAX);
    if min > max {
        anyhow::bail!("--min-price {min} exceeds --max-price {max}");
    }

    let products = match file {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let documents = parse_document_list(&content)?;
            normalize_documents(&documents)
        }
        None => {
            let config = load_store_config()?;
            let client = StoreClient::new(
                &config.store_url,
                config.fetch_timeout_secs,
                &config.user_agent,
            )?;
            client.fetch_products(collection).await?
        }
    };

    let state = FilterState {
        search_query: query.unwrap_or_default().to_string(),
        price_range: PriceRange::new(min, max),
        selected_category_id: category.map(str::to_owned),
    };

    let filtered = filter_products(&products, &state);
    tracing::info!(
        total = products.len(),
        shown = filtered.len(),
        "catalog filtered"
    );

    for product in &filtered {
        println!(
            "{}  {}  {:.2}  [{}]  stock:{}",
            product.id,
            product.title,
            product.display_price(default_discount),
            product.category_name,
            product.stock
        );
    }

    Ok(())
}

/// Accepts either the store's `{"documents": [...]}` envelope or a bare
/// JSON array of documents.
fn parse_document_list(content: &str) -> anyhow::Result<Vec<Value>> {
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Array(documents) => Ok(documents),
        Value::Object(mut map) => match map.remove("documents") {
            Some(Value::Array(documents)) => Ok(documents),
            _ => anyhow::bail!("expected a JSON array or a document-list envelope"),
        },
        _ => anyhow::bail!("expected a JSON array or a document-list envelope"),
    }
}
