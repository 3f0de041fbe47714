//! Catalog ingestion and view-model pipeline.
//!
//! Raw documents from the hosted catalog store are schema-less: numeric
//! fields arrive as numbers or strings, category references arrive as
//! embedded objects, bare ids, or nothing at all, and any field may be
//! missing. This crate is the single funnel turning those documents into
//! the canonical [`vitrine_core::Product`] shape — UI code never reads raw
//! fields directly.

pub mod client;
pub mod countdown;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod resolve;
mod value_helpers;

pub use client::StoreClient;
pub use countdown::{flash_sale_end, tick_flash_sale, TimeRemaining};
pub use error::CatalogError;
pub use filter::{filter_products, matches_filter};
pub use normalize::{normalize_document, normalize_documents, normalize_record};
pub use resolve::{resolve_category, ResolvedCategory};
