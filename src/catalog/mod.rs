//! Catalog listing types.
//!
//! The listing endpoint returns products as a mapping keyed by product id:
//!
//! ```json
//! { "success": true, "products": { "-Nx1": { ... }, "-Nx2": { ... } } }
//! ```
//!
//! [`ProductListResponse`] decodes that mapping into an insertion-ordered map,
//! so [`ProductListResponse::into_products`] yields products in the order the
//! API sent them.

mod product;

pub use product::Product;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Response body of the full product listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListResponse {
    /// Whether the API reports success.
    #[serde(default)]
    pub success: Option<bool>,

    /// Products keyed by id, in response order.
    #[serde(deserialize_with = "deserialize_products")]
    pub products: IndexMap<String, Product>,
}

impl ProductListResponse {
    /// Converts the keyed mapping into an ordered list.
    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        self.products.into_values().collect()
    }
}

/// Decodes every entry, so one odd product never hides the rest. An entry that
/// is not an object at all becomes an empty product carrying its key as id.
fn deserialize_products<'de, D>(deserializer: D) -> Result<IndexMap<String, Product>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = IndexMap::<String, Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|(key, entry)| {
            let product = serde_json::from_value(entry).unwrap_or_else(|e| {
                tracing::warn!(id = %key, "Unreadable product entry: {e}");
                Product {
                    id: key.clone(),
                    ..Product::default()
                }
            });
            (key, product)
        })
        .collect())
}
