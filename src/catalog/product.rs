//! The product resource as returned by the admin listing.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A product in the store catalog.
///
/// Products are read verbatim from the API and never mutated locally. Each
/// field decodes on its own: a missing, `null` or oddly typed value falls back
/// to the field's default instead of failing the whole catalog.
///
/// # Example
///
/// ```rust
/// use catalog_admin::catalog::Product;
///
/// let product: Product = serde_json::from_value(serde_json::json!({
///     "id": "-Nx1",
///     "title": "Espresso",
///     "origin_price": "120",
///     "price": 90,
///     "is_enabled": 1,
///     "description": null,
///     "imagesUrl": ["https://img.example.com/1.png"]
/// })).unwrap();
///
/// assert!(product.is_enabled);
/// assert_eq!(product.origin_price, 120.0);
/// assert_eq!(product.price, 90.0);
/// assert!(product.description.is_empty());
/// assert_eq!(product.images_url.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The unique identifier of the product.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub id: String,

    /// Display name.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,

    /// List price before discount.
    #[serde(default, deserialize_with = "deserialize_price")]
    pub origin_price: f64,

    /// Sale price.
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,

    /// Whether the product is on sale. Any truthy value counts as enabled.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_enabled: bool,

    /// Category label.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,

    /// Short description.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,

    /// Long-form content.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub content: String,

    /// Primary image.
    #[serde(default, rename = "imageUrl", deserialize_with = "deserialize_text")]
    pub image_url: String,

    /// Additional images, in display order.
    #[serde(default, rename = "imagesUrl", deserialize_with = "deserialize_images")]
    pub images_url: Vec<String>,

    /// Unit of sale, e.g. "cup".
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_unit"
    )]
    pub unit: Option<String>,

    /// Stock count.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_count"
    )]
    pub num: Option<i64>,
}

impl Product {
    /// Label shown in the "enabled" column.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.is_enabled {
            "Enabled"
        } else {
            "Disabled"
        }
    }
}

/// Scalars render as text; `null`, arrays and objects become empty.
fn text_of(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?))
}

fn deserialize_unit<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let unit = text_of(Value::deserialize(deserializer)?);
    Ok((!unit.is_empty()).then_some(unit))
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let price = match &value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) if text.trim().is_empty() => Some(0.0),
        Value::String(text) => text.trim().parse().ok(),
        Value::Null => Some(0.0),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };
    Ok(price.unwrap_or_else(|| {
        tracing::warn!(%value, "Unreadable product price, showing 0");
        0.0
    }))
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

// Same truthiness the admin page applies when rendering the column.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    })
}

// The API sends `null` or omits the list for products without extra images,
// and pads lists with empty strings left over from form inputs.
fn deserialize_images<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let images = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    };
    Ok(images
        .into_iter()
        .filter_map(|item| match item {
            Value::String(url) if !url.is_empty() => Some(url),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_product_deserializes() {
        let product: Product = serde_json::from_value(json!({
            "id": "-Nx1",
            "title": "Espresso",
            "category": "coffee",
            "origin_price": 120,
            "price": 99.5,
            "unit": "cup",
            "num": 3,
            "description": "Short and strong",
            "content": "Single origin",
            "is_enabled": true,
            "imageUrl": "https://img.example.com/main.png",
            "imagesUrl": ["https://img.example.com/1.png", "https://img.example.com/2.png"]
        }))
        .unwrap();

        assert_eq!(product.id, "-Nx1");
        assert_eq!(product.title, "Espresso");
        assert!((product.origin_price - 120.0).abs() < f64::EPSILON);
        assert!((product.price - 99.5).abs() < f64::EPSILON);
        assert!(product.is_enabled);
        assert_eq!(product.image_url, "https://img.example.com/main.png");
        assert_eq!(
            product.images_url,
            vec![
                "https://img.example.com/1.png".to_string(),
                "https://img.example.com/2.png".to_string()
            ]
        );
        assert_eq!(product.unit.as_deref(), Some("cup"));
        assert_eq!(product.num, Some(3));
    }

    #[test]
    fn test_sparse_product_uses_defaults() {
        let product: Product = serde_json::from_value(json!({"title": "Mug"})).unwrap();

        assert_eq!(product.title, "Mug");
        assert!(product.id.is_empty());
        assert!(!product.is_enabled);
        assert!(product.images_url.is_empty());
        assert!(product.unit.is_none());
    }

    #[test]
    fn test_enabled_flag_accepts_integers() {
        let enabled: Product = serde_json::from_value(json!({"is_enabled": 1})).unwrap();
        let disabled: Product = serde_json::from_value(json!({"is_enabled": 0})).unwrap();
        assert!(enabled.is_enabled);
        assert!(!disabled.is_enabled);

        let other: Product = serde_json::from_value(json!({"is_enabled": 2})).unwrap();
        assert!(other.is_enabled);
    }

    #[test]
    fn test_enabled_flag_follows_truthiness() {
        for (raw, expected) in [
            (json!(true), true),
            (json!(false), false),
            (json!(0.0), false),
            (json!(-1), true),
            (json!(""), false),
            (json!("yes"), true),
            (json!(null), false),
        ] {
            let product: Product =
                serde_json::from_value(json!({ "is_enabled": raw.clone() })).unwrap();
            assert_eq!(product.is_enabled, expected, "is_enabled = {raw}");
        }
    }

    #[test]
    fn test_null_and_mistyped_fields_fall_back() {
        let product: Product = serde_json::from_value(json!({
            "id": 42,
            "title": "Mug",
            "description": null,
            "content": ["not", "text"],
            "category": null,
            "imageUrl": null,
            "unit": null,
            "num": "7"
        }))
        .unwrap();

        assert_eq!(product.id, "42");
        assert!(product.description.is_empty());
        assert!(product.content.is_empty());
        assert!(product.category.is_empty());
        assert!(product.image_url.is_empty());
        assert!(product.unit.is_none());
        assert_eq!(product.num, Some(7));
    }

    #[test]
    fn test_prices_accept_numeric_strings() {
        let product: Product =
            serde_json::from_value(json!({"origin_price": " 120.5 ", "price": "100"})).unwrap();
        assert!((product.origin_price - 120.5).abs() < f64::EPSILON);
        assert!((product.price - 100.0).abs() < f64::EPSILON);

        let product: Product =
            serde_json::from_value(json!({"origin_price": null, "price": "free"})).unwrap();
        assert!(product.origin_price.abs() < f64::EPSILON);
        assert!(product.price.abs() < f64::EPSILON);
    }

    #[test]
    fn test_images_null_and_blank_entries() {
        let product: Product = serde_json::from_value(json!({"imagesUrl": null})).unwrap();
        assert!(product.images_url.is_empty());

        let product: Product = serde_json::from_value(
            json!({"imagesUrl": ["", "https://img.example.com/a.png", null, 3]}),
        )
        .unwrap();
        assert_eq!(product.images_url, vec!["https://img.example.com/a.png"]);
    }

    #[test]
    fn test_status_label() {
        let mut product = Product::default();
        assert_eq!(product.status_label(), "Disabled");
        product.is_enabled = true;
        assert_eq!(product.status_label(), "Enabled");
    }
}
