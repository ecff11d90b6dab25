//! Product domain type as consumed by the feed and the detail view.

use serde::{Deserialize, Serialize};

use crate::types::ResourceId;

/// Upper bound accepted for a product price.
pub const MAX_PRICE: f64 = 1_000_000.0;

/// A product shown on a product card or detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: ResourceId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
}

impl Product {
    /// Price formatted for display, e.g. `$129.99`.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_api_shape() {
        let product: Product = serde_json::from_value(json!({
            "id": "650000000000000000000101",
            "name": "Classic White Sneakers",
            "price": 129.99,
            "description": "Leather sneakers",
            "imageUrl": "https://example.com/sneakers.jpg"
        }))
        .unwrap();

        assert_eq!(product.name, "Classic White Sneakers");
        assert_eq!(product.display_price(), "$129.99");
    }

    #[test]
    fn display_price_pads_cents() {
        let product: Product = serde_json::from_value(json!({
            "_id": "650000000000000000000101",
            "name": "Cap",
            "price": 30,
            "imageUrl": "https://example.com/cap.jpg"
        }))
        .unwrap();

        assert_eq!(product.display_price(), "$30.00");
        assert!(product.description.is_empty());
    }
}
