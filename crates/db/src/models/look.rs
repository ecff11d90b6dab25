//! Look entity model and DTOs.

use lookbook_core::error::CoreError;
use lookbook_core::look::{validate_hotspots, ContentType, Hotspot};
use lookbook_core::types::{ResourceId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A look with its ordered product ids and hotspots aggregated in.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Look {
    pub id: String,
    pub title: String,
    pub content_type: String,
    pub media_url: String,
    /// Ordered by `look_products.position`.
    pub product_ids: Vec<String>,
    pub hotspots: Json<Vec<Hotspot>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A hotspot on an image look, in percentage coordinates.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotspot {
    #[validate(range(min = 0.0, max = 100.0))]
    pub x: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub y: f64,
    pub product_id: ResourceId,
}

/// DTO for inserting a look together with its product references.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLook {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub content_type: ContentType,
    #[validate(url)]
    pub media_url: String,
    #[serde(default)]
    pub product_ids: Vec<ResourceId>,
    #[serde(default)]
    #[validate(nested)]
    pub hotspots: Vec<CreateHotspot>,
}

impl CreateLook {
    /// Field validation plus the cross-field rules: no duplicate product
    /// references, and hotspots only on images pointing at the look's products.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()?;

        for (i, id) in self.product_ids.iter().enumerate() {
            if self.product_ids[..i].contains(id) {
                return Err(CoreError::Validation(format!(
                    "product {id} is referenced more than once"
                )));
            }
        }

        let hotspots: Vec<Hotspot> = self
            .hotspots
            .iter()
            .map(|h| Hotspot {
                x: h.x,
                y: h.y,
                product_id: h.product_id.clone(),
            })
            .collect();
        validate_hotspots(self.content_type, &hotspots, &self.product_ids)
    }
}
