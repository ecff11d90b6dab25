//! Look domain types and boundary normalization.
//!
//! A look is one feed entry: a single media resource (image or video), an
//! ordered list of product references and, for images, hotspots binding
//! on-image coordinates to products. Payloads arriving from the API may carry
//! product references either as bare identifiers or as expanded objects;
//! [`Look::try_from`] resolves them once so nothing downstream has to care.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::ResourceId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const CONTENT_TYPE_VIDEO: &str = "video";
pub const CONTENT_TYPE_IMAGE: &str = "image";

/// Maximum number of hotspots on a single image look.
pub const MAX_HOTSPOTS_PER_LOOK: usize = 20;

// ---------------------------------------------------------------------------
// Content type
// ---------------------------------------------------------------------------

/// Which playback sub-state machine applies to a look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Image,
}

impl ContentType {
    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => CONTENT_TYPE_VIDEO,
            Self::Image => CONTENT_TYPE_IMAGE,
        }
    }
}

// ---------------------------------------------------------------------------
// Product references
// ---------------------------------------------------------------------------

/// A product reference as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    /// A bare identifier string.
    Id(String),
    /// A populated product document; only its identifier is kept.
    Expanded(ExpandedProductRef),
}

/// The part of an expanded product document needed to recover its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedProductRef {
    #[serde(alias = "_id")]
    pub id: String,
}

impl ProductRef {
    /// Resolve to a validated identifier.
    pub fn normalize(&self) -> Result<ResourceId, CoreError> {
        match self {
            Self::Id(raw) => ResourceId::parse(raw),
            Self::Expanded(expanded) => ResourceId::parse(&expanded.id),
        }
    }
}

// ---------------------------------------------------------------------------
// Hotspots
// ---------------------------------------------------------------------------

/// A tappable marker on an image, in percentage coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    #[validate(range(min = 0.0, max = 100.0))]
    pub x: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub y: f64,
    pub product_id: ResourceId,
}

/// Hotspot as received from the API, before its product reference is resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotPayload {
    pub x: f64,
    pub y: f64,
    pub product_id: ProductRef,
}

/// Check a look's hotspot set against its content type and product list.
///
/// Hotspots are only allowed on image looks, must lie inside the media
/// (0..=100 on both axes) and must point at a product the look references.
pub fn validate_hotspots(
    content_type: ContentType,
    hotspots: &[Hotspot],
    product_ids: &[ResourceId],
) -> Result<(), CoreError> {
    if hotspots.is_empty() {
        return Ok(());
    }
    if content_type != ContentType::Image {
        return Err(CoreError::Validation(
            "hotspots are only allowed on image looks".to_string(),
        ));
    }
    if hotspots.len() > MAX_HOTSPOTS_PER_LOOK {
        return Err(CoreError::Validation(format!(
            "look has {} hotspots, maximum is {MAX_HOTSPOTS_PER_LOOK}",
            hotspots.len()
        )));
    }
    for (i, hotspot) in hotspots.iter().enumerate() {
        hotspot
            .validate()
            .map_err(|e| CoreError::Validation(format!("hotspots[{i}]: {e}")))?;
        if !product_ids.contains(&hotspot.product_id) {
            return Err(CoreError::Validation(format!(
                "hotspots[{i}] references product {} which is not part of the look",
                hotspot.product_id
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Look
// ---------------------------------------------------------------------------

/// A look as received from the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookPayload {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub content_type: ContentType,
    pub media_url: String,
    #[serde(default)]
    pub product_ids: Vec<ProductRef>,
    #[serde(default)]
    pub hotspots: Vec<HotspotPayload>,
}

/// A look with every reference resolved to a [`ResourceId`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Look {
    pub id: ResourceId,
    pub title: String,
    pub content_type: ContentType,
    pub media_url: String,
    pub product_ids: Vec<ResourceId>,
    pub hotspots: Vec<Hotspot>,
}

impl Look {
    pub fn is_video(&self) -> bool {
        self.content_type == ContentType::Video
    }
}

impl TryFrom<LookPayload> for Look {
    type Error = CoreError;

    fn try_from(payload: LookPayload) -> Result<Self, Self::Error> {
        let id = ResourceId::parse(&payload.id)?;

        let product_ids = payload
            .product_ids
            .iter()
            .map(ProductRef::normalize)
            .collect::<Result<Vec<_>, _>>()?;

        let hotspots = payload
            .hotspots
            .into_iter()
            .map(|h| {
                Ok(Hotspot {
                    x: h.x,
                    y: h.y,
                    product_id: h.product_id.normalize()?,
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        validate_hotspots(payload.content_type, &hotspots, &product_ids)?;

        Ok(Self {
            id,
            title: payload.title,
            content_type: payload.content_type,
            media_url: payload.media_url,
            product_ids,
            hotspots,
        })
    }
}

/// Collect the distinct product ids across looks, keeping first-seen order.
pub fn unique_product_ids(looks: &[Look]) -> Vec<ResourceId> {
    let mut ids: Vec<ResourceId> = Vec::new();
    for id in looks.iter().flat_map(|l| l.product_ids.iter()) {
        if !ids.contains(id) {
            ids.push(id.clone());
        }
    }
    ids
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
