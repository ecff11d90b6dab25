//! Product hotspot overlay.
//!
//! Hit-tests taps against an image's hotspots and produces render markers.
//! A tap that lands on a hotspot is consumed here; the feed controller only
//! forwards unconsumed taps to the media surface.

use serde::Serialize;

use crate::look::Hotspot;
use crate::types::ResourceId;

/// Hit radius around a hotspot centre, in percentage points.
pub const HOTSPOT_HIT_RADIUS: f64 = 4.0;

/// Stagger between marker pulse animations.
pub const MARKER_ANIMATION_STAGGER_MS: u64 = 200;

/// Where a tap on a feed item ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapTarget {
    /// A hotspot took the tap; open the detail view for this product.
    Hotspot {
        hotspot_index: usize,
        product_id: ResourceId,
    },
    /// Nothing on the overlay was hit; the media surface gets the tap.
    Surface,
}

/// Render data for one hotspot marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotMarker {
    pub index: usize,
    pub left_pct: f64,
    pub top_pct: f64,
    pub animation_delay_ms: u64,
    pub label: String,
}

/// Return the first hotspot within [`HOTSPOT_HIT_RADIUS`] of `(x, y)`.
pub fn hit_test(hotspots: &[Hotspot], x: f64, y: f64) -> Option<(usize, &Hotspot)> {
    hotspots.iter().enumerate().find(|(_, h)| {
        let dx = h.x - x;
        let dy = h.y - y;
        (dx * dx + dy * dy).sqrt() <= HOTSPOT_HIT_RADIUS
    })
}

/// Route a tap at percentage coordinates.
pub fn route_tap(hotspots: &[Hotspot], x: f64, y: f64) -> TapTarget {
    match hit_test(hotspots, x, y) {
        Some((hotspot_index, hotspot)) => TapTarget::Hotspot {
            hotspot_index,
            product_id: hotspot.product_id.clone(),
        },
        None => TapTarget::Surface,
    }
}

/// Build the markers to draw over an image.
pub fn markers(hotspots: &[Hotspot]) -> Vec<HotspotMarker> {
    hotspots
        .iter()
        .enumerate()
        .map(|(index, h)| HotspotMarker {
            index,
            left_pct: h.x,
            top_pct: h.y,
            animation_delay_ms: index as u64 * MARKER_ANIMATION_STAGGER_MS,
            label: format!("Product annotation {}", index + 1),
        })
        .collect()
}
