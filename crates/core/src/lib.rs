//! Lookbook domain library.
//!
//! Shared types (looks, products, identifiers), the feed playback
//! controller, hotspot overlay routing and the product detail state
//! machine. Nothing here performs I/O; hosts drive it with events and an
//! injected clock.

pub mod catalog;
pub mod detail;
pub mod error;
pub mod feed;
pub mod fetch;
pub mod look;
pub mod overlay;
pub mod product;
pub mod types;
