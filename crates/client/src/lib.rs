//! HTTP client for the Lookbook API.
//!
//! [`LookbookApi`] wraps the REST endpoints. [`FeedLoader`] and
//! [`ProductDetailLoader`] drive the core load state machines from it.

pub mod api;
pub mod config;
pub mod detail;
pub mod error;
pub mod feed_loader;

pub use api::LookbookApi;
pub use config::ClientConfig;
pub use detail::ProductDetailLoader;
pub use error::ClientError;
pub use feed_loader::{FeedLoader, LoadedFeed};
