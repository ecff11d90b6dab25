//! Loads the feed: looks first, then every product they reference.
//!
//! Product lookups run concurrently and fail independently. A product that
//! cannot be fetched becomes a [`ProductSlot::Missing`] placeholder and the
//! rest of the feed still loads.
//!
//! [`ProductSlot::Missing`]: lookbook_core::catalog::ProductSlot::Missing

use futures::stream::{self, StreamExt};
use lookbook_core::catalog::ProductShelf;
use lookbook_core::feed::{FeedLoad, FeedLoadState};
use lookbook_core::fetch::FetchError;
use lookbook_core::look::{unique_product_ids, Look};

use crate::api::LookbookApi;
use crate::error::ClientError;

/// Maximum product requests in flight at once.
pub const PRODUCT_FETCH_CONCURRENCY: usize = 4;

/// Normalized looks plus the products they reference.
#[derive(Debug)]
pub struct LoadedFeed {
    pub looks: Vec<Look>,
    pub products: ProductShelf,
}

/// Fetch and normalize the feed.
///
/// Fails only if the look list itself cannot be fetched. Looks whose
/// references cannot be normalized are dropped with a warning.
pub async fn fetch_feed(api: &LookbookApi) -> Result<LoadedFeed, ClientError> {
    let payloads = api.list_looks().await?;

    let looks: Vec<Look> = payloads
        .into_iter()
        .filter_map(|payload| {
            let raw_id = payload.id.clone();
            match Look::try_from(payload) {
                Ok(look) => Some(look),
                Err(e) => {
                    tracing::warn!(look_id = %raw_id, error = %e, "Dropping malformed look");
                    None
                }
            }
        })
        .collect();

    let ids = unique_product_ids(&looks);
    let mut products = ProductShelf::new();
    products.expect(&ids);

    let results: Vec<_> = stream::iter(ids)
        .map(|id| async move {
            let result = api.get_product(&id).await;
            (id, result)
        })
        .buffered(PRODUCT_FETCH_CONCURRENCY)
        .collect()
        .await;

    for (id, result) in results {
        match result {
            Ok(product) => products.insert(product),
            Err(e) => {
                tracing::warn!(product_id = %id, error = %e, "Product unavailable, showing placeholder");
                products.mark_missing(&id);
            }
        }
    }

    tracing::debug!(
        looks = looks.len(),
        products = products.len(),
        missing = products.missing_count(),
        "Feed loaded"
    );

    Ok(LoadedFeed { looks, products })
}

/// Drives [`FeedLoad`] from the API.
#[derive(Debug)]
pub struct FeedLoader {
    api: LookbookApi,
    load: FeedLoad,
    products: ProductShelf,
}

impl FeedLoader {
    pub fn new(api: LookbookApi) -> Self {
        Self {
            api,
            load: FeedLoad::new(),
            products: ProductShelf::new(),
        }
    }

    pub fn state(&self) -> &FeedLoadState {
        self.load.state()
    }

    pub fn products(&self) -> &ProductShelf {
        &self.products
    }

    /// Load (or reload) the feed.
    pub async fn load(&mut self) -> &FeedLoadState {
        let seq = self.load.begin();
        self.run(seq).await
    }

    /// Reload after a failure. Returns `None` if the current state offers no retry.
    pub async fn retry(&mut self) -> Option<&FeedLoadState> {
        let seq = self.load.retry()?;
        Some(self.run(seq).await)
    }

    async fn run(&mut self, seq: u64) -> &FeedLoadState {
        let result = match fetch_feed(&self.api).await {
            Ok(feed) => {
                self.products = feed.products;
                Ok(feed.looks)
            }
            Err(e) => Err(FetchError::from(e)),
        };
        self.load.complete(seq, result);
        self.load.state()
    }
}
