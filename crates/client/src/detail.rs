//! Drives [`ProductDetailView`] from the API.

use lookbook_core::detail::{DetailState, ProductDetailView, RequestTag};
use lookbook_core::fetch::FetchError;

use crate::api::LookbookApi;

#[derive(Debug)]
pub struct ProductDetailLoader {
    api: LookbookApi,
    view: ProductDetailView,
}

impl ProductDetailLoader {
    pub fn new(api: LookbookApi) -> Self {
        Self {
            api,
            view: ProductDetailView::new(),
        }
    }

    pub fn state(&self) -> &DetailState {
        self.view.state()
    }

    /// Open the detail page for `raw_id`. Malformed ids fail without a request.
    pub async fn open(&mut self, raw_id: &str) -> &DetailState {
        if let Some(tag) = self.view.begin(raw_id) {
            self.fetch(tag).await;
        }
        self.view.state()
    }

    /// Retry after a transient failure. A no-op in any other state.
    pub async fn retry(&mut self) -> &DetailState {
        if let Some(tag) = self.view.retry() {
            self.fetch(tag).await;
        }
        self.view.state()
    }

    async fn fetch(&mut self, tag: RequestTag) {
        let result = self
            .api
            .get_product(&tag.product_id)
            .await
            .map_err(FetchError::from);
        self.view.complete(&tag, result);
    }
}
