//! Product detail view state machine.
//!
//! `Idle -> Loading(tag) -> Loaded(product) | Failed(failure)`. Every request
//! is tagged with the identifier it was issued for plus a sequence number, and
//! a response is only applied if its tag is still the current one. Rapid
//! navigation therefore never lets an older response overwrite a newer one.

use serde::Serialize;

use crate::fetch::FetchError;
use crate::product::Product;
use crate::types::ResourceId;

pub const MESSAGE_INVALID_ID: &str = "Invalid product ID format";
pub const MESSAGE_NOT_FOUND: &str = "Product not found";
pub const MESSAGE_TRANSIENT: &str = "Failed to load product details. Please try again.";

/// Identifies one in-flight product request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestTag {
    pub product_id: ResourceId,
    pub seq: u64,
}

/// User-facing failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailFailure {
    InvalidId,
    NotFound,
    Transient,
}

impl DetailFailure {
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidId => MESSAGE_INVALID_ID,
            Self::NotFound => MESSAGE_NOT_FOUND,
            Self::Transient => MESSAGE_TRANSIENT,
        }
    }

    /// Whether the view should show a retry button.
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Transient)
    }
}

impl From<&FetchError> for DetailFailure {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::Validation(_) => Self::InvalidId,
            FetchError::NotFound(_) => Self::NotFound,
            FetchError::Transient(_) => Self::Transient,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Idle,
    Loading(RequestTag),
    Loaded(Product),
    Failed(DetailFailure),
}

/// Fetch-and-render state for a single product page.
#[derive(Debug)]
pub struct ProductDetailView {
    state: DetailState,
    next_seq: u64,
    last_id: Option<ResourceId>,
}

impl Default for ProductDetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductDetailView {
    pub fn new() -> Self {
        Self {
            state: DetailState::Idle,
            next_seq: 0,
            last_id: None,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Start loading the product named by `raw_id`.
    ///
    /// A malformed identifier fails immediately with
    /// [`DetailFailure::InvalidId`] and no request tag is returned, so the
    /// caller issues no request.
    pub fn begin(&mut self, raw_id: &str) -> Option<RequestTag> {
        match ResourceId::parse(raw_id) {
            Ok(id) => Some(self.issue(id)),
            Err(_) => {
                tracing::debug!(raw_id, "Rejected malformed product id");
                self.last_id = None;
                self.state = DetailState::Failed(DetailFailure::InvalidId);
                None
            }
        }
    }

    /// Re-issue the last request after a retryable failure.
    pub fn retry(&mut self) -> Option<RequestTag> {
        match &self.state {
            DetailState::Failed(failure) if failure.retryable() => {
                let id = self.last_id.clone()?;
                Some(self.issue(id))
            }
            _ => None,
        }
    }

    /// Apply a response. Returns `false` if the response was stale and dropped.
    pub fn complete(&mut self, tag: &RequestTag, result: Result<Product, FetchError>) -> bool {
        match &self.state {
            DetailState::Loading(current) if current == tag => {}
            _ => {
                tracing::debug!(
                    product_id = %tag.product_id,
                    seq = tag.seq,
                    "Discarding stale product response"
                );
                return false;
            }
        }

        self.state = match result {
            Ok(product) => DetailState::Loaded(product),
            Err(err) => {
                tracing::warn!(product_id = %tag.product_id, error = %err, "Product fetch failed");
                DetailState::Failed(DetailFailure::from(&err))
            }
        };
        true
    }

    fn issue(&mut self, id: ResourceId) -> RequestTag {
        self.next_seq += 1;
        let tag = RequestTag {
            product_id: id.clone(),
            seq: self.next_seq,
        };
        self.last_id = Some(id);
        self.state = DetailState::Loading(tag.clone());
        tag
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const P1: &str = "650000000000000000000101";
    const P2: &str = "650000000000000000000102";

    fn product(id: &str) -> Product {
        Product {
            id: ResourceId::parse(id).unwrap(),
            name: "Minimalist Watch".into(),
            price: 199.99,
            description: String::new(),
            image_url: "https://example.com/watch.jpg".into(),
        }
    }

    #[test]
    fn malformed_id_fails_without_request() {
        let mut view = ProductDetailView::new();
        assert!(view.begin("xyz").is_none());
        assert_eq!(view.state(), &DetailState::Failed(DetailFailure::InvalidId));
        assert!(view.retry().is_none());
    }

    #[test]
    fn successful_load() {
        let mut view = ProductDetailView::new();
        let tag = view.begin(P1).unwrap();
        assert_matches!(view.state(), DetailState::Loading(_));

        assert!(view.complete(&tag, Ok(product(P1))));
        assert_matches!(view.state(), DetailState::Loaded(p) if p.id.as_str() == P1);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut view = ProductDetailView::new();
        let first = view.begin(P1).unwrap();
        let second = view.begin(P2).unwrap();

        assert!(!view.complete(&first, Ok(product(P1))));
        assert_eq!(view.state(), &DetailState::Loading(second.clone()));

        assert!(view.complete(&second, Ok(product(P2))));
        assert_matches!(view.state(), DetailState::Loaded(p) if p.id.as_str() == P2);
    }

    #[test]
    fn same_id_reissued_gets_new_tag() {
        let mut view = ProductDetailView::new();
        let first = view.begin(P1).unwrap();
        let second = view.begin(P1).unwrap();
        assert_ne!(first, second);
        assert!(!view.complete(&first, Ok(product(P1))));
    }

    #[test]
    fn not_found_is_not_retryable() {
        let mut view = ProductDetailView::new();
        let tag = view.begin(P1).unwrap();
        view.complete(&tag, Err(FetchError::NotFound("Product not found".into())));

        assert_eq!(view.state(), &DetailState::Failed(DetailFailure::NotFound));
        assert!(view.retry().is_none());
        assert_eq!(DetailFailure::NotFound.message(), "Product not found");
    }

    #[test]
    fn transient_failure_can_be_retried() {
        let mut view = ProductDetailView::new();
        let tag = view.begin(P1).unwrap();
        view.complete(&tag, Err(FetchError::Transient("timeout".into())));
        assert_eq!(view.state(), &DetailState::Failed(DetailFailure::Transient));

        let retry = view.retry().unwrap();
        assert_eq!(retry.product_id.as_str(), P1);
        assert!(retry.seq > tag.seq);
        assert!(view.complete(&retry, Ok(product(P1))));
    }

    #[test]
    fn server_validation_error_maps_to_invalid_id() {
        let mut view = ProductDetailView::new();
        let tag = view.begin(P1).unwrap();
        view.complete(&tag, Err(FetchError::Validation("Invalid product ID format".into())));
        assert_eq!(view.state(), &DetailState::Failed(DetailFailure::InvalidId));
    }
}
