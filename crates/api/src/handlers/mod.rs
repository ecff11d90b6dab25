//! Request handlers, one module per resource.

pub mod looks;
pub mod products;

use lookbook_core::error::CoreError;
use lookbook_core::types::ResourceId;

/// Parse a path identifier, rejecting malformed ids with `message` before
/// any query runs.
pub(crate) fn parse_path_id(raw: &str, message: &str) -> Result<ResourceId, CoreError> {
    ResourceId::parse(raw).map_err(|_| CoreError::Validation(message.to_string()))
}
