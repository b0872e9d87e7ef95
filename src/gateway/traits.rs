use async_trait::async_trait;

use crate::gateway::error::RemoteError;
use crate::models::Property;

/// Common trait for anything that can produce the property snapshot.
///
/// This allows swapping the live backend for cached or synthetic listings
/// without touching the callers.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the current property list.
    async fn list_properties(&self) -> Result<Vec<Property>, RemoteError>;

    /// Return the name of the backing source.
    fn source_name(&self) -> &'static str;
}
