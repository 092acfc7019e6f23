use crate::error::Result;
use crate::models::{Listing, Purpose};
use async_trait::async_trait;

/// Common trait for listings providers
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the first page of listings for `purpose` in the given locations
    async fn fetch(&self, purpose: Purpose, location_ids: &[u32]) -> Result<Vec<Listing>>;

    /// Get the name of the provider
    fn source_name(&self) -> &'static str;
}
