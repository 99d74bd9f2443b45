use crate::model::{FetchError, Product};

/// Read-only access to the externally owned product collection.
#[async_trait::async_trait]
pub trait ProductSource: Send + Sync {
    /// Returns every product, newest `posted_date` first.
    async fn fetch_all_products(&self) -> Result<Vec<Product>, FetchError>;
}
