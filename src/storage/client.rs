use async_trait::async_trait;

use crate::error::PluginError;
use crate::models::document::Document;

/// Trait for document queries against the host's storage provider.
///
/// Abstracted as a trait so tests can use a mock without a real store.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Run a query (see [`crate::storage::query::PopularQuery`]).
    ///
    /// Providers may return `None` holes for slugs they could not resolve.
    async fn get_query(&self, query: &str) -> Result<Vec<Option<Document>>, PluginError>;
}
