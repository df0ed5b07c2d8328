use async_trait::async_trait;
use serde_json::Value;

use crate::error::PluginError;
use crate::hooks::operation::Operation;

/// Event asked for the ranked list of popular documents.
pub const POPULAR_DOCUMENTS_EVENT: &str = "popular-documents";

/// The host's event system.
///
/// Abstracted as a trait so tests can drive the plugin without a host.
#[async_trait]
pub trait Hooks: Send + Sync {
    /// Subscribe `operation` to `event`.
    fn on(&self, event: &str, operation: Operation);

    /// Dispatch `event` with `payload` and wait for the listeners' answer.
    async fn fetch(&self, event: &str, payload: Value) -> Result<Value, PluginError>;
}
