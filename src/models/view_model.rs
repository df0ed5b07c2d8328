use serde_json::{Map, Value};

/// The bag of data assembled for rendering a page.
///
/// Owned by the host. Enrichment plugins add keys to it.
pub type ViewModel = Map<String, Value>;
