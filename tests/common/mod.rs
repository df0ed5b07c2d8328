use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use serde_json::{json, Value};

use vm_popular_documents::{
    Document, Hooks, Operation, PluginContext, PluginError, StorageProvider, CONFIG_KEY,
};

mock! {
    pub HookSystem {}

    #[async_trait]
    impl Hooks for HookSystem {
        fn on(&self, event: &str, operation: Operation);
        async fn fetch(&self, event: &str, payload: Value) -> Result<Value, PluginError>;
    }
}

mock! {
    pub StorageBackend {}

    #[async_trait]
    impl StorageProvider for StorageBackend {
        async fn get_query(&self, query: &str) -> Result<Vec<Option<Document>>, PluginError>;
    }
}

/// Hooks that record subscriptions and answer every fetch with a fixed value.
#[derive(Default)]
pub struct RecordingHooks {
    pub response: Value,
    pub subscriptions: Mutex<Vec<(String, Operation)>>,
}

impl RecordingHooks {
    pub fn answering(response: Value) -> Self {
        Self {
            response,
            ..Self::default()
        }
    }

    pub fn subscriptions(&self) -> Vec<(String, Operation)> {
        self.subscriptions.lock().unwrap().clone()
    }
}

#[async_trait]
impl Hooks for RecordingHooks {
    fn on(&self, event: &str, operation: Operation) {
        self.subscriptions
            .lock()
            .unwrap()
            .push((event.to_string(), operation));
    }

    async fn fetch(&self, _event: &str, _payload: Value) -> Result<Value, PluginError> {
        Ok(self.response.clone())
    }
}

/// Install a test subscriber once per test binary. `RUST_LOG` overrides the filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vm_popular_documents=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// A host configuration with `block` under the plugin's key.
pub fn host_config(block: Value) -> Value {
    json!({ CONFIG_KEY: block })
}

/// Context wired to the given collaborators.
pub fn context(
    block: Value,
    hooks: impl Hooks + 'static,
    storage: impl StorageProvider + 'static,
) -> PluginContext {
    PluginContext::new(host_config(block))
        .with_hooks(Arc::new(hooks))
        .with_storage(Arc::new(storage))
}

/// The two documents the host fixtures store.
pub fn stored_documents() -> Vec<Option<Document>> {
    vec![
        Some(
            Document::new("good-title")
                .with_field("updateDate", Value::Null)
                .with_field("createDate", "2019-04-20T00:00:00.000Z"),
        ),
        Some(
            Document::new("fake-title")
                .with_field("updateDate", "2019-04-21T00:00:00.000Z")
                .with_field("createDate", "2019-04-21T00:00:00.000Z"),
        ),
    ]
}

/// `stored_documents` as they should appear on a view-model.
pub fn stored_documents_json() -> Value {
    json!([
        {
            "updateDate": null,
            "createDate": "2019-04-20T00:00:00.000Z",
            "slug": "good-title",
        },
        {
            "updateDate": "2019-04-21T00:00:00.000Z",
            "createDate": "2019-04-21T00:00:00.000Z",
            "slug": "fake-title",
        },
    ])
}
