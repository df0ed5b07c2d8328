use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::error::PluginError;
use crate::hooks::dispatcher::Hooks;
use crate::storage::client::StorageProvider;

/// Everything an operation needs from the host, passed explicitly.
#[derive(Clone, Default)]
pub struct PluginContext {
    /// The full host configuration. The plugin reads its own block from it.
    pub config: Value,
    /// The host's event system, if any.
    pub hooks: Option<Arc<dyn Hooks>>,
    /// The host's storage provider, if any.
    pub storage: Option<Arc<dyn StorageProvider>>,
}

impl PluginContext {
    pub fn new(config: Value) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Build a context from host configuration files (see [`crate::settings`]).
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self, PluginError> {
        Ok(Self::new(crate::settings::load_host_config(paths)?))
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn Hooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn with_storage(mut self, storage: Arc<dyn StorageProvider>) -> Self {
        self.storage = Some(storage);
        self
    }
}

impl fmt::Debug for PluginContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginContext")
            .field("config", &self.config)
            .field("hooks", &self.hooks.is_some())
            .field("storage", &self.storage.is_some())
            .finish()
    }
}
