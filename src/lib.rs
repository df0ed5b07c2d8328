pub mod context;
pub mod error;
pub mod settings;
pub mod models {
    pub mod document;
    pub mod popularity;
    pub mod view_model;
}
pub mod hooks {
    pub mod dispatcher;
    pub mod operation;
}
pub mod storage {
    pub mod client;
    pub mod query;
}
pub mod plugin {
    pub mod config;
    pub mod enricher;
}

pub use context::PluginContext;
pub use error::PluginError;
pub use hooks::dispatcher::Hooks;
pub use hooks::operation::{HookPayload, Operation};
pub use models::document::Document;
pub use models::view_model::ViewModel;
pub use plugin::config::{PluginConfig, CONFIG_KEY};
pub use plugin::enricher::PopularDocuments;
pub use storage::client::StorageProvider;
