use thiserror::Error;

/// Plugin-wide error types.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Config Error: {0}")]
    Config(String),

    #[error("Missing event dispatcher in 'context.hooks.on(event, callback)' format.")]
    MissingDispatcher,

    #[error("Missing events to listen for in 'config.events'.")]
    MissingEvents,

    #[error("Hook error: {0}")]
    Hook(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unexpected payload for operation '{0}'")]
    UnexpectedPayload(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Helper conversion from anyhow::Error
impl From<anyhow::Error> for PluginError {
    fn from(err: anyhow::Error) -> Self {
        PluginError::Internal(err.to_string())
    }
}
