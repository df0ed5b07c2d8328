use std::path::Path;

use config::{Config, File};
use serde_json::Value;

use crate::error::PluginError;

/// Load a host configuration from one or more files.
///
/// The format follows the extension (`.yaml`, `.toml`, `.json`, ...). Later
/// files override earlier ones key by key, so a site file can sit on top of
/// a shared base. Every file must exist.
pub fn load_host_config<P: AsRef<Path>>(paths: &[P]) -> Result<Value, PluginError> {
    let mut builder = Config::builder();
    for path in paths {
        tracing::debug!("Loading host configuration from {}", path.as_ref().display());
        builder = builder.add_source(File::from(path.as_ref()).required(true));
    }

    let settings = builder
        .build()
        .map_err(|e| PluginError::Config(format!("Failed to load host configuration: {e}")))?;

    settings
        .try_deserialize::<Value>()
        .map_err(|e| PluginError::Config(format!("Failed to read host configuration: {e}")))
}
