use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::PluginError;

/// Namespace of this plugin's block inside the host configuration.
pub const CONFIG_KEY: &str = "uttori-plugin-vm-popular-documents";

/// Configuration for the popular documents enricher.
///
/// Hosts only supply the fields they want to change; everything else comes
/// from [`PluginConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// View-model key the documents are written to.
    pub key: String,
    /// Maximum number of documents to request. Values below 1 disable the lookup.
    #[serde(deserialize_with = "whole_number")]
    pub limit: i64,
    /// Slugs never considered popular (e.g. the home page).
    pub ignore_slugs: Vec<String>,
    /// Reverse the popularity response before ranking. Popularity sources
    /// report least popular first unless configured otherwise.
    pub reverse_ranking: bool,
    /// Operation name -> events to subscribe it to. Only read by `register`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Value>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            key: "popularDocuments".to_string(),
            limit: 10,
            ignore_slugs: Vec::new(),
            reverse_ranking: true,
            events: None,
        }
    }
}

impl PluginConfig {
    /// Merge the plugin block of a host configuration over the defaults.
    ///
    /// User values win field by field; `null` values count as absent.
    /// A missing block yields the defaults.
    pub fn from_host_config(host: &Value) -> Result<Self, PluginError> {
        let mut merged = match serde_json::to_value(Self::default()) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        if let Some(Value::Object(user)) = host.get(CONFIG_KEY) {
            for (field, value) in user {
                if !value.is_null() {
                    merged.insert(field.clone(), value.clone());
                }
            }
        }

        serde_json::from_value(Value::Object(merged)).map_err(|e| {
            PluginError::Config(format!("'{CONFIG_KEY}' could not be read: {e}."))
        })
    }

    /// Like [`PluginConfig::from_host_config`], but never fails.
    ///
    /// Numeric strings are accepted for `limit` and scalar keys are turned
    /// into strings. Any other field that cannot be read keeps its default
    /// and is logged.
    pub fn from_host_config_lossy(host: &Value) -> Self {
        let mut merged = match serde_json::to_value(Self::default()) {
            Ok(Value::Object(map)) => map,
            _ => return Self::default(),
        };

        if let Some(Value::Object(user)) = host.get(CONFIG_KEY) {
            for (field, value) in user {
                if value.is_null() {
                    continue;
                }
                let mut candidate = merged.clone();
                candidate.insert(field.clone(), coerce(field, value));
                match serde_json::from_value::<Self>(Value::Object(candidate.clone())) {
                    Ok(_) => merged = candidate,
                    Err(e) => tracing::warn!("`{field}` could not be read, using the default: {e}"),
                }
            }
        }

        serde_json::from_value(Value::Object(merged)).unwrap_or_default()
    }
}

fn coerce(field: &str, value: &Value) -> Value {
    match (field, value) {
        ("key", Value::Number(n)) => Value::String(n.to_string()),
        ("key", Value::Bool(b)) => Value::String(b.to_string()),
        ("limit", Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map_or_else(|| value.clone(), Value::Number),
        _ => value.clone(),
    }
}

/// Check the shape of the plugin block in a host configuration.
pub fn validate(config: &Value) -> Result<(), PluginError> {
    tracing::debug!("Validating config...");

    let block = match config.get(CONFIG_KEY) {
        Some(block) if !block.is_null() => block,
        _ => return Err(config_error(format!("'{CONFIG_KEY}' configuration key is missing."))),
    };

    if present(block, "key").is_some_and(|key| !key.is_string()) {
        return Err(config_error("`key` should be a valid Object key string.".into()));
    }
    if present(block, "limit").is_some_and(|limit| !limit.is_number()) {
        return Err(config_error("`limit` should be a number.".into()));
    }
    if present(block, "ignore_slugs").is_some_and(|slugs| !slugs.is_array()) {
        return Err(config_error("`ignore_slugs` should be an array.".into()));
    }

    tracing::debug!("Validated config.");
    Ok(())
}

fn present<'a>(block: &'a Value, field: &str) -> Option<&'a Value> {
    block.get(field).filter(|value| !value.is_null())
}

fn config_error(message: String) -> PluginError {
    let error = PluginError::Config(message);
    tracing::debug!("{error}");
    error
}

/// Any JSON number, rounded down. Hosts written in JavaScript hand out
/// floats for what are conceptually counts.
///
/// Values outside the `i64` range saturate: a huge limit stays huge and a
/// huge negative one still disables the lookup.
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = f64::deserialize(deserializer)?.floor();
    if value.is_nan() {
        return Err(D::Error::custom("`limit` is not a number"));
    }
    Ok(value.clamp(i64::MIN as f64, i64::MAX as f64) as i64)
}
