use futures::future::BoxFuture;
use serde_json::{json, Value};

use crate::context::PluginContext;
use crate::error::PluginError;
use crate::hooks::dispatcher::POPULAR_DOCUMENTS_EVENT;
use crate::hooks::operation::{HookPayload, Operation};
use crate::models::document::Document;
use crate::models::popularity::PopularityEntry;
use crate::models::view_model::ViewModel;
use crate::plugin::config::{validate, PluginConfig, CONFIG_KEY};
use crate::storage::query::PopularQuery;

/// View-model enrichment: popular documents.
///
/// Stateless. Everything it needs arrives through [`PluginContext`].
pub struct PopularDocuments;

impl PopularDocuments {
    /// The key this plugin's block lives under in the host configuration.
    pub fn config_key() -> &'static str {
        CONFIG_KEY
    }

    pub fn default_config() -> PluginConfig {
        PluginConfig::default()
    }

    /// Validate the plugin block of a host configuration.
    ///
    /// The context is unused; it keeps the signature in line with the other
    /// operations a host can bind to events.
    pub fn validate_config(config: &Value, _context: &PluginContext) -> Result<(), PluginError> {
        validate(config)
    }

    /// Subscribe the configured operations to their events on the host's hooks.
    ///
    /// `events` maps operation names to event names. Unknown operation names
    /// are skipped.
    pub fn register(context: &PluginContext) -> Result<(), PluginError> {
        tracing::debug!("register");
        let hooks = context.hooks.as_ref().ok_or(PluginError::MissingDispatcher)?;
        let config = PluginConfig::from_host_config(&context.config)?;
        let events = config.events.as_ref().ok_or(PluginError::MissingEvents)?;

        let Some(bindings) = events.as_object() else {
            tracing::warn!("`events` should map operation names to event lists, nothing registered");
            return Ok(());
        };

        for (method, event_names) in bindings {
            let Some(event_names) = event_names.as_array() else {
                tracing::warn!("Events for \"{method}\" should be a list, skipping");
                continue;
            };

            let operation = Operation::from_name(method);
            for event in event_names {
                let Some(event) = event.as_str() else {
                    tracing::warn!("Event names for \"{method}\" should be strings, skipping {event}");
                    continue;
                };
                match operation {
                    Some(operation) => hooks.on(event, operation),
                    None => tracing::warn!("Missing function \"{method}\" for key \"{event}\""),
                }
            }
        }

        Ok(())
    }

    /// Add the popular documents to `view_model` under the configured key.
    ///
    /// Never fails: lookup failures leave an empty list behind and config
    /// fields that cannot be read fall back to their defaults.
    pub async fn callback(mut view_model: ViewModel, context: &PluginContext) -> ViewModel {
        Self::enrich(&mut view_model, context).await;
        view_model
    }

    /// Run a subscribed operation. Hosts call this when a bound event fires.
    pub fn handle<'a>(
        operation: Operation,
        payload: HookPayload<'a>,
        context: &'a PluginContext,
    ) -> BoxFuture<'a, Result<(), PluginError>> {
        Box::pin(async move {
            match (operation, payload) {
                (Operation::Callback, HookPayload::ViewModel(view_model)) => {
                    Self::enrich(view_model, context).await;
                    Ok(())
                }
                (Operation::ValidateConfig, HookPayload::Config(config)) => {
                    Self::validate_config(config, context)
                }
                (operation, _) => Err(PluginError::UnexpectedPayload(operation.name())),
            }
        })
    }

    async fn enrich(view_model: &mut ViewModel, context: &PluginContext) {
        tracing::debug!("callback");
        let config = PluginConfig::from_host_config_lossy(&context.config);
        tracing::debug!(
            "key: \"{}\", limit: {}, ignore_slugs: [{}]",
            config.key,
            config.limit,
            config.ignore_slugs.join(",")
        );

        if config.limit < 1 {
            view_model.insert(config.key, Value::Array(Vec::new()));
            return;
        }

        let results = match Self::popular_documents(&config, context).await {
            Ok(results) => results,
            Err(e) => {
                tracing::debug!("Error: {e}");
                Vec::new()
            }
        };

        let documents: Vec<Value> = results.into_iter().flatten().map(Value::from).collect();
        tracing::debug!("results: {}", documents.len());
        view_model.insert(config.key, Value::Array(documents));
    }

    /// Fetch the ranking, hydrate it from storage and put it back in rank order.
    async fn popular_documents(
        config: &PluginConfig,
        context: &PluginContext,
    ) -> Result<Vec<Option<Document>>, PluginError> {
        let hooks = context.hooks.as_ref().ok_or(PluginError::MissingDispatcher)?;
        let response = hooks
            .fetch(POPULAR_DOCUMENTS_EVENT, json!({ "limit": config.limit }))
            .await?;

        let entries = PopularityEntry::parse_response(&response);
        if entries.is_empty() {
            tracing::debug!("No popular documents returned");
            return Ok(Vec::new());
        }
        tracing::debug!("popular: {}", entries.len());

        let mut ranking: Vec<Option<String>> = entries.into_iter().map(|e| e.slug).collect();
        if config.reverse_ranking {
            ranking.reverse();
        }

        let storage = context
            .storage
            .as_ref()
            .ok_or_else(|| PluginError::Storage("No storage provider in context".into()))?;
        let query = PopularQuery::new(&config.ignore_slugs, &ranking, config.limit).to_string();
        let mut results = storage.get_query(&query).await?;

        // Stable: documents outside the ranking keep their storage order, ahead of ranked ones.
        results.sort_by_key(|doc| rank(doc.as_ref(), &ranking));
        Ok(results)
    }
}

fn rank(doc: Option<&Document>, ranking: &[Option<String>]) -> i64 {
    doc.and_then(Document::slug)
        .and_then(|slug| ranking.iter().position(|s| s.as_deref() == Some(slug)))
        .map_or(-1, |position| position as i64)
}
