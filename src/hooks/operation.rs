use std::fmt;

use serde_json::Value;

use crate::models::view_model::ViewModel;

/// Plugin operations a host event can be bound to.
///
/// Hosts name operations in their `events` configuration; names resolve
/// through [`Operation::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Enrich a view-model with popular documents.
    Callback,
    /// Check a host configuration.
    ValidateConfig,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Callback, Operation::ValidateConfig];

    /// The name hosts use in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Callback => "callback",
            Operation::ValidateConfig => "validateConfig",
        }
    }

    /// Resolve an operation name.
    ///
    /// Matching ignores case, `_` and `-`, so `validateConfig`,
    /// `validate_config` and `validate-config` all resolve.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|op| op.name().to_lowercase() == normalized)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a host hands to a subscribed operation when its event fires.
#[derive(Debug)]
pub enum HookPayload<'a> {
    ViewModel(&'a mut ViewModel),
    Config(&'a Value),
}
