use serde_json::Value;

/// One entry of a popularity response.
///
/// The popularity source may attach other fields (view counts, titles),
/// only `slug` is read. Entries without a string `slug` are kept so that
/// ranking positions line up with the response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopularityEntry {
    pub slug: Option<String>,
}

impl PopularityEntry {
    pub fn from_value(value: &Value) -> Self {
        Self {
            slug: value
                .get("slug")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Parse a raw popularity response. Anything but an array yields no entries.
    pub fn parse_response(response: &Value) -> Vec<Self> {
        response
            .as_array()
            .map(|entries| entries.iter().map(Self::from_value).collect())
            .unwrap_or_default()
    }
}
