use std::fmt;

/// Query hydrating a set of popular slugs into documents.
///
/// Renders as
/// `SELECT * FROM documents WHERE slug NOT_IN ("a", "b") AND slug IN ("c") ORDER BY updateDate DESC LIMIT 10`.
/// The ordering is a hint for the provider, callers re-rank the result.
#[derive(Debug, Clone, Copy)]
pub struct PopularQuery<'a> {
    ignore_slugs: &'a [String],
    slugs: &'a [Option<String>],
    limit: i64,
}

impl<'a> PopularQuery<'a> {
    /// Slugs that are `None` render as empty strings.
    pub fn new(ignore_slugs: &'a [String], slugs: &'a [Option<String>], limit: i64) -> Self {
        Self {
            ignore_slugs,
            slugs,
            limit,
        }
    }
}

impl fmt::Display for PopularQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not_in = quoted_list(self.ignore_slugs.iter().map(String::as_str));
        let slugs = quoted_list(self.slugs.iter().map(|s| s.as_deref().unwrap_or("")));
        write!(
            f,
            "SELECT * FROM documents WHERE slug NOT_IN ({not_in}) AND slug IN ({slugs}) ORDER BY updateDate DESC LIMIT {}",
            self.limit
        )
    }
}

/// `"a", "b"`; an empty list is `""`.
fn quoted_list<'s>(items: impl Iterator<Item = &'s str>) -> String {
    let escaped: Vec<String> = items.map(escape).collect();
    format!("\"{}\"", escaped.join("\", \""))
}

fn escape(slug: &str) -> String {
    slug.replace('\\', "\\\\").replace('"', "\\\"")
}
