//! Browser-support queries and the target matrix they resolve to.

use lightningcss::targets::{Browsers, Targets};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The query used when none is configured.
pub const DEFAULT_BROWSER_QUERY: &str = "defaults";

/// A browserslist query, given as one string or a list of strings.
///
/// # Example
///
/// ```rust
/// use vaultcss::BrowserQuery;
///
/// let one: BrowserQuery = serde_json::from_str(r#""last 2 versions""#).unwrap();
/// let many: BrowserQuery = serde_json::from_str(r#"["> 1%", "not dead"]"#).unwrap();
///
/// assert_eq!(one.queries(), vec!["last 2 versions"]);
/// assert_eq!(many.queries(), vec!["> 1%", "not dead"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BrowserQuery {
    One(String),
    Many(Vec<String>),
}

impl BrowserQuery {
    /// The individual queries, in order.
    pub fn queries(&self) -> Vec<&str> {
        match self {
            BrowserQuery::One(query) => vec![query.as_str()],
            BrowserQuery::Many(queries) => queries.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for BrowserQuery {
    fn default() -> Self {
        BrowserQuery::One(DEFAULT_BROWSER_QUERY.to_string())
    }
}

impl From<&str> for BrowserQuery {
    fn from(query: &str) -> Self {
        BrowserQuery::One(query.to_string())
    }
}

impl From<String> for BrowserQuery {
    fn from(query: String) -> Self {
        BrowserQuery::One(query)
    }
}

impl From<Vec<String>> for BrowserQuery {
    fn from(queries: Vec<String>) -> Self {
        BrowserQuery::Many(queries)
    }
}

impl From<Vec<&str>> for BrowserQuery {
    fn from(queries: Vec<&str>) -> Self {
        BrowserQuery::Many(queries.into_iter().map(str::to_string).collect())
    }
}

/// Minimum browser versions the transform must support.
///
/// Resolved once from a [`BrowserQuery`] and immutable afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetMatrix {
    browsers: Option<Browsers>,
}

impl TargetMatrix {
    /// Resolves `query` against the bundled browser data.
    pub fn from_query(query: &BrowserQuery) -> Result<Self, ConfigError> {
        let queries = query.queries();
        let browsers =
            Browsers::from_browserslist(queries.iter().copied()).map_err(|e| {
                ConfigError::Targets {
                    query: queries.iter().map(|q| q.to_string()).collect(),
                    message: e.to_string(),
                }
            })?;
        Ok(Self { browsers })
    }

    /// A matrix with no browser constraints; output is left as written.
    pub fn unconstrained() -> Self {
        Self { browsers: None }
    }

    pub fn browsers(&self) -> Option<Browsers> {
        self.browsers
    }

    pub(crate) fn to_targets(self) -> Targets {
        Targets {
            browsers: self.browsers,
            ..Targets::default()
        }
    }
}
