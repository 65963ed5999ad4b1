//! Result representation for site search responses.
//!
//! A result represents one matching page or heading of a documentation site. Results carry a
//! breadcrumb (`hierarchy`) from the root section of the site down to the matching node, which
//! is what the dropdown groups on. Everything else in the payload is opaque to the core.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can be placed into the grouped dropdown.
pub trait Hierarchical {
    /// Breadcrumb from the root section to the leaf, root first.
    fn hierarchy(&self) -> &[String];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSearchResult")]
/// A single document hit as returned by the search backend.
pub struct SearchResult {
    /// Breadcrumb of section titles, root first. Never empty.
    pub hierarchy: Vec<String>,
    /// Display title of the page or heading.
    pub title: String,
    /// Link target for the hit, if the backend provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Highlighted body snippet, if the backend provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Deserialize)]
struct RawSearchResult {
    hierarchy: Vec<String>,
    title: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    body: Option<String>,
}

impl TryFrom<RawSearchResult> for SearchResult {
    type Error = String;

    fn try_from(raw: RawSearchResult) -> Result<Self, Self::Error> {
        if raw.hierarchy.is_empty() {
            return Err(format!("result '{}' has an empty hierarchy", raw.title));
        }
        Ok(Self {
            hierarchy: raw.hierarchy,
            title: raw.title,
            url: raw.url,
            body: raw.body,
        })
    }
}

impl SearchResult {
    #[must_use]
    /// Builds a result from a breadcrumb and a title.
    pub fn new<I, S>(hierarchy: I, title: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hierarchy: hierarchy.into_iter().map(Into::into).collect(),
            title: title.into(),
            url: None,
            body: None,
        }
    }
}

impl Hierarchical for SearchResult {
    fn hierarchy(&self) -> &[String] {
        &self.hierarchy
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Parse a JSON array of results.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or a result has an empty hierarchy.
pub fn parse_results(json: &str) -> serde_json::Result<Vec<SearchResult>> {
    serde_json::from_str(json)
}
