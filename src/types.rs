use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of a segment-aware domain match
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainMatch {
    /// Navigable url of the matched candidate, cut after the completed path segment
    pub url: String,
    /// Text to complete in the address bar (always a suffix of `url`)
    pub matched_segment: String,
}

impl DomainMatch {
    /// Create a new domain match
    pub fn new(url: impl Into<String>, matched_segment: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            matched_segment: matched_segment.into(),
        }
    }
}

/// Source list of autocomplete domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainList {
    /// Domains shipped with the application
    Default,
    /// Domains added by the user
    Custom,
}

impl DomainList {
    /// Name reported as the source of an autocomplete result
    pub fn list_name(&self) -> &'static str {
        match self {
            DomainList::Default => "default",
            DomainList::Custom => "custom",
        }
    }
}

impl fmt::Display for DomainList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.list_name())
    }
}

/// Autocomplete suggestion returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteResult {
    /// The query as typed
    pub input: String,
    /// Completed text to show in the address bar
    pub text: String,
    /// Url to navigate to when the suggestion is accepted
    pub url: String,
    /// Name of the domain list that produced the suggestion
    pub source: String,
    /// Number of domains in that list
    pub total_items: usize,
}
