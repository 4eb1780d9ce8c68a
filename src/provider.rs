//! Domain autocomplete provider.
//!
//! Completes address bar input against ordered domain lists, caching the
//! result of every query.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use lru::LruCache;
use parking_lot::{Mutex, RwLock};
use serde::Deserialize;

use crate::domain::Domain;
use crate::error::{AutocompleteError, Result};
use crate::matcher::segment_aware_domain_match;
use crate::parser::parse_domains_from_file;
use crate::types::{AutocompleteResult, DomainList};

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Provider options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderOptions {
    /// LRU cache size for autocomplete results, 0 disables caching
    pub cache_size: usize,
    /// Order in which domain lists are consulted
    pub lists: Vec<DomainList>,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
            lists: vec![DomainList::Custom, DomainList::Default],
        }
    }
}

impl ProviderOptions {
    /// Create new provider options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    /// Set the lookup order of domain lists.
    pub fn with_lists(mut self, lists: Vec<DomainList>) -> Self {
        self.lists = lists;
        self
    }

    /// Read options from JSON, e.g. `{"cache_size": 256, "lists": ["default"]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AutocompleteError::ConfigError(format!(
                "Failed to read options file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<()> {
        if self.lists.is_empty() {
            return Err(AutocompleteError::ConfigError(
                "at least one domain list is required".to_string(),
            ));
        }
        for (i, list) in self.lists.iter().enumerate() {
            if self.lists[..i].contains(list) {
                return Err(AutocompleteError::ConfigError(format!(
                    "domain list '{}' listed more than once",
                    list
                )));
            }
        }
        Ok(())
    }
}

/// Domains of one list with their urls pre-computed for matching
#[derive(Debug, Default)]
struct ListEntries {
    domains: Vec<Domain>,
    urls: Vec<String>,
    /// Case-folded urls of `domains`
    keys: HashSet<String>,
}

impl ListEntries {
    fn from_domains(domains: Vec<Domain>) -> Self {
        let mut entries = Self::default();
        for domain in domains {
            entries.push(domain);
        }
        entries
    }

    /// Append a domain unless its url is already present.
    fn push(&mut self, domain: Domain) -> bool {
        if !self.keys.insert(domain.folded_url()) {
            return false;
        }
        self.urls.push(domain.url());
        self.domains.push(domain);
        true
    }

    fn remove(&mut self, domain: &Domain) -> bool {
        let key = domain.folded_url();
        if !self.keys.remove(&key) {
            return false;
        }
        match self.domains.iter().position(|d| d.folded_url() == key) {
            Some(i) => {
                self.domains.remove(i);
                self.urls.remove(i);
                true
            }
            None => false,
        }
    }
}

/// Autocompletes queries against custom and shipped domain lists.
///
/// Lists are consulted in [`ProviderOptions::lists`] order and the first
/// list holding a match answers the query. Results, including misses, are
/// cached per lowercase query until a list changes.
pub struct DomainAutocompleteProvider {
    options: ProviderOptions,
    lists: RwLock<HashMap<DomainList, ListEntries>>,
    cache: Option<Mutex<LruCache<String, Option<AutocompleteResult>>>>,
}

impl DomainAutocompleteProvider {
    /// Create an empty provider.
    pub fn new(options: ProviderOptions) -> Self {
        let cache = NonZeroUsize::new(options.cache_size).map(|size| Mutex::new(LruCache::new(size)));
        Self {
            options,
            lists: RwLock::new(HashMap::new()),
            cache,
        }
    }

    /// Builder-style variant of [`set_domains`](Self::set_domains).
    pub fn with_domains(self, list: DomainList, domains: Vec<Domain>) -> Self {
        self.set_domains(list, domains);
        self
    }

    /// Replace the contents of a domain list.
    pub fn set_domains(&self, list: DomainList, domains: Vec<Domain>) {
        let entries = ListEntries::from_domains(domains);
        tracing::debug!(list = %list, count = entries.urls.len(), "domain list replaced");
        self.lists.write().insert(list, entries);
        self.clear_cache();
    }

    /// Replace the contents of a domain list with a domain list file.
    ///
    /// Returns the number of domains loaded.
    pub fn load_from_file(&self, list: DomainList, path: impl AsRef<Path>) -> Result<usize> {
        let domains = parse_domains_from_file(path)?;
        let count = domains.len();
        self.set_domains(list, domains);
        Ok(count)
    }

    /// Add a user domain. Returns `false` if it was already in the custom list.
    pub fn add_custom_domain(&self, text: &str) -> Result<bool> {
        let domain = Domain::parse(text)?;
        let added = self
            .lists
            .write()
            .entry(DomainList::Custom)
            .or_default()
            .push(domain);
        if added {
            tracing::debug!(domain = text, "custom domain added");
            self.clear_cache();
        }
        Ok(added)
    }

    /// Remove a user domain. Returns `false` if it was not in the custom list.
    pub fn remove_custom_domain(&self, text: &str) -> bool {
        let Ok(domain) = Domain::parse(text) else {
            return false;
        };
        let removed = self
            .lists
            .write()
            .get_mut(&DomainList::Custom)
            .is_some_and(|entries| entries.remove(&domain));
        if removed {
            tracing::debug!(domain = text, "custom domain removed");
            self.clear_cache();
        }
        removed
    }

    /// Snapshot of a domain list.
    pub fn domains(&self, list: DomainList) -> Vec<Domain> {
        self.lists
            .read()
            .get(&list)
            .map(|entries| entries.domains.clone())
            .unwrap_or_default()
    }

    /// Complete a query. Whitespace-only queries never match.
    pub fn autocomplete(&self, query: &str) -> Option<AutocompleteResult> {
        if query.trim().is_empty() {
            return None;
        }

        let Some(cache) = &self.cache else {
            return self.find_suggestion(query);
        };

        let key = query.to_lowercase();
        let mut cache = cache.lock();

        if let Some(cached) = cache.get(&key) {
            tracing::trace!(query, "autocomplete cache hit");
            // The key is case-folded; report the input as typed this time.
            return cached.clone().map(|result| AutocompleteResult {
                input: query.to_string(),
                ..result
            });
        }

        // Matching is CPU-only, so computing under the lock is acceptable.
        let result = self.find_suggestion(query);
        cache.put(key, result.clone());
        result
    }

    /// Find a suggestion without caching
    fn find_suggestion(&self, query: &str) -> Option<AutocompleteResult> {
        let lists = self.lists.read();
        self.options.lists.iter().find_map(|list| {
            let entries = lists.get(list)?;
            let found = segment_aware_domain_match(query, &entries.urls)?;
            tracing::debug!(query, list = %list, url = %found.url, "autocomplete match");
            Some(AutocompleteResult {
                input: query.to_string(),
                text: found.matched_segment,
                url: found.url,
                source: list.list_name().to_string(),
                total_items: entries.urls.len(),
            })
        })
    }

    /// Clear the result cache
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().clear();
        }
    }

    /// Number of cached queries
    pub fn cached_queries(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.lock().len())
    }
}
