//! Domain Autocomplete - segment-aware url completion for browser address bars
//!
//! This library provides:
//! - Prefix matching of typed text against candidate urls, with or without
//!   the scheme and with leading subdomains dropped
//! - Completion up to the next path segment boundary
//! - Domain list parsing (one entry per line, comments, file includes)
//! - A provider over custom and shipped domain lists with LRU caching
//!
//! # Example
//!
//! ```rust
//! use domain_autocomplete_r::segment_aware_domain_match;
//!
//! let history = [
//!     "http://www.mozilla.org",
//!     "https://mobile.twitter.com",
//!     "https://en.Wikipedia.org/Wiki/Mozilla",
//! ];
//!
//! let found = segment_aware_domain_match("twit", history).unwrap();
//! assert_eq!(found.url, "https://mobile.twitter.com");
//! assert_eq!(found.matched_segment, "twitter.com");
//!
//! let found = segment_aware_domain_match("wikipedia.org/w", history).unwrap();
//! assert_eq!(found.url, "https://en.wikipedia.org/wiki/");
//! assert_eq!(found.matched_segment, "wikipedia.org/wiki/");
//!
//! assert!(segment_aware_domain_match("nomatch", history).is_none());
//! ```
//!
//! # Providers
//!
//! ```rust
//! use domain_autocomplete_r::{parse_domains, DomainAutocompleteProvider, DomainList, ProviderOptions};
//!
//! let shipped = parse_domains("
//! ## top sites
//! mozilla.org
//! www.youtube.com
//! ").unwrap();
//!
//! let provider = DomainAutocompleteProvider::new(ProviderOptions::default())
//!     .with_domains(DomainList::Default, shipped);
//! provider.add_custom_domain("https://www.mozilla.org/en-US/").unwrap();
//!
//! // The custom list is consulted first.
//! let result = provider.autocomplete("moz").unwrap();
//! assert_eq!(result.source, "custom");
//! assert_eq!(result.text, "mozilla.org/en-us/");
//!
//! let result = provider.autocomplete("you").unwrap();
//! assert_eq!(result.source, "default");
//! assert_eq!(result.url, "http://www.youtube.com");
//! ```
//!
//! # Domain List Syntax
//!
//! | Line | Meaning |
//! |------|---------|
//! | `mozilla.org` | `http://mozilla.org` |
//! | `www.mozilla.org` | `http://www.mozilla.org` |
//! | `https://mozilla.org/en-US/` | kept as written |
//! | `# comment` | ignored |
//! | `file: /path/to/list.txt` | include another list |

pub mod domain;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod provider;
pub mod types;

// Re-export commonly used items
pub use domain::{Domain, DEFAULT_PROTOCOL};
pub use error::{AutocompleteError, Result};
pub use matcher::segment_aware_domain_match;
pub use parser::{parse_domains, parse_domains_from_file};
pub use provider::{DomainAutocompleteProvider, ProviderOptions, DEFAULT_CACHE_SIZE};
pub use types::{AutocompleteResult, DomainList, DomainMatch};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let shipped_text = r#"
# Shipped domains
mozilla.org
www.wikipedia.org
https://www.reddit.com/r/rust/
"#;

        // Parse the shipped list
        let shipped = parse_domains(shipped_text).unwrap();
        assert_eq!(shipped.len(), 3);

        // Build the provider
        let provider = DomainAutocompleteProvider::new(ProviderOptions::default())
            .with_domains(DomainList::Default, shipped);
        assert!(provider.add_custom_domain("firefox.com").unwrap());
        assert!(!provider.add_custom_domain("FIREFOX.com").unwrap());

        // Custom list answers first
        let result = provider.autocomplete("fire").unwrap();
        assert_eq!(result.source, "custom");
        assert_eq!(result.text, "firefox.com");
        assert_eq!(result.total_items, 1);

        // Subdomain stripping from the shipped list
        let result = provider.autocomplete("wik").unwrap();
        assert_eq!(result.source, "default");
        assert_eq!(result.text, "wikipedia.org");
        assert_eq!(result.url, "http://www.wikipedia.org");

        // Path segment completion
        let result = provider.autocomplete("reddit.com/r/ru").unwrap();
        assert_eq!(result.text, "reddit.com/r/rust/");
        assert_eq!(result.url, "https://www.reddit.com/r/rust/");

        // Removing the custom domain drops its suggestion
        assert!(provider.remove_custom_domain("firefox.com"));
        assert!(provider.autocomplete("fire").is_none());
    }
}
