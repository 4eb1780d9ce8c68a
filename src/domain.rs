use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AutocompleteError, Result};

/// Protocol assumed for entries written without one
pub const DEFAULT_PROTOCOL: &str = "http://";

/// Format: [http:// | https://][www.]host
static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(https?://)?(www\.)?(.+)?$")
        .expect("DOMAIN_PATTERN: hardcoded regex is invalid")
});

/// An entry of an autocomplete domain list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    /// Scheme including the separator, lowercase (`http://` or `https://`)
    pub protocol: String,
    /// Whether the entry was written with a leading `www.`
    pub has_www: bool,
    /// Host and anything after it, as written
    pub host: String,
}

impl Domain {
    /// Parse a domain list entry such as `mozilla.org`, `www.mozilla.org` or
    /// `https://www.mozilla.org/en-US/`.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let captures = DOMAIN_PATTERN
            .captures(text)
            .ok_or_else(|| AutocompleteError::InvalidDomain(text.to_string()))?;

        let host = captures
            .get(3)
            .map(|m| m.as_str())
            .ok_or_else(|| AutocompleteError::InvalidDomain(format!("missing host: {}", text)))?;
        if host.contains("://") {
            return Err(AutocompleteError::InvalidDomain(format!(
                "unsupported protocol: {}",
                text
            )));
        }
        if host.chars().any(char::is_whitespace) {
            return Err(AutocompleteError::InvalidDomain(format!(
                "whitespace in host: {}",
                text
            )));
        }

        let protocol = captures
            .get(1)
            .map_or(DEFAULT_PROTOCOL.to_string(), |m| m.as_str().to_lowercase());

        Ok(Self {
            protocol,
            has_www: captures.get(2).is_some(),
            host: host.to_string(),
        })
    }

    /// Full url of this entry
    pub fn url(&self) -> String {
        let www = if self.has_www { "www." } else { "" };
        format!("{}{}{}", self.protocol, www, self.host)
    }

    /// Case-folded url, used to tell duplicate entries apart
    pub fn folded_url(&self) -> String {
        self.url().to_lowercase()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
