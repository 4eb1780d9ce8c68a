//! Index-based view over a candidate url.
//!
//! Nothing here validates the url. Offsets are found by scanning for the
//! `://` separator, the end of the authority and the port colon, which is
//! enough for prefix matching and never fails on malformed input.

use std::net::Ipv4Addr;

/// Byte offsets of the authority parts of a url
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Authority {
    /// First byte of the host (after scheme and user-info)
    host_start: usize,
    /// One past the last byte of the host (port excluded)
    host_end: usize,
    /// First byte after the authority (`/`, `?`, `#` or end of input)
    path_start: usize,
}

/// Borrowed view of a url with pre-computed component offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UrlView<'a> {
    url: &'a str,
    authority: Option<Authority>,
}

impl<'a> UrlView<'a> {
    /// Split a url into its components.
    ///
    /// Only `scheme://` urls have an authority. Anything else (`about:config`,
    /// bare words) is kept as an opaque token.
    pub fn parse(url: &'a str) -> Self {
        let authority = url.find("://").map(|sep| {
            let start = sep + 3;
            let path_start = url[start..]
                .find(|c: char| matches!(c, '/' | '?' | '#'))
                .map_or(url.len(), |i| start + i);
            let host_start = url[start..path_start]
                .rfind('@')
                .map_or(start, |i| start + i + 1);
            let host_end = find_host_end(url, host_start, path_start);
            Authority {
                host_start,
                host_end,
                path_start,
            }
        });
        Self { url, authority }
    }

    pub fn as_str(&self) -> &'a str {
        self.url
    }

    /// Offset of the host, `None` for opaque urls
    pub fn host_start(&self) -> Option<usize> {
        self.authority.map(|a| a.host_start)
    }

    pub fn host(&self) -> Option<&'a str> {
        self.authority.map(|a| &self.url[a.host_start..a.host_end])
    }

    /// Offset where the path begins.
    ///
    /// Opaque urls have no host, but a `/` still starts a path
    /// (`mozilla.org/foo/`); without one the whole url is a single token.
    pub fn path_start(&self) -> usize {
        match self.authority {
            Some(a) => a.path_start,
            None => self.url.find('/').unwrap_or(self.url.len()),
        }
    }

    /// Whether the host must never be split into labels.
    ///
    /// IPv4 literals, bracketed IPv6 literals and `localhost` have no
    /// subdomains.
    pub fn is_atomic_host(&self) -> bool {
        match self.host() {
            Some(host) => {
                host == "localhost" || host.starts_with('[') || host.parse::<Ipv4Addr>().is_ok()
            }
            None => true,
        }
    }

    /// Offsets of the host after dropping one, two, ... leading labels.
    ///
    /// The last label is never dropped on its own, and trailing dots don't
    /// yield an empty host.
    pub fn subdomain_offsets(&self) -> impl Iterator<Item = usize> + 'a {
        let (host_start, host) = match self.authority {
            Some(a) if !self.is_atomic_host() => (a.host_start, &self.url[a.host_start..a.host_end]),
            _ => (0, ""),
        };
        host.match_indices('.')
            .map(move |(i, _)| host_start + i + 1)
            .filter(move |&offset| offset < host_start + host.len())
    }
}

fn find_host_end(url: &str, host_start: usize, path_start: usize) -> usize {
    let authority = &url[host_start..path_start];
    if authority.starts_with('[') {
        // [::1]:8080
        return authority.find(']').map_or(path_start, |i| host_start + i + 1);
    }
    authority.find(':').map_or(path_start, |i| host_start + i)
}
