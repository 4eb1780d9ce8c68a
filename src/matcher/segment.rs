use super::url::UrlView;
use crate::types::DomainMatch;

/// Find the first candidate url the query completes to.
///
/// For every candidate, in order, the query is tried as a case-insensitive
/// prefix of:
/// 1. the full url (`http://www.m` -> `http://www.mozilla.org`)
/// 2. the url without scheme and user-info (`www.moz` -> `www.mozilla.org`)
/// 3. the url with leading host labels dropped one at a time
///    (`moz` -> `mozilla.org`, `twit` -> `twitter.com`)
///
/// IPv4 literals and `localhost` are never split into labels, and urls
/// without `://` (`about:config`, `mozilla.org/foo/`) only take part in the
/// full match.
///
/// The first candidate that matches wins, even if a later one would give a
/// longer completion. Once the query reaches the end of the host, the
/// completion stops at the end of the path segment the query ends in, or
/// of the next one when the query ends on the host or on a `/`:
/// `reddit.com/r/van` completes to `reddit.com/r/vancouver/` and the
/// returned url is cut at the same point.
///
/// Both returned strings are lowercase.
pub fn segment_aware_domain_match<I, S>(query: &str, candidates: I) -> Option<DomainMatch>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if query.is_empty() {
        return None;
    }
    let mut folded_query = String::with_capacity(query.len());
    fold_case_into(&mut folded_query, query);

    // Candidate lists can be large; stop at the first match and fold every
    // candidate into the same buffer.
    let mut url = String::new();
    candidates.into_iter().find_map(|candidate| {
        fold_case_into(&mut url, candidate.as_ref());
        let view = UrlView::parse(&url);
        let offset = basic_match(&folded_query, &view)?;
        Some(complete_segment(&folded_query, &view, offset))
    })
}

fn fold_case_into(buf: &mut String, text: &str) {
    buf.clear();
    buf.extend(text.chars().flat_map(char::to_lowercase));
}

/// Offset of the first url form the query is a prefix of
fn basic_match(query: &str, view: &UrlView<'_>) -> Option<usize> {
    let url = view.as_str();
    if url.starts_with(query) {
        return Some(0);
    }

    let host_start = view.host_start()?;
    if url[host_start..].starts_with(query) {
        return Some(host_start);
    }

    view.subdomain_offsets()
        .find(|&offset| url[offset..].starts_with(query))
}

/// Build the match for a query that prefixes `url[offset..]`.
fn complete_segment(query: &str, view: &UrlView<'_>, offset: usize) -> DomainMatch {
    let url = view.as_str();
    let query_end = offset + query.len();
    let path_start = view.path_start();

    let end = if query_end < path_start {
        // Query stays within the host and port: complete the whole url.
        url.len()
    } else {
        // Complete through the segment the query ends in. A query ending on
        // the host or on a `/` completes the next segment.
        let scan_from = if query_end == path_start {
            match url[path_start..].strip_prefix('/') {
                Some(_) => path_start + 1,
                None => url.len(),
            }
        } else {
            query_end
        };
        url[scan_from..]
            .find('/')
            .map_or(url.len(), |i| scan_from + i + 1)
    };

    DomainMatch::new(&url[..end], &url[offset..end])
}
