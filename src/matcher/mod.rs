//! Segment-aware domain matching.
//!
//! Matches a typed prefix against candidate urls the way an address bar
//! completes it: with or without the scheme, with leading subdomains
//! dropped, and up to the next path segment boundary.
//!
//! ## Example
//!
//! ```
//! use domain_autocomplete_r::matcher::segment_aware_domain_match;
//!
//! let urls = ["http://www.mozilla.org", "https://www.reddit.com/r/rust/top/"];
//!
//! let found = segment_aware_domain_match("moz", urls).unwrap();
//! assert_eq!(found.url, "http://www.mozilla.org");
//! assert_eq!(found.matched_segment, "mozilla.org");
//!
//! let found = segment_aware_domain_match("reddit.com/r/ru", urls).unwrap();
//! assert_eq!(found.url, "https://www.reddit.com/r/rust/");
//! assert_eq!(found.matched_segment, "reddit.com/r/rust/");
//! ```

mod segment;
mod url;

pub use segment::segment_aware_domain_match;
