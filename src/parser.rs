use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;

use crate::domain::Domain;
use crate::error::{AutocompleteError, Result};

/// Maximum nesting depth for `file:` include directives.
const MAX_INCLUDE_DEPTH: usize = 10;

/// Domains collected across included files, in first-seen order.
#[derive(Default)]
struct DomainCollector {
    domains: Vec<Domain>,
    seen: HashSet<String>,
}

impl DomainCollector {
    fn push(&mut self, domain: Domain) {
        if self.seen.insert(domain.folded_url()) {
            self.domains.push(domain);
        } else {
            debug!("skipping duplicate domain entry {}", domain);
        }
    }
}

/// Parse a domain list from text.
///
/// One entry per line. Blank lines and lines starting with `#` are skipped,
/// duplicate entries keep their first position, and
/// `file: /path/to/domains.txt` includes another list in place. Relative
/// include paths are resolved against the current directory here, and
/// against the including file's directory when parsing a file.
pub fn parse_domains(text: &str) -> Result<Vec<Domain>> {
    let mut collector = DomainCollector::default();
    parse_domains_inner(text, None, 0, &mut collector)?;
    Ok(collector.domains)
}

fn parse_domains_inner(
    text: &str,
    base: Option<&Path>,
    depth: usize,
    collector: &mut DomainCollector,
) -> Result<()> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(AutocompleteError::ParseError(format!(
            "file include depth exceeds maximum ({MAX_INCLUDE_DEPTH}), possible circular include"
        )));
    }

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(path) = line.strip_prefix("file:") {
            let path = Path::new(path.trim());
            let path = match base {
                Some(dir) if path.is_relative() => dir.join(path),
                _ => path.to_path_buf(),
            };
            debug!("including domain list {}", path.display());
            parse_domains_from_file_inner(&path, depth + 1, collector)?;
            continue;
        }

        let domain = Domain::parse(line).map_err(|e| AutocompleteError::ParseErrorAtLine {
            line: line_num,
            message: e.to_string(),
        })?;
        collector.push(domain);
    }

    Ok(())
}

/// Parse a domain list from a file.
pub fn parse_domains_from_file(path: impl AsRef<Path>) -> Result<Vec<Domain>> {
    let path = path.as_ref();
    let mut collector = DomainCollector::default();
    parse_domains_from_file_inner(path, 0, &mut collector)?;
    debug!(
        "loaded {} domains from {}",
        collector.domains.len(),
        path.display()
    );
    Ok(collector.domains)
}

fn parse_domains_from_file_inner(
    path: &Path,
    depth: usize,
    collector: &mut DomainCollector,
) -> Result<()> {
    let text = fs::read_to_string(path).map_err(|e| {
        AutocompleteError::ParseError(format!(
            "Failed to read domain list '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_domains_inner(&text, path.parent(), depth, collector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_simple_list() {
        let text = "mozilla.org\nwww.firefox.com\nhttps://github.com";
        let domains = parse_domains(text).unwrap();
        let urls: Vec<String> = domains.iter().map(Domain::url).collect();
        assert_eq!(
            urls,
            vec![
                "http://mozilla.org",
                "http://www.firefox.com",
                "https://github.com"
            ]
        );
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let text = r#"
# Top sites
mozilla.org

   # indented comment
wikipedia.org
"#;
        let domains = parse_domains(text).unwrap();
        assert_eq!(domains.len(), 2);
        assert_eq!(domains[1].host, "wikipedia.org");
    }

    #[test]
    fn test_parse_skips_duplicates() {
        let text = "mozilla.org\nMOZILLA.ORG\nhttp://mozilla.org\nhttps://mozilla.org";
        let domains = parse_domains(text).unwrap();
        assert_eq!(domains.len(), 2);
        assert_eq!(domains[0].url(), "http://mozilla.org");
        assert_eq!(domains[1].url(), "https://mozilla.org");
    }

    #[test]
    fn test_parse_invalid_entry_reports_line() {
        let text = "mozilla.org\n\nhttps://";
        match parse_domains(text) {
            Err(AutocompleteError::ParseErrorAtLine { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected ParseErrorAtLine, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_file_directive() {
        let dir = std::env::temp_dir().join("domain_autocomplete_test");
        let _ = fs::create_dir_all(&dir);
        let file_path = dir.join("included.txt");
        let mut f = fs::File::create(&file_path).unwrap();
        writeln!(f, "twitter.com").unwrap();
        writeln!(f, "mozilla.org").unwrap();
        drop(f);

        let text = format!(
            "mozilla.org\nfile: {}\nyoutube.com",
            file_path.display()
        );
        let domains = parse_domains(&text).unwrap();
        let hosts: Vec<&str> = domains.iter().map(|d| d.host.as_str()).collect();
        assert_eq!(hosts, vec!["mozilla.org", "twitter.com", "youtube.com"]);

        let _ = fs::remove_file(&file_path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_parse_file_directive_relative_to_including_file() {
        let dir = std::env::temp_dir().join("domain_autocomplete_test_relative");
        let nested = dir.join("lists");
        let _ = fs::create_dir_all(&nested);

        let main = dir.join("main.txt");
        let mut f = fs::File::create(&main).unwrap();
        writeln!(f, "mozilla.org").unwrap();
        writeln!(f, "file: lists/extra.txt").unwrap();
        drop(f);

        let extra = nested.join("extra.txt");
        let mut f = fs::File::create(&extra).unwrap();
        writeln!(f, "twitter.com").unwrap();
        writeln!(f, "file: more.txt").unwrap();
        drop(f);

        let more = nested.join("more.txt");
        let mut f = fs::File::create(&more).unwrap();
        writeln!(f, "youtube.com").unwrap();
        drop(f);

        let domains = parse_domains_from_file(&main).unwrap();
        let hosts: Vec<&str> = domains.iter().map(|d| d.host.as_str()).collect();
        assert_eq!(hosts, vec!["mozilla.org", "twitter.com", "youtube.com"]);

        let _ = fs::remove_file(&more);
        let _ = fs::remove_file(&extra);
        let _ = fs::remove_file(&main);
        let _ = fs::remove_dir(&nested);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_parse_file_directive_not_found() {
        let text = "file: /nonexistent/path/domains.txt";
        assert!(parse_domains(text).is_err());
    }

    #[test]
    fn test_parse_file_circular_include() {
        let dir = std::env::temp_dir().join("domain_autocomplete_test_circular");
        let _ = fs::create_dir_all(&dir);

        let file_a = dir.join("a.txt");
        let file_b = dir.join("b.txt");

        let mut f = fs::File::create(&file_a).unwrap();
        writeln!(f, "a.example.com").unwrap();
        writeln!(f, "file: {}", file_b.display()).unwrap();
        drop(f);

        let mut f = fs::File::create(&file_b).unwrap();
        writeln!(f, "b.example.com").unwrap();
        writeln!(f, "file: {}", file_a.display()).unwrap();
        drop(f);

        let result = parse_domains_from_file(&file_a);
        assert!(result.is_err(), "Circular file include should return error");
        let err_msg = format!("{}", result.unwrap_err());
        assert!(err_msg.contains("depth"), "got: {}", err_msg);

        let _ = fs::remove_file(&file_a);
        let _ = fs::remove_file(&file_b);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_parse_from_file() {
        let dir = std::env::temp_dir().join("domain_autocomplete_test_file");
        let _ = fs::create_dir_all(&dir);
        let file_path = dir.join("domains.txt");
        fs::write(&file_path, "# shipped\nmozilla.org\nhttps://www.github.com\n").unwrap();

        let domains = parse_domains_from_file(&file_path).unwrap();
        assert_eq!(domains.len(), 2);
        assert!(domains[1].has_www);

        let _ = fs::remove_file(&file_path);
        let _ = fs::remove_dir(&dir);
    }
}
