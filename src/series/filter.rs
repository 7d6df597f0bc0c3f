use regex::{Regex, RegexBuilder};

use super::IngestError;

/// Compile a case-insensitive wildcard search pattern
///
/// Every `*` matches any run of characters; everything else is literal.
/// The pattern may match anywhere in a name, so a pattern without `*` is a
/// plain substring search.
pub fn wildcard_regex(pattern: &str) -> Result<Regex, IngestError> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Ok(RegexBuilder::new(&body).case_insensitive(true).build()?)
}

/// Names matching a wildcard search, in their original order
///
/// An empty pattern, or one that fails to compile, keeps every name.
pub fn filter_names<S: AsRef<str>>(names: &[S], pattern: &str) -> Vec<String> {
    let all = || {
        names
            .iter()
            .map(|n| n.as_ref().to_string())
            .collect::<Vec<_>>()
    };
    if pattern.is_empty() {
        return all();
    }
    match wildcard_regex(pattern) {
        Ok(re) => names
            .iter()
            .filter(|n| re.is_match(n.as_ref()))
            .map(|n| n.as_ref().to_string())
            .collect(),
        Err(e) => {
            log::debug!("Ignoring search pattern {:?}: {}", pattern, e);
            all()
        }
    }
}
