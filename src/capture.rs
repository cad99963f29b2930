//! Named-capture extraction shared by every provider's pattern table.

use regex::Regex;
use std::collections::HashMap;

/// Match `haystack` against `re` and collect every named group.
///
/// Groups that did not take part in the match map to an empty string, so a
/// name declared by the pattern is never missing from a successful match.
/// Unnamed groups and the whole-match group are skipped. No match yields an
/// empty map.
#[must_use]
pub fn capture_map(re: &Regex, haystack: &str) -> HashMap<String, String> {
    let Some(caps) = re.captures(haystack) else {
        return HashMap::new();
    };

    re.capture_names()
        .flatten()
        .map(|name| {
            let value = caps.name(name).map_or("", |m| m.as_str());
            (name.to_string(), value.to_string())
        })
        .collect()
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
