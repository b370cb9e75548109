//! Display names for organizations that share a registry name.

use regex::Regex;
use std::sync::LazyLock;

static WEBSITE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:http://|www\.|https://)([^/]+)").unwrap());

/// Extracts the bare hostname from an organization link.
///
/// Strips exactly one leading `http://`, `https://` or `www.` and everything
/// from the first `/` after it. Links that start with none of those prefixes
/// yield `None`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(website("https://example.edu/about").as_deref(), Some("example.edu"));
/// assert_eq!(website("https://www.example.edu").as_deref(), Some("www.example.edu"));
/// assert_eq!(website("ftp://example.edu"), None);
/// ```
pub fn website(link: &str) -> Option<String> {
    WEBSITE_REGEX
        .captures(link.trim())
        .and_then(|caps| caps.get(1))
        .map(|host| host.as_str().to_string())
        .filter(|host| !host.is_empty())
}

/// Builds the disambiguated display name of a registry organization.
///
/// Names are not unique, so a qualifier is appended:
/// - `"Example College (example.edu)"` when the first link yields a website
/// - `"Example College (Brazil)"` when only a country is known
/// - `"Example College"` otherwise
///
/// A blank registry name yields an empty string.
pub fn display_name(name: &str, first_link: Option<&str>, country: Option<&str>) -> String {
    if name.trim().is_empty() {
        return String::new();
    }

    let qualifier = first_link
        .and_then(website)
        .or_else(|| {
            country
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
        });

    match qualifier {
        Some(qualifier) => format!("{name} ({qualifier})"),
        None => name.to_string(),
    }
}
