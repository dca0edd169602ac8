/*!
Small string and route-template helpers shared across generation.
*/

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `{name}` tokens in a route template
static PATH_PARAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("path parameter regex is valid"));

/// Prefixes `text` with `prefix` unless it already starts with it.
///
/// Idempotent: applying it twice yields the same result as once.
pub fn ensure_starts_with(text: &str, prefix: &str) -> String {
    if text.is_empty() || text.starts_with(prefix) {
        return text.to_string();
    }
    format!("{prefix}{text}")
}

/// Extracts the `{name}` tokens from a route template, lower-cased for
/// case-insensitive membership checks.
pub fn path_params(path: &str) -> BTreeSet<String> {
    PATH_PARAM_REGEX
        .captures_iter(path)
        .map(|capture| capture[1].to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_starts_with_returns_string_if_empty() {
        assert_eq!(ensure_starts_with("", "foo"), "");
    }

    #[test]
    fn ensure_starts_with_returns_string_if_starts_with() {
        assert_eq!(ensure_starts_with("foobar", "foo"), "foobar");
    }

    #[test]
    fn ensure_starts_with_prepends_value_if_not_starts_with() {
        assert_eq!(ensure_starts_with("bar", "foo"), "foobar");
    }

    #[test]
    fn ensure_starts_with_is_idempotent() {
        for text in ["bar", "/bar", "", "foo", "fo"] {
            let once = ensure_starts_with(text, "/");
            let twice = ensure_starts_with(&once, "/");
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn path_params_extracts_tokens() {
        let params = path_params("/api/{Foo}/bar/{baz}");
        assert_eq!(params.len(), 2);
        assert!(params.contains("foo"));
        assert!(params.contains("baz"));
    }

    #[test]
    fn path_params_is_empty_for_plain_paths() {
        assert!(path_params("/api/foo").is_empty());
    }
}
