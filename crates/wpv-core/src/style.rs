//! Inline style strings attached to `%c` console segments.
//!
//! A style string is a list of `property: value` rules separated by `;`.
//! Properties are kept in camelCase (`font-weight` becomes `fontWeight`) so
//! renderers can match on a single spelling.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static KEBAB_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([a-z])").expect("kebab regex pattern is valid"));

/// Parsed style rules in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    rules: Vec<(String, String)>,
}

impl StyleDeclarations {
    /// Value of a camelCase property
    pub fn get(&self, property: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Insert or replace a property. A repeated property keeps its original
    /// position but takes the newer value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.rules.iter_mut().find(|(p, _)| *p == property) {
            Some(rule) => rule.1 = value,
            None => self.rules.push((property, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Convert a kebab-case property name to camelCase.
///
/// Only a hyphen followed by a lowercase ASCII letter is folded.
///
/// ```
/// use wpv_core::to_camel_case;
///
/// assert_eq!(to_camel_case("background-color"), "backgroundColor");
/// assert_eq!(to_camel_case("color"), "color");
/// ```
pub fn to_camel_case(property: &str) -> String {
    KEBAB_SEGMENT
        .replace_all(property, |caps: &Captures| caps[1].to_ascii_uppercase())
        .into_owned()
}

/// Parse a style string into declarations.
///
/// Rules are split on `;` and trimmed; blank rules are ignored. Each rule is
/// split on `:` and only the first two pieces are used, so a value that
/// itself contains a colon is cut at that colon. Rules with an empty
/// property or value are skipped.
pub fn parse_style(style: &str) -> StyleDeclarations {
    let mut declarations = StyleDeclarations::default();

    for rule in style.split(';').map(str::trim).filter(|r| !r.is_empty()) {
        let mut pieces = rule.split(':').map(str::trim);
        let property = pieces.next().unwrap_or_default();
        let value = pieces.next().unwrap_or_default();
        if property.is_empty() || value.is_empty() {
            continue;
        }
        declarations.set(to_camel_case(property), value);
    }

    declarations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_rules() {
        let decls = parse_style("color: red; font-weight: bold");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls.get("color"), Some("red"));
        assert_eq!(decls.get("fontWeight"), Some("bold"));
    }

    #[test]
    fn test_parse_ignores_blank_and_malformed_rules() {
        let decls = parse_style(" ; color: blue;; :orphan; dangling: ; novalue ");
        assert_eq!(decls.iter().collect::<Vec<_>>(), vec![("color", "blue")]);
    }

    #[test]
    fn test_value_cut_at_second_colon() {
        let decls = parse_style("background: url(http://x.test/a.png)");
        assert_eq!(decls.get("background"), Some("url(http"));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let decls = parse_style("color: red; color: green");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls.get("color"), Some("green"));
    }

    #[test]
    fn test_empty_string_has_no_rules() {
        assert!(parse_style("").is_empty());
    }

    #[test]
    fn test_camel_case_multiple_segments() {
        assert_eq!(to_camel_case("text-decoration-line"), "textDecorationLine");
        assert_eq!(to_camel_case("-webkit-box"), "WebkitBox");
        assert_eq!(to_camel_case("a-1"), "a-1");
    }
}
