//! Allow-list policy for HTML sanitization.
//!
//! The allow-lists are process-wide constants: anything not listed here is
//! removed from rendered output. They are fixed at compile time and the
//! `Policy` value built from them is immutable, so it can be shared freely
//! across threads.

use std::collections::{HashMap, HashSet};

/// HTML tags permitted in sanitized output.
pub const ALLOWED_TAGS: &[&str] = &[
    "p",
    "br",
    "strong",
    "em",
    "u",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "blockquote",
    "code",
    "pre",
    "hr",
    "ul",
    "ol",
    "li",
    "a",
    "img",
    "table",
    "thead",
    "tbody",
    "tr",
    "th",
    "td",
];

/// Attributes permitted per tag. Tags absent from this table keep no
/// attributes at all.
pub const ALLOWED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "title", "target"]),
    ("img", &["src", "alt", "title"]),
    ("code", &["class"]),
    ("pre", &["class"]),
];

/// URL schemes permitted in `href` and `src` values. Relative URLs carry no
/// scheme and pass through unchanged.
pub const ALLOWED_PROTOCOLS: &[&str] = &["http", "https", "mailto"];

/// Immutable sanitization allow-lists.
///
/// Bundles the permitted tags, per-tag attributes, and URL schemes, and is
/// passed by reference into the pipeline stages. The default policy uses the
/// process-wide constants above.
#[derive(Debug, Clone, Copy)]
pub struct Policy {
    tags: &'static [&'static str],
    attributes: &'static [(&'static str, &'static [&'static str])],
    protocols: &'static [&'static str],
}

impl Policy {
    /// Creates the default policy from the process-wide allow-list constants.
    pub fn new() -> Self {
        Self {
            tags: ALLOWED_TAGS,
            attributes: ALLOWED_ATTRIBUTES,
            protocols: ALLOWED_PROTOCOLS,
        }
    }

    /// Creates a policy from caller-supplied allow-lists.
    ///
    /// Tags named in `attributes` must also appear in `tags`; attributes for
    /// a tag that is stripped anyway would never apply.
    ///
    /// # Arguments
    ///
    /// * `tags`: Permitted tag names
    /// * `attributes`: Permitted attributes per tag
    /// * `protocols`: Permitted URL schemes for `href` and `src`
    pub fn custom(
        tags: &'static [&'static str],
        attributes: &'static [(&'static str, &'static [&'static str])],
        protocols: &'static [&'static str],
    ) -> Self {
        Self {
            tags,
            attributes,
            protocols,
        }
    }

    /// Returns true if the tag survives sanitization.
    ///
    /// # Arguments
    ///
    /// * `tag`: Lowercase tag name without angle brackets
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    /// Returns true if the attribute is kept on the given tag.
    ///
    /// # Arguments
    ///
    /// * `tag`: Lowercase tag name
    /// * `attribute`: Lowercase attribute name
    pub fn allows_attribute(&self, tag: &str, attribute: &str) -> bool {
        self.attributes
            .iter()
            .any(|(t, attrs)| *t == tag && attrs.contains(&attribute))
    }

    /// Returns true if URLs with this scheme are kept.
    ///
    /// # Arguments
    ///
    /// * `scheme`: Lowercase scheme name without the trailing colon
    pub fn allows_scheme(&self, scheme: &str) -> bool {
        self.protocols.contains(&scheme)
    }

    /// Permitted tags as a set, in the shape ammonia's builder consumes.
    pub fn tag_set(&self) -> HashSet<&'static str> {
        self.tags.iter().copied().collect()
    }

    /// Permitted per-tag attributes as a map, in the shape ammonia's builder
    /// consumes.
    pub fn attribute_map(&self) -> HashMap<&'static str, HashSet<&'static str>> {
        self.attributes
            .iter()
            .map(|(tag, attrs)| (*tag, attrs.iter().copied().collect()))
            .collect()
    }

    /// Permitted URL schemes as a set, in the shape ammonia's builder
    /// consumes.
    pub fn scheme_set(&self) -> HashSet<&'static str> {
        self.protocols.iter().copied().collect()
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_formatting_tags() {
        // Arrange
        let policy = Policy::new();

        // Act & Assert
        assert!(policy.allows_tag("strong"), "Bold formatting is permitted");
        assert!(policy.allows_tag("table"), "Tables are permitted");
        assert!(policy.allows_tag("img"), "Images are permitted");
    }

    #[test]
    fn test_rejects_script_and_style() {
        // Arrange
        let policy = Policy::new();

        // Act & Assert
        assert!(!policy.allows_tag("script"), "Scripts must never survive");
        assert!(!policy.allows_tag("style"), "Style blocks must never survive");
        assert!(!policy.allows_tag("iframe"), "Frames must never survive");
    }

    #[test]
    fn test_attribute_lookup_is_per_tag() {
        // Arrange
        let policy = Policy::new();

        // Act & Assert
        assert!(policy.allows_attribute("a", "href"), "Anchors keep href");
        assert!(policy.allows_attribute("a", "target"), "Anchors keep target");
        assert!(policy.allows_attribute("img", "src"), "Images keep src");
        assert!(
            !policy.allows_attribute("img", "href"),
            "href is anchor-only"
        );
        assert!(
            !policy.allows_attribute("p", "class"),
            "class is limited to code and pre"
        );
    }

    #[test]
    fn test_rejects_event_handler_attributes() {
        // Arrange
        let policy = Policy::new();

        // Act & Assert
        assert!(!policy.allows_attribute("img", "onerror"));
        assert!(!policy.allows_attribute("a", "onclick"));
    }

    #[test]
    fn test_scheme_allow_list() {
        // Arrange
        let policy = Policy::new();

        // Act & Assert
        assert!(policy.allows_scheme("http"));
        assert!(policy.allows_scheme("https"));
        assert!(policy.allows_scheme("mailto"));
        assert!(!policy.allows_scheme("javascript"), "Script URLs rejected");
        assert!(!policy.allows_scheme("data"), "Data URLs rejected");
    }

    #[test]
    fn test_custom_policy_overrides_defaults() {
        // Arrange: text formatting only, no links or images
        let policy = Policy::custom(
            &["p", "strong", "em"],
            &[],
            &["https"],
        );

        // Act & Assert
        assert!(policy.allows_tag("strong"));
        assert!(!policy.allows_tag("a"), "Custom list drops anchors");
        assert!(!policy.allows_tag("img"), "Custom list drops images");
        assert!(!policy.allows_attribute("a", "href"));
        assert!(policy.allows_scheme("https"));
        assert!(!policy.allows_scheme("http"), "Custom schemes replace defaults");
    }

    #[test]
    fn test_collection_views_match_constants() {
        // Arrange
        let policy = Policy::new();

        // Act
        let tags = policy.tag_set();
        let attrs = policy.attribute_map();
        let schemes = policy.scheme_set();

        // Assert
        assert_eq!(tags.len(), ALLOWED_TAGS.len(), "No duplicate tags");
        assert_eq!(attrs.len(), ALLOWED_ATTRIBUTES.len());
        assert_eq!(schemes.len(), ALLOWED_PROTOCOLS.len());
        assert!(attrs["a"].contains("title"));
    }
}
