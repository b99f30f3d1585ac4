//! Allow-list HTML sanitization.
//!
//! Wraps an [`ammonia::Builder`] configured once from a [`Policy`]. Disallowed
//! elements are stripped, not escaped: the element is unwrapped and its text
//! content kept, except `<script>` and `<style>` whose bodies are dropped
//! entirely. `href`/`src` values with a scheme outside the allow-list lose the
//! attribute; relative URLs pass through.

use std::collections::HashSet;

use crate::policy::Policy;

/// HTML sanitizer enforcing the allow-list policy.
///
/// Construction walks the policy once; cleaning is a pure transformation over
/// an immutable builder, so a single instance is safe to share across threads.
pub struct HtmlSanitizer {
    cleaner: ammonia::Builder<'static>,
}

impl HtmlSanitizer {
    /// Creates a sanitizer from the given allow-list policy.
    ///
    /// Beyond the policy allow-lists, the cleaner strips HTML comments and
    /// forces `target="_blank"` onto every surviving anchor so links open in a
    /// new tab. `rel` is not injected; it is outside the attribute allow-list
    /// and forcing only `target` keeps repeated sanitization a fixpoint.
    ///
    /// # Arguments
    ///
    /// * `policy`: Allow-lists for tags, attributes, and URL schemes
    pub fn new(policy: &Policy) -> Self {
        let mut cleaner = ammonia::Builder::default();
        cleaner
            .tags(policy.tag_set())
            .tag_attributes(policy.attribute_map())
            .generic_attributes(HashSet::new())
            .url_schemes(policy.scheme_set())
            .link_rel(None)
            .set_tag_attribute_value("a", "target", "_blank")
            .strip_comments(true);
        Self { cleaner }
    }

    /// Sanitizes an HTML fragment against the allow-lists.
    ///
    /// # Arguments
    ///
    /// * `html`: Untrusted HTML fragment
    ///
    /// # Returns
    ///
    /// HTML containing only allow-listed tags, attributes, and URL schemes
    pub fn clean(&self, html: &str) -> String {
        self.cleaner.clean(html).to_string()
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new(&Policy::new())
    }
}
