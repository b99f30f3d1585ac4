//! Markdown rendering with allow-list sanitization.

use anyhow::{Context, Result};
use comrak::Options;
use std::path::Path;

use crate::policy::Policy;
use crate::sanitize::HtmlSanitizer;

use super::Linkifier;

/// Renders untrusted Markdown to sanitized HTML.
///
/// Runs a three-stage pipeline: comrak parses the Markdown (tables, fenced
/// code blocks, hard line breaks), the allow-list sanitizer strips everything
/// outside the policy, and the linkifier wraps bare URLs in anchors. The
/// output is safe to embed in a page without further escaping.
///
/// The renderer holds no mutable state; one instance can serve many threads.
pub struct SafeMarkdownRenderer<'a> {
    options: Options<'a>,
    sanitizer: HtmlSanitizer,
    linkifier: Linkifier,
}

impl<'a> SafeMarkdownRenderer<'a> {
    /// Creates a renderer with the default allow-list policy.
    ///
    /// Comrak is configured with:
    /// - Tables extension
    /// - Hard line breaks (a single newline becomes `<br>`)
    /// - Raw HTML passed through unmodified, so the sanitizer sees it and
    ///   strips it; escaping at parse time would defeat strip semantics
    ///
    /// Fenced code blocks are core CommonMark and need no extension; comrak
    /// tags them with a `language-*` class that the attribute allow-list
    /// preserves for client-side syntax highlighters.
    pub fn new() -> Self {
        Self::with_policy(&Policy::new())
    }

    /// Creates a renderer enforcing the given allow-list policy.
    ///
    /// # Arguments
    ///
    /// * `policy`: Allow-lists for tags, attributes, and URL schemes
    pub fn with_policy(policy: &Policy) -> Self {
        let mut options = Options::default();

        options.extension.table = true;
        options.render.hardbreaks = true;
        // Raw HTML is stripped in the sanitize stage, not escaped here
        options.render.r#unsafe = true;

        Self {
            options,
            sanitizer: HtmlSanitizer::new(policy),
            linkifier: Linkifier::new(),
        }
    }

    /// Renders Markdown content to sanitized HTML.
    ///
    /// Empty input returns an empty string without touching the pipeline.
    /// Malformed Markdown degrades to literal text per CommonMark fallback;
    /// this function never fails and never panics on any input.
    ///
    /// # Arguments
    ///
    /// * `markdown`: Untrusted Markdown text
    ///
    /// # Returns
    ///
    /// HTML containing only allow-listed tags, attributes, and URL schemes
    pub fn render(&self, markdown: &str) -> String {
        if markdown.is_empty() {
            return String::new();
        }

        let html = comrak::markdown_to_html(markdown, &self.options);
        let clean = self.sanitizer.clean(&html);
        self.linkifier.linkify(&clean)
    }

    /// Renders optional Markdown content, treating `None` as empty input.
    ///
    /// # Arguments
    ///
    /// * `markdown`: Untrusted Markdown text, possibly absent
    pub fn render_opt(&self, markdown: Option<&str>) -> String {
        markdown.map_or_else(String::new, |text| self.render(text))
    }

    /// Sanitizes and linkifies an HTML fragment without Markdown parsing.
    ///
    /// For callers that already hold HTML, for example re-sanitizing stored
    /// content on display. Output of [`render`](Self::render) is a fixpoint
    /// of this operation.
    ///
    /// # Arguments
    ///
    /// * `html`: Untrusted HTML fragment
    pub fn sanitize_html(&self, html: &str) -> String {
        let clean = self.sanitizer.clean(html);
        self.linkifier.linkify(&clean)
    }

    /// Renders a Markdown file at the given path.
    ///
    /// Convenience method that reads the file and renders its content.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to Markdown file
    ///
    /// # Returns
    ///
    /// Sanitized HTML string
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read markdown file")?;
        Ok(self.render(&content))
    }
}

impl<'a> Default for SafeMarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
